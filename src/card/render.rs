//! Card Layout
//!
//! Lays out a `NightAnalysis` as a `NightCard` view description.
//! Pure: the same analysis always gives the same card.

use serde::Serialize;
use std::fmt;

use super::gradient::Background;
use crate::analysis::NightAnalysis;

/// Width of the intensity bar in the plain-text rendering
const TEXT_BAR_WIDTH: usize = 20;

/// Everything needed to draw one card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NightCard {
    pub background: Background,
    pub title: String,
    pub summary: String,
    /// Omitted when there are no emotions
    pub emotions: Option<TagGroup>,
    /// Omitted when there are no themes
    pub themes: Option<TagGroup>,
    /// Omitted when the analysis has no intensity
    pub intensity: Option<IntensityMeter>,
    /// Always present, possibly empty
    pub gentle_note: String,
}

/// A labelled group of tags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagGroup {
    pub label: &'static str,
    pub tags: Vec<String>,
}

impl TagGroup {
    fn non_empty(label: &'static str, tags: &[String]) -> Option<Self> {
        (!tags.is_empty()).then(|| Self {
            label,
            tags: tags.to_vec(),
        })
    }
}

/// Intensity bar on a 0-10 scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityMeter {
    /// Raw value as returned by the analysis
    pub value: f64,
    /// Filled share of the bar, clamped to 0-100
    pub fill_percent: f64,
    /// Raw value followed by `/10`
    pub label: String,
}

impl IntensityMeter {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            fill_percent: f64::min(100.0, f64::max(0.0, value * 10.0)),
            label: format!("{}/10", value),
        }
    }
}

/// Lay out an analysis as a card
pub fn render(analysis: &NightAnalysis) -> NightCard {
    NightCard {
        background: Background::from_colors(&analysis.colors),
        title: analysis.title.clone(),
        summary: analysis.summary.clone(),
        emotions: TagGroup::non_empty("Emotions:", &analysis.emotions),
        themes: TagGroup::non_empty("Themes:", &analysis.themes),
        intensity: analysis.intensity.map(IntensityMeter::new),
        gentle_note: analysis.gentle_note.clone(),
    }
}

impl NightCard {
    /// CSS value for the card's `background` property
    pub fn background_css(&self) -> String {
        self.background.to_css()
    }

    /// Tag groups in display order, skipping omitted ones
    pub fn tag_groups(&self) -> impl Iterator<Item = &TagGroup> {
        self.emotions.iter().chain(self.themes.iter())
    }
}

/// Plain-text rendering for terminals
impl fmt::Display for NightCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count().max(1)))?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;

        if self.emotions.is_some() || self.themes.is_some() {
            writeln!(f)?;
        }
        for group in self.tag_groups() {
            writeln!(f, "{} {}", group.label, group.tags.join(", "))?;
        }

        if let Some(meter) = &self.intensity {
            let filled = (meter.fill_percent / 100.0 * TEXT_BAR_WIDTH as f64).round() as usize;
            writeln!(f)?;
            writeln!(
                f,
                "Intensity: [{}{}] {}",
                "#".repeat(filled),
                "-".repeat(TEXT_BAR_WIDTH - filled),
                meter.label
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.gentle_note)?;
        writeln!(f)?;
        write!(f, "Palette: {}", self.background)
    }
}
