//! Gradient Derivation
//!
//! Maps an ordered colour list to a CSS background:
//! - no colours: the fixed fallback gradient
//! - one colour: a flat fill
//! - two or more: a 135° linear gradient with evenly spaced stops

use serde::Serialize;
use std::fmt;

/// Angle of every derived gradient, in degrees
pub const GRADIENT_ANGLE_DEG: u16 = 135;

/// Colours used when the analysis has none
pub const FALLBACK_COLORS: [&str; 2] = ["#667eea", "#764ba2"];

/// A colour pinned at a position along the gradient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub color: String,
    /// Position in percent, 0 to 100
    pub position: f64,
}

/// Card background
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    Solid { color: String },
    LinearGradient { angle_deg: u16, stops: Vec<ColorStop> },
}

impl Background {
    /// Derive the background for a colour list
    pub fn from_colors(colors: &[String]) -> Self {
        match colors {
            [] => Background::LinearGradient {
                angle_deg: GRADIENT_ANGLE_DEG,
                stops: evenly_spaced(FALLBACK_COLORS.iter().copied()),
            },
            [color] => Background::Solid {
                color: color.clone(),
            },
            _ => Background::LinearGradient {
                angle_deg: GRADIENT_ANGLE_DEG,
                stops: evenly_spaced(colors.iter().map(String::as_str)),
            },
        }
    }

    /// CSS value for the `background` property
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Solid { color } => f.write_str(color),
            Background::LinearGradient { angle_deg, stops } => {
                write!(f, "linear-gradient({}deg", angle_deg)?;
                for stop in stops {
                    write!(f, ", {} {}%", stop.color, stop.position)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Place colours at `i / (n - 1) * 100` percent, keeping their order
fn evenly_spaced<'a>(colors: impl ExactSizeIterator<Item = &'a str>) -> Vec<ColorStop> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .enumerate()
        .map(|(i, color)| ColorStop {
            color: color.to_string(),
            position: i as f64 / last * 100.0,
        })
        .collect()
}
