//! Night Card Rendering
//!
//! Turns a validated `NightAnalysis` into a card: a gradient background
//! derived from the palette, the title and summary, optional tag groups and
//! intensity meter, and the gentle note.

mod gradient;
mod html;
mod render;

pub use gradient::{Background, ColorStop, FALLBACK_COLORS, GRADIENT_ANGLE_DEG};
pub use html::{card_html, escape_html};
pub use render::{render, IntensityMeter, NightCard, TagGroup};
