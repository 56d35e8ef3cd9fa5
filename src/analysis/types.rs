//! Analysis Types
//!
//! Input and output types for the analysis client: the user's reflection,
//! optional sleep metrics, and the structured `NightAnalysis` result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The user's free-text account of their sleep and dreams.
///
/// Always non-empty and trimmed; construct it with [`Reflection::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection(String);

impl Reflection {
    /// Trim the text and reject it if nothing is left
    pub fn new(text: impl AsRef<str>) -> Result<Self, ReflectionError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReflectionError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reflection validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectionError {
    #[error("Please describe your sleep and dreams first.")]
    Empty,
}

/// Optional sleep measurements sent alongside a reflection.
///
/// Sparse: every field may be absent, and absent fields are left out of
/// the outbound payload. Measurements without a dedicated field go in
/// `extra` under their own name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sleep_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<f64>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, f64>,
}

impl SleepMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set total sleep duration in hours
    pub fn total_sleep_hours(mut self, hours: f64) -> Self {
        self.total_sleep_hours = Some(hours);
        self
    }

    /// Set the number of times the sleeper woke up
    pub fn wake_count(mut self, count: u32) -> Self {
        self.wake_count = Some(count);
        self
    }

    /// Set average heart rate in bpm
    pub fn avg_heart_rate(mut self, bpm: f64) -> Self {
        self.avg_heart_rate = Some(bpm);
        self
    }

    /// Add a named measurement.
    ///
    /// Names that have a dedicated field (`totalSleepHours`, `wakeCount`,
    /// `avgHeartRate`) set that field, so no key is sent twice. A wake
    /// count is rounded to a whole, non-negative number.
    pub fn measurement(mut self, name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        match name.as_str() {
            "totalSleepHours" => self.total_sleep_hours = Some(value),
            "wakeCount" => self.wake_count = Some(value.max(0.0).round() as u32),
            "avgHeartRate" => self.avg_heart_rate = Some(value),
            _ => {
                self.extra.insert(name, value);
            }
        }
        self
    }

    /// True when no measurement is present
    pub fn is_empty(&self) -> bool {
        self.total_sleep_hours.is_none()
            && self.wake_count.is_none()
            && self.avg_heart_rate.is_none()
            && self.extra.is_empty()
    }
}

/// Structured result of a night analysis.
///
/// Only `title`, `colors` and `summary` are checked when decoding; the
/// remaining fields are passed through as the service returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightAnalysis {
    pub title: String,

    #[serde(default)]
    pub emotions: Vec<String>,

    #[serde(default)]
    pub themes: Vec<String>,

    /// Expected on a 0-10 scale, not enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,

    /// CSS colour expressions, in palette order
    pub colors: Vec<String>,

    pub summary: String,

    #[serde(default)]
    pub gentle_note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflection_is_trimmed() {
        let reflection = Reflection::new("  flew over the sea \n").unwrap();
        assert_eq!(reflection.as_str(), "flew over the sea");
    }

    #[test]
    fn test_whitespace_reflection_rejected() {
        assert_eq!(Reflection::new(" \t\n "), Err(ReflectionError::Empty));
        assert_eq!(Reflection::new(""), Err(ReflectionError::Empty));
    }

    #[test]
    fn test_empty_metrics() {
        assert!(SleepMetrics::new().is_empty());
        assert!(!SleepMetrics::new().wake_count(2).is_empty());
        assert!(!SleepMetrics::new().measurement("deepSleepHours", 1.5).is_empty());
    }

    #[test]
    fn test_metrics_omit_absent_fields() {
        let metrics = SleepMetrics::new()
            .total_sleep_hours(6.5)
            .measurement("remMinutes", 80.0);

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"totalSleepHours": 6.5, "remMinutes": 80.0})
        );
    }

    #[test]
    fn test_known_measurement_names_set_their_field() {
        let metrics = SleepMetrics::new()
            .wake_count(1)
            .measurement("wakeCount", 3.0)
            .measurement("avgHeartRate", 58.0);

        assert_eq!(metrics.wake_count, Some(3));
        assert_eq!(metrics.avg_heart_rate, Some(58.0));
        assert!(metrics.extra.is_empty());

        let json = serde_json::to_string(&metrics).unwrap();
        assert_eq!(json.matches("wakeCount").count(), 1);
    }

    #[test]
    fn test_analysis_uses_camel_case_keys() {
        let analysis = NightAnalysis {
            title: "T".to_string(),
            emotions: vec![],
            themes: vec![],
            intensity: None,
            colors: vec!["#000".to_string()],
            summary: "S".to_string(),
            gentle_note: "N".to_string(),
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["gentleNote"], "N");
        assert!(json.get("intensity").is_none());
    }
}
