//! Response Decoding
//!
//! Turns the completion text returned by the model into a `NightAnalysis`.
//! Only `title`, `colors` and `summary` are checked. The optional fields are
//! taken as far as they make sense and otherwise left empty, so the card
//! simply omits their sections.

use serde_json::{Map, Value};

use super::error::AnalysisError;
use super::types::NightAnalysis;

/// Decode and validate the completion content
pub fn decode_analysis(content: &str) -> Result<NightAnalysis, AnalysisError> {
    let value: Value =
        serde_json::from_str(content).map_err(|_| AnalysisError::MalformedResponse)?;

    let fields = match value {
        Value::Object(fields) => fields,
        _ => {
            return Err(AnalysisError::InvalidShape {
                field: "$",
                reason: "is not a JSON object",
            })
        }
    };

    let title = required_text(&fields, "title")?;
    let colors = required_colors(&fields)?;
    let summary = required_text(&fields, "summary")?;

    Ok(NightAnalysis {
        title,
        emotions: lenient_list(&fields, "emotions"),
        themes: lenient_list(&fields, "themes"),
        intensity: lenient_number(&fields, "intensity"),
        colors,
        summary,
        gentle_note: lenient_text(&fields, "gentleNote").unwrap_or_default(),
    })
}

fn present<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field).filter(|v| !v.is_null())
}

fn required_text(fields: &Map<String, Value>, field: &'static str) -> Result<String, AnalysisError> {
    match present(fields, field) {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        Some(Value::String(_)) => Err(AnalysisError::InvalidShape {
            field,
            reason: "is empty",
        }),
        Some(_) => Err(AnalysisError::InvalidShape {
            field,
            reason: "is not a string",
        }),
        None => Err(AnalysisError::InvalidShape {
            field,
            reason: "is missing",
        }),
    }
}

fn required_colors(fields: &Map<String, Value>) -> Result<Vec<String>, AnalysisError> {
    let items = match present(fields, "colors") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(AnalysisError::InvalidShape {
                field: "colors",
                reason: "is not an array",
            })
        }
        None => {
            return Err(AnalysisError::InvalidShape {
                field: "colors",
                reason: "is missing",
            })
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(AnalysisError::InvalidShape {
                field: "colors",
                reason: "contains a non-string entry",
            }),
        })
        .collect()
}

/// String entries of an array; anything else yields an empty list
fn lenient_list(fields: &Map<String, Value>, field: &str) -> Vec<String> {
    match present(fields, field) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn lenient_text(fields: &Map<String, Value>, field: &str) -> Option<String> {
    present(fields, field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// A JSON number, or a string holding one
fn lenient_number(fields: &Map<String, Value>, field: &str) -> Option<f64> {
    match present(fields, field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r##"{
        "title": "T",
        "emotions": [],
        "themes": ["flying"],
        "intensity": 7,
        "colors": ["#111", "#222", "#333"],
        "summary": "S",
        "gentleNote": "N"
    }"##;

    #[test]
    fn test_well_formed_passes_through_unchanged() {
        let analysis = decode_analysis(WELL_FORMED).unwrap();

        assert_eq!(
            analysis,
            NightAnalysis {
                title: "T".to_string(),
                emotions: vec![],
                themes: vec!["flying".to_string()],
                intensity: Some(7.0),
                colors: vec!["#111".to_string(), "#222".to_string(), "#333".to_string()],
                summary: "S".to_string(),
                gentle_note: "N".to_string(),
            }
        );
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = decode_analysis("not json").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse));
    }

    #[test]
    fn test_missing_colors_is_invalid_shape() {
        let err = decode_analysis(r#"{"title": "T", "summary": "S"}"#).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidShape { field: "colors", .. }
        ));
    }

    #[test]
    fn test_empty_title_is_invalid_shape() {
        let err = decode_analysis(r#"{"title": "", "colors": [], "summary": "S"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidShape { field: "title", .. }));
    }

    #[test]
    fn test_null_summary_is_missing() {
        let err =
            decode_analysis(r#"{"title": "T", "colors": ["red"], "summary": null}"#).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidShape {
                field: "summary",
                reason: "is missing"
            }
        ));
    }

    #[test]
    fn test_non_object_is_invalid_shape() {
        let err = decode_analysis("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidShape { field: "$", .. }));
    }

    #[test]
    fn test_empty_colors_accepted() {
        let analysis = decode_analysis(r#"{"title": "T", "colors": [], "summary": "S"}"#).unwrap();
        assert!(analysis.colors.is_empty());
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let analysis =
            decode_analysis(r#"{"title": "T", "colors": ["red"], "summary": "S", "intensity": null}"#)
                .unwrap();

        assert!(analysis.emotions.is_empty());
        assert!(analysis.themes.is_empty());
        assert_eq!(analysis.intensity, None);
        assert_eq!(analysis.gentle_note, "");
    }

    #[test]
    fn test_out_of_range_intensity_kept_raw() {
        let analysis =
            decode_analysis(r#"{"title": "T", "colors": ["red"], "summary": "S", "intensity": 14.5}"#)
                .unwrap();
        assert_eq!(analysis.intensity, Some(14.5));
    }

    #[test]
    fn test_numeric_string_intensity_accepted() {
        let analysis =
            decode_analysis(r#"{"title": "T", "colors": ["red"], "summary": "S", "intensity": "7"}"#)
                .unwrap();
        assert_eq!(analysis.intensity, Some(7.0));
    }

    #[test]
    fn test_unusable_intensity_dropped() {
        let analysis = decode_analysis(
            r#"{"title": "T", "colors": ["red"], "summary": "S", "intensity": {"level": 7}}"#,
        )
        .unwrap();
        assert_eq!(analysis.intensity, None);

        let analysis = decode_analysis(
            r#"{"title": "T", "colors": ["red"], "summary": "S", "intensity": "very"}"#,
        )
        .unwrap();
        assert_eq!(analysis.intensity, None);
    }

    #[test]
    fn test_non_string_tags_dropped() {
        let analysis = decode_analysis(
            r#"{"title": "T", "colors": ["red"], "summary": "S", "emotions": ["calm", 3], "themes": "flying"}"#,
        )
        .unwrap();
        assert_eq!(analysis.emotions, vec!["calm".to_string()]);
        assert!(analysis.themes.is_empty());
    }

    #[test]
    fn test_non_string_note_becomes_empty() {
        let analysis = decode_analysis(
            r#"{"title": "T", "colors": ["red"], "summary": "S", "gentleNote": 5}"#,
        )
        .unwrap();
        assert_eq!(analysis.gentle_note, "");
    }

    #[test]
    fn test_colors_must_be_an_array() {
        let err = decode_analysis(r#"{"title": "T", "colors": "red", "summary": "S"}"#).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidShape {
                field: "colors",
                reason: "is not an array"
            }
        ));
    }
}
