//! Page Rendering
//!
//! Full HTML page for a shell state: input form, error region, and the card
//! region, which is mounted only when there is a result.

use std::fmt::Write;

use super::state::ShellState;
use crate::card::{card_html, escape_html};

pub const PAGE_TITLE: &str = "Dream Palette";
pub const INPUT_PLACEHOLDER: &str = "Describe how you slept and what you dreamed...";
pub const BUTTON_LABEL: &str = "Generate my night";
pub const BUTTON_LABEL_LOADING: &str = "Generating...";

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; background: #14141f; color: #f4f4f8; margin: 0; }
.app { max-width: 640px; margin: 0 auto; padding: 2rem 1rem; }
.app-title { text-align: center; font-weight: 300; letter-spacing: 0.05em; }
.dream-input { width: 100%; box-sizing: border-box; padding: 1rem; border-radius: 12px; border: none; font-size: 1rem; }
.generate-button { margin-top: 1rem; width: 100%; padding: 0.8rem; border-radius: 12px; border: none; font-size: 1rem; cursor: pointer; }
.generate-button:disabled { opacity: 0.6; cursor: wait; }
.error-message { margin-top: 1rem; padding: 0.8rem 1rem; border-radius: 12px; background: #5c1f2a; }
.night-card { margin-top: 2rem; border-radius: 20px; padding: 2rem; color: #fff; }
.night-card-title { margin-top: 0; }
.tag-group { margin: 0.5rem 0; }
.tag { display: inline-block; margin: 0.2rem; padding: 0.2rem 0.7rem; border-radius: 999px; background: rgba(255, 255, 255, 0.25); }
.intensity-bar { height: 8px; border-radius: 4px; background: rgba(255, 255, 255, 0.3); margin: 0.4rem 0; }
.intensity-fill { height: 100%; border-radius: 4px; background: #fff; }
.night-card-note { font-style: italic; }
"#;

/// Render the whole page for the given state
pub fn render_page(state: &ShellState) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    // Writing to a String cannot fail
    let _ = writeln!(html, "<title>{}</title>", PAGE_TITLE);
    let _ = writeln!(html, "<style>{}</style>", STYLESHEET);
    html.push_str("</head>\n<body>\n<div class=\"app\">\n");
    let _ = writeln!(html, "<h1 class=\"app-title\">{}</h1>", PAGE_TITLE);

    html.push_str("<form class=\"input-section\" method=\"post\" action=\"/\">\n");
    let _ = writeln!(
        html,
        "<textarea class=\"dream-input\" name=\"reflection\" rows=\"8\" placeholder=\"{}\">{}</textarea>",
        INPUT_PLACEHOLDER,
        escape_html(&state.input)
    );
    let _ = writeln!(
        html,
        "<button class=\"generate-button\" type=\"submit\"{}>{}</button>",
        if state.loading { " disabled" } else { "" },
        if state.loading {
            BUTTON_LABEL_LOADING
        } else {
            BUTTON_LABEL
        }
    );
    html.push_str("</form>\n");

    if let Some(error) = &state.error {
        let _ = writeln!(
            html,
            "<div class=\"error-message\">{}</div>",
            escape_html(error)
        );
    }

    if let Some(card) = state.card() {
        html.push_str(&card_html(&card));
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::NightAnalysis;

    #[test]
    fn test_empty_page() {
        let html = render_page(&ShellState::default());

        assert!(html.contains("<h1 class=\"app-title\">Dream Palette</h1>"));
        assert!(html.contains(INPUT_PLACEHOLDER));
        assert!(html.contains(">Generate my night</button>"));
        assert!(!html.contains(" disabled"));
        assert!(!html.contains("class=\"error-message\""));
        assert!(!html.contains("class=\"night-card\""));
    }

    #[test]
    fn test_loading_disables_trigger() {
        let mut state = ShellState::with_input("night");
        state.submit();

        let html = render_page(&state);
        assert!(html.contains(" disabled>Generating...</button>"));
    }

    #[test]
    fn test_error_region_escaped() {
        let mut state = ShellState::with_input("<b>night</b>");
        state.fail("bad <thing>");

        let html = render_page(&state);
        assert!(html.contains("<div class=\"error-message\">bad &lt;thing&gt;</div>"));
        assert!(html.contains("&lt;b&gt;night&lt;/b&gt;</textarea>"));
        assert!(!html.contains("class=\"night-card\""));
    }

    #[test]
    fn test_result_mounts_card() {
        let mut state = ShellState::with_input("night");
        state.submit();
        state.succeed(NightAnalysis {
            title: "Tidal".to_string(),
            emotions: vec![],
            themes: vec![],
            intensity: None,
            colors: vec![],
            summary: "S".to_string(),
            gentle_note: "N".to_string(),
        });

        let html = render_page(&state);
        assert!(html.contains("class=\"night-card\""));
        assert!(html.contains("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"));
        assert!(html.contains("Tidal"));
        assert!(!html.contains("class=\"error-message\""));
    }
}
