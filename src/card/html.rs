//! HTML Rendering
//!
//! Markup for a `NightCard`. Every value that came from the model is
//! escaped, including the colours placed in the inline style.

use std::fmt::Write;

use super::render::NightCard;

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the card as an HTML fragment
pub fn card_html(card: &NightCard) -> String {
    let mut html = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        html,
        r#"<div class="night-card" style="background: {}">"#,
        escape_html(&card.background_css())
    );
    html.push_str("  <div class=\"night-card-content\">\n");
    let _ = writeln!(
        html,
        r#"    <h2 class="night-card-title">{}</h2>"#,
        escape_html(&card.title)
    );
    let _ = writeln!(
        html,
        r#"    <p class="night-card-summary">{}</p>"#,
        escape_html(&card.summary)
    );

    html.push_str("    <div class=\"night-card-tags\">\n");
    for group in card.tag_groups() {
        html.push_str("      <div class=\"tag-group\">\n");
        let _ = writeln!(
            html,
            r#"        <span class="tag-label">{}</span>"#,
            escape_html(group.label)
        );
        html.push_str("        <div class=\"tags\">");
        for tag in &group.tags {
            let _ = write!(html, r#"<span class="tag">{}</span>"#, escape_html(tag));
        }
        html.push_str("</div>\n      </div>\n");
    }
    html.push_str("    </div>\n");

    if let Some(meter) = &card.intensity {
        html.push_str("    <div class=\"intensity-section\">\n");
        html.push_str("      <span class=\"intensity-label\">Intensity:</span>\n");
        let _ = writeln!(
            html,
            r#"      <div class="intensity-bar"><div class="intensity-fill" style="width: {}%"></div></div>"#,
            meter.fill_percent
        );
        let _ = writeln!(
            html,
            r#"      <span class="intensity-value">{}</span>"#,
            escape_html(&meter.label)
        );
        html.push_str("    </div>\n");
    }

    let _ = writeln!(
        html,
        r#"    <p class="night-card-note">{}</p>"#,
        escape_html(&card.gentle_note)
    );
    html.push_str("  </div>\n</div>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::NightAnalysis;
    use crate::card::render;

    fn analysis() -> NightAnalysis {
        NightAnalysis {
            title: "Night <of> Glass".to_string(),
            emotions: vec![],
            themes: vec!["flying".to_string()],
            intensity: Some(7.0),
            colors: vec!["#111".to_string(), "#222".to_string(), "#333".to_string()],
            summary: "S".to_string(),
            gentle_note: String::new(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_card_markup() {
        let html = card_html(&render(&analysis()));

        assert!(html.contains(
            r#"style="background: linear-gradient(135deg, #111 0%, #222 50%, #333 100%)""#
        ));
        assert!(html.contains("Night &lt;of&gt; Glass"));
        assert!(html.contains(r#"<span class="tag-label">Themes:</span>"#));
        assert!(!html.contains("Emotions:"));
        assert!(html.contains(r#"<span class="tag">flying</span>"#));
        assert!(html.contains(r#"style="width: 70%""#));
        assert!(html.contains(r#"<span class="intensity-value">7/10</span>"#));
        assert!(html.contains(r#"<p class="night-card-note"></p>"#));
    }

    #[test]
    fn test_hostile_color_cannot_break_style_attribute() {
        let mut analysis = analysis();
        analysis.colors = vec![r#"red" onload="alert(1)"#.to_string()];

        let html = card_html(&render(&analysis));
        assert!(html.contains("background: red&quot; onload=&quot;alert(1)"));
        assert!(!html.contains(r#"" onload=""#));
    }

    #[test]
    fn test_no_intensity_section_without_value() {
        let mut analysis = analysis();
        analysis.intensity = None;
        assert!(!card_html(&render(&analysis)).contains("intensity-section"));
    }
}
