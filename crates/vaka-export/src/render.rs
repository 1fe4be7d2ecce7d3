//! HTML rendering.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use vaka_core::entities::Case;

use crate::kind::DocumentKind;

const PRINT_CSS: &str = r"
@page { size: A4; margin: 2cm; }
body { font-family: 'Times New Roman', serif; font-size: 12pt; line-height: 1.6; }
h1, h2, h3 { font-family: Arial, sans-serif; color: #2c3e50; }
.header { text-align: center; border-bottom: 2px solid #3498db; padding-bottom: 10px; margin-bottom: 30px; }
.content pre { font-family: inherit; white-space: pre-wrap; margin: 0; }
.signature { margin-top: 50px; text-align: right; }
.footer { text-align: center; font-size: 10pt; color: #7f8c8d; margin-top: 50px; }
";

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text and attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Wrap plain-text `content` in the print layout for `kind`: letterhead,
/// escaped content, signature block and a footer stamped with
/// `generated_at` (`dd.mm.yyyy HH:MM`).
#[must_use]
pub fn format_for_printing(content: &str, kind: DocumentKind, generated_at: DateTime<Utc>) -> String {
    let mut html = String::new();
    html.push_str(kind.header_html());
    let _ = write!(
        html,
        "<div class=\"content\">\n<pre>{}</pre>\n</div>\n",
        escape_html(content)
    );
    html.push_str(concat!(
        "<div class=\"signature\">\n",
        "  <p>İmza:</p>\n",
        "  <p>___________________</p>\n",
        "  <p>Ad Soyad / Unvan</p>\n",
        "</div>\n",
    ));
    let _ = write!(
        html,
        "<div class=\"footer\">\n  <p>Generated by vaka {}</p>\n  <p>Generated at: {}</p>\n</div>\n",
        env!("CARGO_PKG_VERSION"),
        generated_at.format("%d.%m.%Y %H:%M")
    );
    html
}

/// A standalone UTF-8 HTML document for one case, ready for a browser or
/// the print queue.
#[must_use]
pub fn render_case(case: &Case, kind: DocumentKind, generated_at: DateTime<Utc>) -> String {
    let body = format_for_printing(&case.sheet().body(), kind, generated_at);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{} | {}</title>\n<style>{PRINT_CSS}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(case.id()),
        escape_html(&case.title),
    )
}
