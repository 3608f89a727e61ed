//! Markdown rendering helpers for note content.
//!
//! Two renderers live here. [`link_segments`] is the lightweight one used by
//! note cards: a single linear scan that splits content into plain text and
//! clickable `[label](url)` links, with no escaping and no nested-bracket
//! handling. [`render_html`] is the full CommonMark renderer used by the
//! view dialog. The shell must gate every link through [`is_openable_url`]
//! before handing it to the system opener.

use pulldown_cmark::{html as md_html, Options, Parser};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One run of note content: either plain text or a clickable link label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    /// Plain text between links.
    Text { text: String },
    /// A clickable label bound to a URL.
    Link { label: String, url: String },
}

/// Inline Markdown link pattern: `[label](url)`, label and url non-empty.
fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap())
}

/// Splits `content` into alternating text and link segments.
///
/// Text between matches becomes [`Segment::Text`]; empty gaps (a link at the
/// start, adjacent links, nothing after the last link) produce no segment.
/// Content without any link yields a single text segment, even when empty.
#[must_use]
pub fn link_segments(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in link_pattern().captures_iter(content) {
        let whole = caps.get(0).unwrap();
        if whole.start() > last_end {
            segments.push(Segment::Text {
                text: content[last_end..whole.start()].to_string(),
            });
        }
        segments.push(Segment::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        last_end = whole.end();
    }

    if last_end < content.len() || segments.is_empty() {
        segments.push(Segment::Text {
            text: content[last_end..].to_string(),
        });
    }

    segments
}

/// Returns whether a link URL may be handed to the system opener.
///
/// Only http and https are allowed; anything else (`file:`, `javascript:`,
/// scheme-less strings) is refused.
#[must_use]
pub fn is_openable_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

/// Converts a CommonMark markdown string to an HTML string.
///
/// Enables strikethrough and tables (GFM extensions). The result is raw
/// HTML — the frontend sanitises it before insertion into the DOM.
#[must_use]
pub fn render_html(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    md_html::push_html(&mut html_output, parser);
    html_output
}
