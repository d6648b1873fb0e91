//! Reply text formatting.
//!
//! Turns the raw reply text from the analysis endpoint into an ordered
//! sequence of typed content blocks ready for rendering. The dialect is
//! deliberately small: `###` headings, `*` bullets, `**bold**` inline runs,
//! and the `**DISCLAIMER` line the service puts in front of medical advice.
//! Every other non-blank line is a plain paragraph.
//!
//! Formatting is pure and total. No input faults; malformed markers degrade
//! into plain text, and the worst case is an empty block sequence. Each line
//! is classified on its own, so no state ever crosses lines.

use serde::{Deserialize, Serialize};

/// Line prefix that marks the disclaimer variant.
const DISCLAIMER_PREFIX: &str = "**DISCLAIMER";

/// One inline fragment of a formatted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Unstyled text, kept verbatim (including any unmatched asterisks).
    Plain { text: String },
    /// Text that sat between a matched pair of `**` markers.
    Bold { text: String },
}

impl InlineSpan {
    fn plain(text: impl Into<String>) -> Self {
        InlineSpan::Plain { text: text.into() }
    }

    fn bold(text: impl Into<String>) -> Self {
        InlineSpan::Bold { text: text.into() }
    }

    /// The span's text without markers.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain { text } | InlineSpan::Bold { text } => text,
        }
    }

    /// The span's source form, `**` markers restored around bold runs.
    ///
    /// Concatenating `source_text` over a line's spans reconstructs the
    /// decomposed input exactly.
    pub fn source_text(&self) -> String {
        match self {
            InlineSpan::Plain { text } => text.clone(),
            InlineSpan::Bold { text } => format!("**{text}**"),
        }
    }
}

/// One structural unit of formatted reply output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A `###` line. Heading text is taken literally, markers stripped;
    /// inline spans are not parsed inside headings.
    Heading { text: String },
    /// A `*` list item.
    Bullet { spans: Vec<InlineSpan> },
    /// A `**DISCLAIMER` line with every asterisk removed.
    Disclaimer { text: String },
    /// Any other non-blank line.
    Paragraph { spans: Vec<InlineSpan> },
}

/// Format reply text into an ordered block sequence.
///
/// Lines are classified in precedence order: heading, disclaimer, bullet,
/// paragraph. Blank lines produce no block. Ordering always matches the
/// source line order.
pub fn format_reply(text: &str) -> Vec<ContentBlock> {
    text.lines().filter_map(classify_line).collect()
}

/// Classify one raw line, or `None` for blank lines.
fn classify_line(raw: &str) -> Option<ContentBlock> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    let block = if let Some(rest) = line.strip_prefix("###") {
        ContentBlock::Heading {
            text: rest.trim_start().to_string(),
        }
    } else if line.starts_with(DISCLAIMER_PREFIX) {
        ContentBlock::Disclaimer {
            text: line.replace('*', ""),
        }
    } else if let Some(rest) = line.strip_prefix('*') {
        ContentBlock::Bullet {
            spans: split_spans(rest.trim_start()),
        }
    } else {
        ContentBlock::Paragraph {
            spans: split_spans(line),
        }
    };
    Some(block)
}

/// Split line text into plain and bold spans.
///
/// A bold run is the shortest stretch between a `**` pair, scanning left to
/// right. Everything else stays verbatim, so re-concatenating the spans
/// (markers restored around bold) reproduces the input exactly. A dangling
/// `**` with no closer ends the scan: the rest of the line, marker included,
/// becomes one trailing plain span. A pair with nothing between the markers
/// stays plain text. Empty fragments produce no span.
pub fn split_spans(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest = text;

    loop {
        let Some(open) = rest.find("**") else { break };
        let Some(close) = rest[open + 2..].find("**").map(|i| open + 2 + i) else {
            break;
        };

        if open > 0 {
            spans.push(InlineSpan::plain(&rest[..open]));
        }
        let body = &rest[open + 2..close];
        if body.is_empty() {
            spans.push(InlineSpan::plain("****"));
        } else {
            spans.push(InlineSpan::bold(body));
        }
        rest = &rest[close + 2..];
    }

    if !rest.is_empty() {
        spans.push(InlineSpan::plain(rest));
    }
    spans
}
