//! Terminal rendering for analysis replies.
//!
//! Semantic blocks come from symcheck-core; this layer only applies
//! terminal styling. CLI and JSON output share the same block structure.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::json;
use std::time::Duration;
use symcheck_core::{format_reply, ContentBlock, InlineSpan, RequestState};

/// Footer printed under every successful analysis.
const SAFETY_FOOTER: &str =
    "This analysis is for educational purposes only and is not a medical diagnosis.";

/// Print the terminal state of a request.
///
/// Successful replies render as styled blocks on stdout; failures go to
/// stderr as a warning line. Idle and Loading print nothing.
pub fn print_state(state: &RequestState) {
    match state {
        RequestState::Succeeded { reply } => {
            println!("\n{}", "✓ Symptom Analysis Results".green().bold());
            print!("{}", render_blocks(&format_reply(reply)));
            println!("\n{}", SAFETY_FOOTER.dimmed());
        }
        RequestState::Failed { message } => print_warning(message),
        RequestState::Idle | RequestState::Loading => {}
    }
}

/// Print a warning line to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Render blocks into a styled string.
///
/// Headings get a blank line above them; bullets indent under whatever
/// came before.
pub fn render_blocks(blocks: &[ContentBlock]) -> String {
    let mut output = String::new();

    for block in blocks {
        match block {
            ContentBlock::Heading { text } => {
                output.push_str(&format!("\n{}\n", text.cyan().bold()));
            }
            ContentBlock::Bullet { spans } => {
                output.push_str(&format!("  {} {}\n", "•".magenta(), render_spans(spans)));
            }
            ContentBlock::Disclaimer { text } => {
                output.push_str(&format!("{}\n", text.red().bold()));
            }
            ContentBlock::Paragraph { spans } => {
                output.push_str(&format!("{}\n", render_spans(spans)));
            }
        }
    }

    output
}

fn render_spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Plain { text } => text.clone(),
            InlineSpan::Bold { text } => text.bold().to_string(),
        })
        .collect()
}

/// Spinner shown while a request is in flight.
pub fn analysis_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("analyzing symptoms...".to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// The terminal state plus its formatted blocks, as pretty JSON.
pub fn state_json(state: &RequestState) -> serde_json::Result<String> {
    let blocks = state.reply().map(format_reply);
    serde_json::to_string_pretty(&json!({
        "state": state,
        "blocks": blocks,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> InlineSpan {
        InlineSpan::Plain {
            text: text.to_string(),
        }
    }

    fn bold(text: &str) -> InlineSpan {
        InlineSpan::Bold {
            text: text.to_string(),
        }
    }

    #[test]
    fn blocks_render_in_reply_order() {
        let blocks = format_reply("### Summary\n* Take **rest** now\nSee a doctor.");
        let output = render_blocks(&blocks);

        let summary_at = output.find("Summary").unwrap();
        let rest_at = output.find("rest").unwrap();
        let doctor_at = output.find("See a doctor.").unwrap();
        assert!(summary_at < rest_at);
        assert!(rest_at < doctor_at);
    }

    #[test]
    fn bullets_carry_the_glyph() {
        let output = render_blocks(&[ContentBlock::Bullet {
            spans: vec![plain("hydrate")],
        }]);
        assert!(output.contains('•'));
        assert!(output.contains("hydrate"));
    }

    #[test]
    fn disclaimers_keep_their_text() {
        let output = render_blocks(&[ContentBlock::Disclaimer {
            text: "DISCLAIMER: not medical advice".to_string(),
        }]);
        assert!(output.contains("DISCLAIMER: not medical advice"));
    }

    #[test]
    fn bold_spans_stay_inline_with_their_neighbors() {
        let output = render_blocks(&[ContentBlock::Paragraph {
            spans: vec![plain("take "), bold("rest"), plain(" today")],
        }]);
        let take_at = output.find("take ").unwrap();
        let rest_at = output.find("rest").unwrap();
        let today_at = output.find(" today").unwrap();
        assert!(take_at < rest_at);
        assert!(rest_at < today_at);
    }

    #[test]
    fn state_json_includes_blocks_on_success() {
        let state = RequestState::Succeeded {
            reply: "### Advice".to_string(),
        };
        let output = state_json(&state).unwrap();
        assert!(output.contains("\"succeeded\""));
        assert!(output.contains("\"heading\""));
        assert!(output.contains("\"Advice\""));
    }

    #[test]
    fn state_json_has_null_blocks_on_failure() {
        let state = RequestState::Failed {
            message: "nope".to_string(),
        };
        let output = state_json(&state).unwrap();
        assert!(output.contains("\"failed\""));
        assert!(output.contains("\"blocks\": null"));
    }
}
