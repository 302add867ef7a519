//! Paragraph reconstructor and line filter (§4.7).
//!
//! Runs over the full document's (region, line) tree in document order,
//! rejecting lines that look like headers, footers, captions, or mojibake,
//! and joining the survivors into paragraphs with a small state machine.

use crate::config::PipelineConfig;
use crate::geometry::BBox;
use crate::layout::{Line, Region};
use crate::text::{allowlisted_ratio, remove_references};

const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?', '…', ':', ';'];
const CLOSING_QUOTES: &[char] = &['"', '”', '»'];
const CONTINUATION_GLYPHS: &[char] = &['-', '—', '\u{0002}'];
const PARAGRAPH_OPENERS: &[char] = &['-', '—'];

/// Per-line features computed against its region (§3 "Line feature vector").
#[derive(Debug, Clone, PartialEq)]
struct LineFeatures {
    non_word_initial_ratio: f32,
    lowercase_initial_ratio: f32,
    allowlisted_ratio: f32,
    too_left: bool,
    ends_abruptly: bool,
    ends_in_terminal_punctuation: bool,
    paragraph_start: bool,
}

fn ends_in_terminal_punctuation(text: &str) -> bool {
    if text.ends_with("...") {
        return true;
    }
    let mut chars: Vec<char> = text.chars().collect();
    let Some(&last) = chars.last() else {
        return false;
    };
    if CLOSING_QUOTES.contains(&last) {
        chars.pop();
        return matches!(chars.last(), Some(c) if TERMINAL_PUNCTUATION.contains(c));
    }
    TERMINAL_PUNCTUATION.contains(&last)
}

fn is_word_initial(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

fn token_ratios(text: &str) -> (f32, f32) {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return (0.0, 0.0);
    }
    let mut non_word = 0usize;
    let mut lowercase = 0usize;
    for token in &tokens {
        match token.chars().next() {
            Some(c) if c.is_lowercase() => lowercase += 1,
            Some(c) if !is_word_initial(c) => non_word += 1,
            _ => {}
        }
    }
    (
        non_word as f32 / tokens.len() as f32,
        lowercase as f32 / tokens.len() as f32,
    )
}

fn paragraph_start(text: &str) -> bool {
    match text.trim_start().chars().next() {
        Some(c) => c.is_uppercase() || PARAGRAPH_OPENERS.contains(&c),
        None => false,
    }
}

fn compute_features(
    stripped: &str,
    bbox: BBox,
    region: &Region,
    config: &PipelineConfig,
) -> LineFeatures {
    let (non_word_initial_ratio, lowercase_initial_ratio) = token_ratios(stripped);
    let region_width = region.bbox.width();
    let too_left =
        (bbox.left - region.bbox.left).abs() >= config.too_left_fraction * region_width;
    let ends_abruptly =
        (bbox.right - region.bbox.right).abs() >= config.ends_abruptly_margin;

    LineFeatures {
        non_word_initial_ratio,
        lowercase_initial_ratio,
        allowlisted_ratio: allowlisted_ratio(stripped),
        too_left,
        ends_abruptly,
        ends_in_terminal_punctuation: ends_in_terminal_punctuation(stripped),
        paragraph_start: paragraph_start(stripped),
    }
}

/// Reject a line per the acceptance gate of §4.7.
fn is_rejected(features: &LineFeatures, config: &PipelineConfig) -> bool {
    features.allowlisted_ratio <= config.allowlist_ratio_threshold
        || features.non_word_initial_ratio >= config.nonword_ratio_threshold
        || features.lowercase_initial_ratio < config.lowercase_ratio_threshold
        || (features.ends_abruptly && !features.ends_in_terminal_punctuation)
        || features.too_left
}

enum State {
    Idle,
    Building(String),
}

/// Join `stripped`'s text onto an open paragraph buffer, handling the
/// hyphen/em-dash/OCR-dash continuation rule.
fn append_continuation(buffer: &mut String, stripped: &str) {
    if let Some(last) = stripped.chars().last() {
        if CONTINUATION_GLYPHS.contains(&last) {
            buffer.push_str(&stripped[..stripped.len() - last.len_utf8()]);
            return;
        }
    }
    buffer.push_str(stripped);
    buffer.push(' ');
}

/// Run the full paragraph reconstructor over a document's regions (already
/// flattened across pages, in page then region-discovery order) and return
/// the scrubbed, newline-split output lines ready for the caller.
pub fn reconstruct(regions: &[(Region, Vec<Line>)], config: &PipelineConfig) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut state = State::Idle;

    for (region, lines) in regions {
        if lines.is_empty() {
            continue;
        }

        for line in lines {
            let stripped = line.text.trim().to_string();
            if stripped.is_empty() {
                continue;
            }
            let features = compute_features(&stripped, line.bbox, region, config);
            if is_rejected(&features, config) {
                continue;
            }

            if features.paragraph_start && matches!(state, State::Idle) {
                state = State::Building(String::new());
            }

            if let State::Building(buffer) = &mut state {
                append_continuation(buffer, &stripped);

                if features.ends_abruptly && features.ends_in_terminal_punctuation {
                    paragraphs.push(buffer.trim_end().to_string());
                    state = State::Idle;
                }
            }
        }
    }

    if let State::Building(buffer) = state {
        if !buffer.trim().is_empty() {
            paragraphs.push(buffer.trim_end().to_string());
        }
    }

    let joined = paragraphs.join("\n");
    let scrubbed = remove_references(&joined);
    scrubbed.split('\n').map(|s| s.to_string()).collect()
}
