//! Bibliographic reference scrubbing.
//!
//! Removes inline citation markers that survive paragraph reconstruction but
//! have no place in corpus text: numeric brackets (`[12]`, `[12-15, 17]`),
//! numeric parentheses (`(12, 15)`), and parenthesized fragments containing a
//! four-digit year (`(Smith 2003)`).

use regex::Regex;
use std::sync::OnceLock;

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"( ?(\[[0-9]+((-?[0-9]+)?(, ?[0-9]+)*)\])+)|( ?\([0-9]+((-?[0-9]+)?(, ?[0-9]+)*)\))|( ?\([^\)]*[0-9][0-9][0-9][0-9].?\))",
        )
        .expect("reference scrub pattern is a fixed, valid regex")
    })
}

/// Remove in-text bibliographic citations from `text`.
pub fn remove_references(text: &str) -> String {
    reference_pattern().replace_all(text, "").into_owned()
}
