//! Repair of commonly mis-encoded Romanian diacritics.
//!
//! These substitutions correct a handful of legacy code-page artifacts (the
//! old "cedilla" Windows-1250 rendering of ş/ţ showing up as ª/º/Þ/þ under a
//! Latin-1 misreading) plus one OCR artifact (U+0002 standing in for an
//! end-of-line dash). Nothing else is normalized here; word-level Unicode
//! normalization is explicitly out of scope.
const SUBSTITUTIONS: &[(char, char)] = &[
    ('ã', 'ă'),
    ('Ã', 'Ă'),
    ('º', 'ș'),
    ('ª', 'Ș'),
    ('þ', 'ț'),
    ('Þ', 'Ț'),
    ('\u{0002}', '-'),
];

/// Apply the fixed diacritic substitution table to `text`.
///
/// Idempotent: none of the substitution targets are themselves substitution
/// sources, so running this twice is identical to running it once.
pub fn fix_diacritics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push(*to),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_legacy_cedilla_glyphs() {
        assert_eq!(fix_diacritics("ãnãlizã"), "ănăliză");
        assert_eq!(fix_diacritics("ºcoalã"), "școală");
        assert_eq!(fix_diacritics("Þara"), "Țara");
    }

    #[test]
    fn replaces_ocr_dash_artifact() {
        assert_eq!(fix_diacritics("continu\u{0002}are"), "continu-are");
    }

    #[test]
    fn leaves_untargeted_characters_untouched() {
        assert_eq!(fix_diacritics("Hello, World! 123"), "Hello, World! 123");
    }

    #[test]
    fn is_idempotent() {
        let samples = ["ãnãlizã Þara ºcoalã", "plain text", "continu\u{0002}are"];
        for s in samples {
            let once = fix_diacritics(s);
            let twice = fix_diacritics(&once);
            assert_eq!(once, twice);
        }
    }
}
