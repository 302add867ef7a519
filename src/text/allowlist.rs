//! The allowlisted-character set used by page and line quality triage.
//!
//! A corpus of mostly-Romanian text should consist almost entirely of these
//! characters; a page or line that falls below the allowlist ratio threshold
//! is either scanned-and-uncorrected, mojibake, or in a language this
//! pipeline was not built to keep.

/// Typographic symbols observed often enough in clean Romanian text to allow.
const TYPOGRAPHIC_SYMBOLS: &str = "©–…·►◄«»°¬—×›•❤←→„\u{201D}";

/// Hungarian-specific accented letters; Hungarian text sometimes ends up in a
/// corpus meant for Romanian and is tolerated rather than flagged as broken.
const HUNGARIAN_LETTERS: &str = "ÁÉÍÓÖŐÚÜŰáéíóöőúüű";

/// A curated (non-contiguous) set of Ukrainian/Russian/Serbian Cyrillic
/// letters observed in practice. Not the full Cyrillic block.
const CYRILLIC_LETTERS: &str =
    "шћТҐИфбоувЗЕњнГЂџСсђЛхЁмЊырПеКжцчШНЈФлаВЏэидзптгєкъРіУЭљЋБХЇЙґЮАщЖьЄёЪюМяјЦїЬОІЧйЫДЉЩЯ";

/// Romanian letters, including the legacy cedilla variants still present in
/// older digitized text alongside the correct comma-below forms.
const ROMANIAN_LETTERS: &str = "ăĂâÂîÎșȘțȚşŞţŢ";

/// Unicode block of mathematical operators (U+2200–U+22FF).
const MATH_OPERATORS_START: u32 = 0x2200;
const MATH_OPERATORS_END: u32 = 0x22FF;

/// Unicode range covering the Greek alphabet used in formulas.
const GREEK_START: u32 = 0x0391;
const GREEK_END: u32 = 0x03C9;

/// Whether `c` belongs to the allowlisted-character set (§4.5).
pub fn is_allowlisted(c: char) -> bool {
    if c.is_ascii() && (c.is_ascii_graphic() || c.is_ascii_whitespace() || c == '\u{000B}') {
        return true;
    }

    let cp = c as u32;
    if (MATH_OPERATORS_START..=MATH_OPERATORS_END).contains(&cp) {
        return true;
    }
    if (GREEK_START..=GREEK_END).contains(&cp) {
        return true;
    }

    ROMANIAN_LETTERS.contains(c)
        || TYPOGRAPHIC_SYMBOLS.contains(c)
        || CYRILLIC_LETTERS.contains(c)
        || HUNGARIAN_LETTERS.contains(c)
}

/// Fraction of `text`'s characters that are allowlisted.
///
/// Returns `0.0` for empty text (matching the triage's "empty pages are not
/// broken" handling upstream, which never calls this on empty text anyway).
pub fn allowlisted_ratio(text: &str) -> f32 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }

    let ok = text.chars().filter(|&c| is_allowlisted(c)).count();
    ok as f32 / total as f32
}
