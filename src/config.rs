//! Pipeline-wide tunables.
//!
//! Consolidates the constants governing clustering, page triage, and OCR
//! invocation into one struct. Every default here is a literal, load-bearing
//! value; treat changing a default as a behavior change, not a refactor.

/// Tunables for region clustering, page triage, and OCR invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Pages with more text boxes than this skip clustering entirely (§4.3).
    pub clustering_threshold: usize,
    /// Lower clamp for the adaptive clustering ε (§4.3).
    pub epsilon_min: f32,
    /// Upper clamp for the adaptive clustering ε (§4.3).
    pub epsilon_max: f32,
    /// Minimum mode frequency before using `1.5 * mode` instead of `1.2 * median` (§4.3).
    pub epsilon_mode_frequency_threshold: usize,
    /// Fraction of allowlisted characters below which a page (or line) is broken (§4.5, §4.7).
    pub allowlist_ratio_threshold: f32,
    /// Number of leading pages considered when deciding if a document is broken (§4.5).
    pub triage_page_window: usize,
    /// Units inside the region's right margin beyond which a line "ends abruptly" (§4.7).
    // TODO: this is a fixed unit count rather than a fraction of region width;
    // revisit for unusually wide or narrow regions.
    pub ends_abruptly_margin: f32,
    /// Fraction of region width a line's left edge may sit inside the region's left margin (§4.7).
    pub too_left_fraction: f32,
    /// Non-word-initial token ratio at or above which a line is rejected (§4.7).
    pub nonword_ratio_threshold: f32,
    /// Lowercase-initial token ratio below which a line is rejected (§4.7).
    pub lowercase_ratio_threshold: f32,
    /// ISO 639-2 language code passed to the OCR tool (§4.6).
    pub ocr_language: &'static str,
    /// Maximum image resolution, in megapixels, passed to the OCR tool (§4.6).
    pub ocr_max_image_mpixels: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            clustering_threshold: 4000,
            epsilon_min: 5.0,
            epsilon_max: 15.0,
            epsilon_mode_frequency_threshold: 5,
            allowlist_ratio_threshold: 0.95,
            triage_page_window: 10,
            ends_abruptly_margin: 25.0,
            too_left_fraction: 0.1,
            nonword_ratio_threshold: 0.35,
            lowercase_ratio_threshold: 0.35,
            ocr_language: "ron",
            ocr_max_image_mpixels: 900,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_specification() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.clustering_threshold, 4000);
        assert_eq!(cfg.epsilon_min, 5.0);
        assert_eq!(cfg.epsilon_max, 15.0);
        assert_eq!(cfg.allowlist_ratio_threshold, 0.95);
        assert_eq!(cfg.ocr_language, "ron");
    }
}
