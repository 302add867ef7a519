//! Provenance metadata carried alongside an extraction result.
//!
//! `Metadata` is the side-channel record described in the data model: it never
//! determines control flow inside this crate, but a driver (out of scope here)
//! folds it directly into the JSON output record.

use serde::{Deserialize, Serialize};

/// Input format, as sniffed by the (out-of-scope) driver before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Pdf,
    Doc,
    Docx,
    Html,
    Mobi,
    Epub,
}

/// Coarse document classification, assigned by the (out-of-scope) driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentClass {
    Book,
    Thesis,
    Webpage,
    Crawled,
}

/// Reason an input was dropped instead of yielding usable text.
///
/// The wire literals are deliberately inconsistent (`unknown_encryption_password`
/// stays underscored while the other two are hyphenated): a downstream consumer
/// matches on these exact strings, so each variant is renamed individually
/// rather than through one blanket convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropReason {
    /// The PDF is encrypted and no usable password was known.
    #[serde(rename = "unknown_encryption_password")]
    UnknownEncryptionPassword,
    /// The loader reported a data-format error.
    #[serde(rename = "broken-pdf")]
    BrokenPdf,
    /// Any other extraction failure.
    #[serde(rename = "text-extraction-failure")]
    TextExtractionFailure,
}

/// Provenance metadata accumulated while processing one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub file_type: Option<FileType>,
    pub document_class: Option<DocumentClass>,
    /// Whether the OCR fallback of §4.6 was invoked.
    #[serde(default)]
    pub ocr: bool,
    /// Whether the decryption fallback was invoked to make OCR possible.
    #[serde(default)]
    pub decrypted: bool,
    pub drop_reason: Option<DropReason>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metadata_has_no_flags_set() {
        let m = Metadata::new();
        assert!(!m.ocr);
        assert!(!m.decrypted);
        assert!(m.drop_reason.is_none());
    }

    #[test]
    fn metadata_round_trips_through_json() {
        let mut m = Metadata::new();
        m.file_type = Some(FileType::Pdf);
        m.ocr = true;
        m.drop_reason = Some(DropReason::BrokenPdf);

        let json = serde_json::to_string(&m).unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back.file_type, Some(FileType::Pdf));
        assert!(back.ocr);
        assert_eq!(back.drop_reason, Some(DropReason::BrokenPdf));
    }

    #[test]
    fn drop_reason_wire_literals_are_exact() {
        assert_eq!(
            serde_json::to_string(&DropReason::UnknownEncryptionPassword).unwrap(),
            "\"unknown_encryption_password\""
        );
        assert_eq!(
            serde_json::to_string(&DropReason::BrokenPdf).unwrap(),
            "\"broken-pdf\""
        );
        assert_eq!(
            serde_json::to_string(&DropReason::TextExtractionFailure).unwrap(),
            "\"text-extraction-failure\""
        );
    }
}
