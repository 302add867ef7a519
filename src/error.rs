//! Error types for the PDF text-reconstruction engine.

/// Result type alias for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the PDF loader can report when opening a document.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The PDF is encrypted and no usable password was supplied.
    #[error("incorrect password")]
    IncorrectPassword,

    /// The loader could not make sense of the byte stream.
    #[error("data format error")]
    DataFormat,

    /// The loader reported success but produced no usable document.
    #[error("success with no data")]
    EmptySuccess,
}

/// Errors the OCR fallback driver can report.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    /// The input PDF is encrypted; decryption should be attempted before retrying OCR.
    #[error("encrypted PDF")]
    Encrypted,

    /// The OCR subprocess failed specifically in the deskew step; callers retry once
    /// with deskew disabled.
    #[error("deskew step failed: {0}")]
    Deskew(String),

    /// Any other OCR subprocess failure, which propagates without retry.
    #[error("OCR subprocess failed: {0}")]
    Other(String),
}

/// Errors that can occur during PDF processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document failed to load (see [`LoaderError`] for the distinguished cases).
    #[error("failed to load document: {0}")]
    Loader(#[from] LoaderError),

    /// OCR fallback failed (see [`OcrError`]).
    #[error("OCR failed: {0}")]
    Ocr(#[from] OcrError),

    /// A page-local failure (e.g. "failed to get number of page objects").
    /// Callers log this and reduce the page to empty-and-broken; it never
    /// surfaces as a top-level `Err` from [`crate::document::Document::open`]
    /// or `extract`.
    #[error("page-local error: {0}")]
    PageLocal(String),

    /// The decryption subprocess failed.
    #[error("decryption failed: {0}")]
    Decrypt(String),

    /// IO error, e.g. opening the input file or a scratch file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_error_messages_are_distinguishable() {
        let incorrect = Error::from(LoaderError::IncorrectPassword);
        let data_format = Error::from(LoaderError::DataFormat);
        assert_ne!(format!("{incorrect}"), format!("{data_format}"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
