#![allow(clippy::too_many_arguments)]

//! Romanian-leaning PDF text-reconstruction engine.
//!
//! Given a PDF that may be digitally born or scanned, produces a stream of
//! paragraph-level lines suitable for a language-corpus pipeline: recovers
//! reading order from a page's text objects, groups fragments into visual
//! regions, assembles regions into lines and paragraphs, falls back to OCR
//! when the embedded text is unusable, and applies a domain-calibrated
//! quality filter that discards headers, footers, captions, bibliographic
//! cross-references, and mojibake.
//!
//! ```text
//! PdfPageSource -> layout::extract_sorted_boxes -> layout::cluster_into_regions
//!               -> layout::assemble_lines -> Page (triage) -> Document
//!               -> [ocr::run_ocr if broken] -> paragraph::reconstruct
//! ```
//!
//! The engine is single-threaded per document (see [`document`] module docs);
//! callers fan out across documents at the process level.

pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod metadata;
pub mod ocr;
pub mod page;
pub mod paragraph;
pub mod pdf_backend;
pub mod text;

pub use config::PipelineConfig;
pub use document::{extract, Document, PageRange};
pub use error::{Error, Result};
pub use metadata::{DocumentClass, DropReason, FileType, Metadata};
pub use page::Page;
pub use pdf_backend::{PdfPageSource, PdfiumPageSource};
