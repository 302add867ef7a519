//! Document façade: page-range selection, triage, OCR fallback orchestration,
//! and the crate's single extraction entry point (§4.8).

use std::path::Path;

use pdfium_render::prelude::{Pdfium, PdfDocument, PdfiumError};
use tempfile::TempDir;

use crate::config::PipelineConfig;
use crate::error::{Error, LoaderError, Result};
use crate::layout::{Line, Region};
use crate::metadata::{DropReason, Metadata};
use crate::ocr;
use crate::page::Page;
use crate::paragraph;
use crate::pdf_backend::PdfiumPageSource;

/// Which pages of a document to process. Endpoints are clamped into
/// `[0, page_count)` when resolved against an open document (§4.8).
#[derive(Debug, Clone, PartialEq)]
pub enum PageRange {
    All,
    Single(usize),
    Range { start: usize, end: usize, step: usize },
}

impl PageRange {
    fn resolve(&self, page_count: usize) -> Vec<usize> {
        if page_count == 0 {
            return Vec::new();
        }
        let clamp = |i: usize| i.min(page_count - 1);

        match self {
            PageRange::All => (0..page_count).collect(),
            PageRange::Single(i) => vec![clamp(*i)],
            PageRange::Range { start, end, step } => {
                let start = clamp(*start);
                let end = clamp(*end);
                (start..end).step_by((*step).max(1)).collect()
            }
        }
    }
}

/// One page's size and region/line tree, as returned by [`Document::contents`].
pub struct PageContents {
    pub index: usize,
    pub size: (f32, f32),
    pub regions: Vec<(Region, Vec<Line>)>,
}

/// A PDF opened for processing: a page-range-scoped view over a
/// `pdfium_render::PdfDocument`, per the single-threaded contract of §5.
pub struct Document<'a> {
    pdf: PdfDocument<'a>,
    total_page_count: usize,
    selected: Vec<usize>,
    config: PipelineConfig,
}

impl<'a> Document<'a> {
    /// Open `path` against `pdfium`, scoped to `page_range`.
    pub fn open(
        pdfium: &'a Pdfium,
        path: &Path,
        page_range: PageRange,
        config: PipelineConfig,
    ) -> Result<Self> {
        let pdf = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::from(map_loader_error(&e)))?;

        let total_page_count = pdf.pages().len() as usize;
        let selected = page_range.resolve(total_page_count);

        Ok(Self {
            pdf,
            total_page_count,
            selected,
            config,
        })
    }

    /// The document's selected pages, each with its size and region/line tree.
    /// A page-local failure is logged and reduces that page to empty rather
    /// than failing the whole document (§4.8).
    pub fn contents(&self) -> Result<Vec<PageContents>> {
        Ok(self
            .selected
            .iter()
            .map(|&index| match self.pdf.pages().get(index as u16) {
                Ok(pdf_page) => {
                    let source = PdfiumPageSource::new(pdf_page);
                    let size = source.size();
                    let page = Page::new(index, &source, &self.config);
                    match page.regions() {
                        Ok(regions) => PageContents {
                            index,
                            size,
                            regions: regions.to_vec(),
                        },
                        Err(error) => {
                            let error = Error::PageLocal(error.to_string());
                            log::warn!("page {index}: {error}");
                            PageContents {
                                index,
                                size,
                                regions: Vec::new(),
                            }
                        }
                    }
                }
                Err(error) => {
                    let error = Error::PageLocal(error.to_string());
                    log::warn!("page {index}: {error}");
                    PageContents {
                        index,
                        size: (0.0, 0.0),
                        regions: Vec::new(),
                    }
                }
            })
            .collect())
    }

    /// True iff, among the first `triage_page_window` selected pages, at
    /// least `min(3, total_page_count)` are broken or that many are empty
    /// (§4.5).
    pub fn broken_document(&self) -> Result<bool> {
        let window = self.config.triage_page_window.min(self.selected.len());
        let threshold = self.total_page_count.min(3);

        let mut broken_count = 0usize;
        let mut empty_count = 0usize;

        for &index in &self.selected[..window] {
            let pdf_page = match self.pdf.pages().get(index as u16) {
                Ok(pdf_page) => pdf_page,
                Err(error) => {
                    let error = Error::PageLocal(error.to_string());
                    log::warn!("page {index}: {error}");
                    broken_count += 1;
                    continue;
                }
            };
            let source = PdfiumPageSource::new(pdf_page);
            let page = Page::new(index, &source, &self.config);

            match page.is_broken() {
                Ok(true) => broken_count += 1,
                Ok(false) => {
                    if page.is_empty()? {
                        empty_count += 1;
                    }
                }
                Err(error) => {
                    let error = Error::PageLocal(error.to_string());
                    log::warn!("page {index}: {error}");
                    broken_count += 1;
                }
            }
        }

        log::debug!(
            "broken_document: {broken_count} broken, {empty_count} empty of {window} sampled pages (threshold {threshold})"
        );

        Ok(broken_count >= threshold || empty_count >= threshold)
    }
}

fn map_loader_error(err: &PdfiumError) -> LoaderError {
    let message = err.to_string().to_lowercase();
    if message.contains("password") {
        LoaderError::IncorrectPassword
    } else if message.contains("format") {
        LoaderError::DataFormat
    } else {
        LoaderError::EmptySuccess
    }
}

fn drop_reason_for(error: &Error) -> DropReason {
    match error {
        Error::Loader(LoaderError::IncorrectPassword) => DropReason::UnknownEncryptionPassword,
        Error::Loader(_) => DropReason::BrokenPdf,
        _ => DropReason::TextExtractionFailure,
    }
}

fn flatten(contents: Vec<PageContents>) -> Vec<(Region, Vec<Line>)> {
    contents.into_iter().flat_map(|p| p.regions).collect()
}

/// The crate's single extraction entry point: open `path`, fall back to OCR
/// if the document is broken, reconstruct paragraphs, and return both the
/// result and a [`Metadata`] record that is populated even on failure (§4.8,
/// §7).
pub fn extract(pdfium: &Pdfium, path: &Path, config: &PipelineConfig) -> (Result<Vec<String>>, Metadata) {
    let mut metadata = Metadata::new();

    let result = (|| -> Result<Vec<String>> {
        let document = Document::open(pdfium, path, PageRange::All, config.clone())?;

        if document.broken_document()? {
            let scratch = TempDir::new()?;
            let outcome = ocr::run_ocr(path, &scratch, config)?;
            metadata.ocr = true;
            metadata.decrypted = outcome.decrypted;

            let ocr_document =
                Document::open(pdfium, &outcome.output_path, PageRange::All, config.clone())?;
            let contents = ocr_document.contents()?;
            return Ok(paragraph::reconstruct(&flatten(contents), config));
        }

        let contents = document.contents()?;
        Ok(paragraph::reconstruct(&flatten(contents), config))
    })();

    if let Err(ref error) = result {
        metadata.drop_reason = Some(drop_reason_for(error));
    }

    (result, metadata)
}
