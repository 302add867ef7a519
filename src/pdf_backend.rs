//! Adapter over the concrete PDF object model.
//!
//! Everything above this module works with the three primitives defined by
//! [`PdfPageSource`]; the reconstruction algorithm in `layout`/`paragraph`
//! never touches `pdfium_render` directly. This keeps that algorithm testable
//! against synthetic boxes and isolates the one piece of this crate that
//! depends on a PDF object-model library with process-wide native state (see
//! the concurrency model: a `PdfPageSource` must not be shared across
//! threads).

use crate::geometry::BBox;
use pdfium_render::prelude::*;

/// The subset of a PDF page's object model the reconstruction engine needs.
pub trait PdfPageSource {
    /// Page size in PDF user-space units, as `(width, height)`.
    fn size(&self) -> (f32, f32);

    /// Bounding boxes of every text-bearing object on the page, in no
    /// particular order; duplicates are expected and are removed by the
    /// caller (§4.2).
    ///
    /// A page whose object enumeration fails with a recoverable "no page
    /// objects" condition returns `Ok(vec![])` rather than an error (§4.2,
    /// §7).
    fn text_object_boxes(&self) -> crate::error::Result<Vec<BBox>>;

    /// Text contained within `bbox`, as reported by the page's text layer.
    fn text_in_bbox(&self, bbox: BBox) -> String;
}

/// [`PdfPageSource`] backed by a `pdfium_render::PdfPage`.
pub struct PdfiumPageSource<'a> {
    page: PdfPage<'a>,
}

impl<'a> PdfiumPageSource<'a> {
    pub fn new(page: PdfPage<'a>) -> Self {
        Self { page }
    }

    fn to_pdf_rect(bbox: BBox) -> PdfRect {
        // pdfium-render's PdfRect constructor takes edges in
        // bottom/left/top/right order.
        PdfRect::new(
            PdfPoints::new(bbox.bottom),
            PdfPoints::new(bbox.left),
            PdfPoints::new(bbox.top),
            PdfPoints::new(bbox.right),
        )
    }
}

impl<'a> PdfPageSource for PdfiumPageSource<'a> {
    fn size(&self) -> (f32, f32) {
        (self.page.width().value, self.page.height().value)
    }

    fn text_object_boxes(&self) -> crate::error::Result<Vec<BBox>> {
        let mut boxes = Vec::new();
        for object in self.page.objects().iter() {
            if object.as_text_object().is_none() {
                continue;
            }

            match object.bounds() {
                Ok(bounds) => boxes.push(BBox::new(
                    bounds.left().value,
                    bounds.bottom().value,
                    bounds.right().value,
                    bounds.top().value,
                )),
                Err(_) => continue,
            }
        }

        Ok(boxes)
    }

    fn text_in_bbox(&self, bbox: BBox) -> String {
        match self.page.text() {
            Ok(text_page) => text_page.inside_rect(Self::to_pdf_rect(bbox)),
            Err(_) => String::new(),
        }
    }
}
