//! Line assembly: collapse a region's boxes into ordered lines and extract
//! their text (§4.4).

use crate::geometry::{encompassing_box, same_line, BBox};
use crate::pdf_backend::PdfPageSource;
use crate::text::fix_diacritics;

/// An assembled line: its encompassing box, plus the (diacritic-repaired)
/// text found within it.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub bbox: BBox,
    pub text: String,
}

/// Assemble `region_boxes` (already in reading order) into lines, querying
/// `source` for each line's text.
///
/// `region_boxes` is expected non-empty; an empty slice yields an empty
/// line list.
pub fn assemble_lines(region_boxes: &[BBox], source: &dyn PdfPageSource) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut iter = region_boxes.iter();
    let Some(&first) = iter.next() else {
        return lines;
    };

    let mut current: Vec<BBox> = vec![first];
    let mut prev = first;

    for &bbox in iter {
        if same_line(prev, bbox) {
            current.push(bbox);
        } else {
            lines.push(close_line(&current, source));
            current = vec![bbox];
        }
        prev = bbox;
    }

    if !current.is_empty() {
        lines.push(close_line(&current, source));
    }

    lines
}

fn close_line(boxes: &[BBox], source: &dyn PdfPageSource) -> Line {
    let bbox = encompassing_box(boxes).expect("boxes passed to close_line is non-empty");
    let text = fix_diacritics(&source.text_in_bbox(bbox));
    Line { bbox, text }
}
