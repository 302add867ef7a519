//! Text-box extraction: enumerate a page's text objects, dedupe, and sort
//! into a reading-order spine (§4.2).

use crate::geometry::BBox;
use crate::pdf_backend::PdfPageSource;
use std::collections::HashSet;

/// Extract the deduplicated, reading-order-sorted text boxes of a page.
///
/// Sort key is `(-top, left, bottom, right)`: topmost first, then leftmost,
/// ties broken by bottom then right. Any failure from `source` other than an
/// empty enumeration propagates (`source.text_object_boxes` already
/// translates the recoverable "no page objects" case into an empty `Ok`).
pub fn extract_sorted_boxes(source: &dyn PdfPageSource) -> crate::error::Result<Vec<BBox>> {
    let raw = source.text_object_boxes()?;

    let mut seen = HashSet::new();
    let mut boxes: Vec<BBox> = Vec::with_capacity(raw.len());
    for bbox in raw {
        if seen.insert(bbox.key()) {
            boxes.push(bbox);
        }
    }

    boxes.sort_by(|a, b| {
        (-a.top, a.left, a.bottom, a.right)
            .partial_cmp(&(-b.top, b.left, b.bottom, b.right))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSource {
        boxes: Vec<BBox>,
    }

    impl PdfPageSource for FakeSource {
        fn size(&self) -> (f32, f32) {
            (612.0, 792.0)
        }

        fn text_object_boxes(&self) -> crate::error::Result<Vec<BBox>> {
            Ok(self.boxes.clone())
        }

        fn text_in_bbox(&self, _bbox: BBox) -> String {
            String::new()
        }
    }

    #[test]
    fn duplicates_are_removed() {
        let b = BBox::new(0.0, 0.0, 10.0, 10.0);
        let source = FakeSource {
            boxes: vec![b, b, b],
        };
        let boxes = extract_sorted_boxes(&source).unwrap();
        assert_eq!(boxes.len(), 1);
    }

    #[test]
    fn boxes_are_sorted_top_to_bottom_then_left_to_right() {
        let top_left = BBox::new(0.0, 90.0, 10.0, 100.0);
        let top_right = BBox::new(20.0, 90.0, 30.0, 100.0);
        let bottom = BBox::new(0.0, 0.0, 10.0, 10.0);
        let source = FakeSource {
            boxes: vec![bottom, top_right, top_left],
        };
        let boxes = extract_sorted_boxes(&source).unwrap();
        assert_eq!(boxes, vec![top_left, top_right, bottom]);
    }

    #[test]
    fn empty_enumeration_yields_empty_spine() {
        let source = FakeSource { boxes: vec![] };
        assert!(extract_sorted_boxes(&source).unwrap().is_empty());
    }
}
