//! Per-page lazy pipeline: boxes → regions → lines, plus triage flags (§3, §4.5).

use std::cell::OnceCell;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::layout::{assemble_lines, cluster_into_regions, extract_sorted_boxes, Line, Region};
use crate::pdf_backend::PdfPageSource;
use crate::text::allowlisted_ratio;

/// A single page's lazily-computed layout, with quality triage flags.
///
/// Every derived artifact is memoized in a [`OnceCell`] and computed at most
/// once, per the single-threaded contract of §5: a `Page` must not be shared
/// across threads.
pub struct Page<'a> {
    index: usize,
    source: &'a dyn PdfPageSource,
    config: &'a PipelineConfig,
    regions: OnceCell<Vec<(Region, Vec<Line>)>>,
    text: OnceCell<String>,
}

impl<'a> Page<'a> {
    pub fn new(index: usize, source: &'a dyn PdfPageSource, config: &'a PipelineConfig) -> Self {
        Self {
            index,
            source,
            config,
            regions: OnceCell::new(),
            text: OnceCell::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> (f32, f32) {
        self.source.size()
    }

    /// Regions with their assembled lines, in region-discovery then
    /// top-to-bottom line order.
    ///
    /// A page whose object enumeration fails with a recoverable "no page
    /// objects" condition (signaled by `source.text_object_boxes` returning
    /// `Ok(vec![])`) is treated as having zero regions.
    pub fn regions(&self) -> Result<&[(Region, Vec<Line>)]> {
        if let Some(r) = self.regions.get() {
            return Ok(r);
        }

        let boxes = extract_sorted_boxes(self.source)?;
        let regions = cluster_into_regions(&boxes, self.config);
        let with_lines: Vec<(Region, Vec<Line>)> = regions
            .into_iter()
            .map(|region| {
                let lines = assemble_lines(&region.boxes, self.source);
                (region, lines)
            })
            .collect();

        Ok(self.regions.get_or_init(|| with_lines))
    }

    /// The page's full assembled text: every line's text, in region then
    /// line order, joined by newlines.
    pub fn text(&self) -> Result<&str> {
        if let Some(t) = self.text.get() {
            return Ok(t);
        }

        let regions = self.regions()?;
        let mut joined = String::new();
        for (_, lines) in regions {
            for line in lines {
                if !joined.is_empty() {
                    joined.push('\n');
                }
                joined.push_str(&line.text);
            }
        }

        Ok(self.text.get_or_init(|| joined))
    }

    /// True iff the page's assembled text is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.text()?.is_empty())
    }

    /// True iff the page's assembled text is non-empty and the fraction of
    /// allowlisted characters is strictly below the configured threshold.
    pub fn is_broken(&self) -> Result<bool> {
        let text = self.text()?;
        if text.is_empty() {
            return Ok(false);
        }
        Ok(allowlisted_ratio(text) < self.config.allowlist_ratio_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    struct FakeSource {
        boxes: Vec<BBox>,
        text: &'static str,
    }

    impl PdfPageSource for FakeSource {
        fn size(&self) -> (f32, f32) {
            (612.0, 792.0)
        }
        fn text_object_boxes(&self) -> Result<Vec<BBox>> {
            Ok(self.boxes.clone())
        }
        fn text_in_bbox(&self, _bbox: BBox) -> String {
            self.text.to_string()
        }
    }

    #[test]
    fn a_page_with_no_boxes_is_empty_and_not_broken() {
        let source = FakeSource {
            boxes: vec![],
            text: "",
        };
        let config = PipelineConfig::default();
        let page = Page::new(0, &source, &config);
        assert!(page.is_empty().unwrap());
        assert!(!page.is_broken().unwrap());
    }

    #[test]
    fn a_page_with_clean_text_is_not_broken() {
        let source = FakeSource {
            boxes: vec![BBox::new(0.0, 0.0, 10.0, 10.0)],
            text: "text in plain romanian",
        };
        let config = PipelineConfig::default();
        let page = Page::new(0, &source, &config);
        assert!(!page.is_empty().unwrap());
        assert!(!page.is_broken().unwrap());
    }

    #[test]
    fn a_page_with_mojibake_text_is_broken() {
        let source = FakeSource {
            boxes: vec![BBox::new(0.0, 0.0, 10.0, 10.0)],
            text: "\u{4e2d}\u{6587}\u{4e71}\u{7801}\u{6d4b}\u{8bd5}",
        };
        let config = PipelineConfig::default();
        let page = Page::new(0, &source, &config);
        assert!(page.is_broken().unwrap());
    }

    #[test]
    fn text_is_memoized_across_calls() {
        let source = FakeSource {
            boxes: vec![BBox::new(0.0, 0.0, 10.0, 10.0)],
            text: "stable",
        };
        let config = PipelineConfig::default();
        let page = Page::new(0, &source, &config);
        let first = page.text().unwrap().to_string();
        let second = page.text().unwrap().to_string();
        assert_eq!(first, second);
    }
}
