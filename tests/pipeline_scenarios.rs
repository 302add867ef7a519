//! End-to-end coverage for the literal scenarios of §8, driven through the
//! public `layout`/`paragraph` pipeline against a synthetic `PdfPageSource`
//! (no real PDF fixture is available in this environment to exercise
//! `PdfiumPageSource` directly).

use std::collections::HashMap;

use textit_pdf::config::PipelineConfig;
use textit_pdf::geometry::BBox;
use textit_pdf::layout::{assemble_lines, cluster_into_regions, extract_sorted_boxes};
use textit_pdf::paragraph::reconstruct;
use textit_pdf::pdf_backend::PdfPageSource;

/// A page source backed by a fixed set of boxes and a lookup table from box
/// key to the text it contains.
struct FixtureSource {
    boxes: Vec<BBox>,
    text_by_box: HashMap<(u32, u32, u32, u32), &'static str>,
}

impl PdfPageSource for FixtureSource {
    fn size(&self) -> (f32, f32) {
        (612.0, 792.0)
    }

    fn text_object_boxes(&self) -> textit_pdf::Result<Vec<BBox>> {
        Ok(self.boxes.clone())
    }

    fn text_in_bbox(&self, bbox: BBox) -> String {
        self.text_by_box
            .get(&bbox.key())
            .copied()
            .unwrap_or("")
            .to_string()
    }
}

fn run_pipeline(source: &FixtureSource, config: &PipelineConfig) -> Vec<String> {
    let boxes = extract_sorted_boxes(source).unwrap();
    let regions = cluster_into_regions(&boxes, config);
    let with_lines: Vec<_> = regions
        .into_iter()
        .map(|region| {
            let lines = assemble_lines(&region.boxes, source);
            (region, lines)
        })
        .collect();
    reconstruct(&with_lines, config)
}

#[test]
fn s1_born_digital_single_column_clean() {
    let bbox = BBox::new(20.0, 680.0, 590.0, 700.0);
    let mut text_by_box = HashMap::new();
    text_by_box.insert(bbox.key(), "Acesta este un document curat.");

    let source = FixtureSource {
        boxes: vec![bbox],
        text_by_box,
    };
    let config = PipelineConfig::default();
    let paragraphs = run_pipeline(&source, &config);

    assert_eq!(paragraphs, vec!["Acesta este un document curat.".to_string()]);
}

#[test]
fn s2_hyphenated_line_wrap_joins_without_space() {
    let line1 = BBox::new(20.0, 690.0, 590.0, 700.0);
    let line2 = BBox::new(20.0, 670.0, 590.0, 690.0);
    let mut text_by_box = HashMap::new();
    text_by_box.insert(line1.key(), "Acest proces trebuie sa continu-");
    text_by_box.insert(line2.key(), "are pana la finalul documentului.");

    let source = FixtureSource {
        boxes: vec![line1, line2],
        text_by_box,
    };
    let config = PipelineConfig::default();
    let paragraphs = run_pipeline(&source, &config);

    assert_eq!(paragraphs.len(), 1);
    assert!(paragraphs[0].contains("continuare"));
}

#[test]
fn s5_inline_citations_are_stripped() {
    let bbox = BBox::new(20.0, 680.0, 590.0, 700.0);
    let mut text_by_box = HashMap::new();
    text_by_box.insert(
        bbox.key(),
        "Studiul curent extinde rezultatele anterioare din domeniu, \
         asa cum s-a raportat [12, 15] si ulterior (Smith 2003).",
    );

    let source = FixtureSource {
        boxes: vec![bbox],
        text_by_box,
    };
    let config = PipelineConfig::default();
    let paragraphs = run_pipeline(&source, &config);

    assert_eq!(paragraphs.len(), 1);
    assert!(paragraphs[0].ends_with("si ulterior."));
    assert!(!paragraphs[0].contains('['));
    assert!(!paragraphs[0].contains("Smith"));
}

#[test]
fn s6_abrupt_line_ending_closes_the_paragraph() {
    let line1 = BBox::new(20.0, 690.0, 200.0, 700.0);
    let line2 = BBox::new(20.0, 670.0, 590.0, 690.0);
    let mut text_by_box = HashMap::new();
    text_by_box.insert(line1.key(), "Acest rand se incheie devreme.");
    text_by_box.insert(line2.key(), "Un rand nou incepe un paragraf separat aici.");

    let source = FixtureSource {
        boxes: vec![line1, line2],
        text_by_box,
    };
    let config = PipelineConfig::default();
    let paragraphs = run_pipeline(&source, &config);

    assert_eq!(paragraphs.len(), 2);
}
