//! Page layout reconstruction: text-box extraction, region clustering, and
//! line assembly (§4.2–§4.4).
//!
//! ```text
//! PdfPageSource -> text_box::extract_sorted_boxes -> [BBox]
//!               -> clustering::cluster_into_regions -> [Region]
//!               -> line_assembly::assemble_lines (per region) -> [Line]
//! ```

pub mod clustering;
pub mod line_assembly;
pub mod text_box;

pub use clustering::{cluster_into_regions, estimate_epsilon, Region};
pub use line_assembly::{assemble_lines, Line};
pub use text_box::extract_sorted_boxes;
