//! Text-level repair and filtering shared by line assembly and paragraph
//! reconstruction.

pub mod allowlist;
pub mod citations;
pub mod diacritics;

pub use allowlist::{allowlisted_ratio, is_allowlisted};
pub use citations::remove_references;
pub use diacritics::fix_diacritics;
