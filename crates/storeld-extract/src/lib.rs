//! Heuristic field extraction from text pasted out of the store sheet.
//!
//! The sheet export has no delimiters beyond the field names themselves, so
//! each recognised field is captured between two literal markers and then
//! split into its English and French halves (see [`markers`]). Everything
//! the markers do not cover keeps the profile's default value.

pub mod error;
pub mod extractor;
pub mod markers;

pub use error::ExtractError;
pub use extractor::{Extraction, Extractor};
pub use markers::{MarkerRule, SplitRule, DEFAULT_RULES};
