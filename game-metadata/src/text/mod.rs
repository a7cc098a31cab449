//! Pure string helpers used by the option search.

pub mod normalize;
pub mod numerals;

pub use normalize::{contains_folded, fold_ascii};
pub use numerals::{from_roman, romanize_trailing_number, to_roman};
