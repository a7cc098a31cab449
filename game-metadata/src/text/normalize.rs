//! Accent folding for fuzzy title comparison.
//!
//! Titles are compared after canonical decomposition (NFD): combining marks
//! in U+0300..=U+036F are stripped and any remaining non-ASCII code point is
//! dropped, so `"Pokémon"` and `"Pokemon"` compare equal.

use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Fold a string to plain ASCII.
///
/// Case is preserved; callers lowercase first when they need a
/// case-insensitive comparison.
///
/// # Examples
///
/// ```
/// use game_metadata::text::fold_ascii;
///
/// assert_eq!(fold_ascii("Pokémon"), "Pokemon");
/// assert_eq!(fold_ascii("Ōkami"), "Okami");
/// ```
pub fn fold_ascii(s: &str) -> String {
    s.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .filter(char::is_ascii)
        .collect()
}

/// Case- and accent-insensitive substring check.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_ascii(&haystack.to_lowercase()).contains(&fold_ascii(&needle.to_lowercase()))
}
