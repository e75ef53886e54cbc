//! Title similarity
//!
//! Ratcliff/Obershelp "gestalt" matching via `difflib`: repeatedly take the
//! longest common run of characters, recurse on the unmatched pieces on
//! either side, and report `2 * matched / total`.

use difflib::sequencematcher::SequenceMatcher;

/// Case-insensitive similarity ratio of two titles in `[0, 1]`
///
/// The gestalt ratio can differ slightly with argument order when characters
/// repeat; this reports the larger of the two orientations so the value is
/// symmetric.
///
/// # Examples
///
/// ```
/// use herald_graph::title_similarity;
///
/// assert_eq!(title_similarity("Major Event", "major event"), 1.0);
/// assert!(title_similarity("Major Event Happens", "Major Event Confirmed") > 0.6);
/// assert_eq!(title_similarity("abc", "xyz"), 0.0);
/// ```
pub fn title_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    gestalt_ratio(&a, &b).max(gestalt_ratio(&b, &a))
}

/// Gestalt ratio of `a` against `b` (not symmetric)
fn gestalt_ratio(a: &[char], b: &[char]) -> f64 {
    SequenceMatcher::new(a, b).ratio() as f64
}
