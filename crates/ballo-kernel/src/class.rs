//! Skill-class ranking.
//!
//! Lower rank is more advanced. Labels missing from the table rank
//! [`UNRANKED_CLASS_RANK`], so an unknown class never wins a comparison
//! against a known one and every comparison stays total.

/// Known classes and their ranks, best first.
pub const CLASS_RANKS: [(&str, u8); 11] = [
    ("MASTER", 0),
    ("AS", 1),
    ("A", 2),
    ("A1", 3),
    ("A2", 4),
    ("B1", 5),
    ("B2", 6),
    ("B3", 7),
    ("B", 8),
    ("C", 9),
    ("D", 12),
];

/// Rank of any label not in [`CLASS_RANKS`].
pub const UNRANKED_CLASS_RANK: u8 = 99;

/// The weakest ranked class; the result of comparing two absent classes.
pub const WEAKEST_CLASS: &str = "D";

/// Trim and uppercase a class label.
pub fn normalize_class(class: &str) -> String {
    class.trim().to_uppercase()
}

/// Rank of a class label (case- and whitespace-insensitive).
pub fn class_rank(class: &str) -> u8 {
    let normalized = normalize_class(class);
    CLASS_RANKS
        .iter()
        .find(|(label, _)| *label == normalized)
        .map(|(_, rank)| *rank)
        .unwrap_or(UNRANKED_CLASS_RANK)
}

fn present(class: Option<&str>) -> Option<&str> {
    class.filter(|c| !c.is_empty())
}

/// The better of two classes, normalized.
///
/// An absent (or empty) side yields the other one; two absent sides yield
/// [`WEAKEST_CLASS`]. On equal rank the first argument wins.
pub fn best_class(a: Option<&str>, b: Option<&str>) -> String {
    match (present(a), present(b)) {
        (None, None) => WEAKEST_CLASS.to_string(),
        (Some(only), None) | (None, Some(only)) => normalize_class(only),
        (Some(a), Some(b)) => {
            if is_class_at_least(a, b) {
                normalize_class(a)
            } else {
                normalize_class(b)
            }
        }
    }
}

/// Whether `a` is at least as advanced as `b`.
pub fn is_class_at_least(a: &str, b: &str) -> bool {
    class_rank(a) <= class_rank(b)
}
