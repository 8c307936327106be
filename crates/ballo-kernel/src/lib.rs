//! # Ballo Kernel
//!
//! The rules that decide which competitive bracket a dancer or a couple
//! belongs to, and which skill class they carry into an event.
//!
//! This crate is **pure**: no I/O, no clock reads, no shared state. Callers
//! hand it plain records and an explicit reference date and get back
//! deterministic verdicts.
//!
//! ## Architecture
//!
//! ```text
//! age          ← sports age = reference year − birth year
//!     │
//! category     ← static age table, seasonal grace window, label normalization
//!     │
//! validation   ← solo / couple category verdicts (age-gap + Senior→Adult)
//!
//! class        ← skill-class ranking and best-of comparison
//!     │
//! discipline   ← closed discipline enum parsed at the boundary
//!     │
//! resolve      ← per-discipline best class, combinata rule
//! ```

pub mod age;
pub mod category;
pub mod class;
pub mod discipline;
pub mod error;
pub mod resolve;
pub mod validation;

pub use age::{parse_birth_date, sports_age, sports_age_from_date};
pub use category::{
    CATEGORY_RULES, CategoryLabel, CategoryRule, SEASON_GRACE_LAST_MONTH, allowed_categories,
    allowed_categories_for_age, category_display_code, category_min_age,
    expected_category_from_age, format_category_display, normalize_category,
};
pub use class::{
    CLASS_RANKS, UNRANKED_CLASS_RANK, WEAKEST_CLASS, best_class, class_rank, is_class_at_least,
    normalize_class,
};
pub use discipline::{Discipline, DisciplineEntry, DisciplineKey};
pub use error::KernelError;
pub use resolve::{ClassResolution, DisciplineInfo, resolve_discipline_classes, resolved_combinata};
pub use validation::{
    AGE_GAP_TOLERANCE, CategoryIssue, CategoryVerdict, CoupleCategoryCheck, SoloCategoryCheck,
    validate_category_match, validate_couple_category,
};
