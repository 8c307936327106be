//! Age categories.
//!
//! The federation splits competitors into fourteen age brackets. The table
//! is contiguous from age 6 upward, with one deliberate overlap: "Under 21"
//! (19–20) is a display sub-bracket of "Adult" (19–34), listed first so that
//! 19- and 20-year-olds resolve to it.
//!
//! Stored categories arrive as free text (labels, abbreviations, age-range
//! codes), so every comparison goes through [`normalize_category`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::age::sports_age;
use crate::error::KernelError;

/// Last month (1-based) of the seasonal grace window. Until the end of
/// March an athlete may still compete in the previous year's bracket.
pub const SEASON_GRACE_LAST_MONTH: u32 = 3;

/// A named competitive age bracket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CategoryLabel {
    #[serde(rename = "Juvenile 1")]
    Juvenile1,
    #[serde(rename = "Juvenile 2")]
    Juvenile2,
    #[serde(rename = "Junior 1")]
    Junior1,
    #[serde(rename = "Junior 2")]
    Junior2,
    #[serde(rename = "Youth")]
    Youth,
    #[serde(rename = "Under 21")]
    Under21,
    #[serde(rename = "Adult")]
    Adult,
    #[serde(rename = "Senior 1")]
    Senior1,
    #[serde(rename = "Senior 2")]
    Senior2,
    #[serde(rename = "Senior 3a")]
    Senior3a,
    #[serde(rename = "Senior 3b")]
    Senior3b,
    #[serde(rename = "Senior 4a")]
    Senior4a,
    #[serde(rename = "Senior 4b")]
    Senior4b,
    #[serde(rename = "Senior 5")]
    Senior5,
}

impl CategoryLabel {
    /// Display name, e.g. `"Senior 3a"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Juvenile1 => "Juvenile 1",
            Self::Juvenile2 => "Juvenile 2",
            Self::Junior1 => "Junior 1",
            Self::Junior2 => "Junior 2",
            Self::Youth => "Youth",
            Self::Under21 => "Under 21",
            Self::Adult => "Adult",
            Self::Senior1 => "Senior 1",
            Self::Senior2 => "Senior 2",
            Self::Senior3a => "Senior 3a",
            Self::Senior3b => "Senior 3b",
            Self::Senior4a => "Senior 4a",
            Self::Senior4b => "Senior 4b",
            Self::Senior5 => "Senior 5",
        }
    }

    /// Canonical normalized key, e.g. `"senior3a"`.
    pub fn normalized_key(self) -> &'static str {
        match self {
            Self::Juvenile1 => "juvenile1",
            Self::Juvenile2 => "juvenile2",
            Self::Junior1 => "junior1",
            Self::Junior2 => "junior2",
            Self::Youth => "youth",
            Self::Under21 => "under21",
            Self::Adult => "adult",
            Self::Senior1 => "senior1",
            Self::Senior2 => "senior2",
            Self::Senior3a => "senior3a",
            Self::Senior3b => "senior3b",
            Self::Senior4a => "senior4a",
            Self::Senior4b => "senior4b",
            Self::Senior5 => "senior5",
        }
    }

    /// Whether this is one of the Senior brackets.
    pub fn is_senior(self) -> bool {
        matches!(
            self,
            Self::Senior1
                | Self::Senior2
                | Self::Senior3a
                | Self::Senior3b
                | Self::Senior4a
                | Self::Senior4b
                | Self::Senior5
        )
    }

    /// The rule table entry for this label.
    pub fn rule(self) -> &'static CategoryRule {
        // Every label has exactly one entry; the table is indexed by variant order.
        &CATEGORY_RULES[self as usize]
    }

    fn from_normalized_key(key: &str) -> Option<Self> {
        CATEGORY_RULES
            .iter()
            .map(|rule| rule.label)
            .find(|label| label.normalized_key() == key)
    }
}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_category(s);
        Self::from_normalized_key(&key).ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// One row of the age table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRule {
    pub label: CategoryLabel,
    pub min_age: i32,
    /// `None` for the open-ended top bracket.
    pub max_age: Option<i32>,
    pub display_code: &'static str,
}

impl CategoryRule {
    /// Whether `age` falls inside this bracket.
    pub fn contains(&self, age: i32) -> bool {
        age >= self.min_age && self.max_age.is_none_or(|max| age <= max)
    }
}

const fn rule(
    label: CategoryLabel,
    min_age: i32,
    max_age: Option<i32>,
    display_code: &'static str,
) -> CategoryRule {
    CategoryRule {
        label,
        min_age,
        max_age,
        display_code,
    }
}

/// The age table, sorted ascending by `min_age`, in `CategoryLabel` order.
pub const CATEGORY_RULES: [CategoryRule; 14] = [
    rule(CategoryLabel::Juvenile1, 6, Some(9), "6/9"),
    rule(CategoryLabel::Juvenile2, 10, Some(11), "10/11"),
    rule(CategoryLabel::Junior1, 12, Some(13), "12/13"),
    rule(CategoryLabel::Junior2, 14, Some(15), "14/15"),
    rule(CategoryLabel::Youth, 16, Some(18), "16/18"),
    rule(CategoryLabel::Under21, 19, Some(20), "19/20"),
    rule(CategoryLabel::Adult, 19, Some(34), "19/34"),
    rule(CategoryLabel::Senior1, 35, Some(44), "35/44"),
    rule(CategoryLabel::Senior2, 45, Some(54), "45/54"),
    rule(CategoryLabel::Senior3a, 55, Some(60), "55/60"),
    rule(CategoryLabel::Senior3b, 61, Some(64), "61/64"),
    rule(CategoryLabel::Senior4a, 65, Some(69), "65/69"),
    rule(CategoryLabel::Senior4b, 70, Some(74), "70/74"),
    rule(CategoryLabel::Senior5, 75, None, "75+"),
];

/// First bracket containing `age`; `Adult` when none does (ages below 6).
pub fn expected_category_from_age(age: i32) -> CategoryLabel {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.contains(age))
        .map(|rule| rule.label)
        .unwrap_or(CategoryLabel::Adult)
}

/// Acceptable brackets for a sports age on `reference`.
///
/// The first entry is the primary (current-year) bracket. From January to
/// March the previous year's bracket is appended when it differs.
pub fn allowed_categories_for_age(sports_age: i32, reference: NaiveDate) -> Vec<CategoryLabel> {
    let current = expected_category_from_age(sports_age);
    if reference.month() <= SEASON_GRACE_LAST_MONTH {
        let previous = expected_category_from_age(sports_age - 1);
        if previous != current {
            return vec![current, previous];
        }
    }
    vec![current]
}

/// Acceptable brackets for an athlete born on `birth_date_iso`.
pub fn allowed_categories(
    birth_date_iso: &str,
    reference: NaiveDate,
) -> Result<Vec<CategoryLabel>, KernelError> {
    let age = sports_age(birth_date_iso, reference)?;
    Ok(allowed_categories_for_age(age, reference))
}

fn label_alias(key: &str) -> Option<&'static str> {
    let canonical = match key {
        "juv1" | "ju1" | "juvenile1" => "juvenile1",
        "juv2" | "ju2" | "juvenile2" => "juvenile2",
        "junior1" => "junior1",
        "junior2" => "junior2",
        "youth" => "youth",
        "under21" | "u21" => "under21",
        "adult" => "adult",
        "senior1" => "senior1",
        "senior2" => "senior2",
        "senior3a" => "senior3a",
        "senior3b" => "senior3b",
        "senior4a" => "senior4a",
        "senior4b" => "senior4b",
        "senior5" => "senior5",
        _ => return None,
    };
    Some(canonical)
}

fn age_range_code(key: &str) -> Option<&'static str> {
    let canonical = match key {
        "69" => "juvenile1",
        "1011" => "juvenile2",
        "1213" => "junior1",
        "1415" => "junior2",
        "1618" => "youth",
        "1920" => "under21",
        "1934" => "adult",
        "3544" => "senior1",
        "4554" => "senior2",
        "5560" => "senior3a",
        "6164" => "senior3b",
        "6569" => "senior4a",
        "7074" => "senior4b",
        "75" | "75+" => "senior5",
        _ => return None,
    };
    Some(canonical)
}

/// Canonical key for any textual category representation.
///
/// Whitespace and `-_./` are stripped and the rest lowercased; the result
/// is looked up as a label/abbreviation, then as an age-range code.
/// Unrecognized input is returned cleaned but otherwise unchanged.
pub fn normalize_category(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '_' | '.' | '/'))
        .flat_map(char::to_lowercase)
        .collect();

    label_alias(&cleaned)
        .or_else(|| age_range_code(&cleaned))
        .map(str::to_string)
        .unwrap_or(cleaned)
}

/// `"<code> (<label>)"`, e.g. `"6/9 (Juvenile 1)"`.
pub fn format_category_display(label: CategoryLabel) -> String {
    format!("{} ({label})", category_display_code(label))
}

/// Age-range code of a bracket, e.g. `"6/9"`.
pub fn category_display_code(label: CategoryLabel) -> &'static str {
    label.rule().display_code
}

/// Minimum age of a stored (free-text) category, if it is recognized.
pub fn category_min_age(stored: &str) -> Option<i32> {
    stored
        .parse::<CategoryLabel>()
        .ok()
        .map(|label| label.rule().min_age)
}
