//! Category verdicts for solo athletes and couples.
//!
//! A stored category is checked against the category the birth dates imply
//! on a given reference date. Anything the federation would flag as an
//! anomaly comes back as a [`CategoryVerdict::Mismatch`] carrying typed
//! [`CategoryIssue`]s; only unparseable dates are errors.
//!
//! Couples are placed by the older partner. The younger partner may be at
//! most [`AGE_GAP_TOLERANCE`] years below the bracket minimum. When that
//! fails in a Senior bracket the couple falls back to Adult, once: there is
//! no walk through the intermediate Senior brackets, so a couple whose gap
//! would fit e.g. Senior 2 but not Senior 4a is still sent to Adult.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::age::sports_age;
use crate::category::{
    CategoryLabel, allowed_categories, format_category_display, normalize_category,
};
use crate::error::KernelError;

/// Years the younger partner may be below the bracket's minimum age.
pub const AGE_GAP_TOLERANCE: i32 = 5;

/// Why a stored category was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryIssue {
    /// A required birth date is absent.
    MissingBirthDate { either_partner: bool },

    /// The stored category is none of the expected ones.
    CategoryMismatch { expected: Vec<CategoryLabel> },

    /// The younger partner is too far below the bracket minimum.
    AgeGapTooLarge {
        younger_age: i32,
        category: CategoryLabel,
        min_age: i32,
        floor: i32,
    },
}

impl std::fmt::Display for CategoryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBirthDate {
                either_partner: false,
            } => write!(f, "Data di nascita mancante"),
            Self::MissingBirthDate {
                either_partner: true,
            } => write!(f, "Data di nascita mancante (almeno uno)"),
            Self::CategoryMismatch { expected } => {
                let expected: Vec<String> = expected
                    .iter()
                    .map(|label| format_category_display(*label))
                    .collect();
                write!(f, "Categoria attesa: {}", expected.join(" o "))
            }
            Self::AgeGapTooLarge {
                younger_age,
                category,
                min_age,
                floor,
            } => write!(
                f,
                "Partner più giovane ({younger_age} anni) troppo distante dall'età minima \
                 categoria {category} ({min_age} anni). Minimo richiesto: {floor} anni."
            ),
        }
    }
}

/// Outcome of a category check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryVerdict {
    /// The stored category is acceptable; `expected` is the primary bracket.
    Match { expected: CategoryLabel },

    /// The stored category is not acceptable.
    Mismatch {
        expected: Vec<CategoryLabel>,
        issues: Vec<CategoryIssue>,
    },
}

impl CategoryVerdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// Every expected bracket, primary first.
    pub fn expected(&self) -> &[CategoryLabel] {
        match self {
            Self::Match { expected } => std::slice::from_ref(expected),
            Self::Mismatch { expected, .. } => expected,
        }
    }

    /// The primary expected bracket.
    pub fn primary(&self) -> CategoryLabel {
        self.expected()
            .first()
            .copied()
            .unwrap_or(CategoryLabel::Adult)
    }

    pub fn issues(&self) -> &[CategoryIssue] {
        match self {
            Self::Match { .. } => &[],
            Self::Mismatch { issues, .. } => issues,
        }
    }

    /// Human reason, issues joined with `" • "`. `None` on a match.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Match { .. } => None,
            Self::Mismatch { issues, .. } => Some(
                issues
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" • "),
            ),
        }
    }

    fn missing_birth_date(either_partner: bool) -> Self {
        Self::Mismatch {
            expected: vec![CategoryLabel::Adult],
            issues: vec![CategoryIssue::MissingBirthDate { either_partner }],
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ExpectedView<'a> {
    One(CategoryLabel),
    Many(&'a [CategoryLabel]),
}

#[derive(Serialize)]
struct VerdictView<'a> {
    ok: bool,
    expected: ExpectedView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "no_issues")]
    issues: &'a [CategoryIssue],
}

fn no_issues(issues: &&[CategoryIssue]) -> bool {
    issues.is_empty()
}

impl Serialize for CategoryVerdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let expected = match self {
            Self::Match { expected } => ExpectedView::One(*expected),
            Self::Mismatch { expected, .. } => ExpectedView::Many(expected),
        };
        VerdictView {
            ok: self.is_ok(),
            expected,
            reason: self.reason(),
            issues: self.issues(),
        }
        .serialize(serializer)
    }
}

fn present(date: Option<&str>) -> Option<&str> {
    date.filter(|d| !d.trim().is_empty())
}

/// Input of a solo category check.
#[derive(Debug, Clone, Copy)]
pub struct SoloCategoryCheck<'a> {
    pub stored_category: &'a str,
    pub birth_date: Option<&'a str>,
    pub on_date: NaiveDate,
}

/// Check an athlete's stored category against their birth date.
pub fn validate_category_match(
    check: &SoloCategoryCheck<'_>,
) -> Result<CategoryVerdict, KernelError> {
    let Some(birth_date) = present(check.birth_date) else {
        return Ok(CategoryVerdict::missing_birth_date(false));
    };

    let allowed = allowed_categories(birth_date, check.on_date)?;
    let stored = normalize_category(check.stored_category);

    if allowed.iter().any(|label| label.normalized_key() == stored) {
        return Ok(CategoryVerdict::Match {
            expected: allowed[0],
        });
    }

    Ok(CategoryVerdict::Mismatch {
        issues: vec![CategoryIssue::CategoryMismatch {
            expected: allowed.clone(),
        }],
        expected: allowed,
    })
}

/// Input of a couple category check.
#[derive(Debug, Clone, Copy)]
pub struct CoupleCategoryCheck<'a> {
    pub stored_category: &'a str,
    pub athlete1_birth_date: Option<&'a str>,
    pub athlete2_birth_date: Option<&'a str>,
    pub on_date: NaiveDate,
}

fn younger_fits(younger_age: i32, category: CategoryLabel) -> bool {
    younger_age >= category.rule().min_age - AGE_GAP_TOLERANCE
}

/// Check a couple's stored category against both birth dates.
pub fn validate_couple_category(
    check: &CoupleCategoryCheck<'_>,
) -> Result<CategoryVerdict, KernelError> {
    let (Some(birth1), Some(birth2)) = (
        present(check.athlete1_birth_date),
        present(check.athlete2_birth_date),
    ) else {
        return Ok(CategoryVerdict::missing_birth_date(true));
    };

    let age1 = sports_age(birth1, check.on_date)?;
    let age2 = sports_age(birth2, check.on_date)?;
    let younger_age = age1.min(age2);
    let older_birth = if age1 >= age2 { birth1 } else { birth2 };

    let allowed = allowed_categories(older_birth, check.on_date)?;
    let mut effective = allowed[0];

    if !younger_fits(younger_age, effective)
        && effective.is_senior()
        && younger_fits(younger_age, CategoryLabel::Adult)
    {
        tracing::debug!(
            from = %effective,
            younger_age,
            "age gap too large for senior bracket, falling back to Adult"
        );
        effective = CategoryLabel::Adult;
    }

    let stored = normalize_category(check.stored_category);
    let effective_key = effective.normalized_key();
    let category_matches = stored == effective_key
        || (effective == CategoryLabel::Under21 && stored == CategoryLabel::Adult.normalized_key());
    let gap_ok = younger_fits(younger_age, effective);

    if category_matches && gap_ok {
        return Ok(CategoryVerdict::Match {
            expected: effective,
        });
    }

    let mut issues = Vec::new();
    if !category_matches {
        issues.push(CategoryIssue::CategoryMismatch {
            expected: vec![effective],
        });
    }
    if !gap_ok {
        let min_age = effective.rule().min_age;
        issues.push(CategoryIssue::AgeGapTooLarge {
            younger_age,
            category: effective,
            min_age,
            floor: min_age - AGE_GAP_TOLERANCE,
        });
    }

    Ok(CategoryVerdict::Mismatch {
        expected: vec![effective],
        issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn solo(stored: &str, birth: Option<&str>, on: NaiveDate) -> CategoryVerdict {
        validate_category_match(&SoloCategoryCheck {
            stored_category: stored,
            birth_date: birth,
            on_date: on,
        })
        .expect("valid dates")
    }

    fn couple(stored: &str, b1: Option<&str>, b2: Option<&str>, on: NaiveDate) -> CategoryVerdict {
        validate_couple_category(&CoupleCategoryCheck {
            stored_category: stored,
            athlete1_birth_date: b1,
            athlete2_birth_date: b2,
            on_date: on,
        })
        .expect("valid dates")
    }

    #[test]
    fn solo_missing_birth_date() {
        let verdict = solo("Adult", None, date(2025, 6, 1));
        assert!(!verdict.is_ok());
        assert_eq!(verdict.expected(), &[CategoryLabel::Adult]);
        assert_eq!(verdict.reason().as_deref(), Some("Data di nascita mancante"));

        let blank = solo("Adult", Some("  "), date(2025, 6, 1));
        assert_eq!(blank, verdict);
    }

    #[test]
    fn solo_accepts_either_bracket_in_grace_window() {
        let on = date(2025, 2, 10);
        let current = solo("Senior 1", Some("1990-05-01"), on);
        let previous = solo("19/34", Some("1990-05-01"), on);
        assert_eq!(
            current,
            CategoryVerdict::Match {
                expected: CategoryLabel::Senior1
            }
        );
        assert_eq!(
            previous,
            CategoryVerdict::Match {
                expected: CategoryLabel::Senior1
            }
        );
    }

    #[test]
    fn solo_mismatch_lists_all_allowed() {
        let verdict = solo("Youth", Some("1990-05-01"), date(2025, 2, 10));
        assert_eq!(
            verdict.reason().as_deref(),
            Some("Categoria attesa: 35/44 (Senior 1) o 19/34 (Adult)")
        );
        assert_eq!(
            verdict.expected(),
            &[CategoryLabel::Senior1, CategoryLabel::Adult]
        );
    }

    #[test]
    fn solo_rejects_previous_bracket_after_march() {
        let verdict = solo("Adult", Some("1990-05-01"), date(2025, 4, 1));
        assert_eq!(
            verdict.reason().as_deref(),
            Some("Categoria attesa: 35/44 (Senior 1)")
        );
    }

    #[test]
    fn solo_invalid_date_is_an_error() {
        let err = validate_category_match(&SoloCategoryCheck {
            stored_category: "Adult",
            birth_date: Some("01/05/1990"),
            on_date: date(2025, 6, 1),
        })
        .unwrap_err();
        assert!(matches!(err, KernelError::InvalidDate { .. }));
    }

    #[test]
    fn couple_missing_either_birth_date() {
        let verdict = couple("Adult", Some("1990-01-01"), None, date(2025, 6, 1));
        assert_eq!(
            verdict.reason().as_deref(),
            Some("Data di nascita mancante (almeno uno)")
        );
        assert_eq!(verdict.expected(), &[CategoryLabel::Adult]);
    }

    #[test]
    fn couple_is_placed_by_older_partner() {
        let verdict = couple(
            "Senior 2",
            Some("1983-03-03"),
            Some("1978-07-07"),
            date(2025, 6, 1),
        );
        assert_eq!(
            verdict,
            CategoryVerdict::Match {
                expected: CategoryLabel::Senior2
            }
        );
    }

    #[test]
    fn senior_couple_with_large_gap_falls_back_to_adult() {
        // Sports ages 40 and 16: Senior 1 needs 30+, Adult needs 14+.
        let on = date(2025, 6, 1);
        let stored_senior = couple("Senior1", Some("1985-01-01"), Some("2009-01-01"), on);
        assert_eq!(
            stored_senior.issues(),
            &[CategoryIssue::CategoryMismatch {
                expected: vec![CategoryLabel::Adult]
            }]
        );
        assert_eq!(
            stored_senior.reason().as_deref(),
            Some("Categoria attesa: 19/34 (Adult)")
        );

        let stored_adult = couple("Adult", Some("1985-01-01"), Some("2009-01-01"), on);
        assert_eq!(
            stored_adult,
            CategoryVerdict::Match {
                expected: CategoryLabel::Adult
            }
        );
    }

    #[test]
    fn downgrade_is_a_single_step() {
        // Sports ages 66 and 45: Senior 4a needs 60+, fails; no stop at
        // Senior 2 even though 45 would fit it.
        let verdict = couple(
            "Senior 2",
            Some("1959-05-05"),
            Some("1980-05-05"),
            date(2025, 6, 1),
        );
        assert_eq!(verdict.expected(), &[CategoryLabel::Adult]);
        assert!(!verdict.is_ok());
    }

    #[test]
    fn gap_failure_without_fallback_reports_both_issues() {
        // Sports ages 16 and 9: Youth needs 11+, and Youth is not Senior.
        let verdict = couple(
            "Juvenile 1",
            Some("2009-02-02"),
            Some("2016-02-02"),
            date(2025, 6, 1),
        );
        assert_eq!(
            verdict.reason().as_deref(),
            Some(
                "Categoria attesa: 16/18 (Youth) • Partner più giovane (9 anni) troppo \
                 distante dall'età minima categoria Youth (16 anni). Minimo richiesto: 11 anni."
            )
        );
    }

    #[test]
    fn senior_gap_too_large_even_for_adult() {
        // Sports ages 50 and 12: Adult would need 14+, so Senior 2 stays.
        let verdict = couple(
            "Senior 2",
            Some("1975-01-01"),
            Some("2013-01-01"),
            date(2025, 6, 1),
        );
        assert_eq!(
            verdict.issues(),
            &[CategoryIssue::AgeGapTooLarge {
                younger_age: 12,
                category: CategoryLabel::Senior2,
                min_age: 45,
                floor: 40,
            }]
        );
    }

    #[test]
    fn under21_couple_accepts_adult_label() {
        let on = date(2025, 6, 1);
        let adult = couple("Adult", Some("2005-04-04"), Some("2006-04-04"), on);
        let under21 = couple("U21", Some("2005-04-04"), Some("2006-04-04"), on);
        let youth = couple("Youth", Some("2005-04-04"), Some("2006-04-04"), on);
        assert_eq!(
            adult,
            CategoryVerdict::Match {
                expected: CategoryLabel::Under21
            }
        );
        assert!(under21.is_ok());
        assert!(!youth.is_ok());
    }

    #[test]
    fn match_verdict_wire_shape() {
        let verdict = CategoryVerdict::Match {
            expected: CategoryLabel::Senior3a,
        };
        insta::assert_json_snapshot!(verdict, @r#"
        {
          "ok": true,
          "expected": "Senior 3a"
        }
        "#);
    }

    #[test]
    fn mismatch_verdict_wire_shape() {
        let verdict = couple(
            "Senior 2",
            Some("1975-01-01"),
            Some("2013-01-01"),
            date(2025, 6, 1),
        );
        insta::assert_json_snapshot!(verdict, @r#"
        {
          "ok": false,
          "expected": [
            "Senior 2"
          ],
          "reason": "Partner più giovane (12 anni) troppo distante dall'età minima categoria Senior 2 (45 anni). Minimo richiesto: 40 anni.",
          "issues": [
            {
              "kind": "age_gap_too_large",
              "younger_age": 12,
              "category": "Senior 2",
              "min_age": 45,
              "floor": 40
            }
          ]
        }
        "#);
    }
}
