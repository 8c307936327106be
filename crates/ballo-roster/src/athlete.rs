//! Athlete records.

use ballo_kernel::{DisciplineEntry, normalize_class};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::dates::{normalize_date, parse_category_cell};

/// Maximum number of discipline assignments per athlete.
pub const MAX_DISCIPLINES: usize = 4;

const MAX_CODE_LEN: usize = 30;
const MAX_NAME_LEN: usize = 100;
const MAX_CATEGORY_LEN: usize = 50;
const MAX_CLASS_LEN: usize = 10;

/// Athlete sex as recorded by the federation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// A registered athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    /// Federation code, unique per athlete.
    pub code: String,
    pub first_name: String,
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_certificate_expiry: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disciplines: Vec<DisciplineEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
}

impl Athlete {
    pub fn new(code: impl Into<String>, first_name: &str, last_name: &str) -> Self {
        Self {
            code: code.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date: None,
            gender: None,
            category: String::new(),
            medical_certificate_expiry: None,
            disciplines: Vec::new(),
            partner_code: None,
        }
    }

    /// `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_male(&self) -> bool {
        self.gender == Some(Gender::Male)
    }

    /// Canonical form of a record as read from a spreadsheet export.
    ///
    /// Dates become ISO (unparseable ones are dropped), text fields are
    /// trimmed, classes uppercased, and a partner code equal to the
    /// athlete's own code is discarded.
    pub fn normalized(&self) -> Self {
        let code = self.code.trim().to_string();
        let partner_code = self
            .partner_code
            .as_deref()
            .map(str::trim)
            .filter(|partner| !partner.is_empty() && *partner != code)
            .map(str::to_string);

        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            birth_date: self.birth_date.as_deref().and_then(normalize_date),
            gender: self.gender,
            category: parse_category_cell(&self.category),
            medical_certificate_expiry: self
                .medical_certificate_expiry
                .as_deref()
                .and_then(normalize_date),
            disciplines: self
                .disciplines
                .iter()
                .map(|entry| DisciplineEntry {
                    class: normalize_class(&entry.class),
                    ..entry.clone()
                })
                .collect(),
            partner_code,
            code,
        }
    }

    /// Field-level problems that make the record unfit for import.
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();

        let code = self.code.trim();
        if code.is_empty() {
            issues.push(FieldIssue::new("code", "Codice obbligatorio"));
        } else if code.chars().count() > MAX_CODE_LEN {
            issues.push(FieldIssue::new("code", "Codice troppo lungo (max 30)"));
        } else if !code_re().is_match(code) {
            issues.push(FieldIssue::new("code", "Codice contiene caratteri non validi"));
        }

        check_name(&mut issues, "first_name", "Nome", &self.first_name);
        check_name(&mut issues, "last_name", "Cognome", &self.last_name);

        if let Some(birth) = &self.birth_date
            && !iso_date_re().is_match(birth)
        {
            issues.push(FieldIssue::new("birth_date", "Data di nascita non valida"));
        }
        if let Some(expiry) = &self.medical_certificate_expiry
            && !iso_date_re().is_match(expiry)
        {
            issues.push(FieldIssue::new(
                "medical_certificate_expiry",
                "Data scadenza certificato non valida",
            ));
        }

        if self.category.trim().chars().count() > MAX_CATEGORY_LEN {
            issues.push(FieldIssue::new(
                "category",
                "Categoria troppo lunga (max 50)",
            ));
        }

        if self.disciplines.len() > MAX_DISCIPLINES {
            issues.push(FieldIssue::new("disciplines", "Massimo 4 discipline"));
        }
        if self
            .disciplines
            .iter()
            .any(|entry| entry.class.trim().chars().count() > MAX_CLASS_LEN)
        {
            issues.push(FieldIssue::new("disciplines", "Classe troppo lunga"));
        }

        if let Some(partner) = self.partner_code.as_deref().map(str::trim)
            && !partner.is_empty()
        {
            if partner.chars().count() > MAX_CODE_LEN {
                issues.push(FieldIssue::new(
                    "partner_code",
                    "Codice partner troppo lungo",
                ));
            } else if !code_re().is_match(partner) {
                issues.push(FieldIssue::new(
                    "partner_code",
                    "Codice partner contiene caratteri non validi",
                ));
            }
        }

        issues
    }
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._/-]+$").expect("code regex must compile"))
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-zÀ-ÿ\s'’-]+$").expect("name regex must compile"))
}

fn iso_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("iso date regex must compile"))
}

fn check_name(issues: &mut Vec<FieldIssue>, field: &'static str, label: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        issues.push(FieldIssue {
            field,
            message: format!("{label} obbligatorio"),
        });
    } else if value.chars().count() > MAX_NAME_LEN {
        issues.push(FieldIssue {
            field,
            message: format!("{label} troppo lungo (max 100)"),
        });
    } else if !name_re().is_match(value) {
        issues.push(FieldIssue {
            field,
            message: format!("{label} contiene caratteri non validi"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballo_kernel::Discipline;

    fn raw_athlete() -> Athlete {
        Athlete {
            code: " AB123 ".to_string(),
            first_name: " Maria ".to_string(),
            last_name: "D'Angelo".to_string(),
            birth_date: Some("05/03/09".to_string()),
            gender: Some(Gender::Female),
            category: "cat: Youth".to_string(),
            medical_certificate_expiry: Some("2025/9/1".to_string()),
            disciplines: vec![DisciplineEntry::parse("Danze Standard", " b1 ").unwrap()],
            partner_code: Some("AB123".to_string()),
        }
    }

    #[test]
    fn normalized_canonicalizes_fields() {
        let athlete = raw_athlete().normalized();
        assert_eq!(athlete.code, "AB123");
        assert_eq!(athlete.first_name, "Maria");
        assert_eq!(athlete.birth_date.as_deref(), Some("2009-03-05"));
        assert_eq!(athlete.category, "Youth");
        assert_eq!(
            athlete.medical_certificate_expiry.as_deref(),
            Some("2025-09-01")
        );
        assert_eq!(athlete.disciplines[0].class, "B1");
        assert_eq!(athlete.disciplines[0].discipline, Discipline::Standard);
        assert_eq!(athlete.partner_code, None, "self-partner is dropped");
    }

    #[test]
    fn normalized_drops_unparseable_dates() {
        let mut athlete = raw_athlete();
        athlete.birth_date = Some("n/d".to_string());
        assert_eq!(athlete.normalized().birth_date, None);
    }

    #[test]
    fn normalized_record_validates() {
        assert!(raw_athlete().normalized().validate().is_empty());
    }

    #[test]
    fn validate_reports_each_bad_field() {
        let mut athlete = Athlete::new("AB 1", "", "R2D2");
        athlete.birth_date = Some("05/03/2009".to_string());
        let fields: Vec<&str> = athlete.validate().iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["code", "first_name", "last_name", "birth_date"]);
        assert_eq!(athlete.validate()[1].message, "Nome obbligatorio");
    }

    #[test]
    fn validate_limits_disciplines() {
        let mut athlete = Athlete::new("X1", "Ada", "Rossi");
        athlete.disciplines = vec![DisciplineEntry::parse("Latino", "A").unwrap(); 5];
        let issues = athlete.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "disciplines: Massimo 4 discipline");
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" F ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("X".parse::<Gender>().is_err());
    }

    #[test]
    fn jsonl_shape_omits_empty_fields() {
        let athlete = Athlete::new("X1", "Ada", "Rossi");
        let json = serde_json::to_string(&athlete).unwrap();
        assert_eq!(json, r#"{"code":"X1","first_name":"Ada","last_name":"Rossi"}"#);
    }
}
