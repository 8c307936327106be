//! Dance disciplines.
//!
//! Federation exports name disciplines in free text ("Danze Latino
//! Americane", "10 Balli", "South American Showdance", ...). That text is
//! parsed once, at the boundary, into the closed [`Discipline`] enum; the
//! original label is kept alongside only to tell show-dance variants apart.

use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// A dance style grouping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Standard,
    Latino,
    Combinata,
    ShowDance,
}

impl Discipline {
    pub const ALL: [Discipline; 4] = [
        Discipline::Standard,
        Discipline::Latino,
        Discipline::Combinata,
        Discipline::ShowDance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Latino => "latino",
            Self::Combinata => "combinata",
            Self::ShowDance => "show_dance",
        }
    }

    /// The discipline-info key for the whole discipline.
    pub fn key(self) -> DisciplineKey {
        match self {
            Self::Standard => DisciplineKey::Standard,
            Self::Latino => DisciplineKey::Latino,
            Self::Combinata => DisciplineKey::Combinata,
            Self::ShowDance => DisciplineKey::ShowDance,
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Discipline {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "danze latino americane" | "danze latine" | "latino americane" | "latine"
            | "latino" => Ok(Self::Latino),
            "danze standard" | "standard" => Ok(Self::Standard),
            "combinata standard-latini" | "combinata standard latini" | "combinata"
            | "10 balli" => Ok(Self::Combinata),
            "south american showdance"
            | "south american show dance"
            | "classic showdance"
            | "classic show dance"
            | "showdance"
            | "show dance"
            | "show"
            | "show_dance" => Ok(Self::ShowDance),
            _ => Err(KernelError::UnknownDiscipline(s.to_string())),
        }
    }
}

/// Key of a per-discipline class, including the show-dance variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineKey {
    Standard,
    Latino,
    Combinata,
    ShowDance,
    ShowDanceSa,
    ShowDanceClassic,
}

impl DisciplineKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Latino => "latino",
            Self::Combinata => "combinata",
            Self::ShowDance => "show_dance",
            Self::ShowDanceSa => "show_dance_sa",
            Self::ShowDanceClassic => "show_dance_classic",
        }
    }

    /// The discipline this key belongs to.
    pub fn discipline(self) -> Discipline {
        match self {
            Self::Standard => Discipline::Standard,
            Self::Latino => Discipline::Latino,
            Self::Combinata => Discipline::Combinata,
            Self::ShowDance | Self::ShowDanceSa | Self::ShowDanceClassic => Discipline::ShowDance,
        }
    }

    /// Key for one assignment. Show dance is split by its raw label.
    pub fn for_entry(discipline: Discipline, raw_label: &str) -> Self {
        if discipline != Discipline::ShowDance {
            return discipline.key();
        }
        let raw = raw_label.to_lowercase();
        if raw.contains("south american") {
            Self::ShowDanceSa
        } else if raw.contains("classic") {
            Self::ShowDanceClassic
        } else {
            Self::ShowDance
        }
    }
}

impl std::fmt::Display for DisciplineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (discipline, class) assignment held by an athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineEntry {
    pub discipline: Discipline,
    pub class: String,
    /// The discipline text as it appeared in the source record.
    #[serde(default)]
    pub raw_label: String,
}

impl DisciplineEntry {
    /// Parse a free-text discipline label into an entry.
    pub fn parse(raw_label: &str, class: &str) -> Result<Self, KernelError> {
        Ok(Self {
            discipline: raw_label.parse()?,
            class: class.to_string(),
            raw_label: raw_label.trim().to_string(),
        })
    }

    pub fn key(&self) -> DisciplineKey {
        DisciplineKey::for_entry(self.discipline, &self.raw_label)
    }
}
