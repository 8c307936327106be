//! `ballo.toml`: season reference date, roster paths and log filter.
//!
//! Every key is optional. Relative roster paths resolve against the
//! directory holding the config file.
//!
//! ```toml
//! [season]
//! reference_date = "2025-02-10"
//!
//! [roster]
//! athletes = "data/athletes.jsonl"
//! couples = "data/couples.jsonl"
//! competitions = "data/competitions.jsonl"
//! events = "data/events.jsonl"
//!
//! [log]
//! filter = "ballo_roster=debug"
//! ```

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "ballo.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BalloConfig {
    pub season: SeasonConfig,
    pub roster: RosterPaths,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeasonConfig {
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterPaths {
    pub athletes: Option<PathBuf>,
    pub couples: Option<PathBuf>,
    pub competitions: Option<PathBuf>,
    pub events: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub filter: Option<String>,
}

impl BalloConfig {
    /// Parse config text; relative roster paths resolve against `base_dir`.
    pub fn from_toml_str(text: &str, origin: &Path, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: origin.display().to_string(),
            source,
        })?;
        config.roster.resolve_against(base_dir);
        Ok(config)
    }

    /// Load the config.
    ///
    /// An explicit path must exist. Without one, `./ballo.toml` is read when
    /// present and defaults apply otherwise.
    pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => PathBuf::from(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::from_toml_str(&text, &path, &base_dir)
    }
}

impl RosterPaths {
    fn resolve_against(&mut self, base_dir: &Path) {
        for slot in [
            &mut self.athletes,
            &mut self.couples,
            &mut self.competitions,
            &mut self.events,
        ] {
            if let Some(path) = slot.as_mut()
                && path.is_relative()
            {
                *path = base_dir.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<BalloConfig, ConfigError> {
        BalloConfig::from_toml_str(text, Path::new("ballo.toml"), Path::new("/srv/club"))
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = parse("").unwrap();
        assert!(config.season.reference_date.is_none());
        assert!(config.roster.athletes.is_none());
        assert!(config.log.filter.is_none());
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let config = parse(
            r#"
            [season]
            reference_date = "2025-02-10"

            [roster]
            athletes = "data/athletes.jsonl"
            events = "/abs/events.jsonl"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.season.reference_date,
            NaiveDate::from_ymd_opt(2025, 2, 10)
        );
        assert_eq!(
            config.roster.athletes,
            Some(PathBuf::from("/srv/club/data/athletes.jsonl"))
        );
        assert_eq!(config.roster.events, Some(PathBuf::from("/abs/events.jsonl")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse("[season]\nreference = \"2025-01-01\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().starts_with("invalid toml at ballo.toml"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = BalloConfig::load(Some("/nonexistent/ballo.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
