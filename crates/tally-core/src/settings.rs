//! Settings file loading
//!
//! Settings are optional: an explicit `--settings` path wins, otherwise the
//! platform config directory is checked (`~/.config/tally/settings.toml` on
//! Linux), and a missing file simply means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// User-tunable behavior switches
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// When true, each successful bill autopay also appends an expense
    /// transaction to the ledger, the same way EMI charges do. Off by
    /// default: the stock behavior debits autopay against the cycle balance
    /// only, leaving no trace in the transaction log.
    pub autopay_ledger_entries: bool,
}

impl Settings {
    /// Platform default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tally").join("settings.toml"))
    }

    /// Load settings from `explicit` if given, falling back to the platform
    /// default path, falling back to defaults when no file exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Settings(format!(
                        "settings file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw)
            .map_err(|e| Error::Settings(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_a_file() {
        let settings = Settings::default();
        assert!(!settings.autopay_ledger_entries);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "autopay_ledger_entries = true").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert!(settings.autopay_ledger_entries);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/settings.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "autopay_ledger_entrees = true").unwrap();

        assert!(Settings::load(Some(file.path())).is_err());
    }
}
