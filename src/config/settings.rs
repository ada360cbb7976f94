use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Result, VaultError};
use crate::password::{parse_length, PasswordPolicy};

/// Project-level configuration, loaded from `.passmaster.toml`.
///
/// Every field has a sensible default so PassMaster works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Path of the raw key file (relative paths resolve against the project dir).
    #[serde(default = "default_key_file")]
    pub key_file: String,

    /// Path of the encrypted vault file.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Length used by `generate` when `--length` is not given.
    #[serde(default = "default_length")]
    pub default_length: usize,

    #[serde(default = "default_true")]
    pub use_upper: bool,

    #[serde(default = "default_true")]
    pub use_lower: bool,

    #[serde(default = "default_true")]
    pub use_digits: bool,

    #[serde(default = "default_true")]
    pub use_symbols: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_key_file() -> String {
    "secret.key".to_string()
}

fn default_vault_file() -> String {
    "passwords.vault".to_string()
}

fn default_length() -> usize {
    16
}

fn default_true() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_file: default_key_file(),
            vault_file: default_vault_file(),
            default_length: default_length(),
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".passmaster.toml";

    /// Load settings from `<project_dir>/.passmaster.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.default_length == 0 {
            return Err(VaultError::ConfigError(format!(
                "{}: default_length must be a positive integer",
                config_path.display()
            )));
        }

        Ok(settings)
    }

    /// Full path of the key file.
    pub fn key_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.key_file)
    }

    /// Full path of the vault file.
    pub fn vault_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_file)
    }

    /// The configured default character classes.
    pub fn policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            use_upper: self.use_upper,
            use_lower: self.use_lower,
            use_digits: self.use_digits,
            use_symbols: self.use_symbols,
        }
    }

    /// Resolve a user-supplied length, falling back to `default_length`.
    pub fn length(&self, requested: Option<&str>) -> Result<usize> {
        requested.map_or(Ok(self.default_length), parse_length)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.key_file, "secret.key");
        assert_eq!(s.vault_file, "passwords.vault");
        assert_eq!(s.default_length, 16);
        assert_eq!(s.policy(), PasswordPolicy::default());
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_file, "passwords.vault");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
key_file = "keys/vault.key"
vault_file = "data/creds.vault"
default_length = 24
use_symbols = false
"#;
        fs::write(tmp.path().join(".passmaster.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.key_file, "keys/vault.key");
        assert_eq!(settings.vault_file, "data/creds.vault");
        assert_eq!(settings.default_length, 24);
        assert!(!settings.policy().use_symbols);
        assert!(settings.policy().use_upper);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".passmaster.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(matches!(result, Err(VaultError::ConfigError(_))));
    }

    #[test]
    fn load_rejects_zero_default_length() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".passmaster.toml"), "default_length = 0\n").unwrap();

        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn paths_resolve_against_project_dir() {
        let s = Settings::default();
        let project = Path::new("/home/user/project");
        assert_eq!(
            s.key_path(project),
            PathBuf::from("/home/user/project/secret.key")
        );
        assert_eq!(
            s.vault_path(project),
            PathBuf::from("/home/user/project/passwords.vault")
        );
    }

    #[test]
    fn length_falls_back_to_default() {
        let s = Settings::default();
        assert_eq!(s.length(None).unwrap(), 16);
        assert_eq!(s.length(Some("32")).unwrap(), 32);
        assert!(s.length(Some("zero")).is_err());
    }
}
