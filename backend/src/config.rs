//! Application settings loaded via OrthoConfig.
//!
//! Values come from `SOCIAL_*` environment variables or a configuration file;
//! command-line flags on the `social` binary override them.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_STORAGE_DIR: &str = ".social";

/// Settings shared by every `social` command.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SOCIAL")]
pub struct AppSettings {
    /// Directory holding the local key/value store.
    pub storage_dir: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl AppSettings {
    /// Return the configured storage directory, falling back to `.social`.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("social")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("SOCIAL_STORAGE_DIR", None::<String>),
            ("SOCIAL_JSON_LOGS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.json_logs);
        assert_eq!(settings.storage_dir(), PathBuf::from(DEFAULT_STORAGE_DIR));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SOCIAL_STORAGE_DIR", Some("/tmp/social-store".to_owned())),
            ("SOCIAL_JSON_LOGS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.json_logs);
        assert_eq!(settings.storage_dir(), PathBuf::from("/tmp/social-store"));
    }
}
