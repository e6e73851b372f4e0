//! User settings loaded from `promptfuse.toml`.
//!
//! Every field is optional; anything left unset falls back to the
//! built-in defaults or to values given on the command line.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::error::{PromptFuseError, PromptFuseResult};

/// File name looked up in the working directory when no path is given.
pub const SETTINGS_FILE_NAME: &str = "promptfuse.toml";

/// Model used when neither the settings file nor the CLI names one.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Phrase length (in tokens) used when none is configured.
pub const DEFAULT_PHRASE_LENGTH: usize = 2;

/// Number of report rows shown when none is configured.
pub const DEFAULT_TOP: usize = 20;

/// Settings as written in a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub model: Option<String>,
    pub phrase_length: Option<usize>,
    pub top: Option<usize>,
}

impl FileSettings {
    /// Load settings from an explicit path. A missing file is an error.
    pub fn load(path: &Path) -> PromptFuseResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PromptFuseError::file_read(path, e))?;
        let settings = Self::parse(&content)
            .map_err(|e| PromptFuseError::invalid_config(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load `promptfuse.toml` from a directory if present, defaults otherwise.
    pub fn discover(dir: &Path) -> PromptFuseResult<Self> {
        let path = dir.join(SETTINGS_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolved model name, CLI value first.
    pub fn model_or(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Resolved phrase length, CLI value first. Zero is rejected.
    pub fn phrase_length_or(&self, cli: Option<usize>) -> PromptFuseResult<usize> {
        let length = cli.or(self.phrase_length).unwrap_or(DEFAULT_PHRASE_LENGTH);
        if length == 0 {
            return Err(PromptFuseError::invalid_config(
                "phrase length must be at least 1",
            ));
        }
        Ok(length)
    }

    /// Resolved report size, CLI value first.
    pub fn top_or(&self, cli: Option<usize>) -> usize {
        cli.or(self.top).unwrap_or(DEFAULT_TOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial() {
        let settings = FileSettings::parse("model = \"gpt-4o\"\n").unwrap();
        assert_eq!(settings.model.as_deref(), Some("gpt-4o"));
        assert_eq!(settings.phrase_length, None);
        assert_eq!(settings.top, None);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(FileSettings::parse("dict_cost = 2\n").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let settings = FileSettings {
            model: Some("gpt-3.5-turbo".to_string()),
            phrase_length: Some(3),
            top: Some(5),
        };
        assert_eq!(settings.model_or(Some("gpt-4o".to_string())), "gpt-4o");
        assert_eq!(settings.model_or(None), "gpt-3.5-turbo");
        assert_eq!(settings.phrase_length_or(Some(4)).unwrap(), 4);
        assert_eq!(settings.phrase_length_or(None).unwrap(), 3);
        assert_eq!(settings.top_or(None), 5);
    }

    #[test]
    fn test_defaults() {
        let settings = FileSettings::default();
        assert_eq!(settings.model_or(None), DEFAULT_MODEL);
        assert_eq!(settings.phrase_length_or(None).unwrap(), DEFAULT_PHRASE_LENGTH);
        assert_eq!(settings.top_or(None), DEFAULT_TOP);
    }

    #[test]
    fn test_zero_phrase_length_rejected() {
        let settings = FileSettings::default();
        let err = settings.phrase_length_or(Some(0)).unwrap_err();
        assert!(matches!(err, PromptFuseError::InvalidConfig(_)));
    }

    #[test]
    fn test_discover_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FileSettings::discover(dir.path()).unwrap();
        assert_eq!(settings, FileSettings::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE_NAME),
            "phrase_length = 4\ntop = 10\n",
        )
        .unwrap();
        let settings = FileSettings::discover(dir.path()).unwrap();
        assert_eq!(settings.phrase_length, Some(4));
        assert_eq!(settings.top, Some(10));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "phrase_length = \"three\"").unwrap();
        let err = FileSettings::load(&path).unwrap_err();
        assert!(matches!(err, PromptFuseError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSettings::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, PromptFuseError::FileRead { .. }));
    }
}
