// SPDX-License-Identifier: MPL-2.0
//! Configuration for the localization loader.
//!
//! A [`LocalizeConfig`] can be built directly, from a map of named options
//! (the way framework modules receive their settings), or read from a
//! `localize.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use serde_json::json;
//! use tight::config::{self, LocalizeConfig};
//!
//! let config = LocalizeConfig::from_options(json!({
//!     "resourceFolder": "./res",
//!     "resourceFileName": "messages",
//!     "defaultLocale": "en",
//! }))
//! .expect("options should be a map");
//! assert_eq!(config.resource_file_name, "messages");
//!
//! config::save_to_path(&config, "./localize.toml".as_ref()).expect("Failed to save config");
//! let loaded = config::load_from_path("./localize.toml".as_ref()).expect("Failed to load");
//! assert_eq!(loaded, config);
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{
    DEFAULT_LANG_SEPARATOR, DEFAULT_LOCALE, DEFAULT_RESOURCE_FILE_NAME,
    DEFAULT_RESOURCE_FILE_TYPE, DEFAULT_RESOURCE_FOLDER,
};

/// How resource file names are matched when listing the available locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNameMatch {
    /// The file stem is the resource name, or starts with the resource name
    /// followed by the language separator.
    #[default]
    Stem,
    /// The file name merely contains the resource name.
    ///
    /// With a resource name of `msg` this also matches `msgbox_en.json`.
    Substring,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizeConfig {
    #[serde(alias = "resourceFolder")]
    pub resource_folder: PathBuf,
    #[serde(alias = "resourceFileName")]
    pub resource_file_name: String,
    #[serde(alias = "resourceFileType")]
    pub resource_file_type: String,
    #[serde(alias = "langSeparator")]
    pub lang_separator: String,
    #[serde(alias = "defaultLocale")]
    pub default_locale: String,
    #[serde(alias = "fileNameMatch")]
    pub file_name_match: FileNameMatch,
}

impl Default for LocalizeConfig {
    fn default() -> Self {
        Self {
            resource_folder: PathBuf::from(DEFAULT_RESOURCE_FOLDER),
            resource_file_name: DEFAULT_RESOURCE_FILE_NAME.to_string(),
            resource_file_type: DEFAULT_RESOURCE_FILE_TYPE.to_string(),
            lang_separator: DEFAULT_LANG_SEPARATOR.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            file_name_match: FileNameMatch::default(),
        }
    }
}

impl LocalizeConfig {
    /// Builds a config from a map of named options.
    ///
    /// Recognised options are `resourceFolder`, `resourceFileName`,
    /// `resourceFileType`, `langSeparator`, `defaultLocale` and
    /// `fileNameMatch` (snake_case spellings are accepted too). Missing
    /// options keep their defaults and unknown ones are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `options` is not a map, if a
    /// recognised option has the wrong type, or if `langSeparator` is empty.
    pub fn from_options(options: Value) -> Result<Self> {
        if !options.is_object() {
            return Err(Error::InvalidArgument(format!(
                "expected a map of options or a LocalizeConfig, got {}",
                json_kind(&options)
            )));
        }
        let config: Self = serde_json::from_value(options)
            .map_err(|err| Error::InvalidArgument(err.to_string()))?;
        if config.lang_separator.is_empty() {
            return Err(Error::InvalidArgument(
                "langSeparator must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn with_resource_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.resource_folder = folder.into();
        self
    }

    pub fn with_resource_file_name(mut self, name: impl Into<String>) -> Self {
        self.resource_file_name = name.into();
        self
    }

    pub fn with_resource_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.resource_file_type = file_type.into();
        self
    }

    pub fn with_lang_separator(mut self, separator: impl Into<String>) -> Self {
        self.lang_separator = separator.into();
        self
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn with_file_name_match(mut self, policy: FileNameMatch) -> Self {
        self.file_name_match = policy;
        self
    }
}

/// Either an already-typed config or a map of named options.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    Typed(LocalizeConfig),
    Options(Value),
}

impl ConfigSource {
    /// Normalizes the source into a typed config.
    pub fn into_config(self) -> Result<LocalizeConfig> {
        match self {
            ConfigSource::Typed(config) => Ok(config),
            ConfigSource::Options(options) => LocalizeConfig::from_options(options),
        }
    }
}

impl From<LocalizeConfig> for ConfigSource {
    fn from(config: LocalizeConfig) -> Self {
        ConfigSource::Typed(config)
    }
}

impl From<Value> for ConfigSource {
    fn from(options: Value) -> Self {
        ConfigSource::Options(options)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}

pub fn load_from_path(path: &Path) -> Result<LocalizeConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &LocalizeConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
