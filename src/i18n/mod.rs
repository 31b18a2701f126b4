// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! [`Localize`] loads one JSON resource file per locale from a resource
//! folder and answers key lookups against the active locale.
//!
//! # Features
//!
//! - Eager validation of the resource folder
//! - Locale file with a locale-less fallback file
//! - Runtime locale switching
//! - Discovery of the locales present on disk
//!
//! Lookups never fail: a missing key yields an empty string, which also
//! hides misspelled keys.

pub mod resolve;
pub mod table;

use crate::config::{ConfigSource, LocalizeConfig};
use crate::directory_scanner::ResourceList;
use crate::error::{Error, Result};
use std::path::Path;

pub use resolve::{candidate_paths, resolve_locale_file};
pub use table::LocaleTable;

#[derive(Debug, Clone)]
pub struct Localize {
    config: LocalizeConfig,
    resource_file_type: String,
    locale: String,
    values: LocaleTable,
}

impl Localize {
    /// Creates a loader and loads the default locale.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `config` is an option value that is
    ///   not a map
    /// - [`Error::ResourceDirectoryNotFound`] if the resource folder does not
    ///   exist; no other file is touched in that case
    /// - any error from [`Localize::set_locale`] for the default locale
    pub fn new(config: impl Into<ConfigSource>) -> Result<Self> {
        let config = config.into().into_config()?;
        check_resource_folder(&config.resource_folder)?;

        let mut localize = Self {
            resource_file_type: config.resource_file_type.clone(),
            locale: config.default_locale.clone(),
            config,
            values: LocaleTable::new(),
        };
        let default_locale = localize.config.default_locale.clone();
        localize.set_locale(&default_locale)?;
        Ok(localize)
    }

    /// Switches to `locale`, replacing the whole table.
    ///
    /// Loads `<name><sep><locale>.<type>` if present, else `<name>.<type>`.
    /// A body that does not decode to a JSON object loads as an empty table.
    /// On any error the current locale and table are left as they were.
    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        let candidates = candidate_paths(&self.config, &self.resource_file_type, locale);
        let file = resolve_locale_file(&candidates, Path::is_file)?;
        if file != candidates[0].as_path() {
            log::warn!(
                "No resource file for locale '{}', falling back to {}",
                locale,
                file.display()
            );
        }

        let values = table::load_table(file)?;
        log::info!("Locale set to '{}' ({} keys)", locale, values.len());
        self.values = values;
        self.locale = locale.to_string();
        Ok(())
    }

    /// Current locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the value for `key`, or an empty string if it is not defined.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All values defined for the current locale.
    pub fn values(&self) -> &LocaleTable {
        &self.values
    }

    /// Lists the locales available in the resource folder, in directory
    /// enumeration order.
    ///
    /// The locale-less fallback file is reported as the default locale.
    pub fn locales(&self) -> Result<Vec<String>> {
        let list = ResourceList::scan(&self.config, &self.resource_file_type)?;
        Ok(list.locales())
    }

    pub fn set_resource_file_type(&mut self, file_type: impl Into<String>) -> &mut Self {
        self.resource_file_type = file_type.into();
        self
    }

    pub fn resource_file_type(&self) -> &str {
        &self.resource_file_type
    }

    pub fn config(&self) -> &LocalizeConfig {
        &self.config
    }

    /// Resets the current locale marker to the configured default.
    ///
    /// The loaded table is kept; call [`Localize::set_locale`] to reload it.
    pub fn reload_config(&mut self) {
        self.locale = self.config.default_locale.clone();
    }

    /// Replaces the configuration and loads its default locale.
    ///
    /// The loader is unchanged if the new folder or default locale file
    /// cannot be loaded.
    pub fn set_config(&mut self, config: impl Into<ConfigSource>) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }
}

fn check_resource_folder(folder: &Path) -> Result<()> {
    if !folder.is_dir() {
        return Err(Error::ResourceDirectoryNotFound(folder.to_path_buf()));
    }
    log::debug!("Using resource folder {}", folder.display());
    Ok(())
}
