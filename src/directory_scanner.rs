// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding locale resource files.
//!
//! This module lists a resource folder, keeps the regular files whose name
//! matches the configured resource name and extension, and derives the locale
//! code each file provides. Entries are kept in directory enumeration order,
//! which is platform dependent.

use crate::config::{FileNameMatch, LocalizeConfig};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A resource file found in the resource folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    path: PathBuf,
    locale: String,
}

impl ResourceFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Locale code derived from the file name.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

/// The resource files present in a resource folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceList {
    files: Vec<ResourceFile>,
}

impl ResourceList {
    /// Scans `config.resource_folder` for files of type `file_type`.
    ///
    /// `file_type` is passed separately because the loader may override the
    /// configured type at runtime.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan(config: &LocalizeConfig, file_type: &str) -> Result<Self> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&config.resource_folder)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !matches_resource_name(
                file_name,
                &config.resource_file_name,
                &config.lang_separator,
                config.file_name_match,
            ) {
                continue;
            }
            let (stem, extension) = split_extension(file_name);
            if extension != Some(file_type) {
                continue;
            }

            let locale = locale_from_stem(stem, &config.lang_separator, &config.default_locale);
            files.push(ResourceFile {
                locale: locale.to_string(),
                path,
            });
        }

        Ok(Self { files })
    }

    pub fn files(&self) -> &[ResourceFile] {
        &self.files
    }

    /// Locale codes in enumeration order. Duplicates are kept.
    pub fn locales(&self) -> Vec<String> {
        self.files.iter().map(|f| f.locale.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Checks whether a file name belongs to the resource set named `name`.
pub fn matches_resource_name(
    file_name: &str,
    name: &str,
    separator: &str,
    policy: FileNameMatch,
) -> bool {
    match policy {
        FileNameMatch::Substring => file_name.contains(name),
        FileNameMatch::Stem => {
            let (stem, _) = split_extension(file_name);
            if stem == name {
                return true;
            }
            !separator.is_empty()
                && stem
                    .strip_prefix(name)
                    .is_some_and(|rest| rest.starts_with(separator))
        }
    }
}

/// Splits `file_name` at its last dot into base name and extension.
fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    }
}

/// Derives the locale from a base name: the last separator segment when
/// there is more than one, the default locale otherwise.
pub fn locale_from_stem<'a>(stem: &'a str, separator: &str, default_locale: &'a str) -> &'a str {
    if separator.is_empty() {
        return default_locale;
    }
    match stem.rsplit_once(separator) {
        Some((_, locale)) => locale,
        None => default_locale,
    }
}
