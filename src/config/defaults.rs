// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the localization configuration.
//!
//! These are used whenever an option is missing from an option map or a
//! TOML config file.

/// Folder holding the resource files, relative to the working directory.
pub const DEFAULT_RESOURCE_FOLDER: &str = "res";

/// Base name shared by every resource file (`values_fr.json`, `values.json`).
pub const DEFAULT_RESOURCE_FILE_NAME: &str = "values";

/// Extension of the resource files, without the leading dot.
pub const DEFAULT_RESOURCE_FILE_TYPE: &str = "json";

/// Separator between the base name and the locale code.
pub const DEFAULT_LANG_SEPARATOR: &str = "_";

/// Locale loaded at construction and reported for the locale-less file.
pub const DEFAULT_LOCALE: &str = "en";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_RESOURCE_FILE_NAME.is_empty());
    assert!(!DEFAULT_RESOURCE_FILE_TYPE.is_empty());
    assert!(!DEFAULT_LANG_SEPARATOR.is_empty());
    assert!(!DEFAULT_LOCALE.is_empty());
};
