// SPDX-License-Identifier: MPL-2.0
//! Resource file resolution.
//!
//! Candidate paths are built from the configuration and tried in order; the
//! first one that exists wins. Resolution is kept free of I/O so it can be
//! driven by any existence predicate.

use crate::config::LocalizeConfig;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Builds the candidate files for `locale`, most specific first:
///
/// 1. `<folder>/<name><separator><locale>.<file_type>`
/// 2. `<folder>/<name>.<file_type>`
pub fn candidate_paths(config: &LocalizeConfig, file_type: &str, locale: &str) -> [PathBuf; 2] {
    let name = &config.resource_file_name;
    let folder = &config.resource_folder;
    [
        folder.join(format!("{name}{}{locale}.{file_type}", config.lang_separator)),
        folder.join(format!("{name}.{file_type}")),
    ]
}

/// Returns the first candidate for which `exists` holds.
///
/// # Errors
///
/// Returns [`Error::ResourceFileNotFound`] naming the last candidate when
/// none exists.
pub fn resolve_locale_file<'a, F>(candidates: &'a [PathBuf], exists: F) -> Result<&'a Path>
where
    F: Fn(&Path) -> bool,
{
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|path| exists(*path))
        .ok_or_else(|| Error::ResourceFileNotFound {
            path: candidates.last().cloned().unwrap_or_default(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LocalizeConfig {
        LocalizeConfig::default()
            .with_resource_folder("/app/res")
            .with_resource_file_name("messages")
            .with_lang_separator("_")
    }

    #[test]
    fn candidates_put_locale_file_before_fallback() {
        let [locale_file, fallback] = candidate_paths(&config(), "json", "fr");
        assert_eq!(locale_file, PathBuf::from("/app/res/messages_fr.json"));
        assert_eq!(fallback, PathBuf::from("/app/res/messages.json"));
    }

    #[test]
    fn candidates_use_the_given_file_type() {
        let [locale_file, fallback] = candidate_paths(&config(), "lang", "de");
        assert_eq!(locale_file, PathBuf::from("/app/res/messages_de.lang"));
        assert_eq!(fallback, PathBuf::from("/app/res/messages.lang"));
    }

    #[test]
    fn first_existing_candidate_wins() {
        let candidates = candidate_paths(&config(), "json", "fr");
        let resolved = resolve_locale_file(&candidates, |_| true).expect("both exist");
        assert_eq!(resolved, Path::new("/app/res/messages_fr.json"));
    }

    #[test]
    fn falls_back_to_locale_less_file() {
        let candidates = candidate_paths(&config(), "json", "fr");
        let resolved = resolve_locale_file(&candidates, |p| p.ends_with("messages.json"))
            .expect("fallback exists");
        assert_eq!(resolved, Path::new("/app/res/messages.json"));
    }

    #[test]
    fn missing_everything_names_the_fallback_path() {
        let candidates = candidate_paths(&config(), "json", "fr");
        let err = resolve_locale_file(&candidates, |_| false).expect_err("nothing exists");
        assert_eq!(
            err,
            Error::ResourceFileNotFound {
                path: PathBuf::from("/app/res/messages.json")
            }
        );
    }

    #[test]
    fn empty_candidate_list_is_not_found() {
        let err = resolve_locale_file(&[], |_| true).expect_err("no candidates");
        assert!(err.is_missing_resource());
    }
}
