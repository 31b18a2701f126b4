// SPDX-License-Identifier: MPL-2.0
//! `tight` provides the localization loader and the view base of the Tight
//! MVC micro-framework.
//!
//! - [`i18n::Localize`] loads per-locale JSON resource files with a
//!   locale-less fallback and answers key lookups.
//! - [`view::TemplateView`] and [`view::View`] forward rendering to an
//!   injected [`application::port::Renderer`].

#![doc(html_root_url = "https://docs.rs/tight/0.1.0")]

pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
#[cfg(test)]
mod test_utils;
pub mod view;

pub use config::{FileNameMatch, LocalizeConfig};
pub use error::{Error, Result};
pub use i18n::Localize;
pub use view::{TemplateView, View};
