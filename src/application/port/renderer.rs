// SPDX-License-Identifier: MPL-2.0
//! Renderer port definition.
//!
//! This module defines the [`Renderer`] trait through which views reach the
//! template engine. Engine adapters implement it; views receive one at
//! construction.

use crate::error::Result;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Renderer Trait
// =============================================================================

/// Port for a template engine.
///
/// Only two operations are consumed: displaying a template and assigning a
/// template variable. What `display` produces and where it writes is up to
/// the implementation.
///
/// # Sharing
///
/// Implementations are provided for `&mut R`, `Box<R>` and `Rc<RefCell<R>>`,
/// so a caller can keep its own handle on the renderer a view writes to.
pub trait Renderer {
    /// Displays the template identified by `template`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Render`] if the engine cannot display
    /// the template.
    fn display(&mut self, template: &str) -> Result<()>;

    /// Assigns `value` to the template variable `name`.
    ///
    /// With `no_cache` set, the engine must not cache output that depends on
    /// this variable.
    fn assign(&mut self, name: &str, value: Value, no_cache: bool);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn display(&mut self, template: &str) -> Result<()> {
        (**self).display(template)
    }

    fn assign(&mut self, name: &str, value: Value, no_cache: bool) {
        (**self).assign(name, value, no_cache);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn display(&mut self, template: &str) -> Result<()> {
        (**self).display(template)
    }

    fn assign(&mut self, name: &str, value: Value, no_cache: bool) {
        (**self).assign(name, value, no_cache);
    }
}

impl<R: Renderer + ?Sized> Renderer for Rc<RefCell<R>> {
    fn display(&mut self, template: &str) -> Result<()> {
        self.borrow_mut().display(template)
    }

    fn assign(&mut self, name: &str, value: Value, no_cache: bool) {
        self.borrow_mut().assign(name, value, no_cache);
    }
}
