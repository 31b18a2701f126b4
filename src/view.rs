// SPDX-License-Identifier: MPL-2.0
//! Template views.
//!
//! A [`TemplateView`] holds a template identifier and the [`Renderer`] it
//! was built with, and forwards `render` and `assign` to it unchanged.
//! Concrete views wrap a `TemplateView` and implement [`View`], which adds
//! the `on_load` hook each view must define.
//!
//! # Example
//!
//! ```
//! use serde_json::Value;
//! use tight::application::port::Renderer;
//! use tight::error::Result;
//! use tight::view::{TemplateView, View};
//!
//! #[derive(Default)]
//! struct Page {
//!     out: String,
//! }
//!
//! impl Renderer for Page {
//!     fn display(&mut self, template: &str) -> Result<()> {
//!         self.out.push_str(template);
//!         Ok(())
//!     }
//!
//!     fn assign(&mut self, name: &str, value: Value, _no_cache: bool) {
//!         self.out.push_str(&format!("{name}={value};"));
//!     }
//! }
//!
//! struct HomeView<R: Renderer> {
//!     inner: TemplateView<R>,
//! }
//!
//! impl<R: Renderer> View for HomeView<R> {
//!     type Renderer = R;
//!
//!     fn template_view(&self) -> &TemplateView<R> {
//!         &self.inner
//!     }
//!
//!     fn template_view_mut(&mut self) -> &mut TemplateView<R> {
//!         &mut self.inner
//!     }
//!
//!     fn on_load(&mut self) -> Result<()> {
//!         self.assign("title", "Home", false);
//!         Ok(())
//!     }
//! }
//!
//! let mut view = HomeView {
//!     inner: TemplateView::new("home.tpl", Page::default()),
//! };
//! view.on_load()?;
//! view.render()?;
//! assert_eq!(view.template_view().renderer().out, "title=\"Home\";home.tpl");
//! # Ok::<(), tight::error::Error>(())
//! ```

use crate::application::port::Renderer;
use crate::error::Result;
use serde_json::Value;

/// Delegation base shared by all views.
#[derive(Debug)]
pub struct TemplateView<R: Renderer> {
    template: String,
    renderer: R,
}

impl<R: Renderer> TemplateView<R> {
    pub fn new(template: impl Into<String>, renderer: R) -> Self {
        Self {
            template: template.into(),
            renderer,
        }
    }

    /// Displays the stored template through the renderer.
    pub fn render(&mut self) -> Result<()> {
        log::debug!("Rendering template {}", self.template);
        self.renderer.display(&self.template)
    }

    /// Assigns a template variable on the renderer.
    pub fn assign(&mut self, name: &str, value: impl Into<Value>, no_cache: bool) {
        self.renderer.assign(name, value.into(), no_cache);
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// A page view.
///
/// `on_load` has no default: every view decides what to assign before it is
/// rendered. The caller decides when to invoke it.
pub trait View {
    type Renderer: Renderer;

    fn template_view(&self) -> &TemplateView<Self::Renderer>;

    fn template_view_mut(&mut self) -> &mut TemplateView<Self::Renderer>;

    fn on_load(&mut self) -> Result<()>;

    fn render(&mut self) -> Result<()> {
        self.template_view_mut().render()
    }

    fn assign(&mut self, name: &str, value: impl Into<Value>, no_cache: bool) {
        self.template_view_mut().assign(name, value, no_cache);
    }
}
