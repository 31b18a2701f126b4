// SPDX-License-Identifier: MPL-2.0
//! Test utilities for the unit tests.
//!
//! - [`RecordingRenderer`]: a [`Renderer`] that records every call

use crate::application::port::Renderer;
use crate::error::{Error, Result};
use serde_json::Value;

/// A call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Display(String),
    Assign {
        name: String,
        value: Value,
        no_cache: bool,
    },
}

/// Renderer that records calls instead of producing output.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
    fail_display: bool,
}

impl RecordingRenderer {
    /// A renderer whose `display` always fails.
    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            fail_display: true,
        }
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Template identifiers passed to `display`, in call order.
    pub fn displayed(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Display(template) => Some(template.as_str()),
                RenderCall::Assign { .. } => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn display(&mut self, template: &str) -> Result<()> {
        self.calls.push(RenderCall::Display(template.to_string()));
        if self.fail_display {
            return Err(Error::Render(format!("cannot display {template}")));
        }
        Ok(())
    }

    fn assign(&mut self, name: &str, value: Value, no_cache: bool) {
        self.calls.push(RenderCall::Assign {
            name: name.to_string(),
            value,
            no_cache,
        });
    }
}
