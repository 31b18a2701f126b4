// SPDX-License-Identifier: MPL-2.0
//! Helpers shared by the integration tests.
//!
//! - [`RecordingRenderer`]: a [`Renderer`] that records every call
//! - [`write_resources`]: writes a set of resource files into a folder

use serde_json::Value;
use std::fs;
use std::path::Path;
use tight::application::port::Renderer;
use tight::Result;

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
}

impl RecordingRenderer {
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }
}

impl Renderer for RecordingRenderer {
    fn display(&mut self, template: &str) -> Result<()> {
        self.calls.push(RenderCall::Display(template.to_string()));
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

/// Writes each `(file name, body)` pair into `dir`.
pub fn write_resources(dir: &Path, files: &[(&str, &str)]) -> Result<()> {
    for (name, body) in files {
        fs::write(dir.join(name), body)?;
    }
    Ok(())
}
