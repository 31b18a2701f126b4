// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`renderer`]: Template display and variable assignment
//!
//! # Design Notes
//!
//! - Ports carry plain values (`&str`, [`serde_json::Value`]), no engine types
//! - Methods are synchronous; rendering writes wherever the engine writes
//!
//! # Example
//!
//! ```ignore
//! use tight::application::port::Renderer;
//!
//! fn greet(renderer: &mut impl Renderer) -> tight::error::Result<()> {
//!     renderer.assign("name", "World".into(), false);
//!     renderer.display("hello.tpl")
//! }
//! ```

pub mod renderer;

pub use renderer::Renderer;
