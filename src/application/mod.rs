// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! Views depend on the ports defined here, never on a concrete template
//! engine. The engine adapter is handed to each view at construction.

pub mod port;
