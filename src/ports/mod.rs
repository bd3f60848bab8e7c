// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the outbound interfaces options depend on. Adapters in the
//! adapters layer provide the concrete implementations.

pub mod converter;

// Re-export commonly used types
pub use converter::Converter;
