// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains the default converter and, behind the `yaml` feature, the adapter
//! that turns YAML documents into configuration maps.

pub mod default_converter;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use default_converter::{ConversionMode, DefaultConverter};
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
