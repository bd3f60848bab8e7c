// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessors for options stored in a loosely-typed configuration map.
//!
//! Configuration parsed from JSON, YAML or property files usually ends up as a map from
//! string keys to untyped values. This crate lets an application declare a catalog of
//! known options against such a map and read each one back as a strongly-typed value,
//! converting stringified primitives, applying per-option parsing and substituting
//! defaults along the way.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The dynamic value model (`ConfigValue`, `ConfigMap`), the target
//!   types it converts into (`ConfigType`), the `ConfigOption` capability and errors
//! - **Ports**: The `Converter` trait options delegate coercion to
//! - **Adapters**: `DefaultConverter` and the YAML boundary adapter
//!
//! # Feature Flags
//!
//! - `yaml`: Enable conversion from YAML documents (default)
//!
//! # Quick Start
//!
//! ```rust
//! use config_option::prelude::*;
//!
//! enum Topology {
//!     BatchSize,
//!     ZookeeperQuorum,
//! }
//!
//! impl ConfigOption for Topology {
//!     fn key(&self) -> &str {
//!         match self {
//!             Topology::BatchSize => "batch.size",
//!             Topology::ZookeeperQuorum => "zookeeper.quorum",
//!         }
//!     }
//!
//!     fn transform(&self) -> Option<Transform> {
//!         match self {
//!             Topology::ZookeeperQuorum => Some(transforms::comma_separated),
//!             Topology::BatchSize => None,
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let mut config = ConfigMap::new();
//! Topology::BatchSize.put(&mut config, "250");
//! Topology::ZookeeperQuorum.put(&mut config, "zk1:2181, zk2:2181");
//!
//! let batch_size: u32 = Topology::BatchSize.get_or_default(&config, 100)?;
//! let quorum: Vec<String> = Topology::ZookeeperQuorum.get_transformed_or_default(&config, Vec::new())?;
//!
//! assert_eq!(batch_size, 250);
//! assert_eq!(quorum, ["zk1:2181", "zk2:2181"]);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{ConversionMode, DefaultConverter};
    pub use crate::domain::{
        transforms, ConfigError, ConfigMap, ConfigOption, ConfigType, ConfigValue, Result,
        Transform,
    };
    pub use crate::ports::Converter;

    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
