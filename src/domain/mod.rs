// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the option capability.
//!
//! This module holds the dynamic value model, the set of target types values can be read
//! as, the `ConfigOption` trait and the errors its operations produce.

pub mod config_type;
pub mod config_value;
pub mod errors;
pub mod option;
pub mod transforms;

// Re-export commonly used types
pub use config_type::ConfigType;
pub use config_value::{ConfigMap, ConfigValue};
pub use errors::{ConfigError, Result};
pub use option::{ConfigOption, Transform};
