// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converter trait definition.
//!
//! This module defines the `Converter` trait, the collaborator options delegate to when a
//! stored value is not already an instance of the requested type.

use crate::domain::{ConfigType, ConfigValue, Result};

/// A trait for coercing stored values into a requested type.
///
/// Implementations distinguish two outcomes that callers treat differently:
///
/// - `Ok(None)` means no value could be produced. Default-substituting reads replace this
///   with the caller's default.
/// - `Err(_)` is a structural failure. It always propagates, even when a default was given.
///
/// # Examples
///
/// ```rust
/// use config_option::domain::{ConfigType, ConfigValue, Result};
/// use config_option::ports::Converter;
///
/// /// Never converts anything.
/// struct NoConversion;
///
/// impl Converter for NoConversion {
///     fn convert<T: ConfigType>(&self, _key: &str, _raw: Option<&ConfigValue>) -> Result<Option<T>> {
///         Ok(None)
///     }
/// }
///
/// let value: Option<i32> = NoConversion.convert("batch.size", Some(&ConfigValue::from("1"))).unwrap();
/// assert_eq!(value, None);
/// ```
pub trait Converter {
    /// Converts the raw value stored under `key` into `T`.
    ///
    /// # Arguments
    ///
    /// * `key` - The option key, used for diagnostics
    /// * `raw` - The stored value, or `None` if the key is absent
    ///
    /// # Returns
    ///
    /// * `Ok(Some(T))` - The converted value
    /// * `Ok(None)` - No value could be produced
    /// * `Err(ConfigError)` - The converter rejected the value
    fn convert<T: ConfigType>(&self, key: &str, raw: Option<&ConfigValue>) -> Result<Option<T>>;
}

impl<C: Converter + ?Sized> Converter for &C {
    fn convert<T: ConfigType>(&self, key: &str, raw: Option<&ConfigValue>) -> Result<Option<T>> {
        (**self).convert(key, raw)
    }
}
