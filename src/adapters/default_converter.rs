// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default converter adapter.
//!
//! This module provides the converter options use unless a caller supplies their own. It
//! applies the coercion rules of each [`ConfigType`] implementation.

use crate::domain::{ConfigError, ConfigType, ConfigValue, Result};
use crate::ports::Converter;

/// How the converter reacts to a non-null value it cannot coerce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Unconvertible values read as `None`.
    #[default]
    Lenient,
    /// Unconvertible values are reported as [`ConfigError::TypeConversionError`].
    Strict,
}

/// Converter backed by [`ConfigType::coerce`].
///
/// Absent keys and explicit `Null` values never produce a value and never fail. What
/// happens to other values that cannot be coerced depends on the [`ConversionMode`].
///
/// # Examples
///
/// ```rust
/// use config_option::adapters::DefaultConverter;
/// use config_option::domain::ConfigValue;
/// use config_option::ports::Converter;
///
/// let raw = ConfigValue::from("forty-two");
///
/// let lenient: Option<i32> = DefaultConverter::lenient().convert("batch.size", Some(&raw)).unwrap();
/// assert_eq!(lenient, None);
///
/// let strict = DefaultConverter::strict().convert::<i32>("batch.size", Some(&raw));
/// assert!(strict.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter {
    mode: ConversionMode,
}

impl DefaultConverter {
    /// Creates a converter with the given mode.
    pub fn new(mode: ConversionMode) -> Self {
        Self { mode }
    }

    /// Creates a converter that maps unconvertible values to `None`.
    pub fn lenient() -> Self {
        Self::new(ConversionMode::Lenient)
    }

    /// Creates a converter that fails on unconvertible values.
    pub fn strict() -> Self {
        Self::new(ConversionMode::Strict)
    }

    /// Returns the converter's mode.
    pub fn mode(&self) -> ConversionMode {
        self.mode
    }
}

impl Converter for DefaultConverter {
    fn convert<T: ConfigType>(&self, key: &str, raw: Option<&ConfigValue>) -> Result<Option<T>> {
        let value = match raw {
            None | Some(ConfigValue::Null) => return Ok(None),
            Some(value) => value,
        };

        if let Some(converted) = T::coerce(value) {
            return Ok(Some(converted));
        }

        match self.mode {
            ConversionMode::Lenient => {
                tracing::debug!(
                    "Value for key '{}' could not be converted from {} to {}",
                    key,
                    value.type_name(),
                    T::TYPE_NAME
                );
                Ok(None)
            }
            ConversionMode::Strict => Err(ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: T::TYPE_NAME,
                found: value.type_name(),
            }),
        }
    }
}
