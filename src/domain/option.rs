// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration option capability.
//!
//! This module defines the `ConfigOption` trait. A catalog of known options (usually an
//! enum with one variant per key) implements `key()` and, where a key needs custom parsing,
//! `transform()`. Every read and write operation is provided as a default method.

use crate::adapters::DefaultConverter;
use crate::domain::{ConfigError, ConfigMap, ConfigType, ConfigValue, Result};
use crate::ports::Converter;

/// A function post-processing the raw value stored under an option's key.
///
/// Receives the key and the stored value (`None` when absent) and returns the parsed value.
pub type Transform = fn(&str, Option<&ConfigValue>) -> ConfigValue;

/// Casts transform output to `T` without coercion.
///
/// `Null` output reads as "no value"; any other value that is not an instance of `T` is a
/// type mismatch.
fn cast<T: ConfigType>(key: &str, value: ConfigValue) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    T::from_instance(&value)
        .map(Some)
        .ok_or_else(|| ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: T::TYPE_NAME,
            found: value.type_name(),
        })
}

/// A recognised configuration key with typed accessors over a [`ConfigMap`].
///
/// Implementors only supply [`key`](ConfigOption::key). Options whose stored form needs
/// parsing (comma-separated lists, lowercase enums) also override
/// [`transform`](ConfigOption::transform).
///
/// Reads come in three flavours:
///
/// - [`get`](ConfigOption::get) returns the stored value if it is already a `T`, and asks
///   the converter otherwise. Unconvertible values read as `None`.
/// - [`get_with`](ConfigOption::get_with) applies an ad-hoc transform and casts the result.
/// - [`get_transformed`](ConfigOption::get_transformed) applies the option's own transform
///   and casts the result.
///
/// Each has an `_or_default` variant which substitutes the default for `None`. Errors are
/// never defaulted.
///
/// # Examples
///
/// ```rust
/// use config_option::domain::{transforms, ConfigMap, ConfigOption, Transform};
///
/// enum ParserOption {
///     BatchSize,
///     Hosts,
/// }
///
/// impl ConfigOption for ParserOption {
///     fn key(&self) -> &str {
///         match self {
///             ParserOption::BatchSize => "batch.size",
///             ParserOption::Hosts => "hosts",
///         }
///     }
///
///     fn transform(&self) -> Option<Transform> {
///         match self {
///             ParserOption::Hosts => Some(transforms::comma_separated),
///             _ => None,
///         }
///     }
/// }
///
/// # fn main() -> config_option::domain::Result<()> {
/// let mut map = ConfigMap::new();
/// ParserOption::BatchSize.put(&mut map, "42");
/// ParserOption::Hosts.put(&mut map, "a,b,c");
///
/// assert_eq!(ParserOption::BatchSize.get::<i32>(&map)?, Some(42));
/// let hosts: Vec<String> = ParserOption::Hosts.get_transformed_or_default(&map, Vec::new())?;
/// assert_eq!(hosts, ["a", "b", "c"]);
/// # Ok(())
/// # }
/// ```
pub trait ConfigOption {
    /// Returns the key this option owns.
    fn key(&self) -> &str;

    /// Returns the transform bound to this option.
    ///
    /// `None` means identity: [`get_transformed`](ConfigOption::get_transformed) then reads
    /// exactly like [`get`](ConfigOption::get).
    fn transform(&self) -> Option<Transform> {
        None
    }

    /// Returns `true` if the map has an entry for this key, including an explicit `Null`.
    fn contains_option(&self, map: &ConfigMap) -> bool {
        map.contains_key(self.key())
    }

    /// Returns the raw value stored under this key.
    fn raw<'a>(&self, map: &'a ConfigMap) -> Option<&'a ConfigValue> {
        map.get(self.key())
    }

    /// Stores a value under this key, replacing any previous entry.
    fn put<V>(&self, map: &mut ConfigMap, value: V)
    where
        V: Into<ConfigValue>,
    {
        map.insert(self.key().to_string(), value.into());
    }

    /// Reads the value as `T` using the lenient [`DefaultConverter`].
    ///
    /// Absent keys and values that cannot be converted read as `Ok(None)`.
    fn get<T: ConfigType>(&self, map: &ConfigMap) -> Result<Option<T>> {
        self.get_converted(map, &DefaultConverter::lenient())
    }

    /// Reads the value as `T`, substituting `default` when no value is available.
    fn get_or_default<T: ConfigType>(&self, map: &ConfigMap, default: T) -> Result<T> {
        Ok(self.get(map)?.unwrap_or(default))
    }

    /// Reads the value as `T`, delegating to `converter` when it is not already a `T`.
    ///
    /// Errors returned by the converter propagate unchanged.
    fn get_converted<T, C>(&self, map: &ConfigMap, converter: &C) -> Result<Option<T>>
    where
        T: ConfigType,
        C: Converter + ?Sized,
    {
        let raw = self.raw(map);
        if let Some(value) = raw.and_then(T::from_instance) {
            return Ok(Some(value));
        }
        converter.convert(self.key(), raw)
    }

    /// Reads the value through `converter`, substituting `default` for `Ok(None)`.
    fn get_converted_or_default<T, C>(&self, map: &ConfigMap, converter: &C, default: T) -> Result<T>
    where
        T: ConfigType,
        C: Converter + ?Sized,
    {
        Ok(self.get_converted(map, converter)?.unwrap_or(default))
    }

    /// Applies `transform` to the raw value and casts the result to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if the transform produces a non-null value that
    /// is not a `T`.
    fn get_with<T, F>(&self, map: &ConfigMap, transform: F) -> Result<Option<T>>
    where
        T: ConfigType,
        F: FnOnce(&str, Option<&ConfigValue>) -> ConfigValue,
    {
        let key = self.key();
        cast(key, transform(key, self.raw(map)))
    }

    /// Applies `transform` and casts, substituting `default` for a null result.
    fn get_with_or_default<T, F>(&self, map: &ConfigMap, transform: F, default: T) -> Result<T>
    where
        T: ConfigType,
        F: FnOnce(&str, Option<&ConfigValue>) -> ConfigValue,
    {
        Ok(self.get_with(map, transform)?.unwrap_or(default))
    }

    /// Applies this option's bound transform and casts the result to `T`.
    ///
    /// Without a bound transform this is the same as [`get`](ConfigOption::get).
    fn get_transformed<T: ConfigType>(&self, map: &ConfigMap) -> Result<Option<T>> {
        match self.transform() {
            Some(transform) => self.get_with(map, transform),
            None => self.get(map),
        }
    }

    /// Applies the bound transform and casts, substituting `default` for a null result.
    fn get_transformed_or_default<T: ConfigType>(&self, map: &ConfigMap, default: T) -> Result<T> {
        Ok(self.get_transformed(map)?.unwrap_or(default))
    }
}
