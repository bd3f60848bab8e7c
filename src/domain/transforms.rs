// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reusable transforms for options whose stored form needs parsing.
//!
//! Each function matches the [`Transform`](crate::domain::Transform) signature, so it can
//! be returned from [`ConfigOption::transform`](crate::domain::ConfigOption::transform) or
//! passed to [`ConfigOption::get_with`](crate::domain::ConfigOption::get_with).

use crate::domain::ConfigValue;

/// Returns the stored value unchanged. Absent keys read as `Null`.
pub fn identity(_key: &str, raw: Option<&ConfigValue>) -> ConfigValue {
    raw.cloned().unwrap_or_default()
}

/// Splits a comma-separated string into a sequence of trimmed strings.
///
/// Empty items are dropped. Values already stored as a sequence pass through, and other
/// scalars become a one-element sequence of their string form.
///
/// # Examples
///
/// ```
/// use config_option::domain::{transforms, ConfigValue};
///
/// let raw = ConfigValue::from("a, b,,c");
/// assert_eq!(
///     transforms::comma_separated("hosts", Some(&raw)),
///     ConfigValue::from(vec!["a", "b", "c"])
/// );
/// ```
pub fn comma_separated(_key: &str, raw: Option<&ConfigValue>) -> ConfigValue {
    match raw {
        None | Some(ConfigValue::Null) => ConfigValue::Null,
        Some(ConfigValue::String(s)) => ConfigValue::Sequence(
            s.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(ConfigValue::from)
                .collect(),
        ),
        Some(seq @ ConfigValue::Sequence(_)) => seq.clone(),
        Some(value @ (ConfigValue::Bool(_) | ConfigValue::Integer(_) | ConfigValue::Float(_))) => {
            ConfigValue::Sequence(vec![ConfigValue::String(value.to_string())])
        }
        Some(other) => other.clone(),
    }
}

/// Lowercases string values, for enum-like options matched case-insensitively.
pub fn lowercase(key: &str, raw: Option<&ConfigValue>) -> ConfigValue {
    match raw {
        Some(ConfigValue::String(s)) => ConfigValue::String(s.to_lowercase()),
        other => identity(key, other),
    }
}
