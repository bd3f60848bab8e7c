// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target types an option value can be read as.
//!
//! Every type an option can be read into implements [`ConfigType`]. The set of
//! implementations is closed over the variants of [`ConfigValue`], so the compiler checks
//! that each target knows how to recognise and coerce every kind of stored value.

use crate::domain::config_value::ConfigValue;
use std::collections::{BTreeMap, HashMap};

/// A Rust type that can be produced from a [`ConfigValue`].
///
/// Two levels of matching are offered:
///
/// - [`from_instance`](ConfigType::from_instance) succeeds only when the stored value is
///   already of this type. It never coerces and is used to cast transform output.
/// - [`coerce`](ConfigType::coerce) applies the lenient conversion rules used by the
///   default converter (`"42"` reads as `42`, `7` reads as `7.0`, and so on).
///
/// `Null` is never an instance of any type, and coerces to nothing.
///
/// # Examples
///
/// ```
/// use config_option::domain::{ConfigType, ConfigValue};
///
/// let stored = ConfigValue::from("42");
/// assert_eq!(i32::from_instance(&stored), None);
/// assert_eq!(i32::coerce(&stored), Some(42));
/// ```
pub trait ConfigType: Sized {
    /// Name of the target type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Returns the value if it is already an instance of this type.
    fn from_instance(value: &ConfigValue) -> Option<Self>;

    /// Converts the value into this type, or returns `None` if no sensible conversion exists.
    fn coerce(value: &ConfigValue) -> Option<Self>;
}

/// Parses the boolean spellings accepted in configuration files.
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Narrows a float to an integer when no information is lost.
fn float_to_integer(n: f64) -> Option<i64> {
    // 2^63 is exactly representable, i64::MAX is not
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if n.is_finite() && n.fract() == 0.0 && n >= -LIMIT && n < LIMIT {
        Some(n as i64)
    } else {
        None
    }
}

impl ConfigType for String {
    const TYPE_NAME: &'static str = "string";

    fn from_instance(value: &ConfigValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn coerce(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::String(s) => Some(s.clone()),
            ConfigValue::Bool(_) | ConfigValue::Integer(_) | ConfigValue::Float(_) => {
                Some(value.to_string())
            }
            _ => None,
        }
    }
}

impl ConfigType for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_instance(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn coerce(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(b) => Some(*b),
            ConfigValue::String(s) => parse_bool(s),
            _ => None,
        }
    }
}

macro_rules! integer_type {
    ($($t:ty),*) => {
        $(
            impl ConfigType for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn from_instance(value: &ConfigValue) -> Option<Self> {
                    match value {
                        ConfigValue::Integer(i) => <$t>::try_from(*i).ok(),
                        _ => None,
                    }
                }

                fn coerce(value: &ConfigValue) -> Option<Self> {
                    match value {
                        ConfigValue::Integer(i) => <$t>::try_from(*i).ok(),
                        ConfigValue::Float(n) => {
                            float_to_integer(*n).and_then(|i| <$t>::try_from(i).ok())
                        }
                        ConfigValue::String(s) => s.trim().parse::<$t>().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

integer_type!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ConfigType for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn from_instance(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    fn coerce(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Float(n) => Some(*n),
            ConfigValue::Integer(i) => Some(*i as f64),
            ConfigValue::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl ConfigType for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn from_instance(value: &ConfigValue) -> Option<Self> {
        f64::from_instance(value).map(|n| n as f32)
    }

    fn coerce(value: &ConfigValue) -> Option<Self> {
        f64::coerce(value).map(|n| n as f32)
    }
}

impl<T: ConfigType> ConfigType for Vec<T> {
    const TYPE_NAME: &'static str = "sequence";

    fn from_instance(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Sequence(items) => items.iter().map(T::from_instance).collect(),
            _ => None,
        }
    }

    fn coerce(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Sequence(items) => items.iter().map(T::coerce).collect(),
            _ => None,
        }
    }
}

impl<T: ConfigType> ConfigType for BTreeMap<String, T> {
    const TYPE_NAME: &'static str = "mapping";

    fn from_instance(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Mapping(map) => map
                .iter()
                .map(|(k, v)| T::from_instance(v).map(|v| (k.clone(), v)))
                .collect(),
            _ => None,
        }
    }

    fn coerce(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Mapping(map) => map
                .iter()
                .map(|(k, v)| T::coerce(v).map(|v| (k.clone(), v)))
                .collect(),
            _ => None,
        }
    }
}

impl<T: ConfigType> ConfigType for HashMap<String, T> {
    const TYPE_NAME: &'static str = "mapping";

    fn from_instance(value: &ConfigValue) -> Option<Self> {
        BTreeMap::<String, T>::from_instance(value).map(|map| map.into_iter().collect())
    }

    fn coerce(value: &ConfigValue) -> Option<Self> {
        BTreeMap::<String, T>::coerce(value).map(|map| map.into_iter().collect())
    }
}

impl ConfigType for ConfigValue {
    const TYPE_NAME: &'static str = "value";

    fn from_instance(value: &ConfigValue) -> Option<Self> {
        if value.is_null() {
            None
        } else {
            Some(value.clone())
        }
    }

    fn coerce(value: &ConfigValue) -> Option<Self> {
        Self::from_instance(value)
    }
}
