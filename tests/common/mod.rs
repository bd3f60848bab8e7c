// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample option catalog shared by the integration tests.

use config_option::domain::{transforms, ConfigOption, ConfigValue, Transform};

/// Options of a hypothetical parser topology.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserOption {
    BatchSize,
    ZookeeperQuorum,
    Hosts,
    OutputFormat,
    TimeoutMillis,
    Enabled,
}

impl ParserOption {
    /// Every option in the catalog.
    #[allow(dead_code)]
    pub const ALL: [ParserOption; 6] = [
        ParserOption::BatchSize,
        ParserOption::ZookeeperQuorum,
        ParserOption::Hosts,
        ParserOption::OutputFormat,
        ParserOption::TimeoutMillis,
        ParserOption::Enabled,
    ];
}

/// Parses values like `"1500ms"` or `"2s"` into milliseconds.
fn duration_millis(_key: &str, raw: Option<&ConfigValue>) -> ConfigValue {
    match raw {
        Some(ConfigValue::String(s)) => {
            let s = s.trim();
            let parsed = if let Some(ms) = s.strip_suffix("ms") {
                ms.trim().parse::<i64>().ok()
            } else if let Some(secs) = s.strip_suffix('s') {
                secs.trim().parse::<i64>().ok().map(|n| n * 1000)
            } else {
                s.parse::<i64>().ok()
            };
            parsed.map(ConfigValue::Integer).unwrap_or(ConfigValue::Null)
        }
        Some(other) => other.clone(),
        None => ConfigValue::Null,
    }
}

impl ConfigOption for ParserOption {
    fn key(&self) -> &str {
        match self {
            ParserOption::BatchSize => "batch.size",
            ParserOption::ZookeeperQuorum => "zookeeper.quorum",
            ParserOption::Hosts => "hosts",
            ParserOption::OutputFormat => "output.format",
            ParserOption::TimeoutMillis => "timeout",
            ParserOption::Enabled => "enabled",
        }
    }

    fn transform(&self) -> Option<Transform> {
        match self {
            ParserOption::ZookeeperQuorum | ParserOption::Hosts => {
                Some(transforms::comma_separated)
            }
            ParserOption::OutputFormat => Some(transforms::lowercase),
            ParserOption::TimeoutMillis => Some(duration_millis),
            ParserOption::BatchSize | ParserOption::Enabled => None,
        }
    }
}
