//! Configuration types for the runner.
//!
//! Values come from `GRIMOIRE_*` environment variables (after `.env` files
//! are loaded by `main`). Anything unset or unparsable falls back to the
//! default.

use grimoire_domain::CasterFormat;

pub const ENV_FORMAT: &str = "GRIMOIRE_FORMAT";
pub const ENV_TARGET: &str = "GRIMOIRE_TARGET";
pub const ENV_JSON: &str = "GRIMOIRE_JSON";

const DEFAULT_TARGET: &str = "goblin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Format used when a caster is introduced in the transcript
    pub format: CasterFormat,
    /// Who the demo casts targeted spells at
    pub target: String,
    /// Also print JSON snapshots of each caster
    pub emit_json: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            format: CasterFormat::Friendly,
            target: DEFAULT_TARGET.to_string(),
            emit_json: false,
        }
    }
}

impl RunnerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let format = lookup(ENV_FORMAT)
            .and_then(|s| match s.parse::<CasterFormat>() {
                Ok(format) => Some(format),
                Err(e) => {
                    tracing::warn!(value = %s, error = %e, "Ignoring {}", ENV_FORMAT);
                    None
                }
            })
            .unwrap_or(defaults.format);

        let target = lookup(ENV_TARGET)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.target);

        let emit_json = lookup(ENV_JSON)
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.emit_json);

        Self {
            format,
            target,
            emit_json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(RunnerConfig::from_lookup(|_| None), RunnerConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            (ENV_FORMAT, "short"),
            (ENV_TARGET, " troll "),
            (ENV_JSON, "TRUE"),
        ]));
        assert_eq!(config.format, CasterFormat::Short);
        assert_eq!(config.target, "troll");
        assert!(config.emit_json);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            (ENV_FORMAT, "sparkly"),
            (ENV_TARGET, "   "),
            (ENV_JSON, "nope"),
        ]));
        assert_eq!(config, RunnerConfig::default());
    }
}
