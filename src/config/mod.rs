//! Runtime settings.
//!
//! Read from `window.ENV` at startup. Keys are accepted in both
//! `SCREAMING_CASE` and `snake_case`; anything missing or malformed falls
//! back to the default.

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTOSAVE_DELAY_MS: u32 = 1000;
pub const DEFAULT_CLEANUP_INTERVAL_MS: u32 = 30_000;
pub const DEFAULT_DRAG_THROTTLE_MS: u32 = 16;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesConfig {
    pub autosave_delay_ms: u32,
    pub cleanup_interval_ms: u32,
    pub drag_throttle_ms: u32,
    pub log_level: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
            cleanup_interval_ms: DEFAULT_CLEANUP_INTERVAL_MS,
            drag_throttle_ms: DEFAULT_DRAG_THROTTLE_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// A raw value found under `window.ENV`.
#[derive(Clone, Debug, PartialEq)]
pub enum EnvValue {
    Number(f64),
    Text(String),
}

impl EnvValue {
    fn as_millis(&self) -> Option<u32> {
        let n = match self {
            EnvValue::Number(n) => *n,
            EnvValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (n.is_finite() && n >= 0.0 && n <= u32::MAX as f64).then_some(n as u32)
    }

    fn as_text(&self) -> Option<String> {
        match self {
            EnvValue::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

impl NotesConfig {
    pub fn new() -> Self {
        Self::from_lookup(browser_env)
    }

    /// Builds a config from a key lookup. Each setting tries its
    /// upper-case key first, then the snake_case one.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<EnvValue>) -> Self {
        let find = |name: &str| {
            lookup(&name.to_ascii_uppercase()).or_else(|| lookup(name))
        };
        let millis = |name: &str, default: u32| {
            find(name).and_then(|v| v.as_millis()).unwrap_or(default)
        };

        let defaults = Self::default();
        Self {
            autosave_delay_ms: millis("autosave_delay_ms", defaults.autosave_delay_ms),
            cleanup_interval_ms: millis("cleanup_interval_ms", defaults.cleanup_interval_ms)
                .max(1),
            drag_throttle_ms: millis("drag_throttle_ms", defaults.drag_throttle_ms),
            log_level: find("log_level")
                .and_then(|v| v.as_text())
                .unwrap_or(defaults.log_level),
        }
    }
}

fn browser_env(key: &str) -> Option<EnvValue> {
    let env = web_sys::window()?.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }
    let value = js_sys::Reflect::get(&env, &key.into()).ok()?;
    if let Some(n) = value.as_f64() {
        return Some(EnvValue::Number(n));
    }
    value.as_string().map(EnvValue::Text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, EnvValue)]) -> impl Fn(&str) -> Option<EnvValue> {
        let map: HashMap<String, EnvValue> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_env_missing() {
        let c = NotesConfig::from_lookup(|_| None);
        assert_eq!(c, NotesConfig::default());
        assert_eq!(c.autosave_delay_ms, 1000);
        assert_eq!(c.cleanup_interval_ms, 30_000);
        assert_eq!(c.drag_throttle_ms, 16);
        assert_eq!(c.log_level, "info");
    }

    #[test]
    fn test_upper_case_key_wins_over_snake_case() {
        let c = NotesConfig::from_lookup(lookup(&[
            ("AUTOSAVE_DELAY_MS", EnvValue::Number(250.0)),
            ("autosave_delay_ms", EnvValue::Number(9000.0)),
            ("log_level", EnvValue::Text("debug".into())),
        ]));
        assert_eq!(c.autosave_delay_ms, 250);
        assert_eq!(c.log_level, "debug");
    }

    #[test]
    fn test_numeric_strings_accepted_and_garbage_ignored() {
        let c = NotesConfig::from_lookup(lookup(&[
            ("DRAG_THROTTLE_MS", EnvValue::Text(" 32 ".into())),
            ("CLEANUP_INTERVAL_MS", EnvValue::Text("soon".into())),
            ("AUTOSAVE_DELAY_MS", EnvValue::Number(-5.0)),
            ("LOG_LEVEL", EnvValue::Number(3.0)),
        ]));
        assert_eq!(c.drag_throttle_ms, 32);
        assert_eq!(c.cleanup_interval_ms, DEFAULT_CLEANUP_INTERVAL_MS);
        assert_eq!(c.autosave_delay_ms, DEFAULT_AUTOSAVE_DELAY_MS);
        assert_eq!(c.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_zero_cleanup_interval_is_raised() {
        let c = NotesConfig::from_lookup(lookup(&[(
            "cleanup_interval_ms",
            EnvValue::Number(0.0),
        )]));
        assert_eq!(c.cleanup_interval_ms, 1);
    }
}
