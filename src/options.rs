//! Linter option registry: named options mapped to CLI flags.
//!
//! A review request may carry per-linter options in its configuration. The
//! registry maps an allow-listed linter name to handlers that turn a
//! loosely-typed option value into a single CLI flag, or into nothing when
//! the value is unusable. It is an immutable, explicitly constructed table
//! passed into the analyzer rather than ambient global state.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Turns a loosely-typed option value into a CLI flag, or nothing if the
/// value is unusable.
type FlagBuilder = fn(&Value) -> Option<String>;

/// Review-request configuration as supplied by the caller.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewConfig {
    #[serde(default)]
    pub linters: Vec<LinterConfig>,
}

/// Per-linter entry in the configuration. Option values stay loosely typed
/// until a handler validates them.
#[derive(Debug, Deserialize)]
pub struct LinterConfig {
    pub name: String,
    #[serde(flatten)]
    pub options: HashMap<String, Value>,
}

/// Immutable mapping of allow-listed linter names to option handlers.
pub struct LinterRegistry {
    linters: HashMap<&'static str, Vec<(&'static str, FlagBuilder)>>,
}

impl Default for LinterRegistry {
    fn default() -> Self {
        let mut linters: HashMap<&'static str, Vec<(&'static str, FlagBuilder)>> = HashMap::new();
        linters.insert("lll", vec![("maxLen", lll_max_len as FlagBuilder)]);
        Self { linters }
    }
}

impl LinterRegistry {
    /// Build the extra CLI flags for a request configuration.
    ///
    /// Unknown linter names are warned about and contribute no flags;
    /// options a linter does not declare are ignored silently.
    pub fn arguments(&self, config: &ReviewConfig) -> Vec<String> {
        let mut args = Vec::new();
        for linter in &config.linters {
            let Some(handlers) = self.linters.get(linter.name.as_str()) else {
                warn!("unknown linter {}", linter.name);
                continue;
            };
            for (option, build) in handlers {
                let Some(value) = linter.options.get(*option) else {
                    continue;
                };
                if let Some(arg) = build(value) {
                    args.push(arg);
                }
            }
        }
        args
    }
}

/// `lll` line-length limit: accepts an integral number or a numeric string,
/// requires a positive value.
fn lll_max_len(value: &Value) -> Option<String> {
    let number = match value {
        Value::String(s) => match s.parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                warn!("wrong type for lll:maxLen argument");
                return None;
            }
        },
        Value::Number(n) => match n.as_i64() {
            Some(n) => n,
            None => {
                // Fractional or out-of-range number.
                warn!("wrong type for lll:maxLen argument");
                return None;
            }
        },
        _ => {
            warn!("wrong type for lll:maxLen argument");
            return None;
        }
    };

    if number < 1 {
        return None;
    }
    Some(format!("--line-length={}", number))
}
