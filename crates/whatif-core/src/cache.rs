//! Memoization of simulation results.
//!
//! Keys are canonical JSON: objects are emitted with their keys sorted at every
//! level, so two parameter bundles that are structurally equal map to the same
//! key no matter how their fields were declared or inserted.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// In-memory store keyed by canonical parameter strings.
///
/// No eviction and no expiry: entries live as long as the cache.
#[derive(Debug, Clone)]
pub struct SimulationCache<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for SimulationCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SimulationCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Canonical key for `params`.
    ///
    /// # Errors
    ///
    /// Fails if `params` cannot be represented as JSON (for example a map with
    /// non-string keys).
    pub fn generate_key<P: Serialize + ?Sized>(params: &P) -> Result<String> {
        let value = canonicalize(serde_json::to_value(params)?);
        Ok(serde_json::to_string(&value)?)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Insert or overwrite.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rebuild every object with its entries in key order.
///
/// serde_json may be compiled with `preserve_order`, in which case `Map`
/// keeps insertion order; sorting here keeps keys stable either way.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
