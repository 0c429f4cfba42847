//! Maps restricted to normalized primitive values.
//!
//! A [`PriMap`] stores string keys mapped to primitive scalars (text,
//! booleans, integers and floats) in a canonical form: every integer width
//! becomes [`Value::I64`] and every float width becomes [`Value::F64`].
//!
//! Every bulk [`replace`](PriMap::replace) runs two hooks over the incoming
//! values:
//!
//! 1. a filter deciding which entries are candidates at all; rejected entries
//!    are dropped without being reported
//! 2. a normalizer converting each candidate to its canonical form; failures
//!    are reported together in one [`PriMapError::InvalidValues`]
//!
//! Entries that fail normalization are still stored as given. Callers get
//! an error naming them but keep every other entry.
//!
//! ```
//! use jmap::primap::PriMap;
//! use jmap::value::Value;
//!
//! let mut map = PriMap::builder().build();
//! let input = serde_json::json!({"x": 1, "y": [1, 2]});
//! let Value::Map(values) = Value::from(input) else { unreachable!() };
//!
//! let err = map.replace(values).unwrap_err();
//! assert_eq!(err.invalid_keys(), ["y"]);
//! assert_eq!(map.get("x"), Some(&Value::I64(1)));
//! ```

use std::{collections::hash_map, fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _, ser};
use tracing::{debug, warn};

use crate::value::{Map, Value};

pub mod errors;

pub use errors::PriMapError;

/// Decides whether an incoming value is kept at all.
pub type Filter = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Converts a kept value into its canonical form.
pub type Normalizer = Arc<dyn Fn(&Value) -> Result<Value, PriMapError> + Send + Sync>;

/// Strict filter: accepts text, booleans, and every integer and float width.
pub fn is_primitive(value: &Value) -> bool {
    value.is_primitive()
}

/// Default filter: accepts every value except [`Value::Null`].
///
/// Non-primitive values pass so that normalization reports them.
pub fn accepts_present(value: &Value) -> bool {
    !value.is_null()
}

/// Default normalizer.
///
/// Text and booleans pass through, integers widen to `i64`, floats widen to
/// `f64`.
///
/// # Errors
/// Returns [`PriMapError::NotPrimitive`] for any other value, and for a
/// `u64` too large for `i64`.
pub fn normalize(value: &Value) -> Result<Value, PriMapError> {
    match value {
        Value::Text(_) | Value::Bool(_) | Value::I64(_) | Value::F64(_) => Ok(value.clone()),
        Value::F32(n) => Ok(Value::F64(f64::from(*n))),
        other if other.is_int() => {
            other
                .as_i64()
                .map(Value::I64)
                .ok_or_else(|| PriMapError::NotPrimitive {
                    type_name: other.type_name(),
                    reason: "integer out of i64 range".to_string(),
                })
        }
        other => Err(PriMapError::NotPrimitive {
            type_name: other.type_name(),
            reason: "not a primitive".to_string(),
        }),
    }
}

/// Lenient variant of [`normalize`] returning the input unchanged on failure.
pub fn normalize_or_keep(value: &Value) -> Value {
    normalize(value).unwrap_or_else(|_| value.clone())
}

/// A string-keyed map of normalized primitive values.
#[derive(Clone)]
pub struct PriMap {
    values: Map,
    filter: Filter,
    normalizer: Normalizer,
}

/// Chooses the hooks of a [`PriMap`].
#[derive(Clone)]
pub struct PriMapBuilder {
    filter: Filter,
    normalizer: Normalizer,
}

impl PriMapBuilder {
    /// Replaces the default [`accepts_present`] filter.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.filter = Arc::new(filter);
        self
    }

    /// Replaces the default [`normalize`] normalizer.
    pub fn normalizer<N>(mut self, normalizer: N) -> Self
    where
        N: Fn(&Value) -> Result<Value, PriMapError> + Send + Sync + 'static,
    {
        self.normalizer = Arc::new(normalizer);
        self
    }

    /// Creates an empty map using the chosen hooks.
    pub fn build(self) -> PriMap {
        PriMap {
            values: Map::new(),
            filter: self.filter,
            normalizer: self.normalizer,
        }
    }
}

impl Default for PriMapBuilder {
    fn default() -> Self {
        Self {
            filter: Arc::new(accepts_present),
            normalizer: Arc::new(normalize),
        }
    }
}

impl PriMap {
    pub fn builder() -> PriMapBuilder {
        PriMapBuilder::default()
    }

    /// Creates a map from `values` with the default hooks.
    ///
    /// Normalization failures are logged rather than returned; the offending
    /// entries are stored unnormalized. Use [`PriMap::builder`] and
    /// [`replace`](PriMap::replace) to observe them.
    pub fn new(values: Map) -> Self {
        let mut map = Self::builder().build();
        if let Err(err) = map.replace(values) {
            warn!(error = %err, "PriMap created with unnormalized values");
        }
        map
    }

    /// Replaces the whole content of the map.
    ///
    /// Entries rejected by the filter are dropped. Entries the normalizer
    /// rejects are stored as given and reported.
    ///
    /// # Errors
    /// Returns [`PriMapError::InvalidValues`] naming every key that failed
    /// normalization, sorted. The map is updated either way.
    pub fn replace(&mut self, values: Map) -> Result<(), PriMapError> {
        let incoming = values.len();
        let mut stored = Map::with_capacity(incoming);
        let mut invalid = Vec::new();

        for (key, value) in values {
            if !(self.filter)(&value) {
                continue;
            }
            match (self.normalizer)(&value) {
                Ok(normalized) => {
                    stored.insert(key, normalized);
                }
                Err(_) => {
                    invalid.push(key.clone());
                    stored.insert(key, value);
                }
            }
        }

        debug!(
            incoming,
            stored = stored.len(),
            invalid = invalid.len(),
            "Replaced PriMap values"
        );
        self.values = stored;

        if invalid.is_empty() {
            Ok(())
        } else {
            invalid.sort();
            Err(PriMapError::InvalidValues { keys: invalid })
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.values.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, String, Value> {
        self.values.keys()
    }

    /// Returns the stored values, consuming the map.
    pub fn into_inner(self) -> Map {
        self.values
    }

    /// Encodes the stored values as a compact JSON object.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.values)?)
    }

    /// Encodes the stored values as a JSON object indented with `indent`.
    ///
    /// Every line after the first starts with `prefix`, so the output can be
    /// embedded in other indented text.
    ///
    /// ```
    /// use jmap::primap::PriMap;
    /// use jmap::value::{Map, Value};
    ///
    /// let mut values = Map::new();
    /// values.insert("a".to_string(), Value::from(1));
    /// let map = PriMap::new(values);
    /// assert_eq!(map.to_json_pretty("  ", "> ")?, "{\n>   \"a\": 1\n> }");
    /// # Ok::<(), jmap::Error>(())
    /// ```
    pub fn to_json_pretty(&self, indent: &str, prefix: &str) -> crate::Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.values.serialize(&mut serializer)?;
        let json = String::from_utf8(out).map_err(<serde_json::Error as ser::Error>::custom)?;

        if prefix.is_empty() {
            return Ok(json);
        }
        // Encoded strings escape newlines, so every raw one is a line break
        Ok(json.replace('\n', &format!("\n{prefix}")))
    }

    /// Decodes a JSON object and [`replace`](PriMap::replace)s the content
    /// with it, using this map's own hooks.
    ///
    /// # Errors
    /// Fails with a serialization error if `json` is not an object, leaving
    /// the map untouched, or with [`PriMapError::InvalidValues`] after
    /// replacing.
    pub fn replace_json(&mut self, json: &str) -> crate::Result<()> {
        let values: Map = serde_json::from_str(json)?;
        Ok(self.replace(values)?)
    }
}

impl Default for PriMap {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for PriMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriMap")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PriMap {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<'a> IntoIterator for &'a PriMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for PriMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

/// Strict decoding with the default hooks: any value failing normalization
/// fails deserialization. Use [`PriMap::replace_json`] to keep partial
/// results.
impl<'de> Deserialize<'de> for PriMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Map::deserialize(deserializer)?;
        let mut map = PriMap::default();
        map.replace(values).map_err(D::Error::custom)?;
        Ok(map)
    }
}
