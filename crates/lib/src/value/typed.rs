//! Homogeneous string-keyed maps.

use std::collections::{HashMap, hash_map};

use super::{Map, Value, ValueError, ValueKind};

/// A string-keyed map whose entries all share one [`ValueKind`].
///
/// This is the shape of a `HashMap<String, i64>` or `HashMap<String, String>`
/// carried inside a [`Value`]. Only the broad
/// [`KeyedMapper`](crate::mapper::KeyedMapper) treats it as a map; the narrow
/// [`PlainMapper`](crate::mapper::PlainMapper) sees an opaque leaf.
///
/// ```
/// use jmap::value::{TypedMap, Value, ValueKind};
///
/// let mut ports = TypedMap::new(ValueKind::I64);
/// ports.insert("http", 80i64)?;
/// assert!(ports.insert("name", "web").is_err());
/// assert_eq!(Value::from(ports).type_name(), "typed-map");
/// # Ok::<(), jmap::value::ValueError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypedMap {
    kind: ValueKind,
    entries: HashMap<String, Value>,
}

impl TypedMap {
    /// Creates an empty map holding values of `kind`
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    /// Builds a typed map from entries, failing on the first entry of another kind.
    pub fn from_entries<K, V>(
        kind: ValueKind,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, ValueError>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut map = Self::new(kind);
        for (key, value) in entries {
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Decodes a JSON object into a typed map of `kind`.
    ///
    /// JSON integers decode as [`ValueKind::I64`] and other numbers as
    /// [`ValueKind::F64`].
    ///
    /// # Errors
    /// Fails with a serialization error if `json` is not an object, or with
    /// [`ValueError::KindMismatch`] if any entry is of another kind.
    pub fn from_json(kind: ValueKind, json: &str) -> crate::Result<Self> {
        let entries: Map = serde_json::from_str(json)?;
        Ok(Self::from_entries(kind, entries)?)
    }

    /// The kind shared by every entry
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Inserts an entry, returning the previous value for the key.
    ///
    /// # Errors
    /// Returns [`ValueError::KindMismatch`] if `value` is not of this map's kind.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ValueError> {
        let key = key.into();
        let value = value.into();
        if value.kind() != self.kind {
            return Err(ValueError::KindMismatch {
                key,
                expected: self.kind,
                actual: value.kind(),
            });
        }
        Ok(self.entries.insert(key, value))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Drops the kind constraint, yielding a plain map.
    pub fn into_map(self) -> HashMap<String, Value> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a TypedMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
