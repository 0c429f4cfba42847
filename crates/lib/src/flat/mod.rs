//! Flattening nested trees into path-keyed maps and back.
//!
//! [`flatten`] walks a nested tree and produces a single-level map whose keys
//! are the paths to each leaf, joined by a separator. [`unflatten`] rebuilds
//! the tree from such a map.
//!
//! ```
//! use jmap::flat::{flatten, to_owned_flat, unflatten};
//! use jmap::value::Value;
//!
//! let tree = Value::from(serde_json::json!({"a": 1, "c": {"x": 3, "y": 4}}));
//! let flat = flatten(&tree, 0, ".")?;
//! assert_eq!(flat["c.x"], &Value::I64(3));
//!
//! let rebuilt = unflatten(to_owned_flat(&flat), ".")?;
//! assert_eq!(Value::from(rebuilt), tree);
//! # Ok::<(), jmap::Error>(())
//! ```
//!
//! # Ownership
//!
//! Flattening never copies the source tree. A [`FlatRef`] borrows every leaf
//! from the tree it was built from, including sub-maps kept whole at the
//! depth limit, so the tree cannot be mutated while the flat view is alive.
//! The accumulator passed to [`flatten_with`] is mutably borrowed for the
//! call only; entries written before an error stay in it.
//!
//! Unflattening consumes its [`FlatMap`] and moves each value into the
//! rebuilt tree.
//!
//! # Limits
//!
//! - Only maps recognized by the configured [`Mapper`] are recursed into;
//!   sequences and other values are leaves.
//! - Flatten stops at the configured depth and keeps deeper maps as opaque
//!   leaves. Empty maps are leaves too.
//! - Separators inside keys are not escaped. Such keys split into extra
//!   segments on unflatten.
//! - The input must be acyclic, which owned [`Value`] trees always are.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::{
    mapper::Mapper,
    value::{Map, Value},
};

pub mod config;
pub mod errors;
mod key;

pub use config::Config;
pub use errors::FlattenError;
pub use key::{join_key, split_key};

/// An owned flat map from path keys to leaf values.
pub type FlatMap = HashMap<String, Value>;

/// A flat view whose leaves borrow from the flattened tree.
pub type FlatRef<'a> = HashMap<String, &'a Value>;

/// Flattens `value` with the narrow mapper.
///
/// A `max_depth` of zero applies the default ceiling and an empty separator
/// means `"."`.
///
/// # Errors
/// Returns [`FlattenError::NotAMap`] if `value` itself is not a map.
pub fn flatten<'a>(
    value: &'a Value,
    max_depth: usize,
    separator: &str,
) -> Result<FlatRef<'a>, FlattenError> {
    let config = Config::new()
        .with_max_depth(max_depth)
        .with_separator(separator);
    let mut flat = FlatRef::new();
    flatten_with(value, &config, &mut flat)?;
    Ok(flat)
}

/// Flattens `value` into a caller-supplied accumulator.
///
/// Existing entries of `acc` are kept unless a flattened key replaces them.
/// When a prefix is configured every key is rooted at it.
pub fn flatten_with<'a>(
    value: &'a Value,
    config: &Config,
    acc: &mut FlatRef<'a>,
) -> Result<(), FlattenError> {
    let mapper = config.mapper();
    if !mapper.is_map(value) {
        return Err(FlattenError::NotAMap {
            type_name: value.type_name(),
        });
    }

    let flattener = Flattener {
        separator: config.separator(),
        mapper,
    };
    debug!(
        max_depth = config.max_depth(),
        separator = flattener.separator,
        prefix = config.prefix(),
        mapper = mapper.name(),
        "Flattening map"
    );

    // An empty root contributes nothing, unlike empty maps further down
    for (key, child) in mapper.unpack(value)? {
        let child_key = join_key(config.prefix(), key, flattener.separator);
        flattener.descend(child, child_key, config.max_depth() - 1, acc)?;
    }
    Ok(())
}

/// Clones a flat view into an owned flat map.
pub fn to_owned_flat(flat: &FlatRef<'_>) -> FlatMap {
    flat.iter()
        .map(|(key, value)| (key.clone(), (*value).clone()))
        .collect()
}

struct Flattener<'c> {
    separator: &'c str,
    mapper: &'c dyn Mapper,
}

impl Flattener<'_> {
    fn descend<'a>(
        &self,
        value: &'a Value,
        key: String,
        depth: usize,
        acc: &mut FlatRef<'a>,
    ) -> Result<(), FlattenError> {
        if depth == 0 || !self.mapper.is_map(value) {
            acc.insert(key, value);
            return Ok(());
        }

        let entries = self.mapper.unpack(value)?;
        if entries.is_empty() {
            trace!(key = %key, "Keeping empty map as leaf");
            acc.insert(key, value);
            return Ok(());
        }

        for (child_key, child) in entries {
            let child_key = join_key(&key, child_key, self.separator);
            self.descend(child, child_key, depth - 1, acc)?;
        }
        Ok(())
    }
}

/// Rebuilds a nested tree from a flat map using `separator`.
///
/// An empty flat map yields an empty tree. No depth limit applies.
///
/// # Errors
/// Returns [`FlattenError::PathCollision`] if a key needs a map where an
/// earlier key placed a leaf. No partial tree is returned.
pub fn unflatten(flat: FlatMap, separator: &str) -> Result<Map, FlattenError> {
    unflatten_with(flat, &Config::new().with_separator(separator))
}

/// Rebuilds a nested tree from a flat map using the separator and prefix of
/// `config`. No partial tree is returned on error.
pub fn unflatten_with(flat: FlatMap, config: &Config) -> Result<Map, FlattenError> {
    let mut tree = Map::new();
    unflatten_into(flat, config, &mut tree)?;
    Ok(tree)
}

/// Rebuilds a nested tree into a caller-supplied map.
///
/// Paths are inserted in sorted order after prefix stripping, so a path that
/// is a prefix of another is always placed first and the longer path reports
/// the collision.
/// Entries inserted before an error stay in `acc`. A key landing on a path
/// that already holds a map in `acc` replaces that map.
///
/// With a prefix configured, only keys starting with it are used, and the
/// prefix (plus one following separator) is stripped before splitting.
pub fn unflatten_into(flat: FlatMap, config: &Config, acc: &mut Map) -> Result<(), FlattenError> {
    if flat.is_empty() {
        return Ok(());
    }

    let separator = config.separator();
    let prefix = config.prefix();
    debug!(
        entries = flat.len(),
        separator,
        prefix,
        "Unflattening flat map"
    );

    let mut entries: Vec<(String, String, Value)> = flat
        .into_iter()
        .filter_map(|(key, value)| match key::strip_prefix(&key, prefix, separator) {
            Some(path) => Some((path.to_string(), key, value)),
            None => {
                trace!(key = %key, "Skipping key outside prefix");
                None
            }
        })
        .collect();
    // Sort on the stripped paths; the full key orders keys sharing a path
    entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    for (path, _, value) in entries {
        insert_path(acc, &path, separator, value)?;
    }
    Ok(())
}

fn insert_path(root: &mut Map, path: &str, separator: &str, value: Value) -> Result<(), FlattenError> {
    let segments: Vec<&str> = split_key(path, separator).collect();
    let Some((last, parents)) = segments.split_last() else {
        return Ok(());
    };

    let mut current = root;
    for (index, segment) in parents.iter().enumerate() {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Map(Map::new()));
        current = match entry {
            Value::Map(map) => map,
            other => {
                warn!(
                    path,
                    index,
                    key = segment,
                    found = other.type_name(),
                    "Path collision while unflattening"
                );
                return Err(FlattenError::PathCollision {
                    path: path.to_string(),
                    index,
                    key: segment.to_string(),
                });
            }
        };
    }

    current.insert(last.to_string(), value);
    Ok(())
}
