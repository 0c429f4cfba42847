//! Configuration for flatten and unflatten.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer};

use crate::{
    constants::{DEFAULT_SEPARATOR, MAX_DEPTH},
    mapper::{Mapper, PlainMapper},
};

/// Options shared by [`flatten_with`](super::flatten_with) and the unflatten
/// functions.
///
/// Every field is optional. Raw values are kept as given; the accessors
/// return the effective values:
///
/// - an empty `separator` means [`DEFAULT_SEPARATOR`]
/// - a `max_depth` of zero means [`MAX_DEPTH`]; negative JSON depths read as zero
/// - `prefix` is trimmed of surrounding whitespace
///
/// The mapper defaults to [`PlainMapper`] and is never (de)serialized.
///
/// ```
/// use jmap::flat::Config;
///
/// let config = Config::from_json(r#"{"separator": "/", "prefix": " env "}"#)?;
/// assert_eq!(config.separator(), "/");
/// assert_eq!(config.max_depth(), 15);
/// assert_eq!(config.prefix(), "env");
/// # Ok::<(), jmap::Error>(())
/// ```
#[derive(Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    separator: String,
    #[serde(deserialize_with = "depth_or_unset")]
    max_depth: usize,
    prefix: String,
    #[serde(skip, default = "default_mapper")]
    mapper: Arc<dyn Mapper>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Roots flattened keys at `prefix` and restricts unflatten to keys
    /// starting with it.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the strategy deciding which values are recursed into.
    pub fn with_mapper(mut self, mapper: impl Mapper + 'static) -> Self {
        self.mapper = Arc::new(mapper);
        self
    }

    /// Effective separator
    pub fn separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }

    /// Effective depth limit
    pub fn max_depth(&self) -> usize {
        effective_depth(self.max_depth)
    }

    /// Effective prefix
    pub fn prefix(&self) -> &str {
        self.prefix.trim()
    }

    pub fn mapper(&self) -> &dyn Mapper {
        self.mapper.as_ref()
    }
}

fn default_mapper() -> Arc<dyn Mapper> {
    Arc::new(PlainMapper)
}

// Any depth <= 0 selects the ceiling
fn depth_or_unset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let depth = i64::deserialize(deserializer)?;
    Ok(usize::try_from(depth).unwrap_or(0))
}

/// Applies the depth ceiling to a requested depth of zero.
pub(crate) fn effective_depth(requested: usize) -> usize {
    if requested == 0 { MAX_DEPTH } else { requested }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: MAX_DEPTH,
            prefix: String::new(),
            mapper: default_mapper(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("separator", &self.separator)
            .field("max_depth", &self.max_depth)
            .field("prefix", &self.prefix)
            .field("mapper", &self.mapper.name())
            .finish()
    }
}
