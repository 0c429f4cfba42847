//! Recognizing and destructuring map-like values.
//!
//! The flatten engine and the canonical tree builder never inspect a
//! [`Value`] to decide whether to recurse. They ask a [`Mapper`], which pairs
//! a [`MapPredicate`] ("is this a string-keyed map?") with an `unpack` step
//! that lists its entries.
//!
//! # Provided strategies
//!
//! - [`PlainMapper`] - narrow: only [`Value::Map`] is a map
//! - [`KeyedMapper`] - broad: [`Value::Map`] and any [`Value::Typed`] map
//! - [`Guarded`] - broad, further restricted by a caller predicate
//!
//! The set of recognized shapes is closed: any other value is a leaf.
//!
//! ```
//! use jmap::mapper::{KeyedMapper, MapPredicate, PlainMapper};
//! use jmap::value::{TypedMap, Value, ValueKind};
//!
//! let typed = Value::from(TypedMap::new(ValueKind::I64));
//! assert!(!PlainMapper.is_map(&typed));
//! assert!(KeyedMapper.is_map(&typed));
//! ```

use crate::value::Value;

pub mod errors;

pub use errors::MapperError;

/// Entries of an unpacked map, in container iteration order.
pub type Entries<'a> = Vec<(&'a str, &'a Value)>;

/// Narrow check: true only for the "string key, dynamic value" shape.
pub fn is_plain_map(value: &Value) -> bool {
    matches!(value, Value::Map(_))
}

/// Broad check: true for any string-keyed map, whatever its value type.
pub fn is_string_keyed_map(value: &Value) -> bool {
    matches!(value, Value::Map(_) | Value::Typed(_))
}

/// A pure test deciding whether a value behaves as a string-keyed map.
///
/// Implemented for every `Fn(&Value) -> bool`, so the free functions
/// [`is_plain_map`] and [`is_string_keyed_map`] are predicates themselves.
/// Must not panic for any input, including [`Value::Null`].
pub trait MapPredicate {
    fn is_map(&self, value: &Value) -> bool;
}

impl<F> MapPredicate for F
where
    F: Fn(&Value) -> bool,
{
    fn is_map(&self, value: &Value) -> bool {
        self(value)
    }
}

/// A map predicate that can also list a recognized map's entries.
///
/// `unpack` is only called on values for which `is_map` returned true. The
/// provided mappers never fail in that case; they return
/// [`MapperError::NotRecognized`] when misused rather than panicking.
/// Custom mappers may fail for their own reasons with
/// [`MapperError::UnpackFailed`].
pub trait Mapper: MapPredicate + Send + Sync {
    /// Lists the entries of a map recognized by [`MapPredicate::is_map`].
    fn unpack<'a>(&self, value: &'a Value) -> Result<Entries<'a>, MapperError>;

    /// Short name used in logs and errors
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Narrow mapper recognizing only [`Value::Map`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMapper;

impl MapPredicate for PlainMapper {
    fn is_map(&self, value: &Value) -> bool {
        is_plain_map(value)
    }
}

impl Mapper for PlainMapper {
    fn unpack<'a>(&self, value: &'a Value) -> Result<Entries<'a>, MapperError> {
        match value {
            Value::Map(map) => Ok(map.iter().map(|(k, v)| (k.as_str(), v)).collect()),
            other => Err(MapperError::not_recognized(self.name(), other)),
        }
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

/// Broad mapper recognizing both string-keyed map shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedMapper;

impl MapPredicate for KeyedMapper {
    fn is_map(&self, value: &Value) -> bool {
        is_string_keyed_map(value)
    }
}

impl Mapper for KeyedMapper {
    fn unpack<'a>(&self, value: &'a Value) -> Result<Entries<'a>, MapperError> {
        match value {
            Value::Map(map) => Ok(map.iter().map(|(k, v)| (k.as_str(), v)).collect()),
            Value::Typed(map) => Ok(map.iter().map(|(k, v)| (k.as_str(), v)).collect()),
            other => Err(MapperError::not_recognized(self.name(), other)),
        }
    }

    fn name(&self) -> &'static str {
        "keyed"
    }
}

/// [`KeyedMapper`] restricted by an extra predicate.
///
/// A value is a map only if it is string-keyed *and* the guard accepts it,
/// which lets callers stop recursion at chosen maps without writing any
/// unpacking logic.
///
/// ```
/// use jmap::mapper::{Guarded, MapPredicate};
/// use jmap::value::Value;
///
/// // Keep maps tagged with a "$ref" key as opaque leaves
/// let mapper = Guarded::new(|v: &Value| v.as_map().is_none_or(|m| !m.contains_key("$ref")));
/// let reference = Value::from(serde_json::json!({"$ref": "#/a"}));
/// assert!(!mapper.is_map(&reference));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Guarded<P> {
    guard: P,
}

impl<P> Guarded<P>
where
    P: Fn(&Value) -> bool + Send + Sync,
{
    pub fn new(guard: P) -> Self {
        Self { guard }
    }
}

impl<P> MapPredicate for Guarded<P>
where
    P: Fn(&Value) -> bool + Send + Sync,
{
    fn is_map(&self, value: &Value) -> bool {
        is_string_keyed_map(value) && (self.guard)(value)
    }
}

impl<P> Mapper for Guarded<P>
where
    P: Fn(&Value) -> bool + Send + Sync,
{
    fn unpack<'a>(&self, value: &'a Value) -> Result<Entries<'a>, MapperError> {
        KeyedMapper.unpack(value)
    }

    fn name(&self) -> &'static str {
        "guarded"
    }
}
