//! Path-key encoding for flat maps.
//!
//! A flat key is its path segments joined by a separator:
//! `segment1<sep>segment2<sep>...<sep>segmentN`. Separators occurring inside a
//! segment are not escaped, so such keys do not survive a round trip.

/// Joins a child key onto a parent path.
///
/// An empty parent yields the key unchanged, so the first level of a tree
/// never carries a leading separator.
///
/// ```
/// # use jmap::flat::join_key;
/// assert_eq!(join_key("", "a", "."), "a");
/// assert_eq!(join_key("a.b", "c", "."), "a.b.c");
/// assert_eq!(join_key("a", "b", "::"), "a::b");
/// ```
pub fn join_key(parent: &str, key: &str, separator: &str) -> String {
    if parent.is_empty() {
        return key.to_string();
    }

    let mut joined = String::with_capacity(parent.len() + separator.len() + key.len());
    joined.push_str(parent);
    joined.push_str(separator);
    joined.push_str(key);
    joined
}

/// Splits a flat key into its path segments.
///
/// Always yields at least one segment; empty segments are kept.
///
/// ```
/// # use jmap::flat::split_key;
/// assert_eq!(split_key("a.b.c", ".").collect::<Vec<_>>(), ["a", "b", "c"]);
/// assert_eq!(split_key("a..b", ".").collect::<Vec<_>>(), ["a", "", "b"]);
/// assert_eq!(split_key("", ".").collect::<Vec<_>>(), [""]);
/// ```
pub fn split_key<'a>(key: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    key.split(separator)
}

/// Strips `prefix` from a flat key, returning the remaining path.
///
/// Keys that do not start with the prefix, or consist only of it, yield
/// `None`. One separator directly following the prefix is dropped as well,
/// so keys produced by flattening under a prefix map back to the same paths.
pub(crate) fn strip_prefix<'a>(key: &'a str, prefix: &str, separator: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(key);
    }
    if key.len() <= prefix.len() {
        return None;
    }

    let rest = key.strip_prefix(prefix)?;
    Some(rest.strip_prefix(separator).unwrap_or(rest))
}
