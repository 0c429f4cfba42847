//! Constants used throughout the jmap library.
//!
//! This module provides central definitions for the defaults applied when a
//! caller leaves a configuration value unset.

/// Depth ceiling applied whenever a requested depth is zero.
pub const MAX_DEPTH: usize = 15;

/// Separator used to join path segments when none is configured.
pub const DEFAULT_SEPARATOR: &str = ".";
