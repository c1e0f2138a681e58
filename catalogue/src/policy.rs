//! This module defines how a cursor reacts to elements appended after its creation.
//!
//! There are two policies:
//!  * [`IterationPolicy::Live`] - the cursor observes appends for as long as it still has
//!    elements to produce (the default)
//!  * [`IterationPolicy::Snapshot`] - the cursor is bound to the length at creation time
//!
//! In both cases a cursor that reached its end stays exhausted, see [`crate::Cursor`].
use std::{fmt, str::FromStr};

use thiserror::Error;

/// Visibility of appends to already created cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IterationPolicy {
    #[default]
    Live,
    Snapshot,
}

impl fmt::Display for IterationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationPolicy::Live => f.write_str("live"),
            IterationPolicy::Snapshot => f.write_str("snapshot"),
        }
    }
}

/// Error returned when parsing an [`IterationPolicy`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown iteration policy `{0}`, expected `live` or `snapshot`")]
pub struct ParsePolicyError(String);

impl FromStr for IterationPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(IterationPolicy::Live),
            "snapshot" => Ok(IterationPolicy::Snapshot),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}
