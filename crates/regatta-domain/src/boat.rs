//! Boat identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical boat identifier
///
/// Names arrive already normalized (case folded, aliases resolved) from the
/// claim extractor. Identity is plain string equality; ordering is
/// lexicographic and drives every deterministic tie-break in the engine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoatId(String);

impl BoatId {
    /// Create a boat id from an already-canonical name
    ///
    /// # Examples
    ///
    /// ```
    /// use regatta_domain::BoatId;
    ///
    /// let boat = BoatId::new("danger zone");
    /// assert_eq!(boat.as_str(), "danger zone");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the underlying name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoatId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for BoatId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for BoatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
