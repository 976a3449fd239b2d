//! Identifier type for stored equations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

/// Row identifier of a stored equation.
///
/// Assigned by the storage backend on insert; serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquationId(i64);

impl EquationId {
    /// Creates an equation ID from a raw row id.
    ///
    /// # Examples
    ///
    /// ```
    /// use equa_core::EquationId;
    ///
    /// let id = EquationId::new(7);
    /// assert_eq!(id.get(), 7);
    /// ```
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EquationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EquationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EquationId> for i64 {
    fn from(id: EquationId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EquationId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| Error::NotFound { id: s.to_string() })
    }
}
