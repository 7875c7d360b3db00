//! Newtype wrappers for domain identities

use std::fmt::{self, Display};

/// Identity the reclamation registry assigns to a registered owner.
///
/// Ids are unique per registry instance and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Wrap a raw registry-assigned id
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner-{}", self.0)
    }
}
