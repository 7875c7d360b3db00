//! Owner handles: the public object a caller acquires and must eventually
//! release.

use std::sync::Arc;

use reclaim_core::OwnerId;

use crate::record::{HeldState, ResourceRecord};
use crate::registry::{ReclamationRegistry, Registration};

/// A handle over held sub-resources.
///
/// Construction creates a [`HeldState`] payload, wraps it in a
/// [`ResourceRecord`], and registers the record with the reclamation
/// registry. From then on the record lives in exactly two states:
/// `Live → Released`, with `Released` absorbing. The transition happens
/// exactly once, through whichever fires first:
///
/// - the explicit path: the caller's [`close`](Owner::close);
/// - the automatic path: the handle is dropped without having been closed.
///
/// The handle keeps only its registration token and a read-only view of the
/// payload; the record never references the handle back, so releasing it can
/// never resurrect the owner.
#[derive(Debug)]
pub struct Owner {
    state: Arc<HeldState>,
    registry: ReclamationRegistry,
    registration: Registration,
}

impl Owner {
    /// Construct an owner holding `junk_piles` sub-resources, registered with
    /// the process-wide registry. Never fails.
    #[must_use]
    pub fn new(junk_piles: u64) -> Self {
        Self::with_registry(&ReclamationRegistry::global(), junk_piles)
    }

    /// Same as [`Owner::new`], against an explicit registry. Tests use this
    /// for isolation.
    #[must_use]
    pub fn with_registry(registry: &ReclamationRegistry, junk_piles: u64) -> Self {
        let state = Arc::new(HeldState::new(junk_piles));
        let record = ResourceRecord::new("junk-room", Arc::clone(&state));
        let registration = registry.register(record);
        Self {
            state,
            registry: registry.clone(),
            registration,
        }
    }

    /// Registry identity of this owner
    #[must_use]
    pub fn id(&self) -> OwnerId {
        self.registration.id()
    }

    /// Junk piles still held. Read-only diagnostic view; the count is
    /// mutated only by the release action.
    #[must_use]
    pub fn piles(&self) -> u64 {
        self.state.piles()
    }

    /// A shared view of the payload that survives the handle. Useful for
    /// observing the end state after the automatic path has fired.
    #[must_use]
    pub fn state(&self) -> Arc<HeldState> {
        Arc::clone(&self.state)
    }

    /// Explicit release.
    ///
    /// Idempotent: returns `true` iff this call performed the release. Later
    /// calls, or a racing automatic release, observe the record already
    /// released and are no-ops.
    pub fn close(&self) -> bool {
        self.registry.release_explicit(&self.registration)
    }
}

impl Drop for Owner {
    fn drop(&mut self) {
        // Dropping the handle is the point at which the owner becomes
        // unreachable; if no explicit close happened, this fires the
        // automatic path.
        self.registry.reclaim(self.registration.id());
    }
}
