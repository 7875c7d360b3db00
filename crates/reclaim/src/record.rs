//! Resource records: the cleanup payload, decoupled from the handle that
//! exposes it to callers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reclaim_core::Result;

/// The action run when a record is released.
///
/// The registry guarantees the action is invoked at most once per record, but
/// implementations go through a shared reference and must tolerate being
/// called while other threads are observing their state.
pub trait ReleaseAction: Send + Sync {
    /// Clear whatever the record holds. A failure is captured and logged by
    /// the registry; it is never retried, and the record still counts as
    /// released.
    fn release(&self) -> Result<()>;
}

impl<A> ReleaseAction for Arc<A>
where
    A: ReleaseAction + ?Sized,
{
    fn release(&self) -> Result<()> {
        (**self).release()
    }
}

/// Cleanup payload for one owner: a label for logging plus the release
/// action.
///
/// Invariant: a record holds no reference, direct or indirect, back to the
/// handle that owns it. If it did, the handle could never become unreachable
/// and the automatic release path could never fire. Once registered, the
/// record is owned exclusively by its registration entry.
pub struct ResourceRecord {
    owner: String,
    action: Box<dyn ReleaseAction>,
}

impl ResourceRecord {
    /// Create a record that runs `action` when released
    pub fn new(owner: impl Into<String>, action: impl ReleaseAction + 'static) -> Self {
        Self {
            owner: owner.into(),
            action: Box::new(action),
        }
    }

    /// Create a record whose release action is a closure
    pub fn from_fn<F>(owner: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        Self::new(owner, FnAction(action))
    }

    /// Label identifying the owning handle in log output
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub(crate) fn release(&self) -> Result<()> {
        self.action.release()
    }
}

struct FnAction<F>(F);

impl<F> ReleaseAction for FnAction<F>
where
    F: Fn() -> Result<()> + Send + Sync,
{
    fn release(&self) -> Result<()> {
        (self.0)()
    }
}

impl fmt::Debug for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRecord")
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}

/// Held sub-resources for one owner: a count of junk piles cleared on
/// release, plus a counter of how many times the release action actually ran.
#[derive(Debug, Default)]
pub struct HeldState {
    piles: AtomicU64,
    releases: AtomicU64,
}

impl HeldState {
    /// Create state holding `piles` junk piles
    #[must_use]
    pub fn new(piles: u64) -> Self {
        Self {
            piles: AtomicU64::new(piles),
            releases: AtomicU64::new(0),
        }
    }

    /// Junk piles still held
    #[must_use]
    pub fn piles(&self) -> u64 {
        self.piles.load(Ordering::Acquire)
    }

    /// Number of times the release action actually ran
    #[must_use]
    pub fn releases(&self) -> u64 {
        self.releases.load(Ordering::Acquire)
    }
}

impl ReleaseAction for HeldState {
    fn release(&self) -> Result<()> {
        self.piles.store(0, Ordering::Release);
        self.releases.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}
