//! Process-wide reclamation registry.
//!
//! The registry races the two release paths for every registered record: the
//! explicit path (the owner's `close()`) and the automatic path (the owner is
//! no longer reachable). A single atomic compare-and-set per entry decides
//! the winner, so exactly one path runs the release action no matter how the
//! two interleave. The loser observes the entry already released and does
//! nothing; redundant releases are defined no-ops, not errors.
//!
//! An entry is never removed from the registry before it is released, so an
//! in-flight explicit release can never lose the automatic fallback. If
//! neither path ever fires (the process exits with the owner still live), no
//! release happens; the automatic path is best effort.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use reclaim_core::OwnerId;

use crate::record::ResourceRecord;

/// Process-wide registry instance
static GLOBAL_REGISTRY: Lazy<ReclamationRegistry> = Lazy::new(ReclamationRegistry::new);

struct RegistrationEntry {
    id: OwnerId,
    released: AtomicBool,
    record: ResourceRecord,
}

impl RegistrationEntry {
    /// The false→true transition happens exactly once; the caller that wins
    /// it runs the release action.
    fn try_mark_released(&self) -> bool {
        self.released
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Opaque token tying an owner handle to its registration entry.
///
/// Holds the entry itself, never the record's owner. Valid only with the
/// registry that issued it.
pub struct Registration {
    entry: Arc<RegistrationEntry>,
}

impl Registration {
    /// Identity assigned at registration
    #[must_use]
    pub fn id(&self) -> OwnerId {
        self.entry.id
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.entry.id)
            .field("released", &self.entry.released.load(Ordering::Acquire))
            .finish()
    }
}

/// Coordinator guaranteeing each registered record is released at most once.
///
/// Cheap to clone; all clones share the same entry table.
#[derive(Clone)]
pub struct ReclamationRegistry {
    inner: Arc<RegistryInner>,
}

struct RegistryInner {
    entries: Mutex<HashMap<OwnerId, Arc<RegistrationEntry>>>,
    next_id: AtomicU64,
}

impl ReclamationRegistry {
    /// The process-wide registry
    #[must_use]
    pub fn global() -> Self {
        GLOBAL_REGISTRY.clone()
    }

    /// An isolated registry, typically one per test
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                entries: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Associate a record with a fresh owner identity.
    ///
    /// Safe to call concurrently from many handle constructions; entries
    /// never interfere with each other.
    pub fn register(&self, record: ResourceRecord) -> Registration {
        let id = OwnerId::from_raw(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let entry = Arc::new(RegistrationEntry {
            id,
            released: AtomicBool::new(false),
            record,
        });
        self.inner.entries.lock().insert(id, Arc::clone(&entry));
        tracing::debug!(id = %id, owner = entry.record.owner(), "registered resource record");
        Registration { entry }
    }

    /// Explicit release path, invoked by the owner handle's `close()`.
    ///
    /// Returns `true` iff this call won the race and performed the release.
    /// Never blocks beyond the short entry-table lock.
    pub fn release_explicit(&self, registration: &Registration) -> bool {
        self.release_entry(&registration.entry, "explicit")
    }

    /// Automatic release path: the owner identified by `id` is no longer
    /// reachable.
    ///
    /// Invoked by the owner handle's `Drop` impl, and directly by test
    /// harnesses simulating unreachability. Unknown or already-released ids
    /// are a no-op returning `false`.
    pub fn reclaim(&self, id: OwnerId) -> bool {
        let entry = self.inner.entries.lock().get(&id).cloned();
        match entry {
            Some(entry) => self.release_entry(&entry, "reclaimed"),
            None => false,
        }
    }

    /// Number of registered, not-yet-released records
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.inner.entries.lock().len()
    }

    fn release_entry(&self, entry: &Arc<RegistrationEntry>, path: &'static str) -> bool {
        if !entry.try_mark_released() {
            return false;
        }
        // This call won the race. The entry stays marked released even if the
        // action fails: failures are reported, never retried.
        match entry.record.release() {
            Ok(()) => {
                tracing::info!(
                    id = %entry.id,
                    owner = entry.record.owner(),
                    path,
                    "released resource record"
                );
            }
            Err(error) => {
                tracing::error!(
                    id = %entry.id,
                    owner = entry.record.owner(),
                    path,
                    %error,
                    "release action failed"
                );
            }
        }
        self.inner.entries.lock().remove(&entry.id);
        true
    }
}

impl fmt::Debug for ReclamationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReclamationRegistry")
            .field("live_count", &self.live_count())
            .finish()
    }
}

impl Default for ReclamationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
