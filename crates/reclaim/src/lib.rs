//! At-most-once resource reclamation.
//!
//! An [`Owner`] handle registers a cleanup payload ([`ResourceRecord`]) with
//! the process-wide [`ReclamationRegistry`] at construction. The record is
//! released exactly once, through whichever of two independent paths fires
//! first: the caller's explicit [`Owner::close`], or the automatic path when
//! the handle is dropped without having been closed. Both paths converge on
//! one atomic flag per registration, so redundant or racing releases are
//! defined no-ops rather than errors.
//!
//! If neither path ever fires (the process exits while the handle is still
//! live), no release happens. The automatic path is a best-effort fallback,
//! not a transactional guarantee.
//!
//! The [`options`] module is an unrelated utility: a fluent builder over a
//! closed option enumeration.

pub mod handle;
pub mod options;
pub mod record;
pub mod registry;

pub use self::{
    handle::Owner,
    options::{SelectableOption, Selection, SelectionBuilder},
    record::{HeldState, ReleaseAction, ResourceRecord},
    registry::{ReclamationRegistry, Registration},
};

pub use reclaim_core::{Error, OwnerId, Result};
