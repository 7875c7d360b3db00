//! Core domain types and errors for the `reclaim` workspace.
//!
//! This crate establishes the foundational building blocks shared across the
//! workspace:
//!
//! - **`errors`**: the primary `Error` enum and `Result` type alias,
//!   centralizing all failure modes for predictable error handling.
//! - **`types`**: domain newtype wrappers such as [`OwnerId`] that enforce
//!   invariants at the type level.

pub mod errors;
pub mod types;

pub use self::{
    errors::{Error, Result},
    types::OwnerId,
};
