/// Result type alias for reclaim operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the reclaim workspace
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A name that is not a member of a closed option enumeration
    #[error("invalid option '{option}': not a member of the option set")]
    InvalidOption { option: String },

    /// A release action reported a failure. Captured and logged by the
    /// registry; never retried, and never surfaced through `close()`.
    #[error("release action for '{owner}' failed: {message}")]
    ReleaseFailed { owner: String, message: String },
}

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid-option error
    #[must_use]
    pub fn invalid_option(option: impl Into<String>) -> Self {
        Error::InvalidOption {
            option: option.into(),
        }
    }

    /// Create a release-failure error
    #[must_use]
    pub fn release_failed(owner: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ReleaseFailed {
            owner: owner.into(),
            message: message.into(),
        }
    }
}
