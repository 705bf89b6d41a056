//! Tracker error types.

use thiserror::Error;
use vigil_core::{PropertyKey, ValueKind};

/// Result type for tracker operations.
pub type TrackResult<T> = Result<T, TrackError>;

/// Errors raised by tracker creation and by calls made through a tracker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("Invalid target: expected an object or array, got {kind}")]
    InvalidTargetKind { kind: ValueKind },

    #[error("Invalid tracker function: a callable tracker is required")]
    InvalidTrackerFunction,

    #[error("Cannot descend into {key}: not an object or array")]
    NotComposite { key: PropertyKey },

    #[error("{key} is not a function")]
    NotCallable { key: PropertyKey },

    #[error("Invalid argument to {method}: {message}")]
    InvalidArgument {
        method: &'static str,
        message: String,
    },
}

impl TrackError {
    pub fn invalid_target_kind(kind: ValueKind) -> Self {
        Self::InvalidTargetKind { kind }
    }

    pub fn not_composite(key: impl Into<PropertyKey>) -> Self {
        Self::NotComposite { key: key.into() }
    }

    pub fn not_callable(key: impl Into<PropertyKey>) -> Self {
        Self::NotCallable { key: key.into() }
    }

    pub fn invalid_argument(method: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            method,
            message: message.into(),
        }
    }
}
