//! Error types for content loading and UI state transitions.

use thiserror::Error;

use crate::contact::Field;

/// Errors raised while loading site content or building UI state.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The embedded content document could not be deserialized.
    #[error("failed to parse site content: {0}")]
    Content(#[from] serde_json::Error),

    /// A timing value in the site configuration is unusable.
    #[error("invalid site config: {0}")]
    InvalidConfig(String),

    /// A carousel needs at least one item to cycle through.
    #[error("carousel requires at least one item")]
    EmptyCarousel,
}

/// Why a contact form submission was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// A required field is empty.
    #[error("required field `{0}` is empty")]
    MissingField(Field),
}

/// Convenience alias used across the crate.
pub type Result<T, E = SiteError> = std::result::Result<T, E>;
