//! Error types for calendar-store operations.

use thiserror::Error;

/// Why a schedule or cancel request was rejected.
///
/// The boolean API collapses every variant to `false`; the `try_*` methods
/// on [`crate::CalendarStore`] surface the distinction for callers that
/// need to know the cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The time string was not strict zero-padded `HH:MM`.
    #[error("invalid time string {0:?}: expected zero-padded HH:MM")]
    InvalidTime(String),

    /// The requested slot overlaps an existing PERSONAL meeting.
    #[error("slot overlaps a personal meeting")]
    PersonalConflict,

    /// Accepting the meeting would leave the user with more than the
    /// daily maximum of meetings.
    #[error("daily limit of {limit} meetings reached")]
    CapacityExceeded { limit: usize },

    /// No meeting starts at the requested time.
    #[error("no meeting at {0}")]
    NotFound(String),

    /// The meeting at the requested time is PERSONAL and cannot be
    /// cancelled through this API.
    #[error("personal meetings cannot be cancelled")]
    CancelPersonal,
}

pub type Result<T> = std::result::Result<T, CalendarError>;
