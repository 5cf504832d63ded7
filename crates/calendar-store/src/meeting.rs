//! Meeting value type and the inclusive overlap predicate.
//!
//! Meetings are immutable one-hour blocks. Two meetings overlap when their
//! `[start, end]` intervals intersect INCLUSIVELY: a meeting ending exactly
//! when another starts counts as an overlap, so back-to-back bookings in
//! the same minute interact under the replacement policy.

use serde::{Deserialize, Serialize};

/// Fixed meeting duration in minutes.
pub const MEETING_MINUTES: u16 = 60;

/// The kind of a meeting. PERSONAL meetings are protected: they are never
/// replaced by an overlapping booking and never cancellable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingType {
    Work,
    Personal,
}

/// A scheduled one-hour meeting.
///
/// `end` is always `start + 60`; it is derived by [`Meeting::new`] and
/// never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Start of the meeting, minutes since midnight (0-1439).
    pub start: u16,
    /// End of the meeting, `start + 60`.
    pub end: u16,
    /// Work or personal.
    pub kind: MeetingType,
}

impl Meeting {
    pub fn new(start: u16, kind: MeetingType) -> Self {
        Meeting {
            start,
            end: start + MEETING_MINUTES,
            kind,
        }
    }

    /// Inclusive interval overlap: `a.start <= b.end && b.start <= a.end`.
    ///
    /// Touching endpoints overlap, e.g. 10:00-11:00 and 11:00-12:00.
    pub fn overlaps(&self, other: &Meeting) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
