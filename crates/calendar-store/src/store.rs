//! Per-user calendar store: schedule, list, and cancel one-hour meetings.
//!
//! Scheduling enforces three rules, in order: an existing PERSONAL meeting
//! blocks any overlapping booking; overlapping WORK meetings are removed as
//! a group and replaced by the new booking; a user never holds more than
//! [`MAX_DAILY_MEETINGS`] meetings. Rejections leave the store untouched.

use std::collections::HashMap;

use crate::error::{CalendarError, Result};
use crate::meeting::{Meeting, MeetingType};
use crate::slot::{format_slot, parse_slot};

/// Maximum meetings a single user may hold in the modeled day.
pub const MAX_DAILY_MEETINGS: usize = 5;

/// In-memory mapping from user identifier to that user's meetings.
///
/// The store exclusively owns all [`Meeting`] values. Within one user's
/// collection, meetings are pairwise non-overlapping (inclusive rule) and
/// never exceed [`MAX_DAILY_MEETINGS`]; both invariants hold after every
/// accepted operation.
///
/// Single-threaded by design: mutating operations take `&mut self`, so a
/// concurrent deployment must wrap the store in its own synchronization.
#[derive(Debug, Default)]
pub struct CalendarStore {
    meetings: HashMap<String, Vec<Meeting>>,
}

impl CalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-hour meeting for `user` at `time` (`HH:MM`).
    ///
    /// Returns `true` on success, `false` on any rejection: malformed time,
    /// overlap with a PERSONAL meeting, or the daily capacity limit. The
    /// collection changes only on success.
    pub fn schedule_meeting(&mut self, user: &str, time: &str, kind: MeetingType) -> bool {
        self.try_schedule(user, time, kind).is_ok()
    }

    /// Schedule, reporting the rejection cause instead of a bare `false`.
    ///
    /// # Errors
    /// - `InvalidTime` -- `time` is not strict zero-padded `HH:MM`.
    /// - `PersonalConflict` -- the slot overlaps an existing PERSONAL
    ///   meeting (PERSONAL is never replaced, whatever the new kind).
    /// - `CapacityExceeded` -- accepting the meeting would leave the user
    ///   with more than [`MAX_DAILY_MEETINGS`] meetings.
    pub fn try_schedule(&mut self, user: &str, time: &str, kind: MeetingType) -> Result<()> {
        let candidate = Meeting::new(parse_slot(time)?, kind);

        // One scan: collect replaceable WORK overlaps, bail on a PERSONAL one.
        let meetings = self.meetings.entry(user.to_string()).or_default();
        let mut replaced: Vec<u16> = Vec::new();
        for m in meetings.iter() {
            if candidate.overlaps(m) {
                if m.kind == MeetingType::Personal {
                    return Err(CalendarError::PersonalConflict);
                }
                replaced.push(m.start);
            }
        }

        let new_len = meetings.len() - replaced.len() + 1;
        if new_len > MAX_DAILY_MEETINGS {
            return Err(CalendarError::CapacityExceeded {
                limit: MAX_DAILY_MEETINGS,
            });
        }

        meetings.retain(|m| !replaced.contains(&m.start));
        meetings.push(candidate);
        Ok(())
    }

    /// All of `user`'s meetings as `HH:MM` strings, sorted by start time.
    ///
    /// An unknown user yields an empty vec; listing never creates an entry.
    pub fn get_meetings(&self, user: &str) -> Vec<String> {
        let Some(meetings) = self.meetings.get(user) else {
            return Vec::new();
        };

        let mut sorted: Vec<&Meeting> = meetings.iter().collect();
        sorted.sort_by_key(|m| m.start);
        sorted.iter().map(|m| format_slot(m.start)).collect()
    }

    /// Cancel the WORK meeting starting exactly at `time`.
    ///
    /// Returns `false` when the user or meeting is unknown, when the time
    /// string is malformed, or when the meeting is PERSONAL.
    pub fn cancel_meeting(&mut self, user: &str, time: &str) -> bool {
        self.try_cancel(user, time).is_ok()
    }

    /// Cancel, reporting the rejection cause instead of a bare `false`.
    ///
    /// Malformed time strings are rejected with `InvalidTime`, matching the
    /// scheduling path rather than panicking on caller input.
    ///
    /// # Errors
    /// - `InvalidTime` -- `time` is not strict zero-padded `HH:MM`.
    /// - `NotFound` -- unknown user, or no meeting starts at `time`.
    /// - `CancelPersonal` -- the meeting at `time` is PERSONAL.
    pub fn try_cancel(&mut self, user: &str, time: &str) -> Result<()> {
        let target = parse_slot(time)?;

        let meetings = self
            .meetings
            .get_mut(user)
            .ok_or_else(|| CalendarError::NotFound(time.to_string()))?;

        // Start times are unique within a valid collection, so at most one
        // meeting can match.
        let Some(idx) = meetings.iter().position(|m| m.start == target) else {
            return Err(CalendarError::NotFound(time.to_string()));
        };

        if meetings[idx].kind == MeetingType::Personal {
            return Err(CalendarError::CancelPersonal);
        }

        meetings.remove(idx);
        Ok(())
    }
}
