//! # calendar-store
//!
//! In-memory per-user meeting scheduler with overlap and replacement rules.
//!
//! Each user holds up to five one-hour meetings per day. A new booking that
//! overlaps existing WORK meetings replaces them as a group; a booking that
//! overlaps a PERSONAL meeting is rejected outright. Overlap is inclusive:
//! a meeting ending at 11:00 overlaps one starting at 11:00.
//!
//! ## Quick start
//!
//! ```rust
//! use calendar_store::{CalendarStore, MeetingType};
//!
//! let mut store = CalendarStore::new();
//! assert!(store.schedule_meeting("alice", "09:00", MeetingType::Work));
//! // 09:30 overlaps 09:00-10:00, so the first booking is replaced.
//! assert!(store.schedule_meeting("alice", "09:30", MeetingType::Work));
//! assert_eq!(store.get_meetings("alice"), vec!["09:30"]);
//! ```
//!
//! ## Modules
//!
//! - [`store`] — `CalendarStore`: schedule / list / cancel per user
//! - [`meeting`] — `Meeting` value type and the overlap predicate
//! - [`slot`] — strict `HH:MM` parsing and formatting
//! - [`error`] — Error types behind the `try_*` API

pub mod error;
pub mod meeting;
pub mod slot;
pub mod store;

pub use error::CalendarError;
pub use meeting::{Meeting, MeetingType};
pub use store::{CalendarStore, MAX_DAILY_MEETINGS};
