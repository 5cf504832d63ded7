//! Tests for listing: sort order, zero-padded formatting, and the
//! no-side-effect guarantee for unknown users.

use calendar_store::{CalendarStore, Meeting, MeetingType};

#[test]
fn meetings_are_listed_sorted_by_start_time() {
    let mut store = CalendarStore::new();

    // Insert out of order; spacing avoids the inclusive-endpoint overlap.
    assert!(store.schedule_meeting("alice", "15:30", MeetingType::Work));
    assert!(store.schedule_meeting("alice", "08:00", MeetingType::Personal));
    assert!(store.schedule_meeting("alice", "11:45", MeetingType::Work));

    assert_eq!(store.get_meetings("alice"), vec!["08:00", "11:45", "15:30"]);
}

#[test]
fn listing_is_zero_padded() {
    let mut store = CalendarStore::new();

    assert!(store.schedule_meeting("alice", "00:05", MeetingType::Work));
    assert!(store.schedule_meeting("alice", "07:00", MeetingType::Work));

    assert_eq!(store.get_meetings("alice"), vec!["00:05", "07:00"]);
}

#[test]
fn unknown_user_lists_empty() {
    let store = CalendarStore::new();
    assert!(store.get_meetings("nobody").is_empty());
}

#[test]
fn listing_does_not_create_a_user_entry() {
    let store = CalendarStore::new();

    assert!(store.get_meetings("alice").is_empty());
    // A second read sees the same empty state; nothing was materialized.
    assert!(store.get_meetings("alice").is_empty());
}

#[test]
fn listing_reflects_replacement_not_accumulation() {
    let mut store = CalendarStore::new();

    assert!(store.schedule_meeting("alice", "09:00", MeetingType::Work));
    assert!(store.schedule_meeting("alice", "09:30", MeetingType::Work));

    // Count stays at one after the in-place replacement.
    assert_eq!(store.get_meetings("alice"), vec!["09:30"]);
}

#[test]
fn meeting_serializes_with_derived_end() {
    let m = Meeting::new(9 * 60, MeetingType::Work);

    let json = serde_json::to_value(m).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "start": 540, "end": 600, "kind": "Work" })
    );
}
