//! Restaurant-local time.
//!
//! Timestamps are stored in UTC. Calendar questions ("is this today?", "is this in the
//! past?") are answered in the restaurant's fixed UTC−6 offset.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Restaurant timezone, UTC−6 without daylight saving.
pub const RESTAURANT_OFFSET: FixedOffset = match FixedOffset::west_opt(6 * 3600) {
    Some(offset) => offset,
    None => panic!("restaurant offset out of range"),
};

/// Calendar date of `instant` in restaurant-local time.
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&RESTAURANT_OFFSET).date_naive()
}

/// Whether `instant` falls on the same restaurant-local day as `now`.
pub fn is_same_local_day(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    local_date(instant) == local_date(now)
}

/// Start and end (exclusive) of the restaurant-local day containing `now`, in UTC.
pub fn local_day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = local_date(now);
    let start = date
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| naive.and_local_timezone(RESTAURANT_OFFSET).single())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or(now);

    (start, start + chrono::Duration::days(1))
}
