// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Grouping users by the weekday they registered on.

use crate::models::{User, UserSummary};
use chrono::{Datelike, Weekday};
use std::collections::BTreeMap;

/// Weekdays indexed by week number, Sunday first.
const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeekNumberError {
    #[error("week_number is required")]
    Empty,

    #[error("week_number must be a comma-separated list of integers between 0 and 6")]
    Invalid(String),
}

/// Lowercase English day name, used as the listing key.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "sunday",
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
    }
}

/// Parse a list like `"0,2, 6"` (0 = Sunday .. 6 = Saturday).
///
/// Duplicates are kept; the caller's map collapses them.
pub fn parse_week_numbers(raw: &str) -> Result<Vec<Weekday>, WeekNumberError> {
    if raw.trim().is_empty() {
        return Err(WeekNumberError::Empty);
    }

    raw.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<usize>()
                .ok()
                .and_then(|n| WEEK.get(n).copied())
                .ok_or_else(|| WeekNumberError::Invalid(item.to_string()))
        })
        .collect()
}

/// Bucket users by registration weekday (UTC), only for the requested days.
///
/// Every requested day gets a key, even when nobody registered on it.
/// Users keep their input order inside a bucket.
pub fn group_by_weekday(
    users: &[User],
    days: &[Weekday],
) -> BTreeMap<&'static str, Vec<UserSummary>> {
    let mut result = BTreeMap::new();
    for &day in days {
        result.entry(day_name(day)).or_insert_with(|| {
            users
                .iter()
                .filter(|u| u.register_at.weekday() == day)
                .map(UserSummary::from)
                .collect()
        });
    }
    result
}
