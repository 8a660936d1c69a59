// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 with millisecond precision and a `Z`
/// suffix, e.g. `2024-01-15T10:00:00.123Z`. Whole seconds drop the fraction.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    if date.timestamp_subsec_millis() == 0 {
        date.to_rfc3339_opts(SecondsFormat::Secs, true)
    } else {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
