// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod distance;
pub mod password;
pub mod weekday;

pub use distance::distance_km;
pub use password::{hash_password, verify_password};
pub use weekday::{group_by_weekday, parse_week_numbers};
