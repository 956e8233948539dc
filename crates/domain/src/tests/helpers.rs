// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

use crate::{
    CourseControl, CourseOffering, FormSnapshot, RegistrationWindow, SupplyControl,
    default_supplies,
};

pub fn today() -> Date {
    date!(2026 - 03 - 10)
}

pub fn open_window() -> RegistrationWindow {
    RegistrationWindow::new(
        Some(datetime!(2026-03-01 00:00 UTC)),
        Some(datetime!(2026-03-31 00:00 UTC)),
    )
}

pub fn mid_march() -> OffsetDateTime {
    datetime!(2026-03-10 12:00 UTC)
}

pub fn create_test_offering(id: i64, name: &str, price: u32) -> CourseOffering {
    CourseOffering {
        id,
        name: String::from(name),
        price,
        sessions: Some(12),
        frequency: Some(String::from("weekly")),
        remaining: None,
    }
}

pub fn create_test_courses() -> Vec<CourseControl> {
    vec![
        CourseControl::from_offering(&create_test_offering(1, "Ballet", 3600)),
        CourseControl::from_offering(&create_test_offering(2, "Jazz", 3200)),
        CourseControl::from_offering(&create_test_offering(3, "Hip Hop", 3000)),
    ]
}

/// A snapshot with every required field filled in and nothing checked.
pub fn create_filled_snapshot() -> FormSnapshot {
    FormSnapshot {
        name: String::from("Lin Mei"),
        birthday: String::from("2020-05-17"),
        class: Some(String::from("Sunflower")),
        courses: create_test_courses(),
        supplies: default_supplies()
            .iter()
            .map(SupplyControl::from_supply)
            .collect(),
    }
}
