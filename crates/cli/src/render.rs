// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of the page and back-office views.

use std::fmt::Write as _;

use afterclass_domain::{
    AdminCourse, AdminWindowStatus, CapacityLevel, CourseControl, RegistrationDetail,
    RegistrationStatistics, RegistrationSummary, RegistrationWindow, StatusTone, SupplyControl,
    VideoEmbed, WindowState, format_local, parse_timestamp,
};
use chrono_tz::Tz;

/// The window notice and submit label.
pub fn window_section(state: &WindowState, window: &RegistrationWindow, tz: Tz) -> String {
    let posture = state.posture(window);
    let mut out = String::new();
    if let Some(notice) = posture.notice {
        let _ = writeln!(out, "{}", notice.message(tz));
    }
    let marker: &str = if posture.submit_enabled { ">" } else { "x" };
    let _ = writeln!(out, "[{marker}] {}", posture.submit_label);
    out
}

/// One line per course: selection box, label, availability and video.
///
/// Disabled courses show `[-]`.
pub fn course_list(courses: &[CourseControl]) -> String {
    let mut out = String::new();
    for course in courses {
        let mark: &str = match (course.disabled, course.checked) {
            (true, _) => "-",
            (false, true) => "x",
            (false, false) => " ",
        };
        let _ = write!(out, "[{mark}] {}", course.label());
        if let Some(signal) = course.availability {
            let _ = write!(out, " {}", signal.note());
        }
        if let Some(url) = course.video_url.as_deref() {
            let _ = write!(out, "  video: {}", VideoEmbed::resolve(url).player_url());
        }
        out.push('\n');
    }
    out
}

pub fn supply_list(supplies: &[SupplyControl]) -> String {
    let mut out = String::new();
    for supply in supplies {
        let mark: &str = if supply.checked { "x" } else { " " };
        let _ = writeln!(out, "[{mark}] {} {}", supply.name, supply.price);
    }
    out
}

const fn tone_icon(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Warning => "⚠️",
        StatusTone::Danger => "🔒",
        StatusTone::Success => "✅",
    }
}

/// The admin registration-window view.
pub fn admin_window(window: &RegistrationWindow, status: &AdminWindowStatus, tz: Tz) -> String {
    let show = |ts: Option<time::OffsetDateTime>| {
        ts.map_or_else(|| String::from("-"), |ts| format_local(ts, tz))
    };
    format!(
        "Start: {}\nEnd:   {}\n{} {}\n",
        show(window.start),
        show(window.end),
        tone_icon(status.tone),
        status.label
    )
}

/// The admin course table. Materials-fee rows are expected to be filtered out.
pub fn admin_course_table(courses: &[&AdminCourse]) -> String {
    let mut out = format!(
        "{:>4}  {:<20} {:>6} {:>8} {:>5} {:>9}\n",
        "ID", "Name", "Price", "Capacity", "Used", "Remaining"
    );
    for course in courses {
        let flag: &str = match course.capacity_level() {
            CapacityLevel::Full => " !",
            CapacityLevel::Low => " *",
            CapacityLevel::Ok => "",
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<20} {:>6} {:>8} {:>5} {:>9}{flag}",
            course.id,
            course.name,
            course.price,
            course.capacity,
            course.used,
            course.remaining_label()
        );
    }
    out
}

pub fn statistics(stats: &RegistrationStatistics) -> String {
    format!(
        "Registrations: {}  Students: {}  Course enrollments: {}  Supply orders: {}\n",
        stats.total_registrations,
        stats.total_students,
        stats.total_course_enrollments,
        stats.total_supply_orders
    )
}

fn timestamp(raw: Option<&str>, tz: Tz) -> String {
    match raw {
        None => String::from("-"),
        Some(raw) => parse_timestamp(raw, tz).map_or_else(|| raw.to_string(), |ts| format_local(ts, tz)),
    }
}

/// The registration list.
pub fn registration_table(registrations: &[&RegistrationSummary], tz: Tz) -> String {
    if registrations.is_empty() {
        return String::from("No registrations\n");
    }
    let mut out = String::new();
    for reg in registrations {
        let _ = writeln!(
            out,
            "#{:<4} {:<16} {:<12} courses: {:<2} supplies: {:<2} {:<6} {}",
            reg.id,
            reg.student_name,
            reg.class_name.as_deref().unwrap_or("Unassigned"),
            reg.course_count,
            reg.supply_count,
            if reg.is_paid { "Paid" } else { "Unpaid" },
            timestamp(reg.created_at.as_deref(), tz)
        );
    }
    out
}

/// One registration with its line items and total.
pub fn registration_detail(detail: &RegistrationDetail, tz: Tz) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Registration #{}", detail.id);
    let _ = writeln!(out, "Student:  {}", detail.student_name);
    let _ = writeln!(out, "Birthday: {}", detail.birthday.as_deref().unwrap_or("-"));
    let _ = writeln!(
        out,
        "Class:    {}",
        detail.class_name.as_deref().unwrap_or("Unassigned")
    );
    let _ = writeln!(
        out,
        "Payment:  {}",
        if detail.is_paid { "Paid" } else { "Unpaid" }
    );
    let _ = writeln!(
        out,
        "Registered: {}",
        timestamp(detail.created_at.as_deref(), tz)
    );

    for (heading, items) in [("Courses", &detail.courses), ("Supplies", &detail.supplies)] {
        let _ = writeln!(out, "{heading}:");
        if items.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for item in items {
            let _ = writeln!(out, "  {} {}", item.name, item.price);
        }
    }
    let _ = writeln!(out, "Total: ${}", detail.total_cost());
    out
}
