//! Formatting helpers for static page text.

use time::OffsetDateTime;

use super::content::PROFILE;

/// Calendar year on the local clock, or UTC when the local offset cannot be
/// determined.
pub fn current_year() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PROFILE.name)
}
