//! Activity filter
//!
//! Decides whether a repository qualifies for counting. Pure predicate: archived
//! repositories are out, and so is anything untouched for more than two years.
//! The window is a flat 730-day count, not calendar-aware.

use chrono::{DateTime, Duration, Utc};

use crate::github::Repo;

const ACTIVITY_WINDOW_DAYS: i64 = 730;

pub fn is_countable(repo: &Repo, now: DateTime<Utc>) -> bool {
    if repo.archived {
        return false;
    }
    now.signed_duration_since(repo.updated_at) <= Duration::days(ACTIVITY_WINDOW_DAYS)
}
