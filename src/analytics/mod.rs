//! Contribution analytics module
//!
//! This module handles the daily-contribution data model and the
//! derived statistics: calendar-year totals, the rolling 365-day
//! total, and the current activity streak.

pub mod contributions;
pub mod streak;

pub use contributions::{parse_contributions, ContributionDay, RawContributionDay};
pub use streak::{compute_streak, rolling_total, rolling_total_with_window, total_for_year};
