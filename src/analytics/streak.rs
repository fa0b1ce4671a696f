//! Contribution totals and streak computation
//!
//! Pure functions over an already-retrieved contribution sequence.
//! The sequence is trusted to be ascending by date with one entry per
//! day; the operations here never mutate it and never retry.

use crate::analytics::contributions::ContributionDay;
use crate::constants::analytics;
use crate::error::{DashboardError, Result};
use chrono::{Datelike, NaiveDate};

/// Sum of contribution counts falling in the given calendar year
///
/// Returns 0 when no entry matches the year. Never fails.
pub fn total_for_year(days: &[ContributionDay], year: i32) -> u64 {
    days.iter()
        .filter(|day| day.date.year() == year)
        .map(|day| day.count as u64)
        .sum()
}

/// Sum of counts over the final 365 entries
///
/// Sequences shorter than the window are summed in full.
pub fn rolling_total(days: &[ContributionDay]) -> u64 {
    rolling_total_with_window(days, analytics::ROLLING_WINDOW_DAYS)
}

/// Sum of counts over the final `window` entries
pub fn rolling_total_with_window(days: &[ContributionDay], window: usize) -> u64 {
    days.iter()
        .rev()
        .take(window)
        .map(|day| day.count as u64)
        .sum()
}

/// Current consecutive-activity streak ending at the reference date
///
/// Walks backward from the reference day, counting consecutive days
/// with a positive count. When the reference date is not recorded, the
/// most recent available day stands in for it ("today not yet
/// recorded"). A zero count at the reference day does not by itself
/// reset the walk's starting point: only a second consecutive zero
/// breaks the streak outright, otherwise the walk reports the streak
/// of the prior run.
///
/// # Errors
///
/// - `EmptyContributionData` for an empty sequence
/// - `ReferenceDateOutOfRange` when the reference date predates the
///   first recorded day
pub fn compute_streak(days: &[ContributionDay], reference_date: NaiveDate) -> Result<u32> {
    if days.is_empty() {
        return Err(DashboardError::EmptyContributionData);
    }

    let first = days[0].date;
    if reference_date < first {
        return Err(DashboardError::ReferenceDateOutOfRange {
            reference: reference_date.to_string(),
            first: first.to_string(),
        });
    }

    let today_idx = days
        .iter()
        .position(|day| day.date == reference_date)
        .unwrap_or(days.len() - 1);

    let mut streak = 0u32;
    let walk_start = if days[today_idx].count > 0 {
        streak = 1;
        today_idx.checked_sub(1)
    } else {
        match today_idx.checked_sub(1) {
            Some(prev) if days[prev].count == 0 => return Ok(0),
            prev => prev,
        }
    };

    if let Some(start) = walk_start {
        let mut idx = start;
        loop {
            if days[idx].count == 0 {
                break;
            }
            streak += 1;
            if idx == 0 {
                break;
            }
            idx -= 1;
        }
    }

    Ok(streak)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Contiguous daily sequence ending at `end`, counts given oldest first
    fn sequence(end: NaiveDate, counts: &[u32]) -> Vec<ContributionDay> {
        counts
            .iter()
            .rev()
            .enumerate()
            .map(|(back, &count)| ContributionDay::new(end - chrono::Days::new(back as u64), count))
            .rev()
            .collect()
    }

    #[test]
    fn test_total_for_year_boundaries() {
        let days = vec![
            ContributionDay::new(date(2023, 12, 31), 3),
            ContributionDay::new(date(2024, 1, 1), 5),
            ContributionDay::new(date(2024, 1, 2), 0),
        ];
        assert_eq!(total_for_year(&days, 2024), 5);
        assert_eq!(total_for_year(&days, 2023), 3);
        assert_eq!(total_for_year(&days, 2022), 0);
    }

    #[test]
    fn test_total_for_year_empty() {
        assert_eq!(total_for_year(&[], 2024), 0);
    }

    #[test]
    fn test_rolling_total_window() {
        let end = date(2024, 6, 1);
        let days = sequence(end, &vec![1; 400]);
        assert_eq!(rolling_total(&days), 365);

        let short = sequence(end, &vec![1; 10]);
        assert_eq!(rolling_total(&short), 10);
    }

    #[test]
    fn test_rolling_total_takes_most_recent_entries() {
        let end = date(2024, 6, 1);
        let mut counts = vec![100; 10];
        counts.extend(vec![1; 365]);
        let days = sequence(end, &counts);
        // The ten count-100 days are older than the window.
        assert_eq!(rolling_total(&days), 365);
    }

    #[test]
    fn test_streak_stops_at_first_zero() {
        // counts oldest->newest: 2, 1, 0, 4; today = 4
        let end = date(2024, 6, 4);
        let days = sequence(end, &[2, 1, 0, 4]);
        assert_eq!(compute_streak(&days, end).unwrap(), 1);
    }

    #[test]
    fn test_streak_counts_consecutive_run() {
        let end = date(2024, 6, 4);
        let days = sequence(end, &[0, 2, 1, 4]);
        assert_eq!(compute_streak(&days, end).unwrap(), 3);
    }

    #[test]
    fn test_streak_spans_entire_sequence() {
        let end = date(2024, 6, 4);
        let days = sequence(end, &[2, 2, 1, 4]);
        assert_eq!(compute_streak(&days, end).unwrap(), 4);
    }

    #[test]
    fn test_streak_zero_today_two_consecutive_zeros_breaks() {
        let end = date(2024, 6, 4);
        let days = sequence(end, &[5, 5, 0, 0]);
        assert_eq!(compute_streak(&days, end).unwrap(), 0);
    }

    #[test]
    fn test_streak_zero_today_reports_prior_run() {
        // Today is zero but yesterday was active: the walk still runs
        // from yesterday and reports the prior run's length.
        let end = date(2024, 6, 4);
        let days = sequence(end, &[0, 3, 2, 0]);
        assert_eq!(compute_streak(&days, end).unwrap(), 2);
    }

    #[test]
    fn test_streak_single_zero_day() {
        let end = date(2024, 6, 4);
        let days = sequence(end, &[0]);
        assert_eq!(compute_streak(&days, end).unwrap(), 0);
    }

    #[test]
    fn test_streak_single_active_day() {
        let end = date(2024, 6, 4);
        let days = sequence(end, &[7]);
        assert_eq!(compute_streak(&days, end).unwrap(), 1);
    }

    #[test]
    fn test_streak_missing_reference_uses_last_entry() {
        // Reference is two days past the newest record.
        let end = date(2024, 6, 4);
        let days = sequence(end, &[0, 1, 2, 3]);
        assert_eq!(compute_streak(&days, date(2024, 6, 6)).unwrap(), 3);
    }

    #[test]
    fn test_streak_empty_sequence_fails() {
        let result = compute_streak(&[], date(2024, 6, 4));
        assert!(matches!(result, Err(DashboardError::EmptyContributionData)));
    }

    #[test]
    fn test_streak_reference_before_first_entry_fails() {
        let end = date(2024, 6, 4);
        let days = sequence(end, &[1, 1]);
        let result = compute_streak(&days, date(2024, 1, 1));
        assert!(matches!(
            result,
            Err(DashboardError::ReferenceDateOutOfRange { .. })
        ));
    }
}
