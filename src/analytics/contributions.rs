//! Contribution data model and boundary validation
//!
//! The contribution data collaborator supplies one record per day,
//! ascending and contiguous, shaped `{date: "YYYY-MM-DD", count: n}`.
//! Contiguity and ordering are that collaborator's contract and are not
//! enforced here; malformed individual records are rejected at this
//! boundary so the analytics operations can trust their input.

use crate::error::{DashboardError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of contribution activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// Raw record shape as supplied by the contribution data collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContributionDay {
    pub date: String,
    pub count: i64,
}

/// Validate raw collaborator records into the typed model
///
/// # Errors
///
/// Returns `InvalidContributionRecord` for an unparseable date or a
/// negative count. The first malformed record aborts the parse.
pub fn parse_contributions(raw: &[RawContributionDay]) -> Result<Vec<ContributionDay>> {
    raw.iter()
        .map(|record| {
            let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|e| {
                DashboardError::invalid_record(format!(
                    "unparseable date {:?}: {}",
                    record.date, e
                ))
            })?;
            let count = u32::try_from(record.count).map_err(|_| {
                DashboardError::invalid_record(format!(
                    "count {} out of range for {}",
                    record.count, record.date
                ))
            })?;
            Ok(ContributionDay { date, count })
        })
        .collect()
}
