//! End-of-period milestones a caller may want to be reminded about.
//!
//! Only eligibility is decided here; scheduling and delivery belong to the
//! caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::DriverStatusReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    FullAccompaniment,
    NightAccompaniment,
    NewDriver,
}

impl MilestoneKind {
    pub fn label(self) -> &'static str {
        match self {
            MilestoneKind::FullAccompaniment => "full escort period",
            MilestoneKind::NightAccompaniment => "night escort period",
            MilestoneKind::NewDriver => "new-driver period",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub date: NaiveDate,
}

impl Milestone {
    /// A reminder fires on the end date itself.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

/// Every defined end date in chronological order.
pub fn milestones(report: &DriverStatusReport) -> Vec<Milestone> {
    let candidates = [
        (MilestoneKind::FullAccompaniment, report.full_accompaniment_end_date),
        (MilestoneKind::NightAccompaniment, report.night_accompaniment_end_date),
        (MilestoneKind::NewDriver, Some(report.new_driver_end_date)),
    ];

    let mut out: Vec<Milestone> = candidates
        .into_iter()
        .filter_map(|(kind, date)| date.map(|date| Milestone { kind, date }))
        .collect();
    out.sort_by_key(|m| m.date);
    out
}

/// Milestones strictly after the report's reference date; past or same-day
/// end dates cannot be scheduled.
pub fn upcoming_milestones(report: &DriverStatusReport) -> Vec<Milestone> {
    milestones(report)
        .into_iter()
        .filter(|m| m.date > report.reference_date)
        .collect()
}
