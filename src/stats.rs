use chrono::NaiveDate;

use crate::error::GanttError;
use crate::models::{Activity, ActivityStatus};

/// Aggregate statistics over a plan's activities. Computed once, after the
/// plan is validated non-empty.
#[derive(Debug, Clone)]
pub struct ProjectStats {
    pub total_activities: usize,
    pub completed: i64,
    pub in_progress: i64,
    pub pending: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ProjectStats {
    pub fn compute(activities: &[Activity]) -> Result<Self, GanttError> {
        let first = activities.first().ok_or_else(GanttError::empty_plan)?;

        let mut stats = Self {
            total_activities: activities.len(),
            completed: 0,
            in_progress: 0,
            pending: 0,
            start: first.start,
            end: first.end,
        };
        for a in activities {
            match a.status {
                ActivityStatus::Completed => stats.completed += 1,
                ActivityStatus::InProgress => stats.in_progress += 1,
                ActivityStatus::Pending => stats.pending += 1,
            }
            stats.start = stats.start.min(a.start);
            stats.end = stats.end.max(a.end);
        }
        Ok(stats)
    }

    /// Project span from earliest start to latest end, inclusive.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn count(&self, status: ActivityStatus) -> i64 {
        match status {
            ActivityStatus::Completed => self.completed,
            ActivityStatus::InProgress => self.in_progress,
            ActivityStatus::Pending => self.pending,
        }
    }

    /// Share of activities in the given status, rounded to one decimal.
    pub fn percent(&self, status: ActivityStatus) -> f64 {
        let raw = self.count(status) as f64 / self.total_activities as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }

    /// Whole-number completion percentage, used by the chart overlay.
    pub fn percent_complete(&self) -> i64 {
        (self.completed as f64 / self.total_activities as f64 * 100.0).round() as i64
    }
}
