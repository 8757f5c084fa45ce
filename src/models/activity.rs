use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 3] = [Self::Completed, Self::InProgress, Self::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Pending => "Pending",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Completed" => Some(Self::Completed),
            "In Progress" => Some(Self::InProgress),
            "Pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

/// One row of the project plan: a named task with a scheduled date range
/// and a completion status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: ActivityStatus,
}

impl Activity {
    /// Scheduled length in days, inclusive of both endpoints.
    /// A one-day activity (start == end) has duration 1.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
