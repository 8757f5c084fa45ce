use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GanttError;

use super::activity::{Activity, ActivityStatus};

/// The built-in project plan, row-per-activity in schedule order.
const BUILTIN_TITLE: &str = "Med-Track South-West: Project Gantt Chart";
const BUILTIN_SUBTITLE: &str =
    "Pharmaceutical Supply Chain Analysis & Stock-Out Prediction System";
const BUILTIN_AS_OF: &str = "2026-01-22";

const BUILTIN_ACTIVITIES: &[(&str, &str, &str, &str)] = &[
    ("Project Planning & Requirements", "2025-12-01", "2025-12-04", "Completed"),
    ("Synthetic Data Generation", "2025-12-05", "2025-12-14", "Completed"),
    ("Data Validation & Cleaning", "2025-12-15", "2025-12-19", "Completed"),
    ("Exploratory Data Analysis", "2025-12-20", "2025-12-27", "Completed"),
    ("Feature Engineering", "2025-12-28", "2026-01-04", "Completed"),
    ("Model Development (Random Forest)", "2026-01-05", "2026-01-07", "Completed"),
    ("Model Training & Optimization", "2026-01-08", "2026-01-11", "Completed"),
    ("Model Evaluation & Testing", "2026-01-12", "2026-01-14", "Completed"),
    ("Visualization & Reporting", "2026-01-15", "2026-01-17", "Completed"),
    ("Documentation & Final Review", "2026-01-18", "2026-01-19", "Completed"),
    ("Repository Setup & Push", "2026-01-20", "2026-01-21", "Completed"),
    ("Deployment & Monitoring", "2026-01-22", "2026-01-31", "In Progress"),
];

/// A project plan: chart headings, the reporting reference date, and the
/// ordered activity list. Activity order is meaningful and preserved; the
/// plan is constructed once and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPlan {
    pub title: String,
    pub subtitle: Option<String>,
    pub as_of: NaiveDate,
    pub activities: Vec<Activity>,
}

/// Raw shape of a plan file. Dates and statuses arrive as strings and go
/// through the same parsing path as the built-in table, so malformed input
/// fails with the matching error code rather than a serde message.
#[derive(Deserialize)]
struct PlanFile {
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    as_of: String,
    activities: Vec<ActivityRow>,
}

#[derive(Deserialize)]
struct ActivityRow {
    name: String,
    start: String,
    end: String,
    status: String,
}

impl ProjectPlan {
    /// The embedded Med-Track plan. Parsed through the same validation path
    /// as external plan files; a malformed literal fails at startup.
    pub fn builtin() -> Result<Self, GanttError> {
        let activities = BUILTIN_ACTIVITIES
            .iter()
            .map(|&(name, start, end, status)| parse_activity(name, start, end, status))
            .collect::<Result<Vec<_>, _>>()?;
        let plan = Self {
            title: BUILTIN_TITLE.to_string(),
            subtitle: Some(BUILTIN_SUBTITLE.to_string()),
            as_of: parse_date(BUILTIN_AS_OF)?,
            activities,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Load a plan from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, GanttError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|e| GanttError::plan_read(&display, e.to_string()))?;
        let file: PlanFile =
            serde_json::from_str(&raw).map_err(|e| GanttError::plan_read(&display, e.to_string()))?;
        let activities = file
            .activities
            .iter()
            .map(|row| parse_activity(&row.name, &row.start, &row.end, &row.status))
            .collect::<Result<Vec<_>, _>>()?;
        let plan = Self {
            title: file.title,
            subtitle: file.subtitle,
            as_of: parse_date(&file.as_of)?,
            activities,
        };
        plan.validate()?;
        Ok(plan)
    }

    fn validate(&self) -> Result<(), GanttError> {
        if self.activities.is_empty() {
            return Err(GanttError::empty_plan());
        }
        Ok(())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, GanttError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| GanttError::invalid_date(value))
}

fn parse_activity(name: &str, start: &str, end: &str, status: &str) -> Result<Activity, GanttError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let status = ActivityStatus::from_str(status).ok_or_else(|| GanttError::invalid_status(status))?;
    if end < start {
        return Err(GanttError::invalid_range(
            name,
            &start.format("%Y-%m-%d").to_string(),
            &end.format("%Y-%m-%d").to_string(),
        ));
    }
    Ok(Activity {
        name: name.to_string(),
        start,
        end,
        status,
    })
}
