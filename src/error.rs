use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidDate,
    InvalidStatus,
    InvalidRange,
    EmptyPlan,
    PlanRead,
    ChartRender,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDate => "INVALID_DATE",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidRange => "INVALID_RANGE",
            Self::EmptyPlan => "EMPTY_PLAN",
            Self::PlanRead => "PLAN_READ",
            Self::ChartRender => "CHART_RENDER",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct GanttError {
    pub code: ErrorCode,
    pub message: String,
}

impl GanttError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_date(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidDate,
            format!("Invalid date '{value}' (expected YYYY-MM-DD)"),
        )
    }

    pub fn invalid_status(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidStatus,
            format!("Unknown status '{value}' (expected Completed, In Progress, or Pending)"),
        )
    }

    pub fn invalid_range(name: &str, start: &str, end: &str) -> Self {
        Self::new(
            ErrorCode::InvalidRange,
            format!("Activity '{name}' ends ({end}) before it starts ({start})"),
        )
    }

    pub fn empty_plan() -> Self {
        Self::new(ErrorCode::EmptyPlan, "Plan contains no activities")
    }

    pub fn plan_read(path: &str, detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::PlanRead,
            format!("Cannot load plan from '{}': {}", path, detail.into()),
        )
    }

    pub fn chart(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ChartRender,
            format!("Chart rendering failed: {}", detail.into()),
        )
    }
}
