use serde_json::{json, Value};

use crate::error::GanttError;
use crate::models::{Activity, ActivityStatus, ProjectPlan};
use crate::stats::ProjectStats;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &GanttError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn activity_json(a: &Activity) -> Value {
    json!({
        "name": a.name,
        "start": a.start.format("%Y-%m-%d").to_string(),
        "end": a.end.format("%Y-%m-%d").to_string(),
        "duration_days": a.duration_days(),
        "status": a.status.as_str()
    })
}

pub fn stats_json(stats: &ProjectStats) -> Value {
    json!({
        "total_activities": stats.total_activities,
        "span_days": stats.span_days(),
        "completed": { "count": stats.completed, "percent": stats.percent(ActivityStatus::Completed) },
        "in_progress": { "count": stats.in_progress, "percent": stats.percent(ActivityStatus::InProgress) },
        "pending": { "count": stats.pending, "percent": stats.percent(ActivityStatus::Pending) },
        "start": stats.start.format("%Y-%m-%d").to_string(),
        "end": stats.end.format("%Y-%m-%d").to_string()
    })
}

pub fn summary_json(plan: &ProjectPlan, stats: &ProjectStats) -> Value {
    let activities: Vec<Value> = plan.activities.iter().map(activity_json).collect();
    json!({
        "title": plan.title,
        "as_of": plan.as_of.format("%Y-%m-%d").to_string(),
        "activities": activities,
        "stats": stats_json(stats)
    })
}
