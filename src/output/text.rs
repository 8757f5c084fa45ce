use crate::models::{Activity, ActivityStatus};
use crate::stats::ProjectStats;

const RULE_WIDTH: usize = 100;

pub fn saved_confirmation(path: &str) -> String {
    format!("✓ Gantt chart saved as '{path}'")
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// The delimiter-bordered activity table: one row per activity, input order,
/// dates as YYYY-MM-DD, every column right-aligned to its widest cell.
pub fn activity_table(activities: &[Activity]) -> String {
    let headers = ["Activity", "Start", "End", "Duration", "Status"];
    let rows: Vec<[String; 5]> = activities
        .iter()
        .map(|a| {
            [
                a.name.clone(),
                a.start.format("%Y-%m-%d").to_string(),
                a.end.format("%Y-%m-%d").to_string(),
                a.duration_days().to_string(),
                a.status.as_str().to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = String::new();
    out.push_str(&rule());
    out.push('\n');
    out.push_str("PROJECT ACTIVITY SUMMARY\n");
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format_row(&headers));
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_row(&cells));
        out.push('\n');
    }
    out.pop();
    out
}

/// The delimiter-bordered statistics block.
pub fn stats_block(stats: &ProjectStats) -> String {
    let mut out = String::new();
    out.push_str(&rule());
    out.push('\n');
    out.push_str("PROJECT STATISTICS\n");
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!("Total Activities: {}\n", stats.total_activities));
    out.push_str(&format!("Total Duration: {} days\n", stats.span_days()));
    out.push_str(&format!(
        "Completed Tasks: {} ({:.1}%)\n",
        stats.completed,
        stats.percent(ActivityStatus::Completed)
    ));
    out.push_str(&format!(
        "In Progress Tasks: {} ({:.1}%)\n",
        stats.in_progress,
        stats.percent(ActivityStatus::InProgress)
    ));
    out.push_str(&format!(
        "Pending Tasks: {} ({:.1}%)\n",
        stats.pending,
        stats.percent(ActivityStatus::Pending)
    ));
    out.push_str(&format!(
        "Project Start: {}\n",
        stats.start.format("%Y-%m-%d")
    ));
    out.push_str(&format!(
        "Project End (Planned): {}",
        stats.end.format("%Y-%m-%d")
    ));
    out
}
