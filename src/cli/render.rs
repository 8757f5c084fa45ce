use std::path::Path;

use chrono::NaiveDate;
use serde_json::json;

use crate::chart;
use crate::error::GanttError;
use crate::models::ProjectPlan;
use crate::output;
use crate::stats::ProjectStats;

pub fn run(
    output: &Path,
    as_of: Option<NaiveDate>,
    json_output: bool,
    plan_flag: Option<&Path>,
) -> i32 {
    match run_inner(output, as_of, json_output, plan_flag) {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&output::json::error(&e)).unwrap());
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

fn run_inner(
    output: &Path,
    as_of: Option<NaiveDate>,
    json_output: bool,
    plan_flag: Option<&Path>,
) -> Result<i32, GanttError> {
    let mut plan = load_plan(plan_flag)?;
    if let Some(date) = as_of {
        plan.as_of = date;
    }
    let stats = ProjectStats::compute(&plan.activities)?;

    // Image first: an unwritable output path aborts before any summary text.
    chart::render(&plan, &stats, output)?;

    let path_display = output.display().to_string();
    if json_output {
        let mut data = output::json::summary_json(&plan, &stats);
        data["chart"] = json!(path_display);
        println!("{}", serde_json::to_string_pretty(&output::json::success(data)).unwrap());
    } else {
        println!("{}", output::text::saved_confirmation(&path_display));
        println!();
        println!("{}", output::text::activity_table(&plan.activities));
        println!();
        println!("{}", output::text::stats_block(&stats));
    }
    Ok(0)
}

/// The injectable data source: a plan file when `--plan` is given,
/// otherwise the embedded plan.
pub(crate) fn load_plan(plan_flag: Option<&Path>) -> Result<ProjectPlan, GanttError> {
    match plan_flag {
        Some(path) => ProjectPlan::from_file(path),
        None => ProjectPlan::builtin(),
    }
}
