use std::path::Path;

use crate::cli::render::load_plan;
use crate::error::GanttError;
use crate::output;
use crate::stats::ProjectStats;

pub fn run(json_output: bool, plan_flag: Option<&Path>) -> i32 {
    match run_inner(json_output, plan_flag) {
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

fn run_inner(json_output: bool, plan_flag: Option<&Path>) -> Result<i32, GanttError> {
    let plan = load_plan(plan_flag)?;
    let stats = ProjectStats::compute(&plan.activities)?;

    if json_output {
        let data = output::json::summary_json(&plan, &stats);
        println!("{}", serde_json::to_string_pretty(&output::json::success(data)).unwrap());
    } else {
        println!("{}", output::text::activity_table(&plan.activities));
        println!();
        println!("{}", output::text::stats_block(&stats));
    }
    Ok(0)
}
