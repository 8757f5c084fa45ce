use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub const DEFAULT_OUTPUT: &str = "gantt_chart.png";

#[derive(Parser)]
#[command(
    name = "ganttly",
    version,
    about = "Project timeline (Gantt) chart renderer and reporter",
    after_help = "\
NOTE:
  Without a subcommand, `ganttly` behaves as `ganttly render`: it writes
  gantt_chart.png to the current directory, then prints the activity table
  and project statistics.

PLAN FILE FORMAT (--plan):
  {\"title\":\"...\", \"subtitle\":\"...\", \"as_of\":\"YYYY-MM-DD\",
   \"activities\":[{\"name\":\"...\", \"start\":\"YYYY-MM-DD\",
                  \"end\":\"YYYY-MM-DD\", \"status\":\"Completed\"}]}
  Statuses: Completed | In Progress | Pending. Activity order is preserved
  in the chart and in the table.

EXIT CODES:
  0  Success
  1  Error (invalid plan data, unwritable output, render failure)
  2  Usage error"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Load activities from a JSON plan file instead of the built-in plan
    #[arg(long, global = true, value_name = "FILE")]
    pub plan: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the Gantt chart image, then print the project summary
    Render {
        /// Output image path (PNG, overwritten if it exists)
        #[arg(long, default_value = DEFAULT_OUTPUT, value_name = "PATH")]
        output: PathBuf,

        /// Reference date for the chart overlay (YYYY-MM-DD); defaults to
        /// the plan's own reference date
        #[arg(long, value_name = "DATE")]
        as_of: Option<NaiveDate>,
    },

    /// Print the activity table and statistics without rendering an image
    Summary,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Render {
            output: PathBuf::from(DEFAULT_OUTPUT),
            as_of: None,
        }
    }
}
