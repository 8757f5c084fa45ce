use clap::Parser;
use std::process;

use ganttly::cli;
use ganttly::cli::commands::{Cli, Commands};

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;
    let plan_flag = cli_args.plan.clone();

    let exit_code = match cli_args.command.unwrap_or_default() {
        Commands::Render { output, as_of } => {
            cli::render::run(&output, as_of, json_output, plan_flag.as_deref())
        }
        Commands::Summary => cli::summary::run(json_output, plan_flag.as_deref()),
    };

    process::exit(exit_code);
}
