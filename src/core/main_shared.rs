use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, error};

use crate::Inputs;
use crate::core::cli::{Args, Commands, PrintArgs};
use crate::core::cmds;
use crate::core::cmds::print::PrintCommand;
use crate::core::logging::init_logging;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
        original: args.original.clone(),
        amplified: args.amplified.clone(),
        selection: args.selection.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides)?;

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Current working directory: {}", env::current_dir()?.display());

    let inputs = Inputs::from_config(config());
    let result = dispatch(args.command, &inputs);

    if let Err(e) = &result {
        error!("{e}");
        std::process::exit(1);
    }
    result
}

fn dispatch(command: Commands, inputs: &Inputs) -> AppResult<()> {
    match command {
        Commands::Init => cmds::execute_init(),
        Commands::Report(report_args) => {
            let projects = config().resolve_projects(&report_args.projects);
            let mut stdout = io::stdout().lock();
            cmds::execute_report(
                &inputs.aggregator(),
                &projects,
                &report_args.format,
                &mut stdout,
            )?;
            stdout.flush()?;
            Ok(())
        }
        Commands::Scores(scores_args) => {
            let projects = config().resolve_projects(&scores_args.projects);
            let mut stdout = io::stdout().lock();
            cmds::execute_scores(
                &inputs.aggregator(),
                &projects,
                &scores_args.format,
                &mut stdout,
            )?;
            stdout.flush()?;
            Ok(())
        }
        Commands::Print {
            command: print_args,
        } => match print_args {
            PrintArgs::Config(args) => {
                cmds::execute_print(PrintCommand::Config(args.format), inputs)
            }
            PrintArgs::Classes(args) => {
                cmds::execute_print(PrintCommand::Classes(args.project), inputs)
            }
        },
    }
}
