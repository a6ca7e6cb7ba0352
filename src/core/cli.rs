use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    /// Directory holding `<project>/<class>_mutations.csv` PIT reports.
    /// Replaces config [paths].original if provided.
    #[arg(long, global = true)]
    pub original: Option<String>,

    /// Directory holding `<project>/<class>_mutants_killed.json` amplification reports.
    /// Replaces config [paths].amplified if provided.
    #[arg(long, global = true)]
    pub amplified: Option<String>,

    /// Selected classes file (`project;top1;top2;worst1;worst2[;extra]` rows).
    /// Replaces config [paths].selection if provided.
    #[arg(long, global = true)]
    pub selection: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example config file in the current directory
    Init,

    /// Print the mutation score table split by PMS
    Report(ReportArgs),

    /// List the PMS and bucket of every selected class
    Scores(ScoresArgs),

    /// Print configuration or input information
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Projects to report on, in order.
    /// If omitted, the configured (or built-in) project list is used.
    #[arg(value_name = "PROJECT")]
    pub projects: Vec<String>,

    /// Output format: "latex" (default) or "json"
    #[arg(long, default_value = "latex")]
    pub format: String,
}

/// Arguments for the scores command
#[derive(Parser, Debug)]
pub struct ScoresArgs {
    /// Projects to score, in order.
    /// If omitted, the configured (or built-in) project list is used.
    #[arg(value_name = "PROJECT")]
    pub projects: Vec<String>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// Print the effective configuration
    Config(PrintConfigArgs),

    /// List test classes with a mutation report in a project
    Classes(PrintClassesArgs),
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print classes subcommand
#[derive(Parser, Debug)]
pub struct PrintClassesArgs {
    /// Project whose classes should be listed
    #[arg(long)]
    pub project: String,
}
