use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "refscore",
    version,
    about = "Score text completion progress against reference documents"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate file against one reference file
    Score(ScoreCommand),
    /// Score a candidate for a task and record the result in the store
    Check(CheckCommand),
    /// Score every submission in a directory against one reference
    Batch(BatchCommand),
    /// Write a default refscore.toml into a project root
    Init(InitCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyArg {
    Alignment,
    Overlap,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Text,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Candidate text file
    pub candidate: PathBuf,
    /// Reference text file
    pub reference: PathBuf,
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Project root containing refscore.toml and the reference directory
    pub path: PathBuf,
    /// Candidate text file
    pub candidate: PathBuf,
    /// Task identifier; the reference is looked up as <reference_dir>/<task>.md
    #[arg(short, long)]
    pub task: String,
    /// User the submission belongs to
    #[arg(short, long, default_value = "anonymous")]
    pub user: String,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    /// Directory of candidate submissions (.txt and .md files)
    pub dir: PathBuf,
    /// Reference text file
    pub reference: PathBuf,
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    /// Overwrite an existing refscore.toml
    #[arg(long)]
    pub force: bool,
}
