mod batch;
mod cli;
mod config;
mod error;
mod init;
mod normalize;
mod report;
mod scoring;
mod store;
mod types;

use crate::error::{Result, ScoreError};
use crate::scoring::{ScoringSettings, Strategy};
use crate::store::{ProgressRecord, ProgressStore};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const NO_REFERENCE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ScoreError::PathNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Text => report::OutputFormat::Text,
    }
}

fn apply_strategy_override(settings: &mut ScoringSettings, strategy: &Option<cli::StrategyArg>) {
    if let Some(strategy) = strategy {
        settings.strategy = match strategy {
            cli::StrategyArg::Alignment => Strategy::Alignment,
            cli::StrategyArg::Overlap => Strategy::Overlap,
        };
    }
}

/// Reference lookup for a task: `<reference_dir>/<task>.md`, falling back
/// to `.txt`.
fn resolve_reference(root: &Path, reference_dir: &str, task: &str) -> Option<PathBuf> {
    for extension in ["md", "txt"] {
        let path = root.join(reference_dir).join(format!("{task}.{extension}"));
        if path.exists() {
            return Some(path);
        }
    }
    None
}

fn completion_exit_code(is_completed: bool) -> i32 {
    if is_completed {
        exit_code::SUCCESS
    } else {
        exit_code::INCOMPLETE
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let candidate_text = read_text_file(&cmd.candidate)?;
            let reference_text = read_text_file(&cmd.reference)?;
            if normalize::normalize(&reference_text).is_empty() {
                eprintln!("no reference text available: {}", cmd.reference.display());
                return Ok(exit_code::NO_REFERENCE);
            }

            let mut settings = ScoringSettings::default();
            apply_strategy_override(&mut settings, &cmd.strategy);

            let progress = scoring::evaluate(&candidate_text, &reference_text, &settings);
            let rendered = report::render_progress(&progress, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(completion_exit_code(progress.is_completed))
        }
        cli::Commands::Check(cmd) => {
            if !cmd.path.exists() {
                return Err(ScoreError::PathNotFound(cmd.path.display().to_string()));
            }

            let loaded = config::load_config(&cmd.path)?;
            if loaded.is_none() {
                eprintln!("warning: no refscore.toml found in {}", cmd.path.display());
            }
            let settings = loaded
                .as_ref()
                .map(|cfg| cfg.settings())
                .unwrap_or_default();
            let reference_dir = loaded
                .as_ref()
                .map(|cfg| cfg.project.reference_dir.clone())
                .unwrap_or_else(|| "references".to_string());

            let Some(reference_path) = resolve_reference(&cmd.path, &reference_dir, &cmd.task)
            else {
                eprintln!("no reference text available for task: {}", cmd.task);
                return Ok(exit_code::NO_REFERENCE);
            };
            let reference_text = read_text_file(&reference_path)?;
            if normalize::normalize(&reference_text).is_empty() {
                eprintln!("no reference text available for task: {}", cmd.task);
                return Ok(exit_code::NO_REFERENCE);
            }

            let candidate_text = read_text_file(&cmd.candidate)?;
            let mut progress_store = store::JsonFileStore::open(&cmd.path)?;

            // The scorer is deterministic; an unchanged submission keeps
            // its stored result.
            let digest = store::sha256_hex(candidate_text.as_bytes());
            if let Some(existing) = progress_store.get(&cmd.task, &cmd.user) {
                if existing.digest == digest {
                    info!(task = %cmd.task, user = %cmd.user, "submission unchanged");
                    println!(
                        "unchanged submission; stored progress: {}%{}",
                        existing.progress_percentage,
                        if existing.is_completed {
                            " [completed]"
                        } else {
                            ""
                        }
                    );
                    return Ok(completion_exit_code(existing.is_completed));
                }
            }

            let progress = scoring::evaluate(&candidate_text, &reference_text, &settings);
            let record =
                ProgressRecord::from_report(&cmd.task, &cmd.user, &candidate_text, &progress);
            progress_store.upsert(record)?;

            let rendered = report::render_progress(&progress, output_format(&cmd.format))?;
            println!("{rendered}");
            println!("progress recorded: {}", progress_store.path().display());
            Ok(completion_exit_code(progress.is_completed))
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.exists() {
                return Err(ScoreError::PathNotFound(cmd.dir.display().to_string()));
            }
            let reference_text = read_text_file(&cmd.reference)?;
            if normalize::normalize(&reference_text).is_empty() {
                eprintln!("no reference text available: {}", cmd.reference.display());
                return Ok(exit_code::NO_REFERENCE);
            }

            let mut settings = ScoringSettings::default();
            apply_strategy_override(&mut settings, &cmd.strategy);

            let candidates = batch::collect_candidates(&cmd.dir);
            if candidates.is_empty() {
                println!("batch: no candidate files in {}", cmd.dir.display());
                return Ok(exit_code::SUCCESS);
            }

            let reference_words =
                normalize::tokenize(&normalize::normalize(&reference_text)).len();
            let mut batch_report = types::report::BatchReport::new(
                reference_words.min(settings.max_words),
                settings.strategy,
            );
            for candidate_path in candidates {
                let candidate_text = read_text_file(&candidate_path)?;
                let progress = scoring::evaluate(&candidate_text, &reference_text, &settings);
                let name = candidate_path
                    .strip_prefix(&cmd.dir)
                    .unwrap_or(candidate_path.as_path())
                    .to_string_lossy()
                    .to_string();
                batch_report.push(name, &progress);
            }

            let rendered = report::render_batch(&batch_report, output_format(&cmd.format))?;
            println!("{rendered}");

            let all_completed = batch_report.completed_count() == batch_report.entries.len();
            Ok(completion_exit_code(all_completed))
        }
        cli::Commands::Init(cmd) => {
            if !cmd.path.exists() {
                return Err(ScoreError::PathNotFound(cmd.path.display().to_string()));
            }
            let config_path = init::init_project(&cmd.path, cmd.force)?;
            println!("initialized: {}", config_path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
