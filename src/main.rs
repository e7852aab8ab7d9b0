use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use workoutrs::config::AppConfig;
use workoutrs::dispatch::{sample_packages, UnknownCodePolicy};
use workoutrs::export::{self, Language, OutputFormat};
use workoutrs::import::{self, InputFormat};
use workoutrs::logging;
use workoutrs::{BatchRunner, SensorPackage, WorkoutRsError};

/// workoutrs - Workout statistics from fitness tracker sensor packages
///
/// Computes distance, mean speed and calories burned for running, sports
/// walking and swimming sessions. Without a subcommand the built-in
/// reference batch is processed.
#[derive(Parser)]
#[command(name = "workoutrs")]
#[command(version)]
#[command(about = "Workout statistics from sensor packages", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of diagnostics on stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Report format (text, json, csv)
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Summary language (en, ru)
    #[arg(long, value_name = "LANG", global = true)]
    language: Option<Language>,

    /// Reject unknown workout codes
    #[arg(long, global = true, conflicts_with = "fallback_walking")]
    strict: bool,

    /// Treat unknown workout codes as sports walking
    #[arg(long, global = true)]
    fallback_walking: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the built-in reference batch
    Sample,

    /// Compute statistics for a single sensor package
    Calc {
        /// Workout code (RUN, WLK, SWM)
        #[arg(short = 't', long = "type", value_name = "CODE")]
        code: String,

        /// Comma-separated sensor values in workout order
        #[arg(short, long, required = true, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
        data: Vec<f64>,
    },

    /// Process a batch of sensor packages from a file
    Batch {
        /// Input file path (CSV or JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Input format (auto-detect from extension if not specified)
        #[arg(short, long)]
        input_format: Option<InputFormat>,

        /// Stop at the first package that fails
        #[arg(long)]
        fail_fast: bool,
    },

    /// Show or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            match e.downcast_ref::<WorkoutRsError>() {
                Some(err) => eprintln!("{} {}", "error:".red().bold(), err.user_message()),
                None => eprintln!("{} {:#}", "error:".red().bold(), e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    // The file `config --init` writes may be the one about to be loaded
    if let Some(Commands::Config {
        init: true, force, ..
    }) = &cli.command
    {
        let path = cli.config.clone().unwrap_or_else(AppConfig::default_config_path);
        AppConfig::write_default(&path, *force)?;
        eprintln!("{} {}", "✓ Wrote default configuration to".green(), path.display());
    }

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(language) = cli.language {
        config.output.language = language;
    }
    if cli.strict {
        config.dispatch.unknown_code_policy = UnknownCodePolicy::Strict;
    } else if cli.fallback_walking {
        config.dispatch.unknown_code_policy = UnknownCodePolicy::FallbackWalking;
    }
    config.logging.level = config.logging.level.raised_by(cli.verbose);

    logging::init_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Sample) {
        Commands::Sample => process(&config, &sample_packages(), cli.output.as_deref()),

        Commands::Calc { code, data } => {
            let package = SensorPackage::new(code, data);
            process(&config, &[package], cli.output.as_deref())
        }

        Commands::Batch {
            file,
            input_format,
            fail_fast,
        } => {
            let packages = import::read_packages(&file, input_format).map_err(WorkoutRsError::from)?;
            config.dispatch.fail_fast |= fail_fast;
            process(&config, &packages, cli.output.as_deref())
        }

        Commands::Config { show, init, .. } => {
            if show || !init {
                print!("{}", config.to_toml()?);
            }
            Ok(true)
        }
    }
}

fn process(config: &AppConfig, packages: &[SensorPackage], output: Option<&Path>) -> Result<bool> {
    let runner = BatchRunner::new(config.dispatch.unknown_code_policy)
        .with_fail_fast(config.dispatch.fail_fast);
    let report = runner.run(packages);

    let format = config.output.format;
    let language = config.output.language;
    match output {
        Some(path) => {
            export::export_report(&report, format, language, path)?;
            eprintln!("{} {}", "✓ Report written to".green(), path.display());
        }
        None => export::write_report(&report, format, language, io::stdout().lock())?,
    }

    for (index, code, error) in report.errors() {
        let error = WorkoutRsError::from(error.clone());
        eprintln!(
            "{} package {} ({}): {}",
            "✗".red(),
            index + 1,
            code,
            error.user_message()
        );
    }
    if report.stopped_early {
        eprintln!(
            "{}",
            format!(
                "Stopped after the first failure; {} of {} packages processed",
                report.outcomes.len(),
                packages.len()
            )
            .yellow()
        );
    }

    Ok(report.is_success())
}
