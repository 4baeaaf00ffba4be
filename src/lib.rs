//! vclip - cut intervals out of a video and merge them into one file.
//!
//! All decoding, encoding, and muxing is delegated to an external ffmpeg
//! binary; this crate parses interval tokens, sequences the extraction and
//! merge invocations, and cleans up after itself.

#![warn(missing_docs)]

pub mod cli;
pub mod clipper;
pub mod config;
pub mod constants;
pub mod error;
pub mod interval;

use clap::{CommandFactory, Parser};
use cli::{Cli, ClipArgs, Command};
use clipper::{Ffmpeg, Orchestrator, derive_output_path};
use config::{Config, config_file_path, load_default_config, save_default_config};
use interval::{Interval, parse_intervals, read_interval_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use error::{Error, Result};

/// Main entry point for the vclip CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.clip.verbose, cli.clip.quiet);

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let Some(input) = cli.input else {
        // Bare `vclip` gets help; clip options without an input are an error.
        if cli.clip.intervals.is_empty() && cli.clip.interval_file.is_none() {
            Cli::command().print_help()?;
            return Ok(());
        }
        return Err(Error::NoInput);
    };

    clip_video(&input, &cli.clip)
}

/// Run one clip-and-merge pass over `input`.
fn clip_video(input: &Path, args: &ClipArgs) -> Result<()> {
    let intervals = resolve_intervals(args)?;

    let rendered: Vec<String> = intervals.iter().map(ToString::to_string).collect();
    println!("Intervals to clip [{}]", rendered.join(", "));

    // Everything that can be validated locally fails before any subprocess
    // is launched.
    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let config = load_default_config()?;

    let output_dir = resolve_output_dir(args, &config);
    std::fs::create_dir_all(&output_dir)?;
    let output_path = derive_output_path(input, &output_dir);
    debug!("output path: {}", output_path.display());

    let explicit_ffmpeg = args.ffmpeg.clone().or(config.ffmpeg_path);
    let ffmpeg = Ffmpeg::locate(explicit_ffmpeg.as_deref())?;
    info!("using ffmpeg binary: {}", ffmpeg.binary().display());

    let orchestrator = Orchestrator::new(ffmpeg, output_path);
    orchestrator.run(input, &intervals)?;

    Ok(())
}

/// Collect interval tokens from `-i` or `-f` and parse them in order.
fn resolve_intervals(args: &ClipArgs) -> Result<Vec<Interval>> {
    let tokens = match &args.interval_file {
        Some(path) => read_interval_file(path)?,
        None => args.intervals.clone(),
    };
    parse_intervals(&tokens)
}

/// Output directory precedence: CLI flag, config file, current directory.
fn resolve_output_dir(args: &ClipArgs, config: &Config) -> PathBuf {
    args.output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nSupported keys: ffmpeg_path, output_dir");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
