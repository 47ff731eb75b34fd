// SPDX-License-Identifier: Apache-2.0 OR MIT
use anyhow::{Context, Result};
use catlog::logging::{set_backend, LogLevel, Logger, OutputFormat, DEFAULT_CATEGORY};
use catlog::{log_debug, LoggingConfig};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON5 logging configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Category to log under
    #[arg(long, short, global = true, default_value = DEFAULT_CATEGORY)]
    category: String,

    /// Level of the logged output
    #[arg(long, short, global = true, default_value = "info")]
    level: LogLevel,

    /// Override the configured default threshold
    #[arg(long, global = true)]
    threshold: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug, PartialEq)]
enum Command {
    /// Log a message (words are joined with spaces)
    Log {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Write text verbatim, followed by a newline
    Print { text: String },
    /// Hex-dump a file, or stdin when the path is "-"
    Dump { path: PathBuf },
    /// Show which levels are enabled for the category
    Check,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LoggingConfig::load_from_file(path)?,
        None => LoggingConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.level = threshold;
    }
    set_backend(Arc::new(config.build_backend()?));

    let internal = Logger::new("catlog");
    if let Some(path) = &args.config {
        log_debug!(internal, "loaded configuration from {}", path.display());
    }

    let log = Logger::new(&args.category);
    match args.command {
        Command::Log { message } => {
            log.log_at(args.level, format_args!("{}", message.join(" ")));
        }
        Command::Print { text } => {
            log.print_at(args.level, &format!("{}\n", text));
        }
        Command::Dump { path } => {
            let data = read_input(&path)?;
            log_debug!(internal, "dumping {} bytes", data.len());
            log.dump_at(args.level, &data);
            // JSON records are already one per line
            if config.format == OutputFormat::Text {
                log.print_at(args.level, "\n");
            }
        }
        Command::Check => {
            for level in [
                LogLevel::Trace,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error,
                LogLevel::Panic,
            ] {
                let state = if log.is_level_enabled(level) {
                    "enabled"
                } else {
                    "disabled"
                };
                println!("{:<5} {}", level, state);
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .context("failed to read stdin")?;
        Ok(data)
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}
