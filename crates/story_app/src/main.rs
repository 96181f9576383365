//! `story_analyzer`: command-line front end for the story engine.
//!
//! ```bash
//! story_analyzer analyze data/raw_stories/story.md --ollama_model llama3
//! story_analyzer chapter book.md chapter_1.md 1
//! story_analyzer batch --input-dir data/raw_stories
//! ```

mod cli;
mod commands;
mod config;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use config::AppConfig;
use logging::LogDestination;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(
        engine_logging::level_for(cli.verbose),
        LogDestination::from_log_file(cli.log_file.as_deref()),
    );

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Analyze(args) => {
            config.apply(&args.model);
            commands::analyze(&config, &args.file_path).await
        }
        Command::Chapter(args) => commands::chapter(&args.input, &args.output, args.number),
        Command::Batch(args) => {
            config.apply(&args.model);
            if let Some(dir) = args.input_dir {
                config.input_dir = dir;
            }
            if let Some(dir) = args.output_dir {
                config.output_dir = dir;
            }
            commands::batch(&config).await
        }
    }
}
