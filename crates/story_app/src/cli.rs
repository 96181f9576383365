use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Word counts, reading time and character extraction for story files.
#[derive(Parser, Debug)]
#[command(name = "story_analyzer", version, about)]
pub struct Cli {
    /// RON config file; flags override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a report for one story file
    Analyze(AnalyzeArgs),
    /// Write chapter N of a markdown story to its own file
    Chapter(ChapterArgs),
    /// Write a report for every markdown story in a directory
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the story text file
    pub file_path: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args, Debug)]
pub struct ChapterArgs {
    /// Markdown story with `## N Title` chapter headings
    pub input: PathBuf,
    /// Where to write the chapter
    pub output: PathBuf,
    /// Chapter number
    pub number: u32,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory holding `.md` stories
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
    /// Directory receiving the reports
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args, Debug, Default)]
pub struct ModelArgs {
    /// Ollama model used for character extraction
    #[arg(long = "ollama_model", visible_alias = "ollama-model", value_name = "NAME")]
    pub ollama_model: Option<String>,

    /// Base URL of the Ollama service
    #[arg(long = "ollama-url", value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Give up on a model call after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Approximate words per chunk sent to the model
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub chunk_words: Option<u64>,

    /// Reading speed used for the time estimate
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub words_per_minute: Option<u32>,

    /// Skip character extraction
    #[arg(long)]
    pub no_characters: bool,
}
