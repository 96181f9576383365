//! Run configuration: built-in defaults, then an optional RON file, then
//! command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use story_core::{DEFAULT_CHUNK_WORDS, DEFAULT_WORDS_PER_MINUTE};
use story_engine::{
    AnalysisSettings, GenerateSettings, DEFAULT_INPUT_DIR, DEFAULT_MODEL, DEFAULT_OLLAMA_URL,
    DEFAULT_OUTPUT_DIR,
};

use crate::cli::ModelArgs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ollama_url: String,
    pub ollama_model: String,
    pub request_timeout_secs: Option<u64>,
    pub extract_characters: bool,
    pub chunk_words: u64,
    pub words_per_minute: u32,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: None,
            extract_characters: true,
            chunk_words: DEFAULT_CHUNK_WORDS,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl AppConfig {
    /// Loads `path` when given; otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_ron(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_ron(content: &str) -> Result<Self> {
        let config: AppConfig = ron::from_str(content)?;
        anyhow::ensure!(config.words_per_minute > 0, "words_per_minute must be positive");
        anyhow::ensure!(config.chunk_words > 0, "chunk_words must be positive");
        anyhow::ensure!(
            config.request_timeout_secs != Some(0),
            "request_timeout_secs must be positive"
        );
        Ok(config)
    }

    pub fn apply(&mut self, args: &ModelArgs) {
        if let Some(model) = &args.ollama_model {
            self.ollama_model = model.clone();
        }
        if let Some(url) = &args.ollama_url {
            self.ollama_url = url.clone();
        }
        if let Some(secs) = args.timeout_secs {
            self.request_timeout_secs = Some(secs);
        }
        if let Some(words) = args.chunk_words {
            self.chunk_words = words;
        }
        if let Some(rate) = args.words_per_minute {
            self.words_per_minute = rate;
        }
        if args.no_characters {
            self.extract_characters = false;
        }
    }

    pub fn generate_settings(&self) -> GenerateSettings {
        GenerateSettings {
            base_url: self.ollama_url.clone(),
            model: self.ollama_model.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..GenerateSettings::default()
        }
    }

    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            words_per_minute: self.words_per_minute,
        }
    }
}
