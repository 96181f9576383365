//! Batch analysis of every markdown story in a directory.
//!
//! Each story gets its own `analysis_report_{stem}.txt`; a `manifest.json`
//! lists what succeeded and what failed. One broken file never stops the
//! rest of the batch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::{engine_info, engine_warn};
use serde::Serialize;

use crate::analyze::StoryAnalyzer;
use crate::persist::{ensure_output_dir, AtomicFileWriter, PersistError};

pub const DEFAULT_INPUT_DIR: &str = "data/raw_stories";
pub const DEFAULT_OUTPUT_DIR: &str = "output/example_analysis_results";
pub const MANIFEST_FILENAME: &str = "manifest.json";
const STORY_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("cannot read input directory {}: {source}", .path.display())]
    InputDir { path: PathBuf, source: io::Error },
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub generated_utc: String,
    pub entries: Vec<BatchEntry>,
    #[serde(skip)]
    pub manifest_path: PathBuf,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }
}

/// File name of the report written for `story_path`.
pub fn report_filename(story_path: &Path) -> String {
    let stem = story_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string());
    format!("analysis_report_{stem}.txt")
}

/// Markdown files directly inside `input_dir`, sorted by name.
pub fn find_stories(input_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(input_dir).map_err(|source| BatchError::InputDir {
        path: input_dir.to_path_buf(),
        source,
    })?;
    let mut stories: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(STORY_EXTENSION))
        .collect();
    stories.sort();
    Ok(stories)
}

pub async fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    analyzer: &StoryAnalyzer,
    generated_utc: &str,
) -> Result<BatchSummary, BatchError> {
    ensure_output_dir(output_dir)?;
    let stories = find_stories(input_dir)?;
    if stories.is_empty() {
        engine_warn!("No story files found in {:?}", input_dir);
    }

    let writer = AtomicFileWriter::new(output_dir);
    let mut entries = Vec::with_capacity(stories.len());
    for story in &stories {
        entries.push(analyze_one(story, &writer, analyzer).await);
    }

    let mut summary = BatchSummary {
        generated_utc: generated_utc.to_string(),
        entries,
        manifest_path: PathBuf::new(),
    };
    summary.manifest_path = writer.write_json(MANIFEST_FILENAME, &summary)?;
    engine_info!(
        "Batch complete: {} succeeded, {} failed, reports in {:?}",
        summary.succeeded(),
        summary.failed(),
        output_dir
    );
    Ok(summary)
}

async fn analyze_one(story: &Path, writer: &AtomicFileWriter, analyzer: &StoryAnalyzer) -> BatchEntry {
    let input = story
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    engine_info!("Analyzing {:?}", story);

    let failed = |error: String| {
        engine_warn!("Analysis failed for {:?}: {}", story, error);
        BatchEntry {
            input: input.clone(),
            report: None,
            word_count: None,
            error: Some(error),
        }
    };

    let report = match analyzer.analyze_file(story).await {
        Ok(report) => report,
        Err(err) => return failed(err.to_string()),
    };
    let filename = report_filename(story);
    match writer.write(&filename, &report.to_string()) {
        Ok(_) => BatchEntry {
            input: input.clone(),
            report: Some(filename),
            word_count: Some(report.metrics.word_count),
            error: None,
        },
        Err(err) => failed(err.to_string()),
    }
}
