use std::path::Path;

use engine_logging::engine_info;
use story_core::{AnalysisReport, ExtractionOutcome, TextMetrics, DEFAULT_WORDS_PER_MINUTE};

use crate::extract::CharacterExtractor;
use crate::source::{load_story, LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub words_per_minute: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Metrics plus, when an extractor is attached, character extraction.
#[derive(Clone, Default)]
pub struct StoryAnalyzer {
    settings: AnalysisSettings,
    extractor: Option<CharacterExtractor>,
}

impl StoryAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            settings,
            extractor: None,
        }
    }

    pub fn with_extractor(mut self, extractor: CharacterExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn extracts_characters(&self) -> bool {
        self.extractor.is_some()
    }

    pub async fn analyze(&self, source: &str, text: &str) -> AnalysisReport {
        let metrics = TextMetrics::measure(text, self.settings.words_per_minute);
        engine_info!(
            "Analyzing {}: {} words, {} minutes",
            source,
            metrics.word_count,
            metrics.reading_minutes
        );

        let characters = match &self.extractor {
            Some(extractor) => Some(
                extractor
                    .extract_story(text, ExtractionOutcome::default())
                    .await,
            ),
            None => None,
        };

        AnalysisReport {
            source: source.to_string(),
            metrics,
            characters,
        }
    }

    /// Loads `path` and analyzes it; the report is labelled with the path.
    pub async fn analyze_file(&self, path: &Path) -> Result<AnalysisReport, LoadError> {
        let story = load_story(path)?;
        Ok(self
            .analyze(&path.display().to_string(), &story.text)
            .await)
    }
}
