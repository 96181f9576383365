use std::fmt;

use crate::metrics::TextMetrics;
use crate::tally::CharacterTally;

/// Outcome of character extraction over every chunk of one story.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionOutcome {
    pub tally: CharacterTally,
    pub chunks: usize,
    /// Chunks whose reply could not be used and so contributed nothing.
    pub failed_chunks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub source: String,
    pub metrics: TextMetrics,
    /// `None` when character extraction was not requested.
    pub characters: Option<ExtractionOutcome>,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Analysis Report for {} ---", self.source)?;
        writeln!(f, "Word Count: {}", self.metrics.word_count)?;
        writeln!(
            f,
            "Estimated Reading Time: {} minutes",
            self.metrics.reading_minutes
        )?;

        let Some(outcome) = &self.characters else {
            return Ok(());
        };
        writeln!(f, "Characters:")?;
        if outcome.tally.is_empty() {
            writeln!(f, "  (none found)")?;
        }
        for (name, count) in outcome.tally.iter() {
            writeln!(f, "  {name}: {count}")?;
        }
        if outcome.failed_chunks > 0 {
            writeln!(
                f,
                "Note: {} of {} chunks could not be analyzed",
                outcome.failed_chunks, outcome.chunks
            )?;
        }
        Ok(())
    }
}
