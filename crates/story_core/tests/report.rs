use pretty_assertions::assert_eq;
use story_core::{AnalysisReport, CharacterTally, ExtractionOutcome, TextMetrics};

fn metrics() -> TextMetrics {
    TextMetrics {
        word_count: 6,
        reading_minutes: 1,
    }
}

#[test]
fn report_without_characters_has_three_lines() {
    let report = AnalysisReport {
        source: "story.md".to_string(),
        metrics: metrics(),
        characters: None,
    };
    assert_eq!(
        report.to_string(),
        "--- Analysis Report for story.md ---\nWord Count: 6\nEstimated Reading Time: 1 minutes\n"
    );
}

#[test]
fn report_lists_characters_in_tally_order() {
    let tally: CharacterTally = [("Bob", 2), ("Alice", 1)].into_iter().collect();
    let report = AnalysisReport {
        source: "story.md".to_string(),
        metrics: metrics(),
        characters: Some(ExtractionOutcome {
            tally,
            chunks: 1,
            failed_chunks: 0,
        }),
    };
    assert_eq!(
        report.to_string(),
        "--- Analysis Report for story.md ---\n\
Word Count: 6\n\
Estimated Reading Time: 1 minutes\n\
Characters:\n  Bob: 2\n  Alice: 1\n"
    );
}

#[test]
fn empty_tally_and_failures_are_reported() {
    let report = AnalysisReport {
        source: "story.md".to_string(),
        metrics: metrics(),
        characters: Some(ExtractionOutcome {
            tally: CharacterTally::new(),
            chunks: 3,
            failed_chunks: 2,
        }),
    };
    let text = report.to_string();
    assert!(text.contains("Characters:\n  (none found)\n"));
    assert!(text.ends_with("Note: 2 of 3 chunks could not be analyzed\n"));
}
