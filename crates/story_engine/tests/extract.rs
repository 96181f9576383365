mod common;

use common::{init_logging, network_error, ScriptedGenerator};
use pretty_assertions::assert_eq;
use story_core::{chunk_text, CharacterTally, ExtractionOutcome, ParsedResponse};
use story_engine::CharacterExtractor;

fn tally(pairs: &[(&str, u64)]) -> CharacterTally {
    pairs.iter().map(|&(n, c)| (n, c)).collect()
}

#[tokio::test]
async fn single_chunk_story_uses_model_reply() {
    init_logging();
    let generator = ScriptedGenerator::new([r#"{"Alice":1,"Bob":1}"#]);
    let extractor = CharacterExtractor::with_chunk_words(generator.clone(), 100);

    let outcome = extractor
        .extract_story("Alice went home. Bob followed her.", ExtractionOutcome::default())
        .await;

    assert_eq!(outcome.tally, tally(&[("Alice", 1), ("Bob", 1)]));
    assert_eq!(outcome.chunks, 1);
    assert_eq!(outcome.failed_chunks, 0);

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Alice went home. Bob followed her."));
}

#[tokio::test]
async fn counts_are_summed_across_chunks_in_order() {
    init_logging();
    let generator = ScriptedGenerator::new([
        r#"{"Athos": 2, "Porthos": 1}"#,
        "Here you go: {\"Aramis\": 1, \"Athos\": 3}",
        r#"{"Porthos": 4}"#,
    ]);
    let extractor = CharacterExtractor::with_chunk_words(generator.clone(), 3);
    let text = "Athos met Porthos. Athos spoke to Aramis. Porthos laughed loudly.";

    let outcome = extractor
        .extract_story(text, ExtractionOutcome::default())
        .await;

    assert_eq!(outcome.chunks, 3);
    assert_eq!(
        outcome.tally,
        tally(&[("Athos", 5), ("Porthos", 5), ("Aramis", 1)])
    );
    let names: Vec<_> = outcome.tally.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Athos", "Porthos", "Aramis"]);

    let prompts = generator.prompts();
    let expected: Vec<_> = chunk_text(text, 3).map(|c| c.text).collect();
    assert_eq!(prompts.len(), expected.len());
    for (prompt, chunk) in prompts.iter().zip(expected) {
        assert!(prompt.contains(chunk));
    }
}

#[tokio::test]
async fn failing_chunks_degrade_to_empty_and_processing_continues() {
    init_logging();
    let generator = ScriptedGenerator::with_results(vec![
        Err(network_error()),
        Ok("I cannot help with that.".to_string()),
        Ok(r#"{"Carol": 2}"#.to_string()),
    ]);
    let extractor = CharacterExtractor::with_chunk_words(generator.clone(), 2);

    let outcome = extractor
        .extract_story("Alice ran. Bob hid. Carol sang.", ExtractionOutcome::default())
        .await;

    assert_eq!(outcome.tally, tally(&[("Carol", 2)]));
    assert_eq!(outcome.chunks, 3);
    assert_eq!(outcome.failed_chunks, 2);
    assert_eq!(generator.prompts().len(), 3);
}

#[tokio::test]
async fn sentinel_reply_is_not_a_failure() {
    init_logging();
    let generator = ScriptedGenerator::new([story_core::NO_CHARACTERS_SENTINEL]);
    let extractor = CharacterExtractor::new(generator);

    let outcome = extractor
        .extract_story("The wind blew over the hills.", ExtractionOutcome::default())
        .await;

    assert!(outcome.tally.is_empty());
    assert_eq!(outcome.chunks, 1);
    assert_eq!(outcome.failed_chunks, 0);
}

#[tokio::test]
async fn error_object_reply_counts_as_failed_chunk() {
    init_logging();
    let generator = ScriptedGenerator::new([
        r#"{"error": "model overloaded"}"#,
        r#"{"Bob": 1}"#,
    ]);
    let extractor = CharacterExtractor::with_chunk_words(generator, 2);

    let outcome = extractor
        .extract_story("Alice ran. Bob hid.", ExtractionOutcome::default())
        .await;

    assert_eq!(outcome.tally, tally(&[("Bob", 1)]));
    assert_eq!(outcome.chunks, 2);
    assert_eq!(outcome.failed_chunks, 1);
}

#[tokio::test]
async fn empty_story_never_calls_the_model() {
    init_logging();
    let generator = ScriptedGenerator::new(Vec::<String>::new());
    let extractor = CharacterExtractor::new(generator.clone());

    let outcome = extractor
        .extract_story("   ", ExtractionOutcome::default())
        .await;

    assert_eq!(outcome, ExtractionOutcome::default());
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn accumulator_is_threaded_through() {
    init_logging();
    let generator = ScriptedGenerator::new([r#"{"Bob": 2}"#]);
    let extractor = CharacterExtractor::new(generator);
    let acc = ExtractionOutcome {
        tally: tally(&[("Alice", 1), ("Bob", 1)]),
        chunks: 4,
        failed_chunks: 1,
    };

    let outcome = extractor.extract_story("Bob waved.", acc).await;

    assert_eq!(outcome.tally, tally(&[("Alice", 1), ("Bob", 3)]));
    assert_eq!(outcome.chunks, 5);
    assert_eq!(outcome.failed_chunks, 1);
}

#[tokio::test]
async fn extract_chunk_reports_generation_errors_as_unparseable() {
    init_logging();
    let generator = ScriptedGenerator::with_results(vec![Err(network_error())]);
    let extractor = CharacterExtractor::new(generator);
    let chunk = chunk_text("Alice ran.", 100).next().unwrap();

    let parsed = extractor.extract_chunk(&chunk).await;

    assert!(matches!(parsed, ParsedResponse::Unparseable(reason) if reason.contains("connection refused")));
}
