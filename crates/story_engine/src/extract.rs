use std::sync::Arc;

use engine_logging::{engine_debug, engine_info, engine_warn};
use story_core::{
    build_prompt, chunk_text, parse_character_response, Chunk, ExtractionOutcome, ParsedResponse,
    DEFAULT_CHUNK_WORDS,
};

use crate::TextGenerator;

/// Runs character extraction chunk by chunk against a [`TextGenerator`].
///
/// Chunks are sent strictly one after another. Nothing a single chunk does
/// can fail the whole story: generation and parse failures are logged and
/// count as "no characters" for that chunk.
#[derive(Clone)]
pub struct CharacterExtractor {
    generator: Arc<dyn TextGenerator>,
    chunk_words: u64,
}

impl CharacterExtractor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_chunk_words(generator, DEFAULT_CHUNK_WORDS)
    }

    pub fn with_chunk_words(generator: Arc<dyn TextGenerator>, chunk_words: u64) -> Self {
        Self {
            generator,
            chunk_words,
        }
    }

    /// Asks the model about one chunk.
    ///
    /// Generation errors come back as [`ParsedResponse::Unparseable`] so the
    /// caller sees a single failure shape.
    pub async fn extract_chunk(&self, chunk: &Chunk<'_>) -> ParsedResponse {
        let prompt = build_prompt(chunk.text);
        let reply = match self.generator.generate(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                engine_warn!(
                    "Chunk {} ({} words): model {} unavailable: {}",
                    chunk.index,
                    chunk.word_count,
                    self.generator.model(),
                    err
                );
                return ParsedResponse::Unparseable(err.to_string());
            }
        };

        let parsed = parse_character_response(&reply);
        match &parsed {
            ParsedResponse::Characters(tally) => {
                engine_debug!("Chunk {}: {} characters", chunk.index, tally.len());
            }
            ParsedResponse::NoCharacters => {
                engine_debug!("Chunk {}: no named characters", chunk.index);
            }
            ParsedResponse::Unparseable(reason) => {
                engine_warn!(
                    "Chunk {}: could not parse model reply ({}): {:?}",
                    chunk.index,
                    reason,
                    reply
                );
            }
        }
        parsed
    }

    /// Extracts characters from every chunk of `text`, folding them into
    /// `acc` and returning the updated accumulator.
    pub async fn extract_story(&self, text: &str, acc: ExtractionOutcome) -> ExtractionOutcome {
        let mut outcome = acc;
        for chunk in chunk_text(text, self.chunk_words) {
            let parsed = self.extract_chunk(&chunk).await;
            outcome = fold_chunk(outcome, parsed);
        }
        engine_info!(
            "Extracted {} characters from {} chunks ({} failed)",
            outcome.tally.len(),
            outcome.chunks,
            outcome.failed_chunks
        );
        outcome
    }
}

fn fold_chunk(outcome: ExtractionOutcome, parsed: ParsedResponse) -> ExtractionOutcome {
    let failed = matches!(parsed, ParsedResponse::Unparseable(_));
    ExtractionOutcome {
        tally: outcome.tally.merge(parsed.into_tally()),
        chunks: outcome.chunks + 1,
        failed_chunks: outcome.failed_chunks + usize::from(failed),
    }
}
