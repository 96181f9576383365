//! Story core: pure text metrics, chunking, tallying and report helpers.
mod chapter;
mod chunk;
mod metrics;
mod prompt;
mod report;
mod response;
mod tally;

pub use chapter::extract_chapter;
pub use chunk::{chunk_text, split_sentences, Chunk, Chunks, DEFAULT_CHUNK_WORDS};
pub use metrics::{reading_time, word_count, TextMetrics, DEFAULT_WORDS_PER_MINUTE};
pub use prompt::{build_prompt, NO_CHARACTERS_MESSAGE, NO_CHARACTERS_SENTINEL};
pub use report::{AnalysisReport, ExtractionOutcome};
pub use response::{parse_character_response, ParsedResponse};
pub use tally::CharacterTally;
