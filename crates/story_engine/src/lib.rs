//! Story engine: file IO, model client and the extraction pipeline.
mod analyze;
mod batch;
mod decode;
mod extract;
mod generate;
mod persist;
mod source;
mod types;

pub use analyze::{AnalysisSettings, StoryAnalyzer};
pub use batch::{
    find_stories, report_filename, run_batch, BatchEntry, BatchError, BatchSummary,
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, MANIFEST_FILENAME,
};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use extract::CharacterExtractor;
pub use generate::{
    GenerateSettings, OllamaGenerator, TextGenerator, DEFAULT_MODEL, DEFAULT_OLLAMA_URL,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use source::{load_story, LoadError, StoryText};
pub use types::{FailureKind, GenerateError};
