//! Sentence-aligned chunking of story text.
//!
//! A chunk is a borrowed slice of the story running from the start of its
//! first sentence to the end of its last one, so chunks never copy text and
//! the original whitespace between sentences is kept.

use std::iter::Peekable;
use std::sync::LazyLock;

use regex::Regex;

use crate::metrics::word_count;

/// Target chunk size used when none is configured.
pub const DEFAULT_CHUNK_WORDS: u64 = 1000;

// Terminal punctuation followed by whitespace. The punctuation belongs to the
// sentence it ends; the whitespace is the separator.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("Invalid sentence regex pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub index: usize,
    pub text: &'a str,
    pub word_count: u64,
}

#[derive(Debug, Clone, Copy)]
struct SentenceSpan {
    start: usize,
    end: usize,
    word_count: u64,
}

#[derive(Debug, Clone)]
struct SentenceSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> SentenceSpans<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for SentenceSpans<'_> {
    type Item = SentenceSpan;

    fn next(&mut self) -> Option<SentenceSpan> {
        if self.pos >= self.text.len() {
            return None;
        }
        let start = self.pos;
        let end = match SENTENCE_BOUNDARY.find_at(self.text, start) {
            Some(boundary) => {
                self.pos = boundary.end();
                // The punctuation mark is a single ASCII byte.
                boundary.start() + 1
            }
            None => {
                self.pos = self.text.len();
                self.text.len()
            }
        };
        Some(SentenceSpan {
            start,
            end,
            word_count: word_count(&self.text[start..end]),
        })
    }
}

/// Splits `text` into sentences, trimming surrounding whitespace.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> + Clone {
    let trimmed = text.trim();
    SentenceSpans::new(trimmed).map(move |span| &trimmed[span.start..span.end])
}

/// Lazily groups sentences into chunks of roughly `target_words` words.
///
/// A clone continues independently from the same position; calling
/// [`chunk_text`] again starts over from the first sentence.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    sentences: Peekable<SentenceSpans<'a>>,
    target_words: u64,
    next_index: usize,
}

/// Chunks `text` greedily at sentence boundaries.
///
/// A sentence joins the current chunk unless doing so would push the chunk
/// past `target_words`. A sentence that is longer than the target on its own
/// is never split and becomes a chunk by itself.
pub fn chunk_text(text: &str, target_words: u64) -> Chunks<'_> {
    let trimmed = text.trim();
    Chunks {
        text: trimmed,
        sentences: SentenceSpans::new(trimmed).peekable(),
        target_words,
        next_index: 0,
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let first = self.sentences.next()?;
        let mut end = first.end;
        let mut words = first.word_count;
        let target = self.target_words;

        while let Some(sentence) = self
            .sentences
            .next_if(|sentence| words + sentence.word_count <= target)
        {
            end = sentence.end;
            words += sentence.word_count;
        }

        let index = self.next_index;
        self.next_index += 1;
        Some(Chunk {
            index,
            text: &self.text[first.start..end],
            word_count: words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{chunk_text, split_sentences};

    #[test]
    fn punctuation_stays_with_its_sentence() {
        let sentences: Vec<_> = split_sentences("  Hi there!  Who are you?\nMe.  ").collect();
        assert_eq!(sentences, vec!["Hi there!", "Who are you?", "Me."]);
    }

    #[test]
    fn trailing_text_without_punctuation_is_a_sentence() {
        let sentences: Vec<_> = split_sentences("One. two three").collect();
        assert_eq!(sentences, vec!["One.", "two three"]);
    }

    #[test]
    fn abbreviation_without_space_does_not_split() {
        let sentences: Vec<_> = split_sentences("It cost 3.50 today.").collect();
        assert_eq!(sentences, vec!["It cost 3.50 today."]);
    }

    #[test]
    fn indices_are_sequential() {
        let indices: Vec<_> = chunk_text("A b. C d. E f.", 2).map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
