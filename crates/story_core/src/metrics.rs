use std::sync::LazyLock;

use regex::Regex;

/// Average adult silent-reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("Invalid word regex pattern"));

/// Counts word-character runs in `text`.
///
/// Case does not affect the count, so the text is matched as-is instead of
/// being lower-cased first.
pub fn word_count(text: &str) -> u64 {
    WORD_PATTERN.find_iter(text).count() as u64
}

/// Whole minutes needed to read `word_count` words, rounded up.
///
/// Empty input takes zero minutes. A `words_per_minute` of zero falls back to
/// [`DEFAULT_WORDS_PER_MINUTE`].
pub fn reading_time(word_count: u64, words_per_minute: u32) -> u64 {
    if word_count == 0 {
        return 0;
    }
    let rate = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    word_count.div_ceil(u64::from(rate))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub word_count: u64,
    pub reading_minutes: u64,
}

impl TextMetrics {
    pub fn measure(text: &str, words_per_minute: u32) -> Self {
        let word_count = word_count(text);
        Self {
            word_count,
            reading_minutes: reading_time(word_count, words_per_minute),
        }
    }
}
