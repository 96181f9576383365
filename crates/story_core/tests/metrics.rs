use story_core::{reading_time, word_count, TextMetrics, DEFAULT_WORDS_PER_MINUTE};

#[test]
fn empty_and_whitespace_text_has_no_words() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("   \n\t  "), 0);
}

#[test]
fn words_are_alphanumeric_runs() {
    assert_eq!(word_count("Alice went home. Bob followed her."), 6);
    assert_eq!(word_count("chapter 12: the end"), 4);
    assert_eq!(word_count("Zoë naïve café"), 3);
}

#[test]
fn word_count_is_zero_only_without_alphanumerics() {
    let samples = ["", " ", "?!", "-- ... --", "a", " 7 ", "x."];
    for sample in samples {
        let has_alnum = sample.chars().any(char::is_alphanumeric);
        assert_eq!(word_count(sample) == 0, !has_alnum, "sample {sample:?}");
    }
}

#[test]
fn case_does_not_change_the_count() {
    assert_eq!(word_count("The CAT sat"), word_count("the cat sat"));
}

#[test]
fn reading_time_rounds_up() {
    assert_eq!(reading_time(0, DEFAULT_WORDS_PER_MINUTE), 0);
    assert_eq!(reading_time(1, DEFAULT_WORDS_PER_MINUTE), 1);
    assert_eq!(reading_time(200, DEFAULT_WORDS_PER_MINUTE), 1);
    assert_eq!(reading_time(201, DEFAULT_WORDS_PER_MINUTE), 2);
    assert_eq!(reading_time(1000, 250), 4);
}

#[test]
fn measure_combines_count_and_time() {
    let text = "word ".repeat(401);
    let metrics = TextMetrics::measure(&text, DEFAULT_WORDS_PER_MINUTE);
    assert_eq!(
        metrics,
        TextMetrics {
            word_count: 401,
            reading_minutes: 3,
        }
    );
}
