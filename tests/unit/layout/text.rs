use super::*;

/// Measurer with a fixed advance per character, spaces included.
struct FixedAdvance(f32);

impl TextMeasurer for FixedAdvance {
    fn line_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

#[test]
fn two_words_wider_than_max_wrap_to_two_lines() {
    // "Hello world" measures 220 at 20px/char, over a 200px max.
    let lines = wrap("Hello world", &FixedAdvance(20.0), 200.0);
    let contents: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, ["Hello", "world"]);
    assert_eq!(lines[0].width_px, 100.0);
    assert_eq!(lines[1].width_px, 100.0);
}

#[test]
fn words_that_fit_stay_on_one_line() {
    let lines = wrap("Hello world", &FixedAdvance(10.0), 200.0);
    let contents: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, ["Hello world"]);
}

#[test]
fn empty_text_yields_exactly_one_empty_line() {
    let lines = wrap("", &FixedAdvance(10.0), 200.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content, "");
    assert_eq!(lines[0].width_px, 0.0);

    let lines = wrap("   \n\t ", &FixedAdvance(10.0), 200.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content, "");
}

#[test]
fn whitespace_runs_and_newlines_collapse_to_single_separators() {
    let lines = wrap("one\ntwo   three\t\tfour", &FixedAdvance(10.0), 10_000.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content, "one two three four");
}

#[test]
fn overlong_single_word_is_placed_unsplit() {
    let word = "Supercalifragilisticexpialidocious";
    let lines = wrap(word, &FixedAdvance(10.0), 50.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content, word);
    assert!(lines[0].width_px > 50.0);
}

#[test]
fn overlong_word_mid_text_gets_its_own_line() {
    let lines = wrap("aa Supercalifragilistic bb", &FixedAdvance(10.0), 100.0);
    let contents: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, ["aa", "Supercalifragilistic", "bb"]);
}

#[test]
fn no_line_exceeds_max_except_single_overlong_words() {
    let text = "the quick brown fox jumps over thirteen incomprehensibilities lazily";
    let max = 120.0;
    let measurer = FixedAdvance(10.0);
    for line in wrap(text, &measurer, max) {
        if line.width_px > max {
            assert!(!line.content.contains(' '));
        }
    }
}

#[test]
fn wrapping_is_idempotent() {
    let text = "pack my box with five dozen liquor jugs and a rather uncooperative sphinx";
    let measurer = FixedAdvance(10.0);
    let first = wrap(text, &measurer, 140.0);
    let joined = first
        .iter()
        .map(|l| l.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let second = wrap(&joined, &measurer, 140.0);
    assert_eq!(first, second);
}

#[test]
fn block_height_is_linear_in_line_count() {
    let size = 24.0;
    for n in 0..6 {
        let delta = text_block_height(n + 1, size) - text_block_height(n, size);
        assert_eq!(delta, size * LINE_SPACING);
    }
}

#[test]
fn one_empty_line_still_reserves_height() {
    let size = 24.0;
    let lines = wrap("", &FixedAdvance(10.0), 200.0);
    assert_eq!(text_block_height(lines.len(), size), size * 1.5);
}
