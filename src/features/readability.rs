//! Flesch reading-ease scoring.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("sentence pattern is valid"));

const BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

/// Sentences with this many words or fewer are not counted.
const MIN_SENTENCE_WORDS: usize = 2;

/// Reading ease with non-finite results replaced by `0.0`.
pub fn readability(text: &str) -> f64 {
    let score = flesch_reading_ease(text);
    if score.is_finite() {
        score
    } else {
        warn!(score, "non-finite readability score, substituting 0");
        0.0
    }
}

/// Flesch reading ease rounded to two decimals. Higher is easier.
///
/// Text without any words scores the formula's constant term.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = lexicon(text).collect();
    let word_count = words.len();
    let sentences = sentence_count(text);

    let sentence_length = word_count as f64 / sentences as f64;
    let syllables_per_word = if word_count == 0 {
        0.0
    } else {
        words.iter().map(|w| syllable_count(w)).sum::<usize>() as f64 / word_count as f64
    };

    let score =
        BASE - SENTENCE_LENGTH_WEIGHT * sentence_length - SYLLABLE_WEIGHT * syllables_per_word;
    (score * 100.0).round() / 100.0
}

/// Whitespace tokens that carry at least one alphanumeric character.
fn lexicon(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|t| t.chars().any(char::is_alphanumeric))
}

/// Counts sentences, ignoring fragments of two words or fewer; never below 1.
pub fn sentence_count(text: &str) -> usize {
    let mut total = 0usize;
    let mut ignored = 0usize;
    for m in SENTENCE.find_iter(text) {
        total += 1;
        if m.as_str().split_whitespace().count() <= MIN_SENTENCE_WORDS {
            ignored += 1;
        }
    }
    total.saturating_sub(ignored).max(1)
}

/// Vowel-group syllable estimate for a single word; at least 1.
///
/// Known divergence: textstat counts syllables with pyphen hyphenation
/// dictionaries, so reading-ease scores close to the low-readability cutoff
/// can fall on the other side of it than textstat's would.
pub fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    let mut count = 0usize;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    // silent trailing e, but keep "-le" endings (table, simple)
    if count > 1 && letters.len() > 2 && letters.ends_with(&['e']) && !letters.ends_with(&['l', 'e'])
    {
        count -= 1;
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
