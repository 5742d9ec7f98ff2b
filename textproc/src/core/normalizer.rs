// src/core/normalizer.rs
//! Canonical spacing and capitalization for free text.
//!
//! Normalization is a fixed sequence of rewrites where every stage consumes
//! the output of the previous one:
//!
//! 1. drop spaces after an opening bracket: `( foo` becomes `(foo`
//! 2. drop spaces before a closing bracket: `foo )` becomes `foo)`
//! 3. separate a word from a following opening bracket: `f(` becomes `f (`
//! 4. separate a closing bracket from a following word: `)x` becomes `) x`
//! 5. attach `.,!?;:` to the preceding text and follow them with one space
//! 6. collapse runs of spaces into one
//! 7. trim every line
//! 8. capitalize the first letter of the text and of every sentence
//!
//! The order matters. Stage 5 can leave a space after punctuation next to an
//! existing space, which stage 6 collapses, and a space at a line end, which
//! stage 7 trims.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

static SPACE_AFTER_OPENING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([({\[]) +").expect("valid regex"));
static SPACE_BEFORE_CLOSING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +([)}\]])").expect("valid regex"));
// One character on each side: the bracket a match ends (or starts) with can
// never begin the next match, so a single pass catches every pair.
static WORD_BEFORE_OPENING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^ ({\[])([({\[])").expect("valid regex"));
static CLOSING_BEFORE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([)}\]])([^ )}\]])").expect("valid regex"));
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" *([.,!?;:]) *").expect("valid regex"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid regex"));
static SENTENCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[.?!]\s+|^)[{\[(]*[a-z]").expect("valid regex"));

/// Runs the full normalization pipeline over `text`.
///
/// # Examples
///
/// ```
/// use textproc::normalize;
///
/// assert_eq!(normalize("hello   world ( foo )  ."), "Hello world (foo).");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let text = SPACE_AFTER_OPENING.replace_all(text, "$1");
    let text = SPACE_BEFORE_CLOSING.replace_all(&text, "$1");
    let text = WORD_BEFORE_OPENING.replace_all(&text, "$1 $2");
    let text = CLOSING_BEFORE_WORD.replace_all(&text, "$1 $2");
    let text = PUNCTUATION.replace_all(&text, "$1 ");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = trim_lines(&text);
    let text = capitalize_sentences(&text);

    debug!(output_len = text.len(), "normalized text");
    text
}

/// Trims each `\n`-separated line and joins them back together.
///
/// Blank lines are kept as empty lines.
#[must_use]
pub fn trim_lines(text: &str) -> String {
    text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

/// Uppercases the first lowercase ASCII letter of the text and of each
/// sentence following `.`, `?` or `!` plus whitespace.
///
/// Opening brackets in front of the letter are skipped, so `(hello` becomes
/// `(Hello`.
#[must_use]
pub fn capitalize_sentences(text: &str) -> String {
    SENTENCE_START
        .replace_all(text, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}
