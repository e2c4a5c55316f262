//! Text to token stream.
//!
//! # Invariants
//!
//! - `position` increments once per raw token scanned, whether or not the
//!   token is filtered out by `remove_stop_words` — it is not the index of
//!   the *emitted* token.
//! - `start_offset`/`end_offset` are character offsets into the source text,
//!   not byte offsets.
//! - Malformed input doesn't exist here: every `char` that isn't ASCII
//!   alphanumeric is a separator, full stop.

use crate::types::Token;
use std::collections::HashSet;
use std::sync::LazyLock;

/// The built-in English stop list. Fixed at build time; the same list is
/// used everywhere a caller asks for stop-word removal.
const STOP_WORD_LIST: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// True iff `term` is in the built-in stop list. `term` is expected to
/// already be lowercase, matching how the tokenizer looks words up.
#[inline]
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(term)
}

/// Options governing a single `Tokenizer` pass.
#[derive(Debug, Clone, Copy)]
pub struct TokenizeOptions {
    pub normalize_case: bool,
    pub remove_stop_words: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            normalize_case: true,
            remove_stop_words: false,
        }
    }
}

/// A lazy, finite, non-restartable scan of `text` into `Token`s.
///
/// Each call to `Tokenizer::new` produces a fresh sequence; nothing here is
/// cached or shared across tokenizer instances.
pub struct Tokenizer<'a> {
    chars: std::str::CharIndices<'a>,
    options: TokenizeOptions,
    /// Raw token position, advanced for every scanned run regardless of
    /// whether it survives filtering.
    position: usize,
    /// Character index of the next char to be read, tracked alongside the
    /// byte-indexed `CharIndices` iterator so offsets are in chars.
    char_index: usize,
    peeked: Option<(usize, char)>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, options: TokenizeOptions) -> Self {
        Self {
            chars: text.char_indices(),
            options,
            position: 0,
            char_index: 0,
            peeked: None,
        }
    }

    fn next_char(&mut self) -> Option<(usize, char)> {
        if let Some(item) = self.peeked.take() {
            return Some(item);
        }
        let item = self.chars.next()?;
        let out = (self.char_index, item.1);
        self.char_index += 1;
        Some(out)
    }

    fn push_back(&mut self, item: (usize, char)) {
        self.peeked = Some(item);
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            // Skip separators.
            let (start, first) = loop {
                match self.next_char() {
                    Some((idx, c)) if c.is_ascii_alphanumeric() => break (idx, c),
                    Some(_) => continue,
                    None => return None,
                }
            };

            let mut raw = String::new();
            raw.push(first);
            let mut end = start + 1;

            loop {
                match self.next_char() {
                    Some((idx, c)) if c.is_ascii_alphanumeric() => {
                        raw.push(c);
                        end = idx + 1;
                    }
                    Some(item) => {
                        self.push_back(item);
                        break;
                    }
                    None => break,
                }
            }

            let position = self.position;
            self.position += 1;

            let term = if self.options.normalize_case {
                raw.to_ascii_lowercase()
            } else {
                raw
            };

            if self.options.remove_stop_words && is_stop_word(&term) {
                continue;
            }

            return Some(Token {
                term,
                position,
                start_offset: start,
                end_offset: end,
            });
        }
    }
}

/// Convenience entry point mirroring the contract's `tokenize(text, options)`
/// signature. Equivalent to constructing a `Tokenizer` directly.
pub fn tokenize(text: &str, options: TokenizeOptions) -> Tokenizer<'_> {
    Tokenizer::new(text, options)
}
