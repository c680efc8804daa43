use std::str::SplitWhitespace;

use crate::error::MalformedInputError;

/// Whitespace-delimited numeric lexer over a text buffer.
///
/// Yields one `f64` per token. A token that does not parse as a number
/// yields [`MalformedInputError::InvalidToken`]; the lexer keeps going after
/// it, so callers decide whether to stop.
pub struct Tokens<'a> {
    words: SplitWhitespace<'a>,
    index: usize,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            words: text.split_whitespace(),
            index: 0,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<f64, MalformedInputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.words.next()?;
        let index = self.index;
        self.index += 1;
        Some(word.parse::<f64>().map_err(|_| MalformedInputError::InvalidToken {
            token: word.to_owned(),
            index,
        }))
    }
}
