//! Forward-only cursor over a token sequence.

use rowan::{TextRange, TextSize};

use super::token::Token;

/// Hands out tokens in order, each exactly once. There is no lookahead and no backtracking.
#[derive(Debug, Clone)]
pub struct TokenReader {
    tokens: std::vec::IntoIter<Token>,
    /// Offset just past the last token, used to place end-of-input errors.
    end: TextSize,
}

impl TokenReader {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map_or(TextSize::from(0), |token| token.span().end());
        Self {
            tokens: tokens.into_iter(),
            end,
        }
    }

    pub fn has_more(&self) -> bool {
        !self.tokens.as_slice().is_empty()
    }

    /// Empty range at the end of the consumed input.
    pub fn eof_span(&self) -> TextRange {
        TextRange::empty(self.end)
    }
}

impl Iterator for TokenReader {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl ExactSizeIterator for TokenReader {}
