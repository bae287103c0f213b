//! Error taxonomy for tokenizing, parsing and resolving queries.

use std::fmt;
use std::num::ParseFloatError;

use cardql_core::UnknownColor;
use rowan::TextRange;

use crate::ql::Operator;

/// Errors that can occur while compiling a query.
///
/// Every variant carries the range of the query text it refers to. Ranges are empty
/// (`0..0`) for errors raised through [`QueryParser::resolve`](crate::QueryParser::resolve),
/// which has no source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A quoted literal was never closed.
    #[error("mismatched quotes")]
    UnterminatedQuote { span: TextRange },

    /// Field name not registered under any name or alias.
    #[error("no such field: {field}")]
    NoField {
        field: String,
        /// Closest registered name or alias, if any is close enough.
        suggestion: Option<String>,
        span: TextRange,
    },

    /// The field exists but has no handler for the operator.
    #[error("field {field:?} has no such operation: {operator}")]
    NoOperationForField {
        field: String,
        operator: Operator,
        span: TextRange,
    },

    /// The field's handler rejected the value.
    #[error("invalid value {value:?} for field {field:?}: {source}")]
    InvalidValue {
        field: String,
        value: String,
        source: ValueError,
        span: TextRange,
    },

    #[error("unexpected operator {operator:?}: expected a field name")]
    UnexpectedOperator { operator: String, span: TextRange },

    #[error("parentheses are not supported")]
    ParenthesesUnsupported { span: TextRange },

    #[error("unrecognized keyword: {keyword}")]
    UnrecognizedKeyword { keyword: String, span: TextRange },

    #[error("unexpected end of query: expected {expected}")]
    UnexpectedEof { expected: Expected, span: TextRange },

    #[error("expected an operator after field name, found {found:?}")]
    ExpectedOperator { found: String, span: TextRange },

    #[error("expected a value after operator, found {found:?}")]
    ExpectedValue { found: String, span: TextRange },
}

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The query could not be tokenized.
    Lex,
    UnknownField,
    UnsupportedOperator,
    InvalidValue,
    /// Malformed token stream.
    Structure,
}

/// What the parser was waiting for when input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    Operator,
    Value,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::Operator => "operator",
            Expected::Value => "value",
        })
    }
}

/// Rejection of a literal value by a field handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("failed to parse number: {0}")]
    InvalidNumber(#[from] ParseFloatError),

    #[error(transparent)]
    UnknownColor(#[from] UnknownColor),

    #[error("{0}")]
    Custom(String),
}

impl ValueError {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// A replacement the user can apply to fix the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub replacement: String,
    pub description: String,
}

impl Error {
    pub fn span(&self) -> TextRange {
        match self {
            Error::UnterminatedQuote { span }
            | Error::NoField { span, .. }
            | Error::NoOperationForField { span, .. }
            | Error::InvalidValue { span, .. }
            | Error::UnexpectedOperator { span, .. }
            | Error::ParenthesesUnsupported { span }
            | Error::UnrecognizedKeyword { span, .. }
            | Error::UnexpectedEof { span, .. }
            | Error::ExpectedOperator { span, .. }
            | Error::ExpectedValue { span, .. } => *span,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnterminatedQuote { .. } => ErrorKind::Lex,
            Error::NoField { .. } => ErrorKind::UnknownField,
            Error::NoOperationForField { .. } => ErrorKind::UnsupportedOperator,
            Error::InvalidValue { .. } => ErrorKind::InvalidValue,
            Error::UnexpectedOperator { .. }
            | Error::ParenthesesUnsupported { .. }
            | Error::UnrecognizedKeyword { .. }
            | Error::UnexpectedEof { .. }
            | Error::ExpectedOperator { .. }
            | Error::ExpectedValue { .. } => ErrorKind::Structure,
        }
    }

    /// Suggested replacement for the error span, when one is known.
    pub fn fix(&self) -> Option<Fix> {
        match self {
            Error::NoField {
                suggestion: Some(name),
                ..
            } => Some(Fix {
                replacement: name.clone(),
                description: format!("did you mean `{name}`?"),
            }),
            _ => None,
        }
    }

    pub(crate) fn with_span(mut self, range: TextRange) -> Self {
        match &mut self {
            Error::UnterminatedQuote { span }
            | Error::NoField { span, .. }
            | Error::NoOperationForField { span, .. }
            | Error::InvalidValue { span, .. }
            | Error::UnexpectedOperator { span, .. }
            | Error::ParenthesesUnsupported { span }
            | Error::UnrecognizedKeyword { span, .. }
            | Error::UnexpectedEof { span, .. }
            | Error::ExpectedOperator { span, .. }
            | Error::ExpectedValue { span, .. } => *span = range,
        }
        self
    }
}
