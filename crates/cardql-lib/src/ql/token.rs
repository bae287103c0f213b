//! Tokens produced by the lexer.

use std::fmt;
use std::str::FromStr;

use rowan::TextRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenFamily {
    Operator,
    Literal,
    Keyword,
    Paren,
}

impl fmt::Display for TokenFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenFamily::Operator => "operator",
            TokenFamily::Literal => "literal",
            TokenFamily::Keyword => "keyword",
            TokenFamily::Paren => "paren",
        })
    }
}

/// A token: family, text value and the byte range it came from.
///
/// The value of a quoted literal is its content without the quotes. Operator values are
/// normalized (`=>` is stored as `>=`), keyword values are upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    family: TokenFamily,
    value: String,
    span: TextRange,
}

impl Token {
    pub fn new(family: TokenFamily, value: impl Into<String>, span: TextRange) -> Self {
        Self {
            family,
            value: value.into(),
            span,
        }
    }

    pub fn family(&self) -> TokenFamily {
        self.family
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn span(&self) -> TextRange {
        self.span
    }

    pub fn is(&self, family: TokenFamily) -> bool {
        self.family == family
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.family, self.value)
    }
}

/// Comparison operator between a field and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Ge,
        Operator::Lt,
        Operator::Le,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
        }
    }

    /// Applies the operator as `lhs <op> rhs`.
    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Operator::Eq => lhs == rhs,
            Operator::Ne => lhs != rhs,
            Operator::Gt => lhs > rhs,
            Operator::Ge => lhs >= rhs,
            Operator::Lt => lhs < rhs,
            Operator::Le => lhs <= rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the normalized operator spelling stored in operator tokens.
impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|op| op.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    And,
    Or,
}

impl Keyword {
    pub const ALL: [Keyword; 2] = [Keyword::And, Keyword::Or];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::And => "AND",
            Keyword::Or => "OR",
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn lookup(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
