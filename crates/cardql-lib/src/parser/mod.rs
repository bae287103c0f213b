//! Query parser: turns a token sequence into a [`Query`].
//!
//! # Grammar
//!
//! ```text
//! query      := field_expr ( (AND|OR)? field_expr )*
//! field_expr := FIELD OPERATOR VALUE
//! ```
//!
//! Parsing is a single forward pass with no backtracking. Each field expression is
//! resolved against the filter registry as soon as its three tokens are read, so the
//! first bad expression aborts the parse. Expressions and keywords are collected in a
//! flat chain that is folded into a tree once input is exhausted; see [`Chaining`] for
//! how the fold groups mixed AND/OR.
//!
//! Two adjacent expressions with no keyword between them are joined with AND.
//! Keywords at the start or end of the query have no effect.

mod builder;

#[cfg(test)]
mod parser_tests;

use rowan::TextRange;
use serde::Deserialize;

use crate::Result;
use crate::ast::{Node, Query};
use crate::error::{Error, ErrorKind, Expected};
use crate::filter::{FieldFilter, default_filters};
use crate::ql::{Keyword, Operator, Token, TokenFamily, TokenReader, tokenize};

use builder::ChainBuilder;
pub use builder::Chaining;

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    pub chaining: Chaining,
}

/// Field filter registry plus parse options.
///
/// Built once and shared; parsing never mutates it.
#[derive(Debug)]
pub struct QueryParser {
    filters: Vec<FieldFilter>,
    options: ParseOptions,
}

impl Default for QueryParser {
    /// Parser with the built-in fields (`name`, `oracle`, `cmc`, `colors`).
    fn default() -> Self {
        Self {
            filters: default_filters(),
            options: ParseOptions::default(),
        }
    }
}

impl QueryParser {
    /// Parser with no fields registered.
    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_filter(mut self, filter: FieldFilter) -> Self {
        self.register(filter);
        self
    }

    /// Adds a field filter. A filter with the same name replaces the existing one.
    pub fn register(&mut self, filter: FieldFilter) {
        match self.filters.iter_mut().find(|f| f.name() == filter.name()) {
            Some(existing) => *existing = filter,
            None => self.filters.push(filter),
        }
    }

    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Looks up a filter by name or alias.
    pub fn filter(&self, name: &str) -> Option<&FieldFilter> {
        self.filters.iter().find(|f| f.matches_name(name))
    }

    /// Resolves one `field OP value` triple into a leaf.
    ///
    /// Errors carry empty spans; [`QueryParser::parse`] fills them in.
    pub fn resolve(&self, field: &str, op: Operator, value: &str) -> Result<Node> {
        let span = TextRange::default();
        let Some(filter) = self.filter(field) else {
            return Err(Error::NoField {
                field: field.to_string(),
                suggestion: self.suggest_field(field),
                span,
            });
        };

        let Some(result) = filter.handle(op, value) else {
            return Err(Error::NoOperationForField {
                field: filter.name().to_string(),
                operator: op,
                span,
            });
        };

        result
            .map(Node::Leaf)
            .map_err(|source| Error::InvalidValue {
                field: filter.name().to_string(),
                value: value.to_string(),
                source,
                span,
            })
    }

    /// Tokenizes and parses a query string.
    pub fn parse(&self, query: &str) -> Result<Query> {
        self.parse_tokens(tokenize(query)?)
    }

    pub fn parse_tokens(&self, tokens: Vec<Token>) -> Result<Query> {
        let mut reader = TokenReader::new(tokens);
        let mut chain = ChainBuilder::new();

        while let Some(token) = reader.next() {
            match token.family() {
                TokenFamily::Operator => {
                    return Err(Error::UnexpectedOperator {
                        operator: token.value().to_string(),
                        span: token.span(),
                    });
                }
                TokenFamily::Paren => {
                    return Err(Error::ParenthesesUnsupported { span: token.span() });
                }
                TokenFamily::Keyword => {
                    let Some(keyword) = Keyword::lookup(token.value()) else {
                        return Err(Error::UnrecognizedKeyword {
                            keyword: token.value().to_string(),
                            span: token.span(),
                        });
                    };
                    chain.keyword(keyword.into());
                }
                TokenFamily::Literal => {
                    let node = self.field_expr(token, &mut reader)?;
                    chain.leaf(node);
                }
            }
        }

        tracing::debug!(
            expressions = chain.len(),
            chaining = ?self.options.chaining,
            "parsed query"
        );
        Ok(Query::new(chain.finish(self.options.chaining)))
    }

    /// Reads the operator and value following `field` and resolves the triple.
    fn field_expr(&self, field: Token, reader: &mut TokenReader) -> Result<Node> {
        let (op_token, op) = read_operator(reader)?;
        let value = read_value(reader)?;

        tracing::trace!(field = field.value(), op = %op, value = value.value(), "field expression");

        self.resolve(field.value(), op, value.value())
            .map_err(|err| {
                let span = match err.kind() {
                    ErrorKind::UnknownField => field.span(),
                    ErrorKind::UnsupportedOperator => op_token.span(),
                    _ => value.span(),
                };
                err.with_span(span)
            })
    }

    /// Closest field name or alias for an unknown field, ignoring one- and two-letter aliases.
    fn suggest_field(&self, field: &str) -> Option<String> {
        self.filters
            .iter()
            .flat_map(|f| std::iter::once(f.name()).chain(f.aliases().iter().map(String::as_str)))
            .filter(|candidate| candidate.len() > 2)
            .map(|candidate| (levenshtein(candidate, field), candidate))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| candidate.to_string())
    }
}

fn read_operator(reader: &mut TokenReader) -> Result<(Token, Operator)> {
    let Some(token) = reader.next() else {
        return Err(Error::UnexpectedEof {
            expected: Expected::Operator,
            span: reader.eof_span(),
        });
    };

    let op = token
        .is(TokenFamily::Operator)
        .then(|| token.value().parse::<Operator>().ok())
        .flatten();
    match op {
        Some(op) => Ok((token, op)),
        None => Err(Error::ExpectedOperator {
            found: token.value().to_string(),
            span: token.span(),
        }),
    }
}

fn read_value(reader: &mut TokenReader) -> Result<Token> {
    let Some(token) = reader.next() else {
        return Err(Error::UnexpectedEof {
            expected: Expected::Value,
            span: reader.eof_span(),
        });
    };

    if !token.is(TokenFamily::Literal) {
        return Err(Error::ExpectedValue {
            found: token.value().to_string(),
            span: token.span(),
        });
    }
    Ok(token)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
