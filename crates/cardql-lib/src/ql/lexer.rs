//! Tokenizer for the filter language.
//!
//! A literal is any run of characters up to the next separator (space, `"`, `=`, `>`, `<`,
//! `(`, `)`, `:`). Each separator other than space becomes its own token; two-character
//! operators are matched greedily, and `=`/`:` followed by `<` or `>` normalize to the
//! conventional spelling (`=>` becomes `>=`).
//!
//! ## Post-passes
//!
//! Once scanning is complete, two passes run over the whole sequence:
//! 1. A literal ending in `!` directly followed by `=` is split into the literal and `!=`.
//! 2. Unquoted literals spelling a keyword (`and`, `Or`, ...) become upper-cased keyword tokens.

use std::ops::Range;

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::token::{Keyword, Operator, Token, TokenFamily};
use crate::{Error, Result};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    #[regex(r" +")]
    Space,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("<")]
    Lt,

    #[token("<=")]
    Le,

    #[token(">")]
    Gt,

    #[token(">=")]
    Ge,

    #[token("=")]
    #[token(":")]
    Eq,

    /// `=<` or `:<`, normalized to `<=`
    #[token("=<")]
    #[token(":<")]
    EqLt,

    /// `=>` or `:>`, normalized to `>=`
    #[token("=>")]
    #[token(":>")]
    EqGt,

    #[regex(r#""[^"]*""#)]
    Quoted,

    /// Opening quote with no closing quote before end of input
    #[regex(r#""[^"]*"#)]
    UnterminatedQuote,

    #[regex(r#"[^ "=<>():]+"#)]
    Bare,
}

impl RawKind {
    fn operator(self) -> Option<Operator> {
        match self {
            RawKind::Lt => Some(Operator::Lt),
            RawKind::Le | RawKind::EqLt => Some(Operator::Le),
            RawKind::Gt => Some(Operator::Gt),
            RawKind::Ge | RawKind::EqGt => Some(Operator::Ge),
            RawKind::Eq => Some(Operator::Eq),
            _ => None,
        }
    }
}

/// Token plus whether it came from a quoted literal. Quoting only matters to the post-passes.
struct Scanned {
    token: Token,
    quoted: bool,
}

impl Scanned {
    fn plain(token: Token) -> Self {
        Self {
            token,
            quoted: false,
        }
    }

    fn quoted(token: Token) -> Self {
        Self {
            token,
            quoted: true,
        }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes a query string.
///
/// Fails only on an unterminated quoted literal.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut scanned = Vec::new();
    let mut lexer = RawKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = range_to_text_range(lexer.span());
        let text = lexer.slice();

        let item = match result {
            Ok(RawKind::Space) => continue,
            Ok(RawKind::ParenOpen | RawKind::ParenClose) => {
                Scanned::plain(Token::new(TokenFamily::Paren, text, span))
            }
            Ok(RawKind::Quoted) => {
                let content = &text[1..text.len() - 1];
                Scanned::quoted(Token::new(TokenFamily::Literal, content, span))
            }
            Ok(RawKind::UnterminatedQuote) => return Err(Error::UnterminatedQuote { span }),
            Ok(kind) => match kind.operator() {
                Some(op) => Scanned::plain(Token::new(TokenFamily::Operator, op.as_str(), span)),
                None => Scanned::plain(Token::new(TokenFamily::Literal, text, span)),
            },
            // Every character is covered by some pattern; anything else is a bare literal
            Err(()) => Scanned::plain(Token::new(TokenFamily::Literal, text, span)),
        };
        scanned.push(item);
    }

    let tokens = promote_keywords(split_not_equal(source, scanned));
    tracing::trace!(tokens = tokens.len(), "tokenized query");
    Ok(tokens)
}

fn split_not_equal(source: &str, scanned: Vec<Scanned>) -> Vec<Scanned> {
    let mut out: Vec<Scanned> = Vec::with_capacity(scanned.len());

    for item in scanned {
        let joins_bang = is_bare_equals(source, &item.token)
            && out
                .last()
                .is_some_and(|prev| ends_with_bang(prev, item.token.span()));

        if joins_bang {
            if let Some(prev) = out.pop() {
                out.extend(split_bang(prev.token, item.token.span()));
                continue;
            }
        }
        out.push(item);
    }

    out
}

fn is_bare_equals(source: &str, token: &Token) -> bool {
    token.is(TokenFamily::Operator) && &source[Range::<usize>::from(token.span())] == "="
}

fn ends_with_bang(prev: &Scanned, equals: TextRange) -> bool {
    !prev.quoted
        && prev.token.is(TokenFamily::Literal)
        && prev.token.value().ends_with('!')
        && prev.token.span().end() == equals.start()
}

fn split_bang(literal: Token, equals: TextRange) -> Vec<Scanned> {
    let bang = literal.span().end() - TextSize::from(1);
    let stem = literal.value().strip_suffix('!').unwrap_or(literal.value());

    let mut out = Vec::with_capacity(2);
    if !stem.is_empty() {
        out.push(Scanned::plain(Token::new(
            TokenFamily::Literal,
            stem,
            TextRange::new(literal.span().start(), bang),
        )));
    }
    out.push(Scanned::plain(Token::new(
        TokenFamily::Operator,
        Operator::Ne.as_str(),
        TextRange::new(bang, equals.end()),
    )));
    out
}

fn promote_keywords(scanned: Vec<Scanned>) -> Vec<Token> {
    scanned
        .into_iter()
        .map(|item| match Keyword::lookup(item.token.value()) {
            Some(keyword) if !item.quoted && item.token.is(TokenFamily::Literal) => {
                Token::new(TokenFamily::Keyword, keyword.as_str(), item.token.span())
            }
            _ => item.token,
        })
        .collect()
}
