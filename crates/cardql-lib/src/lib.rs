//! cardql: a small filter language for card records.
//!
//! A query such as `name="Static Orb" AND cmc<4` is tokenized, checked against a
//! registry of field filters, assembled into an AND/OR tree and compiled into a
//! [`Predicate`] that a record store can evaluate.
//!
//! # Example
//!
//! ```
//! use cardql_lib::QueryParser;
//! use cardql_lib::model::{Card, ColorSet};
//!
//! let parser = QueryParser::default();
//! let query = parser.parse(r#"name="Static Orb" AND cmc<4"#).expect("valid query");
//!
//! let orb = Card::new("Static Orb").with_cmc(3.0).with_colors(ColorSet::empty());
//! assert!(query.predicate().matches(&orb));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod filter;
pub mod parser;
pub mod predicate;
pub mod ql;

mod error;


pub use cardql_core as model;

pub use ast::{Combinator, Node, Query};
pub use error::{Error, ErrorKind, Expected, ValueError};
pub use filter::FieldFilter;
pub use parser::{Chaining, ParseOptions, QueryParser};
pub use predicate::{Condition, Predicate};
pub use ql::{Keyword, Operator, Token, TokenFamily, TokenReader, tokenize};

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `query` with the default field registry.
pub fn parse(query: &str) -> Result<Query> {
    QueryParser::default().parse(query)
}
