//! Query language tokens, tokenizer and token reader.
//!
//! # Architecture
//!
//! ```text
//! Query text → Lexer → raw tokens → post-passes → Vec<Token> → TokenReader → parser
//! ```
//!
//! - [`lexer`]: Logos-based scanner. Raw kinds are folded into four families
//!   (operator, literal, keyword, paren); spaces are dropped, quoted literals are unwrapped.
//!   Two post-passes run over the finished sequence: `!=` splitting and keyword promotion.
//!
//! - [`reader`]: forward-only cursor the parser consumes tokens from. No backtracking.
//!
//! - [`token`]: token, operator and keyword types.

pub mod lexer;
pub mod reader;
pub mod token;


pub use lexer::tokenize;
pub use reader::TokenReader;
pub use token::{Keyword, Operator, Token, TokenFamily};
