pub mod ast;
pub mod check;
pub mod fields;
pub mod predicate;
pub mod query_loader;
pub mod run_common;
pub mod tokens;
