//! Rendering of query errors against their source text.

mod printer;


pub use crate::error::Fix;
pub use printer::ErrorPrinter;
