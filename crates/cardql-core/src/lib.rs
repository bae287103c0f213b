#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Record model shared by the cardql query engine and the stores that evaluate it.
//!
//! Two layers:
//! - **Colors**: the five-letter WUBRG alphabet (`Color`) and a compact bitset over it (`ColorSet`)
//! - **Records**: the read-only `Record` view a predicate is evaluated against, plus `Card`,
//!   a plain serde record implementing it

mod colors;
mod record;


pub use colors::{Color, ColorSet, UnknownColor};
pub use record::{Card, Record, columns};
