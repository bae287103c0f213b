//! Read-only view of a record that predicates are evaluated against.

use serde::{Deserialize, Serialize};

use crate::colors::ColorSet;

/// Column names understood by [`Card`].
pub mod columns {
    pub const NAME: &str = "name";
    pub const ORACLE_TEXT: &str = "oracle_text";
    pub const CMC: &str = "cmc";
}

/// A record as seen by a predicate.
///
/// Columns are addressed by name. A column the record does not have yields `None`,
/// and conditions over a missing column never match.
pub trait Record {
    fn text(&self, column: &str) -> Option<&str>;

    fn number(&self, column: &str) -> Option<f64>;

    fn colors(&self) -> ColorSet;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub oracle_text: String,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub colors: ColorSet,
}

impl Card {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = text.into();
        self
    }

    pub fn with_cmc(mut self, cmc: f64) -> Self {
        self.cmc = cmc;
        self
    }

    pub fn with_colors(mut self, colors: ColorSet) -> Self {
        self.colors = colors;
        self
    }
}

impl Record for Card {
    fn text(&self, column: &str) -> Option<&str> {
        match column {
            columns::NAME => Some(&self.name),
            columns::ORACLE_TEXT => Some(&self.oracle_text),
            _ => None,
        }
    }

    fn number(&self, column: &str) -> Option<f64> {
        match column {
            columns::CMC => Some(self.cmc),
            _ => None,
        }
    }

    fn colors(&self) -> ColorSet {
        self.colors
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn text(&self, column: &str) -> Option<&str> {
        (**self).text(column)
    }

    fn number(&self, column: &str) -> Option<f64> {
        (**self).number(column)
    }

    fn colors(&self) -> ColorSet {
        (**self).colors()
    }
}
