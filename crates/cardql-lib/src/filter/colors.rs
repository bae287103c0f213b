//! Color-set comparisons.
//!
//! For a queried set `Q`:
//! - `=`       record colors are exactly `Q`: every color of `Q` present, every other absent
//! - `<`, `<=` record colors are a subset of `Q`: every color outside `Q` absent
//! - `>`, `>=` record colors are a superset of `Q`: every color of `Q` present
//!
//! Each requirement becomes one condition; the conditions are ANDed.

use cardql_core::ColorSet;

use crate::predicate::Predicate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorQuery {
    pub must_include: ColorSet,
    pub must_exclude: ColorSet,
}

impl ColorQuery {
    pub fn exactly(colors: ColorSet) -> Self {
        Self {
            must_include: colors,
            must_exclude: colors.complement(),
        }
    }

    pub fn within(colors: ColorSet) -> Self {
        Self {
            must_include: ColorSet::empty(),
            must_exclude: colors.complement(),
        }
    }

    pub fn including(colors: ColorSet) -> Self {
        Self {
            must_include: colors,
            must_exclude: ColorSet::empty(),
        }
    }

    pub fn to_predicate(self) -> Predicate {
        let include = self.must_include.iter().map(Predicate::has_color);
        let exclude = self.must_exclude.iter().map(Predicate::lacks_color);
        Predicate::all(include.chain(exclude))
    }
}
