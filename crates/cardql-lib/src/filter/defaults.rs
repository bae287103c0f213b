//! Fields every default parser knows about.

use cardql_core::columns;

use super::colors::ColorQuery;
use super::{FieldFilter, colors_handler, number_handler};
use crate::predicate::Predicate;
use crate::ql::Operator;

const ORDERING: [Operator; 5] = [
    Operator::Eq,
    Operator::Lt,
    Operator::Le,
    Operator::Gt,
    Operator::Ge,
];

/// `name`, `oracle` (`o`, `text`), `cmc` and `colors` (`c`), in that order.
pub fn default_filters() -> Vec<FieldFilter> {
    vec![name(), oracle(), cmc(), colors()]
}

fn name() -> FieldFilter {
    FieldFilter::new("name").on(Operator::Eq, |value| {
        Ok(Predicate::contains_fold(columns::NAME, value))
    })
}

fn oracle() -> FieldFilter {
    FieldFilter::new("oracle")
        .alias("o")
        .alias("text")
        .on(Operator::Eq, |value| {
            Ok(Predicate::contains_fold(columns::ORACLE_TEXT, value))
        })
}

fn cmc() -> FieldFilter {
    ORDERING.into_iter().fold(FieldFilter::new("cmc"), |filter, op| {
        filter.on(
            op,
            number_handler(move |value| Predicate::compare(columns::CMC, op, value)),
        )
    })
}

fn colors() -> FieldFilter {
    FieldFilter::new("colors")
        .alias("c")
        .on(
            Operator::Eq,
            colors_handler(|q| ColorQuery::exactly(q).to_predicate()),
        )
        .on(
            Operator::Lt,
            colors_handler(|q| ColorQuery::within(q).to_predicate()),
        )
        .on(
            Operator::Le,
            colors_handler(|q| ColorQuery::within(q).to_predicate()),
        )
        .on(
            Operator::Gt,
            colors_handler(|q| ColorQuery::including(q).to_predicate()),
        )
        .on(
            Operator::Ge,
            colors_handler(|q| ColorQuery::including(q).to_predicate()),
        )
}
