//! Compiled predicates.
//!
//! A [`Predicate`] is plain data: record stores translate it into their own query form,
//! and [`Predicate::matches`] evaluates it directly against a [`Record`].

use std::fmt;

use cardql_core::{Color, Record};
use serde::{Deserialize, Serialize};

use crate::ql::Operator;

/// A single condition over one column of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Case-insensitive substring match.
    ContainsFold { column: String, needle: String },
    /// Numeric comparison `record[column] <op> value`.
    Compare {
        column: String,
        op: Operator,
        value: f64,
    },
    HasColor(Color),
    LacksColor(Color),
}

impl Condition {
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Condition::ContainsFold { column, needle } => record
                .text(column)
                .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase())),
            Condition::Compare { column, op, value } => record
                .number(column)
                .is_some_and(|number| op.compare(number, *value)),
            Condition::HasColor(color) => record.colors().contains(*color),
            Condition::LacksColor(color) => !record.colors().contains(*color),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::ContainsFold { column, needle } => write!(f, "{column} ~ {needle:?}"),
            Condition::Compare { column, op, value } => write!(f, "{column} {op} {value}"),
            Condition::HasColor(color) => write!(f, "colors has {color}"),
            Condition::LacksColor(color) => write!(f, "colors lacks {color}"),
        }
    }
}

/// Boolean combination of conditions.
///
/// Build combinations through [`Predicate::all`] and [`Predicate::any`], which keep the tree
/// flat: nested combinators of the same kind are spliced in, and `Always` is dropped from
/// conjunctions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Matches every record.
    Always,
    Condition(Condition),
    And(Vec<Predicate>),
    /// Matches no record when empty.
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn contains_fold(column: impl Into<String>, needle: impl Into<String>) -> Self {
        Predicate::Condition(Condition::ContainsFold {
            column: column.into(),
            needle: needle.into(),
        })
    }

    pub fn compare(column: impl Into<String>, op: Operator, value: f64) -> Self {
        Predicate::Condition(Condition::Compare {
            column: column.into(),
            op,
            value,
        })
    }

    pub fn has_color(color: Color) -> Self {
        Predicate::Condition(Condition::HasColor(color))
    }

    pub fn lacks_color(color: Color) -> Self {
        Predicate::Condition(Condition::LacksColor(color))
    }

    /// Conjunction. Empty input yields `Always`, a single predicate is returned as is.
    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut parts = Vec::new();
        for predicate in predicates {
            match predicate {
                Predicate::Always => {}
                Predicate::And(inner) => parts.extend(inner),
                other => parts.push(other),
            }
        }
        match parts.len() {
            0 => Predicate::Always,
            1 => parts.remove(0),
            _ => Predicate::And(parts),
        }
    }

    /// Disjunction. Any `Always` operand makes the whole disjunction `Always`.
    pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut parts = Vec::new();
        for predicate in predicates {
            match predicate {
                Predicate::Always => return Predicate::Always,
                Predicate::Or(inner) => parts.extend(inner),
                other => parts.push(other),
            }
        }
        if parts.len() == 1 {
            return parts.remove(0);
        }
        Predicate::Or(parts)
    }

    pub fn and(self, other: Predicate) -> Self {
        Predicate::all([self, other])
    }

    pub fn or(self, other: Predicate) -> Self {
        Predicate::any([self, other])
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Condition(condition) => condition.matches(record),
            Predicate::And(parts) => parts.iter().all(|p| p.matches(record)),
            Predicate::Or(parts) => parts.iter().any(|p| p.matches(record)),
        }
    }
}

impl From<Condition> for Predicate {
    fn from(condition: Condition) -> Self {
        Predicate::Condition(condition)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Always => f.write_str("always"),
            Predicate::Condition(condition) => write!(f, "{condition}"),
            Predicate::And(parts) => write_joined(f, parts, "AND"),
            Predicate::Or(parts) if parts.is_empty() => f.write_str("never"),
            Predicate::Or(parts) => write_joined(f, parts, "OR"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Predicate], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, " {sep} ")?;
        }
        write!(f, "{part}")?;
    }
    f.write_str(")")
}
