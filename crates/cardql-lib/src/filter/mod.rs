//! Field filters: how a `field OP value` triple becomes a predicate.
//!
//! A [`FieldFilter`] owns a name, optional aliases, and one handler per supported
//! operator. Handlers are pure functions of the literal value.

mod colors;
mod defaults;


use std::fmt;

use cardql_core::ColorSet;
use indexmap::IndexMap;

use crate::error::ValueError;
use crate::predicate::Predicate;
use crate::ql::Operator;

pub use colors::ColorQuery;
pub use defaults::default_filters;

/// Turns a literal value into a predicate fragment.
pub type Handler = Box<dyn Fn(&str) -> Result<Predicate, ValueError> + Send + Sync>;

pub struct FieldFilter {
    name: String,
    aliases: Vec<String>,
    handlers: IndexMap<Operator, Handler>,
}

impl FieldFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            handlers: IndexMap::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Builder form of [`FieldFilter::register`].
    pub fn on<F>(mut self, op: Operator, handler: F) -> Self
    where
        F: Fn(&str) -> Result<Predicate, ValueError> + Send + Sync + 'static,
    {
        self.register(op, handler);
        self
    }

    /// Sets the handler for `op`, replacing any previous one.
    pub fn register<F>(&mut self, op: Operator, handler: F)
    where
        F: Fn(&str) -> Result<Predicate, ValueError> + Send + Sync + 'static,
    {
        self.handlers.insert(op, Box::new(handler));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Operators in registration order.
    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.handlers.keys().copied()
    }

    /// Exact, case-sensitive match against the name or any alias.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }

    pub fn handler(&self, op: Operator) -> Option<&Handler> {
        self.handlers.get(&op)
    }

    /// Runs the handler for `op`; `None` if the operator is not supported.
    pub fn handle(&self, op: Operator, value: &str) -> Option<Result<Predicate, ValueError>> {
        self.handler(op).map(|handler| handler(value))
    }
}

impl fmt::Debug for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldFilter")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("operators", &self.operators().collect::<Vec<_>>())
            .finish()
    }
}

/// Wraps a handler taking a number, parsing the literal as a float first.
pub fn number_handler<F>(handler: F) -> impl Fn(&str) -> Result<Predicate, ValueError>
where
    F: Fn(f64) -> Predicate,
{
    move |value: &str| {
        let number: f64 = value.parse()?;
        Ok(handler(number))
    }
}

/// Wraps a handler taking a color set, parsing the literal as color letters first.
pub fn colors_handler<F>(handler: F) -> impl Fn(&str) -> Result<Predicate, ValueError>
where
    F: Fn(ColorSet) -> Predicate,
{
    move |value: &str| {
        let colors: ColorSet = value.parse()?;
        Ok(handler(colors))
    }
}
