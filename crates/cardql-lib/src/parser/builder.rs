//! Collects field expressions and the keywords between them, then folds them into a tree.

use serde::Deserialize;

use crate::ast::{Combinator, Node};

/// How a chain of field expressions joined by AND/OR is grouped.
///
/// For `a OR b AND c`:
/// - `LeftToRight` gives `(a OR b) AND c`
/// - `Legacy` gives `a AND (b OR c)`: the first expression is always ANDed with the
///   right-nested rest, and each keyword joins the expression after it to everything
///   that follows. The end of the chain counts as always true, so an OR before the last
///   expression swallows it: `a OR b` is just `a`, and `a AND b OR c` is `a AND b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chaining {
    #[default]
    LeftToRight,
    Legacy,
}

#[derive(Debug)]
struct Link {
    /// Keyword seen before this expression. Ignored for the first link.
    combinator: Combinator,
    node: Node,
}

#[derive(Debug, Default)]
pub(super) struct ChainBuilder {
    links: Vec<Link>,
    pending: Option<Combinator>,
}

impl ChainBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Records a keyword. The last keyword before an expression wins.
    pub(super) fn keyword(&mut self, combinator: Combinator) {
        self.pending = Some(combinator);
    }

    /// Appends an expression, joined to the previous one by the pending keyword (AND if none).
    pub(super) fn leaf(&mut self, node: Node) {
        let combinator = self.pending.take().unwrap_or(Combinator::And);
        self.links.push(Link { combinator, node });
    }

    pub(super) fn len(&self) -> usize {
        self.links.len()
    }

    /// Folds the chain. A keyword with no expression after it is dropped.
    pub(super) fn finish(self, chaining: Chaining) -> Option<Node> {
        match chaining {
            Chaining::LeftToRight => fold_left(self.links),
            Chaining::Legacy => fold_legacy(self.links),
        }
    }
}

fn fold_left(links: Vec<Link>) -> Option<Node> {
    let mut links = links.into_iter();
    let first = links.next()?;
    Some(links.fold(first.node, |acc, link| {
        Node::logic(link.combinator, acc, link.node)
    }))
}

/// Right-nests every link after the first under an always-true tail, then ANDs the first
/// expression onto the result. `None` stands for the always-true tail: `x OR true` stays
/// `None` and `x AND true` collapses to `x`.
fn fold_legacy(links: Vec<Link>) -> Option<Node> {
    let mut links = links.into_iter();
    let first = links.next()?;

    let tail = links.rev().fold(None, |tail, link| match (link.combinator, tail) {
        (Combinator::Or, None) => None,
        (Combinator::And, None) => Some(link.node),
        (combinator, Some(rest)) => Some(Node::logic(combinator, link.node, rest)),
    });

    Some(match tail {
        Some(rest) => Node::logic(Combinator::And, first.node, rest),
        None => first.node,
    })
}
