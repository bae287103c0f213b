//! Query tree produced by the parser.
//!
//! Leaves hold resolved predicates; logic nodes join two subtrees with AND or OR.
//! The tree is immutable once built.

use std::fmt;

use crate::predicate::Predicate;
use crate::ql::Keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::And => "And",
            Combinator::Or => "Or",
        }
    }
}

impl From<Keyword> for Combinator {
    fn from(keyword: Keyword) -> Self {
        match keyword {
            Keyword::And => Combinator::And,
            Keyword::Or => Combinator::Or,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Predicate),
    Logic {
        combinator: Combinator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(predicate: Predicate) -> Self {
        Node::Leaf(predicate)
    }

    pub fn logic(combinator: Combinator, left: Node, right: Node) -> Self {
        Node::Logic {
            combinator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Compiles this subtree into a single predicate.
    pub fn predicate(&self) -> Predicate {
        match self {
            Node::Leaf(predicate) => predicate.clone(),
            Node::Logic {
                combinator,
                left,
                right,
            } => {
                let operands = [left.predicate(), right.predicate()];
                match combinator {
                    Combinator::And => Predicate::all(operands),
                    Combinator::Or => Predicate::any(operands),
                }
            }
        }
    }

    fn dump(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Node::Leaf(predicate) => {
                out.push_str(&format!("{indent}Leaf {predicate}\n"));
            }
            Node::Logic {
                combinator,
                left,
                right,
            } => {
                out.push_str(&format!("{indent}{combinator}\n"));
                left.dump(out, depth + 1);
                right.dump(out, depth + 1);
            }
        }
    }
}

/// A parsed query. An empty query has no root and matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    root: Option<Node>,
}

impl Query {
    pub fn new(root: Option<Node>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn predicate(&self) -> Predicate {
        self.root
            .as_ref()
            .map_or(Predicate::Always, Node::predicate)
    }

    /// Indented tree dump, one node per line.
    pub fn format_tree(&self) -> String {
        let mut out = String::from("Query\n");
        if let Some(root) = &self.root {
            root.dump(&mut out, 1);
        }
        out
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_tree())
    }
}
