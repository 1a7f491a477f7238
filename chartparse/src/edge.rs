#![deny(warnings)]

use crate::trees::Tree;
use std::fmt;
use std::rc::Rc;

/// Something an edge has already matched: a word scanned under a category,
/// or a complete sub-edge.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Found {
    Word { category: String, word: String },
    Edge(Rc<Edge>),
}

/// An Edge is a partial (active) or finished (complete) constituent.
/// It covers input positions `[start, end)`. Two edges are the same chart
/// entry only if all five fields are equal.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
    pub lhs: String,
    pub found: Vec<Found>,
    pub expects: Vec<String>,
}

impl Found {
    fn label(&self) -> &str {
        match self {
            Found::Word { category, .. } => category,
            Found::Edge(edge) => &edge.lhs,
        }
    }
}

impl Edge {
    /// Zero width prediction of `lhs -> rhs` at `pos`.
    pub fn predict(pos: usize, lhs: &str, rhs: &[String]) -> Edge {
        Edge {
            start: pos,
            end: pos,
            lhs: lhs.to_string(),
            found: Vec::new(),
            expects: rhs.to_vec(),
        }
    }

    /// Edge is complete once nothing is left to expect
    pub fn is_complete(&self) -> bool {
        self.expects.is_empty()
    }

    pub fn is_active(&self) -> bool {
        !self.is_complete()
    }

    pub fn next_expected(&self) -> Option<&str> {
        self.expects.first().map(String::as_str)
    }

    /// Advance over `word` scanned as `category`. Edge must be active.
    pub fn scan(&self, category: &str, word: &str) -> Edge {
        debug_assert_eq!(self.next_expected(), Some(category));
        let mut found = self.found.clone();
        found.push(Found::Word {
            category: category.to_string(),
            word: word.to_string(),
        });
        Edge {
            start: self.start,
            end: self.end + 1,
            lhs: self.lhs.clone(),
            found,
            expects: self.expects[1..].to_vec(),
        }
    }

    /// Advance over the complete edge `trigger` which starts where self ends.
    pub fn extend(&self, trigger: &Rc<Edge>) -> Edge {
        debug_assert!(trigger.is_complete());
        debug_assert_eq!(self.end, trigger.start);
        debug_assert_eq!(self.next_expected(), Some(trigger.lhs.as_str()));
        let mut found = self.found.clone();
        found.push(Found::Edge(trigger.clone()));
        Edge {
            start: self.start,
            end: trigger.end,
            lhs: self.lhs.clone(),
            found,
            expects: self.expects[1..].to_vec(),
        }
    }

    /// Words covered by this edge, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        for child in &self.found {
            match child {
                Found::Word { word, .. } => out.push(word),
                Found::Edge(edge) => edge.collect_leaves(out),
            }
        }
    }

    /// Owned tree of the matched part of this edge.
    pub fn tree(&self) -> Tree {
        let children = self.found.iter().map(|child| match child {
            Found::Word { category, word } => Tree::Leaf(category.clone(), word.clone()),
            Found::Edge(edge) => edge.tree(),
        }).collect();
        Tree::Node(self.lhs.clone(), children)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // (start - end) lhs -> found · expects
        write!(f, "({} - {}) {} ->", self.start, self.end, self.lhs)?;
        for sym in self.found.iter().map(Found::label) {
            write!(f, " {}", sym)?;
        }
        write!(f, " \u{00b7}")?;
        for sym in &self.expects {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

///////////////////////////////////////////////////////////////////////////////
