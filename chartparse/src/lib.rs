#![deny(warnings)]

mod error;
pub use crate::error::GrammarError;

mod grammar;
pub use crate::grammar::{Grammar, GrammarBuilder};

mod edge;
pub use crate::edge::{Edge, Found};

mod chart;
pub use crate::chart::{Chart, EdgeSet};

mod parser;
pub use crate::parser::{ChartParser, DEFAULT_START};

mod cyk;
pub use crate::cyk::{cyk_parse, CnfGrammar, CnfGrammarBuilder, CnfRule, ProbTable};

mod trees;
pub use crate::trees::Tree;

pub mod loader;
pub mod grammars;

mod generate;
pub use crate::generate::{generate_bounded, generate_random, MAX_DEPTH};

#[cfg(test)]
mod parser_test;
