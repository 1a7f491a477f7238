#![deny(warnings)]

use thiserror::Error;

/// Errors raised while building a grammar. Parsing itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrammarError {
    #[error("empty symbol name in {context:?}")]
    EmptySymbol { context: String },
    #[error("empty word in lexicon entry for {category}")]
    EmptyWord { category: String },
    #[error("missing probability for {lhs} -> {alternative}")]
    MissingProbability { lhs: String, alternative: String },
    #[error("bad probability {value:?} for {lhs}")]
    BadProbability { lhs: String, value: String },
    #[error("rule is not binary: {lhs} -> {}", rhs.join(" "))]
    NotBinary { lhs: String, rhs: Vec<String> },
}
