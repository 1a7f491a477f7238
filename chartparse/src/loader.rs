#![deny(warnings)]

//! Text notation for grammars.
//!
//! Rules are written as `("S", "NP VP | S Conjunction S")`: alternatives are
//! separated by `|`, symbols by whitespace. An empty alternative is an empty
//! right-hand side. Lexicon rows look like `("Article", "the | a | an")`.
//!
//! The probabilistic variant used for CNF grammars suffixes every
//! alternative with its probability: `("S", "NP VP [0.9] | VP NP [0.1]")`,
//! `("N", "man [0.4] | saw [0.6]")`.

use crate::cyk::{CnfGrammar, CnfGrammarBuilder};
use crate::error::GrammarError;
use crate::grammar::{Grammar, GrammarBuilder};

/// Split `"B C | D E"` into `[["B", "C"], ["D", "E"]]`.
pub fn alternatives(rhs: &str) -> Vec<Vec<String>> {
    rhs.split('|')
        .map(|alt| alt.split_whitespace().map(String::from).collect())
        .collect()
}

/// Split `"the | a | an"` into `["the", "a", "an"]`.
pub fn words(rhs: &str) -> Vec<String> {
    rhs.split('|').map(|w| w.trim().to_string()).collect()
}

pub fn grammar(name: &str, rules: &[(&str, &str)], lexicon: &[(&str, &str)])
        -> Result<Grammar, GrammarError> {
    let mut gb = GrammarBuilder::default();
    for (lhs, rhs) in rules {
        for alt in alternatives(rhs) {
            gb.add_rule(lhs, &alt);
        }
    }
    for (cat, rhs) in lexicon {
        gb.add_words(cat, &words(rhs));
    }
    gb.into_grammar(name)
}

// "NP VP [0.6]" -> ("NP VP", 0.6)
fn split_prob<'a>(lhs: &str, alt: &'a str) -> Result<(&'a str, f64), GrammarError> {
    let alt = alt.trim();
    let missing = || GrammarError::MissingProbability {
        lhs: lhs.to_string(),
        alternative: alt.to_string(),
    };
    let body = alt.strip_suffix(']').ok_or_else(missing)?;
    let (body, value) = body.rsplit_once('[').ok_or_else(missing)?;
    let prob = value.trim().parse::<f64>().map_err(|_| GrammarError::BadProbability {
        lhs: lhs.to_string(),
        value: value.trim().to_string(),
    })?;
    Ok((body.trim(), prob))
}

pub fn cnf_grammar(start: &str, rules: &[(&str, &str)], lexicon: &[(&str, &str)])
        -> Result<CnfGrammar, GrammarError> {
    let mut gb = CnfGrammarBuilder::default();
    for (lhs, rhs) in rules {
        for alt in rhs.split('|') {
            let (body, prob) = split_prob(lhs, alt)?;
            gb.add_rule(lhs, &body.split_whitespace().collect::<Vec<_>>(), prob);
        }
    }
    for (cat, rhs) in lexicon {
        for alt in rhs.split('|') {
            let (word, prob) = split_prob(cat, alt)?;
            gb.add_word(cat, word, prob);
        }
    }
    gb.into_grammar(start)
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{alternatives, cnf_grammar, grammar, words};
    use crate::error::GrammarError;

    #[test]
    fn split_notation() {
        assert_eq!(alternatives("B C | D E"), vec![vec!["B", "C"], vec!["D", "E"]]);
        assert_eq!(alternatives("B |"), vec![vec!["B"], vec![]]);
        assert_eq!(words("the | a | an"), vec!["the", "a", "an"]);
    }

    #[test]
    fn load_grammar() {
        let g = grammar("E_NP_",
            &[("NP", "Adj NP | N")],
            &[("Adj", "happy | handsome | hairy"), ("N", "man")],
        ).unwrap();
        assert_eq!(g.rewrites_for("NP").len(), 2);
        assert!(g.isa("hairy", "Adj"));
        assert!(g.isa("man", "N"));
    }

    #[test]
    fn load_grammar_errors() {
        let g = grammar("bad", &[], &[("N", "man | ")]);
        assert_eq!(g.unwrap_err(), GrammarError::EmptyWord { category: "N".to_string() });
    }

    #[test]
    fn load_cnf_grammar() {
        let g = cnf_grammar("S",
            &[("S", "NP VP [0.9] | VP NP [0.1]")],
            &[("NP", "he [0.5] | she [0.5]"), ("VP", "runs [1.0]")],
        ).unwrap();
        assert_eq!(g.start(), "S");
        assert_eq!(g.cnf_rules().collect::<Vec<_>>(), vec![
            ("S", "NP", "VP", 0.9),
            ("S", "VP", "NP", 0.1),
        ]);
        assert_eq!(g.categories("she"), &[("NP".to_string(), 0.5)]);
    }

    #[test]
    fn load_cnf_errors() {
        let g = cnf_grammar("S", &[("S", "NP VP")], &[]);
        assert_eq!(g.unwrap_err(), GrammarError::MissingProbability {
            lhs: "S".to_string(),
            alternative: "NP VP".to_string(),
        });
        let g = cnf_grammar("S", &[("S", "NP VP [high]")], &[]);
        assert_eq!(g.unwrap_err(), GrammarError::BadProbability {
            lhs: "S".to_string(),
            value: "high".to_string(),
        });
        let g = cnf_grammar("S", &[("S", "NP VP [1.5]")], &[]);
        assert!(matches!(g.unwrap_err(), GrammarError::BadProbability { .. }));
        let g = cnf_grammar("S", &[("S", "NP VP PP [0.5]")], &[]);
        assert!(matches!(g.unwrap_err(), GrammarError::NotBinary { .. }));
    }
}
