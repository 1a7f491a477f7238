#![deny(warnings)]

//! Stock grammars for tests and the command line tools.

use crate::cyk::CnfGrammar;
use crate::grammar::Grammar;
use crate::loader;

/// The wumpus world fragment of English: 'E0'.
pub fn e0() -> Grammar {
    loader::grammar("E0",
        &[
            ("S", "NP VP | S Conjunction S"),
            ("NP", "Pronoun | Name | Noun | Article Noun | Digit Digit | NP PP | NP RelClause"),
            ("VP", "Verb | VP NP | VP Adjective | VP PP | VP Adverb"),
            ("PP", "Preposition NP"),
            ("RelClause", "That VP"),
        ],
        &[
            ("Noun", "stench | breeze | glitter | nothing | wumpus | pit | pits | gold | east"),
            ("Verb", "is | see | smell | shoot | fell | stinks | go | grab | carry | kill | turn | feel"),
            ("Adjective", "right | left | east | south | back | smelly"),
            ("Adverb", "here | there | nearby | ahead | right | left | east | south | back"),
            ("Pronoun", "me | you | I | it"),
            ("Name", "John | Mary | Boston | Aristotle"),
            ("Article", "the | a | an"),
            ("Preposition", "to | in | on | near"),
            ("Conjunction", "and | or | but"),
            ("Digit", "0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9"),
            ("That", "that"),
        ])
        .expect("Bad E0 Grammar")
}

/// Tiny sentence grammar where 'saw' is both a noun and a verb.
pub fn e_() -> Grammar {
    loader::grammar("E_",
        &[
            ("S", "NP VP"),
            ("NP", "Art N | Pronoun"),
            ("VP", "V NP"),
        ],
        &[
            ("Art", "the | a"),
            ("N", "man | woman | table | shoelace | saw"),
            ("Pronoun", "I | you | it"),
            ("V", "saw | liked | feel"),
        ])
        .expect("Bad E_ Grammar")
}

/// Right recursive noun phrases: 'happy hairy man'.
pub fn e_np_() -> Grammar {
    loader::grammar("E_NP_",
        &[("NP", "Adj NP | N")],
        &[("Adj", "happy | handsome | hairy"), ("N", "man")])
        .expect("Bad E_NP_ Grammar")
}

/// Probabilistic grammar already in Chomsky Normal Form.
pub fn e_prob_chomsky() -> CnfGrammar {
    loader::cnf_grammar("S",
        &[
            ("S", "NP VP [1.0]"),
            ("NP", "Article Noun [0.6] | Adjective Noun [0.4]"),
            ("VP", "Verb NP [0.5] | Verb Adjective [0.5]"),
        ],
        &[
            ("Article", "the [0.5] | a [0.25] | an [0.25]"),
            ("Noun", "robot [0.4] | sheep [0.4] | fence [0.2]"),
            ("Adjective", "good [0.5] | new [0.2] | sad [0.3]"),
            ("Verb", "is [0.5] | say [0.3] | are [0.2]"),
        ])
        .expect("Bad E_Prob_Chomsky Grammar")
}

/// Look a stock grammar up by name.
pub fn by_name(name: &str) -> Option<Grammar> {
    match name {
        "E0" => Some(e0()),
        "E_" => Some(e_()),
        "E_NP_" => Some(e_np_()),
        _ => None,
    }
}
