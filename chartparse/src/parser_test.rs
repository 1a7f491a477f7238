#![deny(warnings)]

use crate::edge::Edge;
use crate::grammar::{Grammar, GrammarBuilder};
use crate::grammars;
use crate::parser::ChartParser;
use crate::trees::Tree;
use std::collections::HashSet;
use std::rc::Rc;


fn words(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

// S -> NP VP, NP -> Art N, VP -> V NP
fn grammar_saw() -> Grammar {
    GrammarBuilder::default()
        .rule("S", &["NP", "VP"])
        .rule("NP", &["Art", "N"])
        .rule("VP", &["V", "NP"])
        .words("Art", &["the", "a"])
        .words("N", &["man", "saw"])
        .words("V", &["saw"])
        .into_grammar("saw")
        .expect("Bad grammar")
}

fn check_trees(parses: &[Rc<Edge>], expected: Vec<&str>) {
    assert_eq!(parses.len(), expected.len());
    let mut expect: HashSet<&str> = expected.into_iter().collect();
    for p in parses {
        let teststr = p.tree().to_string();
        eprintln!("{}", teststr);
        assert!(expect.remove(teststr.as_str()), "unexpected {}", teststr);
    }
    assert_eq!(0, expect.len());
}

// Every node must be a grammar rule and every leaf a lexicon entry or literal
fn check_sound(g: &Grammar, tree: &Tree) {
    match tree {
        Tree::Leaf(cat, word) => assert!(g.matches(word, cat), "{} {}", cat, word),
        Tree::Node(lhs, subn) => {
            let rhs: Vec<String> = subn.iter().map(|n| n.label().to_string()).collect();
            assert!(g.rewrites_for(lhs).contains(&rhs), "{} -> {:?}", lhs, rhs);
            for n in subn {
                check_sound(g, n);
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn saw_as_verb_and_noun() {
    let g = grammar_saw();
    let input = words("the man saw a saw");
    let parses = ChartParser::new(&g).parses(&input, "S");
    check_trees(&parses, vec![
        "[S [NP [Art the] [N man]] [VP [V saw] [NP [Art a] [N saw]]]]",
    ]);
    let tree = parses[0].tree();
    assert_eq!(tree.leaves(), input);
    assert_eq!((parses[0].start, parses[0].end), (0, 5));
}

#[test]
fn scrambled_sentence() {
    let g = grammar_saw();
    assert!(ChartParser::new(&g).parses(&words("man the saw"), "S").is_empty());
}

#[test]
fn unknown_word() {
    let g = grammar_saw();
    let parser = ChartParser::new(&g);
    assert!(parser.parses(&words("the wumpus saw a saw"), "S").is_empty());
    assert!(parser.parses(&words("the man saw a saw today"), "S").is_empty());
}

#[test]
fn undefined_start_symbol() {
    let g = grammar_saw();
    let parser = ChartParser::new(&g);
    assert_eq!(parser.grammar().name(), "saw");
    assert!(parser.parses(&words("the man saw a saw"), "Sentence").is_empty());
    // complete NPs are found when asked for
    assert_eq!(parser.parses(&words("a saw"), "NP").len(), 1);
}

#[test]
fn e0_stench() {
    let g = grammars::e0();
    let parses = ChartParser::new(&g).parses(&words("the stench is in 2 2"), "S");
    check_trees(&parses, vec![
        "[S [NP [Article the] [Noun stench]] [VP [VP [Verb is]] [PP [Preposition in] [NP [Digit 2] [Digit 2]]]]]",
    ]);
}

#[test]
fn e0_attachment_ambiguity() {
    let g = grammars::e0();
    let input = words("I shoot the wumpus near the pit");
    let parses = ChartParser::new(&g).parses(&input, "S");
    check_trees(&parses, vec![
        "[S [NP [Pronoun I]] [VP [VP [VP [Verb shoot]] [NP [Article the] [Noun wumpus]]] [PP [Preposition near] [NP [Article the] [Noun pit]]]]]",
        "[S [NP [Pronoun I]] [VP [VP [Verb shoot]] [NP [NP [Article the] [Noun wumpus]] [PP [Preposition near] [NP [Article the] [Noun pit]]]]]]",
    ]);
    for p in &parses {
        let tree = p.tree();
        assert_eq!(tree.leaves(), input);
        check_sound(&g, &tree);
    }
}

#[test]
fn same_word_two_categories() {
    let g = GrammarBuilder::default()
        .rule("S", &["NP"])
        .rule("NP", &["N"])
        .rule("NP", &["Pronoun"])
        .words("N", &["it"])
        .words("Pronoun", &["it"])
        .into_grammar("it")
        .unwrap();
    let parses = ChartParser::new(&g).parses(&words("it"), "S");
    check_trees(&parses, vec![
        "[S [NP [N it]]]",
        "[S [NP [Pronoun it]]]",
    ]);
}

#[test]
fn right_recursion() {
    let g = grammars::e_np_();
    let parses = ChartParser::new(&g).parses(&words("happy handsome hairy man"), "NP");
    check_trees(&parses, vec![
        "[NP [Adj happy] [NP [Adj handsome] [NP [Adj hairy] [NP [N man]]]]]",
    ]);
}

#[test]
fn left_recursion() {
    // S -> S + N | N
    let g = GrammarBuilder::default()
        .rule("S", &["S", "+", "N"])
        .rule("S", &["N"])
        .words("N", &["1", "2", "3"])
        .into_grammar("sum")
        .unwrap();
    let parses = ChartParser::new(&g).parses(&words("1 + 2 + 3"), "S");
    check_trees(&parses, vec![
        "[S [S [S [N 1]] [+ +] [N 2]] [+ +] [N 3]]",
    ]);
    assert!(ChartParser::new(&g).parses(&words("1 + + 3"), "S").is_empty());
}

#[test]
fn grammar_ambiguous() {
    // S -> S S | b
    let g = GrammarBuilder::default()
        .rule("S", &["S", "S"])
        .rule("S", &["b"])
        .into_grammar("bbb")
        .unwrap();
    let parses = ChartParser::new(&g).parses(&words("b b b"), "S");
    check_trees(&parses, vec![
        "[S [S [S [b b]] [S [b b]]] [S [b b]]]",
        "[S [S [b b]] [S [S [b b]] [S [b b]]]]",
    ]);
}

#[test]
fn grammar_ambiguous_epsilon() {
    // S -> S S X | b
    // X -> <e>
    let g = GrammarBuilder::default()
        .rule("S", &["S", "S", "X"])
        .rule::<&str>("X", &[])
        .rule("S", &["b"])
        .into_grammar("bbbx")
        .unwrap();
    let parses = ChartParser::new(&g).parses(&words("b b b"), "S");
    check_trees(&parses, vec![
        "[S [S [S [b b]] [S [b b]] [X]] [S [b b]] [X]]",
        "[S [S [b b]] [S [S [b b]] [S [b b]] [X]] [X]]",
    ]);
}

#[test]
fn epsilon_completed_before_needed() {
    // The A edge expecting X shows up after X was completed at 0
    let g = GrammarBuilder::default()
        .rule("S", &["X", "A"])
        .rule("A", &["X", "b"])
        .rule::<&str>("X", &[])
        .into_grammar("late-x")
        .unwrap();
    let parses = ChartParser::new(&g).parses(&words("b"), "S");
    check_trees(&parses, vec!["[S [X] [A [X] [b b]]]"]);
}

#[test]
fn empty_input() {
    let g = grammar_saw();
    let none: Vec<&str> = Vec::new();
    let chart = ChartParser::new(&g).parse(&none, "S");
    assert_eq!(chart.len(), 1);
    assert!(chart.complete_parses("S").is_empty());

    let g = GrammarBuilder::default()
        .rule::<&str>("S", &[])
        .into_grammar("nothing")
        .unwrap();
    assert_eq!(ChartParser::new(&g).parses(&none, "S").len(), 1);
}

#[test]
fn chart_layout() {
    let g = grammar_saw();
    let input = words("the man saw a saw");
    let chart = ChartParser::new(&g).parse(&input, "S");
    assert_eq!(chart.len(), input.len() + 1);
    // seed edge first, then the prediction of S
    assert_eq!(chart[0][0].to_string(), "(0 - 0) S_ -> \u{00b7} S");
    assert_eq!(chart[0][1].to_string(), "(0 - 0) S -> \u{00b7} NP VP");
    for (idx, slot) in chart.slots().enumerate() {
        assert!(slot.iter().all(|edge| edge.end == idx && edge.start <= edge.end));
    }
    // the seed completes over the whole sentence
    assert!(chart[5].iter().any(|e| e.lhs == "S_" && e.is_complete()));
}

#[test]
fn no_duplicate_edges() {
    let g = grammars::e0();
    let chart = ChartParser::new(&g).parse(&words("I shoot the wumpus near the pit"), "S");
    for slot in chart.slots() {
        let uniq: HashSet<&Rc<Edge>> = slot.iter().collect();
        assert_eq!(uniq.len(), slot.len());
    }
    assert!(chart.num_edges() > 0);
}

#[test]
fn deterministic() {
    let g = grammars::e0();
    let input = words("I see the wumpus near the pit and you feel a breeze");
    let parser = ChartParser::new(&g);
    let first: Vec<Tree> = parser.parses(&input, "S").iter().map(|p| p.tree()).collect();
    let second: Vec<Tree> = parser.parses(&input, "S").iter().map(|p| p.tree()).collect();
    assert!(!first.is_empty());
    assert_eq!(first, second);
    // tracing only prints, it doesn't change the outcome
    let traced: Vec<Tree> = ChartParser::new(&g).trace(true)
        .parses(&input, "S").iter().map(|p| p.tree()).collect();
    assert_eq!(first, traced);
}

#[test]
fn shared_grammar() {
    let g = grammars::e_();
    let sentences = ["I saw the man", "you liked a shoelace", "it feel table"];
    std::thread::scope(|s| {
        let handles: Vec<_> = sentences.iter().map(|sentence| {
            let g = &g;
            s.spawn(move || ChartParser::new(g).parses(&words(sentence), "S").len())
        }).collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![1, 1, 0]);
    });
}
