#![deny(warnings)]

use crate::grammar::Grammar;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Rewrites nested deeper than this only take their shallowest alternatives.
pub const MAX_DEPTH: usize = 8;

// Height of the shallowest derivation of each nonterminal that derives
// anything at all. Categories and literals have height 0.
fn min_heights(grammar: &Grammar) -> FxHashMap<&str, usize> {
    let mut heights: FxHashMap<&str, usize> = FxHashMap::default();
    loop {
        let mut changed = false;
        for (lhs, alts) in grammar.rules() {
            let best = alts.iter().filter_map(|rhs| alt_height(grammar, &heights, rhs)).min();
            if let Some(h) = best {
                if heights.get(lhs).is_none_or(|&old| h < old) {
                    heights.insert(lhs, h);
                    changed = true;
                }
            }
        }
        if !changed {
            return heights;
        }
    }
}

fn alt_height(grammar: &Grammar, heights: &FxHashMap<&str, usize>, rhs: &[String]) -> Option<usize> {
    rhs.iter().try_fold(1, |h, sym| if grammar.is_nonterminal(sym) {
        heights.get(sym.as_str()).map(|&sh| h.max(sh + 1))
    } else {
        Some(h)
    })
}

/// Rewrite `start` with random alternatives until only words are left.
/// Categories become a random word of theirs and literals are copied as is.
pub fn generate_random<'a, R>(grammar: &'a Grammar, start: &'a str, rng: &mut R) -> Vec<&'a str>
        where R: Rng + ?Sized {
    generate_bounded(grammar, start, MAX_DEPTH, rng)
}

/// Like `generate_random` but symbols nested `max_depth` rewrites deep only
/// pick among their shallowest alternatives, so output is always finite.
/// Nonterminals that derive no sentence at all are dropped at that depth.
pub fn generate_bounded<'a, R>(grammar: &'a Grammar, start: &'a str, max_depth: usize,
                               rng: &mut R) -> Vec<&'a str>
        where R: Rng + ?Sized {
    let heights = min_heights(grammar);
    let mut words = Vec::new();
    // pending symbols and their depth, next one on top
    let mut stack = vec![(start, 0)];
    while let Some((sym, depth)) = stack.pop() {
        if grammar.is_nonterminal(sym) {
            let alts = grammar.rewrites_for(sym);
            let rhs = if depth < max_depth {
                alts.choose(rng)
            } else {
                let target = heights.get(sym).copied();
                let shallowest: Vec<&Vec<String>> = alts.iter()
                    .filter(|rhs| target.is_some() && alt_height(grammar, &heights, rhs) == target)
                    .collect();
                shallowest.choose(rng).copied()
            };
            if let Some(rhs) = rhs {
                stack.extend(rhs.iter().rev().map(|s| (s.as_str(), depth + 1)));
            }
        } else if grammar.is_category(sym) {
            if let Some(word) = grammar.words_for(sym).choose(rng) {
                words.push(word.as_str());
            }
        } else {
            words.push(sym);
        }
    }
    words
}

///////////////////////////////////////////////////////////////////////////////
