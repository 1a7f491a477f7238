#![deny(warnings)]

use crate::error::GrammarError;
use crate::trees::Tree;
use rustc_hash::FxHashMap;

/// Binary rule `lhs -> left right` with its probability.
#[derive(Clone, Debug, PartialEq)]
pub struct CnfRule {
    pub lhs: String,
    pub left: String,
    pub right: String,
    pub prob: f64,
}

/// A probabilistic grammar in Chomsky Normal Form: only binary rules over
/// nonterminals, and lexical entries `category -> word`.
#[derive(Clone, Debug)]
pub struct CnfGrammar {
    start: String,
    rules: Vec<CnfRule>,
    // word -> (category, probability)
    categories: FxHashMap<String, Vec<(String, f64)>>,
}

#[derive(Default)]
pub struct CnfGrammarBuilder {
    rules: Vec<CnfRule>,
    lexicon: Vec<(String, String, f64)>,
    error: Option<GrammarError>,
}

#[derive(Clone, Debug, PartialEq)]
enum Back {
    Word(String),
    Split { len1: usize, left: String, right: String },
}

#[derive(Clone, Debug, PartialEq)]
struct Cell {
    prob: f64,
    back: Back,
}

/// Best probability per (symbol, start, length). Missing cells are 0.
#[derive(Clone, Debug)]
pub struct ProbTable {
    num_words: usize,
    cells: FxHashMap<(usize, usize), FxHashMap<String, Cell>>,
}

///////////////////////////////////////////////////////////////////////////////

impl CnfGrammar {
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Categories `word` belongs to, with their probabilities.
    pub fn categories(&self, word: &str) -> &[(String, f64)] {
        match self.categories.get(word) {
            Some(cats) => cats,
            None => &[],
        }
    }

    pub fn rules(&self) -> &[CnfRule] {
        &self.rules
    }

    /// Binary rules as `(X, Y, Z, p)` tuples.
    pub fn cnf_rules(&self) -> impl Iterator<Item=(&str, &str, &str, f64)> {
        self.rules.iter()
            .map(|r| (r.lhs.as_str(), r.left.as_str(), r.right.as_str(), r.prob))
    }
}

fn check_prob(lhs: &str, prob: f64) -> Result<(), GrammarError> {
    if prob.is_finite() && (0.0..=1.0).contains(&prob) {
        Ok(())
    } else {
        Err(GrammarError::BadProbability { lhs: lhs.to_string(), value: prob.to_string() })
    }
}

impl CnfGrammarBuilder {
    fn fail(&mut self, err: GrammarError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn _add_rule<S: AsRef<str>>(&mut self, lhs: &str, rhs: &[S], prob: f64) {
        let rhs: Vec<String> = rhs.iter().map(|s| s.as_ref().trim().to_string()).collect();
        let lhs = lhs.trim();
        if lhs.is_empty() || rhs.iter().any(|s| s.is_empty()) {
            self.fail(GrammarError::EmptySymbol {
                context: format!("{} -> {}", lhs, rhs.join(" "))
            });
            return;
        }
        if let Err(e) = check_prob(lhs, prob) {
            self.fail(e);
            return;
        }
        if rhs.len() != 2 {
            self.fail(GrammarError::NotBinary { lhs: lhs.to_string(), rhs });
            return;
        }
        self.rules.push(CnfRule {
            lhs: lhs.to_string(),
            left: rhs[0].clone(),
            right: rhs[1].clone(),
            prob,
        });
    }

    fn _add_word(&mut self, cat: &str, word: &str, prob: f64) {
        let (cat, word) = (cat.trim(), word.trim());
        if cat.is_empty() {
            self.fail(GrammarError::EmptySymbol { context: "lexicon".to_string() });
        } else if word.is_empty() {
            self.fail(GrammarError::EmptyWord { category: cat.to_string() });
        } else if let Err(e) = check_prob(cat, prob) {
            self.fail(e);
        } else {
            self.lexicon.push((cat.to_string(), word.to_string(), prob));
        }
    }

    pub fn rule<S: AsRef<str>>(mut self, lhs: &str, rhs: &[S], prob: f64) -> Self {
        self._add_rule(lhs, rhs, prob);
        self
    }

    pub fn word(mut self, cat: &str, word: &str, prob: f64) -> Self {
        self._add_word(cat, word, prob);
        self
    }

    // Non chaining versions to be invoked in loops.

    pub fn add_rule<S: AsRef<str>>(&mut self, lhs: &str, rhs: &[S], prob: f64) {
        self._add_rule(lhs, rhs, prob)
    }

    pub fn add_word(&mut self, cat: &str, word: &str, prob: f64) {
        self._add_word(cat, word, prob)
    }

    pub fn into_grammar(self, start: impl Into<String>) -> Result<CnfGrammar, GrammarError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut categories: FxHashMap<String, Vec<(String, f64)>> = FxHashMap::default();
        for (cat, word, prob) in self.lexicon {
            categories.entry(word).or_default().push((cat, prob));
        }
        Ok(CnfGrammar { start: start.into(), rules: self.rules, categories })
    }
}

///////////////////////////////////////////////////////////////////////////////

impl ProbTable {
    fn new(num_words: usize) -> ProbTable {
        ProbTable { num_words, cells: FxHashMap::default() }
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Probability of the best `sym` derivation over `[start, start + len)`.
    pub fn get(&self, sym: &str, start: usize, len: usize) -> f64 {
        self.cell(sym, start, len).map_or(0.0, |cell| cell.prob)
    }

    /// Probability of the best `sym` derivation over the whole input.
    pub fn best(&self, sym: &str) -> f64 {
        self.get(sym, 0, self.num_words)
    }

    /// Number of cells holding a derivation.
    pub fn len(&self) -> usize {
        self.cells.values().map(|syms| syms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-zero cells as `(symbol, start, length, probability)`, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item=(&str, usize, usize, f64)> {
        self.cells.iter().flat_map(|(&(start, len), syms)| {
            syms.iter().map(move |(sym, cell)| (sym.as_str(), start, len, cell.prob))
        })
    }

    /// Rebuild the best derivation of `sym` over `[start, start + len)`.
    pub fn tree(&self, sym: &str, start: usize, len: usize) -> Option<Tree> {
        match &self.cell(sym, start, len)?.back {
            Back::Word(word) => Some(Tree::Leaf(sym.to_string(), word.clone())),
            Back::Split { len1, left, right } => {
                let left = self.tree(left, start, *len1)?;
                let right = self.tree(right, start + len1, len - len1)?;
                Some(Tree::Node(sym.to_string(), vec![left, right]))
            }
        }
    }

    fn cell(&self, sym: &str, start: usize, len: usize) -> Option<&Cell> {
        self.cells.get(&(start, len)).and_then(|syms| syms.get(sym))
    }

    // Keep the max. Backpointer is only built when the cell improves.
    fn update(&mut self, sym: &str, start: usize, len: usize, prob: f64,
              back: impl FnOnce() -> Back) {
        if prob <= self.get(sym, start, len) {
            return;
        }
        self.cells.entry((start, len)).or_default()
            .insert(sym.to_string(), Cell { prob, back: back() });
    }
}

/// Probabilistic CYK: fill the best probability of every symbol over every
/// span of `words`, shortest spans first.
pub fn cyk_parse<S: AsRef<str>>(words: &[S], grammar: &CnfGrammar) -> ProbTable {
    let n = words.len();
    let mut table = ProbTable::new(n);
    // Lexical rules for each word
    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        for (cat, prob) in grammar.categories(word) {
            table.update(cat, i, 1, *prob, || Back::Word(word.to_string()));
        }
    }
    // Combine first and second parts of right-hand sides, short to long
    for length in 2..=n {
        for start in 0..=(n - length) {
            for len1 in 1..length {
                let len2 = length - len1;
                for rule in grammar.rules() {
                    let prob = table.get(&rule.left, start, len1) *
                               table.get(&rule.right, start + len1, len2) *
                               rule.prob;
                    table.update(&rule.lhs, start, length, prob, || Back::Split {
                        len1,
                        left: rule.left.clone(),
                        right: rule.right.clone(),
                    });
                }
            }
        }
    }
    table
}
