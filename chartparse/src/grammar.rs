#![deny(warnings)]

use crate::error::GrammarError;
use rustc_hash::FxHashMap;
use std::fmt;

/// A grammar is a set of rewrite rules and a lexicon.
///
/// Rules map a nonterminal to its alternative right-hand sides. The lexicon
/// maps a part of speech to the surface words it covers. Any right-hand side
/// symbol that is neither a rule head nor a lexicon category is a literal
/// token and only matches a word spelled exactly like it.
#[derive(Clone, Debug)]
pub struct Grammar {
    name: String,
    rules: Vec<(String, Vec<Vec<String>>)>,
    rule_index: FxHashMap<String, usize>,
    lexicon: Vec<(String, Vec<String>)>,
    lexicon_index: FxHashMap<String, usize>,
    // word -> parts of speech, derived from the lexicon
    categories: FxHashMap<String, Vec<String>>,
}

#[derive(Default)]
pub struct GrammarBuilder {
    rules: Vec<(String, Vec<Vec<String>>)>,
    lexicon: Vec<(String, Vec<String>)>,
    error: Option<GrammarError>,
}

impl Grammar {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternatives `cat` can be rewritten as. Unknown categories have none.
    pub fn rewrites_for(&self, cat: &str) -> &[Vec<String>] {
        match self.rule_index.get(cat) {
            Some(&idx) => &self.rules[idx].1,
            None => &[],
        }
    }

    /// True iff `word` is registered under part of speech `cat`.
    pub fn isa(&self, word: &str, cat: &str) -> bool {
        self.categories(word).iter().any(|c| c == cat)
    }

    pub fn categories(&self, word: &str) -> &[String] {
        match self.categories.get(word) {
            Some(cats) => cats,
            None => &[],
        }
    }

    pub fn words_for(&self, cat: &str) -> &[String] {
        match self.lexicon_index.get(cat) {
            Some(&idx) => &self.lexicon[idx].1,
            None => &[],
        }
    }

    pub fn is_nonterminal(&self, sym: &str) -> bool {
        self.rule_index.contains_key(sym)
    }

    pub fn is_category(&self, sym: &str) -> bool {
        self.lexicon_index.contains_key(sym)
    }

    pub fn is_literal(&self, sym: &str) -> bool {
        !self.is_nonterminal(sym) && !self.is_category(sym)
    }

    /// Whether input `word` can be consumed where `sym` is expected.
    pub fn matches(&self, word: &str, sym: &str) -> bool {
        self.isa(word, sym) || (self.is_literal(sym) && sym == word)
    }

    pub fn rules(&self) -> impl Iterator<Item=(&str, &[Vec<String>])> {
        self.rules.iter().map(|(lhs, alts)| (lhs.as_str(), alts.as_slice()))
    }

    pub fn nonterminals(&self) -> impl Iterator<Item=&str> {
        self.rules.iter().map(|(lhs, _)| lhs.as_str())
    }

    pub fn lexicon(&self) -> impl Iterator<Item=(&str, &[String])> {
        self.lexicon.iter().map(|(cat, words)| (cat.as_str(), words.as_slice()))
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Grammar {}>", self.name)
    }
}

/// Builds a Grammar while checking symbol names and lexicon entries.
/// Repeated alternatives and words are merged, keeping first-seen order.
impl GrammarBuilder {
    fn fail(&mut self, err: GrammarError) {
        // keep the first error, later ones are usually fallout
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn _add_rule<S: AsRef<str>>(&mut self, lhs: &str, rhs: &[S]) {
        let rhs: Vec<String> = rhs.iter().map(|s| s.as_ref().trim().to_string()).collect();
        if lhs.trim().is_empty() || rhs.iter().any(|s| s.is_empty()) {
            self.fail(GrammarError::EmptySymbol {
                context: format!("{} -> {}", lhs, rhs.join(" "))
            });
            return;
        }
        let lhs = lhs.trim();
        match self.rules.iter_mut().find(|(head, _)| head == lhs) {
            Some((_, alts)) => if !alts.contains(&rhs) {
                alts.push(rhs);
            },
            None => self.rules.push((lhs.to_string(), vec![rhs])),
        }
    }

    fn _add_words<S: AsRef<str>>(&mut self, cat: &str, words: &[S]) {
        let cat = cat.trim();
        if cat.is_empty() {
            self.fail(GrammarError::EmptySymbol { context: "lexicon".to_string() });
            return;
        }
        let pos = match self.lexicon.iter().position(|(c, _)| c == cat) {
            Some(pos) => pos,
            None => {
                self.lexicon.push((cat.to_string(), Vec::new()));
                self.lexicon.len() - 1
            }
        };
        for word in words.iter().map(|w| w.as_ref().trim()) {
            if word.is_empty() {
                self.fail(GrammarError::EmptyWord { category: cat.to_string() });
                return;
            }
            let entry = &mut self.lexicon[pos].1;
            if !entry.iter().any(|w| w == word) {
                entry.push(word.to_string());
            }
        }
    }

    pub fn rule<S: AsRef<str>>(mut self, lhs: &str, rhs: &[S]) -> Self {
        self._add_rule(lhs, rhs);
        self
    }

    pub fn words<S: AsRef<str>>(mut self, cat: &str, words: &[S]) -> Self {
        self._add_words(cat, words);
        self
    }

    // Non chaining versions to be invoked in loops.

    pub fn add_rule<S: AsRef<str>>(&mut self, lhs: &str, rhs: &[S]) {
        self._add_rule(lhs, rhs)
    }

    pub fn add_words<S: AsRef<str>>(&mut self, cat: &str, words: &[S]) {
        self._add_words(cat, words)
    }

    pub fn into_grammar(self, name: impl Into<String>) -> Result<Grammar, GrammarError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let rule_index = self.rules.iter().enumerate()
            .map(|(idx, (lhs, _))| (lhs.clone(), idx))
            .collect();
        let lexicon_index = self.lexicon.iter().enumerate()
            .map(|(idx, (cat, _))| (cat.clone(), idx))
            .collect();
        let mut categories: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for (cat, words) in &self.lexicon {
            for word in words {
                categories.entry(word.clone()).or_default().push(cat.clone());
            }
        }
        Ok(Grammar {
            name: name.into(),
            rules: self.rules,
            rule_index,
            lexicon: self.lexicon,
            lexicon_index,
            categories,
        })
    }
}

///////////////////////////////////////////////////////////////////////////////
