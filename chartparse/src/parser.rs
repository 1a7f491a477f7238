#![deny(warnings)]

use crate::chart::Chart;
use crate::edge::Edge;
use crate::grammar::Grammar;
use std::collections::VecDeque;
use std::rc::Rc;

macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

/// Start symbol used by the stock grammars.
pub const DEFAULT_START: &str = "S";

// Head of the bookkeeping edge that predicts the real start symbol.
const SEED: &str = "S_";

pub struct ChartParser<'g> {
    grammar: &'g Grammar,
    trace: bool,
}

// State of a single parse. Newly inserted edges wait in the agenda until they
// are dispatched to the predictor (active) or the extender (complete).
struct ParseRun<'g> {
    grammar: &'g Grammar,
    trace: bool,
    chart: Chart,
    agenda: VecDeque<Rc<Edge>>,
}

///////////////////////////////////////////////////////////////////////////////

impl<'g> ChartParser<'g> {
    pub fn new(grammar: &'g Grammar) -> ChartParser<'g> {
        ChartParser { grammar, trace: false }
    }

    /// Print every edge added to the chart on stderr.
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Fill a chart for `words` predicting `start` at position 0.
    pub fn parse<S: AsRef<str>>(&self, words: &[S], start: &str) -> Chart {
        let mut run = ParseRun {
            grammar: self.grammar,
            trace: self.trace,
            chart: Chart::new(words.len()),
            agenda: VecDeque::new(),
        };
        run.add_edge(Edge::predict(0, SEED, &[start.to_string()]));
        run.close();
        // Each position is closed before moving on, so scanning only ever
        // reads a finished slot.
        for (pos, word) in words.iter().enumerate() {
            run.scanner(pos, word.as_ref());
            run.close();
        }

        if cfg!(feature="debug") {
            for (idx, slot) in run.chart.slots().enumerate() {
                eprintln!("=== Chart[{}] ===", idx);
                for edge in slot {
                    eprintln!("{}", edge);
                }
            }
        }
        run.chart
    }

    /// Complete derivations of `start` that span all of `words`.
    pub fn parses<S: AsRef<str>>(&self, words: &[S], start: &str) -> Vec<Rc<Edge>> {
        let parses = self.parse(words, start).complete_parses(start);
        debug!("=== {} parses for {} ===", parses.len(), start);
        parses
    }
}

impl ParseRun<'_> {
    /// Single mutation point of the chart. Duplicates are dropped here, which
    /// is what keeps recursive grammars from looping.
    fn add_edge(&mut self, edge: Edge) {
        if let Some(edge) = self.chart.insert(edge) {
            if self.trace {
                eprintln!("Chart: added {}", edge);
            }
            self.agenda.push_back(edge);
        }
    }

    // Dispatch pending edges until nothing new is added
    fn close(&mut self) {
        while let Some(edge) = self.agenda.pop_front() {
            if edge.is_complete() {
                self.extender(&edge);
            } else {
                self.predictor(&edge);
            }
        }
    }

    /// Scan `word` at `pos` for every edge expecting a category it belongs to
    /// (or a literal spelled like it).
    fn scanner(&mut self, pos: usize, word: &str) {
        let grammar = self.grammar;
        let scans: Vec<_> = self.chart[pos].iter()
            .filter_map(|edge| edge.next_expected()
                .filter(|&sym| grammar.matches(word, sym))
                .map(|sym| edge.scan(sym, word)))
            .collect();
        for edge in scans {
            self.add_edge(edge);
        }
    }

    /// Predict every way to build the symbol `edge` expects, where it ends.
    fn predictor(&mut self, edge: &Rc<Edge>) {
        let Some(next) = edge.next_expected() else { return };
        let grammar = self.grammar;
        for rhs in grammar.rewrites_for(next) {
            self.add_edge(Edge::predict(edge.end, next, rhs));
        }
        // An empty constituent of `next` may have completed here before
        // `edge` showed up. The extender won't revisit it, so advance now.
        let nulls: Vec<_> = self.chart[edge.end].iter()
            .filter(|done| done.is_complete() && done.start == edge.end &&
                           done.lhs == next)
            .map(|done| edge.extend(done))
            .collect();
        for edge in nulls {
            self.add_edge(edge);
        }
    }

    /// Advance every edge waiting on the symbol `edge` just completed.
    fn extender(&mut self, edge: &Rc<Edge>) {
        let extended: Vec<_> = self.chart[edge.start].iter()
            .filter(|waiting| waiting.next_expected() == Some(edge.lhs.as_str()))
            .map(|waiting| waiting.extend(edge))
            .collect();
        for edge in extended {
            self.add_edge(edge);
        }
    }
}
