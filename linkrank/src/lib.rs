#![deny(warnings)]

//! Hubs and authorities (HITS) over a small directed graph of named pages.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Directed link graph. Pages are interned by name; duplicate links collapse.
#[derive(Clone, Debug, Default)]
pub struct Pages {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
    outlinks: Vec<BTreeSet<usize>>,
    inlinks: Vec<BTreeSet<usize>>,
}

/// Final scores of one page.
#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    pub name: String,
    pub hub: f64,
    pub authority: f64,
}

impl Pages {
    /// Build from `(page, [outlinks])` pairs. Link targets that are never
    /// listed as a page become pages without outlinks.
    pub fn new<P, L, S>(adjacency: P) -> Pages
            where P: IntoIterator<Item=(S, L)>,
                  L: IntoIterator<Item=S>,
                  S: AsRef<str> {
        let mut pages = Pages::default();
        for (page, links) in adjacency {
            let from = pages.intern(page.as_ref());
            for link in links {
                let to = pages.intern(link.as_ref());
                pages.outlinks[from].insert(to);
                pages.inlinks[to].insert(from);
            }
        }
        pages
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.outlinks.push(BTreeSet::new());
        self.inlinks.push(BTreeSet::new());
        id
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    /// Pages matching the query. Queries only match page names.
    pub fn relevant(&self, query: &str) -> Vec<&str> {
        self.names.iter().map(String::as_str).filter(|name| *name == query).collect()
    }

    /// The given pages plus everything linking to or linked from them,
    /// sorted by name. Unknown names are dropped.
    pub fn expand<S: AsRef<str>>(&self, pages: &[S]) -> Vec<&str> {
        let mut expansion = BTreeSet::new();
        for page in pages {
            if let Some(&id) = self.index.get(page.as_ref()) {
                expansion.insert(self.names[id].as_str());
                expansion.extend(self.inlinks[id].iter().map(|&i| self.names[i].as_str()));
                expansion.extend(self.outlinks[id].iter().map(|&o| self.names[o].as_str()));
            }
        }
        expansion.into_iter().collect()
    }

    /// Pages linking to `page`.
    pub fn inlinks(&self, page: &str) -> Vec<&str> {
        self.links(page, &self.inlinks)
    }

    /// Pages `page` links to.
    pub fn outlinks(&self, page: &str) -> Vec<&str> {
        self.links(page, &self.outlinks)
    }

    fn links<'a>(&'a self, page: &str, adj: &'a [BTreeSet<usize>]) -> Vec<&'a str> {
        match self.index.get(page) {
            Some(&id) => adj[id].iter().map(|&i| self.names[i].as_str()).collect(),
            None => Vec::new(),
        }
    }
}

// Scale to unit length. An all zero vector stays as is.
fn normalize(scores: &mut [f64]) {
    let norm = scores.iter().map(|s| s * s).sum::<f64>().sqrt();
    if norm > 0.0 {
        scores.iter_mut().for_each(|s| *s /= norm);
    }
}

/// Run `iterations` rounds of HITS on the pages relevant to `query` and
/// their neighbours. Only links inside that set count. Scores are sorted by
/// page name; a query matching no page gives no scores.
pub fn hits(query: &str, pages: &Pages, iterations: usize) -> Vec<Score> {
    let names = pages.expand(&pages.relevant(query));
    let local: FxHashMap<&str, usize> = names.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    // neighbours of each page, as positions in `names`
    let restrict = |links: Vec<&str>| -> Vec<usize> {
        links.into_iter().filter_map(|l| local.get(l).copied()).collect()
    };
    let ins: Vec<Vec<usize>> = names.iter().map(|&n| restrict(pages.inlinks(n))).collect();
    let outs: Vec<Vec<usize>> = names.iter().map(|&n| restrict(pages.outlinks(n))).collect();

    let mut hub = vec![1.0; names.len()];
    let mut authority = vec![1.0; names.len()];
    for _ in 0..iterations {
        for (p, links) in ins.iter().enumerate() {
            authority[p] = links.iter().map(|&i| hub[i]).sum();
        }
        for (p, links) in outs.iter().enumerate() {
            hub[p] = links.iter().map(|&o| authority[o]).sum();
        }
        normalize(&mut authority);
        normalize(&mut hub);
    }

    names.into_iter().enumerate()
        .map(|(p, name)| Score { name: name.to_string(), hub: hub[p], authority: authority[p] })
        .collect()
}

///////////////////////////////////////////////////////////////////////////////
