#![deny(warnings)]

use std::fmt;


#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    // ("Art", "the")
    Leaf(String, String),
    // ("NP", [Leaf("Art", "the"), Leaf("N", "man")])
    Node(String, Vec<Tree>),
}

///////////////////////////////////////////////////////////////////////////////

impl Tree {
    pub fn label(&self) -> &str {
        match self {
            Tree::Leaf(cat, _) => cat,
            Tree::Node(lhs, _) => lhs,
        }
    }

    pub fn leaves(&self) -> Vec<&str> {
        match self {
            Tree::Leaf(_, word) => vec![word.as_str()],
            Tree::Node(_, subn) => subn.iter().flat_map(|n| n.leaves()).collect(),
        }
    }

    /// Draw the tree with box characters, one symbol per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_helper("", &mut out);
        out
    }

    fn render_helper(&self, indent: &str, out: &mut String) {
        match self {
            Tree::Leaf(cat, word) =>
                *out += &format!("\u{2500} {} {:?}\n", cat, word),
            Tree::Node(lhs, subn) => {
                *out += &format!("\u{2500} {}\n", lhs);
                if let Some((last, rest)) = subn.split_last() {
                    for mid in rest {
                        *out += &format!("{}\u{251c}", indent);
                        mid.render_helper(&format!("{}\u{2502}", indent), out);
                    }
                    *out += &format!("{}\u{2570}", indent);
                    last.render_helper(&format!("{} ", indent), out);
                }
            }
        }
    }
}

// Bracketed form: [S [NP [Pronoun I]] [VP [V feel]]]
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tree::Leaf(cat, word) => write!(f, "[{} {}]", cat, word),
            Tree::Node(lhs, subn) => {
                write!(f, "[{}", lhs)?;
                for n in subn {
                    write!(f, " {}", n)?;
                }
                write!(f, "]")
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
