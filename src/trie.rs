//! Prefix trie over the term dictionary: weighted autocomplete.
//!
//! Unlike the rest of this crate's data structures, this one has no direct
//! antecedent in the surrounding corpus of full-text engines — they favor a
//! sorted vocabulary plus a suffix array for substring/fuzzy lookups over a
//! character trie for prefix lookups. Built straight from the autocomplete
//! contract below, in the same invariant-first style as the rest of this
//! crate's modules.
//!
//! # Invariants
//!
//! - A node's children are keyed by a single `char`; the path from the root
//!   to any terminal node, concatenated, equals the term that produced it.
//! - `complete` never depends on child insertion order: its output is sorted
//!   by `(weight desc, term asc)` before it's returned.

use std::collections::HashMap;

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
    weight: u32,
}

/// A completion candidate returned by `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub term: String,
    pub weight: u32,
}

/// Options for a single `insert` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOptions {
    pub track_frequency: bool,
}

/// Node-per-character prefix trie with weighted terminals.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the path for `term` and marks its terminal node live. If
    /// `options.track_frequency`, the terminal's weight is incremented by one
    /// for this call; otherwise the weight is left as-is (0 on first insert).
    pub fn insert(&mut self, term: &str, options: InsertOptions) {
        let mut node = &mut self.root;
        for c in term.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
        if options.track_frequency {
            node.weight += 1;
        }
    }

    /// Clears the terminal flag and zeroes the weight at `term`'s node, if it
    /// exists. Structural nodes are left in place (lazy deletion).
    pub fn remove(&mut self, term: &str) {
        if let Some(node) = Self::find_node_mut(&mut self.root, term) {
            node.terminal = false;
            node.weight = 0;
        }
    }

    /// True iff `term` has a live terminal.
    pub fn has(&self, term: &str) -> bool {
        Self::find_node(&self.root, term).is_some_and(|n| n.terminal)
    }

    /// Enumerates at most `limit` terms starting with `prefix`, ordered by
    /// `(weight desc, term asc)`.
    pub fn complete(&self, prefix: &str, limit: usize) -> Vec<Completion> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(start) = Self::find_node(&self.root, prefix) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut buf = prefix.to_string();
        Self::collect(start, &mut buf, &mut out);

        out.sort_by(|a: &Completion, b: &Completion| {
            b.weight.cmp(&a.weight).then_with(|| a.term.cmp(&b.term))
        });
        out.truncate(limit);
        out
    }

    fn collect(node: &Node, buf: &mut String, out: &mut Vec<Completion>) {
        if node.terminal {
            out.push(Completion {
                term: buf.clone(),
                weight: node.weight,
            });
        }
        for (c, child) in &node.children {
            buf.push(*c);
            Self::collect(child, buf, out);
            buf.pop();
        }
    }

    fn find_node<'a>(root: &'a Node, term: &str) -> Option<&'a Node> {
        let mut node = root;
        for c in term.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    fn find_node_mut<'a>(root: &'a mut Node, term: &str) -> Option<&'a mut Node> {
        let mut node = root;
        for c in term.chars() {
            node = node.children.get_mut(&c)?;
        }
        Some(node)
    }
}
