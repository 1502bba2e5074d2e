//! Exact-match prefix trie over base-utility strings.
//!
//! Built once through [`UtilityTrie::insert`], then only read. The structure
//! holds no interior mutability, so a shared `&UtilityTrie` can be searched
//! from any number of threads.

use crate::rule::Utility;

#[derive(Debug, Default)]
struct Node {
    /// Sorted by byte for binary search.
    children: Vec<(u8, u32)>,
    value: Option<Utility>,
}

#[derive(Debug)]
pub struct UtilityTrie {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for UtilityTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl UtilityTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
        }
    }

    /// Inserts or replaces the utility stored under `key`.
    pub fn insert(&mut self, key: &str, utility: Utility) {
        let mut current = 0usize;
        for byte in key.bytes() {
            let next = match self.nodes[current]
                .children
                .binary_search_by_key(&byte, |(b, _)| *b)
            {
                Ok(pos) => self.nodes[current].children[pos].1 as usize,
                Err(pos) => {
                    let index = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(pos, (byte, index as u32));
                    index
                }
            };
            current = next;
        }
        if self.nodes[current].value.replace(utility).is_none() {
            self.len += 1;
        }
    }

    /// Exact lookup; a key that is only a prefix of stored keys misses.
    pub fn search(&self, key: &str) -> Option<&Utility> {
        let mut current = 0usize;
        for byte in key.bytes() {
            let node = &self.nodes[current];
            let pos = node
                .children
                .binary_search_by_key(&byte, |(b, _)| *b)
                .ok()?;
            current = node.children[pos].1 as usize;
        }
        self.nodes[current].value.as_ref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Number of stored utilities.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
