//! A character trie that associates values with keys and returns every value
//! stored along the path of a probe key.
//!
//! Suffix rules are inserted with their suffix reversed, so walking a reversed
//! word collects every rule whose suffix ends the word, shortest first.

extern crate hashbrown;

use hashbrown::HashMap;

#[derive(Debug)]
struct TrieNode<V> {
    children: HashMap<char, TrieNode<V>>,
    values: Vec<V>,
}

impl<V> TrieNode<V> {
    #[inline]
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            values: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct Trie<V> {
    root: TrieNode<V>,
    len: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Associates `value` with `key`. A key may hold several values; they are
    /// returned in insertion order.
    pub fn insert<K: IntoIterator<Item = char>>(&mut self, key: K, value: V) {
        let mut node = &mut self.root;

        for ch in key {
            node = node.children.entry(ch).or_insert_with(TrieNode::new);
        }

        node.values.push(value);
        self.len += 1;
    }

    /// Collects the values of `key` and of all its prefixes, including the
    /// empty one, ordered from the shortest prefix to the longest.
    pub fn find<K: IntoIterator<Item = char>>(&self, key: K) -> Vec<&V> {
        let mut node = &self.root;
        let mut values = node.values.iter().collect::<Vec<_>>();

        for ch in key {
            match node.children.get(&ch) {
                Some(child) => {
                    node = child;
                    values.extend(node.values.iter());
                }
                None => break,
            }
        }

        values
    }
}
