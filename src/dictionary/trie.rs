//! Byte-level prefix tree.
//!
//! Nodes live in a single arena and keep their children sorted by byte,
//! so that walking a key of length `n` costs `n` binary searches over at most 256 children.
//!
//! Besides plain `put`/`get`, the trie exposes a cursor ([NodeId], [Trie::step], [Trie::value])
//! that lets callers extend a lookup incrementally, one token at a time.
use std::collections::BTreeSet;

/// Position in a [Trie]. Only meaningful for the trie that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<V> {
    children: Vec<(u8, usize)>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            value: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trie<V> {
    nodes: Vec<Node<V>>,
    len: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            len: 0,
        }
    }

    #[inline]
    fn child(&self, node: usize, byte: u8) -> Option<usize> {
        let children = &self.nodes[node].children;
        children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|idx| children[idx].1)
    }

    /// Get the node for `key`, creating missing nodes along the way.
    fn node_or_insert(&mut self, key: &[u8]) -> usize {
        let mut node = 0;
        for &byte in key {
            node = match self.nodes[node]
                .children
                .binary_search_by_key(&byte, |&(b, _)| b)
            {
                Ok(idx) => self.nodes[node].children[idx].1,
                Err(idx) => {
                    let new_node = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[node].children.insert(idx, (byte, new_node));
                    new_node
                }
            };
        }
        node
    }

    /// Associate `value` to `key`, returning the previous value if any.
    pub fn put(&mut self, key: impl AsRef<[u8]>, value: V) -> Option<V> {
        let node = self.node_or_insert(key.as_ref());
        let previous = self.nodes[node].value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Get the value of `key`, inserting the one built by `f` if there's none.
    pub fn get_or_insert_with(&mut self, key: impl AsRef<[u8]>, f: impl FnOnce() -> V) -> &mut V {
        let node = self.node_or_insert(key.as_ref());
        let node = &mut self.nodes[node];
        if node.value.is_none() {
            self.len += 1;
        }
        node.value.get_or_insert_with(f)
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&V> {
        self.step(self.root(), key).and_then(|node| self.value(node))
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Node of the empty key.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Walk `bytes` from `from`.
    ///
    /// Returns [None] as soon as no key continues with `bytes`.
    pub fn step(&self, from: NodeId, bytes: impl AsRef<[u8]>) -> Option<NodeId> {
        let mut node = from.0;
        for &byte in bytes.as_ref() {
            node = self.child(node, byte)?;
        }
        Some(NodeId(node))
    }

    /// Value stored at `node`, if `node` ends a key.
    pub fn value(&self, node: NodeId) -> Option<&V> {
        self.nodes[node.0].value.as_ref()
    }

    /// Get the longest key that is a prefix of `key`, as `(key length, value)`.
    pub fn longest_prefix(&self, key: impl AsRef<[u8]>) -> Option<(usize, &V)> {
        let mut node = 0;
        let mut best = self.nodes[0].value.as_ref().map(|v| (0, v));
        for (idx, &byte) in key.as_ref().iter().enumerate() {
            match self.child(node, byte) {
                Some(next) => node = next,
                None => break,
            }
            if let Some(value) = self.nodes[node].value.as_ref() {
                best = Some((idx + 1, value));
            }
        }
        best
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        for (key, value) in iter {
            trie.put(key, value);
        }
        trie
    }
}

/// Identifiers of a dictionary entry, sorted.
pub type IdSet = BTreeSet<String>;

/// Dictionary backing store: terms to identifier sets.
pub type EntityTrie = Trie<IdSet>;

impl Trie<IdSet> {
    /// Add `id` to the identifiers of `term`.
    pub fn add_id(&mut self, term: impl AsRef<[u8]>, id: impl Into<String>) {
        self.get_or_insert_with(term, IdSet::new).insert(id.into());
    }
}
