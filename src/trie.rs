//! A trie with a statically chosen insertion/search strategy.

use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::error::TrieError;
use crate::mode::Mode;
use crate::node::Node;
use crate::radix::longest_common_prefix;
use crate::suffix::suffixes;

/// Returned by `search_depth` when a key is absent.
pub const NOT_FOUND: isize = -1;

/// Shape of a trie, computed by walking it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Distinct keys stored.
    pub keys: usize,
    /// Nodes below the root (one per edge).
    pub nodes: usize,
    /// Nodes with no children.
    pub leaves: usize,
    /// Edge splits performed so far (compressed mode only).
    pub splits: usize,
    /// Total bytes across all segments.
    pub segment_bytes: usize,
    /// Longest root-to-node path, in edges.
    pub max_depth: usize,
}

/// A trie over byte keys using insertion/search strategy `M`.
pub struct Trie<M: Mode> {
    root: Node,
    len: usize,
    nodes: usize,
    splits: usize,
    _mode: PhantomData<M>,
}

impl<M: Mode> Trie<M> {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            len: 0,
            nodes: 0,
            splits: 0,
            _mode: PhantomData,
        }
    }

    /// Inserts a single key. Returns `true` if it was not already stored.
    ///
    /// The empty key is never stored.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        if key.is_empty() {
            trace!("{}: ignoring empty key", M::NAME);
            return false;
        }
        let ins = M::insert(&mut self.root, key);
        self.nodes += ins.nodes_created;
        self.splits += ins.splits;
        if ins.new_key {
            self.len += 1;
        }
        ins.new_key
    }

    /// Inserts every key of `keys` as is.
    pub fn build_from_words<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let before = self.len;
        let mut seen = 0usize;
        for key in keys {
            self.insert(key);
            seen += 1;
        }
        debug!(
            "{}: built from {} words, {} new keys ({} total, {} nodes)",
            M::NAME,
            seen,
            self.len - before,
            self.len,
            self.nodes
        );
        self
    }

    /// Inserts every non-empty suffix of every key of `keys`.
    pub fn build_suffix_index<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let before = self.len;
        let mut seen = 0usize;
        let mut generated = 0usize;
        for key in keys {
            for suffix in suffixes(key.as_ref()) {
                self.insert(suffix);
                generated += 1;
            }
            seen += 1;
        }
        debug!(
            "{}: suffix index over {} words, {} suffixes, {} new keys ({} total, {} nodes)",
            M::NAME,
            seen,
            generated,
            self.len - before,
            self.len,
            self.nodes
        );
        self
    }

    /// Number of edges from the root to where `key` ends, if stored.
    #[inline]
    pub fn search(&self, key: impl AsRef<[u8]>) -> Option<usize> {
        M::search(&self.root, key.as_ref())
    }

    /// Like [`search`](Self::search), with [`NOT_FOUND`] for absent keys.
    #[inline]
    pub fn search_depth(&self, key: impl AsRef<[u8]>) -> isize {
        self.search(key).map_or(NOT_FOUND, |d| d as isize)
    }

    #[inline]
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.search(key).is_some()
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            keys: self.len,
            splits: self.splits,
            ..TrieStats::default()
        };
        let mut stack: Vec<(&Node, usize)> = self.root.children().iter().map(|c| (c, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            stats.segment_bytes += node.segment().len();
            stats.max_depth = stats.max_depth.max(depth);
            if node.children().is_empty() {
                stats.leaves += 1;
            }
            stack.extend(node.children().iter().map(|c| (c, depth + 1)));
        }
        stats
    }

    /// Checks the structural invariants of the tree.
    ///
    /// Every non-root segment is non-empty (exactly one symbol in plain
    /// mode), no two siblings share a non-empty prefix, the root is not a
    /// key, and the numbers of end-of-key and reachable nodes match what
    /// insertion recorded.
    pub fn validate(&self) -> Result<(), TrieError> {
        if self.root.is_end_of_key() {
            return Err(TrieError::RootMarked);
        }

        let mut marked = 0usize;
        let mut reachable = 0usize;
        // Depth-first with one shared path buffer: each entry records the
        // path length of its parent, which is always a prefix of `path`.
        let mut path: Vec<u8> = Vec::new();
        let mut stack: Vec<(&Node, usize)> = vec![(&self.root, 0)];
        while let Some((node, parent_len)) = stack.pop() {
            path.truncate(parent_len);
            path.extend_from_slice(node.segment());

            let children = node.children();
            for (i, a) in children.iter().enumerate() {
                for b in &children[i + 1..] {
                    if longest_common_prefix(a.segment(), b.segment()) > 0 {
                        return Err(TrieError::OverlappingSiblings {
                            parent: path,
                            first: a.segment().to_vec(),
                            second: b.segment().to_vec(),
                        });
                    }
                }
            }

            for child in children {
                let len = child.segment().len();
                if len == 0 {
                    return Err(TrieError::EmptySegment { path });
                }
                if !M::COMPRESSED && len != 1 {
                    path.extend_from_slice(child.segment());
                    return Err(TrieError::WideSegment { path, len });
                }
                if child.is_end_of_key() {
                    marked += 1;
                }
                reachable += 1;
                stack.push((child, path.len()));
            }
        }

        if marked != self.len {
            return Err(TrieError::CountMismatch {
                marked,
                recorded: self.len,
            });
        }
        if reachable != self.nodes {
            return Err(TrieError::NodeCountMismatch {
                reachable,
                created: self.nodes,
            });
        }
        Ok(())
    }
}

impl<M: Mode> Default for Trie<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mode> Clone for Trie<M> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            nodes: self.nodes,
            splits: self.splits,
            _mode: PhantomData,
        }
    }
}

impl<M: Mode> fmt::Debug for Trie<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("mode", &M::NAME)
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .field("splits", &self.splits)
            .finish()
    }
}
