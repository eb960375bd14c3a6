//! Insertion/search strategies.
//!
//! A [`Mode`] is a pair of algorithms over the same [`Node`] tree. The mode
//! is a type parameter of [`Trie`](crate::Trie), so the choice is made once
//! and every call is statically dispatched.

use crate::node::Node;

pub use crate::plain::Plain;
pub use crate::radix::Radix;

/// Outcome of inserting a single key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insertion {
    /// The key was not stored before this call.
    pub new_key: bool,
    /// Nodes allocated by this call, including split intermediates.
    pub nodes_created: usize,
    /// Edges split by this call (always 0 in plain mode).
    pub splits: usize,
}

pub trait Mode {
    /// Whether edges carry multi-symbol segments.
    const COMPRESSED: bool;
    /// Short name used in log lines.
    const NAME: &'static str;

    /// Inserts `key` below `root`. The empty key is ignored.
    fn insert(root: &mut Node, key: &[u8]) -> Insertion;

    /// Number of edges from `root` to the node where `key` ends, if `key`
    /// was inserted.
    fn search(root: &Node, key: &[u8]) -> Option<usize>;
}
