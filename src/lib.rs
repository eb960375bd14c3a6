//! # segtrie
//!
//! String indexes answering exact-match queries with the depth of the match.
//!
//! Two construction modes share one node type:
//!
//! - **plain**: one edge per symbol, so a match's depth is its length;
//! - **compressed** (radix): edges carry multi-symbol segments and are split
//!   when a new key diverges partway along one.
//!
//! Either mode can also be built as a suffix index, storing every suffix of
//! every input string instead of the strings themselves.
//!
//! Symbols are bytes; any `AsRef<[u8]>` works as a key.
//!
//! ## Example
//!
//! ```rust
//! use segtrie::Index;
//!
//! let mut index = Index::new(true);
//! index.build_from_words(["test", "team", "toast"]);
//!
//! // t -> e -> st
//! assert_eq!(index.search("test"), Some(3));
//! assert_eq!(index.search("toast"), Some(2));
//! assert_eq!(index.search("tea"), None);
//! assert_eq!(index.search_depth("tea"), segtrie::NOT_FOUND);
//! ```
//!
//! When the mode is known at compile time, use [`Trie`] directly:
//!
//! ```rust
//! use segtrie::{Radix, Trie};
//!
//! let mut suffixes: Trie<Radix> = Trie::new();
//! suffixes.build_suffix_index(["banana"]);
//! assert!(suffixes.contains("nana"));
//! assert!(!suffixes.contains("nan"));
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod mode;
pub mod node;
mod plain;
mod radix;
pub mod shared;
pub mod suffix;
pub mod trie;

pub use error::TrieError;
pub use mode::{Insertion, Mode, Plain, Radix};
pub use node::{Node, Segment};
pub use radix::longest_common_prefix;
pub use shared::SharedIndex;
pub use trie::{Trie, TrieStats, NOT_FOUND};

/// Construction options for an [`Index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Build a compressed (radix) trie instead of a plain one.
    pub compressed: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { compressed: true }
    }
}

/// A trie whose mode is chosen at runtime.
///
/// The mode is fixed at construction. Each call matches on it once and then
/// runs the statically dispatched [`Trie`] code for that mode.
#[derive(Clone, Debug)]
pub enum Index {
    Plain(Trie<Plain>),
    Compressed(Trie<Radix>),
}

macro_rules! dispatch {
    ($self:expr, $t:ident => $body:expr) => {
        match $self {
            Index::Plain($t) => $body,
            Index::Compressed($t) => $body,
        }
    };
}

impl Index {
    pub fn new(compressed: bool) -> Self {
        Self::with_config(Config::new().compressed(compressed))
    }

    pub fn with_config(config: Config) -> Self {
        if config.compressed {
            Index::Compressed(Trie::new())
        } else {
            Index::Plain(Trie::new())
        }
    }

    #[inline]
    pub fn is_compressed(&self) -> bool {
        matches!(self, Index::Compressed(_))
    }

    /// Inserts every key of `keys` as is.
    pub fn build_from_words<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        dispatch!(self, t => { t.build_from_words(keys); });
        self
    }

    /// Inserts every non-empty suffix of every key of `keys`.
    ///
    /// Mixing this with [`build_from_words`](Self::build_from_words) on one
    /// index stores whole words and suffixes side by side.
    pub fn build_suffix_index<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        dispatch!(self, t => { t.build_suffix_index(keys); });
        self
    }

    /// Inserts a single key. Returns `true` if it was not already stored.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) -> bool {
        dispatch!(self, t => t.insert(key))
    }

    /// Depth of `key` in edges, or `None` if it was never inserted.
    #[inline]
    pub fn search(&self, key: impl AsRef<[u8]>) -> Option<usize> {
        dispatch!(self, t => t.search(key))
    }

    /// Depth of `key`, or [`NOT_FOUND`].
    #[inline]
    pub fn search_depth(&self, key: impl AsRef<[u8]>) -> isize {
        dispatch!(self, t => t.search_depth(key))
    }

    #[inline]
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        dispatch!(self, t => t.contains(key))
    }

    pub fn len(&self) -> usize {
        dispatch!(self, t => t.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> TrieStats {
        dispatch!(self, t => t.stats())
    }

    pub fn validate(&self) -> Result<(), TrieError> {
        dispatch!(self, t => t.validate())
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}


#[cfg(test)]
mod proptests;
