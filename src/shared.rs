//! Thread-safe wrapper around [`Index`].
//!
//! The trie itself has no interior synchronization. `SharedIndex` puts the
//! whole index behind one reader-writer lock: builds take it exclusively,
//! lookups share it, so no reader ever sees a half-finished insertion.

use parking_lot::RwLock;

use crate::{Config, Index, TrieError, TrieStats};

pub struct SharedIndex {
    inner: RwLock<Index>,
}

impl SharedIndex {
    pub fn new(compressed: bool) -> Self {
        Self::from_index(Index::new(compressed))
    }

    pub fn with_config(config: Config) -> Self {
        Self::from_index(Index::with_config(config))
    }

    pub fn from_index(index: Index) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }

    /// Inserts every key of `keys` under one write lock.
    pub fn build_from_words<I>(&self, keys: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.inner.write().build_from_words(keys);
    }

    /// Inserts every suffix of every key of `keys` under one write lock.
    pub fn build_suffix_index<I>(&self, keys: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.inner.write().build_suffix_index(keys);
    }

    pub fn insert(&self, key: impl AsRef<[u8]>) -> bool {
        self.inner.write().insert(key)
    }

    pub fn search(&self, key: impl AsRef<[u8]>) -> Option<usize> {
        self.inner.read().search(key)
    }

    pub fn search_depth(&self, key: impl AsRef<[u8]>) -> isize {
        self.inner.read().search_depth(key)
    }

    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.inner.read().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_compressed(&self) -> bool {
        self.inner.read().is_compressed()
    }

    pub fn stats(&self) -> TrieStats {
        self.inner.read().stats()
    }

    pub fn validate(&self) -> Result<(), TrieError> {
        self.inner.read().validate()
    }

    pub fn into_inner(self) -> Index {
        self.inner.into_inner()
    }
}

impl Default for SharedIndex {
    fn default() -> Self {
        Self::from_index(Index::default())
    }
}

impl From<Index> for SharedIndex {
    fn from(index: Index) -> Self {
        Self::from_index(index)
    }
}
