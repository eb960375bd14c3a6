use std::error::Error;
use std::fmt;

/// Structural defect found by [`Trie::validate`](crate::Trie::validate).
///
/// Paths are the concatenated segments from the root to the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// A non-root node has an empty segment.
    EmptySegment { path: Vec<u8> },
    /// A plain-mode node is labeled with more than one symbol.
    WideSegment { path: Vec<u8>, len: usize },
    /// Two siblings' segments share a non-empty prefix.
    OverlappingSiblings { parent: Vec<u8>, first: Vec<u8>, second: Vec<u8> },
    /// The root is marked as the end of a key.
    RootMarked,
    /// The number of end-of-key nodes differs from the recorded key count.
    CountMismatch { marked: usize, recorded: usize },
    /// The number of reachable nodes differs from the number insertion created.
    NodeCountMismatch { reachable: usize, created: usize },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TrieError::*;
        match self {
            EmptySegment { path } => {
                write!(f, "empty segment below {:?}", String::from_utf8_lossy(path))
            }
            WideSegment { path, len } => write!(
                f,
                "plain node {:?} has a {}-symbol segment",
                String::from_utf8_lossy(path),
                len
            ),
            OverlappingSiblings { parent, first, second } => write!(
                f,
                "siblings {:?} and {:?} below {:?} share a prefix",
                String::from_utf8_lossy(first),
                String::from_utf8_lossy(second),
                String::from_utf8_lossy(parent)
            ),
            RootMarked => write!(f, "root is marked as end of key"),
            CountMismatch { marked, recorded } => {
                write!(f, "{} end-of-key nodes but {} keys recorded", marked, recorded)
            }
            NodeCountMismatch { reachable, created } => {
                write!(f, "{} nodes reachable but {} created", reachable, created)
            }
        }
    }
}

impl Error for TrieError {}
