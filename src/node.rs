//! Trie vertices.
//!
//! A node owns its label (the segment on the edge leading into it) and its
//! children. Children are kept as an ordered sequence and looked up by a
//! linear scan: fan-out per node is small, and in compressed mode the lookup
//! key is a variable-length segment anyway.

use std::fmt;

use smallvec::SmallVec;

/// Edge label. Most segments are short, so they live inline.
pub type Segment = SmallVec<[u8; 16]>;

/// A labeled vertex of the trie.
///
/// A plain key of length n is a chain n nodes deep, so `Clone` and `Drop`
/// walk the subtree with an explicit stack instead of recursing.
#[derive(Default)]
pub struct Node {
    segment: Segment,
    children: Vec<Node>,
    is_end_of_key: bool,
}

impl Node {
    /// The root: empty segment, never the end of a key.
    pub fn root() -> Self {
        Self::default()
    }

    /// A fresh node labeled with `segment`.
    pub fn with_segment(segment: &[u8]) -> Self {
        debug_assert!(!segment.is_empty(), "non-root segments are never empty");
        Self {
            segment: Segment::from_slice(segment),
            children: Vec::new(),
            is_end_of_key: false,
        }
    }

    #[inline]
    pub fn segment(&self) -> &[u8] {
        &self.segment
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn is_end_of_key(&self) -> bool {
        self.is_end_of_key
    }

    /// Index of the first child satisfying `pred`, in insertion order.
    #[inline]
    pub fn child_position(&self, pred: impl FnMut(&Node) -> bool) -> Option<usize> {
        self.children.iter().position(pred)
    }

    /// Appends `child` and returns its index.
    pub fn push_child(&mut self, child: Node) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    #[inline]
    pub(crate) fn child(&self, idx: usize) -> &Node {
        &self.children[idx]
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.children[idx]
    }

    /// Marks this node as the end of a key. Returns `true` if it was not
    /// marked before.
    pub(crate) fn mark_end_of_key(&mut self) -> bool {
        debug_assert!(!self.segment.is_empty(), "the root never ends a key");
        !std::mem::replace(&mut self.is_end_of_key, true)
    }

    /// Splits this node's edge after `at` bytes.
    ///
    /// The node becomes an intermediate node labeled `segment[..at]` with a
    /// single child: the original node, relabeled `segment[at..]`, carrying
    /// its descendants and end-of-key flag. The subtree is moved, not cloned.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.segment.len(), "split must leave both halves non-empty");
        let prefix = Segment::from_slice(&self.segment[..at]);
        let mut lower = std::mem::replace(
            self,
            Node {
                segment: prefix,
                children: Vec::with_capacity(2),
                is_end_of_key: false,
            },
        );
        lower.segment.drain(..at);
        self.children.push(lower);
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        enum Visit<'a> {
            Enter(&'a Node),
            Build(&'a Node),
        }

        // Post-order: each node is built once its children sit on top of `built`.
        let mut work = vec![Visit::Enter(self)];
        let mut built: Vec<Node> = Vec::new();
        while let Some(visit) = work.pop() {
            match visit {
                Visit::Enter(node) => {
                    work.push(Visit::Build(node));
                    work.extend(node.children.iter().rev().map(Visit::Enter));
                }
                Visit::Build(node) => {
                    let children = built.split_off(built.len() - node.children.len());
                    built.push(Node {
                        segment: node.segment.clone(),
                        children,
                        is_end_of_key: node.is_end_of_key,
                    });
                }
            }
        }
        built.pop().unwrap_or_default()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("segment", &String::from_utf8_lossy(&self.segment))
            .field("is_end_of_key", &self.is_end_of_key)
            .field("children", &self.children.len())
            .finish()
    }
}
