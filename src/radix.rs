//! Compressed (radix) trie: edges carry multi-symbol segments.
//!
//! At rest no two siblings' segments share a non-empty prefix, so at most
//! one child can continue any given key. Insertion restores this before it
//! returns by splitting the edge a new key diverges from.

use log::trace;

use crate::mode::{Insertion, Mode};
use crate::node::Node;

/// Path-compressed edges with split-on-divergence insertion.
#[derive(Clone, Copy, Debug, Default)]
pub struct Radix;

/// Length of the longest common prefix of `a` and `b`.
#[inline]
pub fn longest_common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

impl Mode for Radix {
    const COMPRESSED: bool = true;
    const NAME: &'static str = "radix";

    fn insert(root: &mut Node, key: &[u8]) -> Insertion {
        let mut out = Insertion::default();
        if key.is_empty() {
            return out;
        }
        let mut node = root;
        let mut cursor = 0;

        while cursor < key.len() {
            let rest = &key[cursor..];
            let found = node.children().iter().enumerate().find_map(|(idx, c)| {
                let shared = longest_common_prefix(c.segment(), rest);
                (shared > 0).then_some((idx, shared))
            });

            let (idx, shared) = match found {
                Some(hit) => hit,
                None => {
                    // Nothing continues the key: the remainder becomes one edge.
                    let mut leaf = Node::with_segment(rest);
                    leaf.mark_end_of_key();
                    node.push_child(leaf);
                    out.nodes_created += 1;
                    out.new_key = true;
                    return out;
                }
            };

            let child = node.child_mut(idx);
            if shared < child.segment().len() {
                trace!(
                    "split edge of {} bytes after {} (key remainder {})",
                    child.segment().len(),
                    shared,
                    rest.len() - shared
                );
                child.split_at(shared);
                out.splits += 1;
                out.nodes_created += 1;
            }
            cursor += shared;
            node = child;
        }

        out.new_key = node.mark_end_of_key();
        out
    }

    fn search(root: &Node, key: &[u8]) -> Option<usize> {
        let mut node = root;
        let mut cursor = 0;
        let mut depth = 0;

        while cursor < key.len() {
            let rest = &key[cursor..];
            let idx = node.child_position(|c| rest.starts_with(c.segment()))?;
            node = node.child(idx);
            cursor += node.segment().len();
            depth += 1;
        }

        node.is_end_of_key().then_some(depth)
    }
}
