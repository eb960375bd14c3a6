//! Uncompressed trie: one edge per symbol.

use crate::mode::{Insertion, Mode};
use crate::node::Node;

/// One single-byte child per distinct next symbol.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Mode for Plain {
    const COMPRESSED: bool = false;
    const NAME: &'static str = "plain";

    fn insert(root: &mut Node, key: &[u8]) -> Insertion {
        let mut out = Insertion::default();
        if key.is_empty() {
            return out;
        }
        let mut node = root;
        for &b in key {
            let idx = match node.child_position(|c| c.segment().first() == Some(&b)) {
                Some(idx) => idx,
                None => {
                    out.nodes_created += 1;
                    node.push_child(Node::with_segment(&[b]))
                }
            };
            node = node.child_mut(idx);
        }
        out.new_key = node.mark_end_of_key();
        out
    }

    fn search(root: &Node, key: &[u8]) -> Option<usize> {
        let mut node = root;
        let mut depth = 0;
        for &b in key {
            let idx = node.child_position(|c| c.segment().first() == Some(&b))?;
            node = node.child(idx);
            depth += 1;
        }
        node.is_end_of_key().then_some(depth)
    }
}
