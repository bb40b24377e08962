use super::types::{NodeIndex, NodeStack, ROOT};
use super::QuadTree;
use crate::error::QuadtreeResult;
use common::shapes::Rectangle;
use smallvec::smallvec;
use std::hash::Hash;
use tracing::trace;

impl<K: Copy + Eq + Hash> QuadTree<K> {
    /// Relocate an entry currently stored with `current` to `new_bbox`.
    ///
    /// The entry is removed from its node, emptied subtrees are pruned, and
    /// reinsertion starts from the lowest ancestor that still contains
    /// `new_bbox` instead of the root. Nothing changes if `new_bbox` lies
    /// outside the tree.
    ///
    /// # Panics
    ///
    /// If no entry for `key` is stored under `current`. The owner of the keys
    /// must always pass the rectangle it last inserted or moved the entry to.
    pub fn move_to(&mut self, key: K, current: &Rectangle, new_bbox: Rectangle) -> QuadtreeResult<()> {
        self.ensure_in_bounds(&new_bbox)?;
        let holder = match self.locate(key, current) {
            Some(holder) => holder,
            None => panic!("quadtree move_to: no entry stored at {}", current),
        };

        self.nodes[holder].entries.remove(&key);
        let mut node = if self.config.prune_empty {
            self.prune_upwards(holder)
        } else {
            holder
        };

        // Walk up until an ancestor encloses the new rectangle; the root always does
        while !self.nodes[node].bounds.contains_rect(&new_bbox) {
            match self.nodes[node].parent {
                Some(parent) => node = parent,
                None => break,
            }
        }
        self.insert_into(node, key, new_bbox);
        Ok(())
    }

    /// Remove the entry stored with `bbox`. Returns false if there is none.
    pub fn remove(&mut self, key: K, bbox: &Rectangle) -> bool {
        let holder = match self.locate(key, bbox) {
            Some(holder) => holder,
            None => return false,
        };
        self.nodes[holder].entries.remove(&key);
        self.keys.remove(&key);
        if self.config.prune_empty {
            self.prune_upwards(holder);
        }
        true
    }

    pub fn contains(&self, key: K, bbox: &Rectangle) -> bool {
        self.locate(key, bbox).is_some()
    }

    // Find the node holding key by walking down through every node that
    // contains bbox. Closed bounds mean a degenerate rectangle on a split
    // line fits more than one child, so all of them are searched.
    pub(crate) fn locate(&self, key: K, bbox: &Rectangle) -> Option<NodeIndex> {
        let mut stack: NodeStack = smallvec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.bounds.contains_rect(bbox) {
                continue;
            }
            if node.entries.contains_key(&key) {
                return Some(idx);
            }
            if let Some(children) = node.children {
                // Reversed so the top-left child is searched first
                stack.extend(children.into_iter().rev());
            }
        }
        None
    }

    // Collapse empty subtrees starting at start and walking toward the root.
    // Returns the lowest node that is still part of the tree.
    pub(crate) fn prune_upwards(&mut self, start: NodeIndex) -> NodeIndex {
        let mut node = start;
        loop {
            if !self.nodes[node].entries.is_empty() {
                return node;
            }
            if let Some(children) = self.nodes[node].children {
                if !children
                    .iter()
                    .all(|&child| self.nodes[child].is_empty_leaf())
                {
                    return node;
                }
                for child in children {
                    self.free_node(child);
                }
                self.nodes[node].children = None;
                trace!(node = node, "pruned empty quadtree children");
            }
            match self.nodes[node].parent {
                Some(parent) => node = parent,
                None => return node,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pruning_is_idempotent() {
        let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 16.0, 16.0)).unwrap();
        let bbox = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        qt.insert(1u32, bbox).unwrap();
        assert!(qt.node_count() > 1);
        assert!(qt.remove(1, &bbox));

        let nodes = qt.node_count();
        assert_eq!(nodes, 1);
        assert_eq!(qt.prune_upwards(ROOT), ROOT);
        assert_eq!(qt.prune_upwards(ROOT), ROOT);
        assert_eq!(qt.node_count(), nodes);
        assert_eq!(qt.nodes[ROOT].children, None);
    }
}
