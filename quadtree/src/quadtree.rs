mod config;
mod core;
mod maintenance;
mod query;
mod types;

pub use config::Config;

use common::shapes::Rectangle;
use fxhash::FxHashSet;
use std::fmt;
use types::{Node, NodeIndex, ROOT};

/// Region quadtree over power-of-two world bounds.
///
/// Each entry lives in the deepest node whose bounds fully contain its
/// rectangle, so entries straddling a split line rest in the smallest
/// enclosing node. Nodes are kept in an arena and refer to their parent and
/// children by index.
pub struct QuadTree<K> {
    nodes: Vec<Node<K>>,
    free_nodes: Vec<NodeIndex>,
    // Every stored key, so each one lives in exactly one node
    keys: FxHashSet<K>,
    config: Config,
}

impl<K> QuadTree<K> {
    pub fn bounds(&self) -> Rectangle {
        self.nodes[ROOT].bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // Live nodes only; recycled arena slots are not counted
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_nodes.len()
    }

    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            deepest = deepest.max(node.depth);
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
        deepest
    }

    // Retrieve all node bounding boxes, parents before children
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        let mut stack = vec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            bounding_boxes.push(node.bounds);
            if let Some(children) = node.children {
                stack.extend(children.iter().rev());
            }
        }
    }
}

impl<K: fmt::Debug> QuadTree<K> {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, idx: NodeIndex) -> fmt::Result {
        let node = &self.nodes[idx];
        writeln!(
            f,
            "{:indent$}{} {:?}",
            "",
            node.bounds,
            node.entries,
            indent = node.depth * 2
        )?;
        if let Some(children) = node.children {
            for child in children {
                self.fmt_node(f, child)?;
            }
        }
        Ok(())
    }
}

impl<K: fmt::Debug> fmt::Debug for QuadTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "QuadTree(len: {})", self.len())?;
        self.fmt_node(f, ROOT)
    }
}
