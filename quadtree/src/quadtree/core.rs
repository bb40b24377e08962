use super::types::{is_power_of_two, quadrants, Node, NodeIndex, ROOT};
use super::{Config, QuadTree};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use fxhash::FxHashSet;
use std::hash::Hash;
use tracing::trace;

impl<K: Copy + Eq + Hash> QuadTree<K> {
    pub fn new(bounding_box: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounding_box, Config::default())
    }

    pub fn new_with_config(bounding_box: Rectangle, config: Config) -> QuadtreeResult<Self> {
        if !bounding_box.is_valid()
            || !is_power_of_two(bounding_box.width)
            || !is_power_of_two(bounding_box.height)
        {
            return Err(QuadtreeError::InvalidBounds {
                width: bounding_box.width,
                height: bounding_box.height,
            });
        }
        Ok(QuadTree {
            nodes: vec![Node::new_leaf(bounding_box, None, 0)],
            free_nodes: Vec::new(),
            keys: FxHashSet::default(),
            config,
        })
    }

    // Insert a rectangle with a given key into the quadtree.
    // A key that is already stored must be moved with move_to instead.
    pub fn insert(&mut self, key: K, bbox: Rectangle) -> QuadtreeResult<()> {
        self.ensure_in_bounds(&bbox)?;
        if !self.keys.insert(key) {
            return Err(QuadtreeError::DuplicateKey { rect: bbox });
        }
        self.insert_into(ROOT, key, bbox);
        Ok(())
    }

    pub(crate) fn ensure_in_bounds(&self, bbox: &Rectangle) -> QuadtreeResult<()> {
        if !bbox.is_valid() {
            return Err(QuadtreeError::InvalidRectangle { rect: *bbox });
        }
        let bounds = self.bounds();
        if !bounds.contains_rect(bbox) {
            return Err(QuadtreeError::OutOfBounds { rect: *bbox, bounds });
        }
        Ok(())
    }

    // Descend from node to the deepest node that fully contains bbox.
    // The caller guarantees that node contains bbox.
    pub(crate) fn insert_into(&mut self, mut node: NodeIndex, key: K, bbox: Rectangle) -> NodeIndex {
        loop {
            if self.nodes[node].children.is_none() && !self.subdivide(node) {
                break;
            }
            let children = match self.nodes[node].children {
                Some(children) => children,
                None => break,
            };
            let destination = children
                .into_iter()
                .find(|&child| self.nodes[child].bounds.contains_rect(&bbox));
            match destination {
                Some(child) => node = child,
                None => break,
            }
        }
        self.nodes[node].entries.insert(key, bbox);
        node
    }

    // Split a node into quadrants, unless it is already at the minimum size or depth
    fn subdivide(&mut self, node: NodeIndex) -> bool {
        let bounds = self.nodes[node].bounds;
        let depth = self.nodes[node].depth;
        if bounds.width / 2.0 < self.config.min_size
            || bounds.height / 2.0 < self.config.min_size
            || depth >= self.config.max_depth
        {
            return false;
        }

        let children = quadrants(&bounds).map(|quadrant| self.alloc_node(quadrant, node, depth + 1));
        self.nodes[node].children = Some(children);
        trace!(node = node, depth = depth, "subdivided quadtree node");
        true
    }

    fn alloc_node(&mut self, bounds: Rectangle, parent: NodeIndex, depth: usize) -> NodeIndex {
        match self.free_nodes.pop() {
            Some(idx) => {
                self.nodes[idx].initialize(bounds, Some(parent), depth);
                idx
            }
            None => {
                self.nodes.push(Node::new_leaf(bounds, Some(parent), depth));
                self.nodes.len() - 1
            }
        }
    }

    pub(crate) fn free_node(&mut self, idx: NodeIndex) {
        debug_assert!(idx != ROOT, "the root node is never freed");
        self.nodes[idx].initialize(Rectangle::default(), None, 0);
        self.free_nodes.push(idx);
    }
}
