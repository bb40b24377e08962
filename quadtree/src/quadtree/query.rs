use super::types::{NodeIndex, NodeStack, ROOT};
use super::QuadTree;
use common::shapes::{Point, Rectangle};
use smallvec::smallvec;

impl<K: Copy> QuadTree<K> {
    /// Entries whose rectangle contains `point`.
    pub fn query_at(&self, point: Point, results: &mut Vec<K>) {
        self.query_at_with(point, |key| results.push(key));
    }

    pub fn query_at_with<F>(&self, point: Point, mut f: F)
    where
        F: FnMut(K),
    {
        let mut stack: NodeStack = smallvec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.bounds.contains_point(point) {
                continue;
            }
            for (&key, bbox) in node.entries.iter() {
                if bbox.contains_point(point) {
                    f(key);
                }
            }
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
    }

    /// Entries whose rectangle lies fully inside `area`.
    pub fn query(&self, area: &Rectangle, results: &mut Vec<K>) {
        self.query_with(area, |key| results.push(key));
    }

    pub fn query_with<F>(&self, area: &Rectangle, mut f: F)
    where
        F: FnMut(K),
    {
        let mut stack: NodeStack = smallvec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.bounds.intersects(area) {
                continue;
            }
            // Everything below a node inside the area qualifies
            if area.contains_rect(&node.bounds) {
                self.visit_subtree(idx, &mut f);
                continue;
            }
            for (&key, bbox) in node.entries.iter() {
                if area.contains_rect(bbox) {
                    f(key);
                }
            }
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
    }

    /// Entries whose rectangle intersects `area`, edges included.
    pub fn query_intersect(&self, area: &Rectangle, results: &mut Vec<K>) {
        self.query_intersect_with(area, |key| results.push(key));
    }

    pub fn query_intersect_with<F>(&self, area: &Rectangle, mut f: F)
    where
        F: FnMut(K),
    {
        let mut stack: NodeStack = smallvec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.bounds.intersects(area) {
                continue;
            }
            for (&key, bbox) in node.entries.iter() {
                if bbox.intersects(area) {
                    f(key);
                }
            }
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
    }

    pub fn query_all(&self, results: &mut Vec<K>) {
        self.query_all_with(|key| results.push(key));
    }

    pub fn query_all_with<F>(&self, mut f: F)
    where
        F: FnMut(K),
    {
        self.visit_subtree(ROOT, &mut f);
    }

    fn visit_subtree<F>(&self, start: NodeIndex, f: &mut F)
    where
        F: FnMut(K),
    {
        let mut stack: NodeStack = smallvec![start];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            for &key in node.entries.keys() {
                f(key);
            }
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
    }
}
