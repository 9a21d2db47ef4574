//! Arena-backed point quadtree with box-pruned range queries.
//!
//! The tree is built once from a fixed snapshot and is immutable afterwards.
//! Nodes live in a single `Vec` and refer to their children by index, and
//! leaves hold indices into the shared record slice rather than copies of
//! the records.
//!
//! ## Construction
//!
//! Every node covers the tight extent of the records beneath it, starting
//! with the root. A node whose bucket would exceed `bucket_capacity` is split
//! at its midpoint into four quadrants; a record on a split line goes to the
//! high side, and each child shrinks to the extent of its own records.
//! Splitting stops at `max_depth`, and a bucket is never split when all of
//! its records share one position or would all land in the same quadrant
//! (records closer together than float resolution). Empty quadrants are not
//! allocated.
//!
//! ## Queries
//!
//! A query walks the tree from the root and skips every node whose box does
//! not overlap the query rectangle. Surviving leaves are scanned and each
//! record is tested against the rectangle with inclusive bounds, so the
//! result never depends on how the tree happened to be partitioned.
//!
//! ```rust
//! use landfield::{Extent, IndexConfig, PointRecord, QuadTree};
//!
//! let records = vec![
//!     PointRecord::new(0.0, 0.0, 10.0, "A"),
//!     PointRecord::new(1.0, 1.0, 20.0, "A"),
//! ];
//! let tree = QuadTree::build(records, IndexConfig::default());
//!
//! let hits = tree.query(&Extent::new(0.0, 0.5, 0.0, 0.5));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].land_value, 10.0);
//! ```

use crate::config::IndexConfig;
use landfield_types::{Extent, Locate};
use smallvec::SmallVec;
use std::sync::Arc;

type NodeId = usize;

/// Leaf bucket of record indices; sized for the default capacity.
type Bucket = SmallVec<[usize; 8]>;

#[derive(Debug, Clone)]
enum NodeKind {
    Leaf(Bucket),
    Branch([Option<NodeId>; 4]),
}

#[derive(Debug, Clone)]
struct Node {
    bounds: Extent,
    kind: NodeKind,
}

/// Immutable 2-D point index over a shared snapshot of items.
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    items: Arc<[T]>,
    nodes: Vec<Node>,
    /// Items without a finite position. They cannot be placed in a quadrant
    /// and are tested directly on every query.
    unplaced: Vec<usize>,
    depth: usize,
    config: IndexConfig,
}

impl<T: Locate> QuadTree<T> {
    /// Build an index over `items`.
    ///
    /// Never fails: an empty snapshot produces an empty tree, and co-located
    /// items all share a leaf. A zero `bucket_capacity` is treated as one.
    pub fn build(items: impl Into<Arc<[T]>>, config: IndexConfig) -> Self {
        let items: Arc<[T]> = items.into();

        let mut placed = Vec::with_capacity(items.len());
        let mut unplaced = Vec::new();
        let mut bounds: Option<Extent> = None;

        for (idx, item) in items.iter().enumerate() {
            let (x, y) = (item.x(), item.y());
            if !(x.is_finite() && y.is_finite()) {
                unplaced.push(idx);
                continue;
            }
            placed.push(idx);
            bounds = Some(match bounds {
                Some(b) => b.include(x, y),
                None => Extent::new(x, x, y, y),
            });
        }

        if !unplaced.is_empty() {
            log::warn!(
                "{} item(s) have non-finite coordinates and are kept outside the tree",
                unplaced.len()
            );
        }

        let mut builder = Builder {
            items: &items[..],
            nodes: Vec::new(),
            capacity: config.bucket_capacity.max(1),
            max_depth: config.max_depth,
            depth: 0,
        };
        if let Some(bounds) = bounds {
            builder.build_node(bounds, placed, 0);
        }
        let Builder { nodes, depth, .. } = builder;

        log::debug!(
            "Built quadtree over {} items: {} nodes, depth {}",
            items.len(),
            nodes.len(),
            depth
        );

        Self {
            items,
            nodes,
            unplaced,
            depth,
            config,
        }
    }

    /// Collect every item whose position lies inside `rect` (inclusive).
    ///
    /// The order of the result is unspecified.
    pub fn query(&self, rect: &Extent) -> Vec<&T> {
        let mut out = Vec::new();
        self.for_each_in(rect, |idx| out.push(&self.items[idx]));
        out
    }

    /// Like [`query`](Self::query) but returns positions in the snapshot.
    pub fn query_indices(&self, rect: &Extent) -> Vec<usize> {
        let mut out = Vec::new();
        self.for_each_in(rect, |idx| out.push(idx));
        out
    }

    /// Visit every item inside `rect` without allocating a result vector.
    pub fn visit_in(&self, rect: &Extent, mut visit: impl FnMut(&T)) {
        self.for_each_in(rect, |idx| visit(&self.items[idx]));
    }

    /// Number of items inside `rect`.
    pub fn count_in(&self, rect: &Extent) -> usize {
        let mut count = 0;
        self.for_each_in(rect, |_| count += 1);
        count
    }

    fn for_each_in(&self, rect: &Extent, mut emit: impl FnMut(usize)) {
        if [rect.x_min, rect.x_max, rect.y_min, rect.y_max]
            .iter()
            .any(|v| v.is_nan())
        {
            log::warn!("Rejecting range query with NaN bounds");
            return;
        }

        let inside = |idx: usize| {
            let item = &self.items[idx];
            rect.contains(item.x(), item.y())
        };

        if !self.nodes.is_empty() {
            let mut stack: Vec<NodeId> = vec![0];
            while let Some(id) = stack.pop() {
                let node = &self.nodes[id];
                if !node.bounds.intersects(rect) {
                    continue;
                }
                match &node.kind {
                    NodeKind::Leaf(bucket) => {
                        for &idx in bucket {
                            if inside(idx) {
                                emit(idx);
                            }
                        }
                    }
                    NodeKind::Branch(children) => {
                        stack.extend(children.iter().flatten().copied());
                    }
                }
            }
        }

        for &idx in &self.unplaced {
            if inside(idx) {
                emit(idx);
            }
        }
    }
}

impl<T> QuadTree<T> {
    /// The indexed snapshot, in input order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Shared handle to the snapshot.
    pub fn shared_items(&self) -> Arc<[T]> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bounding extent of all placed items, or `None` for an empty tree.
    pub fn bounds(&self) -> Option<Extent> {
        self.nodes.first().map(|root| root.bounds)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Leaf(_)))
            .count()
    }

    /// Deepest level reached; the root is level 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Indices held by each leaf followed by the unplaced items.
    #[cfg(test)]
    fn leaf_members(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .nodes
            .iter()
            .filter_map(|n| match &n.kind {
                NodeKind::Leaf(bucket) => Some(bucket.iter().copied()),
                NodeKind::Branch(_) => None,
            })
            .flatten()
            .collect();
        out.extend(self.unplaced.iter().copied());
        out
    }
}

struct Builder<'a, T> {
    items: &'a [T],
    nodes: Vec<Node>,
    capacity: usize,
    max_depth: usize,
    depth: usize,
}

impl<T: Locate> Builder<'_, T> {
    fn build_node(&mut self, bounds: Extent, members: Vec<usize>, level: usize) -> NodeId {
        let id = self.nodes.len();
        self.depth = self.depth.max(level);

        if members.len() <= self.capacity || level >= self.max_depth || self.co_located(&members)
        {
            self.nodes.push(Node {
                bounds,
                kind: NodeKind::Leaf(Bucket::from_vec(members)),
            });
            return id;
        }

        let (cx, cy) = bounds.center();
        let total = members.len();
        let mut parts: [Vec<usize>; 4] = Default::default();
        for idx in members {
            let item = &self.items[idx];
            let quadrant = (usize::from(item.y() >= cy) << 1) | usize::from(item.x() >= cx);
            parts[quadrant].push(idx);
        }

        // The midpoint rounded onto a bound: every record landed on one side
        // and the child would repeat this node exactly.
        if let Some(slot) = parts.iter().position(|p| p.len() == total) {
            let members = std::mem::take(&mut parts[slot]);
            self.nodes.push(Node {
                bounds,
                kind: NodeKind::Leaf(Bucket::from_vec(members)),
            });
            return id;
        }

        self.nodes.push(Node {
            bounds,
            kind: NodeKind::Branch([None; 4]),
        });

        let mut children = [None; 4];
        for (slot, part) in parts.into_iter().enumerate() {
            if let Some(child_bounds) = self.extent_of(&part) {
                children[slot] = Some(self.build_node(child_bounds, part, level + 1));
            }
        }
        self.nodes[id].kind = NodeKind::Branch(children);
        id
    }

    /// Tight extent of `members`; always inside the quadrant they were
    /// assigned to.
    fn extent_of(&self, members: &[usize]) -> Option<Extent> {
        members.iter().fold(None, |acc, &idx| {
            let (x, y) = (self.items[idx].x(), self.items[idx].y());
            Some(match acc {
                Some(e) => e.include(x, y),
                None => Extent::new(x, x, y, y),
            })
        })
    }

    fn co_located(&self, members: &[usize]) -> bool {
        let Some((&first, rest)) = members.split_first() else {
            return true;
        };
        let (x, y) = (self.items[first].x(), self.items[first].y());
        rest.iter()
            .all(|&idx| self.items[idx].x() == x && self.items[idx].y() == y)
    }
}
