
//! Broad-phase index: a quadtree over a square region.
//!
//! Nodes live in one arena and refer to their children by index. A node splits
//! into four quadrants once it holds more than `max_objects` items, unless it is
//! already at `max_depth`. Nodes are never merged back.

use {
    crate::{
        dilate::Dilate,
        math::*,
        shapes::{AxisAlignedRectangle, Collidable},
    },
};

pub const MAX_OBJECTS: usize = 5;
pub const MAX_DEPTH: usize = 8;

/// How far each quadrant is grown past its half of the parent, so neighbouring
/// quadrants overlap rather than meet edge to edge.
pub const SPLIT_MARGIN: f64 = EPSILON;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadtreeConfig {
    pub max_objects: usize,
    pub max_depth:   usize,
    pub margin:      f64,
}

impl Default for QuadtreeConfig {
    fn default() -> QuadtreeConfig {
        QuadtreeConfig {
            max_objects: MAX_OBJECTS,
            max_depth:   MAX_DEPTH,
            margin:      SPLIT_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuadtreeError {
    #[error("object not found in the quadtree node at depth {depth}")]
    NotFound { depth: usize },
}

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone, Debug)]
struct Node<T> {
    depth:    usize,
    bound:    AxisAlignedRectangle,
    objects:  Vec<T>,
    children: Option<[NodeId; 4]>,
}

impl<T> Node<T> {
    fn new(depth: usize, bound: AxisAlignedRectangle) -> Node<T> {
        Node { depth, bound, objects: Vec::new(), children: None }
    }
}

#[derive(Clone, Debug)]
pub struct Quadtree<T> {
    nodes:  Vec<Node<T>>,
    config: QuadtreeConfig,
}

impl<T: Collidable> Quadtree<T> {
    pub fn new(bound: AxisAlignedRectangle) -> Quadtree<T> {
        Self::with_config(bound, QuadtreeConfig::default())
    }

    pub fn with_config(bound: AxisAlignedRectangle, config: QuadtreeConfig) -> Quadtree<T> {
        Quadtree { nodes: vec![Node::new(0, bound)], config }
    }

    pub fn bound(&self) -> AxisAlignedRectangle {
        self.nodes[ROOT].bound
    }

    pub fn config(&self) -> QuadtreeConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.iter()
            .map(|node| node.objects.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| node.objects.is_empty())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Deepest level any node has reached.
    pub fn depth(&self) -> usize {
        self.nodes.iter()
            .map(|node| node.depth)
            .max()
            .unwrap_or(0)
    }

    /// Drop every object and node, keeping the root bound.
    pub fn clear(&mut self) {
        let bound = self.bound();
        self.nodes.clear();
        self.nodes.push(Node::new(0, bound));
    }

    /// The child of `id` that alone encloses `bbox`. Insert, remove and lookup
    /// all descend by this rule so they agree on where an object lives.
    fn child_for(&self, id: NodeId, bbox: &AxisAlignedRectangle) -> Option<NodeId> {
        let children = self.nodes[id].children?;
        let mut enclosing = children.iter()
            .copied()
            .filter(|&child| self.nodes[child].bound.encloses_rect(bbox));

        match (enclosing.next(), enclosing.next()) {
            (Some(child), None) => Some(child),
            _                   => None,
        }
    }

    fn owner_of(&self, bbox: &AxisAlignedRectangle) -> NodeId {
        let mut id = ROOT;
        while let Some(child) = self.child_for(id, bbox) {
            id = child;
        }
        id
    }

    pub fn insert(&mut self, object: T) {
        let bbox = object.bounding_box();
        if !self.bound().encloses_rect(&bbox) {
            tracing::debug!(?bbox, "object outside quadtree bound, held at the root");
        }

        let id = self.owner_of(&bbox);
        self.nodes[id].objects.push(object);

        let node = &self.nodes[id];
        if node.objects.len() > self.config.max_objects
            && node.depth < self.config.max_depth
            && node.children.is_none()
        {
            self.split(id);
        }
    }

    fn split(&mut self, id: NodeId) {
        let depth = self.nodes[id].depth + 1;
        let quadrants = self.nodes[id].bound.quadrants();

        let first = self.nodes.len();
        for quadrant in quadrants.iter() {
            self.nodes.push(Node::new(depth, quadrant.expand(self.config.margin)));
        }
        self.nodes[id].children = Some([first, first + 1, first + 2, first + 3]);

        let held = std::mem::take(&mut self.nodes[id].objects);
        let total = held.len();
        for object in held {
            let target = self.child_for(id, &object.bounding_box())
                .unwrap_or(id);
            self.nodes[target].objects.push(object);
        }

        tracing::debug!(
            depth = depth - 1,
            objects = total,
            moved = total - self.nodes[id].objects.len(),
            "split quadtree node"
        );
    }

    /// Remove one object equal to `object` from the node its bounding box
    /// descends to.
    pub fn remove(&mut self, object: &T) -> Result<T, QuadtreeError>
        where T: PartialEq
    {
        let id = self.owner_of(&object.bounding_box());
        let node = &mut self.nodes[id];
        match node.objects.iter().position(|held| held == object) {
            Some(pos) => Ok(node.objects.remove(pos)),
            None => {
                tracing::warn!(depth = node.depth, "quadtree remove of an absent object");
                Err(QuadtreeError::NotFound { depth: node.depth })
            },
        }
    }

    pub fn find(&self, object: &T) -> Option<&T>
        where T: PartialEq
    {
        let id = self.owner_of(&object.bounding_box());
        self.nodes[id].objects.iter()
            .find(|held| *held == object)
    }

    pub fn all_objects(&self) -> Vec<&T> {
        self.nodes.iter()
            .flat_map(|node| node.objects.iter())
            .collect()
    }

    /// Broad phase: every object whose node could overlap `shape`.
    ///
    /// Objects held on the path down to `shape`'s node are always included, as
    /// is every child whose bound touches `shape`'s box, so that objects meeting
    /// it across a quadrant line are not lost.
    pub fn possible_collisions<S: Collidable + ?Sized>(&self, shape: &S) -> Vec<&T> {
        let bbox = shape.bounding_box();
        let mut found = Vec::new();
        let mut pending = vec![ROOT];

        while let Some(id) = pending.pop() {
            let node = &self.nodes[id];
            found.extend(node.objects.iter());

            if let Some(children) = node.children {
                pending.extend(children.iter()
                    .copied()
                    .filter(|&child| self.nodes[child].bound.expand(EPSILON).overlaps(&bbox)));
            }
        }

        found
    }

    /// Narrow phase over the broad-phase candidates.
    pub fn collided_objects<S: Collidable + ?Sized>(&self, shape: &S) -> Vec<&T> {
        self.possible_collisions(shape)
            .into_iter()
            .filter(|object| shape.collide(*object))
            .collect()
    }
}
