
//! Union of two polygons by tracing the outer boundary of their contour graph.
//!
//! Every edge of either polygon is cut at each cross point or enclosed vertex
//! lying on it; the pieces form an undirected graph. The outline is then walked
//! from the lowest-leftmost vertex, always taking the sharpest right turn, which
//! keeps the walk on the outside of the combined region.
//!
//! The walk only ever visits each node once and stops when it runs out of
//! unvisited neighbours, so shapes that touch in more than one disjoint place
//! may come back as a partial outline.

use {
    super::*,
    crate::math::*,
};

type NodeId = usize;

#[derive(Debug, Default)]
struct ContourGraph {
    nodes:     Vec<Point>,
    neighbors: Vec<Vec<NodeId>>,
}

impl ContourGraph {
    fn node(&mut self, p: Point) -> NodeId {
        match self.nodes.iter().position(|&q| q == p) {
            Some(id) => id,
            None => {
                self.nodes.push(p);
                self.neighbors.push(Vec::new());
                self.nodes.len() - 1
            }
        }
    }

    fn connect(&mut self, a: Point, b: Point) {
        if a == b {
            return;
        }
        let (a, b) = (self.node(a), self.node(b));
        if !self.neighbors[a].contains(&b) {
            self.neighbors[a].push(b);
            self.neighbors[b].push(a);
        }
    }

    /// Split the polygon edge `from -> to` at every cut point lying on it.
    fn add_edge(&mut self, from: Point, to: Point, cuts: &[Point]) {
        let edge = Segment::new(from, to);
        let mut on_edge: Vec<Point> = cuts.iter()
            .copied()
            .filter(|&p| edge.intersects_point(p))
            .collect();
        on_edge.push(from);
        on_edge.push(to);
        on_edge.sort_by_key(|p| OrdF64(from.distance(*p)));

        for pair in on_edge.windows(2) {
            self.connect(pair[0], pair[1]);
        }
    }

    fn trace(&self) -> Vec<Point> {
        let lowest = (0..self.nodes.len())
            .min_by(|&a, &b| self.nodes[a].total_cmp(&self.nodes[b]));
        let start = match lowest {
            Some(id) => id,
            None     => return Vec::new(),
        };

        let mut visited = vec![false; self.nodes.len()];
        let mut outline = Vec::new();

        // Nothing lies left of the start, so pretend we arrived heading down
        // its left side.
        let mut heading = Vector::new(0., -1.);
        let mut current = start;

        loop {
            visited[current] = true;
            outline.push(self.nodes[current]);

            match self.next_node(current, heading, &visited) {
                Some(next) => {
                    heading = (self.nodes[next] - self.nodes[current]).normalize();
                    current = next;
                },
                None => break,
            }
        }

        outline
    }

    /// Sharpest right turn off `heading`, or failing that the straightest way on.
    fn next_node(&self, current: NodeId, heading: Vector, visited: &[bool]) -> Option<NodeId> {
        let here = self.nodes[current];
        let candidates: Vec<(NodeId, Vector)> = self.neighbors[current].iter()
            .copied()
            .filter(|&id| !visited[id])
            .map(|id| (id, (self.nodes[id] - here).normalize()))
            .collect();

        let rightmost = candidates.iter()
            .filter(|(_, dir)| heading.cross(*dir) < -EPSILON)
            .min_by_key(|(_, dir)| OrdF64(heading.dot(*dir)));

        rightmost
            .or_else(|| candidates.iter().max_by_key(|(_, dir)| OrdF64(heading.dot(*dir))))
            .map(|&(id, _)| id)
    }
}

pub(super) fn union(a: &Polygon, b: &Polygon) -> Option<Polygon> {
    if !a.collide(b) {
        return None;
    }
    if a.encloses(b) {
        return Some(Polygon::new(a.points()));
    }
    if b.encloses(a) {
        return Some(Polygon::new(b.points()));
    }

    let mut cuts = a.intersection_points(b);
    for p in a.enclosed_points(b).into_iter().chain(b.enclosed_points(a)) {
        push_unique(&mut cuts, p);
    }

    let mut graph = ContourGraph::default();
    for poly in [a, b].iter() {
        let pts = poly.vertices();
        for (i, &from) in pts.iter().enumerate() {
            let to = pts[(i + 1) % pts.len()];
            graph.add_edge(from, to, &cuts);
        }
    }

    let outline = graph.trace();
    tracing::trace!(vertices = outline.len(), "traced union outline");
    Polygon::try_new(outline).ok()
}
