
pub mod aligned;
pub mod polygon;
pub mod random;
pub mod rect;
pub mod segment;

mod union;

pub use {
    aligned::AxisAlignedRectangle,
    polygon::Polygon,
    rect::{Anchor, Rectangle},
    segment::Segment,
};

use crate::math::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("axis-aligned rectangles cannot be rotated")]
    RotateAxisAligned,
    #[error("a polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),
}

pub(crate) fn push_unique(points: &mut Vec<Point>, p: Point) {
    if !points.contains(&p) {
        points.push(p);
    }
}

/// Everything the simulation asks of a collision shape.
///
/// Implementors supply their vertices, boundary edges, bounding box and a point
/// containment test; the narrow-phase predicates are derived from those.
pub trait Collidable {
    fn points(&self) -> Vec<Point>;

    /// Boundary segments. Empty for a bare point.
    fn edges(&self) -> Vec<Segment>;

    fn bounding_box(&self) -> AxisAlignedRectangle;

    /// True when `p` is inside the shape or on its boundary.
    fn encloses_point(&self, p: Point) -> bool;

    fn shift(&mut self, by: Vector);

    /// Hook for the axis-aligned fast paths.
    fn as_aligned(&self) -> Option<&AxisAlignedRectangle> {
        None
    }

    /// Points lying on the boundary of both shapes, deduplicated.
    fn intersection_points<O: Collidable + ?Sized>(&self, other: &O) -> Vec<Point> {
        let mine   = self.edges();
        let theirs = other.edges();
        let mut out = Vec::new();

        match (mine.is_empty(), theirs.is_empty()) {
            (false, false) => {
                for a in mine.iter() {
                    for b in theirs.iter() {
                        for p in a.intersection(b) {
                            push_unique(&mut out, p);
                        }
                    }
                }
            },
            (true, false) => {
                for p in self.points() {
                    if theirs.iter().any(|e| e.intersects_point(p)) {
                        push_unique(&mut out, p);
                    }
                }
            },
            (false, true) => {
                for p in other.points() {
                    if mine.iter().any(|e| e.intersects_point(p)) {
                        push_unique(&mut out, p);
                    }
                }
            },
            (true, true) => {
                let theirs = other.points();
                for p in self.points() {
                    if theirs.contains(&p) {
                        push_unique(&mut out, p);
                    }
                }
            },
        }

        out
    }

    /// Whether the boundaries touch or cross anywhere. Stops at the first hit.
    fn intersect<O: Collidable + ?Sized>(&self, other: &O) -> bool {
        let mine   = self.edges();
        let theirs = other.edges();

        match (mine.is_empty(), theirs.is_empty()) {
            (false, false) => {
                let their_box = other.bounding_box();
                mine.iter()
                    .filter(|a| a.bounding_box().overlaps(&their_box))
                    .any(|a| theirs.iter().any(|b| a.intersects_segment(b)))
            },
            (true, false) => self.points().into_iter()
                .any(|p| theirs.iter().any(|e| e.intersects_point(p))),
            (false, true) => other.points().into_iter()
                .any(|p| mine.iter().any(|e| e.intersects_point(p))),
            (true, true) => {
                let theirs = other.points();
                self.points().iter().any(|p| theirs.contains(p))
            },
        }
    }

    /// The points of `other` that this shape encloses.
    fn enclosed_points<O: Collidable + ?Sized>(&self, other: &O) -> Vec<Point> {
        other.points().into_iter()
            .filter(|p| self.encloses_point(*p))
            .collect()
    }

    fn encloses<O: Collidable + ?Sized>(&self, other: &O) -> bool {
        other.points().into_iter()
            .all(|p| self.encloses_point(p))
    }

    /// Exact narrow-phase test. Symmetric: either shape holding a point of the
    /// other counts, as does any boundary contact.
    fn collide<O: Collidable + ?Sized>(&self, other: &O) -> bool {
        if let (Some(a), Some(b)) = (self.as_aligned(), other.as_aligned()) {
            return a.overlaps(b);
        }

        if !self.bounding_box().overlaps(&other.bounding_box()) {
            return false;
        }

           self.intersect(other)
        || other.points().into_iter().any(|p| self.encloses_point(p))
        || self.points().into_iter().any(|p| other.encloses_point(p))
    }
}

pub trait Rotate {
    fn rotate_in_place(&mut self, angle: f64, center: Point);

    fn rotate(&self, angle: f64, center: Point) -> Self
        where Self: Clone
    {
        let mut rotated = self.clone();
        rotated.rotate_in_place(angle, center);
        rotated
    }
}

impl Collidable for Point {
    fn points(&self) -> Vec<Point> {
        vec![*self]
    }

    fn edges(&self) -> Vec<Segment> {
        Vec::new()
    }

    fn bounding_box(&self) -> AxisAlignedRectangle {
        AxisAlignedRectangle::new_unchecked(*self, *self)
    }

    fn encloses_point(&self, p: Point) -> bool {
        *self == p
    }

    fn shift(&mut self, by: Vector) {
        *self += by;
    }
}

impl Rotate for Point {
    fn rotate_in_place(&mut self, angle: f64, center: Point) {
        *self = Point::rotate(*self, angle, center);
    }
}

/// Closed set of shapes a game element can own.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Point(Point),
    Segment(Segment),
    Polygon(Polygon),
    Rectangle(Rectangle),
    AxisAlignedRect(AxisAlignedRectangle),
}

macro_rules! dispatch {
    ($shape:expr, $s:ident => $body:expr) => {
        match $shape {
            Shape::Point($s)           => $body,
            Shape::Segment($s)         => $body,
            Shape::Polygon($s)         => $body,
            Shape::Rectangle($s)       => $body,
            Shape::AxisAlignedRect($s) => $body,
        }
    };
}

impl Shape {
    pub fn rotate_in_place(&mut self, angle: f64, center: Point) -> Result<(), ShapeError> {
        match self {
            Shape::Point(p)           => p.rotate_in_place(angle, center),
            Shape::Segment(s)         => s.rotate_in_place(angle, center),
            Shape::Polygon(p)         => p.rotate_in_place(angle, center),
            Shape::Rectangle(r)       => r.rotate_in_place(angle, center),
            Shape::AxisAlignedRect(_) => return Err(ShapeError::RotateAxisAligned),
        }
        Ok(())
    }

    pub fn rotate(&self, angle: f64, center: Point) -> Result<Shape, ShapeError> {
        let mut rotated = self.clone();
        rotated.rotate_in_place(angle, center)?;
        Ok(rotated)
    }

    /// Cumulative rotation applied since creation.
    pub fn angle_rotated(&self) -> f64 {
        match self {
            Shape::Polygon(p)   => p.angle_rotated(),
            Shape::Rectangle(r) => r.angle_rotated(),
            _                   => 0.,
        }
    }

    pub fn rotation_center(&self) -> Point {
        match self {
            Shape::Point(p)           => *p,
            Shape::Segment(s)         => s.midpoint(),
            Shape::Polygon(p)         => p.rotation_center(),
            Shape::Rectangle(r)       => r.rotation_center(),
            Shape::AxisAlignedRect(r) => r.center(),
        }
    }

    /// The polygonal outline of this shape, if it has one.
    pub fn as_polygon(&self) -> Option<Polygon> {
        match self {
            Shape::Polygon(p)         => Some(p.clone()),
            Shape::Rectangle(r)       => Some(r.polygon().clone()),
            Shape::AxisAlignedRect(r) => Some(r.to_polygon()),
            _                         => None,
        }
    }

    /// Union of two polygonal shapes. `None` when they do not collide or
    /// either is a point or segment.
    pub fn union(&self, other: &Shape) -> Option<Polygon> {
        let a = self.as_polygon()?;
        let b = other.as_polygon()?;
        a.union(&b)
    }
}

impl Collidable for Shape {
    fn points(&self) -> Vec<Point> {
        dispatch!(self, s => s.points())
    }

    fn edges(&self) -> Vec<Segment> {
        dispatch!(self, s => s.edges())
    }

    fn bounding_box(&self) -> AxisAlignedRectangle {
        dispatch!(self, s => s.bounding_box())
    }

    fn encloses_point(&self, p: Point) -> bool {
        dispatch!(self, s => s.encloses_point(p))
    }

    fn shift(&mut self, by: Vector) {
        dispatch!(self, s => s.shift(by))
    }

    fn as_aligned(&self) -> Option<&AxisAlignedRectangle> {
        match self {
            Shape::AxisAlignedRect(r) => Some(r),
            _                         => None,
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Shape { Shape::Point(p) }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Shape { Shape::Segment(s) }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Shape { Shape::Polygon(p) }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Shape { Shape::Rectangle(r) }
}

impl From<AxisAlignedRectangle> for Shape {
    fn from(r: AxisAlignedRectangle) -> Shape { Shape::AxisAlignedRect(r) }
}
