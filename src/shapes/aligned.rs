
use {
    super::*,
    crate::{
        dilate::Dilate,
        math::*,
    },
};

/// A rectangle that is never rotated. Containment and overlap are plain
/// coordinate comparisons.
///
/// It deliberately does not implement [`Rotate`]; through [`Shape`] a rotation
/// request fails with [`ShapeError::RotateAxisAligned`].
#[derive(Clone, Copy, Debug)]
pub struct AxisAlignedRectangle {
    mins: Point,
    maxs: Point,
}

impl AxisAlignedRectangle {
    pub fn new_unchecked(mins: Point, maxs: Point) -> AxisAlignedRectangle {
        debug_assert!(mins.x <= maxs.x);
        debug_assert!(mins.y <= maxs.y);
        AxisAlignedRectangle { mins, maxs }
    }

    /// From any two opposite corners.
    pub fn new(a: Point, b: Point) -> AxisAlignedRectangle {
        let minx = a.x.min(b.x);
        let miny = a.y.min(b.y);
        let maxx = a.x.max(b.x);
        let maxy = a.y.max(b.y);
        AxisAlignedRectangle::new_unchecked(Point::new(minx, miny), Point::new(maxx, maxy))
    }

    pub fn from_center(center: Point, width: f64, height: f64) -> AxisAlignedRectangle {
        let half = Vector::new(width * 0.5, height * 0.5);
        Self::new(center - half, center + half)
    }

    pub fn mins(&self) -> Point {
        self.mins
    }

    pub fn maxs(&self) -> Point {
        self.maxs
    }

    pub fn width(&self) -> f64 {
        self.maxs.x - self.mins.x
    }

    pub fn height(&self) -> f64 {
        self.maxs.y - self.mins.y
    }

    pub fn dims(&self) -> Vector {
        Vector::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        self.mins.midpoint(self.maxs)
    }

    /// Inclusive of the boundary, within `EPSILON`.
    pub fn contains(&self, p: Point) -> bool {
           p.x >= self.mins.x - EPSILON && p.x <= self.maxs.x + EPSILON
        && p.y >= self.mins.y - EPSILON && p.y <= self.maxs.y + EPSILON
    }

    pub fn encloses_rect(&self, other: &AxisAlignedRectangle) -> bool {
        self.contains(other.mins) && self.contains(other.maxs)
    }

    /// Whether the two regions share any point, boundaries included.
    pub fn overlaps(&self, other: &AxisAlignedRectangle) -> bool {
           other.mins.x <= self.maxs.x + EPSILON
        && other.maxs.x >= self.mins.x - EPSILON
        && other.mins.y <= self.maxs.y + EPSILON
        && other.maxs.y >= self.mins.y - EPSILON
    }

    fn strictly_inside(&self, other: &AxisAlignedRectangle) -> bool {
           self.mins.x > other.mins.x + EPSILON && self.maxs.x < other.maxs.x - EPSILON
        && self.mins.y > other.mins.y + EPSILON && self.maxs.y < other.maxs.y - EPSILON
    }

    /// The four half-size quarters: top-left, top-right, bottom-right, bottom-left.
    pub fn quadrants(&self) -> [AxisAlignedRectangle; 4] {
        let c = self.center();
        [   AxisAlignedRectangle::new(self.anchor(Anchor::TopLeft), c),
            AxisAlignedRectangle::new(self.maxs, c),
            AxisAlignedRectangle::new(self.anchor(Anchor::BottomRight), c),
            AxisAlignedRectangle::new(self.mins, c),
        ]
    }

    /// Corners in top-left, top-right, bottom-right, bottom-left order.
    pub fn vertices(&self) -> [Point; 4] {
        [   Point::new(self.mins.x, self.maxs.y),
            self.maxs,
            Point::new(self.maxs.x, self.mins.y),
            self.mins,
        ]
    }

    pub fn sides(&self) -> [Segment; 4] {
        let vs = self.vertices();
        [   Segment::new(vs[0], vs[1]),
            Segment::new(vs[1], vs[2]),
            Segment::new(vs[2], vs[3]),
            Segment::new(vs[3], vs[0]),
        ]
    }

    pub fn anchor(&self, which: Anchor) -> Point {
        let c = self.center();
        match which {
            Anchor::TopLeft     => Point::new(self.mins.x, self.maxs.y),
            Anchor::TopRight    => self.maxs,
            Anchor::BottomRight => Point::new(self.maxs.x, self.mins.y),
            Anchor::BottomLeft  => self.mins,
            Anchor::Top         => Point::new(c.x, self.maxs.y),
            Anchor::Right       => Point::new(self.maxs.x, c.y),
            Anchor::Bottom      => Point::new(c.x, self.mins.y),
            Anchor::Left        => Point::new(self.mins.x, c.y),
            Anchor::Center      => c,
        }
    }

    /// Move the whole rectangle so that `which` lands on `to`.
    pub fn set_anchor(&mut self, which: Anchor, to: Point) {
        let delta = to - self.anchor(which);
        self.shift(delta);
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices().to_vec())
    }
}

impl PartialEq for AxisAlignedRectangle {
    fn eq(&self, rhs: &AxisAlignedRectangle) -> bool {
        self.mins == rhs.mins && self.maxs == rhs.maxs
    }
}

impl Collidable for AxisAlignedRectangle {
    fn points(&self) -> Vec<Point> {
        self.vertices().to_vec()
    }

    fn edges(&self) -> Vec<Segment> {
        self.sides().to_vec()
    }

    fn bounding_box(&self) -> AxisAlignedRectangle {
        *self
    }

    fn encloses_point(&self, p: Point) -> bool {
        self.contains(p)
    }

    fn shift(&mut self, by: Vector) {
        self.mins += by;
        self.maxs += by;
    }

    fn as_aligned(&self) -> Option<&AxisAlignedRectangle> {
        Some(self)
    }

    fn intersect<O: Collidable + ?Sized>(&self, other: &O) -> bool {
        match other.as_aligned() {
            Some(r) => self.overlaps(r)
                && !self.strictly_inside(r)
                && !r.strictly_inside(self),
            None => {
                let mine = self.edges();
                other.edges().iter()
                    .any(|b| mine.iter().any(|a| a.intersects_segment(b)))
                || (other.edges().is_empty()
                    && other.points().into_iter().any(|p| mine.iter().any(|e| e.intersects_point(p))))
            },
        }
    }

    fn encloses<O: Collidable + ?Sized>(&self, other: &O) -> bool {
        match other.as_aligned() {
            Some(r) => self.encloses_rect(r),
            None    => other.points().into_iter().all(|p| self.contains(p)),
        }
    }
}

impl Dilate for AxisAlignedRectangle {
    /// A negative margin shrinks; shrinking past zero size flips back into a
    /// valid box around the center.
    fn expand(&self, margin: f64) -> AxisAlignedRectangle {
        let by = Vector::new(margin, margin);
        AxisAlignedRectangle::new(self.mins - by, self.maxs + by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x0: f64, y0: f64, x1: f64, y1: f64) -> AxisAlignedRectangle {
        AxisAlignedRectangle::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn corners_normalize() {
        let r = aabb(3., -1., 1., 4.);
        assert_eq!(r.mins(), Point::new(1., -1.));
        assert_eq!(r.maxs(), Point::new(3., 4.));
        assert_eq!(r.dims(), Vector::new(2., 5.));
        assert_eq!(r.points(), vec![
            Point::new(1., 4.), Point::new(3., 4.), Point::new(3., -1.), Point::new(1., -1.),
        ]);
    }

    #[test]
    fn fast_paths_agree_with_polygon_paths() {
        let cases = [
            (aabb(0., 0., 2., 2.), aabb(1., 1., 3., 3.)),
            (aabb(0., 0., 4., 4.), aabb(1., 1., 2., 2.)),
            (aabb(0., 0., 1., 1.), aabb(1., 0., 2., 1.)),
            (aabb(0., 0., 1., 1.), aabb(1., 1., 2., 2.)),
            (aabb(0., 0., 1., 1.), aabb(3., 3., 4., 4.)),
            (aabb(0., 0., 3., 1.), aabb(1., -1., 2., 2.)),
        ];
        for (a, b) in cases.iter() {
            let (pa, pb) = (a.to_polygon(), b.to_polygon());
            assert_eq!(a.intersect(b), pa.intersect(&pb), "{:?} {:?}", a, b);
            assert_eq!(a.encloses(b), pa.encloses(&pb), "{:?} {:?}", a, b);
            assert_eq!(a.collide(b), pa.collide(&pb), "{:?} {:?}", a, b);
            assert_eq!(a.intersect(&pb), pa.intersect(b), "{:?} {:?}", a, b);
        }
    }

    #[test]
    fn anchors_move_the_whole_rectangle() {
        let mut r = aabb(0., 0., 2., 1.);
        assert_eq!(r.anchor(Anchor::Top), Point::new(1., 1.));
        assert_eq!(r.anchor(Anchor::Left), Point::new(0., 0.5));

        r.set_anchor(Anchor::TopLeft, Point::new(10., 10.));
        assert_eq!(r.mins(), Point::new(10., 9.));
        assert_eq!(r.maxs(), Point::new(12., 10.));

        r.set_anchor(Anchor::Center, Point::origin());
        assert_eq!(r, AxisAlignedRectangle::from_center(Point::origin(), 2., 1.));
    }

    #[test]
    fn quadrants_tile_the_parent() {
        let r = aabb(0., 0., 4., 4.);
        let q = r.quadrants();
        assert_eq!(q[0], aabb(0., 2., 2., 4.));
        assert_eq!(q[1], aabb(2., 2., 4., 4.));
        assert_eq!(q[2], aabb(2., 0., 4., 2.));
        assert_eq!(q[3], aabb(0., 0., 2., 2.));
    }

    #[test]
    fn dilate_by_margin() {
        let r = aabb(0., 0., 2., 2.);
        assert_eq!(r.expand(0.5), aabb(-0.5, -0.5, 2.5, 2.5));
        assert_eq!(r.expand(0.5).contract(0.5), r);
    }
}
