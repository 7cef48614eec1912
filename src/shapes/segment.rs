
use {
    super::*,
    crate::math::*,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Slope {
    Vertical { x: f64 },
    Sloped   { slope: f64, intercept: f64 },
}

impl Slope {
    fn through(start: Point, end: Point) -> Slope {
        let dx = end.x - start.x;
        if dx.abs() < EPSILON {
            Slope::Vertical { x: start.x }
        }
        else {
            let slope = (end.y - start.y) / dx;
            Slope::Sloped { slope, intercept: start.y - slope * start.x }
        }
    }
}

/// A line segment. Endpoints are kept ordered so that `start.x <= end.x`, and the
/// slope/intercept pair is cached alongside them.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    start: Point,
    end:   Point,
    line:  Slope,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Segment {
        let (start, end) = if b.x < a.x { (b, a) }
                           else         { (a, b) };
        Segment { start, end, line: Slope::through(start, end) }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn set_endpoints(&mut self, a: Point, b: Point) {
        *self = Segment::new(a, b);
    }

    /// `None` for vertical segments.
    pub fn slope(&self) -> Option<f64> {
        match self.line {
            Slope::Vertical { .. }      => None,
            Slope::Sloped { slope, .. } => Some(slope),
        }
    }

    pub fn intercept(&self) -> Option<f64> {
        match self.line {
            Slope::Vertical { .. }          => None,
            Slope::Sloped { intercept, .. } => Some(intercept),
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.slope().is_none()
    }

    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.start.x - EPSILON && x <= self.end.x + EPSILON
    }

    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.min_y() - EPSILON && y <= self.max_y() + EPSILON
    }

    /// The y of the supporting line at `x`; `None` for vertical segments.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self.line {
            Slope::Vertical { .. }             => None,
            Slope::Sloped { slope, intercept } => Some(slope * x + intercept),
        }
    }

    pub fn at(&self, t: f64) -> Point {
        self.start.lerp(self.end, t)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    pub fn distance_to_point(&self, p: Point) -> f64 {
        let along = self.end - self.start;
        let len2 = along.length_squared();
        if len2 < EPSILON * EPSILON {
            return self.start.distance(p);
        }
        let t = ((p - self.start).dot(along) / len2).max(0.).min(1.);
        self.at(t).distance(p)
    }

    pub fn intersects_point(&self, p: Point) -> bool {
        self.contains_x(p.x)
            && self.contains_y(p.y)
            && self.distance_to_point(p) < EPSILON
    }

    pub fn intersects_segment(&self, other: &Segment) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Intersection points with `other`: none, one, or the two ends of the shared
    /// stretch when the segments overlap collinearly.
    pub fn intersection(&self, other: &Segment) -> Vec<Point> {
        if !self.bounding_box().overlaps(&other.bounding_box()) {
            return Vec::new();
        }

        match (self.line, other.line) {
            (Slope::Vertical { x: xa }, Slope::Vertical { x: xb }) => {
                if !approx_eq(xa, xb) {
                    return Vec::new();
                }
                let lo = self.min_y().max(other.min_y());
                let hi = self.max_y().min(other.max_y());
                if lo > hi + EPSILON {
                    return Vec::new();
                }
                overlap_ends(Point::new(xa, lo), Point::new(xa, hi))
            },
            (Slope::Vertical { x }, Slope::Sloped { .. }) => vertical_crossing(self, x, other),
            (Slope::Sloped { .. }, Slope::Vertical { x }) => vertical_crossing(other, x, self),
            (Slope::Sloped { slope: sa, intercept: ba },
             Slope::Sloped { slope: sb, intercept: bb }) => {
                if approx_eq(sa, sb) {
                    if !approx_eq(ba, bb) {
                        return Vec::new();
                    }
                    let lo = self.start.x.max(other.start.x);
                    let hi = self.end.x.min(other.end.x);
                    // The start of the later segment and the end of the earlier
                    // one are real endpoints; avoids re-evaluating the line.
                    let first = if self.start.x >= other.start.x { self.start } else { other.start };
                    let last  = if self.end.x   <= other.end.x   { self.end   } else { other.end   };
                    if lo > hi + EPSILON {
                        return Vec::new();
                    }
                    return overlap_ends(first, last);
                }

                let x = (bb - ba) / (sa - sb);
                if !self.contains_x(x) || !other.contains_x(x) {
                    return Vec::new();
                }
                // Evaluate on the flatter line; it loses less to rounding.
                let y = if sa.abs() <= sb.abs() { sa * x + ba }
                        else                    { sb * x + bb };
                vec![Point::new(x, y)]
            },
        }
    }

    pub fn bounding_box(&self) -> AxisAlignedRectangle {
        AxisAlignedRectangle::new(self.start, self.end)
    }
}

fn overlap_ends(first: Point, last: Point) -> Vec<Point> {
    if first == last {
        vec![first]
    }
    else {
        vec![first, last]
    }
}

fn vertical_crossing(vertical: &Segment, x: f64, sloped: &Segment) -> Vec<Point> {
    if !sloped.contains_x(x) {
        return Vec::new();
    }
    match sloped.y_at(x) {
        Some(y) if vertical.contains_y(y) => vec![Point::new(x, y)],
        _                                 => Vec::new(),
    }
}

impl PartialEq for Segment {
    fn eq(&self, rhs: &Segment) -> bool {
        self.start == rhs.start && self.end == rhs.end
    }
}

impl Linear for Segment {
    fn whole_line(&self) -> Line {
        Line::through(self.start, self.end)
    }

    fn parameter_on(&self, t: f64) -> bool {
        t >= -EPSILON && t <= 1. + EPSILON
    }
}

impl Collidable for Segment {
    fn points(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }

    fn edges(&self) -> Vec<Segment> {
        vec![*self]
    }

    fn bounding_box(&self) -> AxisAlignedRectangle {
        Segment::bounding_box(self)
    }

    fn encloses_point(&self, p: Point) -> bool {
        self.intersects_point(p)
    }

    fn shift(&mut self, by: Vector) {
        self.set_endpoints(self.start + by, self.end + by);
    }
}

impl Rotate for Segment {
    fn rotate_in_place(&mut self, angle: f64, center: Point) {
        self.set_endpoints(self.start.rotate(angle, center), self.end.rotate(angle, center));
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::f64::consts::PI,
    };

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn endpoints_are_ordered_by_x() {
        let s = seg(3., 1., -1., 5.);
        assert_eq!(s.start(), Point::new(-1., 5.));
        assert_eq!(s.end(), Point::new(3., 1.));
        assert!(approx_eq(s.slope().unwrap(), -1.));
        assert!(approx_eq(s.intercept().unwrap(), 4.));
        assert!(seg(2., 0., 2., 7.).is_vertical());
    }

    #[test]
    fn cache_follows_mutation() {
        let mut s = seg(0., 0., 2., 2.);
        s.shift(Vector::new(0., 1.));
        assert!(approx_eq(s.intercept().unwrap(), 1.));
        s.rotate_in_place(PI / 4., s.start());
        assert!(s.is_vertical());
        assert_eq!(s.end(), Point::new(0., 1. + 8f64.sqrt()));
    }

    #[test]
    fn general_crossing() {
        let a = seg(0., 0., 4., 4.);
        let b = seg(0., 4., 4., 0.);
        assert_eq!(a.intersection(&b), vec![Point::new(2., 2.)]);
        assert!(seg(0., 0., 1., 1.).intersection(&seg(3., 0., 2., 1.)).is_empty());
    }

    #[test]
    fn shared_endpoint_counts() {
        let a = seg(0., 0., 1., 1.);
        let b = seg(1., 1., 2., 0.);
        assert_eq!(a.intersection(&b), vec![Point::new(1., 1.)]);
    }

    #[test]
    fn one_vertical() {
        let v = seg(1., -1., 1., 3.);
        let s = seg(0., 0., 2., 2.);
        assert_eq!(v.intersection(&s), vec![Point::new(1., 1.)]);
        assert_eq!(s.intersection(&v), vec![Point::new(1., 1.)]);
        assert!(seg(1., 2., 1., 3.).intersection(&s).is_empty());
    }

    #[test]
    fn both_vertical() {
        let a = seg(1., 0., 1., 3.);
        assert_eq!(a.intersection(&seg(1., 2., 1., 5.)), vec![Point::new(1., 2.), Point::new(1., 3.)]);
        assert_eq!(a.intersection(&seg(1., 3., 1., 5.)), vec![Point::new(1., 3.)]);
        assert!(a.intersection(&seg(1., 4., 1., 5.)).is_empty());
        assert!(a.intersection(&seg(2., 0., 2., 3.)).is_empty());
    }

    #[test]
    fn collinear_overlap() {
        let a = seg(0., 0., 4., 2.);
        let b = seg(2., 1., 6., 3.);
        assert_eq!(a.intersection(&b), vec![Point::new(2., 1.), Point::new(4., 2.)]);
        assert_eq!(a.intersection(&seg(4., 2., 6., 3.)), vec![Point::new(4., 2.)]);
        assert!(a.intersection(&seg(5., 2.5, 6., 3.)).is_empty());
        assert!(a.intersection(&seg(0., 1., 4., 3.)).is_empty());
    }

    #[test]
    fn ray_meets_segment() {
        let s = seg(1., 2., -1., 2.);
        assert_eq!(s.stride(), Vector::new(2., 0.));

        let up = Ray::new(Point::origin(), Vector::new(0., 1.));
        assert_eq!(up.source(), Point::origin());
        let ix = up.intersect(&s).unwrap();
        assert!(approx_eq(ix.lambda, 2.));
        assert!(approx_eq(ix.mu, 0.5));
        assert_eq!(ix.point, Point::new(0., 2.));

        assert!(Ray::new(Point::new(3., 0.), Vector::new(0., 1.)).intersect(&s).is_none());
        assert!(Ray::new(Point::new(0., 3.), Vector::new(0., 1.)).intersect(&s).is_none());
    }

    #[test]
    fn point_queries() {
        let s = seg(0., 0., 4., 0.);
        assert!(s.intersects_point(Point::new(2., 0.)));
        assert!(s.intersects_point(Point::new(4., 0.)));
        assert!(!s.intersects_point(Point::new(5., 0.)));
        assert!(!s.intersects_point(Point::new(2., 0.1)));
        assert!(approx_eq(s.distance_to_point(Point::new(2., 3.)), 3.));
        assert!(approx_eq(s.distance_to_point(Point::new(7., 4.)), 5.));
        assert_eq!(s.at(0.25), Point::new(1., 0.));
        assert!(s.contains_x(0.) && s.contains_x(4.) && !s.contains_x(4.1));
        assert!(s.contains_y(0.) && !s.contains_y(-0.1));
    }

    #[test]
    fn rotation_does_not_break_contact() {
        let a = seg(0., 0., 3., 1.);
        let mut b = seg(3., 1., 5., -2.);
        for _ in 0..1000 {
            b.rotate_in_place(0.7, Point::origin());
            b.rotate_in_place(-0.7, Point::origin());
        }
        assert!(a.intersects_segment(&b));
    }
}
