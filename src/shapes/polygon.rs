
use {
    super::*,
    crate::math::*,
};

/// Sideways tilt of the containment rays, so that a ray leaving along an axis
/// does not run exactly through vertices sharing the test point's x or y.
const RAY_SKEW: f64 = 1e-4;

const RAY_DIRECTIONS: [(f64, f64); 4] = [
    ( RAY_SKEW,  1.),
    ( 1.,       -RAY_SKEW),
    (-RAY_SKEW, -1.),
    (-1.,        RAY_SKEW),
];

/// A simple closed polygon. Vertex order is part of its identity.
#[derive(Clone, Debug)]
pub struct Polygon {
    points:          Vec<Point>,
    angle_rotated:   f64,
    rotation_center: Option<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Polygon {
        assert!(points.len() >= 3, "a polygon needs at least 3 points, got {}", points.len());
        Polygon { points, angle_rotated: 0., rotation_center: None }
    }

    pub fn try_new(points: Vec<Point>) -> Result<Polygon, ShapeError> {
        if points.len() < 3 {
            Err(ShapeError::TooFewPoints(points.len()))
        }
        else {
            Ok(Polygon::new(points))
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edge `i` runs from vertex `i` to vertex `i + 1`, wrapping at the end.
    pub fn edge(&self, i: usize) -> Segment {
        let n = self.points.len();
        Segment::new(self.points[i % n], self.points[(i + 1) % n])
    }

    /// Mean of the vertices.
    pub fn centroid(&self) -> Point {
        let n = self.points.len() as f64;
        let sum = self.points.iter()
            .fold(Vector::zero(), |acc, p| acc + p.coords());
        Point::origin() + sum / n
    }

    pub fn rotation_center(&self) -> Point {
        self.rotation_center
            .unwrap_or_else(|| self.centroid())
    }

    /// Pin a logical rotation center, or go back to the centroid with `None`.
    pub fn set_rotation_center(&mut self, center: Option<Point>) {
        self.rotation_center = center;
    }

    pub fn angle_rotated(&self) -> f64 {
        self.angle_rotated
    }

    /// Rotate so that `angle_rotated` ends up equal to `angle`.
    pub fn rotate_to(&mut self, angle: f64, center: Point) {
        let delta = angle - self.angle_rotated;
        self.rotate_in_place(delta, center);
    }

    /// Same vertices regardless of order or winding. Each vertex is paired with
    /// the nearest unpaired vertex of `other`, which has to be equal to it.
    pub fn equal_pt_set(&self, other: &Polygon) -> bool {
        if self.points.len() != other.points.len() {
            return false;
        }

        let mut unpaired = other.points.clone();
        for p in self.points.iter() {
            let nearest = unpaired.iter()
                .enumerate()
                .min_by_key(|(_, q)| OrdF64(p.distance(**q)))
                .map(|(i, _)| i);

            match nearest {
                Some(i) if unpaired[i] == *p => { unpaired.swap_remove(i); },
                _                            => return false,
            }
        }
        true
    }

    /// Edges straddling the ray's line and crossing it ahead of the source.
    /// A vertex lying on the line counts as being on its right.
    fn crossings(&self, ray: &Ray) -> usize {
        let (source, heading) = (ray.source(), ray.stride());
        let left_of = |p: Point| heading.cross(p - source) > 0.;

        (0..self.points.len())
            .map(|i| self.edge(i))
            .filter(|edge| left_of(edge.start()) != left_of(edge.end()))
            .filter(|edge| ray.intersect(edge).is_some())
            .count()
    }

    /// Union of two colliding polygons. See the `union` module for the trace.
    pub fn union(&self, other: &Polygon) -> Option<Polygon> {
        super::union::union(self, other)
    }
}

impl PartialEq for Polygon {
    fn eq(&self, rhs: &Polygon) -> bool {
        self.points == rhs.points
    }
}

impl Collidable for Polygon {
    fn points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn edges(&self) -> Vec<Segment> {
        (0..self.points.len())
            .map(|i| self.edge(i))
            .collect()
    }

    fn bounding_box(&self) -> AxisAlignedRectangle {
        let first = self.points[0];
        let (mins, maxs) = self.points.iter()
            .fold((first, first), |(lo, hi), p| (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            ));
        AxisAlignedRectangle::new_unchecked(mins, maxs)
    }

    /// Points on the boundary are enclosed. Otherwise casts four slightly skewed
    /// axis rays and accepts the point if any of them crosses the boundary an odd
    /// number of times.
    fn encloses_point(&self, p: Point) -> bool {
        let bound = self.bounding_box();
        if !bound.contains(p) {
            return false;
        }
        if (0..self.points.len()).any(|i| self.edge(i).intersects_point(p)) {
            return true;
        }

        RAY_DIRECTIONS.iter()
            .map(|&(x, y)| Ray::new(p, Vector::new(x, y)))
            .any(|ray| self.crossings(&ray) % 2 == 1)
    }

    fn shift(&mut self, by: Vector) {
        for p in self.points.iter_mut() {
            *p += by;
        }
        if let Some(center) = self.rotation_center.as_mut() {
            *center += by;
        }
    }
}

impl Rotate for Polygon {
    fn rotate_in_place(&mut self, angle: f64, center: Point) {
        for p in self.points.iter_mut() {
            *p = p.rotate(angle, center);
        }
        if let Some(pinned) = self.rotation_center.as_mut() {
            *pinned = pinned.rotate(angle, center);
        }
        self.angle_rotated += angle;
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        pcg_rand::Pcg32Basic,
        rand::SeedableRng,
        std::f64::consts::PI,
    };

    fn poly(points: &[(f64, f64)]) -> Polygon {
        Polygon::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    #[should_panic]
    fn too_few_points_panics() {
        poly(&[(0., 0.), (1., 1.)]);
    }

    #[test]
    fn try_new_reports_too_few_points() {
        assert_eq!(Polygon::try_new(vec![Point::origin()]), Err(ShapeError::TooFewPoints(1)));
        assert!(Polygon::try_new(vec![Point::origin(), Point::new(1., 0.), Point::new(0., 1.)]).is_ok());
    }

    #[test]
    fn convex_containment() {
        let square = poly(&[(0., 0.), (2., 0.), (2., 2.), (0., 2.)]);
        assert!(square.encloses_point(Point::new(1., 1.)));
        assert!(square.encloses_point(Point::new(0., 1.)));
        assert!(square.encloses_point(Point::new(2., 2.)));
        assert!(!square.encloses_point(Point::new(3., 1.)));
        assert!(!square.encloses_point(Point::new(-1e-3, 1.)));
    }

    #[test]
    fn concave_containment() {
        // A "U" opening upwards.
        let u = poly(&[(0., 0.), (3., 0.), (3., 3.), (2., 3.), (2., 1.), (1., 1.), (1., 3.), (0., 3.)]);
        assert!(u.encloses_point(Point::new(0.5, 2.)));
        assert!(u.encloses_point(Point::new(2.5, 2.)));
        assert!(u.encloses_point(Point::new(1.5, 0.5)));
        assert!(!u.encloses_point(Point::new(1.5, 2.)));
        assert!(!u.encloses_point(Point::new(1.5, 1. + 1e-3)));
    }

    #[test]
    fn vertex_aligned_point() {
        // Square with a "V" cut into its top; the notch vertex sits at (2, 2).
        let notched = poly(&[(0., 0.), (4., 0.), (4., 4.), (2., 2.), (0., 4.)]);
        assert!(!notched.encloses_point(Point::new(2., 3.)));
        assert!(notched.encloses_point(Point::new(2., 1.)));
        assert!(notched.encloses_point(Point::new(2., 2.)));
        assert!(notched.encloses_point(Point::new(1., 2.)));
    }

    #[test]
    fn ray_through_a_touching_vertex() {
        // The upward ray from (1, 0) grazes the vertex at (1.0001, 1), where the
        // boundary touches its line without crossing.
        let kite = poly(&[(-1., -1.), (0., -1.), (0., 0.9), (1.0001, 1.), (-1., 1.5)]);
        let outside = Point::new(1., 0.);
        assert!(kite.bounding_box().contains(outside));
        for &(x, y) in RAY_DIRECTIONS.iter() {
            assert_eq!(kite.crossings(&Ray::new(outside, Vector::new(x, y))) % 2, 0);
        }
        assert!(!kite.encloses_point(outside));
        assert!(!kite.collide(&outside));
        assert!(!outside.collide(&kite));
        assert!(kite.encloses_point(Point::new(-0.5, 0.)));
    }

    #[test]
    fn dense_vertices_compare_as_sets() {
        let step = 0.6 * EPSILON;
        let pts: Vec<Point> = (0..400)
            .map(|i| Point::new(i as f64 * step, (i % 2) as f64 * step))
            .collect();
        let forward = Polygon::new(pts.clone());
        let backward = Polygon::new(pts.into_iter().rev().collect());
        assert!(forward.equal_pt_set(&backward));

        let mut moved = backward.clone();
        moved.shift(Vector::new(0., 1.));
        assert!(!forward.equal_pt_set(&moved));
    }

    #[test]
    fn ordered_and_unordered_equality() {
        let a = poly(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
        let b = poly(&[(1., 1.), (0., 1.), (0., 0.), (1., 0.)]);
        let c = poly(&[(0., 0.), (0., 1.), (1., 1.), (1., 0.)]);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert!(a.equal_pt_set(&b));
        assert!(a.equal_pt_set(&c));
        assert_eq!(a, a.clone());
        assert!(!a.equal_pt_set(&poly(&[(0., 0.), (1., 0.), (1., 1.)])));
        assert!(!a.equal_pt_set(&poly(&[(0., 0.), (1., 0.), (1., 1.), (0., 2.)])));
    }

    #[test]
    fn rotation_bookkeeping() {
        let mut p = poly(&[(0., 0.), (2., 0.), (2., 2.), (0., 2.)]);
        assert_eq!(p.rotation_center(), Point::new(1., 1.));

        p.set_rotation_center(Some(Point::new(0., 0.)));
        p.shift(Vector::new(1., 1.));
        assert_eq!(p.rotation_center(), Point::new(1., 1.));

        let c = p.rotation_center();
        p.rotate_in_place(PI / 2., c);
        p.rotate_in_place(PI / 4., c);
        assert!(approx_eq(p.angle_rotated(), 3. * PI / 4.));

        p.rotate_to(0., c);
        assert!(approx_eq(p.angle_rotated(), 0.));
        assert_eq!(p.vertices()[0], Point::new(1., 1.));
        assert_eq!(p.vertices()[2], Point::new(3., 3.));
    }

    #[test]
    fn bounding_box_of_rotated_square() {
        let p = poly(&[(-1., -1.), (1., -1.), (1., 1.), (-1., 1.)]).rotate(PI / 4., Point::origin());
        let bb = p.bounding_box();
        let r = 2f64.sqrt();
        assert_eq!(bb.mins(), Point::new(-r, -r));
        assert_eq!(bb.maxs(), Point::new(r, r));
    }

    #[test]
    fn large_random_polygons_sharing_a_vertex_collide() {
        let mut rng = Pcg32Basic::seed_from_u64(42);
        let a = random::star_polygon(&mut rng, Point::new(0., 0.), 50., 5000, 0.);
        let b = random::star_polygon(&mut rng, Point::new(100., 0.), 50., 5000, PI);
        assert_eq!(a.vertices()[0], b.vertices()[0]);
        assert!(a.collide(&b));
        assert!(b.collide(&a));
    }

    #[test]
    fn random_polygon_contains_its_center() {
        let mut rng = Pcg32Basic::seed_from_u64(3);
        for _ in 0..50 {
            let p = random::star_polygon(&mut rng, Point::new(4., -2.), 3., 40, 1.);
            assert!(p.encloses_point(Point::new(4., -2.)));
            assert!(!p.encloses_point(Point::new(8., -2.)));
        }
    }
}
