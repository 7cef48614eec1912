
//! Seeded shape generators for fixtures and stress tests.

use {
    super::*,
    crate::math::*,
    rand::Rng,
    rand_core::RngCore,
    std::f64::consts::PI,
};

/// A simple, star-shaped polygon of `n` vertices around `center`.
///
/// Vertices are at strictly increasing angles with radii drawn from
/// `[radius / 2, radius]`. The first vertex sits exactly at
/// `center + radius * (cos anchor_angle, sin anchor_angle)`, which lets two
/// generated polygons share a known vertex.
pub fn star_polygon<R: RngCore>(
    rng: &mut R,
    center: Point,
    radius: f64,
    n: usize,
    anchor_angle: f64,
) -> Polygon {
    assert!(n >= 3, "a polygon needs at least 3 points, got {}", n);

    let mut angles: Vec<f64> = (1..n)
        .map(|_| rng.gen_range(0., 2. * PI))
        .filter(|&a| a > EPSILON)
        .collect();
    angles.sort_by_key(|&a| OrdF64(a));
    angles.dedup_by(|a, b| (*a - *b).abs() < EPSILON);

    // Top up anything lost to duplicates with evenly spaced fillers.
    while angles.len() + 1 < n {
        let k = angles.len();
        angles.push(2. * PI * (k as f64 + 0.5) / n as f64);
        angles.sort_by_key(|&a| OrdF64(a));
        angles.dedup_by(|a, b| (*a - *b).abs() < EPSILON);
    }

    let first = center + Vector::from_angle(anchor_angle) * radius;
    let rest = angles.into_iter()
        .map(|a| {
            let r = rng.gen_range(radius * 0.5, radius);
            center + Vector::from_angle(anchor_angle + a) * r
        });

    Polygon::new(std::iter::once(first).chain(rest).collect())
}

/// A uniformly distributed point inside `bound`.
pub fn point_in<R: RngCore>(rng: &mut R, bound: &AxisAlignedRectangle) -> Point {
    let (lo, hi) = (bound.mins(), bound.maxs());
    Point::new(lerp(lo.x, hi.x, rng.gen()), lerp(lo.y, hi.y, rng.gen()))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        pcg_rand::Pcg32Basic,
        rand::SeedableRng,
    };

    #[test]
    fn star_polygons_are_simple() {
        let mut rng = Pcg32Basic::seed_from_u64(9);
        let p = star_polygon(&mut rng, Point::new(1., 1.), 2., 30, 0.5);
        assert_eq!(p.len(), 30);
        assert_eq!(p.vertices()[0], Point::new(1., 1.) + Vector::from_angle(0.5) * 2.);

        let edges = p.edges();
        let n = edges.len();
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                assert!(!edges[i].intersects_segment(&edges[j]), "edges {} and {} cross", i, j);
            }
        }
    }

    #[test]
    fn points_stay_in_bound() {
        let mut rng = Pcg32Basic::seed_from_u64(1);
        let bound = AxisAlignedRectangle::new(Point::new(-3., 2.), Point::new(7., 4.));
        for _ in 0..1000 {
            assert!(bound.contains(point_in(&mut rng, &bound)));
        }
    }
}
