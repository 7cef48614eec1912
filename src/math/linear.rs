
use super::*;

pub trait Linear {
    fn whole_line(&self) -> Line;
    fn parameter_on(&self, lambda: f64) -> bool;
    fn stride(&self) -> Vector {
        self.whole_line().stride
    }
    /// Parameters on both lines and the crossing point, if the lines cross within
    /// their parameter ranges. Only exactly parallel lines are rejected outright;
    /// nearly parallel ones are left to the parameter ranges.
    fn intersect(&self, other: &impl Linear) -> Option<Crossing> {
        let la = self.whole_line();
        let lb = other.whole_line();

        let denom = la.stride.cross(lb.stride);
        if denom == 0. {
            None
        }
        else {
            let offset = lb.source - la.source;
            let lambda = offset.cross(lb.stride) / denom;
            let mu     = offset.cross(la.stride) / denom;

            if self.parameter_on(lambda) && other.parameter_on(mu) {
                Some(Crossing { lambda, mu, point: la.at(lambda) })
            }
            else {
                None
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Crossing {
    pub lambda: f64,
    pub mu:     f64,
    pub point:  Point,
}

#[derive(Clone, Copy, Debug)]
pub struct Line {
    source: Point,
    stride: Vector,
}

impl Line {
    pub fn new(source: Point, stride: Vector) -> Line {
        Line { source, stride }
    }

    pub fn through(a: Point, b: Point) -> Line {
        Line::new(a, b - a)
    }

    pub fn at(&self, t: f64) -> Point {
        self.source + self.stride * t
    }
}

impl Linear for Line {
    fn whole_line(&self) -> Line { *self }
    fn parameter_on(&self, _: f64) -> bool { true }
}

#[derive(Clone, Copy, Debug)]
pub struct Ray(Line);

impl Ray {
    pub fn new(source: Point, stride: Vector) -> Ray {
        Ray(Line::new(source, stride))
    }

    pub fn source(&self) -> Point {
        self.0.source
    }
}

impl Linear for Ray {
    fn whole_line(&self) -> Line { self.0 }
    fn parameter_on(&self, t: f64) -> bool { t >= -EPSILON }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_intersection() {
        let la = Line::new(Point::new(0., 0.), Vector::new(  6., 6.));
        let lb = Line::new(Point::new(9., 0.), Vector::new(-12., 6.));
        let ix = la.intersect(&lb).unwrap();
        assert!(approx_eq(ix.lambda, 0.5));
        assert!(approx_eq(ix.mu, 0.5));
        assert_eq!(ix.point, Point::new(3., 3.));
    }

    #[test]
    fn ray_only_looks_forward() {
        let ray = Ray::new(Point::new(0., 0.), Vector::new(1., 0.));
        let ahead  = Line::new(Point::new( 2., -1.), Vector::new(0., 2.));
        let behind = Line::new(Point::new(-2., -1.), Vector::new(0., 2.));
        assert!(ray.intersect(&ahead).is_some());
        assert!(ray.intersect(&behind).is_none());
        assert!(ray.intersect(&Line::new(Point::new(0., 1.), Vector::new(1., 0.))).is_none());
    }
}
