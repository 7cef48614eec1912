
pub mod linear;

pub use linear::*;

use {
    nalgebra as na,
    std::{
        cmp::Ordering,
        fmt,
        ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
    },
};

/// Tolerance shared by every geometric comparison in the crate.
pub const EPSILON: f64 = 1e-8;

pub type V2 = na::Vector2<f64>;
pub type P2 = na::Point2<f64>;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct OrdF64(pub f64);

impl Eq for OrdF64 { }

impl Ord for OrdF64 {
    fn cmp(&self, rhs: &OrdF64) -> Ordering {
        self.partial_cmp(rhs)
            .unwrap_or(Ordering::Equal)
    }
}

fn approx_cmp(a: f64, b: f64) -> Ordering {
    if approx_eq(a, b) { Ordering::Equal }
    else if a < b      { Ordering::Less }
    else               { Ordering::Greater }
}

/// A displacement or direction.
#[derive(Clone, Copy, Debug)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Vector {
        assert!(!x.is_nan() && !y.is_nan(), "vector component is NaN: ({}, {})", x, y);
        Vector { x, y }
    }

    pub fn zero() -> Vector {
        Vector { x: 0., y: 0. }
    }

    /// Unit vector pointing at `angle` radians from the +x axis.
    pub fn from_angle(angle: f64) -> Vector {
        Vector::new(angle.cos(), angle.sin())
    }

    pub fn dot(self, rhs: Vector) -> f64 {
        V2::from(self).dot(&V2::from(rhs))
    }

    /// z component of the 3D cross product; negative when `rhs` turns clockwise from `self`.
    pub fn cross(self, rhs: Vector) -> f64 {
        V2::from(self).perp(&V2::from(rhs))
    }

    pub fn length(self) -> f64 {
        V2::from(self).norm()
    }

    pub fn length_squared(self) -> f64 {
        V2::from(self).norm_squared()
    }

    /// Zero-length vectors normalize to themselves.
    pub fn normalize(self) -> Vector {
        let len = self.length();
        if len < EPSILON { self }
        else             { self / len }
    }

    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn perpendicular(self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    // Rotates in polar form.
    pub fn rotate(self, angle: f64) -> Vector {
        let len = self.length();
        if len < EPSILON {
            return self;
        }
        let theta = self.angle() + angle;
        Vector::new(len * theta.cos(), len * theta.sin())
    }

    pub fn rotate_about(self, angle: f64, pivot: Vector) -> Vector {
        (self - pivot).rotate(angle) + pivot
    }
}

impl PartialEq for Vector {
    fn eq(&self, rhs: &Vector) -> bool {
        approx_eq(self.x, rhs.x) && approx_eq(self.y, rhs.y)
    }
}

impl From<V2> for Vector {
    fn from(v: V2) -> Vector {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for V2 {
    fn from(v: Vector) -> V2 {
        V2::new(v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        assert!(!x.is_nan() && !y.is_nan(), "point coordinate is NaN: ({}, {})", x, y);
        Point { x, y }
    }

    pub fn origin() -> Point {
        Point { x: 0., y: 0. }
    }

    pub fn coords(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn distance(self, rhs: Point) -> f64 {
        na::distance(&P2::from(self), &P2::from(rhs))
    }

    pub fn midpoint(self, rhs: Point) -> Point {
        na::center(&P2::from(self), &P2::from(rhs)).into()
    }

    pub fn lerp(self, rhs: Point, t: f64) -> Point {
        Point::new(lerp(self.x, rhs.x, t), lerp(self.y, rhs.y, t))
    }

    pub fn rotate(self, angle: f64, center: Point) -> Point {
        center + (self - center).rotate(angle)
    }

    /// Exact lexicographic order. Sort with this rather than `Ord`, which
    /// treats nearby points as equal and so is not transitive.
    pub fn total_cmp(&self, rhs: &Point) -> Ordering {
        self.x.total_cmp(&rhs.x)
            .then_with(|| self.y.total_cmp(&rhs.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, rhs: &Point) -> bool {
        approx_eq(self.x, rhs.x) && approx_eq(self.y, rhs.y)
    }
}

impl Eq for Point { }

impl PartialOrd for Point {
    fn partial_cmp(&self, rhs: &Point) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Point {
    fn cmp(&self, rhs: &Point) -> Ordering {
        approx_cmp(self.x, rhs.x)
            .then_with(|| approx_cmp(self.y, rhs.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<P2> for Point {
    fn from(p: P2) -> Point {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for P2 {
    fn from(p: Point) -> P2 {
        P2::new(p.x, p.y)
    }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}
