
use {
    super::*,
    crate::math::*,
};

/// Named reference points on a rectangle, relative to its unrotated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Top,
    Right,
    Bottom,
    Left,
    Center,
}

const TOP_LEFT:     usize = 0;
const TOP_RIGHT:    usize = 1;
const BOTTOM_RIGHT: usize = 2;
const BOTTOM_LEFT:  usize = 3;

/// A possibly rotated rectangle, stored as four corners in top-left, top-right,
/// bottom-right, bottom-left order. Coordinates are y-up.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    polygon: Polygon,
}

impl Rectangle {
    pub fn new(center: Point, width: f64, height: f64) -> Rectangle {
        let (hw, hh) = (width * 0.5, height * 0.5);
        let polygon = Polygon::new(vec![
            Point::new(center.x - hw, center.y + hh),
            Point::new(center.x + hw, center.y + hh),
            Point::new(center.x + hw, center.y - hh),
            Point::new(center.x - hw, center.y - hh),
        ]);
        Rectangle { polygon }
    }

    pub fn from_top_left(top_left: Point, width: f64, height: f64) -> Rectangle {
        let center = top_left + Vector::new(width * 0.5, -height * 0.5);
        Rectangle::new(center, width, height)
    }

    fn corner(&self, i: usize) -> Point {
        self.polygon.vertices()[i]
    }

    pub fn anchor(&self, which: Anchor) -> Point {
        let (tl, tr) = (self.corner(TOP_LEFT), self.corner(TOP_RIGHT));
        let (br, bl) = (self.corner(BOTTOM_RIGHT), self.corner(BOTTOM_LEFT));
        match which {
            Anchor::TopLeft     => tl,
            Anchor::TopRight    => tr,
            Anchor::BottomRight => br,
            Anchor::BottomLeft  => bl,
            Anchor::Top         => tl.midpoint(tr),
            Anchor::Right       => tr.midpoint(br),
            Anchor::Bottom      => br.midpoint(bl),
            Anchor::Left        => bl.midpoint(tl),
            Anchor::Center      => tl.midpoint(br),
        }
    }

    /// Move the whole rectangle so that `which` lands on `to`.
    pub fn set_anchor(&mut self, which: Anchor, to: Point) {
        let delta = to - self.anchor(which);
        self.polygon.shift(delta);
    }

    pub fn top_left(&self) -> Point {
        self.anchor(Anchor::TopLeft)
    }

    pub fn top_right(&self) -> Point {
        self.anchor(Anchor::TopRight)
    }

    pub fn bottom_right(&self) -> Point {
        self.anchor(Anchor::BottomRight)
    }

    pub fn bottom_left(&self) -> Point {
        self.anchor(Anchor::BottomLeft)
    }

    pub fn center(&self) -> Point {
        self.anchor(Anchor::Center)
    }

    pub fn width(&self) -> f64 {
        self.top_left().distance(self.top_right())
    }

    pub fn height(&self) -> f64 {
        self.top_left().distance(self.bottom_left())
    }

    pub fn angle_rotated(&self) -> f64 {
        self.polygon.angle_rotated()
    }

    pub fn rotation_center(&self) -> Point {
        self.polygon.rotation_center()
    }

    pub fn set_rotation_center(&mut self, center: Option<Point>) {
        self.polygon.set_rotation_center(center);
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn into_polygon(self) -> Polygon {
        self.polygon
    }

    pub fn equal_pt_set(&self, other: &Rectangle) -> bool {
        self.polygon.equal_pt_set(&other.polygon)
    }
}

impl Collidable for Rectangle {
    fn points(&self) -> Vec<Point> {
        self.polygon.points()
    }

    fn edges(&self) -> Vec<Segment> {
        self.polygon.edges()
    }

    fn bounding_box(&self) -> AxisAlignedRectangle {
        self.polygon.bounding_box()
    }

    fn encloses_point(&self, p: Point) -> bool {
        self.polygon.encloses_point(p)
    }

    fn shift(&mut self, by: Vector) {
        self.polygon.shift(by);
    }
}

impl Rotate for Rectangle {
    fn rotate_in_place(&mut self, angle: f64, center: Point) {
        self.polygon.rotate_in_place(angle, center);
    }
}
