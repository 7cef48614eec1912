
//! Collision geometry for a 2D arena simulation.
//!
//! Shapes are owned by game elements and moved in place every tick; a
//! [`Quadtree`](quadtree::Quadtree) narrows down which of them could be
//! touching, and [`Collidable::collide`](shapes::Collidable::collide) gives the
//! exact answer.
//!
//! ```
//! use arena_geom::{
//!     math::{Point, Vector},
//!     quadtree::Quadtree,
//!     shapes::{AxisAlignedRectangle, Collidable, Rectangle, Shape},
//! };
//!
//! let arena = AxisAlignedRectangle::new(Point::new(0., 0.), Point::new(100., 100.));
//! let mut index = Quadtree::new(arena);
//!
//! let mut tank = Shape::from(Rectangle::new(Point::new(10., 10.), 4., 2.));
//! let wall = Shape::from(AxisAlignedRectangle::new(Point::new(14., 0.), Point::new(15., 30.)));
//! index.insert(wall.clone());
//!
//! assert!(index.collided_objects(&tank).is_empty());
//! tank.shift(Vector::new(3., 0.));
//! assert_eq!(index.collided_objects(&tank), vec![&wall]);
//! ```

mod dilate;

pub mod math;
pub mod quadtree;
pub mod shapes;

pub use {
    dilate::Dilate,
    math::{Point, Vector, EPSILON},
    quadtree::{Quadtree, QuadtreeConfig, QuadtreeError},
    shapes::{
        Anchor, AxisAlignedRectangle, Collidable, Polygon, Rectangle, Rotate, Segment, Shape,
        ShapeError,
    },
};
