//! Axis aligned bounds over point sets, used to size render frames.

use nalgebra::Vector2;

/// Axis aligned bounding box over a set of 2-D points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Lower-left corner.
    pub min: Vector2<f64>,
    /// Upper-right corner.
    pub max: Vector2<f64>,
}

impl BoundingBox {
    /// Fold an iterator of points into their bounding box.
    ///
    /// Panics on an empty iterator: every pattern has points.
    pub fn from_iter<I: Iterator<Item = Vector2<f64>>>(mut points: I) -> BoundingBox {
        let first = points.next().expect("bounding box of no points");
        let mut min = first;
        let mut max = first;
        for p in points {
            if min.x > p.x {
                min.x = p.x;
            }
            if min.y > p.y {
                min.y = p.y;
            }
            if max.x < p.x {
                max.x = p.x;
            }
            if max.y < p.y {
                max.y = p.y;
            }
        }
        BoundingBox { min, max }
    }

    /// Grow each side by its own margin (all values non-negative grow, in cm).
    pub fn padded(self, left: f64, right: f64, bottom: f64, top: f64) -> BoundingBox {
        BoundingBox {
            min: Vector2::new(self.min.x - left, self.min.y - bottom),
            max: Vector2::new(self.max.x + right, self.max.y + top),
        }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
