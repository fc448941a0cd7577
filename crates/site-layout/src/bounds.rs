//! Axis-aligned footprint rectangles.
//!
//! Site coordinates have y pointing up: a footprint's origin is its
//! lower-left corner.

use glam::DVec2;
use site_core::Building;

/// Axis-aligned rectangle anchored at its lower-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Footprint of a building placed at `origin`.
    pub fn of_building(building: &Building, origin: DVec2) -> Self {
        Self::new(origin.x, origin.y, building.width(), building.height())
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the top edge (y + height).
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Geometric center.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Compute intersection with another bounds.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.top().min(other.top());

        if x1 < x2 && y1 < y2 {
            Some(Bounds::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Whether the two rectangles share a region of positive area.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.intersect(other).is_some()
    }

    /// Compute union (bounding box) with another bounds.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.top().max(other.top());
        Bounds::new(x1, y1, x2 - x1, y2 - y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_center() {
        let b = Bounds::new(10.0, 0.0, 5.0, 5.0);
        assert_eq!(b.center(), DVec2::new(12.5, 2.5));
        assert_eq!(b.right(), 15.0);
        assert_eq!(b.top(), 5.0);
    }

    #[test]
    fn test_bounds_intersection() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(50.0, 50.0, 100.0, 100.0);
        let intersection = a.intersect(&b).unwrap();
        assert!((intersection.x - 50.0).abs() < 0.001);
        assert!((intersection.y - 50.0).abs() < 0.001);
        assert!((intersection.width - 50.0).abs() < 0.001);
        assert!((intersection.height - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.0, 0.0, 5.0, 5.0);
        let c = Bounds::new(0.0, 10.0, 5.0, 5.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(0.0, 12.0, 5.0, 5.0);
        let u = a.union(&b);
        assert_eq!(u, Bounds::new(0.0, 0.0, 10.0, 17.0));
    }
}
