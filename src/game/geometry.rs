//! Axis-aligned rectangle hit testing for drag pickup and delivery resolution.
//! Coordinates are logical game units (400x700 canvas space).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive on all edges: a point exactly on the boundary counts as a hit.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_interior_and_edges() {
        let r = Rect::new(10.0, 20.0, 70.0, 70.0);
        assert!(r.contains(Point::new(45.0, 55.0)));
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(80.0, 90.0)));
        assert!(!r.contains(Point::new(9.9, 55.0)));
        assert!(!r.contains(Point::new(45.0, 90.1)));
    }

    #[test]
    fn center_is_midpoint() {
        let r = Rect::new(0.0, 0.0, 60.0, 60.0);
        assert_eq!(r.center(), Point::new(30.0, 30.0));
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }
}
