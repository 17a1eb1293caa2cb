/// A cell on the board. Coordinates may briefly leave the board between a
/// move and the wraparound that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Point { x: self.x + dx, y: self.y + dy }
    }

    /// Folds the point back onto a `width` x `height` torus.
    pub fn wrapped(self, width: i32, height: i32) -> Self {
        Point { x: self.x.rem_euclid(width), y: self.y.rem_euclid(height) }
    }

    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated() {
        assert_eq!(Point::new(3, 4).translated(-1, 0), Point::new(2, 4));
        assert_eq!(Point::new(3, 4).translated(0, 1), Point::new(3, 5));
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(Point::new(-1, 5).wrapped(20, 10), Point::new(19, 5));
        assert_eq!(Point::new(20, 5).wrapped(20, 10), Point::new(0, 5));
        assert_eq!(Point::new(4, -1).wrapped(20, 10), Point::new(4, 9));
        assert_eq!(Point::new(4, 10).wrapped(20, 10), Point::new(4, 0));
    }

    #[test]
    fn test_wrap_always_in_bounds() {
        for &(w, h) in &[(1, 1), (3, 7), (20, 10)] {
            for x in -45..45 {
                for y in -25..25 {
                    assert!(Point::new(x, y).wrapped(w, h).in_bounds(w, h));
                }
            }
        }
    }

    #[test]
    fn test_in_bounds() {
        assert!(Point::new(0, 0).in_bounds(20, 10));
        assert!(Point::new(19, 9).in_bounds(20, 10));
        assert!(!Point::new(20, 9).in_bounds(20, 10));
        assert!(!Point::new(0, -1).in_bounds(20, 10));
    }
}
