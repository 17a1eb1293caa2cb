use anyhow::{ensure, Result};

use crate::grid::Point;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// Head first, tail last. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        Snake { body: vec![head] }
    }

    pub fn from_segments(body: Vec<Point>) -> Result<Self> {
        ensure!(!body.is_empty(), "a snake needs at least one segment");
        Ok(Snake { body })
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Adds a segment on top of the tail. It separates from the tail on the
    /// next `move_by`.
    pub fn grow(&mut self) {
        let tail = self.body[self.body.len() - 1];
        self.body.push(tail);
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        // Back to front, so each segment reads its predecessor before it moves
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        self.body[0] = self.body[0].translated(dx, dy);
    }

    pub fn step(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.move_by(dx, dy);
    }

    pub(crate) fn set_head(&mut self, head: Point) {
        self.body[0] = head;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_empty_snake_rejected() {
        assert!(Snake::from_segments(vec![]).is_err());
        assert!(!Snake::new(Point::new(0, 0)).is_empty());
    }

    #[test]
    fn test_move_shifts_body() {
        let mut snake = Snake::from_segments(points(&[(5, 5), (4, 5), (3, 5), (3, 4)])).unwrap();
        let before = snake.body().to_vec();

        snake.move_by(0, 1);

        assert_eq!(snake.len(), before.len());
        assert_eq!(snake.head(), Point::new(5, 6));
        for i in 1..snake.len() {
            assert_eq!(snake.body()[i], before[i - 1]);
        }
    }

    #[test]
    fn test_move_single_segment() {
        let mut snake = Snake::new(Point::new(0, 0));
        snake.move_by(-1, 0);
        assert_eq!(snake.body(), &[Point::new(-1, 0)]);
    }

    #[test]
    fn test_grow_keeps_existing_segments() {
        let mut snake = Snake::from_segments(points(&[(2, 2), (2, 3)])).unwrap();
        snake.grow();

        assert_eq!(snake.len(), 3);
        assert_eq!(&snake.body()[..2], &points(&[(2, 2), (2, 3)])[..]);
    }

    #[test]
    fn test_grown_segment_trails_after_move() {
        let mut snake = Snake::from_segments(points(&[(2, 2), (2, 3)])).unwrap();
        snake.grow();
        snake.step(Up);

        assert_eq!(snake.body(), &points(&[(2, 1), (2, 2), (2, 3)])[..]);
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Up.delta(), (0, -1));
        assert_eq!(Down.delta(), (0, 1));
        assert_eq!(Left.delta(), (-1, 0));
        assert_eq!(Right.delta(), (1, 0));
    }
}
