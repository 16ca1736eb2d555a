use serde::{Deserialize, Serialize};

/// Grid cell. Coordinates are always in `0..grid_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in `direction` on a toroidal grid.
    pub fn step(&self, direction: Direction, grid_size: usize) -> Point {
        match direction {
            Direction::Up => Point::new(self.x, wrapping_dec(self.y, grid_size)),
            Direction::Down => Point::new(self.x, wrapping_inc(self.y, grid_size)),
            Direction::Left => Point::new(wrapping_dec(self.x, grid_size), self.y),
            Direction::Right => Point::new(wrapping_inc(self.x, grid_size), self.y),
        }
    }

    /// Moves `delta` cells along `axis`, wrapping at the grid edges.
    pub fn shift(&self, axis: Axis, delta: i32, grid_size: usize) -> Point {
        let size = grid_size as i64;
        let wrap = |value: usize| (value as i64 + delta as i64).rem_euclid(size) as usize;
        match axis {
            Axis::Horizontal => Point::new(wrap(self.x), self.y),
            Axis::Vertical => Point::new(self.x, wrap(self.y)),
        }
    }
}

pub fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max {
        0
    } else {
        value + 1
    }
}

pub fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 {
        max - 1
    } else {
        value - 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps_right_edge() {
        assert_eq!(Point::new(19, 10).step(Direction::Right, 20), Point::new(0, 10));
    }

    #[test]
    fn test_step_wraps_top_and_left_edges() {
        assert_eq!(Point::new(5, 0).step(Direction::Up, 20), Point::new(5, 19));
        assert_eq!(Point::new(0, 5).step(Direction::Left, 20), Point::new(19, 5));
        assert_eq!(Point::new(5, 19).step(Direction::Down, 20), Point::new(5, 0));
    }

    #[test]
    fn test_shift_wraps_both_ways() {
        assert_eq!(Point::new(0, 3).shift(Axis::Horizontal, -1, 20), Point::new(19, 3));
        assert_eq!(Point::new(4, 19).shift(Axis::Vertical, 1, 20), Point::new(4, 0));
    }

    #[test]
    fn test_is_opposite() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Down.is_opposite(&Direction::Up));
        assert!(!Direction::Left.is_opposite(&Direction::Up));
        assert!(!Direction::Left.is_opposite(&Direction::Left));
    }
}
