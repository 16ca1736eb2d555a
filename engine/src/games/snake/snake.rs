use std::collections::VecDeque;

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    /// Head first.
    pub body: VecDeque<Point>,
    pub direction: Direction,
    /// Buffered turn, consumed by the next tick.
    pub next_direction: Direction,
}

impl Snake {
    /// Lays `length` segments out behind `start_pos`, opposite to `direction`.
    pub fn new(start_pos: Point, direction: Direction, length: usize, grid_size: usize) -> Self {
        let behind = match direction {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        };

        let mut body = VecDeque::with_capacity(length.max(1));
        let mut segment = start_pos;
        body.push_back(segment);
        for _ in 1..length {
            segment = segment.step(behind, grid_size);
            body.push_back(segment);
        }

        Self {
            body,
            direction,
            next_direction: direction,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body.contains(point)
    }

    /// Queues a turn; an exact reversal of the current heading is rejected.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Applies the queued turn unless it would reverse the snake.
    pub fn apply_queued_direction(&mut self) {
        if !self.next_direction.is_opposite(&self.direction) {
            self.direction = self.next_direction;
        }
    }

    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }
}
