use std::collections::HashSet;

use crate::input::{InputEvent, Key};
use crate::snapshot::{EngineSnapshot, EntityView, Phase};

use super::types::{Direction, Point};

/// Greedy autopilot for the snake: heads for the food along the shortest
/// wrapped distance, never stepping onto its body or an enemy.
pub struct SnakeBot {
    grid_size: usize,
}

impl SnakeBot {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size }
    }

    pub fn plan(&self, snapshot: &EngineSnapshot) -> Option<InputEvent> {
        if snapshot.phase != Phase::Active {
            return None;
        }

        let mut body = Vec::new();
        let mut blocked = HashSet::new();
        let mut food = None;
        for entity in &snapshot.entities {
            match entity {
                EntityView::SnakeSegment { x, y, .. } => {
                    body.push(Point::new(*x, *y));
                    blocked.insert(Point::new(*x, *y));
                }
                EntityView::SnakeEnemy { x, y, .. } => {
                    blocked.insert(Point::new(*x, *y));
                }
                EntityView::Food { x, y } => food = Some(Point::new(*x, *y)),
                _ => {}
            }
        }

        let head = *body.first()?;
        let current = self.infer_direction(&body)?;
        let candidates: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|dir| !dir.is_opposite(&current))
            .filter(|dir| !blocked.contains(&head.step(*dir, self.grid_size)))
            .collect();

        let choice = match food {
            Some(food) => candidates
                .iter()
                .copied()
                .min_by_key(|dir| self.wrapped_distance(head.step(*dir, self.grid_size), food)),
            None => candidates.first().copied(),
        };

        let direction = choice.unwrap_or(current);
        if direction == current {
            return None;
        }
        Some(InputEvent::KeyDown(Self::key_for(direction)))
    }

    /// Heading implied by the head and the segment right behind it.
    fn infer_direction(&self, body: &[Point]) -> Option<Direction> {
        let head = *body.first()?;
        let neck = *body.get(1)?;
        Direction::ALL
            .into_iter()
            .find(|dir| neck.step(*dir, self.grid_size) == head)
    }

    fn wrapped_distance(&self, a: Point, b: Point) -> usize {
        let axis = |p: usize, q: usize| {
            let d = p.abs_diff(q);
            d.min(self.grid_size - d)
        };
        axis(a.x, b.x) + axis(a.y, b.y)
    }

    fn key_for(direction: Direction) -> Key {
        match direction {
            Direction::Up => Key::ArrowUp,
            Direction::Down => Key::ArrowDown,
            Direction::Left => Key::ArrowLeft,
            Direction::Right => Key::ArrowRight,
        }
    }
}
