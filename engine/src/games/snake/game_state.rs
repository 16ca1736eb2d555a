use crate::games::{EndReason, EnemyKind, GameLogic, GameTickResult, SessionRng};
use crate::input::Intent;
use crate::log;
use crate::snapshot::EntityView;

use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Axis, Direction, Point};
use super::{INITIAL_LENGTH, MAX_SPAWN_ATTEMPTS};

/// Patrols one axis, wrapping at the edges. Only checked against the
/// snake at spawn time.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeEnemy {
    pub id: u64,
    pub position: Point,
    pub axis: Axis,
    /// Either `1` or `-1`.
    pub speed: i32,
    pub kind: EnemyKind,
}

pub struct SnakeGameState {
    pub snake: Snake,
    pub food: Option<Point>,
    pub enemies: Vec<SnakeEnemy>,
    pub score: u32,
    settings: SnakeSettings,
    next_entity_id: u64,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSettings, rng: &mut SessionRng) -> Self {
        let center = settings.grid_size / 2;
        let snake = Snake::new(
            Point::new(center, center),
            Direction::Right,
            INITIAL_LENGTH,
            settings.grid_size,
        );

        let mut state = Self {
            snake,
            food: None,
            enemies: Vec::new(),
            score: 0,
            settings,
            next_entity_id: 1,
        };
        state.spawn_food(rng);
        state
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }

    pub fn add_enemy(&mut self, position: Point, axis: Axis, speed: i32, kind: EnemyKind) -> u64 {
        let id = self.allocate_id();
        self.enemies.push(SnakeEnemy {
            id,
            position,
            axis,
            speed,
            kind,
        });
        id
    }

    /// Uniform random cell for which `is_blocked` is false. Rejection
    /// sampling first, then an exhaustive pick so a crowded grid still
    /// terminates. `None` only when every cell is blocked.
    fn random_free_cell(&self, rng: &mut SessionRng, is_blocked: impl Fn(&Point) -> bool) -> Option<Point> {
        let size = self.settings.grid_size;

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let pos = Point::new(rng.random_range(0..size), rng.random_range(0..size));
            if !is_blocked(&pos) {
                return Some(pos);
            }
        }

        let free: Vec<Point> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .filter(|pos| !is_blocked(pos))
            .collect();
        rng.choose(&free).copied()
    }

    pub fn spawn_food(&mut self, rng: &mut SessionRng) {
        self.food = self.random_free_cell(rng, |pos| self.snake.occupies(pos));
        match self.food {
            Some(food) => log!("Food spawned at ({}, {})", food.x, food.y),
            None => log!("No free cell left for food"),
        }
    }

    fn move_enemies(&mut self) {
        let size = self.settings.grid_size;
        for enemy in &mut self.enemies {
            enemy.position = enemy.position.shift(enemy.axis, enemy.speed, size);
        }
    }

    fn check_collisions(&self) -> Option<EndReason> {
        let head = self.snake.head();

        if self.snake.head_hits_body() {
            return Some(EndReason::SelfCollision);
        }

        if let Some(enemy) = self.enemies.iter().find(|enemy| enemy.position == head) {
            log!("Snake hit {:?} enemy {} at ({}, {})", enemy.kind, enemy.id, head.x, head.y);
            return Some(EndReason::EnemyCollision);
        }

        None
    }
}

impl GameLogic for SnakeGameState {
    fn update(&mut self, rng: &mut SessionRng) -> GameTickResult {
        self.snake.apply_queued_direction();

        let next_head = self.snake.head().step(self.snake.direction, self.settings.grid_size);
        self.snake.body.push_front(next_head);

        if self.food == Some(next_head) {
            self.score += self.settings.points_per_food;
            log!(
                "Ate food at ({}, {}). Length: {}, score: {}",
                next_head.x,
                next_head.y,
                self.snake.body.len(),
                self.score
            );
            self.spawn_food(rng);
        } else {
            self.snake.body.pop_back();
        }

        self.move_enemies();

        match self.check_collisions() {
            Some(reason) => GameTickResult::GameOver(reason),
            None => GameTickResult::Continue,
        }
    }

    fn spawn_enemy(&mut self, rng: &mut SessionRng) {
        let food = self.food;
        let cell = self.random_free_cell(rng, |pos| self.snake.occupies(pos) || food == Some(*pos));
        let Some(position) = cell else {
            return;
        };

        let axis = if rng.random_bool() { Axis::Horizontal } else { Axis::Vertical };
        let speed = if rng.random_bool() { 1 } else { -1 };
        let kind = *rng.choose(&EnemyKind::ALL).unwrap_or(&EnemyKind::Pirate);

        let id = self.add_enemy(position, axis, speed, kind);
        log!(
            "Spawned {:?} enemy {} at ({}, {}) moving {:?} {}",
            kind,
            id,
            position.x,
            position.y,
            axis,
            speed
        );
    }

    fn apply_intent(&mut self, intent: Intent) {
        if let Intent::SetDirection(direction) = intent {
            self.snake.queue_direction(direction);
        }
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn entities(&self) -> Vec<EntityView> {
        let mut entities: Vec<EntityView> = self
            .snake
            .body
            .iter()
            .enumerate()
            .map(|(idx, segment)| EntityView::SnakeSegment {
                x: segment.x,
                y: segment.y,
                head: idx == 0,
            })
            .collect();

        if let Some(food) = self.food {
            entities.push(EntityView::Food { x: food.x, y: food.y });
        }

        entities.extend(self.enemies.iter().map(|enemy| EntityView::SnakeEnemy {
            id: enemy.id,
            x: enemy.position.x,
            y: enemy.position.y,
            axis: enemy.axis,
            enemy_type: enemy.kind,
        }));

        entities
    }
}
