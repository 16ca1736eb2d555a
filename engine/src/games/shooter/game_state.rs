use crate::games::{EnemyKind, GameLogic, GameTickResult, SessionRng};
use crate::input::Intent;
use crate::log;
use crate::snapshot::EntityView;

use super::entity::{Enemy, Laser, Player, Position};
use super::settings::ShooterSettings;
use super::{ENEMY_SPEED_RANGE, ENEMY_X_RANGE, FIELD_BOTTOM, LASER_EXIT_Y, LASER_SPAWN_OFFSET};

pub struct ShooterGameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub lasers: Vec<Laser>,
    pub score: u32,
    settings: ShooterSettings,
    next_entity_id: u64,
}

impl ShooterGameState {
    pub fn new(settings: ShooterSettings) -> Self {
        Self {
            player: Player::new(),
            enemies: Vec::new(),
            lasers: Vec::new(),
            score: 0,
            settings,
            next_entity_id: 1,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }

    pub fn add_enemy(&mut self, position: Position, speed: f32, kind: EnemyKind) -> u64 {
        let id = self.allocate_id();
        self.enemies.push(Enemy::new(id, position, speed, kind));
        id
    }

    /// Fires one laser from the nose of the ship.
    pub fn fire(&mut self) -> u64 {
        let id = self.allocate_id();
        let position = Position::new(self.player.position.x, self.player.position.y - LASER_SPAWN_OFFSET);
        self.lasers.push(Laser::new(id, position));
        id
    }

    fn move_entities(&mut self) {
        let laser_speed = self.settings.laser_speed;
        for laser in &mut self.lasers {
            laser.position.y -= laser_speed;
        }
        self.lasers.retain(|laser| laser.position.y > LASER_EXIT_Y);

        for enemy in &mut self.enemies {
            enemy.position.y += enemy.speed;
        }
        // escaped enemies are not scored
        self.enemies.retain(|enemy| enemy.position.y <= FIELD_BOTTOM);
    }

    /// Lasers are scanned newest-first, enemies newest-first. A laser
    /// destroys at most one enemy and both leave the field in the same pass.
    fn resolve_hits(&mut self) -> u32 {
        let radius = self.settings.collision_radius;
        let mut hits = 0;

        for laser_idx in (0..self.lasers.len()).rev() {
            let laser_pos = self.lasers[laser_idx].position;
            let hit = self
                .enemies
                .iter()
                .rposition(|enemy| laser_pos.distance(&enemy.position) < radius);

            if let Some(enemy_idx) = hit {
                let laser = self.lasers.remove(laser_idx);
                let enemy = self.enemies.remove(enemy_idx);
                log!("Laser {} destroyed {:?} enemy {}", laser.id, enemy.kind, enemy.id);
                hits += 1;
            }
        }

        hits
    }
}

impl GameLogic for ShooterGameState {
    fn update(&mut self, _rng: &mut SessionRng) -> GameTickResult {
        self.move_entities();
        let hits = self.resolve_hits();
        self.score += hits * self.settings.points_per_hit;
        GameTickResult::Continue
    }

    fn spawn_enemy(&mut self, rng: &mut SessionRng) {
        let x = rng.random_range(ENEMY_X_RANGE);
        let speed = rng.random_range(ENEMY_SPEED_RANGE);
        let kind = *rng.choose(&EnemyKind::ALL).unwrap_or(&EnemyKind::Pirate);
        let id = self.add_enemy(Position::new(x, 0.0), speed, kind);
        log!("Spawned {:?} enemy {} at x={:.1} speed={:.2}", kind, id, x, speed);
    }

    fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::MoveTo(x) => self.player.move_to(x),
            Intent::MoveBy(dx) => self.player.move_by(dx),
            Intent::Fire => {
                self.fire();
            }
            Intent::SetDirection(_) => {}
        }
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn entities(&self) -> Vec<EntityView> {
        let mut entities = Vec::with_capacity(1 + self.enemies.len() + self.lasers.len());
        entities.push(EntityView::Player {
            x: self.player.position.x,
            y: self.player.position.y,
        });
        entities.extend(self.enemies.iter().map(|enemy| EntityView::Enemy {
            id: enemy.id,
            x: enemy.position.x,
            y: enemy.position.y,
            size: enemy.size,
            enemy_type: enemy.kind,
        }));
        entities.extend(self.lasers.iter().map(|laser| EntityView::Laser {
            id: laser.id,
            x: laser.position.x,
            y: laser.position.y,
            width: laser.width,
            height: laser.height,
        }));
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::shooter::{MAX_ENEMY_SPEED, MAX_X, MIN_ENEMY_SPEED, MIN_X, PLAYER_Y};

    fn create_state() -> (ShooterGameState, SessionRng) {
        (ShooterGameState::new(ShooterSettings::default()), SessionRng::new(42))
    }

    #[test]
    fn test_laser_hits_enemy_in_front_of_ship() {
        let (mut state, mut rng) = create_state();
        state.apply_intent(Intent::MoveTo(50.0));
        state.add_enemy(Position::new(50.0, PLAYER_Y - 10.0), 0.5, EnemyKind::Ufo);
        state.apply_intent(Intent::Fire);

        state.update(&mut rng);

        assert!(state.lasers.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_one_laser_destroys_at_most_one_enemy() {
        let (mut state, mut rng) = create_state();
        state.add_enemy(Position::new(50.0, 70.0), 0.5, EnemyKind::Bat);
        state.add_enemy(Position::new(51.0, 71.0), 0.5, EnemyKind::Pirate);
        state.fire();

        state.update(&mut rng);

        assert!(state.lasers.is_empty());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_newest_laser_and_newest_enemy_matched_first() {
        let (mut state, mut rng) = create_state();
        let older_enemy = state.add_enemy(Position::new(50.0, 70.0), 0.5, EnemyKind::Bat);
        let newer_enemy = state.add_enemy(Position::new(52.0, 70.0), 0.5, EnemyKind::Ufo);
        let older_laser = state.fire();
        let newer_laser = state.fire();

        state.update(&mut rng);

        assert!(state.enemies.is_empty());
        assert!(state.lasers.is_empty());
        assert_eq!(state.score, 20);
        assert!(older_enemy < newer_enemy && older_laser < newer_laser);
    }

    #[test]
    fn test_far_laser_misses() {
        let (mut state, mut rng) = create_state();
        state.add_enemy(Position::new(10.0, 70.0), 0.5, EnemyKind::Bat);
        state.apply_intent(Intent::MoveTo(90.0));
        state.fire();

        state.update(&mut rng);

        assert_eq!(state.lasers.len(), 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_lasers_rise_and_enemies_fall_every_tick() {
        let (mut state, mut rng) = create_state();
        state.add_enemy(Position::new(10.0, 0.0), 1.25, EnemyKind::Pirate);
        state.apply_intent(Intent::MoveTo(90.0));
        state.fire();

        let mut last_laser_y = state.lasers[0].position.y;
        let mut last_enemy_y = state.enemies[0].position.y;
        for _ in 0..10 {
            state.update(&mut rng);
            let laser_y = state.lasers[0].position.y;
            let enemy_y = state.enemies[0].position.y;
            assert!(laser_y < last_laser_y);
            assert!((enemy_y - last_enemy_y - 1.25).abs() < 1e-4);
            last_laser_y = laser_y;
            last_enemy_y = enemy_y;
        }
    }

    #[test]
    fn test_laser_leaves_field_top() {
        let (mut state, mut rng) = create_state();
        state.fire();
        // starts at 80, climbs 2 per tick, dropped once at or below -5
        for _ in 0..42 {
            state.update(&mut rng);
        }
        assert_eq!(state.lasers.len(), 1);
        state.update(&mut rng);
        assert!(state.lasers.is_empty());
    }

    #[test]
    fn test_enemy_escapes_bottom_without_score() {
        let (mut state, mut rng) = create_state();
        state.add_enemy(Position::new(10.0, 99.5), 1.0, EnemyKind::Bat);
        state.update(&mut rng);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_spawned_enemies_in_range_with_unique_ids() {
        let (mut state, mut rng) = create_state();
        for _ in 0..200 {
            state.spawn_enemy(&mut rng);
        }
        let mut ids: Vec<u64> = state.enemies.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        for enemy in &state.enemies {
            assert!((MIN_X..=MAX_X).contains(&enemy.position.x));
            assert!((MIN_ENEMY_SPEED..=MAX_ENEMY_SPEED).contains(&enemy.speed));
            assert_eq!(enemy.position.y, 0.0);
        }
    }

    #[test]
    fn test_spawn_ranges_are_closed() {
        assert_eq!(ENEMY_X_RANGE, MIN_X..=MAX_X);
        assert_eq!(ENEMY_SPEED_RANGE, MIN_ENEMY_SPEED..=MAX_ENEMY_SPEED);
        assert!(ENEMY_X_RANGE.contains(&MAX_X));
        assert!(ENEMY_SPEED_RANGE.contains(&MAX_ENEMY_SPEED));
    }

    #[test]
    fn test_direction_intent_ignored() {
        let (mut state, _) = create_state();
        state.apply_intent(Intent::SetDirection(crate::games::snake::Direction::Up));
        assert_eq!(state.player, Player::new());
        assert!(state.lasers.is_empty());
    }
}
