use serde::Serialize;

use crate::games::snake::Axis;
use crate::games::{EndReason, EnemyKind, GameMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Selection,
    Active,
    GameOver,
    Unmounted,
}

/// Render-ready view of one entity. Shooter coordinates are percentages,
/// snake coordinates are grid cells.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityView {
    Player {
        x: f32,
        y: f32,
    },
    Enemy {
        id: u64,
        x: f32,
        y: f32,
        size: f32,
        enemy_type: EnemyKind,
    },
    Laser {
        id: u64,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    SnakeSegment {
        x: usize,
        y: usize,
        head: bool,
    },
    Food {
        x: usize,
        y: usize,
    },
    SnakeEnemy {
        id: u64,
        x: usize,
        y: usize,
        axis: Axis,
        enemy_type: EnemyKind,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub phase: Phase,
    pub mode: Option<GameMode>,
    pub score: u32,
    pub time_left: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_reason: Option<EndReason>,
    pub entities: Vec<EntityView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_view_is_tagged_by_kind() {
        let view = EntityView::Enemy {
            id: 3,
            x: 12.5,
            y: 0.0,
            size: 30.0,
            enemy_type: EnemyKind::Ufo,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "enemy");
        assert_eq!(json["enemy_type"], "ufo");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn test_snapshot_omits_missing_end_reason() {
        let snapshot = EngineSnapshot {
            phase: Phase::Selection,
            mode: Some(GameMode::Snake),
            score: 0,
            time_left: 30,
            end_reason: None,
            entities: Vec::new(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], "selection");
        assert_eq!(json["mode"], "snake");
        assert!(json.get("end_reason").is_none());
    }
}
