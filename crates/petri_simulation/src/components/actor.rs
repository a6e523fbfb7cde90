//! Статус акторов: Enemy (враги), Player (игроки)

use bevy::prelude::*;

/// Статус врага
///
/// Пишет combat resolution (вне AI), AI только читает:
/// health → fleeing, is_dead → пропуск во всех drivers.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Enemy {
    pub health: f32,
    pub max_health: f32,
    /// Скорость (world units/sec)
    pub speed: f32,
    pub damage: f32,
    /// Награда за убийство
    pub loot: u32,
    /// Короткое окно неуязвимости после попадания (ms)
    pub invulnerable_ms: f32,
    pub is_dead: bool,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new(5.0, 100.0)
    }
}

impl Enemy {
    pub fn new(max_health: f32, speed: f32) -> Self {
        Self {
            health: max_health,
            max_health,
            speed,
            damage: 1.0,
            loot: 10,
            invulnerable_ms: 0.0,
            is_dead: false,
        }
    }

    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }
}

/// Игрок (1 или 2)
///
/// `slot` задаёт стабильный порядок в PlayerRoster (0 = первый игрок).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
#[require(crate::components::Motion)]
pub struct Player {
    pub slot: u8,
    pub is_dead: bool,
}

impl Player {
    pub fn new(slot: u8) -> Self {
        Self {
            slot,
            is_dead: false,
        }
    }
}
