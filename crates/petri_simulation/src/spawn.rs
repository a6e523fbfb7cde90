//! Spawn helpers для игроков и врагов

use bevy::prelude::*;

use crate::ai::{AiTuning, Bacteria, Chase, HunterState};
use crate::components::{Enemy, Motion, Player};

/// Игрок в слоте `slot` (0: первый)
pub fn spawn_player(commands: &mut Commands, slot: u8, position: Vec2) -> Entity {
    commands.spawn((Player::new(slot), Motion::at(position))).id()
}

/// Hunter (FSM), стартует в Searching
pub fn spawn_hunter(commands: &mut Commands, tuning: &AiTuning, position: Vec2, enemy: Enemy) -> Entity {
    commands
        .spawn((HunterState::from_tuning(tuning), Motion::at(position), enemy))
        .id()
}

/// Bacteria (grid-chaser), `is_hunting` взведён: первый replan сработает сразу
pub fn spawn_bacteria(commands: &mut Commands, position: Vec2, enemy: Enemy) -> Entity {
    commands
        .spawn((Bacteria::default(), Motion::at(position), enemy))
        .id()
}

/// Reactive chaser
pub fn spawn_chaser(commands: &mut Commands, tuning: &AiTuning, position: Vec2, enemy: Enemy) -> Entity {
    commands
        .spawn((Chase::from_tuning(tuning), Motion::at(position), enemy))
        .id()
}
