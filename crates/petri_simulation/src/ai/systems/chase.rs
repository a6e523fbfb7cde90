//! Reactive chaser system: преследование первого живого игрока + расхождение с соседями.

use bevy::prelude::*;

use crate::ai::components::Chase;
use crate::ai::steering::face_toward;
use crate::ai::systems::roster::PlayerRoster;
use crate::components::{AiFrame, Enemy, Motion};

/// Система: reactive chaser
///
/// Для каждого chaser:
/// 1. каждый живой сосед ближе `avoid_distance_sq` → encountered,
///    velocity = -(позиция соседа - своя позиция)
/// 2. пока encountered: avoidance cooldown; по истечении heading к игроку,
///    encountered сбрасывается
/// 3. heartbeat: по своему таймеру heading к игроку безусловно
///
/// "Игрок" здесь: первый живой в порядке roster, дистанции не сравниваются.
pub fn chaser_behavior(
    mut chasers: Query<(Entity, &mut Chase, &mut Motion, &Enemy)>,
    roster: Res<PlayerRoster>,
    frame: Res<AiFrame>,
) {
    // Позиции до мутаций: все chaser'ы видят один и тот же снимок
    let siblings: Vec<(Entity, Vec2)> = chasers
        .iter()
        .filter(|(_, _, _, enemy)| !enemy.is_dead)
        .map(|(entity, _, motion, _)| (entity, motion.position))
        .collect();

    let target = roster.first_alive().map(|player| player.position);

    for (entity, mut chase, mut motion, enemy) in chasers.iter_mut() {
        if enemy.is_dead {
            continue;
        }

        for &(other_entity, other_position) in &siblings {
            if other_entity == entity {
                continue;
            }

            let relative = other_position - motion.position;
            if relative.length_squared() < chase.avoid_distance_sq {
                chase.encountered = true;
                motion.velocity = -relative;
            }
        }

        if chase.encountered && chase.tick_avoidance(frame.elapsed_ms) {
            if let Some(target) = target {
                face_toward(&mut motion, target, enemy.speed);
            }
            chase.encountered = false;
        }

        if chase.tick_heading(frame.elapsed_ms) {
            if let Some(target) = target {
                face_toward(&mut motion, target, enemy.speed);
            }
        }
    }
}
