//! Hunter FSM system (transitions + velocity side effects).

use bevy::prelude::*;
use rand::Rng;

use crate::ai::components::{next_hunter_mode, HunterMode, HunterSenses, HunterState};
use crate::ai::events::AiEvent;
use crate::ai::steering::face_toward;
use crate::ai::systems::roster::PlayerRoster;
use crate::ai::tuning::FLEE_SPEED_MULTIPLIER;
use crate::components::{AiFrame, Enemy, Motion};
use crate::DeterministicRng;

/// Случайная wander velocity: каждая ось uniform в [-1, 1], × speed
pub fn wander_velocity(rng: &mut impl Rng, speed: f32) -> Vec2 {
    Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)) * speed
}

/// Одноразовый flee impulse: 2 × speed вдоль локальной оси +X
pub fn flee_velocity(motion: &Motion, speed: f32) -> Vec2 {
    motion.forward() * speed * FLEE_SPEED_MULTIPLIER
}

/// Система: Hunter FSM
///
/// Каждый тик:
/// 1. think countdown (кроме Fleeing)
/// 2. переход через `next_hunter_mode` (low health проверяется всегда)
/// 3. действие нового состояния:
///    - Fleeing: impulse ровно один раз (latch `is_fleeing`)
///    - Searching (think тик): новая wander velocity
///    - Hunting (think тик): steering к ближайшему живому игроку
pub fn hunter_behavior(
    mut hunters: Query<(Entity, &mut HunterState, &mut Motion, &Enemy)>,
    roster: Res<PlayerRoster>,
    frame: Res<AiFrame>,
    mut rng: ResMut<DeterministicRng>,
    mut events: EventWriter<AiEvent>,
) {
    for (entity, mut hunter, mut motion, enemy) in hunters.iter_mut() {
        if enemy.is_dead {
            continue;
        }

        let thinking =
            hunter.mode != HunterMode::Fleeing && hunter.tick_think_timer(frame.elapsed_ms);

        let nearest = roster.nearest_alive(motion.position);
        let senses = HunterSenses {
            health: enemy.health,
            nearest_player_distance: nearest.map(|(_, distance)| distance),
            detection_range: hunter.detection_range,
            thinking,
        };

        let previous = hunter.mode;
        let next = next_hunter_mode(previous, &senses);

        if next != previous {
            hunter.mode = next;
            crate::log_info(&format!("AI: hunter {:?} {:?} → {:?}", entity, previous, next));
            events.write(AiEvent::HunterModeChanged {
                entity,
                from: previous,
                to: next,
            });
        }
        hunter.is_animating = next == HunterMode::Hunting;

        match next {
            HunterMode::Fleeing => {
                if !hunter.is_fleeing {
                    motion.velocity = flee_velocity(&motion, enemy.speed);
                    hunter.is_fleeing = true;
                }
            }
            _ if !thinking => {}
            HunterMode::Searching => {
                motion.velocity = wander_velocity(&mut rng.rng, enemy.speed);
            }
            HunterMode::Hunting => {
                if let Some((target, _)) = nearest {
                    face_toward(&mut motion, target.position, enemy.speed);
                }
            }
        }
    }
}
