//! Bacteria (grid-chaser) system: общий replan countdown + BFS к игроку.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::components::{Bacteria, BacteriaDriver};
use crate::ai::events::AiEvent;
use crate::ai::steering::face_toward;
use crate::ai::systems::roster::{PlayerRoster, PlayerView};
use crate::components::{AiFrame, Enemy, GameMode, Motion};
use crate::navigation::find_path;
use crate::DeterministicRng;

/// Выбор цели bacteria
///
/// - two-player + `prefer_second` → второй игрок, если он жив
/// - иначе первый игрок
/// - выбранный игрок мёртв → None (plan не строим)
pub fn select_bacteria_target(
    roster: &PlayerRoster,
    two_player: bool,
    prefer_second: bool,
) -> Option<&PlayerView> {
    if two_player && prefer_second {
        if let Some(second) = roster.get(1).filter(|player| !player.is_dead) {
            return Some(second);
        }
    }

    roster.get(0).filter(|player| !player.is_dead)
}

/// Система: bacteria replan
///
/// Когда общий countdown истекает, каждая bacteria с `is_hunting`:
/// 1. сбрасывает флаг
/// 2. выбирает цель (50/50 в two-player режиме)
/// 3. строит BFS путь; при успехе проходит все waypoints синхронно,
///    выставляя velocity к каждому: после тика активна velocity к ПОСЛЕДНЕМУ waypoint
/// 4. при успехе снова взводит `is_hunting`
pub fn bacteria_behavior(
    mut bacteria: Query<(Entity, &mut Bacteria, &mut Motion, &Enemy)>,
    roster: Res<PlayerRoster>,
    mode: Res<GameMode>,
    frame: Res<AiFrame>,
    mut driver: ResMut<BacteriaDriver>,
    mut rng: ResMut<DeterministicRng>,
    mut events: EventWriter<AiEvent>,
) {
    if !driver.tick(frame.elapsed_ms) {
        return;
    }

    for (entity, mut state, mut motion, enemy) in bacteria.iter_mut() {
        if enemy.is_dead || !state.is_hunting {
            continue;
        }
        state.is_hunting = false;

        // RNG тратим только в two-player режиме
        let prefer_second = mode.two_player && rng.rng.gen_bool(0.5);
        let Some(target) = select_bacteria_target(&roster, mode.two_player, prefer_second) else {
            continue;
        };

        if !find_path(&mut driver.workspace, motion.position, target.position, frame.viewport) {
            crate::log_warning(&format!(
                "AI: bacteria {:?} has no path to player {:?}",
                entity, target.entity
            ));
            events.write(AiEvent::PathUnreachable {
                entity,
                target: target.entity,
            });
            continue;
        }

        for &waypoint in driver.workspace.waypoints() {
            face_toward(&mut motion, waypoint, enemy.speed);
        }
        state.is_hunting = true;

        let hops = driver.workspace.hop_count();
        crate::log(&format!(
            "AI: bacteria {:?} planned {} hops to player {:?}",
            entity, hops, target.entity
        ));
        events.write(AiEvent::PathPlanned {
            entity,
            target: target.entity,
            hops,
        });
    }
}
