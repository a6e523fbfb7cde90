//! AI decision-making module
//!
//! Три архетипа врагов:
//! - Hunter: FSM Searching → Hunting → Fleeing, think раз в интервал
//! - Bacteria: периодический BFS replan по сетке 8×8
//! - Chase: прямое преследование + расхождение с соседями
//!
//! Единственная точка входа: `step(world, elapsed_ms, width, height)`,
//! все эффекты: запись Motion/состояний в ECS.

use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod steering;
pub mod systems;
pub mod tuning;

// Re-export основных типов
pub use components::{
    next_hunter_mode, Bacteria, BacteriaDriver, Chase, HunterMode, HunterSenses, HunterState,
};
pub use events::AiEvent;
pub use steering::{face_toward, heading_toward, steer_toward};
pub use systems::{select_bacteria_target, PlayerRoster, PlayerView};
pub use tuning::{AiTuning, FLEE_SPEED_MULTIPLIER, LOW_HEALTH_THRESHOLD};

use crate::components::{AiFrame, GameMode, Viewport};
use crate::DeterministicRng;

/// Seed по умолчанию, если RNG не вставлен снаружи
pub const DEFAULT_AI_SEED: u64 = 42;

/// Schedule одного AI тика
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AiStep;

/// AI Plugin
///
/// Регистрирует AiStep schedule. Порядок выполнения (chain):
/// 1. assert_archetype_integrity: архетип без Motion/Enemy роняет тик
/// 2. refresh_player_roster: снимок игроков
/// 3. hunter_behavior
/// 4. bacteria_behavior
/// 5. chaser_behavior
///
/// В FixedUpdate `run_ai_fixed_step` гоняет тот же тик с fixed delta.
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AiTuning>()
            .init_resource::<PlayerRoster>()
            .init_resource::<GameMode>()
            .init_resource::<Viewport>()
            .init_resource::<AiFrame>()
            .add_event::<AiEvent>();

        if !app.world().contains_resource::<BacteriaDriver>() {
            let driver = BacteriaDriver::from_tuning(app.world().resource::<AiTuning>());
            app.insert_resource(driver);
        }

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_AI_SEED));
        }

        app.add_systems(
            AiStep,
            (
                systems::assert_archetype_integrity,
                systems::refresh_player_roster,
                systems::hunter_behavior,
                systems::bacteria_behavior,
                systems::chaser_behavior,
            )
                .chain(), // Фиксированный порядок: Hunter, Bacteria, Chaser
        )
        .add_systems(FixedUpdate, run_ai_fixed_step);
    }
}

/// Один AI тик
///
/// Пишет AiFrame + Viewport и прогоняет AiStep schedule целиком.
/// Ничего не возвращает, все эффекты: в компонентах.
///
/// Буфер `Events<AiEvent>` сдвигается на входе: события живут два вызова `step`,
/// дальше отбрасываются (без App::update очередь иначе растёт бесконечно).
pub fn step(world: &mut World, elapsed_ms: f32, viewport_width: f32, viewport_height: f32) {
    if let Some(mut events) = world.get_resource_mut::<Events<AiEvent>>() {
        events.update();
    }

    run_step(world, elapsed_ms, viewport_width, viewport_height);
}

/// Exclusive система: AI тик из FixedUpdate (delta из Time<Fixed>, viewport: текущий)
///
/// Events здесь не трогаем: их сдвигает event_update_system самого App.
pub fn run_ai_fixed_step(world: &mut World) {
    let elapsed_ms = world.resource::<Time<Fixed>>().delta_secs() * 1000.0;
    let viewport = *world.resource::<Viewport>();

    run_step(world, elapsed_ms, viewport.width, viewport.height);
}

fn run_step(world: &mut World, elapsed_ms: f32, viewport_width: f32, viewport_height: f32) {
    let viewport = Viewport::new(viewport_width, viewport_height);

    world.insert_resource(viewport);
    world.insert_resource(AiFrame {
        elapsed_ms,
        viewport: viewport.size(),
    });
    world.run_schedule(AiStep);
}
