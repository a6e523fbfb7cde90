//! PETRI Simulation Core
//!
//! Enemy AI layer для top-down action игры на Bevy ECS 0.16.
//! Рендер, ассеты, звук, физика коллизий: снаружи;
//! здесь только решения врагов (velocity/state) на каждый тик.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod components;
pub mod logger;
pub mod navigation;
pub mod physics;
pub mod spawn;

// Re-export базовых типов для удобства
pub use ai::{step, AIPlugin, AiEvent, AiStep, AiTuning, HunterMode};
pub use components::*;
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use spawn::{spawn_bacteria, spawn_chaser, spawn_hunter, spawn_player};

/// Шаг headless симуляции (ms)
pub const HEADLESS_TICK_MS: u64 = 16;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(ai::DEFAULT_AI_SEED));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins((AIPlugin, physics::HeadlessMotionPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Единственный источник случайности AI: wander hunter'ов, выбор цели bacteria.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную на HEADLESS_TICK_MS за update: прогоны воспроизводимы.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            HEADLESS_TICK_MS,
        )));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
