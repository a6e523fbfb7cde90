//! Headless симуляция PETRI
//!
//! Два игрока + по паре врагов каждого архетипа, 1000 тиков без рендера.

use bevy::prelude::*;
use petri_simulation::{
    create_headless_app, spawn_bacteria, spawn_chaser, spawn_hunter, spawn_player, AiTuning,
    Enemy, GameMode, HunterMode, HunterState, Motion, SimulationPlugin, Viewport,
};

fn setup_demo_scene(mut commands: Commands, tuning: Res<AiTuning>) {
    spawn_player(&mut commands, 0, Vec2::new(400.0, 400.0));
    spawn_player(&mut commands, 1, Vec2::new(150.0, 650.0));

    spawn_hunter(&mut commands, &tuning, Vec2::new(50.0, 50.0), Enemy::new(6.0, 90.0));
    spawn_hunter(&mut commands, &tuning, Vec2::new(750.0, 60.0), Enemy::new(6.0, 90.0));

    spawn_bacteria(&mut commands, Vec2::new(700.0, 700.0), Enemy::new(3.0, 60.0));
    spawn_bacteria(&mut commands, Vec2::new(20.0, 760.0), Enemy::new(3.0, 60.0));

    spawn_chaser(&mut commands, &tuning, Vec2::new(600.0, 200.0), Enemy::new(4.0, 110.0));
    spawn_chaser(&mut commands, &tuning, Vec2::new(630.0, 210.0), Enemy::new(4.0, 110.0));
}

fn main() {
    let seed = 42;
    println!("Starting PETRI headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(GameMode { two_player: true })
        .insert_resource(Viewport::new(800.0, 800.0))
        .add_systems(Startup, setup_demo_scene);

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let world = app.world_mut();
            let hunting = world
                .query::<&HunterState>()
                .iter(world)
                .filter(|hunter| hunter.mode == HunterMode::Hunting)
                .count();
            let moving = world
                .query::<&Motion>()
                .iter(world)
                .filter(|motion| motion.velocity != Vec2::ZERO)
                .count();
            println!("Tick {}: {} hunting, {} moving", tick, hunting, moving);
        }
    }

    println!("Simulation complete!");
}
