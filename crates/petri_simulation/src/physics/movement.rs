//! Интеграция velocity → position (headless, без коллизий)

use bevy::prelude::*;

use crate::components::{Motion, Viewport};

/// Система: position += velocity * dt, позиция прижимается к viewport
///
/// Работает в FixedUpdate сразу после AI тика.
pub fn integrate_motion(
    mut query: Query<&mut Motion>,
    viewport: Res<Viewport>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();
    let bounds = viewport.size();

    for mut motion in query.iter_mut() {
        let next = motion.position + motion.velocity * delta;
        motion.position = next.clamp(Vec2::ZERO, bounds.max(Vec2::ZERO));
    }
}

/// Plugin: headless интеграция движения после AI
pub struct HeadlessMotionPlugin;

impl Plugin for HeadlessMotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            integrate_motion.after(crate::ai::run_ai_fixed_step),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_logic() {
        // Логика интеграции напрямую (без App schedule)
        let mut motion = Motion {
            velocity: Vec2::new(60.0, -30.0),
            ..Motion::at(Vec2::new(100.0, 100.0))
        };
        let delta = 1.0 / 60.0;

        motion.position = (motion.position + motion.velocity * delta).clamp(Vec2::ZERO, Vec2::splat(800.0));

        assert!((motion.position.x - 101.0).abs() < 1e-4);
        assert!((motion.position.y - 99.5).abs() < 1e-4);
    }
}
