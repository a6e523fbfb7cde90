//! Steering primitives: "двигаться к X"
//!
//! Heading считается через atan2, velocity = speed вдоль heading.
//! Используется всеми drivers: прямое преследование и следование по BFS waypoints.

use bevy::prelude::*;

use crate::components::Motion;

/// Heading (радианы) от `from` к `to`, None если точки совпадают
pub fn heading_toward(from: Vec2, to: Vec2) -> Option<f32> {
    let delta = to - from;
    if delta == Vec2::ZERO {
        return None;
    }
    Some(delta.y.atan2(delta.x))
}

/// `speed * normalize(to - from)`; нулевой вектор если from == to (без NaN)
pub fn steer_toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    heading_toward(from, to)
        .map(|angle| Vec2::from_angle(angle) * speed)
        .unwrap_or(Vec2::ZERO)
}

/// Развернуть motion к `target` и задать velocity
///
/// Если target совпадает с позицией: velocity обнуляется, angle не меняется.
pub fn face_toward(motion: &mut Motion, target: Vec2, speed: f32) {
    match heading_toward(motion.position, target) {
        Some(angle) => {
            motion.angle = angle;
            motion.velocity = Vec2::from_angle(angle) * speed;
        }
        None => motion.velocity = Vec2::ZERO,
    }
}
