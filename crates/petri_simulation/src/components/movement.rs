//! Movement компоненты: позиция, скорость, ориентация

use bevy::prelude::*;

/// Кинематика entity (top-down 2D)
///
/// Владелец позиции: physics stage (вне AI).
/// AI пишет только `velocity` и `angle`.
///
/// Инвариант: |velocity| ≤ speed актора (кроме knockback и flee impulse).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading (радианы, 0 = +X)
    pub angle: f32,
    pub scale: Vec2,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angle: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl Motion {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..default()
        }
    }

    /// Локальная ось +X с учётом поворота
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }
}
