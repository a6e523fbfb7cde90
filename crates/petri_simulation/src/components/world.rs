//! Глобальный контекст тика: viewport, режим игры, параметры текущего step

use bevy::prelude::*;

/// Размер текущего viewport (world units)
///
/// Сетка 8×8 строится поверх него при каждом replan.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Режим игры (внешний флаг)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameMode {
    pub two_player: bool,
}

/// Параметры текущего AI step
///
/// Пишется в `crate::ai::step` перед запуском AiStep schedule.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct AiFrame {
    /// Прошедшее время с прошлого step (ms)
    pub elapsed_ms: f32,
    pub viewport: Vec2,
}
