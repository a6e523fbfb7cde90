//! Hunter FSM: Searching → Hunting → Fleeing
//!
//! Переходы: чистая функция `next_hunter_mode` (без Motion/Query),
//! side effects (velocity) применяет система `hunter_behavior`.

use bevy::prelude::*;

use crate::ai::tuning::{AiTuning, LOW_HEALTH_THRESHOLD};
use crate::components::{Enemy, Motion};

/// Состояния hunter
///
/// Fleeing терминальное: выхода из него нет.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum HunterMode {
    /// Бродит случайно, ищет игрока в радиусе
    #[default]
    Searching,
    /// Преследует ближайшего живого игрока
    Hunting,
    /// Убегает (low health), один impulse и дальше без управления
    Fleeing,
}

/// Состояние hunter entity
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Motion, Enemy)]
pub struct HunterState {
    pub mode: HunterMode,
    /// Таймер истёк, на этом тике будет think
    pub can_think: bool,
    /// Countdown до следующего think (ms)
    pub think_timer_ms: f32,
    pub think_interval_ms: f32,
    pub detection_range: f32,
    /// Latch: flee velocity уже выставлена
    pub is_fleeing: bool,
    /// Для анимации: hunter активно преследует
    pub is_animating: bool,
}

impl Default for HunterState {
    fn default() -> Self {
        Self::from_tuning(&AiTuning::default())
    }
}

impl HunterState {
    pub fn new(think_interval_ms: f32, detection_range: f32) -> Self {
        Self {
            mode: HunterMode::Searching,
            can_think: false,
            think_timer_ms: think_interval_ms,
            think_interval_ms,
            detection_range,
            is_fleeing: false,
            is_animating: false,
        }
    }

    pub fn from_tuning(tuning: &AiTuning) -> Self {
        Self::new(tuning.hunter_think_interval_ms, tuning.hunter_detection_range)
    }

    /// Продвинуть think countdown; true если на этом тике нужно думать
    ///
    /// Countdown сбрасывается к интервалу в момент срабатывания.
    pub fn tick_think_timer(&mut self, elapsed_ms: f32) -> bool {
        self.think_timer_ms -= elapsed_ms;
        if self.think_timer_ms <= 0.0 {
            self.think_timer_ms = self.think_interval_ms;
            self.can_think = true;
        }
        std::mem::take(&mut self.can_think)
    }
}

/// Что hunter "видит" на текущем тике
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterSenses {
    pub health: f32,
    /// Дистанция до ближайшего живого игрока (None: живых нет)
    pub nearest_player_distance: Option<f32>,
    pub detection_range: f32,
    /// Think тик (таймер истёк)
    pub thinking: bool,
}

/// Переход FSM
///
/// - low health → Fleeing на любом тике, независимо от таймера
/// - Fleeing → Fleeing (терминальное)
/// - без think тика состояние не меняется
/// - Searching → Hunting если ближайший игрок строго ближе detection_range
pub fn next_hunter_mode(current: HunterMode, senses: &HunterSenses) -> HunterMode {
    if senses.health <= LOW_HEALTH_THRESHOLD {
        return HunterMode::Fleeing;
    }

    match current {
        HunterMode::Fleeing => HunterMode::Fleeing,
        _ if !senses.thinking => current,
        HunterMode::Searching => match senses.nearest_player_distance {
            Some(distance) if distance < senses.detection_range => HunterMode::Hunting,
            _ => HunterMode::Searching,
        },
        HunterMode::Hunting => HunterMode::Hunting,
    }
}
