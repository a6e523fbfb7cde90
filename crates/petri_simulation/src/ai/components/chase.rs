//! Reactive chaser: преследование + расхождение с соседями

use bevy::prelude::*;

use crate::ai::tuning::AiTuning;
use crate::components::{Enemy, Motion};

/// Состояние reactive chaser
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Motion, Enemy)]
pub struct Chase {
    /// Сосед был ближе порога, идёт avoidance cooldown
    pub encountered: bool,
    /// Heartbeat: countdown до пересчёта heading (ms)
    pub heading_timer_ms: f32,
    pub heading_interval_ms: f32,
    /// Countdown после encounter (ms)
    pub avoid_timer_ms: f32,
    pub avoid_cooldown_ms: f32,
    /// Квадрат дистанции до соседа, ниже которого расходимся
    pub avoid_distance_sq: f32,
}

impl Default for Chase {
    fn default() -> Self {
        Self::from_tuning(&AiTuning::default())
    }
}

impl Chase {
    pub fn new(heading_interval_ms: f32, avoid_cooldown_ms: f32, avoid_distance_sq: f32) -> Self {
        Self {
            encountered: false,
            heading_timer_ms: heading_interval_ms,
            heading_interval_ms,
            avoid_timer_ms: avoid_cooldown_ms,
            avoid_cooldown_ms,
            avoid_distance_sq,
        }
    }

    pub fn from_tuning(tuning: &AiTuning) -> Self {
        Self::new(
            tuning.chase_heading_interval_ms,
            tuning.chase_avoid_cooldown_ms,
            tuning.chase_avoid_distance_sq,
        )
    }

    /// Avoidance cooldown; true когда истёк (и сброшен)
    pub fn tick_avoidance(&mut self, elapsed_ms: f32) -> bool {
        self.avoid_timer_ms -= elapsed_ms;
        if self.avoid_timer_ms > 0.0 {
            return false;
        }
        self.avoid_timer_ms = self.avoid_cooldown_ms;
        true
    }

    /// Heartbeat; true когда истёк (и сброшен)
    pub fn tick_heading(&mut self, elapsed_ms: f32) -> bool {
        self.heading_timer_ms -= elapsed_ms;
        if self.heading_timer_ms > 0.0 {
            return false;
        }
        self.heading_timer_ms = self.heading_interval_ms;
        true
    }
}
