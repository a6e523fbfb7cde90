//! Параметры архетипов врагов
//!
//! Приходят из level data (serde), по умолчанию: значения ниже.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Health, при котором hunter сразу уходит в Fleeing
pub const LOW_HEALTH_THRESHOLD: f32 = 2.0;

/// Множитель скорости одноразового flee impulse
pub const FLEE_SPEED_MULTIPLIER: f32 = 2.0;

/// Тюнинг всех AI архетипов
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    /// Hunter: интервал между think тиками (ms)
    pub hunter_think_interval_ms: f32,
    /// Hunter: радиус обнаружения игрока (world units)
    pub hunter_detection_range: f32,
    /// Bacteria: общий для всех интервал replan (ms)
    pub bacteria_replan_interval_ms: f32,
    /// Chase: heartbeat пересчёта heading (ms)
    pub chase_heading_interval_ms: f32,
    /// Chase: cooldown после расхождения с соседом (ms)
    pub chase_avoid_cooldown_ms: f32,
    /// Chase: квадрат дистанции "сосед слишком близко"
    pub chase_avoid_distance_sq: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            hunter_think_interval_ms: 1000.0,
            hunter_detection_range: 250.0,
            bacteria_replan_interval_ms: 1500.0,
            chase_heading_interval_ms: 1200.0,
            chase_avoid_cooldown_ms: 400.0,
            chase_avoid_distance_sq: 48.0 * 48.0,
        }
    }
}
