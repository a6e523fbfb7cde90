//! Grid-chaser (bacteria): периодический BFS replan к игроку

use bevy::prelude::*;

use crate::ai::tuning::AiTuning;
use crate::components::{Enemy, Motion};
use crate::navigation::PathWorkspace;

/// Состояние bacteria entity
///
/// `is_hunting`: входной флаг: driver только читает и сбрасывает его,
/// повторно взводит после успешного plan.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Motion, Enemy)]
pub struct Bacteria {
    pub is_hunting: bool,
}

impl Default for Bacteria {
    fn default() -> Self {
        Self { is_hunting: true }
    }
}

/// Driver всех bacteria
///
/// Один replan countdown на всех (не per-entity) + BFS workspace,
/// который поиски используют по очереди.
#[derive(Resource, Debug, Clone)]
pub struct BacteriaDriver {
    pub replan_interval_ms: f32,
    pub replan_timer_ms: f32,
    pub workspace: PathWorkspace,
}

impl Default for BacteriaDriver {
    fn default() -> Self {
        Self::from_tuning(&AiTuning::default())
    }
}

impl BacteriaDriver {
    pub fn new(replan_interval_ms: f32) -> Self {
        Self {
            replan_interval_ms,
            replan_timer_ms: replan_interval_ms,
            workspace: PathWorkspace::new(),
        }
    }

    pub fn from_tuning(tuning: &AiTuning) -> Self {
        Self::new(tuning.bacteria_replan_interval_ms)
    }

    /// Продвинуть countdown; true если пора делать replan
    pub fn tick(&mut self, elapsed_ms: f32) -> bool {
        self.replan_timer_ms -= elapsed_ms;
        if self.replan_timer_ms > 0.0 {
            return false;
        }
        self.replan_timer_ms = self.replan_interval_ms;
        true
    }
}
