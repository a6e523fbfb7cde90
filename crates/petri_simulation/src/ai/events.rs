//! AI Events: наружу для анимации/звука (вне AI core)

use bevy::prelude::*;

use super::components::HunterMode;

/// События AI drivers
#[derive(Event, Debug, Clone, PartialEq)]
pub enum AiEvent {
    /// Hunter сменил состояние
    HunterModeChanged {
        entity: Entity,
        from: HunterMode,
        to: HunterMode,
    },

    /// Bacteria построила путь и выставила velocity по waypoints
    PathPlanned {
        entity: Entity,
        /// Player entity, к которому строили путь
        target: Entity,
        hops: usize,
    },

    /// BFS не дошёл до цели, velocity не менялась
    PathUnreachable {
        entity: Entity,
        target: Entity,
    },
}
