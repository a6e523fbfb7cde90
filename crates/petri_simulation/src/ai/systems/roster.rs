//! Player roster: снимок игроков на текущий тик

use bevy::prelude::*;

use crate::components::{Motion, Player};

/// Игрок глазами AI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub entity: Entity,
    pub slot: u8,
    pub position: Vec2,
    pub is_dead: bool,
}

/// Упорядоченный (по slot) список игроков, 1–2 записи
///
/// Пересобирается в начале каждого AiStep, порядок стабилен в пределах тика.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerRoster {
    pub players: Vec<PlayerView>,
}

impl PlayerRoster {
    pub fn get(&self, index: usize) -> Option<&PlayerView> {
        self.players.get(index)
    }

    /// Первый живой игрок в порядке roster (НЕ ближайший)
    pub fn first_alive(&self) -> Option<&PlayerView> {
        self.players.iter().find(|player| !player.is_dead)
    }

    /// Ближайший живой игрок и дистанция до него
    ///
    /// При равной дистанции побеждает меньший slot.
    pub fn nearest_alive(&self, from: Vec2) -> Option<(&PlayerView, f32)> {
        let mut nearest: Option<(&PlayerView, f32)> = None;

        for player in self.players.iter().filter(|player| !player.is_dead) {
            let distance = from.distance(player.position);
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((player, distance)),
            }
        }

        nearest
    }
}

/// Система: пересобрать PlayerRoster из Player + Motion
pub fn refresh_player_roster(
    mut roster: ResMut<PlayerRoster>,
    players: Query<(Entity, &Player, &Motion)>,
) {
    roster.players.clear();
    roster.players.extend(players.iter().map(|(entity, player, motion)| PlayerView {
        entity,
        slot: player.slot,
        position: motion.position,
        is_dead: player.is_dead,
    }));
    roster.players.sort_by_key(|player| player.slot);
}
