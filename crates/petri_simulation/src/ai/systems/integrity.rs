//! Проверка целостности archetype entity перед тиком

use bevy::prelude::*;

use crate::ai::components::{Bacteria, Chase, HunterState};
use crate::components::{Enemy, Motion};

type ArchetypeFilter = Or<(With<HunterState>, With<Bacteria>, With<Chase>)>;
type BrokenFilter = Or<(Without<Motion>, Without<Enemy>)>;

/// Система: архетип без Motion/Enemy = повреждённая entity, тик прерывается
///
/// Required components гарантируют набор при spawn, но Motion/Enemy можно снять позже.
/// Drivers такую entity просто не увидели бы в Query, поэтому падаем здесь.
pub fn assert_archetype_integrity(broken: Query<Entity, (ArchetypeFilter, BrokenFilter)>) {
    let Some(entity) = broken.iter().next() else {
        return;
    };

    crate::log_error(&format!(
        "AI entity {:?} lost Motion/Enemy ({} broken total)",
        entity,
        broken.iter().count()
    ));
    panic!("AI entity {:?} is missing Motion or Enemy", entity);
}
