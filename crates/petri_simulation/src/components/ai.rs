//! AI компоненты: hunter FSM, grid-chaser, reactive chaser

// NOTE: компоненты живут в crate::ai::components рядом с системами,
// здесь только re-export для единообразия импорта
pub use crate::ai::{Bacteria, Chase, HunterMode, HunterState};
