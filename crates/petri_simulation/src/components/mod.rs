//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: статус врагов и игроков (Enemy, Player)
//! - movement: кинематика (Motion)
//! - ai: состояния архетипов (HunterState, Bacteria, Chase)
//! - world: глобальный контекст тика (Viewport, GameMode, AiFrame)

pub mod actor;
pub mod movement;
pub mod ai;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use ai::*;
pub use world::*;
