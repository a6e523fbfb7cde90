//! Grid navigation
//!
//! Грубая сетка 8×8 поверх viewport + BFS planner для grid-chaser врагов.
//! Никаких navmesh: сетка всегда открыта, препятствий нет.

pub mod grid;
pub mod planner;

#[cfg(test)]
mod planner_tests;

pub use grid::{GridIndex, GRID_COLUMNS, GRID_ROWS};
pub use planner::{find_path, PathWorkspace};
