//! Breadth-First Path Planner
//!
//! BFS по 4-связной сетке 8×8 от клетки start к клетке goal.
//! Путь восстанавливается по predecessor-ссылкам и отдаётся как waypoints в world coordinates.
//!
//! Workspace (visited, predecessors, очередь, waypoints) принадлежит вызывающему
//! (BacteriaDriver) и передаётся по ссылке. `reset()` вызывается на входе каждого поиска,
//! данные прошлого поиска не протекают в следующий.

use bevy::prelude::*;
use std::collections::VecDeque;

use super::grid::GridIndex;

/// Scratch buffer для одного BFS поиска
///
/// Переиспользуется последовательно всеми grid-chaser'ами в тике
/// (один поиск за раз, single-threaded).
#[derive(Debug, Clone, Default)]
pub struct PathWorkspace {
    visited: Vec<bool>,
    /// Клетка, из которой клетка была открыта (first writer wins)
    predecessors: Vec<Option<UVec2>>,
    pending: VecDeque<UVec2>,
    /// Waypoints в прямом порядке: без start клетки, с goal клеткой
    waypoints: Vec<Vec2>,
}

impl PathWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Полный сброс под сетку из `cell_count` клеток
    pub fn reset(&mut self, cell_count: usize) {
        self.visited.clear();
        self.visited.resize(cell_count, false);
        self.predecessors.clear();
        self.predecessors.resize(cell_count, None);
        self.pending.clear();
        self.waypoints.clear();
    }

    /// Waypoints последнего успешного поиска (start → goal)
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Длина пути в шагах (hop count)
    pub fn hop_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Клетка была снята из очереди в последнем поиске
    pub fn is_visited(&self, grid: &GridIndex, cell: UVec2) -> bool {
        self.visited.get(grid.index(cell)).copied().unwrap_or(false)
    }
}

/// Найти путь от `start` до `goal` (world coordinates) на сетке поверх `viewport`
///
/// Возвращает true если путь существует; waypoints лежат в `workspace.waypoints()`.
/// - start и goal прижимаются к границам сетки
/// - start == goal (одна клетка) → true, путь нулевой длины
/// - goal недостижим → false, waypoints пусты
/// - вырожденный viewport → false
pub fn find_path(workspace: &mut PathWorkspace, start: Vec2, goal: Vec2, viewport: Vec2) -> bool {
    let grid = GridIndex::new(viewport);
    workspace.reset(grid.cell_count());

    if grid.is_degenerate() {
        return false;
    }

    let start_cell = grid.clamped_cell_of(start);
    let goal_cell = grid.clamped_cell_of(goal);

    if start_cell == goal_cell {
        return true;
    }

    if !search(workspace, &grid, start_cell, goal_cell) {
        return false;
    }

    reconstruct(workspace, &grid, start_cell, goal_cell)
}

/// BFS: стоп когда goal достаётся из очереди и помечается visited
fn search(workspace: &mut PathWorkspace, grid: &GridIndex, start: UVec2, goal: UVec2) -> bool {
    workspace.pending.push_back(start);

    while let Some(cell) = workspace.pending.pop_front() {
        let index = grid.index(cell);
        if workspace.visited[index] {
            continue;
        }
        workspace.visited[index] = true;

        if cell == goal {
            return true;
        }

        for neighbor in grid.neighbors(cell) {
            let neighbor_index = grid.index(neighbor);
            if neighbor == start
                || workspace.visited[neighbor_index]
                || workspace.predecessors[neighbor_index].is_some()
            {
                continue;
            }
            workspace.predecessors[neighbor_index] = Some(cell);
            workspace.pending.push_back(neighbor);
        }
    }

    false
}

/// Проход по predecessor-ссылкам goal → start, затем разворот в прямой порядок
fn reconstruct(workspace: &mut PathWorkspace, grid: &GridIndex, start: UVec2, goal: UVec2) -> bool {
    let mut cell = goal;

    // Путь не длиннее числа клеток; больше: битые ссылки
    for _ in 0..grid.cell_count() {
        if cell == start {
            workspace.waypoints.reverse();
            return true;
        }
        workspace.waypoints.push(grid.world_of(cell));

        match workspace.predecessors[grid.index(cell)] {
            Some(previous) => cell = previous,
            None => break,
        }
    }

    workspace.waypoints.clear();
    false
}
