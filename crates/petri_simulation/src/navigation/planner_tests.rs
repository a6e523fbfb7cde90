//! Tests for BFS path planner.

use bevy::prelude::*;

use super::grid::{GridIndex, GRID_COLUMNS, GRID_ROWS};
use super::planner::{find_path, PathWorkspace};

const VIEWPORT: Vec2 = Vec2::new(800.0, 800.0);

/// Центр клетки: чтобы старт/цель однозначно попадали внутрь
fn cell_center(grid: &GridIndex, cell: UVec2) -> Vec2 {
    grid.world_of(cell) + grid.cell_size() * 0.5
}

fn all_cells() -> impl Iterator<Item = UVec2> {
    (0..GRID_ROWS).flat_map(|y| (0..GRID_COLUMNS).map(move |x| UVec2::new(x, y)))
}

#[test]
fn test_hop_count_equals_manhattan_for_all_pairs() {
    let grid = GridIndex::new(VIEWPORT);
    let mut workspace = PathWorkspace::new();

    for start in all_cells() {
        for goal in all_cells() {
            let found = find_path(
                &mut workspace,
                cell_center(&grid, start),
                cell_center(&grid, goal),
                VIEWPORT,
            );
            assert!(found, "no path {:?} → {:?}", start, goal);

            let manhattan = start.x.abs_diff(goal.x) + start.y.abs_diff(goal.y);
            assert_eq!(
                workspace.hop_count(),
                manhattan as usize,
                "path {:?} → {:?}",
                start,
                goal
            );
        }
    }
}

#[test]
fn test_path_endpoints_and_adjacency() {
    let grid = GridIndex::new(VIEWPORT);
    let mut workspace = PathWorkspace::new();
    let start = UVec2::new(2, 5);
    let goal = UVec2::new(6, 1);

    assert!(find_path(&mut workspace, cell_center(&grid, start), cell_center(&grid, goal), VIEWPORT));

    let cells: Vec<IVec2> = workspace
        .waypoints()
        .iter()
        .map(|&waypoint| grid.cell_of(waypoint))
        .collect();

    // Первый waypoint: сосед start, последний: goal
    let first = cells[0];
    assert_eq!((first - start.as_ivec2()).abs().element_sum(), 1);
    assert_eq!(*cells.last().unwrap(), goal.as_ivec2());

    // Каждый следующий шаг: ровно одна клетка
    for pair in cells.windows(2) {
        assert_eq!((pair[1] - pair[0]).abs().element_sum(), 1, "jump in {:?}", cells);
    }
}

#[test]
fn test_corner_to_corner_scenario() {
    let mut workspace = PathWorkspace::new();

    assert!(find_path(&mut workspace, Vec2::new(0.0, 0.0), Vec2::new(700.0, 700.0), VIEWPORT));
    assert_eq!(workspace.hop_count(), 14);

    for waypoint in workspace.waypoints() {
        assert_eq!(waypoint.x % 100.0, 0.0, "waypoint {:?}", waypoint);
        assert_eq!(waypoint.y % 100.0, 0.0, "waypoint {:?}", waypoint);
    }
    assert_eq!(*workspace.waypoints().last().unwrap(), Vec2::new(700.0, 700.0));
}

#[test]
fn test_tie_break_prefers_vertical_moves_first() {
    // Порядок соседей up/down/left/right: при равных путях путь из (0,0) в (2,2)
    // сначала спускается по колонке start, потом идёт вправо
    let grid = GridIndex::new(VIEWPORT);
    let mut workspace = PathWorkspace::new();

    assert!(find_path(
        &mut workspace,
        cell_center(&grid, UVec2::new(0, 0)),
        cell_center(&grid, UVec2::new(2, 2)),
        VIEWPORT
    ));

    let cells: Vec<IVec2> = workspace.waypoints().iter().map(|&w| grid.cell_of(w)).collect();
    assert_eq!(
        cells,
        vec![IVec2::new(0, 1), IVec2::new(0, 2), IVec2::new(1, 2), IVec2::new(2, 2)]
    );
}

#[test]
fn test_same_cell_yields_empty_path() {
    let mut workspace = PathWorkspace::new();

    assert!(find_path(&mut workspace, Vec2::new(10.0, 10.0), Vec2::new(90.0, 40.0), VIEWPORT));
    assert_eq!(workspace.hop_count(), 0);
    assert!(workspace.waypoints().is_empty());
}

#[test]
fn test_goal_outside_grid_is_clamped() {
    let mut workspace = PathWorkspace::new();

    assert!(find_path(&mut workspace, Vec2::new(50.0, 50.0), Vec2::new(5000.0, 50.0), VIEWPORT));
    assert_eq!(workspace.hop_count(), 7);
    assert_eq!(*workspace.waypoints().last().unwrap(), Vec2::new(700.0, 0.0));
}

#[test]
fn test_degenerate_viewport_fails_without_waypoints() {
    let mut workspace = PathWorkspace::new();

    assert!(!find_path(&mut workspace, Vec2::ZERO, Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0)));
    assert!(workspace.waypoints().is_empty());
}

#[test]
fn test_repeated_search_is_identical() {
    let mut workspace = PathWorkspace::new();
    let start = Vec2::new(120.0, 640.0);
    let goal = Vec2::new(530.0, 80.0);

    assert!(find_path(&mut workspace, start, goal, VIEWPORT));
    let first = workspace.waypoints().to_vec();

    // Другой поиск между ними не должен влиять на результат
    assert!(find_path(&mut workspace, Vec2::new(700.0, 700.0), Vec2::ZERO, VIEWPORT));

    assert!(find_path(&mut workspace, start, goal, VIEWPORT));
    assert_eq!(workspace.waypoints(), first.as_slice());
}

#[test]
fn test_viewport_change_rebuilds_geometry() {
    let mut workspace = PathWorkspace::new();

    assert!(find_path(&mut workspace, Vec2::ZERO, Vec2::new(750.0, 0.0), VIEWPORT));
    assert_eq!(*workspace.waypoints().last().unwrap(), Vec2::new(700.0, 0.0));

    // Тот же world goal, но viewport вдвое шире → клетка 3, шаг 200
    assert!(find_path(&mut workspace, Vec2::ZERO, Vec2::new(750.0, 0.0), Vec2::new(1600.0, 800.0)));
    assert_eq!(workspace.hop_count(), 3);
    assert_eq!(*workspace.waypoints().last().unwrap(), Vec2::new(600.0, 0.0));
}

#[test]
fn test_reset_clears_visited_marks() {
    let grid = GridIndex::new(VIEWPORT);
    let mut workspace = PathWorkspace::new();

    assert!(find_path(&mut workspace, Vec2::ZERO, Vec2::new(750.0, 750.0), VIEWPORT));
    assert!(workspace.is_visited(&grid, UVec2::new(0, 0)));
    assert!(workspace.is_visited(&grid, UVec2::new(7, 7)));

    // Поиск в пределах одной клетки: BFS не запускается, отметки прошлого поиска стёрты
    assert!(find_path(&mut workspace, Vec2::ZERO, Vec2::new(10.0, 10.0), VIEWPORT));
    assert!(all_cells().all(|cell| !workspace.is_visited(&grid, cell)));

    assert!(find_path(&mut workspace, Vec2::ZERO, Vec2::new(150.0, 0.0), VIEWPORT));
    workspace.reset(grid.cell_count());
    assert!(all_cells().all(|cell| !workspace.is_visited(&grid, cell)));
    assert_eq!(workspace.hop_count(), 0);
}
