//! Grid Index: world coordinates ↔ клетки 8×8 сетки viewport
//!
//! Чистое преобразование координат, состояния кроме размеров нет.

use bevy::prelude::*;

/// Количество колонок сетки
pub const GRID_COLUMNS: u32 = 8;
/// Количество строк сетки
pub const GRID_ROWS: u32 = 8;

/// Сетка поверх конкретного viewport
///
/// Строится заново на каждый replan: если viewport поменялся между replan'ами,
/// старая геометрия не переиспользуется.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridIndex {
    cell_size: Vec2,
}

impl GridIndex {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            cell_size: Vec2::new(
                viewport.x / GRID_COLUMNS as f32,
                viewport.y / GRID_ROWS as f32,
            ),
        }
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Viewport нулевого/отрицательного размера: сетку построить нельзя
    pub fn is_degenerate(&self) -> bool {
        !(self.cell_size.x > 0.0 && self.cell_size.y > 0.0)
    }

    pub fn cell_count(&self) -> usize {
        (GRID_COLUMNS * GRID_ROWS) as usize
    }

    /// `floor(pos / cell_size)` по каждой оси, без clamp
    pub fn cell_of(&self, world_pos: Vec2) -> IVec2 {
        let scaled = (world_pos / self.cell_size).floor();
        IVec2::new(scaled.x as i32, scaled.y as i32)
    }

    /// Клетка, прижатая к границам [0, 7]
    pub fn clamped_cell_of(&self, world_pos: Vec2) -> UVec2 {
        let cell = self.cell_of(world_pos);
        UVec2::new(
            cell.x.clamp(0, GRID_COLUMNS as i32 - 1) as u32,
            cell.y.clamp(0, GRID_ROWS as i32 - 1) as u32,
        )
    }

    /// Клетка внутри сетки 8×8 (соседи за краем отбрасываются, start/goal прижимаются)
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < GRID_COLUMNS as i32 && cell.y < GRID_ROWS as i32
    }

    /// Обратное преобразование: левый верхний угол клетки (cell × cell_size)
    pub fn world_of(&self, cell: UVec2) -> Vec2 {
        cell.as_vec2() * self.cell_size
    }

    #[inline]
    pub fn index(&self, cell: UVec2) -> usize {
        (cell.y * GRID_COLUMNS + cell.x) as usize
    }

    /// 4-связные соседи в фиксированном порядке: up, down, left, right
    ///
    /// Порядок определяет, какой из равных по длине путей вернёт BFS.
    /// "Up" = row - 1 (экранные координаты, Y вниз).
    pub fn neighbors(&self, cell: UVec2) -> impl Iterator<Item = UVec2> {
        let grid = *self;
        let cell = cell.as_ivec2();
        [IVec2::NEG_Y, IVec2::Y, IVec2::NEG_X, IVec2::X]
            .into_iter()
            .map(move |offset| cell + offset)
            .filter(move |&neighbor| grid.contains(neighbor))
            .map(|neighbor| neighbor.as_uvec2())
    }
}
