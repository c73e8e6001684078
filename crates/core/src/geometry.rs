//! Grid geometry - conversions between pixel space and cell space.
//!
//! The grid is derived once from the viewport size and never changes for the
//! lifetime of the process.

use crate::types::{Cell, Direction, CELL_SIZE_PX, VIEWPORT_HEIGHT_PX, VIEWPORT_WIDTH_PX};

/// Grid dimensions and cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridGeometry {
    width: u16,
    height: u16,
    cell_size_px: u16,
}

impl GridGeometry {
    /// Derive the grid from a viewport in pixels.
    ///
    /// Both grid dimensions are floored. Returns `None` for a zero cell size or
    /// a viewport too small to hold a single cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::GridGeometry;
    ///
    /// let geometry = GridGeometry::new(650, 479, 20).unwrap();
    /// assert_eq!((geometry.width(), geometry.height()), (32, 23));
    ///
    /// assert!(GridGeometry::new(640, 480, 0).is_none());
    /// assert!(GridGeometry::new(10, 480, 20).is_none());
    /// ```
    pub fn new(viewport_width_px: u16, viewport_height_px: u16, cell_size_px: u16) -> Option<Self> {
        if cell_size_px == 0 {
            return None;
        }
        let width = viewport_width_px / cell_size_px;
        let height = viewport_height_px / cell_size_px;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            cell_size_px,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_size_px(&self) -> u16 {
        self.cell_size_px
    }

    /// Edge length of a drawn square, one pixel short of the cell so that
    /// neighbouring squares stay visually separated.
    pub fn square_size_px(&self) -> u16 {
        self.cell_size_px.saturating_sub(1).max(1)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Reduce arbitrary coordinates onto the grid (toroidal topology).
    pub fn wrap(&self, x: i32, y: i32) -> Cell {
        Cell::new(
            x.rem_euclid(self.width as i32) as u16,
            y.rem_euclid(self.height as i32) as u16,
        )
    }

    /// The neighbour of `cell` one step in `direction`, wrapping at the edges.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(cell.x as i32 + dx, cell.y as i32 + dy)
    }

    /// Top-left pixel of a cell.
    pub fn cell_to_px(&self, cell: Cell) -> (u16, u16) {
        (
            cell.x.saturating_mul(self.cell_size_px),
            cell.y.saturating_mul(self.cell_size_px),
        )
    }

    /// Cell containing the given pixel, if it lies on the grid.
    pub fn px_to_cell(&self, x_px: u16, y_px: u16) -> Option<Cell> {
        let cell = Cell::new(x_px / self.cell_size_px, y_px / self.cell_size_px);
        self.contains(cell).then_some(cell)
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH_PX / CELL_SIZE_PX,
            height: VIEWPORT_HEIGHT_PX / CELL_SIZE_PX,
            cell_size_px: CELL_SIZE_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constructor() {
        let derived = GridGeometry::new(VIEWPORT_WIDTH_PX, VIEWPORT_HEIGHT_PX, CELL_SIZE_PX);
        assert_eq!(derived, Some(GridGeometry::default()));
        assert_eq!(GridGeometry::default().cell_count(), 32 * 24);
    }

    #[test]
    fn wrap_is_euclidean() {
        let g = GridGeometry::default();
        assert_eq!(g.wrap(-1, 0), Cell::new(31, 0));
        assert_eq!(g.wrap(0, -1), Cell::new(0, 23));
        assert_eq!(g.wrap(32, 24), Cell::new(0, 0));
        assert_eq!(g.wrap(-33, 49), Cell::new(31, 1));
    }

    #[test]
    fn step_wraps_at_every_edge() {
        let g = GridGeometry::default();
        assert_eq!(g.step(Cell::new(31, 5), Direction::Right), Cell::new(0, 5));
        assert_eq!(g.step(Cell::new(0, 5), Direction::Left), Cell::new(31, 5));
        assert_eq!(g.step(Cell::new(7, 0), Direction::Up), Cell::new(7, 23));
        assert_eq!(g.step(Cell::new(7, 23), Direction::Down), Cell::new(7, 0));
        assert_eq!(g.step(Cell::new(7, 7), Direction::Down), Cell::new(7, 8));
    }

    #[test]
    fn pixel_conversions() {
        let g = GridGeometry::default();
        assert_eq!(g.cell_to_px(Cell::new(3, 2)), (60, 40));
        assert_eq!(g.px_to_cell(79, 59), Some(Cell::new(3, 2)));
        assert_eq!(g.px_to_cell(640, 0), None);
        assert_eq!(g.square_size_px(), 19);
    }

    #[test]
    fn square_size_never_collapses_to_zero() {
        let g = GridGeometry::new(10, 10, 1).unwrap();
        assert_eq!(g.square_size_px(), 1);
    }
}
