//! Food placement and consumption.

use rand::Rng;

use crate::geometry::GridGeometry;
use crate::render::Renderer;
use crate::types::{Cell, Color};

/// A single piece of food on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
    size_px: u16,
}

impl Food {
    /// Place food on a uniformly random cell.
    ///
    /// Snake occupancy is not checked, so food may land under the body.
    pub fn random<R: Rng + ?Sized>(geometry: &GridGeometry, rng: &mut R) -> Self {
        let cell = Cell::new(
            rng.gen_range(0..geometry.width()),
            rng.gen_range(0..geometry.height()),
        );
        Self::at(cell, geometry)
    }

    pub fn at(cell: Cell, geometry: &GridGeometry) -> Self {
        Self {
            cell,
            size_px: geometry.square_size_px(),
        }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn was_eaten(&self, by: Cell) -> bool {
        self.cell == by
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.draw_square(self.cell, self.size_px, Color::Food);
    }

    /// Paint over the food in the background color.
    pub fn hide(&self, renderer: &mut impl Renderer) {
        renderer.draw_square(self.cell, self.size_px, Color::Background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingRenderer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_food_stays_on_the_grid() {
        let g = GridGeometry::new(100, 60, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(g.contains(Food::random(&g, &mut rng).cell()));
        }
    }

    #[test]
    fn random_food_covers_the_grid() {
        let g = GridGeometry::new(60, 40, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Food::random(&g, &mut rng).cell());
        }
        assert_eq!(seen.len(), g.cell_count());
    }

    #[test]
    fn same_seed_same_food() {
        let g = GridGeometry::default();
        let a = Food::random(&g, &mut StdRng::seed_from_u64(42));
        let b = Food::random(&g, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn eaten_only_on_exact_cell() {
        let food = Food::at(Cell::new(4, 9), &GridGeometry::default());
        assert!(food.was_eaten(Cell::new(4, 9)));
        assert!(!food.was_eaten(Cell::new(9, 4)));
        assert!(!food.was_eaten(Cell::new(4, 10)));
    }

    #[test]
    fn hide_draws_background_square_of_same_size() {
        let food = Food::at(Cell::new(2, 3), &GridGeometry::default());
        let mut r = RecordingRenderer::new();
        food.draw(&mut r);
        food.hide(&mut r);

        assert_eq!(
            r.commands(),
            &[
                DrawCommand::Square {
                    cell: Cell::new(2, 3),
                    size_px: 19,
                    color: Color::Food,
                },
                DrawCommand::Square {
                    cell: Cell::new(2, 3),
                    size_px: 19,
                    color: Color::Background,
                },
            ]
        );
    }
}
