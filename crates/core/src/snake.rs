//! Snake module - body, direction and deferred growth.

use std::collections::VecDeque;

use crate::geometry::GridGeometry;
use crate::render::Renderer;
use crate::types::{Cell, Color, Direction, INITIAL_DIRECTION, INITIAL_SNAKE};

/// The player's snake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body cells, tail first and head last.
    body: VecDeque<Cell>,
    /// Cached copy of the last body cell.
    head: Cell,
    direction: Direction,
    /// Set by `grow()`, consumed by the next `move_step()`.
    growing: bool,
    geometry: GridGeometry,
}

impl Snake {
    /// Spawn the four-cell starting snake facing right.
    pub fn new(geometry: GridGeometry) -> Self {
        let mut body = VecDeque::with_capacity(geometry.cell_count());
        body.extend(
            INITIAL_SNAKE
                .iter()
                .map(|&(x, y)| geometry.wrap(x as i32, y as i32)),
        );
        let head = geometry.wrap(INITIAL_SNAKE[3].0 as i32, INITIAL_SNAKE[3].1 as i32);

        Self {
            body,
            head,
            direction: INITIAL_DIRECTION,
            growing: false,
            geometry,
        }
    }

    /// Build a snake from explicit cells, tail first.
    ///
    /// Returns `None` for an empty body.
    pub fn with_body(
        cells: impl IntoIterator<Item = Cell>,
        direction: Direction,
        geometry: GridGeometry,
    ) -> Option<Self> {
        let mut body = VecDeque::with_capacity(geometry.cell_count());
        body.extend(cells);
        let head = *body.back()?;

        Some(Self {
            body,
            head,
            direction,
            growing: false,
            geometry,
        })
    }

    /// Advance one cell in the current direction.
    ///
    /// The tail is dropped unless a `grow()` is pending. The new head wraps
    /// around the grid edges.
    pub fn move_step(&mut self) {
        let next = self.geometry.step(self.head, self.direction);

        if !self.growing {
            self.body.pop_front();
        }
        self.body.push_back(next);
        self.head = next;
        self.growing = false;
    }

    /// Lengthen the snake by one cell on the next move.
    pub fn grow(&mut self) {
        self.growing = true;
    }

    /// Change direction unless it would reverse the snake.
    ///
    /// Returns whether the new direction was applied.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.can_change_direction_to(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// False only for the exact opposite of the current direction.
    pub fn can_change_direction_to(&self, direction: Direction) -> bool {
        !self.direction.is_opposite(direction)
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Body cells from tail to head.
    pub fn body(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True if any cell of the body appears more than once.
    ///
    /// Runs every tick, so it scans in place instead of building a set.
    /// The head is checked first since a move can only collide there.
    pub fn hit_itself(&self) -> bool {
        let len = self.body.len();
        if self.body.range(..len.saturating_sub(1)).any(|&c| c == self.head) {
            return true;
        }
        self.body
            .iter()
            .enumerate()
            .any(|(i, cell)| self.body.range(i + 1..).any(|other| other == cell))
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        let size = self.geometry.square_size_px();
        for &cell in &self.body {
            renderer.draw_square(cell, size, Color::Snake);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;

    fn cells(raw: &[(u16, u16)]) -> Vec<Cell> {
        raw.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn spawns_with_four_cells_facing_right() {
        let snake = Snake::new(GridGeometry::default());
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Cell::new(17, 11));
        assert!(!snake.is_growing());
        assert!(!snake.hit_itself());
    }

    #[test]
    fn move_without_growth_shifts_the_body() {
        let mut snake = Snake::new(GridGeometry::default());
        snake.move_step();
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            cells(&[(15, 11), (16, 11), (17, 11), (18, 11)])
        );
    }

    #[test]
    fn grow_takes_effect_on_next_move_only() {
        let mut snake = Snake::new(GridGeometry::default());
        snake.grow();
        assert_eq!(snake.len(), 4);
        assert!(snake.is_growing());

        snake.move_step();
        assert_eq!(snake.len(), 5);
        assert!(!snake.is_growing());
        assert_eq!(snake.body().next(), Some(Cell::new(14, 11)));

        snake.move_step();
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new(GridGeometry::default());
        assert!(!snake.can_change_direction_to(Direction::Left));
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        assert!(snake.set_direction(Direction::Right));
        assert!(snake.set_direction(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);
        assert!(!snake.set_direction(Direction::Down));
    }

    #[test]
    fn reversal_is_rejected_even_for_a_single_cell() {
        let g = GridGeometry::default();
        let mut snake = Snake::with_body([Cell::new(5, 5)], Direction::Up, g).unwrap();
        assert!(!snake.set_direction(Direction::Down));

        snake.move_step();
        assert_eq!(snake.body().collect::<Vec<_>>(), vec![Cell::new(5, 4)]);
    }

    #[test]
    fn direction_rules_for_every_heading() {
        let g = GridGeometry::default();
        for heading in Direction::ALL {
            let snake = Snake::with_body([Cell::new(3, 3)], heading, g).unwrap();
            for requested in Direction::ALL {
                assert_eq!(
                    snake.can_change_direction_to(requested),
                    requested != heading.opposite(),
                    "heading {:?}, requested {:?}",
                    heading,
                    requested
                );
            }
        }
    }

    #[test]
    fn wraps_right_edge_and_top_edge() {
        let g = GridGeometry::default();

        let mut right = Snake::with_body(cells(&[(30, 4), (31, 4)]), Direction::Right, g).unwrap();
        right.move_step();
        assert_eq!(right.head(), Cell::new(0, 4));

        let mut up = Snake::with_body(cells(&[(6, 1), (6, 0)]), Direction::Up, g).unwrap();
        up.move_step();
        assert_eq!(up.head(), Cell::new(6, 23));
    }

    #[test]
    fn hit_itself_detects_any_repeat() {
        let g = GridGeometry::default();
        let looped = Snake::with_body(
            cells(&[(5, 5), (6, 5), (6, 6), (5, 6), (5, 5)]),
            Direction::Up,
            g,
        )
        .unwrap();
        assert!(looped.hit_itself());

        let tail_repeat =
            Snake::with_body(cells(&[(1, 1), (1, 1), (2, 1)]), Direction::Right, g).unwrap();
        assert!(tail_repeat.hit_itself());

        let middle_repeat = Snake::with_body(
            cells(&[(0, 0), (4, 4), (1, 0), (4, 4), (2, 0)]),
            Direction::Right,
            g,
        )
        .unwrap();
        assert!(middle_repeat.hit_itself());

        let single = Snake::with_body(cells(&[(9, 9)]), Direction::Left, g).unwrap();
        assert!(!single.hit_itself());
    }

    #[test]
    fn turning_into_the_body_collides() {
        let g = GridGeometry::default();
        let mut snake = Snake::with_body(
            cells(&[(2, 5), (3, 5), (4, 5), (5, 5), (6, 5)]),
            Direction::Right,
            g,
        )
        .unwrap();

        snake.set_direction(Direction::Down);
        snake.move_step();
        snake.set_direction(Direction::Left);
        snake.move_step();
        assert!(!snake.hit_itself());
        snake.set_direction(Direction::Up);
        snake.move_step();
        assert!(snake.hit_itself());
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(Snake::with_body(Vec::<Cell>::new(), Direction::Up, GridGeometry::default()).is_none());
    }

    #[test]
    fn draws_one_square_per_cell() {
        let snake = Snake::new(GridGeometry::default());
        let mut r = RecordingRenderer::new();
        snake.draw(&mut r);
        assert_eq!(
            r.squares(Color::Snake).collect::<Vec<_>>(),
            snake.body().collect::<Vec<_>>()
        );
    }
}
