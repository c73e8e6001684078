//! Game loop - one discrete update per tick plus the restart flow.
//!
//! The loop exclusively owns the snake, the food and the score. A restart
//! throws all three away and builds fresh ones, so nothing from the previous
//! game leaks into the next.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{Food, GridGeometry, Renderer, ScoreTracker, Snake};
use crate::types::{Cell, GameAction};

/// Coarse state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// The snake advanced (false once the game is over)
    pub moved: bool,
    /// The snake ran into itself on this tick
    pub game_over: bool,
    /// Food was eaten on this tick
    pub ate_food: bool,
}

/// Owns the live game objects and advances them.
#[derive(Debug, Clone)]
pub struct GameLoop {
    geometry: GridGeometry,
    rng: StdRng,
    seed: u64,
    snake: Snake,
    food: Food,
    score: ScoreTracker,
    /// Ticks since the current game started.
    ticks: u64,
    /// Monotonic game id (increments on restart).
    episode_id: u32,
}

impl GameLoop {
    /// Start a game. `seed` drives every food placement.
    pub fn new(geometry: GridGeometry, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let food = Food::random(&geometry, &mut rng);

        Self {
            geometry,
            rng,
            seed,
            snake: Snake::new(geometry),
            food,
            score: ScoreTracker::new(),
            ticks: 0,
            episode_id: 0,
        }
    }

    /// Run one tick and draw the resulting frame.
    ///
    /// Order matters: move, draw, then check self-collision, then check food.
    /// Once the game is over the snake stays put and no more food is eaten,
    /// but the frame keeps being drawn.
    pub fn tick(&mut self, renderer: &mut impl Renderer) -> TickReport {
        let mut report = TickReport::default();
        let running = self.phase() == Phase::Running;
        self.ticks += 1;

        renderer.clear();

        if running {
            self.snake.move_step();
            report.moved = true;
        }

        self.score.draw(renderer);
        self.snake.draw(renderer);
        self.food.draw(renderer);

        if self.snake.hit_itself() {
            self.food.hide(renderer);
            if running {
                info!(
                    "game {} over after {} ticks, score {}",
                    self.episode_id,
                    self.ticks,
                    self.score.score()
                );
                report.game_over = true;
            }
            self.score.mark_game_over();
        }

        // Food under the head is left alone once the game is over, so the
        // final score shown in the game-over text cannot change.
        if running && self.food.was_eaten(self.snake.head()) {
            self.score.increase();
            self.snake.grow();
            self.food = Food::random(&self.geometry, &mut self.rng);
            report.ate_food = true;
            debug!(
                "food eaten at {:?}, score {}, next food at {:?}",
                self.snake.head(),
                self.score.score(),
                self.food.cell()
            );
        }

        report
    }

    /// Apply a player action.
    ///
    /// Returns whether it changed anything: reversals are ignored and
    /// `Restart` only works once the game is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => {
                let applied = self.snake.set_direction(direction);
                if !applied {
                    debug!("ignored reversal to {}", direction.as_str());
                }
                applied
            }
            GameAction::Restart => {
                if self.phase() != Phase::GameOver {
                    return false;
                }
                self.restart();
                true
            }
        }
    }

    /// Replace snake, food and score with fresh instances.
    ///
    /// Unconditional; `apply_action(GameAction::Restart)` is the gated path
    /// used for player input.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(
            "starting game {} (previous score {})",
            self.episode_id,
            self.score.score()
        );

        self.snake = Snake::new(self.geometry);
        self.food = Food::random(&self.geometry, &mut self.rng);
        self.score = ScoreTracker::new();
        self.ticks = 0;
    }

    pub fn phase(&self) -> Phase {
        if self.score.is_game_over() {
            Phase::GameOver
        } else {
            Phase::Running
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut ScoreTracker {
        &mut self.score
    }

    /// Move the current food to a specific cell.
    pub fn place_food(&mut self, cell: Cell) {
        self.food = Food::at(cell, &self.geometry);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
