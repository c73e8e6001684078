//! Game engine - drives the core rules in real time.
//!
//! - [`game_loop`]: the per-tick state machine (Running / GameOver) and restart
//! - [`timestep`]: fixed-timestep accumulator that turns wall time into ticks
//! - [`config`]: environment-driven runtime configuration
//!
//! # Example
//!
//! ```
//! use tui_snake_engine::{GameLoop, Phase};
//! use tui_snake_engine::core::{GridGeometry, NullRenderer};
//!
//! let mut game = GameLoop::new(GridGeometry::default(), 1);
//! game.tick(&mut NullRenderer);
//! assert_eq!(game.phase(), Phase::Running);
//! ```

pub mod config;
pub mod game_loop;
pub mod timestep;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::GameConfig;
pub use game_loop::{GameLoop, Phase, TickReport};
pub use timestep::{FixedTimestep, MAX_CATCH_UP_TICKS};
