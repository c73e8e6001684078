//! Runtime configuration read from environment variables.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::core::GridGeometry;
use crate::types::{CELL_SIZE_PX, TICK_HZ, VIEWPORT_HEIGHT_PX, VIEWPORT_WIDTH_PX};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub viewport_width_px: u16,
    pub viewport_height_px: u16,
    pub cell_size_px: u16,
    pub tick_hz: u32,
    /// Fixed food seed; `None` seeds from the clock.
    pub seed: Option<u64>,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width_px: VIEWPORT_WIDTH_PX,
            viewport_height_px: VIEWPORT_HEIGHT_PX,
            cell_size_px: CELL_SIZE_PX,
            tick_hz: TICK_HZ,
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// Every variable is optional; unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse().ok());

        let viewport_width_px = parsed("SNAKE_VIEWPORT_WIDTH").unwrap_or(defaults.viewport_width_px);
        let viewport_height_px =
            parsed("SNAKE_VIEWPORT_HEIGHT").unwrap_or(defaults.viewport_height_px);
        let cell_size_px = parsed("SNAKE_CELL_SIZE").unwrap_or(defaults.cell_size_px);

        let tick_hz = lookup("SNAKE_TICK_HZ")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|hz| hz.max(1))
            .unwrap_or(defaults.tick_hz);

        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("SNAKE_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            viewport_width_px,
            viewport_height_px,
            cell_size_px,
            tick_hz,
            seed,
            log_path,
            log_level,
        }
    }

    /// Grid derived from the viewport, `None` if it would be empty.
    pub fn geometry(&self) -> Option<GridGeometry> {
        GridGeometry::new(
            self.viewport_width_px,
            self.viewport_height_px,
            self.cell_size_px,
        )
    }

    pub fn tick_ms(&self) -> u32 {
        (1000 / self.tick_hz.max(1)).max(1)
    }

    /// The configured seed, or one derived from the system clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}
