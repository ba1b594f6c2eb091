//! Runtime configuration: gameplay tunables and process arguments.
//!
//! Every constant the game logic depends on can be overridden from the
//! command line, so the same binary works across exhibit rigs with
//! different towers and scales.

use std::time::Duration;

use clap::Parser;

use crate::types::{
    DEFAULT_BAUD_RATE, DEFAULT_BLOCKS_TO_WIN, DEFAULT_COLLAPSE_THRESHOLD,
    DEFAULT_GAME_DURATION_SECS, DEFAULT_TICK_MS, DEFAULT_WEIGHT_THRESHOLD,
};

/// Gameplay tunables consumed by the session and classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Round length in seconds.
    pub game_duration_secs: f64,
    /// Blocks that must be removed to win.
    pub blocks_to_win: u32,
    /// Minimum |delta| (mass units) counted as a block removal.
    pub weight_threshold: f64,
    /// Minimum positive delta (mass units) counted as a collapse.
    pub collapse_threshold: f64,
    /// Fixed loop cadence in milliseconds (~30 Hz).
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_duration_secs: DEFAULT_GAME_DURATION_SECS,
            blocks_to_win: DEFAULT_BLOCKS_TO_WIN,
            weight_threshold: DEFAULT_WEIGHT_THRESHOLD,
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl GameConfig {
    pub fn game_duration(&self) -> Duration {
        Duration::from_secs_f64(self.game_duration_secs)
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "atlas-jenga", about = "Load-cell driven Jenga exhibit game")]
pub struct Cli {
    /// Serial port of the load-cell controller (e.g. /dev/ttyUSB0).
    /// If omitted or unavailable, the game runs without sensor events.
    #[arg(long)]
    pub port: Option<String>,

    /// Serial baud rate.
    #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,

    /// Path to the leaderboard database.
    #[arg(long, default_value = "leaderboard.db")]
    pub db: String,

    /// Round length in seconds.
    #[arg(long, default_value_t = DEFAULT_GAME_DURATION_SECS)]
    pub game_duration: f64,

    /// Blocks required to win.
    #[arg(long, default_value_t = DEFAULT_BLOCKS_TO_WIN)]
    pub blocks_to_win: u32,

    /// Block-removal weight threshold (mass units).
    #[arg(long, default_value_t = DEFAULT_WEIGHT_THRESHOLD)]
    pub weight_threshold: f64,

    /// Tower-collapse weight threshold (mass units).
    #[arg(long, default_value_t = DEFAULT_COLLAPSE_THRESHOLD)]
    pub collapse_threshold: f64,

    /// Loop cadence in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            game_duration_secs: self.game_duration,
            blocks_to_win: self.blocks_to_win,
            weight_threshold: self.weight_threshold,
            collapse_threshold: self.collapse_threshold,
            tick_ms: self.tick_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_exhibit_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.game_duration_secs, 120.0);
        assert_eq!(cfg.blocks_to_win, 10);
        assert_eq!(cfg.weight_threshold, 5.0);
        assert_eq!(cfg.collapse_threshold, 30.0);
        assert_eq!(cfg.tick_duration(), Duration::from_millis(33));
    }

    #[test]
    fn cli_overrides_flow_into_game_config() {
        let cli = Cli::parse_from([
            "atlas-jenga",
            "--game-duration",
            "60",
            "--blocks-to-win",
            "5",
            "--weight-threshold",
            "2.5",
            "--collapse-threshold",
            "12",
        ]);
        let cfg = cli.game_config();
        assert_eq!(cfg.game_duration_secs, 60.0);
        assert_eq!(cfg.blocks_to_win, 5);
        assert_eq!(cfg.weight_threshold, 2.5);
        assert_eq!(cfg.collapse_threshold, 12.0);
    }
}
