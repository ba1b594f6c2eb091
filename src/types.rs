//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Game timing defaults
pub const DEFAULT_GAME_DURATION_SECS: f64 = 120.0;
pub const DEFAULT_TICK_MS: u64 = 33;

/// Gameplay defaults
pub const DEFAULT_BLOCKS_TO_WIN: u32 = 10;

/// Sensor classification defaults (mass units as reported by the load cell)
pub const DEFAULT_WEIGHT_THRESHOLD: f64 = 5.0;
pub const DEFAULT_COLLAPSE_THRESHOLD: f64 = 30.0;

/// Serial defaults
pub const DEFAULT_BAUD_RATE: u32 = 57_600;

/// Leaderboard rows shown on the pre/post-game screens
pub const LEADERBOARD_DISPLAY_LIMIT: usize = 5;

/// Line label emitted by the load-cell controller firmware
pub const LOAD_CELL_LABEL: &str = "Load_cell output val:";

/// Coarse game phase. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    PreGame,
    Playing,
    PostGame,
}

/// Discrete event classified from the weight stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEvent {
    BlockRemoved,
    TowerCollapsed,
}

/// One weight reading per poll. `fresh` is false for carried-forward samples
/// (no data pending, or the line failed to parse).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSample {
    pub weight: f64,
    pub fresh: bool,
}

/// Sound cues fired on game transitions. Closed set, keys match the
/// exhibit's sample files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    BlockRemoved,
    Success,
    Failure,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::BlockRemoved => "block_removed",
            SoundCue::Success => "success",
            SoundCue::Failure => "failure",
        }
    }
}

/// Player inputs consumed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Begin a round (PreGame only).
    Start,
    /// Append a character to the team name (PostGame only).
    Char(char),
    /// Remove the last character of the team name (PostGame only).
    Backspace,
    /// Submit the score and return to PreGame (PostGame only).
    Submit,
    /// Shut the game down.
    Quit,
}
