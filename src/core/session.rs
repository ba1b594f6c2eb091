//! GameSession: the authoritative phase machine for one exhibit station.
//!
//! Phases run PreGame -> Playing -> PostGame -> PreGame. A run's mutable
//! state exists only while a round is in flight (Playing/PostGame) and is
//! rebuilt from scratch at every start, so nothing leaks between rounds.

use std::time::Instant;

use crate::config::GameConfig;
use crate::core::scoring::total_score;
use crate::types::{GameInput, GamePhase, SensorEvent};

/// Mutable aggregate for the round in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRunState {
    pub blocks_removed: u32,
    pub started_at: Instant,
    /// Seconds left. May dip below zero for a fraction of a tick before the
    /// timeout transition fires; clamped wherever it feeds scoring.
    pub time_remaining: f64,
    pub collapsed: bool,
    pub team_name: String,
}

impl GameRunState {
    fn new(now: Instant, duration_secs: f64) -> Self {
        Self {
            blocks_removed: 0,
            started_at: now,
            time_remaining: duration_secs,
            collapsed: false,
            team_name: String::new(),
        }
    }
}

/// Immutable result record, created once at submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub team_name: String,
    pub blocks_removed: u32,
    pub time_remaining: f64,
    pub total_score: i64,
    /// Unix timestamp in seconds.
    pub timestamp: f64,
}

/// Notable outcome of feeding one input, event, or tick into the session.
/// The loop maps these onto sound cues and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    BlockRemoved,
    /// Win: the removal that reached the target block count.
    Won,
    Collapsed,
    TimedOut,
}

/// Phase machine plus the run state it owns.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    run: Option<GameRunState>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: GamePhase::PreGame,
            run: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The round in flight. `None` in PreGame.
    pub fn run(&self) -> Option<&GameRunState> {
        self.run.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Score as it stands right now, for live display. Zero in PreGame.
    pub fn live_score(&self) -> i64 {
        self.run.as_ref().map_or(0, |run| {
            total_score(run.blocks_removed, run.time_remaining, self.config.blocks_to_win)
        })
    }

    /// Feed one player input.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Option<SessionEvent> {
        match (self.phase, input) {
            (GamePhase::PreGame, GameInput::Start) => {
                self.run = Some(GameRunState::new(now, self.config.game_duration_secs));
                self.phase = GamePhase::Playing;
                Some(SessionEvent::Started)
            }
            (GamePhase::PostGame, GameInput::Char(c)) => {
                if let Some(run) = self.run.as_mut() {
                    run.team_name.push(c);
                }
                None
            }
            (GamePhase::PostGame, GameInput::Backspace) => {
                if let Some(run) = self.run.as_mut() {
                    run.team_name.pop();
                }
                None
            }
            // Submit is two-step (build_score / complete_submission) so a
            // failed leaderboard write can be retried; see the loop.
            _ => None,
        }
    }

    /// Feed one classified sensor event. Ignored outside Playing.
    pub fn apply_event(&mut self, event: SensorEvent) -> Option<SessionEvent> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let run = self.run.as_mut()?;

        match event {
            SensorEvent::TowerCollapsed => {
                run.collapsed = true;
                self.phase = GamePhase::PostGame;
                Some(SessionEvent::Collapsed)
            }
            SensorEvent::BlockRemoved => {
                run.blocks_removed += 1;
                if run.blocks_removed >= self.config.blocks_to_win {
                    run.collapsed = false;
                    self.phase = GamePhase::PostGame;
                    Some(SessionEvent::Won)
                } else {
                    Some(SessionEvent::BlockRemoved)
                }
            }
        }
    }

    /// Advance the clock. Fires the timeout transition when the round runs
    /// out; lowest priority, so it runs after sensor events each tick.
    pub fn tick(&mut self, now: Instant) -> Option<SessionEvent> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let run = self.run.as_mut()?;

        let elapsed = now.duration_since(run.started_at).as_secs_f64();
        run.time_remaining = self.config.game_duration_secs - elapsed;

        if run.time_remaining <= 0.0 {
            run.collapsed = false;
            self.phase = GamePhase::PostGame;
            return Some(SessionEvent::TimedOut);
        }
        None
    }

    /// Build the immutable score record for the finished round. Phase and
    /// run state are untouched so the caller can retry a failed write.
    pub fn build_score(&self, timestamp: f64) -> Option<Score> {
        if self.phase != GamePhase::PostGame {
            return None;
        }
        let run = self.run.as_ref()?;
        let time_remaining = run.time_remaining.max(0.0);
        Some(Score {
            team_name: run.team_name.clone(),
            blocks_removed: run.blocks_removed,
            time_remaining,
            total_score: total_score(run.blocks_removed, time_remaining, self.config.blocks_to_win),
            timestamp,
        })
    }

    /// Discard the run and return to PreGame after a successful submission.
    pub fn complete_submission(&mut self) {
        if self.phase == GamePhase::PostGame {
            self.run = None;
            self.phase = GamePhase::PreGame;
        }
    }

    /// Move the round's start into the past, for deadline tests.
    #[cfg(test)]
    pub fn backdate_start(&mut self, by: std::time::Duration) {
        if let Some(run) = self.run.as_mut() {
            run.started_at -= by;
        }
    }
}
