//! GameView: maps session state into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::session::{GameSession, Score};
use crate::types::GamePhase;

/// How a line should be painted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Title,
    /// Urgent or bad news (low time, collapse, loss, save failure).
    Alert,
    /// Good news (victory).
    Good,
    /// Secondary text (hints, leaderboard rows).
    Dim,
}

/// One centered line of screen text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Normal)
    }
}

/// Everything the view needs for one frame.
pub struct ViewState<'a> {
    pub session: &'a GameSession,
    /// Top leaderboard rows, refreshed by the loop on phase changes.
    pub leaderboard: &'a [Score],
    /// Transient status message (e.g. a failed score save).
    pub status: Option<&'a str>,
}

/// Seconds left at which the countdown turns urgent.
const HURRY_SECS: f64 = 10.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    /// Render one frame of text lines.
    pub fn render(&self, state: &ViewState) -> Vec<Line> {
        let mut lines = match state.session.phase() {
            GamePhase::PreGame => self.render_pregame(state),
            GamePhase::Playing => self.render_playing(state),
            GamePhase::PostGame => self.render_postgame(state),
        };
        if let Some(status) = state.status {
            lines.push(Line::blank());
            lines.push(Line::new(status, LineStyle::Alert));
        }
        lines
    }

    fn render_pregame(&self, state: &ViewState) -> Vec<Line> {
        let mut lines = vec![
            Line::new("Atlas Jenga", LineStyle::Title),
            Line::blank(),
            Line::new("Press ENTER to start", LineStyle::Normal),
            Line::blank(),
        ];
        self.push_leaderboard(&mut lines, state.leaderboard);
        lines
    }

    fn render_playing(&self, state: &ViewState) -> Vec<Line> {
        let session = state.session;
        let Some(run) = session.run() else {
            return vec![Line::new("Starting...", LineStyle::Normal)];
        };

        let secs_left = run.time_remaining.max(0.0) as i64;
        let time_style = if run.time_remaining <= HURRY_SECS {
            LineStyle::Alert
        } else {
            LineStyle::Normal
        };

        vec![
            Line::new(format!("Time: {secs_left}s"), time_style),
            Line::new(
                format!(
                    "Blocks: {}/{}",
                    run.blocks_removed,
                    session.config().blocks_to_win
                ),
                LineStyle::Normal,
            ),
            Line::new(format!("Score: {}", session.live_score()), LineStyle::Normal),
        ]
    }

    fn render_postgame(&self, state: &ViewState) -> Vec<Line> {
        let session = state.session;
        let Some(run) = session.run() else {
            return vec![Line::new("...", LineStyle::Normal)];
        };

        let won = run.blocks_removed >= session.config().blocks_to_win;
        let banner = if run.collapsed {
            Line::new("Tower Collapsed!", LineStyle::Alert)
        } else if won {
            Line::new("Victory!", LineStyle::Good)
        } else {
            Line::new("Game Over", LineStyle::Alert)
        };

        let mut lines = vec![
            banner,
            Line::new(format!("Final Score: {}", session.live_score()), LineStyle::Normal),
            Line::blank(),
            Line::new(
                format!("Enter team name: {}_", run.team_name),
                LineStyle::Normal,
            ),
            Line::new("Press ENTER to submit score", LineStyle::Dim),
            Line::blank(),
        ];
        self.push_leaderboard(&mut lines, state.leaderboard);
        lines
    }

    fn push_leaderboard(&self, lines: &mut Vec<Line>, scores: &[Score]) {
        lines.push(Line::new("Leaderboard", LineStyle::Title));
        if scores.is_empty() {
            lines.push(Line::new("(no scores yet)", LineStyle::Dim));
            return;
        }
        for (i, score) in scores.iter().enumerate() {
            lines.push(Line::new(
                format!(
                    "{}. {}: {} pts ({} blocks, {}s left)",
                    i + 1,
                    score.team_name,
                    score.total_score,
                    score.blocks_removed,
                    score.time_remaining as i64,
                ),
                LineStyle::Dim,
            ));
        }
    }
}
