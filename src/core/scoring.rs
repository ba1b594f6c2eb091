//! Scoring: pure function from run outcome to points.
//!
//! Three parts: a speed bonus for finishing with time on the clock, a flat
//! stability bonus for reaching the win condition, and per-block points.

/// Points per removed block.
pub const BLOCK_POINTS: i64 = 100;

/// Flat bonus for reaching the win condition.
pub const WIN_BONUS: i64 = 100;

/// Points per remaining second (applied before truncation).
pub const TIME_POINTS_PER_SEC: f64 = 10.0;

/// Compute the total score for a run.
///
/// `time_remaining` is clamped to zero first so a timeout that overshoots
/// the deadline by a fraction of a tick never subtracts points. Callable at
/// any time during Playing or PostGame for live display.
pub fn total_score(blocks_removed: u32, time_remaining: f64, blocks_to_win: u32) -> i64 {
    let time_remaining = time_remaining.max(0.0);
    let speed_bonus = (time_remaining * TIME_POINTS_PER_SEC).floor() as i64;
    let stability_bonus = if blocks_removed >= blocks_to_win {
        WIN_BONUS
    } else {
        0
    };
    speed_bonus + stability_bonus + i64::from(blocks_removed) * BLOCK_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCKS_TO_WIN: u32 = 10;

    #[test]
    fn untouched_tower_scores_time_only() {
        assert_eq!(total_score(0, 120.0, BLOCKS_TO_WIN), 1200);
    }

    #[test]
    fn winning_run_gets_stability_bonus() {
        assert_eq!(total_score(10, 60.0, BLOCKS_TO_WIN), 1700);
    }

    #[test]
    fn timeout_scores_blocks_only() {
        assert_eq!(total_score(5, 0.0, BLOCKS_TO_WIN), 500);
    }

    #[test]
    fn negative_time_is_clamped() {
        assert_eq!(total_score(5, -0.7, BLOCKS_TO_WIN), 500);
        assert_eq!(total_score(0, -100.0, BLOCKS_TO_WIN), 0);
    }

    #[test]
    fn fractional_seconds_floor() {
        // 3.99s -> 39 points, not 40
        assert_eq!(total_score(0, 3.99, BLOCKS_TO_WIN), 39);
    }

    #[test]
    fn win_bonus_respects_configured_threshold() {
        assert_eq!(total_score(5, 0.0, 5), 600);
        assert_eq!(total_score(4, 0.0, 5), 400);
    }
}
