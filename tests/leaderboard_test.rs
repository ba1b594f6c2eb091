//! Leaderboard persistence tests against real database files.

use atlas_jenga::core::session::Score;
use atlas_jenga::store::Leaderboard;

fn score(team: &str, blocks: u32, time_left: f64, total: i64) -> Score {
    Score {
        team_name: team.to_string(),
        blocks_removed: blocks,
        time_remaining: time_left,
        total_score: total,
        timestamp: 1_700_000_000.0,
    }
}

#[test]
fn scores_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.db");
    let path = path.to_str().unwrap();

    {
        let mut store = Leaderboard::open(path).unwrap();
        store.add(&score("night shift", 10, 61.2, 1712)).unwrap();
        store.add(&score("day shift", 4, 0.0, 400)).unwrap();
    }

    let store = Leaderboard::open(path).unwrap();
    let top = store.top_scores(5).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].team_name, "night shift");
    assert_eq!(top[0].total_score, 1712);
    assert_eq!(top[1].team_name, "day shift");
}

#[test]
fn ordering_and_limit_hold_as_the_table_grows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.db");
    let mut store = Leaderboard::open(path.to_str().unwrap()).unwrap();

    // 0 entries
    assert!(store.top_scores(5).unwrap().is_empty());

    // 1 entry
    store.add(&score("solo", 1, 10.0, 200)).unwrap();
    assert_eq!(store.top_scores(5).unwrap().len(), 1);

    // More entries than the limit, inserted out of order.
    for (i, total) in [500, 100, 900, 300, 700, 50, 1100].iter().enumerate() {
        store.add(&score(&format!("t{i}"), 2, 5.0, *total)).unwrap();
    }

    let top = store.top_scores(5).unwrap();
    assert_eq!(top.len(), 5);
    let totals: Vec<_> = top.iter().map(|s| s.total_score).collect();
    assert_eq!(totals, vec![1100, 900, 700, 500, 300]);
    assert!(totals.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn full_precision_round_trip() {
    let mut store = Leaderboard::in_memory().unwrap();
    let original = score("precise", 7, 33.375, 971);
    store.add(&original).unwrap();
    assert_eq!(store.top_scores(1).unwrap()[0], original);
}

#[test]
fn empty_team_name_is_allowed() {
    // Players can submit without typing a name; the row still lands.
    let mut store = Leaderboard::in_memory().unwrap();
    store.add(&score("", 2, 1.0, 210)).unwrap();
    assert_eq!(store.top_scores(1).unwrap()[0].team_name, "");
}
