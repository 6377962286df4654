use super::*;
use banqi_core::{GreedyEngine, StalemateRule};
use random_engine::RandomEngine;

fn config(num_games: u32, seed: u64) -> MatchConfig {
    MatchConfig {
        num_games,
        max_plies: 300,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_self_play() {
    let mut engine1 = GreedyEngine::new();
    let mut engine2 = GreedyEngine::new();

    let runner = MatchRunner::new(config(4, 1));
    let report = runner.run_match(&mut engine1, &mut engine2).unwrap();

    // Self-play should complete without panic
    assert_eq!(report.result.total_games(), 4);
    assert_eq!(report.games.len(), 4);
    assert!(report.games.iter().all(|g| g.plies <= 300));
}

#[test]
fn test_winner_matches_tally() {
    let mut greedy = GreedyEngine::new();
    let mut random = RandomEngine::new();

    let report = MatchRunner::new(config(6, 3))
        .run_match(&mut greedy, &mut random)
        .unwrap();

    let wins = report
        .games
        .iter()
        .filter(|g| g.winner == Some(g.engine1_color))
        .count() as u32;
    let draws = report.games.iter().filter(|g| g.winner.is_none()).count() as u32;
    assert_eq!(report.result.wins, wins);
    assert_eq!(report.result.draws, draws);
    assert_eq!(report.result.losses, 6 - wins - draws);
}

#[test]
fn test_seeded_matches_repeat() {
    let run = || {
        let mut greedy = GreedyEngine::new();
        let mut random = RandomEngine::new();
        MatchRunner::new(MatchConfig {
            stalemate_rule: StalemateRule::OwnFaceDown,
            ..config(3, 42)
        })
        .run_match(&mut greedy, &mut random)
        .unwrap()
    };
    assert_eq!(run().games, run().games);
}

#[test]
fn test_ply_cap_is_a_draw() {
    let mut engine1 = RandomEngine::new();
    let mut engine2 = RandomEngine::new();

    let report = MatchRunner::new(MatchConfig {
        max_plies: 2,
        ..config(2, 5)
    })
    .run_match(&mut engine1, &mut engine2)
    .unwrap();

    assert_eq!(report.result.draws, 2);
    assert!(report.games.iter().all(|g| g.plies == 2 && g.winner.is_none()));
}

#[test]
fn test_report_roundtrip_and_score() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    assert!((result.score() - 0.75).abs() < 1e-9);
    assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);

    let mut report = MatchReport::new("Greedy v1.0", "Random v1.0", MatchConfig::default());
    report.result = result;
    let path = std::env::temp_dir().join(format!("banqi_report_{}.json", std::process::id()));
    report.save(&path).unwrap();
    let loaded = MatchReport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.engine1, "Greedy v1.0");
    assert_eq!(loaded.result, result);
    assert!(report.generate_report().contains("Greedy v1.0 vs Random v1.0"));
}
