use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cell(row: i32, col: i32) -> Cell {
    Cell::new(row, col).unwrap()
}

fn board(layout: &str) -> Board {
    Board::from_layout(layout).unwrap()
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(Rank::General), 6);
    assert_eq!(piece_value(Rank::Soldier), 1);
    assert_eq!(piece_value(Rank::Cannon), 0);
    assert_eq!(capture_score(Rank::Soldier, Rank::General), 100);
    assert_eq!(capture_score(Rank::Cannon, Rank::Advisor), 5);
    assert_eq!(capture_score(Rank::Chariot, Rank::Horse), -1);
}

#[test]
fn greedy_prefers_soldier_taking_general() {
    // Cannon-takes-advisor (score 5) is found first, soldier-takes-general
    // (score 100) later in row-major order.
    let b = board("C~sa5/8/Sg6/3Rh3");
    let mut rng = StdRng::seed_from_u64(1);

    let action = GreedyEngine::new().select_action(&b, Color::Red, &mut rng);

    assert_eq!(action, Action::Move(Move::new(cell(2, 0), cell(2, 1))));
}

#[test]
fn greedy_breaks_ties_by_first_found() {
    let b = board("Rh6/Rh6/8/8");
    let mut rng = StdRng::seed_from_u64(1);

    let action = GreedyEngine::new().select_action(&b, Color::Red, &mut rng);

    assert_eq!(action, Action::Move(Move::new(cell(0, 0), cell(0, 1))));
}

#[test]
fn greedy_flips_when_nothing_to_capture() {
    let b = board("R7/8/8/~s~g6");
    let face_down = [cell(3, 0), cell(3, 1)];

    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        match GreedyEngine::new().select_action(&b, Color::Red, &mut rng) {
            Action::Flip(c) => assert!(face_down.contains(&c)),
            other => panic!("expected a flip, got {other}"),
        }
    }
}

#[test]
fn greedy_moves_quietly_when_all_face_up() {
    let b = board("R7/8/8/7g");
    let mut rng = StdRng::seed_from_u64(3);

    match GreedyEngine::new().select_action(&b, Color::Red, &mut rng) {
        Action::Move(mv) => {
            assert_eq!(mv.from, cell(0, 0));
            assert!(b.is_empty(mv.to));
            assert!(is_legal(&b, Color::Red, mv.from, mv.to));
        }
        other => panic!("expected a move, got {other}"),
    }
}

#[test]
fn greedy_passes_when_stuck() {
    let b = board("Sa6/a7/8/8");
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        GreedyEngine::new().select_action(&b, Color::Red, &mut rng),
        Action::Pass
    );
}

#[test]
fn greedy_is_seed_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    let b = Board::shuffled(&mut rng);

    let pick = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        GreedyEngine::new().select_action(&b, Color::Black, &mut rng)
    };
    assert_eq!(pick(5), pick(5));
}
