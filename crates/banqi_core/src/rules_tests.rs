use super::*;

fn cell(row: i32, col: i32) -> Cell {
    Cell::new(row, col).unwrap()
}

fn board(layout: &str) -> Board {
    Board::from_layout(layout).unwrap()
}

#[test]
fn test_soldier_general_exception() {
    for rank in Rank::ALL {
        assert_eq!(can_capture(Rank::General, rank), rank != Rank::Soldier, "{rank:?}");
    }
    assert!(can_capture(Rank::Soldier, Rank::General));
    assert!(can_capture(Rank::Soldier, Rank::Soldier));
    assert!(!can_capture(Rank::Soldier, Rank::Horse));
    assert!(!can_capture(Rank::Soldier, Rank::Cannon));
}

#[test]
fn test_linear_rank_order() {
    let linear = [Rank::Advisor, Rank::Elephant, Rank::Chariot, Rank::Horse];
    for attacker in linear {
        for defender in Rank::ALL {
            assert_eq!(
                can_capture(attacker, defender),
                attacker.order() <= defender.order(),
                "{attacker:?} vs {defender:?}"
            );
        }
    }
    // Anything in the linear order may take a cannon adjacently.
    assert!(can_capture(Rank::Horse, Rank::Cannon));
    for defender in Rank::ALL {
        assert!(can_capture(Rank::Cannon, defender));
    }
}

#[test]
fn test_soldier_takes_adjacent_general() {
    let b = board("Sg6/8/8/8");
    assert!(is_legal(&b, Color::Red, cell(0, 0), cell(0, 1)));

    // General may not take the soldier back.
    assert!(!is_legal(&b, Color::Black, cell(0, 1), cell(0, 0)));
}

#[test]
fn test_non_cannon_steps_one_orthogonal() {
    let b = board("8/3H4/8/8");
    let from = cell(1, 3);
    for to in Cell::all() {
        assert_eq!(
            is_legal(&b, Color::Red, from, to),
            from.manhattan(to) == 1,
            "{from} -> {to}"
        );
    }
}

#[test]
fn test_mover_must_be_face_up_and_on_move() {
    let b = board("~S7/1s6/8/8");
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(0, 1)));

    let b = board("S7/8/8/8");
    assert!(!is_legal(&b, Color::Black, cell(0, 0), cell(0, 1)));
    assert!(!is_legal(&b, Color::Red, cell(0, 1), cell(0, 2)));
}

#[test]
fn test_capture_target_must_be_face_up_enemy() {
    let b = board("S~g6/8/8/8");
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(0, 1)));

    let b = board("SS6/8/8/8");
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(0, 1)));

    let b = board("Rh6/8/8/8");
    assert!(is_legal(&b, Color::Red, cell(0, 0), cell(0, 1)));

    let b = board("Hr6/8/8/8");
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(0, 1)));
}

#[test]
fn test_cannon_slides_over_clear_lines() {
    let b = board("C7/8/8/8");
    assert!(is_legal(&b, Color::Red, cell(0, 0), cell(0, 7)));
    assert!(is_legal(&b, Color::Red, cell(0, 0), cell(3, 0)));
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(1, 1)));
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(2, 5)));

    let b = board("C1S5/8/8/8");
    assert!(is_legal(&b, Color::Red, cell(0, 0), cell(0, 1)));
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(0, 3)));
}

#[test]
fn test_cannon_needs_exactly_one_screen() {
    // Face-down screen still counts.
    let b = board("C~sa5/8/8/8");
    assert!(is_legal(&b, Color::Red, cell(0, 0), cell(0, 2)));

    let b = board("CSSa4/8/8/8");
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(0, 3)));

    // No screen: not even an adjacent capture.
    let b = board("Ca6/8/8/8");
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(0, 1)));

    let b = board("C1a5/8/8/8");
    assert!(!is_legal(&b, Color::Red, cell(0, 0), cell(0, 2)));

    // Gaps around the screen do not matter.
    let b = board("C7/~s7/8/g7");
    assert!(is_legal(&b, Color::Red, cell(0, 0), cell(3, 0)));
}

#[test]
fn test_pieces_between() {
    let b = board("C~sS1a3/8/8/8");
    assert_eq!(pieces_between(&b, cell(0, 0), cell(0, 4)), Some(2));
    assert_eq!(pieces_between(&b, cell(0, 4), cell(0, 0)), Some(2));
    assert_eq!(pieces_between(&b, cell(0, 0), cell(0, 1)), Some(0));
    assert_eq!(pieces_between(&b, cell(0, 0), cell(1, 1)), None);
    assert_eq!(pieces_between(&b, cell(0, 0), cell(0, 0)), None);
}
