use banqi_core::{GameConfig, TurnOrder};
use crate::session::{Command, CommandError, Session};
use crate::settings::{EngineKind, Mode, Settings};

fn settings(mode: Mode, turn_order: TurnOrder) -> Settings {
    Settings {
        mode,
        turn_order,
        ai_delay_ms: 0,
        engine: EngineKind::Greedy,
        game: GameConfig::seeded(3),
    }
}

fn play(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn parses_commands() {
    assert_eq!("flip 1 2".parse::<Command>(), Ok(Command::Flip(1, 2)));
    assert_eq!("M 0 0 0 1".parse::<Command>(), Ok(Command::Move(0, 0, 0, 1)));
    assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
    assert_eq!(
        "flip 1".parse::<Command>(),
        Err(CommandError::Arity { cmd: "flip", expected: 2 })
    );
    assert_eq!(
        "move 0 0 x 1".parse::<Command>(),
        Err(CommandError::BadNumber("x".into()))
    );
    assert_eq!(
        "castle".parse::<Command>(),
        Err(CommandError::Unknown("castle".into()))
    );
}

#[test]
fn pvp_reports_bad_input_and_keeps_going() {
    let mut session = Session::new(settings(Mode::Pvp, TurnOrder::HumanFirst));

    let out = play(&mut session, "flip 0 0\nflip 0 0\nmove 9 9 0 0\ndance\nquit\n");

    assert!(session.game().first_move_done());
    assert!(out.contains("Invalid move: illegal action: the piece at (0, 0) is already face up"));
    assert!(out.contains("Invalid move: (9, 9) is off the 4x8 board"));
    assert!(out.contains("unknown command \"dance\""));
    assert!(!out.contains("AI:"));
}

#[test]
fn ai_replies_after_human_flip() {
    let mut session = Session::new(settings(Mode::Pva, TurnOrder::HumanFirst));

    let out = play(&mut session, "flip 2 5\n");

    assert!(out.contains("AI: "));
    let game = session.game();
    assert_eq!(game.current_player(), game.human_color());
}

#[test]
fn ai_can_open() {
    let mut session = Session::new(settings(Mode::Pva, TurnOrder::AiFirst));

    let out = play(&mut session, "quit\n");

    assert!(out.contains("AI opens by flipping"));
    let game = session.game();
    assert!(game.first_move_done());
    assert_eq!(game.current_player(), game.human_color());
}

#[test]
fn new_game_redeals() {
    let mut session = Session::new(settings(Mode::Pvp, TurnOrder::HumanFirst));

    play(&mut session, "flip 0 0\nnew\n");

    assert!(!session.game().first_move_done());
}

#[test]
fn human_is_told_when_opening() {
    let mut session = Session::new(settings(Mode::Pva, TurnOrder::HumanFirst));

    let out = play(&mut session, "quit\n");

    assert!(out.contains("You go first!"));
    assert!(!out.contains("AI opens"));
}

#[test]
fn coin_toss_outcome_is_announced() {
    for seed in 0..8 {
        let mut s = settings(Mode::Pva, TurnOrder::Random);
        s.game.seed = Some(seed);
        let mut session = Session::new(s);

        let out = play(&mut session, "quit\n");

        let ai_opened = session.game().first_move_done();
        assert_eq!(out.contains("AI opens by flipping"), ai_opened);
        assert_eq!(out.contains("You go first!"), !ai_opened);
    }
}
