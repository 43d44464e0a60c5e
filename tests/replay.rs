//! Replaying recorded games through the public API.

use halfboard_chess::board::{Color, Game, MoveOutcome, MoveRequest, Replay, ReplayError, Square};

/// Parse "a2-a4 d7-d5 ..." into requests.
fn requests(line: &str) -> Vec<MoveRequest> {
    line.split_whitespace()
        .map(|mv| {
            let (from, to) = mv.split_once('-').expect("from-to pair");
            MoveRequest::new(from.parse().unwrap(), to.parse().unwrap())
        })
        .collect()
}

#[test]
fn replay_reaches_expected_position() {
    let moves = requests("a2-a4 d7-d5 b1-c3 d5-d4 c3-b5");
    let game = Replay::new(Color::White, moves).run().unwrap();
    assert_eq!(game.to_fen(), "rnbk/ppp1/4/1N2/P2p/4/1PPP/R1BK b w");
    assert_eq!(game.ply(), 5);
}

#[test]
fn replay_steps_report_special_moves() {
    let mut replay = Replay::new(Color::White, requests("a2-a4 d7-d6 a4-a5 b7-b5 a5-b6"));
    let mut outcomes = Vec::new();
    while let Some(step) = replay.step() {
        outcomes.push(step.unwrap());
    }
    assert_eq!(outcomes.len(), 5);
    assert!(matches!(
        outcomes[4],
        MoveOutcome::AppliedEnPassant {
            captured_pawn_position: Square(3, 1),
            ..
        }
    ));
}

#[test]
fn replay_stops_on_illegal_record() {
    let err = Replay::new(Color::White, requests("a2-a4 a4-a5"))
        .run()
        .unwrap_err();
    match err {
        ReplayError::Rejected { index, ref reason } => {
            assert_eq!(index, 1);
            assert_eq!(reason, "Illegal move");
        }
        ref other => panic!("unexpected error {other}"),
    }
    assert!(err.to_string().contains("Recorded move 1"));
}

#[test]
fn recorded_history_replays_identically() {
    let mut game = Game::new(Color::Black);
    let mut records = Vec::new();
    for (from, to) in [
        (Square(1, 0), Square(3, 0)),
        (Square(6, 1), Square(4, 1)),
        (Square(3, 0), Square(4, 1)),
        (Square(7, 1), Square(5, 0)),
    ] {
        let outcome = game.apply_move(from, to);
        assert!(!outcome.is_rejected(), "{outcome}");
        records.push(*outcome.record().unwrap());
    }

    let replayed = Replay::from_records(Color::Black, &records).run().unwrap();
    assert_eq!(replayed, game);
}
