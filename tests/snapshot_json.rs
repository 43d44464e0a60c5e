//! Serde round-trips for the transport-neutral types.

use serde::Deserialize;

use halfboard_chess::board::{
    BoardSnapshot, Color, Game, MoveOutcome, MoveRecord, MoveRequest, PieceKind, Replay, Square,
};

#[derive(Deserialize)]
struct GameSet {
    games: Vec<RecordedGame>,
}

#[derive(Deserialize)]
struct RecordedGame {
    name: String,
    bottom: Color,
    moves: Vec<MoveRequest>,
    fen: String,
}

#[test]
fn recorded_games_replay() {
    let data = include_str!("data/games.json");
    let set: GameSet = serde_json::from_str(data).expect("valid games.json");
    assert!(!set.games.is_empty());

    for recorded in set.games {
        let game = Replay::new(recorded.bottom, recorded.moves)
            .run()
            .unwrap_or_else(|err| panic!("{}: {}", recorded.name, err));
        assert_eq!(game.to_fen(), recorded.fen, "{}", recorded.name);
    }
}

#[test]
fn snapshot_json_roundtrip() {
    let mut game = Game::new(Color::White);
    game.apply_move(Square(6, 1), Square(4, 1));

    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let snapshot: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, game.snapshot());

    let restored = Game::from_snapshot(&snapshot).unwrap();
    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.current_turn(), Color::Black);
}

#[test]
fn snapshot_json_shape() {
    let game = Game::new(Color::White);
    let value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(value["current_turn"], "White");
    assert_eq!(value["cells"][7][3]["kind"], "King");
    assert_eq!(value["cells"][7][3]["color"], "White");
    assert!(value["cells"][4][0].is_null());
}

#[test]
fn suggested_move_is_applied() {
    // A remote suggestion carries the same shape as a local request.
    let request: MoveRequest = serde_json::from_str(r#"{"from":[6,2],"to":[4,2]}"#).unwrap();
    assert_eq!(request.promotion, None);

    let mut game = Game::new(Color::White);
    let outcome = game.apply_request(&request);
    assert!(matches!(outcome, MoveOutcome::Applied { .. }));
}

#[test]
fn move_record_json_roundtrip() {
    let mut game = Game::new(Color::White);
    let outcome = game.apply_move(Square(7, 1), Square(5, 2));
    let record = *outcome.record().unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: MoveRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.piece, PieceKind::Knight);
}
