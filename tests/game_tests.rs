use broadside::{
    BoardError, CellState, Coordinate, ErrorKind, GameError, Match, Orientation, Placement,
    Player, ShipKind, ShotResult,
};

fn at(label: &str) -> Coordinate {
    label.parse().unwrap()
}

fn destroyer_at(label: &str) -> Placement {
    Placement::new(at(label), Orientation::East)
}

/// Each player gets a single destroyer on A1-A2.
fn small_match() -> Match {
    let mut game = Match::new();
    game.place_ship(1, ShipKind::Destroyer, destroyer_at("A1"))
        .unwrap();
    game.place_ship(2, ShipKind::Destroyer, destroyer_at("A1"))
        .unwrap();
    game
}

#[test]
fn test_new_match() {
    let game = Match::new();
    assert_eq!(game.current_player_id(), 1);
    assert_eq!(game.opponent_player_id(), 2);
    assert!(game.is_player_turn(1));
    assert!(!game.is_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_turns_alternate() {
    let mut game = small_match();
    assert_eq!(game.shoot(1, at("J10")), Ok(CellState::Miss));
    assert_eq!(game.current_player_id(), 2);
    assert_eq!(game.shoot(2, at("A1")), Ok(CellState::Hit));
    assert_eq!(game.current_player_id(), 1);
}

#[test]
fn test_out_of_turn_shot() {
    let mut game = small_match();
    let err = game.shoot(2, at("A1")).unwrap_err();
    assert_eq!(err, GameError::IllegalState("Not this player's turn."));
    assert_eq!(err.kind(), ErrorKind::IllegalStateTransition);
    assert_eq!(game.current_player_id(), 1);
}

#[test]
fn test_unknown_player() {
    let mut game = small_match();
    assert_eq!(
        game.shoot(7, at("A1")),
        Err(GameError::InvalidIdentifier(7))
    );
    assert_eq!(
        game.place_ship(0, ShipKind::Cruiser, destroyer_at("E5")),
        Err(GameError::InvalidIdentifier(0))
    );
    assert!(game.player_by_id(3).is_err());
}

#[test]
fn test_failed_shot_keeps_turn() {
    let mut game = small_match();
    game.shoot(1, at("C3")).unwrap();
    game.shoot(2, at("C3")).unwrap();

    let err = game.shoot(1, at("C3")).unwrap_err();
    assert_eq!(err, GameError::Board(BoardError::AlreadyShot(at("C3"))));
    assert_eq!(game.current_player_id(), 1);
}

#[test]
fn test_winner_freezes_match() {
    let mut game = small_match();
    assert_eq!(game.fire(1, at("A1")), Ok(ShotResult::Hit(ShipKind::Destroyer)));
    game.fire(2, at("J10")).unwrap();
    assert_eq!(
        game.fire(1, at("A2")),
        Ok(ShotResult::Sunk(ShipKind::Destroyer))
    );

    assert!(game.is_over());
    assert_eq!(game.winner(), Some(1));
    assert_eq!(game.current_player_id(), 1);
    assert_eq!(
        game.shoot(2, at("A1")),
        Err(GameError::IllegalState("Game is over."))
    );
    assert_eq!(
        game.place_ship(2, ShipKind::Cruiser, destroyer_at("E5")),
        Err(GameError::IllegalState("Game is over."))
    );
}

#[test]
fn test_zero_ship_shot_does_not_win() {
    let mut game = Match::new();
    assert_eq!(game.shoot(1, at("A1")), Ok(CellState::Miss));
    assert!(!game.is_over());
    assert_eq!(game.current_player_id(), 2);
}

#[test]
fn test_reset() {
    let mut game = small_match();
    game.shoot(1, at("A1")).unwrap();
    game.shoot(2, at("B1")).unwrap();
    game.shoot(1, at("A2")).unwrap();
    assert!(game.is_over());

    game.reset();
    assert!(!game.is_over());
    assert_eq!(game.current_player_id(), 1);
    let board = game.player_by_id(2).unwrap().board();
    assert_eq!(board.get_cell(at("A1")).unwrap(), CellState::Occupied);
    assert_eq!(board.structures().len(), 1);
}

#[test]
fn test_custom_ids() {
    let mut game = Match::with_ids(10, 20).unwrap();
    assert_eq!(game.current_player_id(), 10);
    game.shoot(10, at("A1")).unwrap();
    assert!(game.is_player_turn(20));
}

#[test]
fn test_repeated_id_is_rejected() {
    let err = Match::with_ids(4, 4).unwrap_err();
    assert_eq!(err, GameError::InvalidIdentifier(4));
    assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
}

#[test]
fn test_current_player_helpers() {
    let mut game = Match::new();
    game.place_ship_for_current_player(ShipKind::Destroyer, destroyer_at("A1"))
        .unwrap();
    assert_eq!(game.player_by_id(1).unwrap().board().structures().len(), 1);
    assert!(game.player_by_id(2).unwrap().board().structures().is_empty());

    // player 2 has no ships yet, so this does not end the match
    assert_eq!(game.shoot_current(at("J10")), Ok(CellState::Miss));
    assert_eq!(game.current_player_id(), 2);
    game.place_ship_for_current_player(ShipKind::Destroyer, destroyer_at("A1"))
        .unwrap();
    assert_eq!(game.player_by_id(2).unwrap().board().structures().len(), 1);

    assert_eq!(game.fire_current(at("A1")), Ok(ShotResult::Hit(ShipKind::Destroyer)));
    assert_eq!(game.current_player_id(), 1);
    assert_eq!(
        game.shoot_current(at("J10")),
        Err(GameError::Board(BoardError::AlreadyShot(at("J10"))))
    );
    assert_eq!(game.current_player_id(), 1);
}

#[test]
fn test_player_loses_when_fleet_is_gone() {
    let mut player = Player::new(5);
    assert!(!player.has_lost());
    player
        .place_ship(ShipKind::Destroyer, destroyer_at("D4"))
        .unwrap();
    assert_eq!(
        player.place_ship(ShipKind::Destroyer, destroyer_at("E5")),
        Err(BoardError::Collision)
    );

    player.receive_shot(at("D4")).unwrap();
    assert!(!player.has_lost());
    player.receive_shot(at("D5")).unwrap();
    assert!(player.has_lost());

    player.reset();
    assert!(!player.has_lost());
    assert_eq!(player.id(), 5);
}
