use broadside::{
    parse_placement, render_board, Board, Console, Coordinate, Orientation, ParseError, Placement,
    PlacementInput, RenderOptions, ShipKind, Structure,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const FLEET_LINES: [&str; 5] = ["A1 E", "C1 E", "E1 E", "G1 E", "I1 E"];

fn ship_cells() -> Vec<String> {
    let mut cells = Vec::new();
    for (row, len) in [('A', 5), ('C', 4), ('E', 3), ('G', 3), ('I', 2)] {
        for col in 1..=len {
            cells.push(format!("{}{}", row, col));
        }
    }
    cells
}

fn open_water() -> Vec<String> {
    let tenth = "ABCDEFGHIJ".chars().map(|r| format!("{}10", r));
    let ninth = "ABCDEF".chars().map(|r| format!("{}9", r));
    tenth.chain(ninth).collect()
}

#[test]
fn test_parse_placement() {
    assert_eq!(
        parse_placement("b3 s"),
        Ok(PlacementInput::Manual(Placement::new(
            Coordinate::new(1, 2),
            Orientation::South
        )))
    );
    assert_eq!(parse_placement("AUTO"), Ok(PlacementInput::Auto));
    assert_eq!(parse_placement("A1"), Err(ParseError::InvalidCoordinate));
    assert_eq!(parse_placement("A1 E extra"), Err(ParseError::InvalidCoordinate));
    assert_eq!(parse_placement("A1 X"), Err(ParseError::InvalidOrientation));
    assert_eq!(parse_placement("K1 E"), Err(ParseError::InvalidRow));
}

#[test]
fn test_hot_seat_game() {
    let mut lines = vec!["Z1 E".to_owned(), FLEET_LINES[0].to_owned(), "B1 E".to_owned()];
    lines.extend(FLEET_LINES[1..].iter().map(|s| s.to_string()));
    lines.extend(FLEET_LINES.iter().map(|s| s.to_string()));

    lines.push("K1".to_owned());
    let mut water = open_water().into_iter();
    for hit in ship_cells() {
        lines.push(hit);
        lines.extend(water.next());
    }
    let input = lines.join("\n") + "\n";

    let mut output = Vec::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut console = Console::new(input.as_bytes(), &mut output);
    let winner = console.run(&mut rng).unwrap();
    assert_eq!(winner, 1);
    assert_eq!(console.game().winner(), Some(1));
    drop(console);

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Placement failed: Invalid row character"));
    assert!(text.contains("Placement failed: structure placement collides"));
    assert!(text.contains("Shot failed: Invalid row character"));
    assert!(text.contains("Hit!"));
    assert!(text.contains("Miss."));
    assert!(text.contains("You sank the Carrier."));
    assert!(text.contains("You sank the Destroyer."));
    assert!(text.contains("Player 1 wins!"));
    assert!(!text.contains("Player 2 wins!"));
}

#[test]
fn test_auto_placement_then_closed_input() {
    // extra lines are read as unparsable shots
    let input = "auto\n".repeat(20);
    let mut output = Vec::new();
    let mut rng = SmallRng::seed_from_u64(99);
    let mut console = Console::new(input.as_bytes(), &mut output);

    assert!(console.run(&mut rng).is_err());
    for player in console.game().players() {
        assert_eq!(player.board().structures().len(), 5);
    }
    assert!(!console.game().is_over());
}

#[test]
fn test_render_board() {
    let mut board = Board::new();
    board
        .place_structure(
            &Structure::new(ShipKind::Destroyer),
            Placement::new(Coordinate::new(0, 0), Orientation::East),
        )
        .unwrap();
    board.handle_shot(Coordinate::new(0, 0)).unwrap();
    board.handle_shot(Coordinate::new(9, 9)).unwrap();

    let shown = render_board(board.cells(), RenderOptions::default());
    let lines: Vec<&str> = shown.lines().collect();
    assert!(lines[0].trim_start().starts_with("1  2  3"));
    assert!(lines[0].trim_end().ends_with("10"));
    assert_eq!(lines[2], " A | X  O  .  .  .  .  .  .  .  . |");
    assert_eq!(lines[11], " J | .  .  .  .  .  .  .  .  .  * |");
    assert!(shown.contains("Legend"));
    assert!(!shown.contains("(Ships hidden)"));

    let hidden = render_board(
        board.cells(),
        RenderOptions {
            reveal_ships: false,
            show_legend: true,
        },
    );
    assert!(hidden.contains(" A | X  .  ."));
    assert!(hidden.contains("(Ships hidden)"));
}
