use broadside::{Coordinate, Orientation, ParseError, Placement};

#[test]
fn test_parse_labels() {
    assert_eq!("A1".parse(), Ok(Coordinate::new(0, 0)));
    assert_eq!("b7".parse(), Ok(Coordinate::new(1, 6)));
    assert_eq!("J10".parse(), Ok(Coordinate::new(9, 9)));
    assert_eq!(" c3 ".parse(), Ok(Coordinate::new(2, 2)));
}

#[test]
fn test_parse_rejects_bad_labels() {
    assert_eq!("A".parse::<Coordinate>(), Err(ParseError::InvalidCoordinate));
    assert_eq!("A100".parse::<Coordinate>(), Err(ParseError::InvalidCoordinate));
    assert_eq!("K1".parse::<Coordinate>(), Err(ParseError::InvalidRow));
    assert_eq!("11".parse::<Coordinate>(), Err(ParseError::InvalidRow));
    assert_eq!("A0".parse::<Coordinate>(), Err(ParseError::InvalidColumn));
    assert_eq!("A11".parse::<Coordinate>(), Err(ParseError::InvalidColumn));
    assert_eq!("AX".parse::<Coordinate>(), Err(ParseError::InvalidColumn));
}

#[test]
fn test_display_matches_parse() {
    for label in ["A1", "E5", "J10"] {
        let coord: Coordinate = label.parse().unwrap();
        assert_eq!(coord.to_string(), label);
    }
}

#[test]
fn test_orientations() {
    assert_eq!("n".parse(), Ok(Orientation::North));
    assert_eq!("S".parse(), Ok(Orientation::South));
    assert_eq!("e".parse(), Ok(Orientation::East));
    assert_eq!("W".parse(), Ok(Orientation::West));
    assert_eq!("".parse::<Orientation>(), Err(ParseError::InvalidOrientation));
    assert_eq!("NE".parse::<Orientation>(), Err(ParseError::InvalidOrientation));
    assert_eq!("X".parse::<Orientation>(), Err(ParseError::InvalidOrientation));
}

#[test]
fn test_footprint() {
    let placement = Placement::new(Coordinate::new(5, 5), Orientation::North);
    assert_eq!(
        placement.footprint(3),
        Some(vec![
            Coordinate::new(5, 5),
            Coordinate::new(4, 5),
            Coordinate::new(3, 5)
        ])
    );
    assert!(placement.covers(3, Coordinate::new(3, 5)));
    assert!(!placement.covers(3, Coordinate::new(2, 5)));

    let edge = Placement::new(Coordinate::new(0, 8), Orientation::East);
    assert!(edge.footprint(2).is_some());
    assert_eq!(edge.footprint(3), None);
}

#[test]
fn test_neighbourhood() {
    assert_eq!(Coordinate::new(0, 0).neighbourhood().count(), 4);
    assert_eq!(Coordinate::new(0, 5).neighbourhood().count(), 6);
    assert_eq!(Coordinate::new(5, 5).neighbourhood().count(), 9);
    assert_eq!(Coordinate::new(9, 9).neighbourhood().count(), 4);
}
