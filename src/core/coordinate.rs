//! Board coordinates, orientations and placements, plus their label parsers.

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::common::ParseError;
use super::config::BOARD_SIZE;

/// A cell position; both components are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies inside the board.
    pub const fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The neighbouring coordinate one step towards `orientation`, or `None`
    /// if that would go below zero.
    pub fn step(&self, orientation: Orientation) -> Option<Self> {
        let (dr, dc) = orientation.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// All in-bounds cells in the 3×3 block centred on this coordinate,
    /// including the coordinate itself.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        (-1isize..=1).flat_map(move |dr| {
            (-1isize..=1).filter_map(move |dc| {
                let row = self.row.checked_add_signed(dr)?;
                let col = self.col.checked_add_signed(dc)?;
                let c = Coordinate::new(row, col);
                c.in_bounds().then_some(c)
            })
        })
    }
}

impl fmt::Display for Coordinate {
    /// Formats as a board label (`A1` .. `J10`) when in bounds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    /// Parses a label such as `b7` or `J10`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() < 2 || bytes.len() > 3 {
            return Err(ParseError::InvalidCoordinate);
        }

        let row_ch = bytes[0].to_ascii_uppercase();
        if !(b'A'..=b'J').contains(&row_ch) {
            return Err(ParseError::InvalidRow);
        }
        let row = (row_ch - b'A') as usize;

        let col = match bytes[1..] {
            [d @ b'1'..=b'9'] => (d - b'1') as usize,
            [b'1', b'0'] => 9,
            _ => return Err(ParseError::InvalidColumn),
        };

        Ok(Coordinate { row, col })
    }
}

/// Direction in which a structure extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// Row and column delta of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Orientation::North => (-1, 0),
            Orientation::South => (1, 0),
            Orientation::East => (0, 1),
            Orientation::West => (0, -1),
        }
    }

    pub const fn label(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::South => 'S',
            Orientation::East => 'E',
            Orientation::West => 'W',
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    /// Accepts a single `N`, `S`, `E` or `W`, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [b] => match b.to_ascii_uppercase() {
                b'N' => Ok(Orientation::North),
                b'S' => Ok(Orientation::South),
                b'E' => Ok(Orientation::East),
                b'W' => Ok(Orientation::West),
                _ => Err(ParseError::InvalidOrientation),
            },
            _ => Err(ParseError::InvalidOrientation),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Anchor plus orientation; together with a size this fixes a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub anchor: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(anchor: Coordinate, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    /// Cells covered by a structure of `size` placed here, starting at the
    /// anchor. Returns `None` if any of them leaves the board.
    pub fn footprint(&self, size: usize) -> Option<Vec<Coordinate>> {
        let mut cells = Vec::with_capacity(size);
        let mut cursor = Some(self.anchor);
        for _ in 0..size {
            let cell = cursor.filter(Coordinate::in_bounds)?;
            cells.push(cell);
            cursor = cell.step(self.orientation);
        }
        Some(cells)
    }

    /// Whether the footprint of a structure of `size` placed here contains
    /// `coord`.
    pub fn covers(&self, size: usize, coord: Coordinate) -> bool {
        self.footprint(size)
            .is_some_and(|cells| cells.contains(&coord))
    }
}
