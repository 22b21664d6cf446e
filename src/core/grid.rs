//! Fixed-size matrix of cell states.

use core::fmt;

use super::common::BoardError;
use super::config::BOARD_SIZE;
use super::coordinate::Coordinate;

/// State of a single cell. `Hit` and `Miss` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Hit,
    Miss,
}

impl CellState {
    /// Whether a shot has already resolved this cell.
    pub const fn is_shot(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }

    /// Lowercase name used by serializers.
    pub const fn as_str(self) -> &'static str {
        match self {
            CellState::Empty => "empty",
            CellState::Occupied => "occupied",
            CellState::Hit => "hit",
            CellState::Miss => "miss",
        }
    }

    /// How the cell looks to someone who must not see ship positions.
    pub const fn masked(self) -> Self {
        match self {
            CellState::Occupied => CellState::Empty,
            other => other,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw cell matrix, indexed `[row][col]`.
pub type Cells = [[CellState; BOARD_SIZE]; BOARD_SIZE];

/// The `BOARD_SIZE`×`BOARD_SIZE` grid. Every access is bounds checked.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    /// A grid with every cell [`CellState::Empty`].
    pub const fn new() -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, coord: Coordinate) -> Result<CellState, BoardError> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .ok_or(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
    }

    pub fn set(&mut self, coord: Coordinate, state: CellState) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })?;
        *cell = state;
        Ok(())
    }

    /// Writes a coordinate already known to be on the grid.
    pub(crate) fn mark(&mut self, coord: Coordinate, state: CellState) {
        debug_assert!(coord.row < BOARD_SIZE && coord.col < BOARD_SIZE);
        if let Some(cell) = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
        {
            *cell = state;
        }
    }

    /// Clears every cell to [`CellState::Empty`].
    pub fn reset(&mut self) {
        self.cells = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Iterator over `(coordinate, state)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, state)| (Coordinate::new(r, c), *state))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", BOARD_SIZE)?;
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Occupied => 'O',
                    CellState::Hit => 'X',
                    CellState::Miss => '*',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
