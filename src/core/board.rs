//! Game board: a cell grid plus the placement history of its structures.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use super::common::{BoardError, ShotResult};
use super::config::{BOARD_SIZE, MAX_STRUCTURES, RANDOM_PLACEMENT_ATTEMPTS};
use super::coordinate::{Coordinate, Orientation, Placement};
use super::grid::{CellState, Cells, Grid};
use super::structure::{ShipKind, Structure};

/// A structure together with where it was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedStructure {
    pub structure: Structure,
    pub placement: Placement,
}

impl PlacedStructure {
    fn footprint(&self) -> Vec<Coordinate> {
        // Recorded placements were validated when they were made.
        self.placement
            .footprint(self.structure.size())
            .unwrap_or_default()
    }
}

/// One player's side of the ocean.
///
/// Every `Occupied` or `Hit` cell belongs to exactly one recorded structure.
/// Structures may not touch, not even diagonally.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    structures: Vec<PlacedStructure>,
}

impl Board {
    /// An empty board with nothing placed.
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            structures: Vec::with_capacity(MAX_STRUCTURES),
        }
    }

    pub fn get_cell(&self, coord: Coordinate) -> Result<CellState, BoardError> {
        self.grid.get(coord)
    }

    /// Overwrites a single cell without touching the structure records.
    pub fn set_cell(&mut self, coord: Coordinate, state: CellState) -> Result<(), BoardError> {
        self.grid.set(coord, state)
    }

    pub fn cells(&self) -> &Cells {
        self.grid.cells()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placement history in the order structures were placed.
    pub fn structures(&self) -> &[PlacedStructure] {
        &self.structures
    }

    /// Place `structure` at `placement`.
    ///
    /// The board is left untouched on error.
    pub fn place_structure(
        &mut self,
        structure: &Structure,
        placement: Placement,
    ) -> Result<(), BoardError> {
        let cells = self.checked_footprint(structure.size(), placement)?;
        if self.touches_anything(&cells) {
            return Err(BoardError::Collision);
        }
        for cell in &cells {
            self.grid.set(*cell, CellState::Occupied)?;
        }
        self.structures.push(PlacedStructure {
            structure: structure.clone(),
            placement,
        });
        Ok(())
    }

    /// Resolve a shot at `coord`, returning what it did.
    pub fn handle_shot(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        let state = self.grid.get(coord)?;
        if state.is_shot() {
            return Err(BoardError::AlreadyShot(coord));
        }
        if state == CellState::Empty {
            self.grid.set(coord, CellState::Miss)?;
            return Ok(ShotResult::Miss);
        }

        let placed = self
            .structures
            .iter_mut()
            .find(|p| p.placement.covers(p.structure.size(), coord))
            .ok_or(BoardError::UndefinedShot(coord))?;
        placed.structure.hit();
        let kind = placed.structure.kind();
        let sunk = placed.structure.is_destroyed();
        self.grid.set(coord, CellState::Hit)?;
        Ok(if sunk {
            ShotResult::Sunk(kind)
        } else {
            ShotResult::Hit(kind)
        })
    }

    /// Returns `true` once every placed structure is destroyed.
    ///
    /// A board on which nothing was ever placed is not considered destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.structures.is_empty()
            && self.structures.iter().all(|p| p.structure.is_destroyed())
    }

    /// Wipe the shot history and restore every structure at its original
    /// position with full hit points.
    pub fn reset(&mut self) {
        self.grid.reset();
        for placed in &mut self.structures {
            placed.structure.reset();
        }
        for placed in &self.structures {
            for cell in placed.footprint() {
                self.grid.mark(cell, CellState::Occupied);
            }
        }
    }

    /// Returns a random legal placement for `kind`, or `None` if none was
    /// found within a bounded number of attempts.
    pub fn random_placement<R: Rng>(&self, rng: &mut R, kind: ShipKind) -> Option<Placement> {
        const ORIENTATIONS: [Orientation; 4] = [
            Orientation::North,
            Orientation::South,
            Orientation::East,
            Orientation::West,
        ];
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let orientation = ORIENTATIONS[rng.random_range(0..ORIENTATIONS.len())];
            let anchor = Coordinate::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let placement = Placement::new(anchor, orientation);
            if let Ok(cells) = self.checked_footprint(kind.size(), placement) {
                if !self.touches_anything(&cells) {
                    return Some(placement);
                }
            }
        }
        None
    }

    fn checked_footprint(
        &self,
        size: usize,
        placement: Placement,
    ) -> Result<Vec<Coordinate>, BoardError> {
        placement.footprint(size).ok_or(BoardError::OutOfBounds {
            row: placement.anchor.row,
            col: placement.anchor.col,
        })
    }

    fn touches_anything(&self, cells: &[Coordinate]) -> bool {
        cells.iter().any(|cell| {
            cell.neighbourhood()
                .any(|n| self.grid.cells()[n.row][n.col] != CellState::Empty)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  grid: {:?},\n  structures: {:?}\n}}",
            self.grid, self.structures
        )
    }
}
