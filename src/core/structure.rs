//! Ship kinds and the hit-point carrying structure placed on a board.

use core::fmt;
use core::str::FromStr;

use super::common::ParseError;

/// The ship kinds of the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "UPPERCASE"))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Number of cells, which is also the number of hit points.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Wire label, e.g. `CARRIER`.
    pub const fn label(self) -> &'static str {
        match self {
            ShipKind::Carrier => "CARRIER",
            ShipKind::Battleship => "BATTLESHIP",
            ShipKind::Cruiser => "CRUISER",
            ShipKind::Submarine => "SUBMARINE",
            ShipKind::Destroyer => "DESTROYER",
        }
    }
}

impl FromStr for ShipKind {
    type Err = ParseError;

    /// Labels are matched exactly; `carrier` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CARRIER" => Ok(ShipKind::Carrier),
            "BATTLESHIP" => Ok(ShipKind::Battleship),
            "CRUISER" => Ok(ShipKind::Cruiser),
            "SUBMARINE" => Ok(ShipKind::Submarine),
            "DESTROYER" => Ok(ShipKind::Destroyer),
            _ => Err(ParseError::InvalidBoatType),
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A combat structure with remaining hit points.
///
/// Cloning yields an independent copy with the same remaining hit points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    kind: ShipKind,
    hit_points: usize,
}

impl Structure {
    /// A structure of `kind` at full health.
    pub const fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            hit_points: kind.size(),
        }
    }

    pub const fn kind(&self) -> ShipKind {
        self.kind
    }

    pub const fn size(&self) -> usize {
        self.kind.size()
    }

    pub const fn hit_points(&self) -> usize {
        self.hit_points
    }

    /// Removes one hit point. No-op once destroyed.
    pub fn hit(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }

    pub const fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }

    /// Restores full hit points.
    pub fn reset(&mut self) {
        self.hit_points = self.kind.size();
    }
}

impl From<ShipKind> for Structure {
    fn from(kind: ShipKind) -> Self {
        Structure::new(kind)
    }
}
