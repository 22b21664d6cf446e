#![cfg(feature = "std")]

use std::fmt::Write;

use crate::core::{CellState, Cells, BOARD_SIZE};

/// How a board should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show ships. Off for the opponent's board.
    pub reveal_ships: bool,
    pub show_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reveal_ships: true,
            show_legend: true,
        }
    }
}

pub fn cell_char(state: CellState, reveal_ships: bool) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Occupied if reveal_ships => 'O',
        CellState::Occupied => '.',
        CellState::Hit => 'X',
        CellState::Miss => '*',
    }
}

/// Draw `cells` as a labelled text grid: columns `1..=10`, rows `A..=J`.
pub fn render_board(cells: &Cells, options: RenderOptions) -> String {
    let mut out = String::new();
    let border = format!("   +{}+\n", "---".repeat(BOARD_SIZE));

    out.push_str("    ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, "{:>2} ", c + 1);
    }
    out.push('\n');
    out.push_str(&border);

    for (r, row) in cells.iter().enumerate() {
        let label = (b'A' + r as u8) as char;
        let _ = write!(out, " {} |", label);
        for state in row {
            let _ = write!(out, " {} ", cell_char(*state, options.reveal_ships));
        }
        out.push_str("|\n");
    }
    out.push_str(&border);

    if options.show_legend {
        out.push_str("Legend: . empty, O ship, X hit, * miss\n");
        if !options.reveal_ships {
            out.push_str("(Ships hidden)\n");
        }
    }
    out
}
