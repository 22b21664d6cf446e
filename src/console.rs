#![cfg(feature = "std")]

//! Hot-seat console game: two players share one terminal and one [`Match`].

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail};
use rand::Rng;
use tracing::debug;

use crate::core::{
    Coordinate, Match, Orientation, ParseError, Placement, PlayerId, ShipKind, ShotResult,
    BOARD_SIZE, FLEET,
};
use crate::ui::{render_board, RenderOptions};

const SEPARATOR: &str = "\n----------------------------------------";

/// What the player typed at the placement prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementInput {
    Manual(Placement),
    Auto,
}

/// Parse `<COORDINATE> <ORIENTATION>` (e.g. `A1 E`) or `auto`.
pub fn parse_placement(line: &str) -> Result<PlacementInput, ParseError> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(word), None, None) if word.eq_ignore_ascii_case("auto") => Ok(PlacementInput::Auto),
        (Some(coord), Some(orientation), None) => Ok(PlacementInput::Manual(Placement::new(
            coord.parse::<Coordinate>()?,
            orientation.parse::<Orientation>()?,
        ))),
        _ => Err(ParseError::InvalidCoordinate),
    }
}

/// Interactive game over arbitrary input and output streams.
pub struct Console<R, W> {
    input: R,
    output: W,
    game: Match,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            game: Match::new(),
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Play a full game: both fleets, then shots until someone wins.
    /// Returns the winner's id.
    pub fn run<G: Rng>(&mut self, rng: &mut G) -> anyhow::Result<PlayerId> {
        writeln!(self.output, "Battleship Console (2 players)")?;
        writeln!(self.output, "Board size: {}x{}", BOARD_SIZE, BOARD_SIZE)?;

        let [first, second] = [self.game.players()[0].id(), self.game.players()[1].id()];
        self.place_fleet(first, rng)?;
        self.place_fleet(second, rng)?;
        self.play_turns()?;

        let winner = self
            .game
            .winner()
            .ok_or_else(|| anyhow!("game ended without a winner"))?;
        writeln!(self.output, "{}", SEPARATOR)?;
        writeln!(self.output, "Player {} wins!", winner)?;
        Ok(winner)
    }

    fn place_fleet<G: Rng>(&mut self, id: PlayerId, rng: &mut G) -> anyhow::Result<()> {
        writeln!(self.output, "{}", SEPARATOR)?;
        writeln!(self.output, "Player {}, place your fleet.", id)?;
        writeln!(self.output, "Format: <COORDINATE> <ORIENTATION>, e.g. A1 E (or 'auto')")?;
        writeln!(self.output, "Orientation: N S E W\n")?;

        for kind in FLEET {
            loop {
                write!(self.output, "{} ({}): ", kind.name(), kind.size())?;
                self.output.flush()?;
                let line = self.read_line()?;
                match self.try_place(id, kind, &line, rng) {
                    Ok(()) => {
                        let cells = self.game.player_by_id(id)?.board().cells();
                        let options = RenderOptions {
                            reveal_ships: true,
                            show_legend: false,
                        };
                        write!(self.output, "{}", render_board(cells, options))?;
                        break;
                    }
                    Err(e) => writeln!(self.output, "Placement failed: {}", e)?,
                }
            }
        }
        Ok(())
    }

    fn try_place<G: Rng>(
        &mut self,
        id: PlayerId,
        kind: ShipKind,
        line: &str,
        rng: &mut G,
    ) -> anyhow::Result<()> {
        let placement = match parse_placement(line)? {
            PlacementInput::Manual(placement) => placement,
            PlacementInput::Auto => self
                .game
                .player_by_id(id)?
                .board()
                .random_placement(rng, kind)
                .ok_or_else(|| anyhow!("no room left for the {}", kind.name()))?,
        };
        self.game.place_ship(id, kind, placement)?;
        debug!(player = id, %kind, anchor = %placement.anchor, "ship placed");
        Ok(())
    }

    fn play_turns(&mut self) -> anyhow::Result<()> {
        while !self.game.is_over() {
            let attacker = self.game.current_player_id();
            let defender = self.game.opponent_player_id();

            writeln!(self.output, "{}", SEPARATOR)?;
            writeln!(self.output, "Player {} turn.\n", attacker)?;
            writeln!(self.output, "Your board:")?;
            let own = *self.game.player_by_id(attacker)?.board().cells();
            write!(self.output, "{}", render_board(&own, RenderOptions::default()))?;
            writeln!(self.output, "\nEnemy board:")?;
            let enemy = *self.game.player_by_id(defender)?.board().cells();
            let hidden = RenderOptions {
                reveal_ships: false,
                show_legend: true,
            };
            write!(self.output, "{}", render_board(&enemy, hidden))?;

            loop {
                write!(self.output, "\nShoot at coordinate (example: B7): ")?;
                self.output.flush()?;
                let line = self.read_line()?;
                let shot = line
                    .parse::<Coordinate>()
                    .map_err(anyhow::Error::from)
                    .and_then(|target| Ok(self.game.fire_current(target)?));
                match shot {
                    Ok(ShotResult::Miss) => {
                        writeln!(self.output, "Miss.")?;
                        break;
                    }
                    Ok(ShotResult::Hit(_)) => {
                        writeln!(self.output, "Hit!")?;
                        break;
                    }
                    Ok(ShotResult::Sunk(kind)) => {
                        writeln!(self.output, "Hit! You sank the {}.", kind.name())?;
                        break;
                    }
                    Err(e) => writeln!(self.output, "Shot failed: {}", e)?,
                }
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            bail!("input closed before the game finished");
        }
        Ok(buf.trim().to_owned())
    }
}
