//! Stonehenge implementation.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use im::Vector;

use crate::core::Player;
use crate::error::{Error, Result};
use crate::rules::{Game, GameState};

use super::layout::{Direction, Layout, MAX_SIDE, MIN_SIDE};

const INSTRUCTIONS: &str = "Players take turns claiming cells. A player captures a \
ley-line by holding at least half of the cells on it; captured ley-lines stay captured. \
There is a ley-line for every row and for every diagonal. The first player to capture \
at least half of all ley-lines wins.";

/// A Stonehenge position.
///
/// Cell and ley-line vectors are persistent, so successor states share
/// structure with their parent and cloning is O(1).
#[derive(Clone, Debug)]
pub struct StonehengeState {
    layout: Arc<Layout>,
    player: Player,
    /// Owner of each cell.
    cells: Vector<Option<Player>>,
    /// Owner of each ley-line.
    lines: Vector<Option<Player>>,
}

impl StonehengeState {
    /// Empty board of side length `side` with `player` to move.
    ///
    /// Returns `Error::InvalidConfig` if `side` is not in 1..=5.
    pub fn new(player: Player, side: usize) -> Result<Self> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(Error::InvalidConfig {
                message: format!("stonehenge side length must be {MIN_SIDE}-{MAX_SIDE}, got {side}"),
            });
        }
        let layout = Arc::new(Layout::new(side));
        Ok(Self {
            player,
            cells: Vector::from(vec![None; layout.cell_count()]),
            lines: Vector::from(vec![None; layout.line_count()]),
            layout,
        })
    }

    /// Board geometry.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Owner of the cell labelled `label`, if any.
    #[must_use]
    pub fn cell_owner(&self, label: char) -> Option<Player> {
        self.layout.cell_of(label).and_then(|cell| self.cells[cell])
    }

    /// Owner of ley-line `line`, if captured.
    #[must_use]
    pub fn line_owner(&self, line: usize) -> Option<Player> {
        self.lines[line]
    }

    /// Ley-lines captured by `player`.
    #[must_use]
    pub fn points(&self, player: Player) -> usize {
        self.lines.iter().filter(|&&owner| owner == Some(player)).count()
    }

    /// Check whether `player` holds at least half of all ley-lines.
    #[must_use]
    pub fn has_majority(&self, player: Player) -> bool {
        2 * self.points(player) >= self.layout.line_count()
    }

    fn decided(&self) -> bool {
        Player::ALL.into_iter().any(|p| self.has_majority(p))
    }
}

impl PartialEq for StonehengeState {
    fn eq(&self, other: &Self) -> bool {
        self.layout.side() == other.layout.side()
            && self.player == other.player
            && self.cells == other.cells
            && self.lines == other.lines
    }
}

impl Eq for StonehengeState {}

impl Hash for StonehengeState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.layout.side().hash(state);
        self.player.hash(state);
        self.cells.hash(state);
        self.lines.hash(state);
    }
}

impl GameState for StonehengeState {
    type Move = char;

    fn current_player(&self) -> Player {
        self.player
    }

    fn possible_moves(&self) -> Vec<char> {
        if self.decided() {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(cell, _)| Layout::label(cell))
            .collect()
    }

    fn make_move(&self, mv: &char) -> Result<Self> {
        let cell = match self.layout.cell_of(*mv) {
            Some(cell) if self.cells[cell].is_none() && !self.decided() => cell,
            _ => return Err(Error::invalid_move(mv, self)),
        };

        let mover = self.player;
        let mut next = self.clone();
        next.cells.set(cell, Some(mover));

        // Only lines through the new cell can change hands, and only the
        // mover's count went up.
        for &line in self.layout.lines_of(cell) {
            if next.lines[line].is_some() {
                continue;
            }
            let members = self.layout.line(line);
            let held = members.iter().filter(|&&c| next.cells[c] == Some(mover)).count();
            if 2 * held >= members.len() {
                next.lines.set(line, Some(mover));
            }
        }

        next.player = mover.other();
        Ok(next)
    }
}

fn mark(owner: Option<Player>) -> char {
    match owner {
        None => '@',
        Some(Player::P1) => '1',
        Some(Player::P2) => '2',
    }
}

impl std::fmt::Display for StonehengeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let layout = &self.layout;
        let width = layout.side() + 1;
        let line_marks = |direction| -> String {
            layout
                .lines_in(direction)
                .map(|l| mark(self.lines[l]).to_string())
                .collect::<Vec<_>>()
                .join("   ")
        };

        writeln!(f, "{:indent$}\\ {}", "", line_marks(Direction::DownRight), indent = 2 * width)?;
        for (r, row) in layout.rows().iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&c| match self.cells[c] {
                    None => Layout::label(c).to_string(),
                    Some(_) => mark(self.cells[c]).to_string(),
                })
                .collect();
            let indent = 2 * (width - row.len());
            writeln!(f, "{:indent$}{} - {}", "", mark(self.lines[r]), cells.join(" - "))?;
        }
        writeln!(f, "{:indent$}/ {}", "", line_marks(Direction::DownLeft), indent = 2 * width)?;
        write!(f, "{} to move.", self.player)
    }
}

/// Stonehenge game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stonehenge {
    state: StonehengeState,
}

impl Stonehenge {
    /// Start a game on an empty board of side length `side`.
    ///
    /// Returns `Error::InvalidConfig` if `side` is not in 1..=5.
    pub fn new(starting: Player, side: usize) -> Result<Self> {
        Ok(Self {
            state: StonehengeState::new(starting, side)?,
        })
    }
}

impl Game for Stonehenge {
    type State = StonehengeState;

    fn current_state(&self) -> &StonehengeState {
        &self.state
    }

    fn set_current_state(&mut self, state: StonehengeState) {
        self.state = state;
    }

    fn instructions(&self) -> &str {
        INSTRUCTIONS
    }

    fn parse_move(&self, text: &str) -> Result<char> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if self.state.layout.cell_of(c).is_some() => Ok(c.to_ascii_uppercase()),
            _ => Err(Error::invalid_move(text, &self.state)),
        }
    }

    /// Over once a player holds a majority of ley-lines, or the board
    /// is full.
    fn is_over(&self, state: &StonehengeState) -> bool {
        state.decided() || state.possible_moves().is_empty()
    }

    fn is_winner_in(&self, state: &StonehengeState, player: Player) -> bool {
        self.is_over(state) && state.has_majority(player)
    }
}
