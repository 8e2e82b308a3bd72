//! Stonehenge board geometry.
//!
//! A board of side length `n` has `n + 1` rows. Rows `0..n` hold
//! `r + 2` cells and the final row holds `n`, so the middle of the board
//! is `n + 1` cells wide. Cells are numbered row-major and labelled
//! `A`, `B`, ... in the same order.
//!
//! Every row is a ley-line, and so is every column in each of the two
//! diagonal directions, `n + 1` lines per direction.

/// Smallest supported side length.
pub const MIN_SIDE: usize = 1;
/// Largest supported side length (25 cells, `A` to `Y`).
pub const MAX_SIDE: usize = 5;

/// Orientation of a ley-line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A horizontal row.
    Row,
    /// Running from upper left to lower right.
    DownRight,
    /// Running from upper right to lower left.
    DownLeft,
}

impl Direction {
    /// All directions, in ley-line order.
    pub const ALL: [Direction; 3] = [Direction::Row, Direction::DownRight, Direction::DownLeft];
}

/// Cell and ley-line structure of one board size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    side: usize,
    /// Cell indices of each row.
    rows: Vec<Vec<usize>>,
    /// Cell indices of each ley-line, grouped by direction.
    lines: Vec<Vec<usize>>,
    /// Ley-lines through each cell.
    lines_of_cell: Vec<Vec<usize>>,
}

impl Layout {
    /// Build the layout for side length `side`.
    ///
    /// `side` must lie in `MIN_SIDE..=MAX_SIDE`; callers validate it.
    pub fn new(side: usize) -> Self {
        debug_assert!((MIN_SIDE..=MAX_SIDE).contains(&side));
        let width = side + 1;

        let mut rows = Vec::with_capacity(width);
        let mut next_cell = 0;
        for r in 0..=side {
            let len = if r < side { r + 2 } else { side };
            rows.push((next_cell..next_cell + len).collect::<Vec<_>>());
            next_cell += len;
        }

        let mut down_right = vec![Vec::new(); width];
        let mut down_left = vec![Vec::new(); width];
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                // Rows above the last are flush left in one diagonal frame
                // and flush right in the other; the last row sits one step in.
                let (dr, dl) = if r < side { (c, c + width - row.len()) } else { (c + 1, c) };
                down_right[dr].push(cell);
                down_left[dl].push(cell);
            }
        }

        let lines: Vec<Vec<usize>> = rows.iter().cloned().chain(down_right).chain(down_left).collect();

        let mut lines_of_cell = vec![Vec::new(); next_cell];
        for (i, line) in lines.iter().enumerate() {
            for &cell in line {
                lines_of_cell[cell].push(i);
            }
        }

        Self {
            side,
            rows,
            lines,
            lines_of_cell,
        }
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.lines_of_cell.len()
    }

    /// Number of ley-lines, `3 * (side + 1)`.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cells of ley-line `line`.
    #[must_use]
    pub fn line(&self, line: usize) -> &[usize] {
        &self.lines[line]
    }

    /// Ley-lines running through `cell`.
    #[must_use]
    pub fn lines_of(&self, cell: usize) -> &[usize] {
        &self.lines_of_cell[cell]
    }

    /// Cell indices of each row, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Ley-lines of one direction, as indices into the line table.
    pub fn lines_in(&self, direction: Direction) -> std::ops::Range<usize> {
        let per_direction = self.side + 1;
        let offset = match direction {
            Direction::Row => 0,
            Direction::DownRight => per_direction,
            Direction::DownLeft => 2 * per_direction,
        };
        offset..offset + per_direction
    }

    /// Label of a cell.
    #[must_use]
    pub fn label(cell: usize) -> char {
        (b'A' + cell as u8) as char
    }

    /// Cell with label `label`, if it is on this board.
    #[must_use]
    pub fn cell_of(&self, label: char) -> Option<usize> {
        let label = label.to_ascii_uppercase();
        if !label.is_ascii_uppercase() {
            return None;
        }
        let cell = (label as u8 - b'A') as usize;
        (cell < self.cell_count()).then_some(cell)
    }
}
