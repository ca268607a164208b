//! The bishop's walk over the board.
//!
//! The algorithm is described in the paper:
//!
//! "The drunken bishop: An analysis of the OpenSSH fingerprint visualization algorithm"
//!
//! <http://www.dirk-loss.de/sshvis/drunken_bishop.pdf>

use crate::Step;

/// Number of columns on the board.
pub const WIDTH: usize = 17;

/// Number of rows on the board.
pub const HEIGHT: usize = 9;

/// Largest visit count a cell can hold before saturating.
pub(crate) const MAX_VISITS: u8 = 14;

/// Value marking the cell the walk started on.
pub(crate) const START_MARK: u8 = 15;

/// Value marking the cell the walk ended on.
pub(crate) const END_MARK: u8 = 16;

/// Cell on the board, always within bounds.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Center of the board, where every walk begins.
    pub const START: Self = Self {
        row: HEIGHT / 2,
        col: WIDTH / 2,
    };

    /// Create a position, or `None` if it lies off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < HEIGHT && col < WIDTH).then_some(Self { row, col })
    }

    /// Row index, in `0..HEIGHT`.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index, in `0..WIDTH`.
    pub fn col(self) -> usize {
        self.col
    }

    /// Move one step diagonally. Each coordinate is clipped to the board
    /// edge independently, so a bishop against a wall slides along it.
    pub fn step(self, step: Step) -> Self {
        let (drow, dcol) = step.delta();

        Self {
            row: self.row.saturating_add_signed(drow).min(HEIGHT - 1),
            col: self.col.saturating_add_signed(dcol).min(WIDTH - 1),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

/// Visit counts left behind by the bishop.
///
/// Cells hold `0..=14` visits, except the start cell which holds `15` and the
/// end cell which holds `16`. When the walk ends where it began only the end
/// marker remains.
///
/// Visit counts saturate at `14`, as in OpenSSH. A cell visited 15 or more
/// times therefore renders as `^` rather than overflowing into the `S`/`E`
/// symbols or past the end of the palette.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Field {
    cells: [[u8; WIDTH]; HEIGHT],
    end: Position,
}

impl Field {
    /// Get the value stored at the given position.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Get the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[u8; WIDTH]; HEIGHT] {
        &self.cells
    }

    /// Position the walk ended on.
    pub fn end(&self) -> Position {
        self.end
    }

    #[allow(clippy::arithmetic_side_effects)]
    fn visit(&mut self, pos: Position) {
        let cell = &mut self.cells[pos.row][pos.col];

        if *cell < MAX_VISITS {
            *cell += 1;
        }
    }

    fn mark(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }
}

/// Walk the bishop from the center of the board, recording a visit on each
/// cell before stepping off it.
pub fn simulate(steps: &[Step]) -> Field {
    let mut field = Field {
        cells: [[0; WIDTH]; HEIGHT],
        end: Position::START,
    };
    let mut pos = Position::START;

    for &step in steps {
        field.visit(pos);
        pos = pos.step(step);
    }

    // End is written last and wins if the walk returned to the start.
    field.mark(Position::START, START_MARK);
    field.mark(pos, END_MARK);
    field.end = pos;

    log::trace!("bishop took {} steps, ending at {:?}", steps.len(), pos);
    field
}
