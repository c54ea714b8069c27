use alloc::collections::{BTreeSet, VecDeque};
use core::fmt;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// A generated minesweeper field: a rectangular array of [`Cell`]s plus the
/// counters the win check needs.
///
/// Each generation produces an independently owned value; nothing in the
/// crate keeps global state, and queries hand out copies of single cells
/// rather than references into the array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mines: CellCount,
    revealed: CellCount,
}

impl Grid {
    /// Generates a grid for `config`, placing `config.mines()` mines at
    /// distinct positions drawn from `rng`.
    ///
    /// Placement samples distinct flat indices in one pass, so it runs in
    /// linear time even when the density approaches one mine per cell;
    /// drawing coordinates until enough distinct ones appear has no such
    /// bound.
    pub fn generate(config: GridConfig, rng: &mut impl Rng) -> Self {
        let (rows, cols) = (config.rows(), config.cols());
        let total = usize::from(config.total_cells());

        let mine_coords: BTreeSet<Coord2> =
            rand::seq::index::sample(rng, total, usize::from(config.mines()))
                .into_iter()
                .map(|index| flat_to_coords(index, cols))
                .collect();

        let grid = Self::assemble((rows, cols), &mine_coords);
        if grid.mine_count() != config.mines() {
            log::warn!(
                "mine count mismatch, placed {}, requested {}",
                grid.mine_count(),
                config.mines()
            );
        }
        log::debug!(
            "generated {rows}x{cols} grid with {} mines",
            grid.mine_count()
        );
        grid
    }

    /// [`generate`](Self::generate) with a `SmallRng` seeded from `seed`,
    /// for reproducible boards.
    pub fn from_seed(config: GridConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }

    /// Parses `name` as a [`Difficulty`] and generates its preset.
    pub fn generate_named(name: &str, rng: &mut impl Rng) -> Result<Self> {
        let difficulty: Difficulty = name.parse()?;
        Ok(Self::generate(difficulty.config(), rng))
    }

    #[cfg(test)]
    pub(crate) fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Self {
        let coords: BTreeSet<Coord2> = mine_coords.iter().copied().collect();
        Self::assemble(size, &coords)
    }

    /// Builds the cell array: mines first, then one accumulation pass that
    /// bumps every safe neighbor of every mine. The pass order does not
    /// matter, ranks are a pure sum.
    fn assemble(size: Coord2, mine_coords: &BTreeSet<Coord2>) -> Self {
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            cells[coords.to_nd_index()].place_mine();
        }
        for &coords in mine_coords {
            for pos in neighbors(coords, size) {
                cells[pos.to_nd_index()].bump_rank();
            }
        }

        let mines = mine_coords.len().try_into().unwrap();
        Self {
            cells,
            mines,
            revealed: 0,
        }
    }

    /// `(rows, cols)` fixed at generation time.
    pub fn dimensions(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    /// Number of cells unhidden so far, mines included if the caller chose
    /// to reveal one.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed
    }

    /// Copy of the cell at `coords`.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside the grid; out-of-range access is a
    /// caller bug, not a recoverable condition.
    pub fn cell(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.cell(coords).is_mine()
    }

    pub fn is_hidden(&self, coords: Coord2) -> bool {
        self.cell(coords).is_hidden()
    }

    /// Adjacent-mine count of the cell at `coords`, `None` for a mine.
    pub fn rank(&self, coords: Coord2) -> Option<u8> {
        self.cell(coords).rank()
    }

    /// Reveals the cell at `coords`, cascading through zero-rank regions.
    ///
    /// A nonzero-rank or mine cell is unhidden on its own. A zero-rank cell
    /// unhides its whole connected zero region plus the numbered cells
    /// bordering it; the border does not expand further. Revealing an
    /// already-unhidden cell changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside the grid.
    pub fn reveal(&mut self, coords: Coord2) {
        let cell = self.cells[coords.to_nd_index()];
        if !cell.is_hidden() {
            return;
        }

        self.unhide(coords);
        if cell.rank() != Some(0) {
            return;
        }

        // Explicit work list instead of recursion: grids reach 24x30 cells,
        // and the visited set keeps the undirected neighbor graph from
        // being walked twice.
        let size = self.dimensions();
        let mut visited = BTreeSet::from([coords]);
        let mut to_visit: VecDeque<Coord2> = neighbors(coords, size).collect();

        while let Some(visit) = to_visit.pop_front() {
            if !visited.insert(visit) {
                continue;
            }

            let cell = self.cells[visit.to_nd_index()];
            if !cell.is_hidden() {
                continue;
            }

            self.unhide(visit);
            if cell.rank() == Some(0) {
                to_visit.extend(neighbors(visit, size).filter(|pos| !visited.contains(pos)));
            }
        }
    }

    /// The game is won once every safe cell is unhidden and no mine is.
    pub fn is_winning_state(&self) -> bool {
        self.revealed == self.safe_cell_count()
    }

    fn unhide(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].unhide();
        self.revealed += 1;
    }
}

/// Renders ranks as digits and mines as `M`, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.rank((row, col)) {
                    None => f.write_str("M")?,
                    Some(count) => write!(f, "{count}")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

const fn flat_to_coords(index: usize, cols: Coord) -> Coord2 {
    let cols = cols as usize;
    ((index / cols) as Coord, (index % cols) as Coord)
}
