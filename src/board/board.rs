//! Board grid with bounds-checked neighbor lookup

use super::{Mark, Pos, TOTAL_CELLS};

/// Fixed 6x6 game board.
///
/// Cells are stored in a flat array indexed by `y * BOARD_SIZE + x`.
/// Dimensions never change after construction; the only mutation is
/// occupancy, and a cell is occupied at most once per game.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Get the mark at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark. Cells are write-once; an occupied cell is left as is.
    #[inline]
    pub fn place_mark(&mut self, pos: Pos, mark: Mark) {
        let cell = &mut self.cells[pos.to_index()];
        if *cell == Mark::Empty {
            *cell = mark;
        }
    }

    /// Get the cell at raw coordinates, or `None` when out of range.
    ///
    /// Out-of-range lookups are a normal traversal terminator, never an
    /// error: every scan walks until this returns `None`.
    #[inline]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Pos> {
        if Pos::is_valid(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Get the neighbor of `pos` along an offset vector
    #[inline]
    pub fn neighbor(&self, pos: Pos, offset: (i32, i32)) -> Option<Pos> {
        self.cell_at(pos.x as i32 + offset.0, pos.y as i32 + offset.1)
    }

    /// Iterate empty positions in ascending index order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &mark)| mark == Mark::Empty)
            .map(|(idx, _)| Pos::from_index(idx))
    }

    /// Total occupied cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
