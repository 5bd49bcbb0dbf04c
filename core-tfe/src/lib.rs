pub mod metrics;

pub const SIZE: usize = 4;

/// A 4x4 grid of tile values. 0 marks an empty cell; occupied cells hold the
/// literal tile value (2, 4, 8, ...).
///
/// Boards are plain values: strategies try moves on copies, and the live
/// board is only ever replaced wholesale by the game loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Board {
    cells: [[u32; SIZE]; SIZE],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[0; SIZE]; SIZE],
    };

    pub const fn get(self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    pub fn cells(self) -> impl Iterator<Item = ((usize, usize), u32)> {
        (0..SIZE)
            .flat_map(move |row| (0..SIZE).map(move |col| ((row, col), self.cells[row][col])))
    }

    pub fn empty_cells(self) -> impl Iterator<Item = (usize, usize)> {
        self.cells()
            .filter(|&(_, value)| value == 0)
            .map(|(cell, _)| cell)
    }

    pub fn count_empty(self) -> usize {
        self.empty_cells().count()
    }
}

impl From<[[u32; SIZE]; SIZE]> for Board {
    fn from(cells: [[u32; SIZE]; SIZE]) -> Self {
        Self { cells }
    }
}

/// Shift directions, in the scan order used for tie-breaking everywhere.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Right = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Right, Self::Down];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

/// A tile spawn chosen by a generator: where, and whether it is a 2 or a 4.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_walk_row_major() {
        let mut board = Board::EMPTY;
        board.set(0, 0, 2);
        board.set(2, 3, 4);

        assert_eq!(board.count_empty(), 14);
        assert_eq!(board.empty_cells().next(), Some((0, 1)));
        assert!(board.empty_cells().all(|(row, col)| board.get(row, col) == 0));
    }
}
