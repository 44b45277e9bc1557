use oxo_core::*;
use serde::Deserialize;
use serde::Serialize;

/// One of the two symbols a participant places on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark the opponent places.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// Fixed 3x3 grid, row-major. A cell holds nothing until a mark lands on
/// it, and a written cell is never overwritten.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Board([Option<Mark>; CELLS]);

impl Board {
    /// Mark at a cell, None when empty or out of range.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.0.get(cell).copied().flatten()
    }
    /// Writes a mark. Callers validate emptiness and range first.
    pub fn set(&mut self, cell: Cell, mark: Mark) {
        self.0[cell] = Some(mark);
    }
    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_some()).count()
    }
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| cell.is_some())
    }
    /// Display flag: X moves on even occupancy. Derived, never stored.
    pub fn x_is_next(&self) -> bool {
        self.occupied() % 2 == 0
    }
    /// The mark due to be placed this half-turn.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }
    /// Raw cells for wire serialization.
    pub fn squares(&self) -> &[Option<Mark>; CELLS] {
        &self.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            match cell {
                Some(mark) => write!(f, "{}", mark)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
