// engine/src/env/grid.rs
#![forbid(unsafe_code)]

use crate::env::constants::N_CELLS;
use crate::env::error::EnvError;

pub const ROWS: usize = 5;
pub const COLS: usize = 10;

/// (row, col); row 0 is the top of the layout.
pub type Pos = (i32, i32);

/**
 * The fixed playfield: a 10-wide corridor two rows deep, with a 3x3 room
 * attached above columns 5..=7. `-1` marks out-of-play cells; everything
 * else is a dense cell id.
 */
const LAYOUT: [[i8; COLS]; ROWS] = [
    [-1, -1, -1, -1, -1, 26, 27, 28, -1, -1],
    [-1, -1, -1, -1, -1, 23, 24, 25, -1, -1],
    [-1, -1, -1, -1, -1, 20, 21, 22, -1, -1],
    [10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
];

/// Static topology: the layout table plus the id -> coordinate table derived from it.
#[derive(Clone, Debug)]
pub struct Grid {
    layout: [[i8; COLS]; ROWS],
    coords: [Pos; N_CELLS],
}

impl Grid {
    pub fn new() -> Result<Self, EnvError> {
        Self::from_layout(LAYOUT)
    }

    /// Build the coordinate table by scanning the layout once.
    /// Fails if any id in `0..N_CELLS` never appears (the table must be gap-free).
    pub fn from_layout(layout: [[i8; COLS]; ROWS]) -> Result<Self, EnvError> {
        let mut coords: [Option<Pos>; N_CELLS] = [None; N_CELLS];
        for (r, row) in layout.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v >= 0 {
                    coords[v as usize] = Some((r as i32, c as i32));
                }
            }
        }

        let mut table = [(0i32, 0i32); N_CELLS];
        for (id, slot) in coords.iter().enumerate() {
            match slot {
                Some(p) => table[id] = *p,
                None => return Err(EnvError::LayoutGap(id)),
            }
        }

        Ok(Self {
            layout,
            coords: table,
        })
    }

    /// Stored layout value at `pos`; `-1` for out-of-play and out-of-bounds alike.
    #[inline]
    pub fn cell_id_at(&self, pos: Pos) -> i8 {
        let (r, c) = pos;
        if r < 0 || r >= ROWS as i32 || c < 0 || c >= COLS as i32 {
            return -1;
        }
        self.layout[r as usize][c as usize]
    }

    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.cell_id_at(pos) >= 0
    }

    /// Coordinate of a valid cell id. Callers hold `id < N_CELLS`.
    #[inline]
    pub fn coord_of(&self, id: usize) -> Pos {
        self.coords[id]
    }

    /// Deterministic move application: the candidate cell if legal,
    /// otherwise the original position (bumping a wall is a no-op).
    #[inline]
    pub fn apply_move(&self, from: Pos, offset: (i32, i32)) -> Pos {
        let candidate = (from.0 + offset.0, from.1 + offset.1);
        if self.is_legal(candidate) {
            candidate
        } else {
            from
        }
    }
}
