/// Single coordinate axis used for board rows and columns.
pub type Coord = u8;

/// Count type used for pair counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Row-major position of a cell on the board.
pub type CellIndex = usize;

/// Whole seconds on the countdown clock.
pub type Seconds = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major index of `coords` on a board of `size`.
pub const fn coords_to_index(coords: Coord2, size: Coord2) -> CellIndex {
    coords.0 as CellIndex * size.1 as CellIndex + coords.1 as CellIndex
}

/// Inverse of [`coords_to_index`]; `index` must already be in bounds.
pub const fn index_to_coords(index: CellIndex, size: Coord2) -> Coord2 {
    let cols = size.1 as CellIndex;
    ((index / cols) as Coord, (index % cols) as Coord)
}
