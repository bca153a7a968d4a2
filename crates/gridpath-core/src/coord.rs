//! Geometry primitives: [`Coord`] and [`Dims`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate. Rows grow downward, columns grow to the right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours, in row-major order
    /// (up, left, right, down).
    #[inline]
    pub fn neighbors4(self) -> [Coord; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
            self.shift(1, 0),
        ]
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major order: row first, then column. This is the tie-break
    /// order used by the search frontier, so it is part of the public
    /// contract.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions, `rows × cols`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    /// Create new dimensions. Negative values are clamped to zero.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows > 0 { rows } else { 0 },
            cols: if cols > 0 { cols } else { 0 },
        }
    }

    /// Square dimensions `size × size`.
    #[inline]
    pub const fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major iterator over every coordinate in the grid.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            cur: Coord::ZERO,
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl IntoIterator for Dims {
    type Item = Coord;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

/// Row-major iterator over the coordinates of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    cur: Coord,
}

impl Iterator for DimsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.row >= self.dims.rows || self.dims.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.dims.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return (0, Some(0));
        }
        let w = self.dims.cols as usize;
        let in_row = (self.dims.cols - self.cur.col) as usize;
        let rows_left = (self.dims.rows - self.cur.row - 1) as usize;
        let total = in_row + rows_left * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for DimsIter {}
