use gridpath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Admissible and consistent for 4-connected unit-cost grids.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(0, 0)), 0);
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(2, 2)), 4);
        assert_eq!(manhattan(Coord::new(3, 1), Coord::new(1, 4)), 5);
        // Symmetric.
        assert_eq!(
            manhattan(Coord::new(5, 2), Coord::new(1, 7)),
            manhattan(Coord::new(1, 7), Coord::new(5, 2)),
        );
    }
}
