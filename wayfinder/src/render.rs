//! ASCII rendering of a grid with an optional path overlay.

use gridpath_core::{CellState, Coord, GridMap};

/// Render `grid` as text: `.` free, `#` blocked, `*` path, `S` start,
/// `G` goal. Start and goal markers take precedence over the path.
pub fn render(grid: &GridMap, path: Option<&[Coord]>, start: Coord, goal: Coord) -> String {
    let dims = grid.dims();
    let mut on_path = vec![false; dims.len()];
    if let Some(path) = path {
        for c in path {
            if dims.contains(*c) {
                on_path[(c.row as usize) * (dims.cols as usize) + c.col as usize] = true;
            }
        }
    }

    let mut out = String::with_capacity(dims.len() + dims.rows as usize);
    for (i, (c, state)) in grid.iter().enumerate() {
        let ch = if c == start {
            'S'
        } else if c == goal {
            'G'
        } else if on_path[i] {
            '*'
        } else {
            match state {
                CellState::Blocked => '#',
                CellState::Free => '.',
            }
        };
        out.push(ch);
        if c.col == dims.cols - 1 && c.row < dims.rows - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_overlay() {
        let grid = GridMap::parse(
            "..#
             #..
             ...",
        )
        .unwrap();
        let path = [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(2, 2),
        ];
        let out = render(&grid, Some(&path), Coord::new(0, 0), Coord::new(2, 2));
        assert_eq!(out, "S*#\n#**\n..G");
    }

    #[test]
    fn no_path_shows_terrain_only() {
        let grid = GridMap::parse(".#\n#.").unwrap();
        let out = render(&grid, None, Coord::new(0, 0), Coord::new(1, 1));
        assert_eq!(out, "S#\n#G");
    }
}
