//! Counting the tiles enclosed by the loop with a per-row crossing scan.

use std::collections::HashSet;
use std::fmt;

use super::PipeMazeError;
use super::grid::{Grid, Position};
use super::tile::Tile;

/// Outcome of scanning one row from left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowScan {
    pub enclosed: usize,
    pub crossings: usize,
}

/// Scans one row where `None` marks a tile that is not part of the loop.
///
/// Horizontal runs are resolved by their corners: `L..J` and `F..7` turn
/// back the way they came and cancel out, while `L..7` and `F..J` cross
/// the row once. A loop tile in the first column always crosses.
pub fn scan_row(row: &[Option<Tile>]) -> RowScan {
    let mut scan = RowScan::default();
    let mut inside = false;

    for (idx, tile) in row.iter().enumerate() {
        let Some(tile) = tile else {
            if inside {
                scan.enclosed += 1;
            }
            continue;
        };

        let crosses = match tile {
            _ if idx == 0 => true,
            Tile::Horizontal => false,
            Tile::NorthWest => run_opened_by(&row[..idx]) == Some(Tile::NorthEast),
            Tile::SouthWest => run_opened_by(&row[..idx]) == Some(Tile::SouthEast),
            _ => true,
        };
        if crosses {
            inside = !inside;
            scan.crossings += 1;
        }
    }

    scan
}

/// The tile before the trailing run of `-` in `before`.
fn run_opened_by(before: &[Option<Tile>]) -> Option<Tile> {
    before
        .iter()
        .rev()
        .find(|tile| **tile != Some(Tile::Horizontal))
        .copied()
        .flatten()
}

/// The grid reduced to the loop, with the start marker replaced by its pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopMap {
    rows: Vec<Vec<Option<Tile>>>,
}

impl LoopMap {
    pub fn new(grid: &Grid, on_loop: &HashSet<Position>, start_tile: Tile) -> Self {
        let rows = grid
            .rows()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, tile)| {
                        on_loop.contains(&Position::new(x, y)).then_some(match tile {
                            Tile::Start => start_tile,
                            other => *other,
                        })
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn scan_rows(&self) -> impl Iterator<Item = RowScan> + '_ {
        self.rows.iter().map(|row| scan_row(row))
    }

    /// Total enclosed tiles; every row must cross the loop an even number of times.
    pub fn count_enclosed(&self) -> Result<usize, PipeMazeError> {
        self.scan_rows().enumerate().try_fold(0, |total, (row, scan)| {
            if scan.crossings % 2 != 0 {
                return Err(PipeMazeError::UnbalancedRow {
                    row,
                    crossings: scan.crossings,
                });
            }
            Ok(total + scan.enclosed)
        })
    }
}

impl fmt::Display for LoopMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|tile| tile.map_or(' ', Tile::glyph))
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Number of tiles strictly inside the loop formed by `on_loop`.
pub fn count_enclosed(
    grid: &Grid,
    on_loop: &HashSet<Position>,
    start_tile: Tile,
) -> Result<usize, PipeMazeError> {
    if !start_tile.is_pipe() {
        return Err(PipeMazeError::UnresolvedStart);
    }

    let map = LoopMap::new(grid, on_loop, start_tile);
    log::debug!("loop:\n{}", map);
    map.count_enclosed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_10::tracer::trace_loop;

    fn row(symbols: &str) -> Vec<Option<Tile>> {
        symbols
            .chars()
            .map(|c| match c {
                '.' => None,
                other => Some(Tile::try_from(other).unwrap()),
            })
            .collect()
    }

    fn enclosed(input: &str) -> usize {
        let grid: Grid = input.parse().unwrap();
        let traced = trace_loop(&grid).unwrap();
        count_enclosed(&grid, &traced.positions(), traced.start_tile).unwrap()
    }

    #[test]
    fn straight_walls_toggle() {
        assert_eq!(
            scan_row(&row("|..|.")),
            RowScan {
                enclosed: 2,
                crossings: 2,
            }
        );
    }

    #[test]
    fn u_turns_cancel_out() {
        let north = scan_row(&row("|.L--J.|."));
        assert_eq!(north.enclosed, 2);
        assert_eq!(north.crossings % 2, 0);

        let south = scan_row(&row("|.F7.|."));
        assert_eq!(south.enclosed, 2);
    }

    #[test]
    fn s_bends_cross_once() {
        let scan = scan_row(&row("L-7..|"));
        assert_eq!(scan.enclosed, 2);
        assert_eq!(scan.crossings, 2);

        let scan = scan_row(&row("F--J.|"));
        assert_eq!(scan.enclosed, 1);
    }

    #[test]
    fn first_column_always_crosses() {
        for symbols in ["J..|", "7..|", "-..|"] {
            assert_eq!(
                scan_row(&row(symbols)),
                RowScan {
                    enclosed: 2,
                    crossings: 2,
                },
                "{}",
                symbols
            );
        }
    }

    #[test]
    fn nothing_counts_right_of_a_northern_u_turn() {
        // S-7 on top, the L J notch dips into the middle row
        let input = "S7F7.\n|LJ|.\nL--J.";
        assert_eq!(enclosed(input), 0);
    }

    #[test]
    fn nothing_counts_right_of_a_southern_u_turn() {
        let input = "S--7.\n|F7|.\nLJLJ.";
        assert_eq!(enclosed(input), 0);
    }

    #[test]
    fn unresolved_start_is_rejected() {
        let grid: Grid = "S7\nLJ".parse().unwrap();
        let err = count_enclosed(&grid, &HashSet::new(), Tile::Start).unwrap_err();
        assert_eq!(err, PipeMazeError::UnresolvedStart);
    }

    #[test]
    fn odd_crossings_are_reported() {
        // a loop set that is not actually closed
        let grid: Grid = ".|.\n.|.".parse().unwrap();
        let on_loop = HashSet::from([Position::new(1, 0)]);
        let err = count_enclosed(&grid, &on_loop, Tile::Vertical).unwrap_err();
        assert_eq!(err, PipeMazeError::UnbalancedRow { row: 0, crossings: 1 });
    }

    #[test]
    fn renders_the_loop_with_box_glyphs() {
        let grid: Grid = ".....\n.S-7.\n.|.|.\n.L-J.\n.....".parse().unwrap();
        let traced = trace_loop(&grid).unwrap();
        let map = LoopMap::new(&grid, &traced.positions(), traced.start_tile);
        assert_eq!(map.to_string(), "\n ┌─┐\n │ │\n └─┘\n\n");
    }
}
