//! Walking the main loop from the start tile.

use std::collections::HashSet;
use std::iter;

use super::PipeMazeError;
use super::grid::{Grid, Position};
use super::tile::{Direction, StartDirections, Tile, resolve_start_tile};

/// One move along the loop: where the walker now stands, where it came from,
/// and the tile underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub position: Position,
    pub entry: Position,
    pub tile: Tile,
}

/// A fully traced loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedLoop {
    /// Loop tiles in walking order, beginning with the start.
    pub path: Vec<Position>,
    pub start_directions: StartDirections,
    pub start_tile: Tile,
}

impl TracedLoop {
    /// Moves needed to walk the whole loop back to the start.
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// Distance of the tile furthest from the start along the loop.
    pub fn furthest_steps(&self) -> usize {
        self.steps() / 2
    }

    pub fn positions(&self) -> HashSet<Position> {
        self.path.iter().copied().collect()
    }
}

/// Finds the pipes attached to `start` and makes the first move.
///
/// Neighbours are probed above, below, left, right; the first one that opens
/// back towards the start is stepped onto. The start must have exactly two
/// such neighbours.
pub fn first_step(grid: &Grid, start: Position) -> Result<(Step, StartDirections), PipeMazeError> {
    let mut directions = StartDirections::default();
    let mut first = None;

    for direction in Direction::ALL {
        let Some(position) = grid.neighbor(start, direction) else {
            continue;
        };
        let Some(tile) = grid.get(position) else {
            continue;
        };
        if tile.opens(direction.opposite()) {
            directions.insert(direction);
            first.get_or_insert(Step {
                position,
                entry: start,
                tile,
            });
        }
    }

    match first {
        Some(step) if directions.len() == 2 => Ok((step, directions)),
        _ => Err(PipeMazeError::StartConnections {
            found: directions.len(),
        }),
    }
}

/// Leaves the current pipe through the side it was not entered from.
///
/// Returns `None` when the exit runs off the grid, into a tile that does not
/// connect back, or when `step` is not standing on a pipe it could have entered.
pub fn next_step(grid: &Grid, step: &Step) -> Option<Step> {
    let [a, b] = step.tile.connections()?;
    let exit = match (grid.neighbor(step.position, a), grid.neighbor(step.position, b)) {
        (Some(from), _) if from == step.entry => b,
        (_, Some(from)) if from == step.entry => a,
        _ => return None,
    };

    let position = grid.neighbor(step.position, exit)?;
    let tile = grid.get(position)?;
    if tile != Tile::Start && !tile.opens(exit.opposite()) {
        return None;
    }

    Some(Step {
        position,
        entry: step.position,
        tile,
    })
}

/// Every step from `first` onwards, ending with the step back onto the start
/// or with the last step before a dead end.
pub fn walk(grid: &Grid, first: Step) -> impl Iterator<Item = Step> + '_ {
    iter::successors(Some(first), move |step| {
        if step.tile == Tile::Start {
            None
        } else {
            next_step(grid, step)
        }
    })
}

/// Walks the loop through the start tile of `grid` and back again.
pub fn trace_loop(grid: &Grid) -> Result<TracedLoop, PipeMazeError> {
    let start = grid.find_start()?;
    let (first, start_directions) = first_step(grid, start)?;

    let mut path = vec![start];
    let mut closed = false;
    for step in walk(grid, first).take(grid.len()) {
        if step.tile == Tile::Start {
            closed = true;
            break;
        }
        path.push(step.position);
    }

    if !closed {
        let last = path.last().copied().unwrap_or(start);
        return Err(if path.len() > grid.len() {
            PipeMazeError::LoopNotClosed { steps: path.len() }
        } else {
            PipeMazeError::BrokenLoop {
                x: last.x,
                y: last.y,
            }
        });
    }

    let start_tile = resolve_start_tile(start_directions);
    log::debug!(
        "traced loop of {} tiles from ({}, {}), start is {}",
        path.len(),
        start.x,
        start.y,
        start_tile
    );

    Ok(TracedLoop {
        path,
        start_directions,
        start_tile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = ".....\n.S-7.\n.|.|.\n.L-J.\n.....";
    const COMPLEX: &str = "..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ...";

    fn grid(input: &str) -> Grid {
        input.parse().unwrap()
    }

    #[test]
    fn first_step_prefers_the_tile_below_over_the_right() {
        let grid = grid(SQUARE);
        let (step, dirs) = first_step(&grid, Position::new(1, 1)).unwrap();

        assert_eq!(step.position, Position::new(1, 2));
        assert_eq!(step.entry, Position::new(1, 1));
        assert_eq!(step.tile, Tile::Vertical);
        assert!(dirs.contains(Direction::South) && dirs.contains(Direction::East));
        assert_eq!(resolve_start_tile(dirs), Tile::SouthEast);
    }

    #[test]
    fn next_step_turns_through_corners() {
        let grid = grid(SQUARE);
        let step = Step {
            position: Position::new(1, 3),
            entry: Position::new(1, 2),
            tile: Tile::NorthEast,
        };
        let next = next_step(&grid, &step).unwrap();
        assert_eq!(next.position, Position::new(2, 3));
        assert_eq!(next.entry, Position::new(1, 3));
        assert_eq!(next.tile, Tile::Horizontal);
    }

    #[test]
    fn next_step_stops_at_pipes_that_do_not_connect() {
        // the `7` leads down into a `-`
        let grid = grid("S7.\n|-.\nLJ.");
        let step = Step {
            position: Position::new(1, 0),
            entry: Position::new(0, 0),
            tile: Tile::SouthWest,
        };
        assert_eq!(next_step(&grid, &step), None);
    }

    #[test]
    fn next_step_stops_at_the_edge() {
        let grid = grid("S-");
        let step = Step {
            position: Position::new(1, 0),
            entry: Position::new(0, 0),
            tile: Tile::Horizontal,
        };
        assert_eq!(next_step(&grid, &step), None);
    }

    #[test]
    fn traces_the_square_loop() {
        let traced = trace_loop(&grid(SQUARE)).unwrap();
        assert_eq!(traced.steps(), 8);
        assert_eq!(traced.furthest_steps(), 4);
        assert_eq!(traced.path[0], Position::new(1, 1));
        assert_eq!(traced.start_tile, Tile::SouthEast);
        assert_eq!(traced.positions().len(), traced.path.len());
    }

    #[test]
    fn traces_the_loop_among_junk() {
        let traced = trace_loop(&grid(COMPLEX)).unwrap();
        assert_eq!(traced.steps(), 16);
        assert_eq!(traced.furthest_steps(), 8);
        assert_eq!(traced.start_tile, Tile::SouthEast);
    }

    #[test]
    fn traces_loops_touching_the_far_edges_of_non_square_grids() {
        // 7 columns, 3 rows, loop hugs the right and bottom edges
        let traced = trace_loop(&grid(".....F7\n.....|S\n.....LJ")).unwrap();
        assert_eq!(traced.steps(), 6);
        assert_eq!(traced.start_tile, Tile::Vertical);

        // 3 columns, 6 rows
        let traced = trace_loop(&grid("...\n...\n.F7\n.||\n.|S\n.LJ")).unwrap();
        assert_eq!(traced.steps(), 8);
        assert_eq!(traced.furthest_steps(), 4);
        assert_eq!(traced.start_tile, Tile::Vertical);
    }

    #[test]
    fn start_with_one_connection_is_an_error() {
        let err = trace_loop(&grid(".....\n.S-7.\n...|.\n...J.")).unwrap_err();
        assert_eq!(err, PipeMazeError::StartConnections { found: 1 });
    }

    #[test]
    fn start_with_more_than_two_connections_is_an_error() {
        let err = trace_loop(&grid(".|...\n-S-7.\n.|.|.\n.L-J.")).unwrap_err();
        assert_eq!(err, PipeMazeError::StartConnections { found: 4 });
    }

    #[test]
    fn dead_end_reports_where_the_walk_stopped() {
        // both neighbours connect to S but the `J` turns up into ground
        let err = trace_loop(&grid("S-.\n|..\nL-J")).unwrap_err();
        assert_eq!(err, PipeMazeError::BrokenLoop { x: 2, y: 2 });
    }
}
