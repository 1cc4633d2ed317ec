//! Breadth first exploration of the open cells of a maze

use crate::Maze;
use log::trace;
use std::collections::{HashSet, VecDeque};

/// Cell coordinates `(x, y)`, y grows to the north
pub type Cell = (i32, i32);

/// Cells processed by a single step of an interactive fill
pub const DEFAULT_BATCH: usize = 2000;

/// Flood fill of the cells reachable from a start cell without crossing walls.
/// Walls are defined on every coordinate so the fill is not bounded by [Maze::range],
/// it advances in batches with [FloodFill::step].
pub struct FloodFill<'a> {
    maze: &'a Maze,
    visited: HashSet<Cell>,
    queue: VecDeque<Cell>,
}

impl<'a> FloodFill<'a> {
    /// Start a fill at `start`
    pub fn new(maze: &'a Maze, start: Cell) -> FloodFill<'a> {
        let mut fill = FloodFill {
            maze,
            visited: HashSet::new(),
            queue: VecDeque::new(),
        };
        fill.visit(start);
        fill
    }

    fn visit(&mut self, cell: Cell) {
        if self.visited.insert(cell) {
            self.queue.push_back(cell);
        }
    }

    /// Process up to `batch` queued cells, returns how many were processed
    pub fn step(&mut self, batch: usize) -> usize {
        let mut count = 0;
        while count < batch {
            let (x, y) = match self.queue.pop_front() {
                Some(cell) => cell,
                None => break,
            };
            count += 1;

            if !self.maze.wall_north(x, y) {
                self.visit((x, y.wrapping_add(1)));
            }
            if !self.maze.wall_east(x, y) {
                self.visit((x.wrapping_add(1), y));
            }
            if !self.maze.wall_south(x, y) {
                self.visit((x, y.wrapping_sub(1)));
            }
            if !self.maze.wall_west(x, y) {
                self.visit((x.wrapping_sub(1), y));
            }
        }
        trace!(
            "flood fill step: {} processed, {} visited, {} queued",
            count,
            self.visited.len(),
            self.queue.len()
        );
        count
    }

    /// true when every reachable cell has been visited
    pub fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    /// true if `cell` has been reached
    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Number of cells reached so far
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// true if no cell has been reached
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Number of reached cells still waiting to be processed
    pub fn frontier(&self) -> usize {
        self.queue.len()
    }

    /// Cells reached so far, in no particular order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.visited.iter()
    }
}
