//! Walking out of a memory grid while bytes fall into it.
//!
//! Every step costs the same, so trajectories are ordered by taken steps
//! plus Manhattan distance to the exit which never overestimates the rest.

use std::cmp::Ordering;

use log::{debug, trace, warn};
use predicate_queue::PriorityQueue;
use rustc_hash::FxHashSet;

use crate::error::ParseError;
use crate::grid::{Grid, Position};

/// Size of memory and number of bytes which have already fallen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MemorySpaceConfig {
    pub size: usize,
    pub fallen: usize,
}

impl MemorySpaceConfig {
    pub const fn example() -> Self {
        Self { size: 7, fallen: 12 }
    }

    pub const fn puzzle() -> Self {
        Self {
            size: 71,
            fallen: 1024,
        }
    }
}

/// Parses list of `x,y` lines, `x` is column and `y` is row.
pub fn parse_bytes(input: &str) -> Result<Vec<Position>, ParseError> {
    let mut bytes = Vec::new();
    for (line_idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let invalid = || ParseError::Coordinate {
            line: line_idx,
            text: line.to_owned(),
        };
        let (x, y) = line.split_once(',').ok_or_else(invalid)?;
        let column = x.trim().parse().map_err(|_| invalid())?;
        let row = y.trim().parse().map_err(|_| invalid())?;
        bytes.push(Position { row, column });
    }
    if bytes.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(bytes)
}

/// Path from the start, ordered by steps taken plus estimate of steps left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trajectory {
    positions: Vec<Position>,
    estimate: usize,
}

impl Trajectory {
    fn start(position: Position, exit: Position) -> Self {
        Self {
            positions: vec![position],
            estimate: position.manhattan(exit),
        }
    }

    fn extended(&self, next: Position, exit: Position) -> Self {
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(next);
        Self {
            positions,
            estimate: next.manhattan(exit),
        }
    }

    /// Number of steps, the start position is not a step.
    #[inline]
    pub fn steps(&self) -> usize {
        self.positions.len() - 1
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn last(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    #[inline]
    fn total(&self) -> usize {
        self.steps() + self.estimate
    }
}

impl Ord for Trajectory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total()
            .cmp(&other.total())
            .then_with(|| self.positions.cmp(&other.positions))
    }
}

impl PartialOrd for Trajectory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Square memory with top-left start and bottom-right exit.
#[derive(Clone, Debug)]
pub struct MemorySpace {
    corrupted: Grid<bool>,
    start: Position,
    exit: Position,
}

impl MemorySpace {
    /// Creates memory of `size` x `size` where all `bytes` have fallen.
    /// Bytes outside of memory are ignored.
    pub fn new(size: usize, bytes: &[Position]) -> Self {
        let mut corrupted = Grid::new(size, size, false);
        for &byte in bytes {
            if corrupted.contains(byte) {
                corrupted[byte] = true;
            } else {
                warn!("Byte {:?} fell outside of {}x{} memory", byte, size, size);
            }
        }
        Self {
            corrupted,
            start: Position::new(0, 0),
            exit: Position::new(size.saturating_sub(1), size.saturating_sub(1)),
        }
    }

    /// Creates memory where only first `config.fallen` bytes have fallen.
    pub fn from_config(config: &MemorySpaceConfig, bytes: &[Position]) -> Self {
        let fallen = config.fallen.min(bytes.len());
        Self::new(config.size, &bytes[..fallen])
    }

    #[inline]
    pub fn is_corrupted(&self, position: Position) -> bool {
        self.corrupted.get(position).copied().unwrap_or(true)
    }

    /// Shortest trajectory from start to exit, `None` if exit is unreachable.
    pub fn shortest_path(&self) -> Option<Trajectory> {
        if self.is_corrupted(self.start) {
            debug!("Start {:?} is corrupted", self.start);
            return None;
        }

        let mut queue = PriorityQueue::new(true, vec![Trajectory::start(self.start, self.exit)]);
        let mut visited: FxHashSet<Position> = FxHashSet::default();

        while let Some(trajectory) = queue.pop() {
            let current = trajectory.last();
            // Same cell may be queued by several trajectories, first one is the best.
            if !visited.insert(current) {
                continue;
            }
            trace!("Expanding {:?} after {} steps", current, trajectory.steps());
            if current == self.exit {
                debug!(
                    "Reached exit in {} steps, visited {} cells",
                    trajectory.steps(),
                    visited.len()
                );
                return Some(trajectory);
            }

            for next in self.corrupted.neighbours(current) {
                if !self.corrupted[next] && !visited.contains(&next) {
                    queue.push(trajectory.extended(next, self.exit));
                }
            }
        }

        debug!("Exit is unreachable, visited {} cells", visited.len());
        None
    }
}

/// First byte after whose fall the exit becomes unreachable.
/// `None` if exit stays reachable after all `bytes`.
pub fn first_blocking_byte(size: usize, bytes: &[Position]) -> Option<Position> {
    let reachable = |fallen: usize| {
        MemorySpace::new(size, &bytes[..fallen])
            .shortest_path()
            .is_some()
    };

    if !reachable(0) || reachable(bytes.len()) {
        return None;
    }
    // Exit is reachable after `low` bytes and unreachable after `high`.
    let mut low = 0;
    let mut high = bytes.len();
    while high - low > 1 {
        let middle = low + (high - low) / 2;
        if reachable(middle) {
            low = middle;
        } else {
            high = middle;
        }
    }
    debug!("Byte #{} {:?} blocks the exit", high, bytes[high - 1]);
    Some(bytes[high - 1])
}
