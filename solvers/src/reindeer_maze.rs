//! Cheapest walk through a maze where turning costs more than stepping.
//!
//! Search state is position together with facing direction.
//! Stepping forward costs [`FORWARD_COST`], turning by 90 degrees costs [`TURN_COST`].

use log::{debug, trace};
use predicate_queue::PriorityQueue;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::ParseError;
use crate::grid::{Direction, Grid, Position};

pub const FORWARD_COST: u64 = 1;
pub const TURN_COST: u64 = 1000;

#[derive(Eq, PartialEq, Debug, Hash, Copy, Clone)]
pub struct State {
    pub position: Position,
    pub facing: Direction,
}

#[derive(Copy, Clone, Debug)]
struct Node {
    state: State,
    score: u64,
    from: Option<State>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReindeerMaze {
    walls: Grid<bool>,
    start: Position,
    end: Position,
}

impl ReindeerMaze {
    /// Parses maze of `#` walls, `.` floor, single `S` start and single `E` end.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let columns = rows.first().ok_or(ParseError::Empty)?.chars().count();

        let mut cells = Vec::with_capacity(rows.len() * columns);
        let mut start = None;
        let mut end = None;
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: columns,
                    found,
                });
            }
            for (column, tile) in line.chars().enumerate() {
                let position = Position::new(row, column);
                let marker = match tile {
                    'S' => &mut start,
                    'E' => &mut end,
                    '#' | '.' => {
                        cells.push(tile == '#');
                        continue;
                    }
                    _ => return Err(ParseError::Tile { row, column, tile }),
                };
                if marker.replace(position).is_some() {
                    let what = if tile == 'S' { "start" } else { "end" };
                    return Err(ParseError::Duplicate(what));
                }
                cells.push(false);
            }
        }

        Ok(Self {
            walls: Grid::from_cells(rows.len(), columns, cells),
            start: start.ok_or(ParseError::Missing("start"))?,
            end: end.ok_or(ParseError::Missing("end"))?,
        })
    }

    /// Reindeer always starts facing east.
    #[inline]
    pub fn start(&self) -> State {
        State {
            position: self.start,
            facing: Direction::East,
        }
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    #[inline]
    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.get(position).copied().unwrap_or(true)
    }

    /// States reachable by single move together with the move cost.
    fn moves(&self, state: State) -> impl Iterator<Item = (State, u64)> {
        let forward = state
            .position
            .step(state.facing)
            .filter(|&next| !self.is_wall(next))
            .map(|position| {
                let next = State {
                    position,
                    facing: state.facing,
                };
                (next, FORWARD_COST)
            });
        let turns = [state.facing.clockwise(), state.facing.counter_clockwise()]
            .into_iter()
            .map(move |facing| {
                let next = State {
                    position: state.position,
                    facing,
                };
                (next, TURN_COST)
            });
        forward.into_iter().chain(turns)
    }

    /// Score of the cheapest walk from start to end.
    pub fn lowest_score(&self) -> Option<u64> {
        // Node with bigger score is less important.
        let mut queue = PriorityQueue::with_predicate(
            |a: &Node, b: &Node| a.score > b.score,
            vec![Node {
                state: self.start(),
                score: 0,
                from: None,
            }],
        );
        let mut visited: FxHashSet<State> = FxHashSet::default();

        while let Some(node) = queue.pop() {
            if !visited.insert(node.state) {
                continue;
            }
            trace!("Expanding {:?} with score {}", node.state, node.score);
            if node.state.position == self.end {
                debug!(
                    "Lowest score is {}, visited {} states",
                    node.score,
                    visited.len()
                );
                return Some(node.score);
            }
            for (state, cost) in self.moves(node.state) {
                if !visited.contains(&state) {
                    queue.push(Node {
                        state,
                        score: node.score + cost,
                        from: None,
                    });
                }
            }
        }

        debug!("End is unreachable, visited {} states", visited.len());
        None
    }

    /// Number of tiles which are part of at least one cheapest walk.
    pub fn best_path_tiles(&self) -> Option<usize> {
        let mut queue = PriorityQueue::with_predicate(
            |a: &Node, b: &Node| a.score > b.score,
            vec![Node {
                state: self.start(),
                score: 0,
                from: None,
            }],
        );
        let mut best: FxHashMap<State, u64> = FxHashMap::default();
        // Every state through which cheapest walk to the key state can come.
        let mut predecessors: FxHashMap<State, Vec<State>> = FxHashMap::default();
        let mut end_score = None;

        while let Some(node) = queue.pop() {
            if end_score.map_or(false, |score| node.score > score) {
                break;
            }
            match best.get(&node.state) {
                Some(&score) if score < node.score => continue,
                Some(_) => {
                    // Equally cheap alternative, already expanded.
                    predecessors
                        .entry(node.state)
                        .or_default()
                        .extend(node.from);
                    continue;
                }
                None => {}
            }
            best.insert(node.state, node.score);
            predecessors.entry(node.state).or_default().extend(node.from);

            if node.state.position == self.end {
                end_score = Some(node.score);
                continue;
            }
            for (state, cost) in self.moves(node.state) {
                let score = node.score + cost;
                if best.get(&state).map_or(true, |&known| score <= known) {
                    queue.push(Node {
                        state,
                        score,
                        from: Some(node.state),
                    });
                }
            }
        }

        let end_score = end_score?;
        let mut stack: Vec<State> = best
            .iter()
            .filter(|(state, &score)| state.position == self.end && score == end_score)
            .map(|(&state, _)| state)
            .collect();
        let mut seen: FxHashSet<State> = stack.iter().copied().collect();
        while let Some(state) = stack.pop() {
            for &previous in predecessors.get(&state).into_iter().flatten() {
                if seen.insert(previous) {
                    stack.push(previous);
                }
            }
        }

        let tiles: FxHashSet<Position> = seen.into_iter().map(|state| state.position).collect();
        debug!(
            "{} tiles lie on walks with score {}, settled {} states",
            tiles.len(),
            end_score,
            best.len()
        );
        Some(tiles.len())
    }
}
