//! This is priority queue with pluggable ordering predicate.
//!
//! It uses own implementation of binary heap over `Vec`.
//!
//! Which element has more priority is decided by an [`Order`]:
//! either [`Natural`] order of values (ascending or descending)
//! or arbitrary closure wrapped in [`ByPredicate`].
//!
//! Popping returns element with biggest priority.
//! Pushing adds element to queue.
//! Bounded pushing keeps only most prioritized elements.
//! Also it is possible to remove element by value.
//!
//! Pop and push have ***O(log n)*** time complexity;
//! peek is ***O(1)***; bounded push and remove by value are ***O(n)***.
//!
//! # Examples
//!
//! This is implementation of [A* algorithm][a_star] for 2D grid.
//! Each cell in grid has the cost of entering it.
//!
//! Queue keeps candidate paths ordered by real cost plus
//! Manhattan distance to target, the cheapest one is expanded first.
//! Unlike keyed queues, same cell can be pushed several times,
//! so outdated candidates are skipped when popped.
//!
//! [a_star]: https://en.wikipedia.org/wiki/A*_search_algorithm
//! [`Order`]: trait.Order.html
//! [`Natural`]: struct.Natural.html
//! [`ByPredicate`]: struct.ByPredicate.html
//!
//! ```
//! use predicate_queue::PriorityQueue;
//! use std::collections::HashSet;
//! use std::ops::Index;
//!
//! struct Field {
//!     rows: usize,
//!     columns: usize,
//!     costs: Box<[u32]>,
//! }
//!
//! #[derive(Eq, PartialEq, Debug, Hash, Copy, Clone)]
//! struct Position {
//!     row: usize,
//!     column: usize,
//! }
//!
//! impl Index<Position> for Field {
//!     type Output = u32;
//!
//!     fn index(&self, index: Position) -> &Self::Output {
//!         &self.costs[self.columns * index.row + index.column]
//!     }
//! }
//!
//! // From cell we can move upper, right, bottom and left
//! fn get_neighbors(pos: Position, field: &Field) -> Vec<Position> {
//!     let mut items = Vec::with_capacity(4);
//!     if pos.row > 0 {
//!         items.push(Position { row: pos.row - 1, column: pos.column });
//!     }
//!     if pos.row + 1 < field.rows {
//!         items.push(Position { row: pos.row + 1, column: pos.column });
//!     }
//!     if pos.column > 0 {
//!         items.push(Position { row: pos.row, column: pos.column - 1 });
//!     }
//!     if pos.column + 1 < field.columns {
//!         items.push(Position { row: pos.row, column: pos.column + 1 });
//!     }
//!     items
//! }
//!
//! #[derive(Copy, Clone, Debug)]
//! struct Candidate {
//!     position: Position,
//!     real: u32,
//!     total: u32,
//! }
//!
//! fn find_path(start: Position, target: Position, field: &Field) -> Option<u32> {
//!     let calc_heuristic = |pos: Position| -> u32 {
//!         ((target.row as isize - pos.row as isize).abs()
//!             + (target.column as isize - pos.column as isize).abs()) as u32
//!     };
//!
//!     // Already handled this points
//!     let mut closed_set: HashSet<Position> = HashSet::new();
//!     // Candidate with bigger total cost is less important.
//!     let mut available = PriorityQueue::with_predicate(
//!         |a: &Candidate, b: &Candidate| a.total > b.total,
//!         vec![Candidate { position: start, real: 0, total: calc_heuristic(start) }],
//!     );
//!     while let Some(current) = available.pop() {
//!         // We have reached target
//!         if current.position == target {
//!             return Some(current.real);
//!         }
//!         // Pushed several times, cheapest one already handled
//!         if !closed_set.insert(current.position) {
//!             continue;
//!         }
//!
//!         for next in get_neighbors(current.position, &field).into_iter()
//!             .filter(|x| !closed_set.contains(x))
//!             {
//!                 let real = field[next] + current.real;
//!                 let total = real + calc_heuristic(next);
//!                 available.push(Candidate { position: next, real, total });
//!             }
//!     }
//!     None
//! }
//!
//!let field = Field {
//!    rows: 4,
//!    columns: 4,
//!    costs: vec![
//!        1, 3, 3, 6, //
//!        4, 4, 3, 8, //
//!        3, 1, 2, 4, //
//!        4, 8, 9, 4, //
//!    ].into_boxed_slice(),
//!};
//!
//!let start = Position { row: 0, column: 0 };
//!let end = Position { row: 3, column: 3 };
//!assert_eq!(find_path(start, end, &field), Some(18));
//! ```
//!

mod binary_heap;
mod order;
mod priority_queue;

pub use crate::order::{ByPredicate, Natural, Order};
pub use crate::priority_queue::{PriorityQueue, PriorityQueueBorrowIter, PriorityQueueIterator};
