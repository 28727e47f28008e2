//! Puzzle searches driven by [`predicate_queue::PriorityQueue`].
//!
//! - [`memory_space`]: shortest walk over a grid with uniform step cost (A*).
//! - [`reindeer_maze`]: cheapest walk where turning costs much more than stepping.
//! - [`stones`]: counting stones after blinks, work ordered by remaining lifespan.
//!
//! Every parser returns [`ParseError`] on malformed input,
//! every search returns `None` when there is no answer.

pub mod error;
pub mod grid;
pub mod memory_space;
pub mod reindeer_maze;
pub mod stones;

pub use crate::error::ParseError;

#[cfg(test)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
