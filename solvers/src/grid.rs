//! Grid vocabulary shared by the searches.

use std::ops::{Index, IndexMut};

#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Copy, Clone)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    #[inline]
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// Neighbour in `direction` or `None` if it would have negative coordinate.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (d_row, d_column) = direction.delta();
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            column: self.column.checked_add_signed(d_column)?,
        })
    }
}

#[derive(Eq, PartialEq, Debug, Hash, Copy, Clone)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Row and column change of one step.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    #[inline]
    pub const fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    #[inline]
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }
}

/// Rectangular grid stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Box<[T]>,
}

impl<T> Grid<T> {
    pub fn new(rows: usize, columns: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows,
            columns,
            cells: vec![fill; rows * columns].into_boxed_slice(),
        }
    }

    /// ### Panics
    ///
    /// Panics if `cells` length is not `rows * columns`.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            rows * columns,
            "Grid {}x{} cannot hold {} cells",
            rows,
            columns,
            cells.len()
        );
        Self {
            rows,
            columns,
            cells: cells.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<&T> {
        if self.contains(position) {
            Some(&self.cells[self.offset(position)])
        } else {
            None
        }
    }

    /// In-bounds positions one step away from `position`.
    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| position.step(direction))
            .filter(move |&next| self.contains(next))
    }

    #[inline(always)]
    fn offset(&self, position: Position) -> usize {
        self.columns * position.row + position.column
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, index: Position) -> &Self::Output {
        assert!(self.contains(index), "Position {:?} is out of grid", index);
        &self.cells[self.offset(index)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        assert!(self.contains(index), "Position {:?} is out of grid", index);
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}
