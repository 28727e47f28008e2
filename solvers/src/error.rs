use std::fmt::Display;

/// Error returned by puzzle input parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input contains nothing to solve.
    Empty,
    /// Line of coordinate list is not `x,y` pair of non-negative numbers.
    Coordinate { line: usize, text: String },
    /// Map contains unknown symbol.
    Tile { row: usize, column: usize, tile: char },
    /// Map row has length different from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Map lacks required marker, e.g. start or end tile.
    Missing(&'static str),
    /// Map has required marker more than once.
    Duplicate(&'static str),
    /// Stone engraving is not a non-negative number.
    Stone(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ParseError::Empty => write!(f, "Input is empty"),
            ParseError::Coordinate { line, text } => {
                write!(f, "Invalid coordinate {:?} at line {}", text, line + 1)
            }
            ParseError::Tile { row, column, tile } => {
                write!(f, "Unknown tile {:?} at row {} column {}", tile, row, column)
            }
            ParseError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has length {} while {} was expected",
                row, found, expected
            ),
            ParseError::Missing(what) => write!(f, "Map has no {}", what),
            ParseError::Duplicate(what) => write!(f, "Map has more than one {}", what),
            ParseError::Stone(text) => write!(f, "Invalid stone {:?}", text),
        }
    }
}

impl std::error::Error for ParseError {}
