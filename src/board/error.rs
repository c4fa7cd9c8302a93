//! Error types for board and search operations.

use std::fmt;

/// Error type for out-of-range square coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Fatal conditions from the search driver.
///
/// An expired deadline mid-search is not an error (the driver falls back to
/// the deepest completed depth); these are the cases where no move can be
/// returned at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The deadline expired before even the first depth finished
    OutOfTime { depth: u32 },
    /// The side to move has no candidate moves at the root
    NoMoves,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::OutOfTime { depth } => {
                write!(f, "Deadline expired before depth {depth} completed; no move available")
            }
            SearchError::NoMoves => {
                write!(f, "No candidate moves at the search root")
            }
        }
    }
}

impl std::error::Error for SearchError {}
