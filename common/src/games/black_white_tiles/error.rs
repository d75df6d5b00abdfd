#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("board dimensions must be positive, got {length}x{width}")]
    InvalidDimension { length: i64, width: i64 },
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
    #[error("scramble count must not be negative, got {0}")]
    InvalidCount(i64),
    #[error("move ({row}, {col}) is outside the {length}x{width} board")]
    OutOfBounds {
        row: i64,
        col: i64,
        length: usize,
        width: usize,
    },
    #[error("grid must contain at least one row")]
    EmptyGrid,
    #[error("grid row {row} has {actual} tiles, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("`{field}` is {value}, which exceeds the maximum of {max}")]
    LimitExceeded {
        field: &'static str,
        value: i64,
        max: i64,
    },
}
