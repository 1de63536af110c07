use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    JaggedGrid { row: usize, expected: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JaggedGrid { row, expected, found } => {
                write!(f, "jagged grid: row {} has {} cells, expected {}", row, found, expected)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
