use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowError {
    EmptyTitle,
    InvalidDim,
    DimOutOfBounds,
    InvalidOpacity,
    UnknownWindow,
}

impl fmt::Display for WindowError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "window title must not be empty"),
            Self::InvalidDim => write!(f, "window dimensions must be positive"),
            Self::DimOutOfBounds => write!(f, "dimensions fall outside the permitted bounds"),
            Self::InvalidOpacity => write!(f, "opacity must lie within [0, 1]"),
            Self::UnknownWindow => write!(f, "no window is registered under the given id"),
        }
    }
}

impl Error for WindowError {}
