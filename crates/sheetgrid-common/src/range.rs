use std::fmt;

use thiserror::Error;

use crate::coord::{A1ParseError, CellCoord};

/// Errors raised while reading a `"<topLeft>:<bottomRight>"` specifier.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BoundsError {
    #[error("sheet bounds '{0}' must contain exactly one ':'")]
    Malformed(String),
    #[error("invalid top-left reference: {0}")]
    TopLeft(#[source] A1ParseError),
    #[error("invalid bottom-right reference: {0}")]
    BottomRight(#[source] A1ParseError),
    #[error("sheet bounds must be ordered so the start is above/left of the end")]
    RangeOrder,
}

/// Inclusive rectangular area of a sheet, as declared by a file format
/// (for example an ODS `table:range` or an XLSX `dimension`).
///
/// Only [`SheetBounds::new`] and [`SheetBounds::parse`] construct one, so the
/// top-left corner never lies below or right of the bottom-right corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SheetBounds {
    top_left: CellCoord,
    bottom_right: CellCoord,
}

impl SheetBounds {
    pub fn new(top_left: CellCoord, bottom_right: CellCoord) -> Result<Self, BoundsError> {
        if top_left.row() > bottom_right.row() || top_left.col() > bottom_right.col() {
            return Err(BoundsError::RangeOrder);
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn top_left(&self) -> CellCoord {
        self.top_left
    }

    pub fn bottom_right(&self) -> CellCoord {
        self.bottom_right
    }

    /// Parse both references strictly.
    pub fn parse(text: &str) -> Result<Self, BoundsError> {
        let (first, second) = split_references(text)?;
        let top_left = CellCoord::parse_a1(first).map_err(BoundsError::TopLeft)?;
        let bottom_right = CellCoord::parse_a1(second).map_err(BoundsError::BottomRight)?;
        Self::new(top_left, bottom_right)
    }

    /// Extent `(rows, columns)` needed to hold every cell up to the
    /// bottom-right reference, counted from `A1`.
    ///
    /// Only the bottom-right reference has to be valid: the top-left corner
    /// does not change how large a sheet starting at `A1` must be.
    pub fn parse_extent(text: &str) -> Result<(usize, usize), BoundsError> {
        let (_, second) = split_references(text)?;
        let bottom_right = CellCoord::parse_a1(second).map_err(BoundsError::BottomRight)?;
        Ok((
            bottom_right.row() as usize + 1,
            bottom_right.col() as usize + 1,
        ))
    }

    /// Width of the area in cells (inclusive bounds).
    pub fn width(&self) -> u32 {
        self.bottom_right.col() - self.top_left.col() + 1
    }

    /// Height of the area in cells (inclusive bounds).
    pub fn height(&self) -> u32 {
        self.bottom_right.row() - self.top_left.row() + 1
    }

    pub fn extent(&self) -> (usize, usize) {
        (
            self.bottom_right.row() as usize + 1,
            self.bottom_right.col() as usize + 1,
        )
    }
}

impl fmt::Display for SheetBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.top_left, self.bottom_right)
    }
}

fn split_references(text: &str) -> Result<(&str, &str), BoundsError> {
    let mut parts = text.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(BoundsError::Malformed(text.to_string())),
    }
}
