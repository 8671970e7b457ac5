//! A1-style cell coordinates.
//!
//! `CellCoord` is a 0-based (row, column) position with the same limits as
//! common spreadsheet applications: 1,048,576 rows × 16,384 columns. Anchor
//! flags record `$A$1` markers so a parsed reference prints back unchanged.

use core::fmt;
use std::str::FromStr;

use thiserror::Error;

const ROW_BITS: u32 = 20;
const COL_BITS: u32 = 14;

/// Maximum number of rows addressable by an A1 reference.
pub const MAX_ROWS: usize = 1 << ROW_BITS;
/// Maximum number of columns addressable by an A1 reference.
pub const MAX_COLUMNS: usize = 1 << COL_BITS;

/// Errors returned when parsing an A1 reference.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum A1ParseError {
    #[error("empty cell reference")]
    Empty,
    #[error("cell reference '{0}' has no column letters")]
    MissingColumn(String),
    #[error("cell reference '{0}' has no row number")]
    MissingRow(String),
    #[error("cell reference '{0}' has row 0; rows are 1-based")]
    ZeroRow(String),
    #[error("unexpected trailing input in cell reference '{0}'")]
    TrailingInput(String),
    #[error("row {0} exceeds the 1048576 row limit")]
    RowOverflow(u64),
    #[error("column '{0}' exceeds the 16384 column limit")]
    ColOverflow(String),
}

/// 0-based cell coordinate with anchor flags.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    row: u32,
    col: u32,
    row_abs: bool,
    col_abs: bool,
}

impl CellCoord {
    /// Construct a relative coordinate, panicking if values exceed the limits.
    pub fn new(row: u32, col: u32) -> Self {
        assert!((row as usize) < MAX_ROWS, "Row {row} exceeds {ROW_BITS} bits");
        assert!((col as usize) < MAX_COLUMNS, "Col {col} exceeds {COL_BITS} bits");
        Self {
            row,
            col,
            row_abs: false,
            col_abs: false,
        }
    }

    #[inline(always)]
    pub fn row(self) -> u32 {
        self.row
    }

    #[inline(always)]
    pub fn col(self) -> u32 {
        self.col
    }

    #[inline(always)]
    pub fn row_abs(self) -> bool {
        self.row_abs
    }

    #[inline(always)]
    pub fn col_abs(self) -> bool {
        self.col_abs
    }

    #[inline(always)]
    pub fn with_row_abs(mut self, abs: bool) -> Self {
        self.row_abs = abs;
        self
    }

    #[inline(always)]
    pub fn with_col_abs(mut self, abs: bool) -> Self {
        self.col_abs = abs;
        self
    }

    /// Parse `B3`, `$B$3`, `B$3` or `$B3`.
    pub fn parse_a1(reference: &str) -> Result<Self, A1ParseError> {
        let s = reference.trim();
        if s.is_empty() {
            return Err(A1ParseError::Empty);
        }
        let bytes = s.as_bytes();
        let mut pos = 0;

        let col_abs = bytes.first() == Some(&b'$');
        if col_abs {
            pos += 1;
        }
        let letters_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_uppercase() {
            pos += 1;
        }
        let letters = &s[letters_start..pos];
        if letters.is_empty() {
            return Err(A1ParseError::MissingColumn(s.to_string()));
        }

        let row_abs = bytes.get(pos) == Some(&b'$');
        if row_abs {
            pos += 1;
        }
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let digits = &s[digits_start..pos];
        if digits.is_empty() {
            return Err(A1ParseError::MissingRow(s.to_string()));
        }
        if pos != bytes.len() {
            return Err(A1ParseError::TrailingInput(s.to_string()));
        }

        let col = letters_to_column_index(letters)
            .filter(|c| (*c as usize) < MAX_COLUMNS)
            .ok_or_else(|| A1ParseError::ColOverflow(letters.to_string()))?;
        let row1: u64 = digits
            .parse()
            .map_err(|_| A1ParseError::RowOverflow(u64::MAX))?;
        if row1 == 0 {
            return Err(A1ParseError::ZeroRow(s.to_string()));
        }
        if row1 > MAX_ROWS as u64 {
            return Err(A1ParseError::RowOverflow(row1));
        }

        Ok(Self {
            row: (row1 - 1) as u32,
            col,
            row_abs,
            col_abs,
        })
    }

    pub fn col_to_letters(col: u32) -> String {
        column_to_letters(col)
    }

    pub fn letters_to_col(s: &str) -> Option<u32> {
        letters_to_column_index(s)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col_abs {
            write!(f, "$")?;
        }
        write!(f, "{}", column_to_letters(self.col))?;
        if self.row_abs {
            write!(f, "$")?;
        }
        write!(f, "{}", self.row + 1)
    }
}

impl FromStr for CellCoord {
    type Err = A1ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s)
    }
}

impl From<CellCoord> for (u32, u32) {
    fn from(coord: CellCoord) -> Self {
        (coord.row, coord.col)
    }
}

fn column_to_letters(mut col: u32) -> String {
    let mut buf = Vec::new();
    loop {
        let rem = (col % 26) as u8;
        buf.push(char::from(b'A' + rem));
        col /= 26;
        if col == 0 {
            break;
        }
        col -= 1;
    }
    buf.iter().rev().collect()
}

fn letters_to_column_index(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    let mut col: u32 = 0;
    for (idx, ch) in s.bytes().enumerate() {
        if !ch.is_ascii_uppercase() {
            return None;
        }
        let val = (ch - b'A') as u32;
        col = col.checked_mul(26)?;
        col = col.checked_add(val)?;
        if idx != s.len() - 1 {
            col = col.checked_add(1)?;
        }
    }
    Some(col)
}
