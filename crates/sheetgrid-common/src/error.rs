//! Contract violations surfaced by sheets, cell views, and builders.
//!
//! Every variant is a caller error reported synchronously; nothing in the
//! sheetgrid crates retries or recovers from one.

use thiserror::Error;

use crate::value::CellKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// A read or write addressed a cell outside the declared extents.
    #[error("cell ({row}, {column}) is outside a {row_count}x{column_count} sheet")]
    OutOfBounds {
        row: usize,
        column: usize,
        row_count: usize,
        column_count: usize,
    },

    /// A typed accessor was called on a cell holding another kind.
    #[error("expected a {expected} cell, found {found}")]
    TypeMismatch { expected: CellKind, found: CellKind },

    /// A write or requested extent exceeded the configured sheet limits.
    #[error("cell ({row}, {column}) exceeds sheet limits of {max_rows} rows x {max_columns} columns")]
    LimitExceeded {
        row: usize,
        column: usize,
        max_rows: usize,
        max_columns: usize,
    },

    /// The value buffer length does not match `row_count * column_count`.
    #[error("{len} values cannot fill a {row_count}x{column_count} sheet")]
    InvalidShape {
        row_count: usize,
        column_count: usize,
        len: usize,
    },

    /// A bulk write offset from `(row, column)` ran past `usize::MAX`.
    #[error("bulk write from ({row}, {column}) overflows the index range")]
    IndexOverflow { row: usize, column: usize },

    /// A cursor accessor was called before the cursor was bound to a value.
    #[error("cell cursor is not bound to a value")]
    UnboundCursor,

    /// `row_count * column_count` does not fit in memory addressing.
    #[error("a {row_count}x{column_count} sheet overflows the addressable size")]
    CapacityOverflow {
        row_count: usize,
        column_count: usize,
    },
}

impl SheetError {
    pub fn out_of_bounds(row: usize, column: usize, row_count: usize, column_count: usize) -> Self {
        SheetError::OutOfBounds {
            row,
            column,
            row_count,
            column_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_location() {
        let err = SheetError::out_of_bounds(3, 4, 2, 2);
        assert_eq!(err.to_string(), "cell (3, 4) is outside a 2x2 sheet");

        let err = SheetError::TypeMismatch {
            expected: CellKind::Date,
            found: CellKind::Text,
        };
        assert_eq!(err.to_string(), "expected a date cell, found text");

        let err = SheetError::IndexOverflow {
            row: usize::MAX,
            column: 0,
        };
        assert!(err.to_string().contains("overflows the index range"));
    }
}
