use sheetgrid_common::{MAX_COLUMNS, MAX_ROWS, SheetError};

/// Upper bounds applied by builders to the sheets they produce.
///
/// The default matches the largest sheet an A1 reference can address
/// (1,048,576 rows × 16,384 columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetLimits {
    pub max_rows: usize,
    pub max_columns: usize,
}

impl Default for SheetLimits {
    fn default() -> Self {
        Self::new(MAX_ROWS, MAX_COLUMNS)
    }
}

impl SheetLimits {
    pub const fn new(max_rows: usize, max_columns: usize) -> Self {
        Self {
            max_rows,
            max_columns,
        }
    }

    /// No limit beyond addressable memory.
    pub const fn unlimited() -> Self {
        Self::new(usize::MAX, usize::MAX)
    }

    /// Ensure a 0-based cell position fits.
    pub fn check_cell(&self, row: usize, column: usize) -> Result<(), SheetError> {
        if row < self.max_rows && column < self.max_columns {
            Ok(())
        } else {
            Err(self.exceeded(row, column))
        }
    }

    /// Ensure a `rows x columns` extent fits.
    pub fn check_extent(&self, rows: usize, columns: usize) -> Result<(), SheetError> {
        if rows <= self.max_rows && columns <= self.max_columns {
            Ok(())
        } else {
            Err(self.exceeded(rows.saturating_sub(1), columns.saturating_sub(1)))
        }
    }

    fn exceeded(&self, row: usize, column: usize) -> SheetError {
        SheetError::LimitExceeded {
            row,
            column,
            max_rows: self.max_rows,
            max_columns: self.max_columns,
        }
    }
}

/// `rows * columns`, or `CapacityOverflow` when it does not fit a `usize`.
pub(crate) fn cell_capacity(rows: usize, columns: usize) -> Result<usize, SheetError> {
    rows.checked_mul(columns)
        .ok_or(SheetError::CapacityOverflow {
            row_count: rows,
            column_count: columns,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_accept_last_addressable_cell() {
        let limits = SheetLimits::default();
        assert!(limits.check_cell(MAX_ROWS - 1, MAX_COLUMNS - 1).is_ok());
        assert!(limits.check_extent(MAX_ROWS, MAX_COLUMNS).is_ok());
        assert_eq!(
            limits.check_cell(MAX_ROWS, 0),
            Err(SheetError::LimitExceeded {
                row: MAX_ROWS,
                column: 0,
                max_rows: MAX_ROWS,
                max_columns: MAX_COLUMNS,
            })
        );
    }

    #[test]
    fn custom_limits() {
        let limits = SheetLimits::new(2, 3);
        assert!(limits.check_cell(1, 2).is_ok());
        assert!(limits.check_cell(2, 0).is_err());
        assert!(limits.check_extent(3, 1).is_err());
        assert!(SheetLimits::unlimited().check_cell(usize::MAX - 1, 0).is_ok());
    }

    #[test]
    fn capacity_overflow_is_reported() {
        assert_eq!(cell_capacity(3, 4), Ok(12));
        assert!(matches!(
            cell_capacity(usize::MAX, 2),
            Err(SheetError::CapacityOverflow { .. })
        ));
    }
}
