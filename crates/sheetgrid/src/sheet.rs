use sheetgrid_common::{IntoCellValue, SheetError};

use crate::ArraySheet;

/// Read-side contract for anything that looks like a sheet.
///
/// Format readers implement this to hand their sheets to
/// [`ArraySheet::copy_of`] without this crate knowing the file format.
/// Indices are 0-based; `cell_value` must fail with
/// [`SheetError::OutOfBounds`] outside `row_count() x column_count()`.
pub trait Sheet {
    /// Raw value type, normalized by the consumer.
    type Value<'a>: IntoCellValue
    where
        Self: 'a;

    fn name(&self) -> &str;
    fn row_count(&self) -> usize;
    fn column_count(&self) -> usize;
    fn cell_value(&self, row: usize, column: usize) -> Result<Self::Value<'_>, SheetError>;

    /// Returns `Some` when the sheet already is an [`ArraySheet`].
    fn as_array_sheet(&self) -> Option<&ArraySheet> {
        None
    }
}
