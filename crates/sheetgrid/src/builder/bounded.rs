use sheetgrid_common::{CellValue, IntoCellValue, SheetError};

use super::{CellWrite, SheetBuilder};
use crate::ArraySheet;
use crate::limits::{SheetLimits, cell_capacity};

/// Builder over a pre-allocated `row_count x column_count` buffer.
///
/// Writes index the buffer directly; anything outside the fixed extents is
/// rejected with [`SheetError::OutOfBounds`].
#[derive(Debug, Clone)]
pub struct BoundedBuilder {
    name: String,
    row_count: usize,
    column_count: usize,
    values: Vec<Option<CellValue>>,
}

impl BoundedBuilder {
    /// Pre-size for `row_count x column_count`, within the default limits.
    pub fn new(row_count: usize, column_count: usize) -> Result<Self, SheetError> {
        Self::with_limits(row_count, column_count, SheetLimits::default())
    }

    pub fn with_limits(
        row_count: usize,
        column_count: usize,
        limits: SheetLimits,
    ) -> Result<Self, SheetError> {
        limits.check_extent(row_count, column_count)?;
        let len = cell_capacity(row_count, column_count)?;
        Ok(Self {
            name: String::new(),
            row_count,
            column_count,
            values: vec![None; len],
        })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    fn slot(&self, row: usize, column: usize) -> Result<usize, SheetError> {
        if row < self.row_count && column < self.column_count {
            Ok(row * self.column_count + column)
        } else {
            Err(SheetError::out_of_bounds(
                row,
                column,
                self.row_count,
                self.column_count,
            ))
        }
    }
}

impl SheetBuilder for BoundedBuilder {
    fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    fn clear(&mut self) -> &mut Self {
        self.values.fill(None);
        self.name.clear();
        self
    }

    fn value<V: IntoCellValue>(
        &mut self,
        row: usize,
        column: usize,
        value: V,
    ) -> Result<&mut Self, SheetError> {
        let slot = self.slot(row, column)?;
        self.values[slot] = value.into_cell_value();
        Ok(self)
    }

    fn write_all(&mut self, writes: Vec<CellWrite>) -> Result<&mut Self, SheetError> {
        let slots = writes
            .iter()
            .map(|(row, column, _)| self.slot(*row, *column))
            .collect::<Result<Vec<_>, _>>()?;
        for (slot, (_, _, value)) in slots.into_iter().zip(writes) {
            self.values[slot] = value;
        }
        Ok(self)
    }

    fn build(&self) -> Result<ArraySheet, SheetError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = self.row_count,
            columns = self.column_count,
            "built bounded sheet"
        );
        Ok(ArraySheet::from_parts(
            self.name.clone(),
            self.row_count,
            self.column_count,
            self.values.as_slice().into(),
        ))
    }
}
