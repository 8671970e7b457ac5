//! Write-side accumulators that materialize into an [`ArraySheet`].
//!
//! Both strategies share the [`SheetBuilder`] contract. Bulk writes
//! (`row`, `column`, `table`, `map`) are default methods that collect their
//! cells into one batch and hand it to [`SheetBuilder::write_all`], so a bulk
//! write either lands completely or leaves the builder untouched.

mod bounded;
mod unbounded;

pub use bounded::BoundedBuilder;
pub use unbounded::UnboundedBuilder;

use sheetgrid_common::{CellValue, IntoCellValue, SheetError};

use crate::ArraySheet;

/// One pending write: `(row, column, normalized value)`.
pub type CellWrite = (usize, usize, Option<CellValue>);

pub trait SheetBuilder {
    /// Name given to the next built sheet.
    fn name(&mut self, name: impl Into<String>) -> &mut Self;

    /// Forget every write and reset the name to `""`.
    fn clear(&mut self) -> &mut Self;

    /// Normalize `value` and store it at `(row, column)`.
    fn value<V: IntoCellValue>(
        &mut self,
        row: usize,
        column: usize,
        value: V,
    ) -> Result<&mut Self, SheetError>;

    /// Store `writes` in order, all or nothing.
    ///
    /// Every position is checked before any cell is stored; on error the
    /// builder is exactly as it was before the call.
    fn write_all(&mut self, writes: Vec<CellWrite>) -> Result<&mut Self, SheetError>;

    /// Materialize the writes so far. The builder stays usable afterwards and
    /// later writes never reach sheets already built.
    fn build(&self) -> Result<ArraySheet, SheetError>;

    /// Write `values` left to right starting at `(row, column)`.
    fn row<I>(&mut self, row: usize, column: usize, values: I) -> Result<&mut Self, SheetError>
    where
        I: IntoIterator,
        I::Item: IntoCellValue,
    {
        let mut writes = Vec::new();
        push_row(&mut writes, row, column, values)?;
        self.write_all(writes)
    }

    /// Write `values` top to bottom starting at `(row, column)`.
    fn column<I>(&mut self, row: usize, column: usize, values: I) -> Result<&mut Self, SheetError>
    where
        I: IntoIterator,
        I::Item: IntoCellValue,
    {
        let mut writes = Vec::new();
        for (i, value) in values.into_iter().enumerate() {
            let r = offset(row, i, (row, column))?;
            writes.push((r, column, value.into_cell_value()));
        }
        self.write_all(writes)
    }

    /// Write each present row of `table` left to right, offset by
    /// `(row, column)`. A `None` row writes nothing.
    fn table<T, R>(&mut self, row: usize, column: usize, table: T) -> Result<&mut Self, SheetError>
    where
        T: IntoIterator<Item = Option<R>>,
        R: IntoIterator,
        R::Item: IntoCellValue,
    {
        let mut writes = Vec::new();
        for (i, values) in table.into_iter().enumerate() {
            if let Some(values) = values {
                let r = offset(row, i, (row, column))?;
                push_row(&mut writes, r, column, values)?;
            }
        }
        self.write_all(writes)
    }

    /// Write each `(key, value)` entry as a two-cell row on successive rows,
    /// in iteration order.
    fn map<M, K, V>(&mut self, row: usize, column: usize, entries: M) -> Result<&mut Self, SheetError>
    where
        M: IntoIterator<Item = (K, V)>,
        K: IntoCellValue,
        V: IntoCellValue,
    {
        let mut writes = Vec::new();
        for (i, (key, value)) in entries.into_iter().enumerate() {
            let r = offset(row, i, (row, column))?;
            push_row(
                &mut writes,
                r,
                column,
                [key.into_cell_value(), value.into_cell_value()],
            )?;
        }
        self.write_all(writes)
    }
}

fn offset(base: usize, by: usize, origin: (usize, usize)) -> Result<usize, SheetError> {
    base.checked_add(by).ok_or(SheetError::IndexOverflow {
        row: origin.0,
        column: origin.1,
    })
}

fn push_row<I>(
    writes: &mut Vec<CellWrite>,
    row: usize,
    column: usize,
    values: I,
) -> Result<(), SheetError>
where
    I: IntoIterator,
    I::Item: IntoCellValue,
{
    for (j, value) in values.into_iter().enumerate() {
        let c = offset(column, j, (row, column))?;
        writes.push((row, c, value.into_cell_value()));
    }
    Ok(())
}

/// Either builder strategy, chosen at runtime.
///
/// Returned by [`ArraySheet::builder_for`] when the extents come from a
/// possibly missing bounds specifier.
#[derive(Debug, Clone)]
pub enum AnyBuilder {
    Bounded(BoundedBuilder),
    Unbounded(UnboundedBuilder),
}

impl AnyBuilder {
    pub fn is_bounded(&self) -> bool {
        matches!(self, AnyBuilder::Bounded(_))
    }
}

impl SheetBuilder for AnyBuilder {
    fn name(&mut self, name: impl Into<String>) -> &mut Self {
        match self {
            AnyBuilder::Bounded(b) => {
                b.name(name);
            }
            AnyBuilder::Unbounded(b) => {
                b.name(name);
            }
        }
        self
    }

    fn clear(&mut self) -> &mut Self {
        match self {
            AnyBuilder::Bounded(b) => {
                b.clear();
            }
            AnyBuilder::Unbounded(b) => {
                b.clear();
            }
        }
        self
    }

    fn value<V: IntoCellValue>(
        &mut self,
        row: usize,
        column: usize,
        value: V,
    ) -> Result<&mut Self, SheetError> {
        match self {
            AnyBuilder::Bounded(b) => {
                b.value(row, column, value)?;
            }
            AnyBuilder::Unbounded(b) => {
                b.value(row, column, value)?;
            }
        }
        Ok(self)
    }

    fn write_all(&mut self, writes: Vec<CellWrite>) -> Result<&mut Self, SheetError> {
        match self {
            AnyBuilder::Bounded(b) => {
                b.write_all(writes)?;
            }
            AnyBuilder::Unbounded(b) => {
                b.write_all(writes)?;
            }
        }
        Ok(self)
    }

    fn build(&self) -> Result<ArraySheet, SheetError> {
        match self {
            AnyBuilder::Bounded(b) => b.build(),
            AnyBuilder::Unbounded(b) => b.build(),
        }
    }
}

impl From<BoundedBuilder> for AnyBuilder {
    fn from(value: BoundedBuilder) -> Self {
        AnyBuilder::Bounded(value)
    }
}

impl From<UnboundedBuilder> for AnyBuilder {
    fn from(value: UnboundedBuilder) -> Self {
        AnyBuilder::Unbounded(value)
    }
}
