use std::borrow::Cow;
use std::sync::Arc;

use sheetgrid_common::{CellValue, IntoCellValue, SheetBounds, SheetError};

use crate::book::ArrayBook;
use crate::builder::{AnyBuilder, BoundedBuilder, UnboundedBuilder};
use crate::cell::{Cell, CellCursor};
use crate::limits::cell_capacity;
use crate::sheet::Sheet;

/// Dense row-major sheet of normalized values.
///
/// The value buffer is immutable and shared: [`ArraySheet::copy`] and
/// [`ArraySheet::rename`] hand out new sheets over the same `Arc` without
/// copying cells. Slot `row * column_count + column` holds the cell at
/// `(row, column)`; `None` is an absent cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySheet {
    name: String,
    row_count: usize,
    column_count: usize,
    values: Arc<[Option<CellValue>]>,
}

impl ArraySheet {
    /// Wrap an existing buffer, checking `values.len() == row_count * column_count`.
    pub fn new(
        name: impl Into<String>,
        row_count: usize,
        column_count: usize,
        values: Vec<Option<CellValue>>,
    ) -> Result<Self, SheetError> {
        let expected = cell_capacity(row_count, column_count)?;
        if values.len() != expected {
            return Err(SheetError::InvalidShape {
                row_count,
                column_count,
                len: values.len(),
            });
        }
        Ok(Self::from_parts(name.into(), row_count, column_count, values.into()))
    }

    /// A sheet with no rows and no columns.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), 0, 0, Arc::from(Vec::new()))
    }

    pub(crate) fn from_parts(
        name: String,
        row_count: usize,
        column_count: usize,
        values: Arc<[Option<CellValue>]>,
    ) -> Self {
        debug_assert_eq!(values.len(), row_count * column_count);
        Self {
            name,
            row_count,
            column_count,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, SheetError> {
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

    /// Raw value at `(row, column)`; `None` when the cell is absent.
    pub fn cell_value(&self, row: usize, column: usize) -> Result<Option<&CellValue>, SheetError> {
        let idx = self.index(row, column)?;
        Ok(self.values[idx].as_ref())
    }

    /// Typed view of the cell at `(row, column)`; `None` when absent.
    pub fn cell(&self, row: usize, column: usize) -> Result<Option<Cell<'_>>, SheetError> {
        Ok(self.cell_value(row, column)?.map(Cell::new))
    }

    /// Rows in order, each a slice of `column_count` slots.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Option<CellValue>]> + '_ {
        let width = self.column_count;
        (0..self.row_count).map(move |r| &self.values[r * width..(r + 1) * width])
    }

    /// Visit every non-absent cell in row-major order.
    ///
    /// One [`CellCursor`] is rebound to each value in turn and lent to `f`;
    /// call [`CellCursor::current`] to keep a cell past the callback.
    pub fn for_each_cell<'s, E, F>(&'s self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize, usize, &CellCursor<'s>) -> Result<(), E>,
    {
        let mut cursor = CellCursor::new();
        for (row, values) in self.rows().enumerate() {
            for (column, value) in values.iter().enumerate() {
                if let Some(value) = value {
                    f(row, column, cursor.bind(value))?;
                }
            }
        }
        Ok(())
    }

    /// Same sheet under another name.
    ///
    /// Borrows `self` back when the name is unchanged, otherwise shares the
    /// value buffer with a new sheet.
    pub fn rename(&self, name: &str) -> Cow<'_, ArraySheet> {
        if self.name == name {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(Self::from_parts(
                name.to_string(),
                self.row_count,
                self.column_count,
                Arc::clone(&self.values),
            ))
        }
    }

    /// Independent sheet with the same name, extents, and values.
    pub fn copy(&self) -> ArraySheet {
        self.clone()
    }

    /// `true` when both sheets read from the same value buffer.
    pub fn shares_values_with(&self, other: &ArraySheet) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }

    /// Book holding a copy of this sheet as its only sheet.
    pub fn to_book(&self) -> ArrayBook {
        ArrayBook::from_sheets(vec![self.copy()])
    }

    /// Materialize any [`Sheet`] by walking every cell in row-major order.
    pub fn copy_of<S: Sheet + ?Sized>(sheet: &S) -> Result<ArraySheet, SheetError> {
        if let Some(array) = sheet.as_array_sheet() {
            return Ok(array.copy());
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("copy_of", sheet = sheet.name()).entered();

        let row_count = sheet.row_count();
        let column_count = sheet.column_count();
        let mut values = Vec::with_capacity(cell_capacity(row_count, column_count)?);
        for row in 0..row_count {
            for column in 0..column_count {
                values.push(sheet.cell_value(row, column)?.into_cell_value());
            }
        }
        Ok(Self::from_parts(
            sheet.name().to_string(),
            row_count,
            column_count,
            values.into(),
        ))
    }

    /// Build a sheet from possibly ragged rows.
    ///
    /// The column count is the longest row; shorter rows leave trailing cells
    /// absent and a `None` row is entirely absent.
    pub fn copy_of_table<T, R>(name: impl Into<String>, table: T) -> Result<ArraySheet, SheetError>
    where
        T: IntoIterator<Item = Option<R>>,
        R: IntoIterator,
        R::Item: IntoCellValue,
    {
        let rows: Vec<Option<Vec<Option<CellValue>>>> = table
            .into_iter()
            .map(|row| row.map(|r| r.into_iter().map(IntoCellValue::into_cell_value).collect()))
            .collect();
        let row_count = rows.len();
        let column_count = rows.iter().flatten().map(Vec::len).max().unwrap_or(0);

        let mut values = vec![None; cell_capacity(row_count, column_count)?];
        for (i, row) in rows.into_iter().enumerate() {
            if let Some(row) = row {
                let start = i * column_count;
                for (j, value) in row.into_iter().enumerate() {
                    values[start + j] = value;
                }
            }
        }
        Ok(Self::from_parts(name.into(), row_count, column_count, values.into()))
    }

    /// Builder for sheets whose extents are discovered from the writes.
    pub fn builder() -> UnboundedBuilder {
        UnboundedBuilder::new()
    }

    /// Builder pre-sized to `row_count x column_count`.
    pub fn bounded_builder(
        row_count: usize,
        column_count: usize,
    ) -> Result<BoundedBuilder, SheetError> {
        BoundedBuilder::new(row_count, column_count)
    }

    /// Pick a builder from an optional `"<topLeft>:<bottomRight>"` specifier.
    ///
    /// A valid bottom-right reference yields a bounded builder large enough to
    /// hold it; anything else falls back to an unbounded builder.
    pub fn builder_for(bounds: Option<&str>) -> AnyBuilder {
        let Some(text) = bounds else {
            return AnyBuilder::Unbounded(Self::builder());
        };
        match SheetBounds::parse_extent(text) {
            Ok((rows, columns)) => match Self::bounded_builder(rows, columns) {
                Ok(builder) => AnyBuilder::Bounded(builder),
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(bounds = text, error = %_err, "bounded builder rejected");
                    AnyBuilder::Unbounded(Self::builder())
                }
            },
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(bounds = text, error = %_err, "unparseable sheet bounds");
                AnyBuilder::Unbounded(Self::builder())
            }
        }
    }
}

impl Sheet for ArraySheet {
    type Value<'a> = Option<&'a CellValue>;

    fn name(&self) -> &str {
        ArraySheet::name(self)
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn cell_value(&self, row: usize, column: usize) -> Result<Self::Value<'_>, SheetError> {
        ArraySheet::cell_value(self, row, column)
    }

    fn as_array_sheet(&self) -> Option<&ArraySheet> {
        Some(self)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    #[derive(Serialize)]
    struct ArraySheetRef<'a> {
        name: &'a str,
        row_count: usize,
        column_count: usize,
        values: &'a [Option<CellValue>],
    }

    #[derive(Deserialize)]
    struct ArraySheetRepr {
        name: String,
        row_count: usize,
        column_count: usize,
        values: Vec<Option<CellValue>>,
    }

    impl Serialize for ArraySheet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            ArraySheetRef {
                name: &self.name,
                row_count: self.row_count,
                column_count: self.column_count,
                values: &self.values,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ArraySheet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = ArraySheetRepr::deserialize(deserializer)?;
            ArraySheet::new(repr.name, repr.row_count, repr.column_count, repr.values)
                .map_err(D::Error::custom)
        }
    }
}
