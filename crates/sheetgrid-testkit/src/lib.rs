//! Fixtures for exercising sheetgrid from tests.
//!
//! [`MapSheet`] stands in for a format reader: it stores cells sparsely the
//! way a parsed file does and implements [`Sheet`] so tests can feed it to
//! [`ArraySheet::copy_of`].

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use sheetgrid::{ArraySheet, CellValue, Sheet, SheetBuilder, SheetError};

/// Sparse sheet keyed by 0-based `(row, column)`.
#[derive(Clone, Debug, Default)]
pub struct MapSheet {
    name: String,
    row_count: usize,
    column_count: usize,
    cells: BTreeMap<(usize, usize), CellValue>,
}

impl MapSheet {
    pub fn new(name: impl Into<String>, row_count: usize, column_count: usize) -> Self {
        Self {
            name: name.into(),
            row_count,
            column_count,
            cells: BTreeMap::new(),
        }
    }

    /// Insert a cell; panics when outside the declared extents.
    pub fn with_cell(mut self, row: usize, column: usize, value: impl Into<CellValue>) -> Self {
        assert!(
            row < self.row_count && column < self.column_count,
            "({row}, {column}) outside {}x{}",
            self.row_count,
            self.column_count
        );
        self.cells.insert((row, column), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Sheet for MapSheet {
    type Value<'a> = Option<&'a CellValue>;

    fn name(&self) -> &str {
        &self.name
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn cell_value(&self, row: usize, column: usize) -> Result<Self::Value<'_>, SheetError> {
        if row >= self.row_count || column >= self.column_count {
            return Err(SheetError::out_of_bounds(
                row,
                column,
                self.row_count,
                self.column_count,
            ));
        }
        Ok(self.cells.get(&(row, column)))
    }
}

/// 2012-01-01 00:00:00.
pub fn jan_2012() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2012, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

/// Two named sheets written through one reused builder: `"first"` with a
/// row at `(1, 1)` and `"second"` with a row at `(3, 0)`.
pub fn mixed_sheets() -> (ArraySheet, ArraySheet) {
    let mut builder = ArraySheet::builder();
    let first = builder
        .clear()
        .name("first")
        .row(
            1,
            1,
            [
                CellValue::from("hello"),
                CellValue::from(3.5),
                CellValue::from(jan_2012()),
            ],
        )
        .and_then(|b| b.build())
        .expect("first sheet");
    let second = builder
        .clear()
        .name("second")
        .row(
            3,
            0,
            [
                CellValue::from("world"),
                CellValue::from(123i64),
                CellValue::from(jan_2012()),
            ],
        )
        .and_then(|b| b.build())
        .expect("second sheet");
    (first, second)
}
