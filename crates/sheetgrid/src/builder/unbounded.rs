use sheetgrid_common::{CellValue, IntoCellValue, SheetError};

use super::{CellWrite, SheetBuilder};
use crate::ArraySheet;
use crate::limits::{SheetLimits, cell_capacity};

/// Sparse record of writes in arrival order.
#[derive(Debug, Clone, Default)]
struct WriteLog {
    rows: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<Option<CellValue>>,
}

impl WriteLog {
    fn push(&mut self, row: usize, column: usize, value: Option<CellValue>) {
        self.rows.push(row);
        self.columns.push(column);
        self.values.push(value);
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.columns.clear();
        self.values.clear();
    }

    fn iter(&self) -> impl Iterator<Item = (usize, usize, &Option<CellValue>)> + '_ {
        self.rows
            .iter()
            .zip(&self.columns)
            .zip(&self.values)
            .map(|((r, c), v)| (*r, *c, v))
    }
}

/// Builder for sheets whose extents are not known up front.
///
/// Writes are appended to a log and the running maximum row and column are
/// tracked; [`SheetBuilder::build`] allocates the dense buffer and replays
/// the log in order, so a later write to the same cell wins.
#[derive(Debug, Clone)]
pub struct UnboundedBuilder {
    name: String,
    log: WriteLog,
    max_row: Option<usize>,
    max_column: Option<usize>,
    limits: SheetLimits,
}

impl Default for UnboundedBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnboundedBuilder {
    pub fn new() -> Self {
        Self::with_limits(SheetLimits::default())
    }

    pub fn with_limits(limits: SheetLimits) -> Self {
        Self {
            name: String::new(),
            log: WriteLog::default(),
            max_row: None,
            max_column: None,
            limits,
        }
    }

    pub fn limits(&self) -> SheetLimits {
        self.limits
    }

    /// Number of writes recorded since the last clear.
    pub fn write_count(&self) -> usize {
        self.log.len()
    }

    /// Extent the next build would produce.
    pub fn extent(&self) -> (usize, usize) {
        (
            self.max_row.map_or(0, |r| r + 1),
            self.max_column.map_or(0, |c| c + 1),
        )
    }

    fn grow(&mut self, row: usize, column: usize) {
        self.max_row = Some(self.max_row.map_or(row, |r| r.max(row)));
        self.max_column = Some(self.max_column.map_or(column, |c| c.max(column)));
    }
}

impl SheetBuilder for UnboundedBuilder {
    fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    fn clear(&mut self) -> &mut Self {
        self.log.clear();
        self.max_row = None;
        self.max_column = None;
        self.name.clear();
        self
    }

    fn value<V: IntoCellValue>(
        &mut self,
        row: usize,
        column: usize,
        value: V,
    ) -> Result<&mut Self, SheetError> {
        self.limits.check_cell(row, column)?;
        self.grow(row, column);
        self.log.push(row, column, value.into_cell_value());
        Ok(self)
    }

    /// Checks every position against the limits, then records the batch and
    /// grows the extent once for its full span.
    ///
    /// An empty batch grows nothing: `row(r, c, [])` does not make row `r`
    /// part of the sheet, matching what a bounded builder would store.
    fn write_all(&mut self, writes: Vec<CellWrite>) -> Result<&mut Self, SheetError> {
        let mut span: Option<(usize, usize)> = None;
        for (row, column, _) in &writes {
            self.limits.check_cell(*row, *column)?;
            span = Some(span.map_or((*row, *column), |(r, c)| {
                (r.max(*row), c.max(*column))
            }));
        }
        if let Some((row, column)) = span {
            self.grow(row, column);
        }
        for (row, column, value) in writes {
            self.log.push(row, column, value);
        }
        Ok(self)
    }

    fn build(&self) -> Result<ArraySheet, SheetError> {
        let (row_count, column_count) = self.extent();
        let mut values = vec![None; cell_capacity(row_count, column_count)?];
        for (row, column, value) in self.log.iter() {
            values[row * column_count + column] = value.clone();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = row_count,
            columns = column_count,
            writes = self.log.len(),
            "replayed sparse write log"
        );

        Ok(ArraySheet::from_parts(
            self.name.clone(),
            row_count,
            column_count,
            values.into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_empty_sheet() {
        let sheet = UnboundedBuilder::new().build().unwrap();
        assert_eq!((sheet.row_count(), sheet.column_count()), (0, 0));
        assert_eq!(sheet.name(), "");
    }

    #[test]
    fn extent_grows_from_out_of_order_writes() {
        let mut builder = UnboundedBuilder::new();
        builder.value(5, 5, "x").unwrap().value(2, 2, "y").unwrap();
        let sheet = builder.build().unwrap();
        assert_eq!((sheet.row_count(), sheet.column_count()), (6, 6));
        assert_eq!(sheet.cell_value(2, 2).unwrap(), Some(&CellValue::from("y")));
        assert_eq!(sheet.cell_value(5, 5).unwrap(), Some(&CellValue::from("x")));
        let present = sheet.rows().flatten().filter(|v| v.is_some()).count();
        assert_eq!(present, 2);
    }

    #[test]
    fn last_write_wins() {
        let mut builder = UnboundedBuilder::new();
        builder.value(0, 0, "a").unwrap().value(0, 0, "b").unwrap();
        assert_eq!(builder.write_count(), 2);
        let sheet = builder.build().unwrap();
        assert_eq!(sheet.cell_value(0, 0).unwrap(), Some(&CellValue::from("b")));
    }

    #[test]
    fn absent_write_still_grows_and_overwrites() {
        let mut builder = UnboundedBuilder::new();
        builder
            .value(0, 0, "a")
            .unwrap()
            .value(0, 0, None::<&str>)
            .unwrap()
            .value(3, 1, None::<&str>)
            .unwrap();
        let sheet = builder.build().unwrap();
        assert_eq!((sheet.row_count(), sheet.column_count()), (4, 2));
        assert_eq!(sheet.cell_value(0, 0).unwrap(), None);
    }

    #[test]
    fn row_accounts_for_full_span_once() {
        let mut builder = UnboundedBuilder::new();
        builder.row(1, 1, ["hello", "world", "!"]).unwrap();
        assert_eq!(builder.extent(), (2, 4));
        assert_eq!(builder.write_count(), 3);

        builder.row(4, 0, Vec::<&str>::new()).unwrap();
        assert_eq!(builder.extent(), (2, 4));
    }

    #[test]
    fn limits_reject_writes_atomically() {
        let mut builder = UnboundedBuilder::with_limits(SheetLimits::new(10, 3));
        assert!(matches!(
            builder.value(10, 0, "x"),
            Err(SheetError::LimitExceeded { row: 10, .. })
        ));
        assert!(builder.row(0, 1, ["a", "b", "c"]).is_err());
        assert_eq!(builder.write_count(), 0);
        assert_eq!(builder.extent(), (0, 0));
    }

    #[test]
    fn failed_bulk_writes_keep_log_and_extent() {
        let mut builder = UnboundedBuilder::with_limits(SheetLimits::new(4, 4));
        builder.value(0, 0, "kept").unwrap();

        assert!(builder.column(2, 0, ["a", "b", "c"]).is_err());
        assert!(builder.row(1, 2, ["a", "b", "c"]).is_err());
        assert!(
            builder
                .table(1, 1, vec![Some(vec!["a"]), None, Some(vec!["b", "c", "d", "e"])])
                .is_err()
        );
        assert!(builder.map(3, 3, [("k", 1)]).is_err());

        assert_eq!(builder.write_count(), 1);
        assert_eq!(builder.extent(), (1, 1));
    }

    #[test]
    fn bulk_write_grows_to_full_span() {
        let mut builder = UnboundedBuilder::new();
        builder
            .table(2, 1, vec![Some(vec!["a"]), None, Some(vec!["b", "c"])])
            .unwrap();
        assert_eq!(builder.extent(), (5, 3));
        builder.column(0, 4, [1, 2]).unwrap();
        assert_eq!(builder.extent(), (5, 5));
    }

    #[test]
    fn clear_resets_log_and_extent() {
        let mut builder = UnboundedBuilder::new();
        builder.name("first").value(3, 3, 1).unwrap();
        builder.clear();
        assert_eq!(builder.extent(), (0, 0));
        assert_eq!(builder.write_count(), 0);
        let sheet = builder.value(0, 1, 2).unwrap().build().unwrap();
        assert_eq!(sheet.name(), "");
        assert_eq!((sheet.row_count(), sheet.column_count()), (1, 2));
    }
}
