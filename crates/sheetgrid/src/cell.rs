//! Typed views over a single cell value.
//!
//! A [`Cell`] borrows the value it describes, so reading a cell never
//! allocates and the borrow checker keeps the view from outliving the sheet.
//! [`CellCursor`] is the rebindable form: one cursor is retargeted at each
//! value during a traversal and read through in place.

use std::fmt;

use chrono::NaiveDateTime;
use sheetgrid_common::{CellKind, CellValue, Number, SheetError};

/// View over a non-absent cell value.
///
/// Typed accessors fail with [`SheetError::TypeMismatch`] when the value is
/// of another kind; check the matching `is_*` predicate first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<'a> {
    value: &'a CellValue,
}

impl<'a> Cell<'a> {
    pub fn new(value: &'a CellValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a CellValue {
        self.value
    }

    pub fn kind(&self) -> CellKind {
        self.value.kind()
    }

    pub fn is_date(&self) -> bool {
        matches!(self.value, CellValue::Date(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self.value, CellValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.value, CellValue::Text(_))
    }

    pub fn date(&self) -> Result<NaiveDateTime, SheetError> {
        self.value.as_date().ok_or_else(|| self.mismatch(CellKind::Date))
    }

    pub fn number(&self) -> Result<Number, SheetError> {
        self.value
            .as_number()
            .ok_or_else(|| self.mismatch(CellKind::Number))
    }

    pub fn string(&self) -> Result<&'a str, SheetError> {
        match self.value {
            CellValue::Text(s) => Ok(s),
            _ => Err(self.mismatch(CellKind::Text)),
        }
    }

    fn mismatch(&self, expected: CellKind) -> SheetError {
        SheetError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value, f)
    }
}

/// Single reusable view, rebound to a new value on every read.
///
/// [`CellCursor::bind`] retargets the cursor and hands the same instance
/// back, so accessors always describe the latest binding. Read what you need
/// before the next bind; take [`CellCursor::current`] for a [`Cell`] that
/// outlives the rebinding.
#[derive(Debug, Default)]
pub struct CellCursor<'a> {
    value: Option<&'a CellValue>,
}

impl<'a> CellCursor<'a> {
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn bind(&mut self, value: &'a CellValue) -> &Self {
        self.value = Some(value);
        self
    }

    pub fn reset(&mut self) {
        self.value = None;
    }

    pub fn is_bound(&self) -> bool {
        self.value.is_some()
    }

    /// Snapshot of the current binding.
    pub fn current(&self) -> Option<Cell<'a>> {
        self.value.map(Cell::new)
    }

    pub fn kind(&self) -> Option<CellKind> {
        self.value.map(CellValue::kind)
    }

    pub fn is_date(&self) -> bool {
        self.current().is_some_and(|c| c.is_date())
    }

    pub fn is_number(&self) -> bool {
        self.current().is_some_and(|c| c.is_number())
    }

    pub fn is_string(&self) -> bool {
        self.current().is_some_and(|c| c.is_string())
    }

    pub fn date(&self) -> Result<NaiveDateTime, SheetError> {
        self.bound()?.date()
    }

    pub fn number(&self) -> Result<Number, SheetError> {
        self.bound()?.number()
    }

    pub fn string(&self) -> Result<&'a str, SheetError> {
        self.bound()?.string()
    }

    fn bound(&self) -> Result<Cell<'a>, SheetError> {
        self.current().ok_or(SheetError::UnboundCursor)
    }
}

impl fmt::Display for CellCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn predicates_follow_bound_kind() {
        let text = CellValue::from("hello");
        let cell = Cell::new(&text);
        assert!(cell.is_string());
        assert!(!cell.is_number());
        assert!(!cell.is_date());
        assert_eq!(cell.string().unwrap(), "hello");
        assert_eq!(cell.to_string(), "hello");
    }

    #[test]
    fn typed_accessor_mismatch_is_reported() {
        let number = CellValue::from(3.25);
        let cell = Cell::new(&number);
        assert_eq!(cell.number().unwrap(), Number::Float(3.25));
        assert_eq!(
            cell.string(),
            Err(SheetError::TypeMismatch {
                expected: CellKind::Text,
                found: CellKind::Number,
            })
        );
        assert!(cell.date().is_err());
    }

    #[test]
    fn dates_extract() {
        let jan2012 = NaiveDate::from_ymd_opt(2012, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let value = CellValue::Date(jan2012);
        let cell = Cell::new(&value);
        assert!(cell.is_date());
        assert_eq!(cell.date().unwrap(), jan2012);
    }

    #[test]
    fn cursor_rebinds_in_place() {
        let a = CellValue::from("a");
        let b = CellValue::from(2i64);
        let mut cursor = CellCursor::new();
        assert_eq!(cursor.to_string(), "null");
        assert!(!cursor.is_bound());
        assert!(!cursor.is_string());
        assert_eq!(cursor.string(), Err(SheetError::UnboundCursor));

        assert_eq!(cursor.bind(&a).string().unwrap(), "a");
        assert_eq!(cursor.to_string(), "a");

        let snapshot = cursor.current().unwrap();
        assert!(cursor.bind(&b).is_number());
        assert_eq!(cursor.number().unwrap(), Number::Int(2));
        assert_eq!(cursor.kind(), Some(CellKind::Number));
        assert_eq!(
            cursor.string(),
            Err(SheetError::TypeMismatch {
                expected: CellKind::Text,
                found: CellKind::Number,
            })
        );
        assert_eq!(snapshot.string().unwrap(), "a");

        cursor.reset();
        assert_eq!(cursor.to_string(), "null");
        assert!(cursor.date().is_err());
    }
}
