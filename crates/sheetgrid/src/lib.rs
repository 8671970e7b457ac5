//! Dense, row-major spreadsheet sheets.
//!
//! [`ArraySheet`] is the canonical in-memory form of one sheet: format
//! readers produce it, writers consume it, and tests assert against it. Two
//! builders fill one in:
//!
//! * [`BoundedBuilder`] when the extents are known up front (O(1) writes);
//! * [`UnboundedBuilder`] when they are discovered from the writes
//!   themselves (sparse log, replayed on build).
//!
//! ```
//! use sheetgrid::{ArraySheet, CellValue, SheetBuilder};
//!
//! # fn main() -> Result<(), sheetgrid::SheetError> {
//! let sheet = ArraySheet::builder()
//!     .name("first")
//!     .row(1, 1, [CellValue::from("hello"), CellValue::from(3.25)])?
//!     .build()?;
//!
//! assert_eq!((sheet.row_count(), sheet.column_count()), (2, 3));
//! let cell = sheet.cell(1, 1)?.expect("written");
//! assert_eq!(cell.string()?, "hello");
//! assert!(sheet.cell(0, 0)?.is_none());
//! # Ok(())
//! # }
//! ```

pub mod array_sheet;
pub mod book;
pub mod builder;
pub mod cell;
pub mod limits;
pub mod sheet;

pub use array_sheet::ArraySheet;
pub use book::{ArrayBook, ArrayBookBuilder};
pub use builder::{AnyBuilder, BoundedBuilder, CellWrite, SheetBuilder, UnboundedBuilder};
pub use cell::{Cell, CellCursor};
pub use limits::SheetLimits;
pub use sheet::Sheet;

// Re-export for convenience
pub use sheetgrid_common::{
    A1ParseError, BoundsError, CellCoord, CellKind, CellValue, IntoCellValue, Number,
    SheetBounds, SheetError, Textual, normalize,
};
