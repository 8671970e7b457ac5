pub mod coord;
pub mod error;
pub mod range;
pub mod value;

pub use coord::{A1ParseError, CellCoord, MAX_COLUMNS, MAX_ROWS};
pub use error::*;
pub use range::{BoundsError, SheetBounds};
pub use value::*;
