use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric cell payload. Integer and floating-point inputs stay distinct.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(n) => n,
        }
    }

    /// Returns the integer payload, or `None` for a float.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A normalized cell value. This is distinct from the raw inputs accepted by
/// [`IntoCellValue`]: every write is coerced into one of these three kinds,
/// and an absent cell is `None` in an `Option<CellValue>`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Date(NaiveDateTime),
    Number(Number),
    Text(String),
}

/// The kind of a [`CellValue`], used when reporting accessor mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Date,
    Number,
    Text,
}

impl Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CellKind::Date => "date",
            CellKind::Number => "number",
            CellKind::Text => "text",
        })
    }
}

impl CellValue {
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Date(_) => CellKind::Date,
            CellValue::Number(_) => CellKind::Number,
            CellValue::Text(_) => CellKind::Text,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Date(dt) => write!(f, "{dt}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<Number> for CellValue {
    fn from(value: Number) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(Number::Int(value))
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(Number::Int(value as i64))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(Number::Float(value))
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::Date(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value.and_time(NaiveTime::MIN))
    }
}

/* ───────────────────────── Normalization ──────────────────────────
Every write into a sheet goes through `IntoCellValue`:
  dates    -> CellValue::Date  (NaiveDate is pinned to midnight)
  numbers  -> CellValue::Number (Int vs Float preserved)
  text     -> CellValue::Text
  None     -> absent
  other    -> CellValue::Text of the Display form
------------------------------------------------------------------- */

/// Conversion into a normalized, possibly absent, cell value.
pub trait IntoCellValue {
    fn into_cell_value(self) -> Option<CellValue>;
}

/// Normalize any supported input into a cell value.
pub fn normalize<V: IntoCellValue>(value: V) -> Option<CellValue> {
    value.into_cell_value()
}

/// Wraps an arbitrary `Display` value so it is stored as its text form.
///
/// ```
/// use sheetgrid_common::{normalize, CellValue, Textual};
/// assert_eq!(normalize(Textual('x')), Some(CellValue::Text("x".into())));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Textual<T>(pub T);

impl<T: Display> IntoCellValue for Textual<T> {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Text(self.0.to_string()))
    }
}

impl IntoCellValue for CellValue {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(self)
    }
}

impl IntoCellValue for &CellValue {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(self.clone())
    }
}

impl IntoCellValue for Number {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Number(self))
    }
}

impl<T: IntoCellValue> IntoCellValue for Option<T> {
    fn into_cell_value(self) -> Option<CellValue> {
        self.and_then(IntoCellValue::into_cell_value)
    }
}

impl IntoCellValue for String {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Text(self))
    }
}

impl IntoCellValue for &String {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Text(self.clone()))
    }
}

impl IntoCellValue for &str {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Text(self.to_string()))
    }
}

impl IntoCellValue for Cow<'_, str> {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Text(self.into_owned()))
    }
}

impl IntoCellValue for NaiveDateTime {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Date(self))
    }
}

impl IntoCellValue for NaiveDate {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::from(self))
    }
}

impl<Tz: TimeZone> IntoCellValue for DateTime<Tz> {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Date(self.naive_local()))
    }
}

macro_rules! int_into_cell_value {
    ($($t:ty),*) => {
        $(
            impl IntoCellValue for $t {
                fn into_cell_value(self) -> Option<CellValue> {
                    Some(CellValue::Number(Number::Int(self as i64)))
                }
            }
        )*
    };
}

// Widening conversions only; wider types go through `wide_int_into_cell_value`.
int_into_cell_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_int_into_cell_value {
    ($($t:ty),*) => {
        $(
            impl IntoCellValue for $t {
                fn into_cell_value(self) -> Option<CellValue> {
                    Some(match i64::try_from(self) {
                        Ok(i) => CellValue::Number(Number::Int(i)),
                        Err(_) => CellValue::Text(self.to_string()),
                    })
                }
            }
        )*
    };
}

wide_int_into_cell_value!(isize, usize, u64, i128, u128);

impl IntoCellValue for f64 {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Number(Number::Float(self)))
    }
}

impl IntoCellValue for f32 {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Number(Number::Float(self as f64)))
    }
}

impl IntoCellValue for bool {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Text(self.to_string()))
    }
}

impl IntoCellValue for char {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Text(self.to_string()))
    }
}
