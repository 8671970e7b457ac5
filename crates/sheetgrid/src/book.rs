use crate::ArraySheet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of sheets, as handed to whole-workbook writers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayBook {
    sheets: Vec<ArraySheet>,
}

impl ArrayBook {
    pub fn from_sheets(sheets: Vec<ArraySheet>) -> Self {
        Self { sheets }
    }

    pub fn builder() -> ArrayBookBuilder {
        ArrayBookBuilder::default()
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn sheet(&self, index: usize) -> Option<&ArraySheet> {
        self.sheets.get(index)
    }

    /// First sheet with the given name.
    pub fn sheet_by_name(&self, name: &str) -> Option<&ArraySheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(ArraySheet::name).collect()
    }

    pub fn sheets(&self) -> &[ArraySheet] {
        &self.sheets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArraySheet> {
        self.sheets.iter()
    }

    pub fn into_sheets(self) -> Vec<ArraySheet> {
        self.sheets
    }
}

impl<'a> IntoIterator for &'a ArrayBook {
    type Item = &'a ArraySheet;
    type IntoIter = std::slice::Iter<'a, ArraySheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.iter()
    }
}

/// Accumulates sheets in insertion order.
#[derive(Debug, Default)]
pub struct ArrayBookBuilder {
    sheets: Vec<ArraySheet>,
}

impl ArrayBookBuilder {
    pub fn sheet(&mut self, sheet: ArraySheet) -> &mut Self {
        self.sheets.push(sheet);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.sheets.clear();
        self
    }

    pub fn build(&self) -> ArrayBook {
        ArrayBook::from_sheets(self.sheets.clone())
    }
}
