use std::fmt;
use std::ops::Index;
use std::path::Path;

use crate::error::{Error, Result};
use crate::excel::{ReadOptions, Sheet, Worksheet, extract_sheet, read_worksheets};

/// A loaded workbook: every worksheet extracted into a [`Sheet`], in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    file_name: String,
    sheet_names: Vec<String>,
    sheets: Vec<Sheet>,
}

/// Open the workbook at `path` and extract all of its sheets.
///
/// Fails with [`Error::PathInvalid`] before touching any sheet when the path
/// is not a file, and with a parse error when the file is not a workbook.
pub fn open_workbook<P: AsRef<Path>>(path: P, options: ReadOptions) -> Result<Workbook> {
    let source = read_worksheets(path)?;

    let worksheets: Vec<&dyn Worksheet> = source
        .worksheets
        .iter()
        .map(|ws| ws as &dyn Worksheet)
        .collect();

    Ok(Workbook::from_worksheets(
        source.file_name,
        &worksheets,
        &options,
    ))
}

impl Workbook {
    /// Open with headers enabled and declared bounds.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        open_workbook(path, ReadOptions::default())
    }

    /// Extract already-opened worksheets, in the given order.
    pub fn from_worksheets(
        file_name: impl Into<String>,
        worksheets: &[&dyn Worksheet],
        options: &ReadOptions,
    ) -> Self {
        let sheets: Vec<Sheet> = worksheets
            .iter()
            .map(|ws| extract_sheet(*ws, options))
            .collect();

        let sheet_names = sheets.iter().map(|s| s.name().to_string()).collect();

        Self {
            file_name: file_name.into(),
            sheet_names,
            sheets,
        }
    }

    /// Base name of the source file, without extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    pub fn sheet(&self, index: usize) -> Result<&Sheet> {
        self.sheets.get(index).ok_or(Error::InvalidIndex {
            index,
            len: self.sheets.len(),
        })
    }

    pub fn sheet_by_name(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sheet> {
        self.sheets.iter()
    }
}

impl Index<usize> for Workbook {
    type Output = Sheet;

    fn index(&self, index: usize) -> &Sheet {
        &self.sheets[index]
    }
}

impl<'a> IntoIterator for &'a Workbook {
    type Item = &'a Sheet;
    type IntoIter = std::slice::Iter<'a, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.iter()
    }
}

impl fmt::Display for Workbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.xlsx with {} sheets", self.file_name, self.sheets.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::{CellValue, GridWorksheet};

    fn two_sheet_workbook() -> Workbook {
        let first = GridWorksheet::new(
            "First",
            vec![vec!["A".into()], vec![1.0.into()]],
        );
        let second = GridWorksheet::new(
            "Second",
            vec![vec!["X".into(), "Y".into()]],
        );

        Workbook::from_worksheets(
            "book",
            &[&first as &dyn Worksheet, &second],
            &ReadOptions::default(),
        )
    }

    #[test]
    fn test_from_worksheets_preserves_order() {
        let workbook = two_sheet_workbook();

        assert_eq!(workbook.file_name(), "book");
        assert_eq!(workbook.sheet_names(), ["First", "Second"]);
        assert_eq!(workbook.len(), 2);
        assert_eq!(workbook[0].name(), "First");
        assert_eq!(workbook[1].header(), ["X", "Y"]);
        assert_eq!(workbook.to_string(), "book.xlsx with 2 sheets");
    }

    #[test]
    fn test_sheet_lookup() {
        let workbook = two_sheet_workbook();

        assert_eq!(
            workbook.sheet(0).unwrap().column_data(),
            [vec![CellValue::Float(1.0)]]
        );
        assert!(matches!(
            workbook.sheet(2),
            Err(Error::InvalidIndex { index: 2, len: 2 })
        ));
        assert_eq!(workbook.sheet_by_name("Second").unwrap().column_count(), 2);
        assert!(matches!(
            workbook.sheet_by_name("Third"),
            Err(Error::SheetNotFound(_))
        ));
        assert!(workbook.get(5).is_none());
        assert_eq!(workbook.iter().count(), 2);
    }

    #[test]
    fn test_empty_workbook() {
        let workbook = Workbook::from_worksheets("empty", &[], &ReadOptions::default());

        assert!(workbook.is_empty());
        assert!(workbook.sheet_names().is_empty());
        assert_eq!((&workbook).into_iter().count(), 0);
    }
}
