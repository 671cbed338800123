use std::fmt;

use crate::error::{Error, Result};
use crate::excel::CellValue;

/// The extracted contents of one worksheet.
///
/// `column_data` is column-major and excludes the header row. `row_data` is
/// its transpose, or empty when the columns differ in length.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    header: Vec<String>,
    column_data: Vec<Vec<CellValue>>,
    row_data: Vec<Vec<CellValue>>,
    ragged: bool,
}

impl Sheet {
    /// Build a sheet from column-major data, deriving the row-major view.
    ///
    /// Ragged columns do not fail construction: the row view is left empty and
    /// `is_ragged` reports it.
    pub fn new(
        name: impl Into<String>,
        header: Vec<String>,
        column_data: Vec<Vec<CellValue>>,
    ) -> Self {
        let name = name.into();

        let (row_data, ragged) = match transpose(&column_data) {
            Ok(rows) => (rows, false),
            Err(err) => {
                log::warn!("Sheet '{}': row view unavailable: {}", name, err);
                (Vec::new(), true)
            }
        };

        Self {
            name,
            header,
            column_data,
            row_data,
            ragged,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn column_data(&self) -> &[Vec<CellValue>] {
        &self.column_data
    }

    pub fn row_data(&self) -> &[Vec<CellValue>] {
        &self.row_data
    }

    pub fn column_count(&self) -> usize {
        self.column_data.len()
    }

    /// Number of data rows in the row view; zero for ragged sheets.
    pub fn row_count(&self) -> usize {
        self.row_data.len()
    }

    /// True when the columns differ in length and no row view could be built.
    pub fn is_ragged(&self) -> bool {
        self.ragged
    }

    /// Values of the first column whose header equals `name`.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        let index = self.header.iter().position(|h| h == name)?;
        self.column_data.get(index).map(Vec::as_slice)
    }

    /// Data cell at 0-based `row` and `column`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.column_data.get(column)?.get(row)
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sheet '{}': {}-{}",
            self.name,
            self.column_count(),
            self.row_count()
        )
    }
}

/// Transpose column-major data into rows.
///
/// Fails with [`Error::MalformedSheetData`] when the columns are not all the
/// length of the first one.
pub fn transpose(columns: &[Vec<CellValue>]) -> Result<Vec<Vec<CellValue>>> {
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };
    let expected = first.len();

    if let Some((column, found)) = columns
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, len)| *len != expected)
    {
        return Err(Error::MalformedSheetData {
            column,
            expected,
            found,
        });
    }

    let rows = (0..expected)
        .map(|row| columns.iter().map(|column| column[row].clone()).collect())
        .collect();

    Ok(rows)
}
