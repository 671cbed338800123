use calamine::{Data, Range, Reader, SheetType, open_workbook_auto};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::excel::{CellValue, Extent};
use crate::utils::parse_cell_reference;

/// Read access to one worksheet of a workbook.
///
/// Rows and columns are 1-based, matching spreadsheet notation.
pub trait Worksheet {
    fn title(&self) -> &str;

    /// Value at the given column and row; cells outside the populated area are empty.
    fn cell(&self, column: usize, row: usize) -> CellValue;

    /// The populated area as reported by the workbook, measured from A1.
    ///
    /// `None` when the source has no reliable bounds.
    fn declared_extent(&self) -> Option<Extent>;

    /// Value at an A1-style reference such as `"B3"`.
    fn cell_at(&self, reference: &str) -> Option<CellValue> {
        let (column, row) = parse_cell_reference(reference)?;
        Some(self.cell(column, row))
    }
}

/// A worksheet backed by a calamine range.
pub struct RangeWorksheet {
    title: String,
    range: Range<Data>,
}

impl RangeWorksheet {
    pub fn new(title: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            title: title.into(),
            range,
        }
    }
}

impl Worksheet for RangeWorksheet {
    fn title(&self) -> &str {
        &self.title
    }

    fn cell(&self, column: usize, row: usize) -> CellValue {
        if column == 0 || row == 0 {
            return CellValue::Empty;
        }

        let (Ok(row), Ok(column)) = (u32::try_from(row - 1), u32::try_from(column - 1)) else {
            return CellValue::Empty;
        };

        self.range
            .get_value((row, column))
            .map(CellValue::from)
            .unwrap_or_default()
    }

    fn declared_extent(&self) -> Option<Extent> {
        // calamine builds the range from the cells it actually read, so an
        // empty range is a reliable 0x0 extent rather than a missing one
        match self.range.end() {
            Some((row, column)) => Some(Extent::new(column as usize + 1, row as usize + 1)),
            None => Some(Extent::default()),
        }
    }
}

/// A worksheet held as an in-memory grid of rows.
///
/// Reports no declared extent, so extraction always scans it.
#[derive(Debug, Clone, Default)]
pub struct GridWorksheet {
    title: String,
    rows: Vec<Vec<CellValue>>,
}

impl GridWorksheet {
    pub fn new(title: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

impl Worksheet for GridWorksheet {
    fn title(&self) -> &str {
        &self.title
    }

    fn cell(&self, column: usize, row: usize) -> CellValue {
        if column == 0 || row == 0 {
            return CellValue::Empty;
        }

        self.rows
            .get(row - 1)
            .and_then(|cells| cells.get(column - 1))
            .cloned()
            .unwrap_or_default()
    }

    fn declared_extent(&self) -> Option<Extent> {
        None
    }
}

/// Worksheets read from a workbook file, plus the file's base name.
pub struct WorkbookSource {
    pub file_name: String,
    pub worksheets: Vec<RangeWorksheet>,
}

/// Check that `path` names an existing regular file this process can read.
pub fn validate_path(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(Error::PathInvalid(path.to_path_buf()));
    }

    if let Err(err) = File::open(path) {
        log::debug!("Cannot open {} for reading: {}", path.display(), err);
        return Err(Error::PathInvalid(path.to_path_buf()));
    }

    Ok(path.to_path_buf())
}

/// Open the workbook at `path` and read every worksheet, in workbook order.
///
/// Chart sheets, dialog sheets and macro sheets hold no cell grid and are
/// skipped.
///
/// The underlying reader, and with it the file handle, is dropped before
/// returning on every path.
pub fn read_worksheets<P: AsRef<Path>>(path: P) -> Result<WorkbookSource> {
    let path = validate_path(path.as_ref())?;

    let file_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut workbook = open_workbook_auto(&path).map_err(|source| Error::WorkbookParse {
        path: path.clone(),
        source,
    })?;

    let mut sheet_names = Vec::new();
    for sheet in workbook.sheets_metadata() {
        if sheet.typ == SheetType::WorkSheet {
            sheet_names.push(sheet.name.clone());
        } else {
            log::debug!("Skipping {:?} '{}'", sheet.typ, sheet.name);
        }
    }

    log::debug!(
        "Opened workbook {} with {} worksheets",
        path.display(),
        sheet_names.len()
    );

    let mut worksheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| Error::WorksheetRead {
                name: name.clone(),
                source,
            })?;

        worksheets.push(RangeWorksheet::new(name, range));
    }

    Ok(WorkbookSource {
        file_name,
        worksheets,
    })
}
