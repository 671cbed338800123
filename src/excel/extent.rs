use crate::excel::Worksheet;
use crate::utils::cell_reference;

/// Populated columns and rows of a worksheet, counted from A1.
///
/// The header row, when present, is included in `rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub columns: usize,
    pub rows: usize,
}

impl Extent {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// The covered area as an A1-style range such as `"A1:C4"`.
    pub fn range_reference(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        Some(format!("A1:{}", cell_reference(self.columns, self.rows)))
    }
}

/// How a worksheet's populated area is determined.
///
/// The two strategies disagree on sheets with blank rows or columns inside
/// the data region: declared bounds cover the whole used area, scanning stops
/// at the first gap in row 1 or column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtentStrategy {
    /// Trust the worksheet's reported bounds, scanning only when it reports none.
    #[default]
    Declared,
    /// Always scan row 1 and column 1 for the first empty cell.
    Scan,
}

/// Determine the extent of `sheet` using `strategy`.
pub fn detect_extent(
    sheet: &dyn Worksheet,
    strategy: ExtentStrategy,
    has_headers: bool,
) -> Extent {
    let declared = match strategy {
        ExtentStrategy::Declared => sheet.declared_extent(),
        ExtentStrategy::Scan => None,
    };

    match declared {
        Some(extent) => {
            log::debug!(
                "Sheet '{}': declared extent {}",
                sheet.title(),
                extent.range_reference().as_deref().unwrap_or("empty")
            );
            extent
        }
        None => {
            let extent = scan_extent(sheet, has_headers);
            log::debug!(
                "Sheet '{}': scanned extent {}",
                sheet.title(),
                extent.range_reference().as_deref().unwrap_or("empty")
            );
            extent
        }
    }
}

/// Scan column 1 downward and row 1 rightward until the first empty cell.
///
/// With headers the downward scan starts at row 2, and the header row counts
/// toward `rows`.
pub fn scan_extent(sheet: &dyn Worksheet, has_headers: bool) -> Extent {
    let first_data_row = if has_headers { 2 } else { 1 };

    let mut rows = first_data_row - 1;
    while !sheet.cell(1, rows + 1).is_empty() {
        rows += 1;
    }

    let mut columns = 0;
    while !sheet.cell(columns + 1, 1).is_empty() {
        columns += 1;
    }

    Extent::new(columns, rows)
}
