use crate::excel::{CellValue, Extent, ExtentStrategy, Sheet, Worksheet, detect_extent};

/// Options controlling how worksheets are turned into sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Whether row 1 holds column names rather than data
    pub has_headers: bool,
    pub extent_strategy: ExtentStrategy,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            has_headers: true,
            extent_strategy: ExtentStrategy::default(),
        }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    #[must_use]
    pub fn with_extent_strategy(mut self, strategy: ExtentStrategy) -> Self {
        self.extent_strategy = strategy;
        self
    }
}

/// Materialize one worksheet into a [`Sheet`].
pub fn extract_sheet(worksheet: &dyn Worksheet, options: &ReadOptions) -> Sheet {
    let extent = detect_extent(worksheet, options.extent_strategy, options.has_headers);

    let header = if options.has_headers {
        read_header(worksheet, extent.columns)
    } else {
        synthesize_header(extent.columns)
    };

    let column_data = read_columns(worksheet, extent, options.has_headers);

    Sheet::new(worksheet.title(), header, column_data)
}

/// Row 1, columns `1..=columns`, rendered as text.
fn read_header(worksheet: &dyn Worksheet, columns: usize) -> Vec<String> {
    (1..=columns)
        .map(|column| worksheet.cell(column, 1).to_string())
        .collect()
}

/// `Var1` through `Var{columns}`.
pub fn synthesize_header(columns: usize) -> Vec<String> {
    (1..=columns).map(|i| format!("Var{}", i)).collect()
}

fn read_columns(
    worksheet: &dyn Worksheet,
    extent: Extent,
    has_headers: bool,
) -> Vec<Vec<CellValue>> {
    let first_row = if has_headers { 2 } else { 1 };

    (1..=extent.columns)
        .map(|column| {
            (first_row..=extent.rows)
                .map(|row| worksheet.cell(column, row))
                .collect()
        })
        .collect()
}
