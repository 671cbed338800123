mod cell;
mod extent;
mod extractor;
mod reader;
mod sheet;
mod workbook;

pub use cell::{CellValue, format_datetime, format_duration};
pub use extent::{Extent, ExtentStrategy, detect_extent, scan_extent};
pub use extractor::{ReadOptions, extract_sheet, synthesize_header};
pub use reader::{
    GridWorksheet, RangeWorksheet, Worksheet, WorkbookSource, read_worksheets, validate_path,
};
pub use sheet::{Sheet, transpose};
pub use workbook::{Workbook, open_workbook};
