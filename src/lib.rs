//! Read spreadsheet workbooks into column-major and row-major sheet views.
//!
//! ```no_run
//! use xlsx_object::{ReadOptions, open_workbook};
//!
//! let workbook = open_workbook("scores.xlsx", ReadOptions::default())?;
//! for sheet in &workbook {
//!     println!("{} {:?}", sheet, sheet.header());
//! }
//! # Ok::<(), xlsx_object::Error>(())
//! ```

pub mod error;
pub mod excel;
pub mod json_export;
pub mod utils;

pub use error::{Error, Result};
pub use excel::{CellValue, ExtentStrategy, ReadOptions, Sheet, Workbook, Worksheet, open_workbook};
