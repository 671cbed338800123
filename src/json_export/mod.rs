mod converters;
mod exporters;
mod types;

pub use converters::cell_value_to_json;
pub use exporters::{
    export_workbook_json, generate_sheet_json, generate_workbook_json, serialize_to_json,
};
pub use types::{JsonLayout, Record, SheetJson};
