use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::excel::{Sheet, Workbook};
use crate::json_export::converters::cell_value_to_json;
use crate::json_export::types::{JsonLayout, Record, SheetJson};

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

fn write_json_to_file<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;

    let json_string = serialize_to_json(data)?;

    file.write_all(json_string.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    Ok(())
}

/// Render one sheet in the given layout.
///
/// Duplicate headers collapse into one key holding the rightmost column.
pub fn generate_sheet_json(sheet: &Sheet, layout: JsonLayout) -> SheetJson {
    match layout {
        JsonLayout::Records => SheetJson::Records(
            sheet
                .row_data()
                .iter()
                .map(|row| {
                    sheet
                        .header()
                        .iter()
                        .cloned()
                        .zip(row.iter().map(cell_value_to_json))
                        .collect::<Record>()
                })
                .collect(),
        ),
        JsonLayout::Columns => SheetJson::Columns(
            sheet
                .header()
                .iter()
                .cloned()
                .zip(
                    sheet
                        .column_data()
                        .iter()
                        .map(|column| column.iter().map(cell_value_to_json).collect::<Vec<_>>()),
                )
                .collect(),
        ),
    }
}

/// Render every sheet, keyed by sheet name in workbook order.
pub fn generate_workbook_json(
    workbook: &Workbook,
    layout: JsonLayout,
) -> IndexMap<String, SheetJson> {
    workbook
        .iter()
        .map(|sheet| (sheet.name().to_string(), generate_sheet_json(sheet, layout)))
        .collect()
}

// Export all sheets to a single JSON file
pub fn export_workbook_json(workbook: &Workbook, layout: JsonLayout, path: &Path) -> Result<()> {
    let all_sheets = generate_workbook_json(workbook, layout);

    write_json_to_file(&all_sheets, path)
}
