use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use xlsx_object::excel::{ExtentStrategy, ReadOptions, Sheet, open_workbook};
use xlsx_object::json_export;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Excel file path
    #[arg(required = true)]
    file_path: PathBuf,

    /// Treat row 1 as data and name columns Var1, Var2, ...
    #[arg(long, short = 'n')]
    no_headers: bool,

    /// Find each sheet's data area by scanning row 1 and column 1 instead of trusting the file's bounds
    #[arg(long, short = 's')]
    scan: bool,

    /// Print the sheets as JSON to stdout
    #[arg(long, short = 'j')]
    json: bool,

    /// JSON layout: 'records' for one object per row, 'columns' for one array per column
    #[arg(long, short = 'l', default_value = "records")]
    layout: String,

    /// Only output the sheet at this 0-based index
    #[arg(long, short = 'S')]
    sheet: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let strategy = if cli.scan {
        ExtentStrategy::Scan
    } else {
        ExtentStrategy::Declared
    };
    let options = ReadOptions::default()
        .with_headers(!cli.no_headers)
        .with_extent_strategy(strategy);

    let workbook = open_workbook(&cli.file_path, options)
        .with_context(|| format!("Unable to load {}", cli.file_path.display()))?;

    let sheets: Vec<&Sheet> = match cli.sheet {
        Some(index) => vec![workbook.sheet(index)?],
        None => workbook.iter().collect(),
    };

    if cli.json {
        let layout = match json_export::JsonLayout::from_str(&cli.layout) {
            Ok(layout) => layout,
            Err(_) => anyhow::bail!("Invalid JSON layout: {}", cli.layout),
        };

        let output: indexmap::IndexMap<&str, json_export::SheetJson> = sheets
            .iter()
            .map(|sheet| (sheet.name(), json_export::generate_sheet_json(sheet, layout)))
            .collect();

        println!("{}", json_export::serialize_to_json(&output)?);
        return Ok(());
    }

    println!("{}", workbook);
    for sheet in sheets {
        let note = if sheet.is_ragged() { " (ragged columns)" } else { "" };
        println!("  {}{} {:?}", sheet, note, sheet.header());
    }

    Ok(())
}
