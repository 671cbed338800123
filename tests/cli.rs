use rust_xlsxwriter::Workbook as XlsxWorkbook;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{TempDir, tempdir};

fn build_workbook(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("people.xlsx");
    let mut workbook = XlsxWorkbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("People").expect("set sheet name");
    worksheet.write_string(0, 0, "Name").expect("write string");
    worksheet.write_string(0, 1, "Age").expect("write string");
    worksheet.write_string(1, 0, "Ada").expect("write string");
    worksheet.write_number(1, 1, 36.0).expect("write number");
    worksheet.write_string(2, 0, "Alan").expect("write string");
    worksheet.write_number(2, 1, 41.0).expect("write number");

    workbook.save(&path).expect("save workbook");
    path
}

fn run(path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xlsx-object"))
        .arg(path)
        .args(args)
        .output()
        .expect("run xlsx-object")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_workbook_and_sheet_summary() {
    let dir = tempdir().expect("create temp dir");
    let path = build_workbook(&dir);

    let output = run(&path, &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("people.xlsx with 1 sheets"), "stdout: {}", text);
    assert!(text.contains("Sheet 'People': 2-2"), "stdout: {}", text);
}

#[test]
fn prints_records_json() {
    let dir = tempdir().expect("create temp dir");
    let path = build_workbook(&dir);

    let output = run(&path, &["--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(
        value,
        json!({
            "People": [
                {"Name": "Ada", "Age": 36},
                {"Name": "Alan", "Age": 41}
            ]
        })
    );
}

#[test]
fn prints_columns_json_for_selected_sheet() {
    let dir = tempdir().expect("create temp dir");
    let path = build_workbook(&dir);

    let output = run(&path, &["-j", "-l", "columns", "-S", "0"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(
        value,
        json!({"People": {"Name": ["Ada", "Alan"], "Age": [36, 41]}})
    );
}

#[test]
fn rejects_unknown_layout() {
    let dir = tempdir().expect("create temp dir");
    let path = build_workbook(&dir);

    let output = run(&path, &["--json", "--layout", "sideways"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid JSON layout: sideways"));
}

#[test]
fn rejects_out_of_range_sheet() {
    let dir = tempdir().expect("create temp dir");
    let path = build_workbook(&dir);

    let output = run(&path, &["--sheet", "5"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Sheet index 5 out of range"));
}

#[test]
fn rejects_missing_file() {
    let dir = tempdir().expect("create temp dir");

    let output = run(&dir.path().join("absent.xlsx"), &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unable to load"));
}
