use serde_json::{Value, json};

use crate::excel::CellValue;

// Process cell value based on its type
pub fn cell_value_to_json(cell: &CellValue) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }

    match cell {
        CellValue::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                json!(f.trunc() as i64)
            } else {
                json!(f)
            }
        }
        CellValue::Int(i) => json!(i),
        CellValue::Bool(b) => json!(b),
        CellValue::String(s) | CellValue::DateTimeIso(s) | CellValue::DurationIso(s) => json!(s),
        _ => json!(cell.to_string()), // Dates, durations, errors
    }
}
