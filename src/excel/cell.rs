use calamine::Data;
use chrono::{Duration, DurationRound, NaiveDateTime, NaiveTime};
use std::fmt;

/// A single cell value as read from a worksheet.
///
/// Values keep the type the workbook stored them with; no coercion happens
/// during extraction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    /// Date-formatted cell, resolved against the workbook's date system.
    DateTime(NaiveDateTime),
    /// Elapsed-time cell such as `[h]:mm:ss`.
    Duration(Duration),
    DateTimeIso(String),
    DurationIso(String),
    Error(String),
}

impl CellValue {
    /// True for missing cells and for cells holding an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::String(s.clone()),
            Data::Float(f) => CellValue::Float(*f),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Bool(*b),
            // Serials outside chrono's range stay numeric
            Data::DateTime(dt) if dt.is_duration() => dt
                .as_duration()
                .map(CellValue::Duration)
                .unwrap_or(CellValue::Float(dt.as_f64())),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Float(dt.as_f64())),
            Data::DateTimeIso(s) => CellValue::DateTimeIso(s.clone()),
            Data::DurationIso(s) => CellValue::DurationIso(s.clone()),
            Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::String(s) => f.write_str(s),
            CellValue::Float(n) => write!(f, "{}", format_float(*n)),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            CellValue::DateTime(dt) => f.write_str(&format_datetime(dt)),
            CellValue::Duration(d) => f.write_str(&format_duration(d)),
            CellValue::DateTimeIso(s) | CellValue::DurationIso(s) => f.write_str(s),
            CellValue::Error(e) => write!(f, "Error: {}", e),
        }
    }
}

// Integral floats render without a fractional part
fn format_float(n: f64) -> String {
    if n == (n as i64) as f64 && n.abs() < 1e10 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

/// Render a datetime as ISO 8601, to the nearest second.
///
/// Values that round to midnight give `YYYY-MM-DD`, others
/// `YYYY-MM-DDTHH:MM:SS`. Rounding happens first, so a time just before
/// midnight carries into the next day.
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    let rounded = datetime
        .duration_round(Duration::seconds(1))
        .unwrap_or(*datetime);

    if rounded.time() == NaiveTime::MIN {
        rounded.format("%Y-%m-%d").to_string()
    } else {
        rounded.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Render a duration as `H:MM:SS`, hours unbounded, to the nearest second.
pub fn format_duration(duration: &Duration) -> String {
    let millis = duration.num_milliseconds();
    let total = (millis.abs() + 500) / 1000;
    let sign = if millis < 0 && total > 0 { "-" } else { "" };

    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
