use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

/// Shape of the JSON produced for each sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonLayout {
    /// One object per data row, keyed by header
    #[default]
    Records,
    /// One object per sheet mapping each header to its column of values
    Columns,
}

impl FromStr for JsonLayout {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "r" | "records" => Ok(JsonLayout::Records),
            "c" | "columns" => Ok(JsonLayout::Columns),
            _ => Err(()),
        }
    }
}

pub type Record = IndexMap<String, Value>;

/// JSON form of one sheet. Serializes without a tag, keeping header order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SheetJson {
    Records(Vec<Record>),
    Columns(IndexMap<String, Vec<Value>>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        assert_eq!("records".parse::<JsonLayout>(), Ok(JsonLayout::Records));
        assert_eq!("C".parse::<JsonLayout>(), Ok(JsonLayout::Columns));
        assert_eq!("rows".parse::<JsonLayout>(), Err(()));
    }
}
