/// Convert a 1-based column number to its letter name (1 -> "A", 27 -> "AA").
#[must_use]
pub fn index_to_col_name(index: usize) -> String {
    let mut col_name = String::new();
    let mut n = index;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    col_name
}

/// Convert a column letter name to its 1-based number ("A" -> 1, "aa" -> 27).
#[must_use]
pub fn col_name_to_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let mut result: usize = 0;

    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        let val = (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        result = result.checked_mul(26)?.checked_add(val)?;
    }

    Some(result)
}

// Format cell reference (e.g., A1, B2) from 1-based column and row
#[must_use]
pub fn cell_reference(column: usize, row: usize) -> String {
    format!("{}{}", index_to_col_name(column), row)
}

/// Split an A1-style reference into a 1-based `(column, row)` pair.
#[must_use]
pub fn parse_cell_reference(reference: &str) -> Option<(usize, usize)> {
    let reference = reference.trim();
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);

    let column = col_name_to_index(letters)?;
    let row = digits.parse::<usize>().ok().filter(|row| *row > 0)?;

    Some((column, row))
}
