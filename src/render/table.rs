use std::io::Write;

use crate::database::executor::ResultSet;
use crate::render::width::display_width;

/// Spaces added to every column on top of its widest value.
const COLUMN_PADDING: usize = 4;

/// Renders a result set as an aligned text table: header line, a `-` rule,
/// one line per row, then a trailing row count. A result set with no rows
/// renders as a single notice.
pub fn render(out: &mut impl Write, result: &ResultSet) -> std::io::Result<()> {
    if result.rows.is_empty() {
        writeln!(out, "\nNo data found")?;
        return Ok(());
    }

    let widths = column_widths(result);

    writeln!(out)?;
    for (name, &width) in result.columns.iter().zip(&widths) {
        write!(out, "{}{}", name, " ".repeat(width - display_width(name)))?;
    }
    writeln!(out)?;

    let total: usize = widths.iter().sum();
    writeln!(out, "{}", "-".repeat(total))?;

    for row in &result.rows {
        for (idx, &width) in widths.iter().enumerate() {
            // A short row is padded with empty cells; surplus cells are
            // ignored.
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            write!(out, "{}{}", cell, " ".repeat(width - display_width(cell)))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nRows returned: {}", result.rows.len())?;

    Ok(())
}

fn column_widths(result: &ResultSet) -> Vec<usize> {
    let mut widths: Vec<usize> = result.columns.iter().map(|name| display_width(name)).collect();

    for row in &result.rows {
        for (idx, cell) in row.iter().enumerate().take(widths.len()) {
            widths[idx] = widths[idx].max(display_width(cell));
        }
    }

    for width in widths.iter_mut() {
        *width += COLUMN_PADDING;
    }

    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(result: &ResultSet) -> String {
        let mut buf = Vec::new();
        render(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> ResultSet {
        ResultSet {
            columns: vec!["name".to_string(), "price".to_string()],
            rows: vec![
                vec!["Lotion".to_string(), "12".to_string()],
                vec!["Soap".to_string(), "3".to_string()],
            ],
        }
    }

    #[test]
    fn empty_result_renders_notice_only() {
        let result = ResultSet {
            columns: vec!["name".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(render_to_string(&result), "\nNo data found\n");
    }

    #[test]
    fn columns_are_padded_to_widest_value_plus_four() {
        let output = render_to_string(&sample());
        let lines: Vec<&str> = output.lines().collect();

        // name column: max(4, 6, 4) + 4 = 10; price column: max(5, 2, 1) + 4 = 9
        assert_eq!(lines[1], "name      price    ");
        assert_eq!(lines[2], "-".repeat(19));
        assert_eq!(lines[3], "Lotion    12       ");
        assert_eq!(lines[4], "Soap      3        ");
    }

    #[test]
    fn separator_length_is_sum_of_widths() {
        let output = render_to_string(&sample());
        let separator = output.lines().nth(2).unwrap();
        let header = output.lines().nth(1).unwrap();
        assert_eq!(separator.len(), 19);
        assert_eq!(header.len(), separator.len());
    }

    #[test]
    fn trailing_count_matches_row_count() {
        let output = render_to_string(&sample());
        assert!(output.ends_with("\nRows returned: 2\n"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let result = sample();
        assert_eq!(render_to_string(&result), render_to_string(&result));
    }

    #[test]
    fn multi_byte_cells_align_with_ascii_cells() {
        let result = ResultSet {
            columns: vec!["brand".to_string(), "origin".to_string()],
            rows: vec![
                vec!["Lumène".to_string(), "FI".to_string()],
                vec!["Avon".to_string(), "US".to_string()],
            ],
        };
        let output = render_to_string(&result);
        let lines: Vec<&str> = output.lines().collect();

        // Both data lines occupy the same number of character positions even
        // though the byte lengths differ.
        assert_eq!(lines[3].chars().count(), lines[4].chars().count());
        assert_eq!(lines[3], "Lumène    FI        ");
    }

    #[test]
    fn short_rows_are_padded_and_surplus_cells_ignored() {
        let result = ResultSet {
            columns: vec!["a".to_string(), "b".to_string()],
            rows: vec![
                vec!["only".to_string()],
                vec!["x".to_string(), "y".to_string(), "extra".to_string()],
            ],
        };
        let output = render_to_string(&result);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[3], "only    ".to_string() + &" ".repeat(5));
        assert_eq!(lines[4], "x       y    ");
        assert!(!output.contains("extra"));
    }
}
