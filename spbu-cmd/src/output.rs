//! Plain-text tables and JSON rendering for command output.

use crate::Format;
use serde::Serialize;

/// A left-aligned text table sized to its widest cell per column.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        let line = |cells: &[String]| {
            cells
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = vec![line(self.headers.as_slice())];
        out.extend(self.rows.iter().map(|r| line(r.as_slice())));
        out.join("\n")
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render `value` as JSON, or as the table built by `table` otherwise.
pub fn render<T, F>(format: Format, value: &T, table: F) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> Table,
{
    match format {
        Format::Json => to_json(value),
        Format::Table => Ok(table(value).render()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let mut table = Table::new(["ID", "NAME"]);
        table.row(["SPBU-1", "SPBU 34.123.01"]);
        table.row(["X", "Y"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID      NAME");
        assert_eq!(lines[1], "SPBU-1  SPBU 34.123.01");
        assert_eq!(lines[2], "X       Y");
    }

    #[test]
    fn empty_table_is_just_headers() {
        assert_eq!(Table::new(["A", "B"]).render(), "A  B");
    }

    #[test]
    fn json_rendering_skips_table() {
        let out = render(Format::Json, &vec![1, 2], |_| unreachable!()).unwrap();
        assert_eq!(out, "[\n  1,\n  2\n]");
    }
}
