//! Box-drawn text tables
//!
//! Rendering follows the classic texttable look: `+---+` borders, `|`
//! column separators, a `=` rule under the header and a rule after every
//! row. Cells are left-aligned and columns are as wide as their widest cell.

pub struct TextTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty, extra cells are dropped.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = row.into_iter().map(Into::into).collect();
        cells.resize(self.header.len(), String::new());
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn draw(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&rule(&widths, '-'));
        out.push_str(&line(&self.header, &widths));
        out.push_str(&rule(&widths, '='));
        for row in &self.rows {
            out.push_str(&line(row, &widths));
            out.push_str(&rule(&widths, '-'));
        }

        // no trailing newline, callers decide
        out.pop();
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        self.header
            .iter()
            .enumerate()
            .map(|(i, title)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.extend(std::iter::repeat(fill).take(width + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let mut out = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        out.extend(std::iter::repeat(' ').take(pad + 1));
        out.push('|');
    }
    out.push('\n');
    out
}
