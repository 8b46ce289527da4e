use std::{borrow::Cow, fmt::Write};

const COLUMN_SEPARATOR: &str = " | ";
const JUNCTION: &str = "-+-";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

struct Column<'a> {
    header: &'a str,
    alignment: Alignment,
}

/// Plain-text table with a header rule, sized to its widest cells.
#[derive(Default)]
pub struct TextTableBuilder<'a> {
    columns: Vec<Column<'a>>,
    rows: Vec<Vec<Cow<'a, str>>>,
}

impl<'a> TextTableBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, header: &'a str, alignment: Alignment) -> Self {
        self.columns.push(Column { header, alignment });
        self
    }

    /// Missing trailing cells render empty; extra cells are dropped.
    pub fn row(mut self, cells: impl IntoIterator<Item = Cow<'a, str>>) -> Self {
        self.rows.push(cells.into_iter().collect());
        self
    }

    pub fn rows<R>(self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = Cow<'a, str>>,
    {
        rows.into_iter().fold(self, |table, row| table.row(row))
    }

    pub fn build(self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| display_width(cell))
                    .fold(display_width(column.header), usize::max)
            })
            .collect();

        let mut out = String::with_capacity(64 * (self.rows.len() + 2));
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
        self.write_line(&mut out, &headers, &widths);

        let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        let _ = writeln!(out, "{}", rule.join(JUNCTION));

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(|cell| &**cell).collect();
            self.write_line(&mut out, &cells, &widths);
        }
        out
    }

    fn write_line(&self, out: &mut String, cells: &[&str], widths: &[usize]) {
        let mut line = String::new();
        for (idx, (column, &width)) in self.columns.iter().zip(widths).enumerate() {
            if idx > 0 {
                line.push_str(COLUMN_SEPARATOR);
            }
            let cell = cells.get(idx).copied().unwrap_or_default();
            let gap = " ".repeat(width.saturating_sub(display_width(cell)));
            match column.alignment {
                Alignment::Left => {
                    line.push_str(cell);
                    line.push_str(&gap);
                }
                Alignment::Right => {
                    line.push_str(&gap);
                    line.push_str(cell);
                }
            }
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

/// Terminal column estimate: East Asian wide and fullwidth glyphs take two
/// columns, everything else one.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1F64F
            | 0x1F900..=0x1F9FF
            | 0x20000..=0x3FFFD
    )
}
