// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a [`Table`].
pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain text table with a header row and aligned columns.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'static str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
        }
    }

    fn widths(&self, header: &[Cow<'_, str>], rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        cells: &[Cow<'_, str>],
        widths: &[usize],
        data: Option<&T>,
    ) -> fmt::Result {
        let last = self.columns.len().saturating_sub(1);
        for (i, ((col, cell), width)) in self.columns.iter().zip(cells).zip(widths).enumerate() {
            let padded = match col.padding_direction() {
                // Last column does not need padding if it's left-aligned
                PaddingDirection::Left if i == last => cell.to_string(),
                PaddingDirection::Left => pad(cell, *width, false),
                PaddingDirection::Right => pad(cell, *width, true),
            };

            match data.and_then(|d| col.color(d)) {
                Some(color) => write!(f, "{}", padded.color(color))?,
                None if data.is_none() => write!(f, "{}", padded.bold())?,
                None => write!(f, "{padded}")?,
            }

            if i < last {
                f.write_str(self.separator)?;
            }
        }
        writeln!(f)
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<_> = self.columns.iter().map(|c| c.name()).collect();
        let rows: Vec<Vec<_>> = self
            .data
            .iter()
            .map(|d| self.columns.iter().map(|c| c.format(d)).collect())
            .collect();

        let widths = self.widths(&header, &rows);
        self.write_row(f, &header, &widths, None)?;
        for (row, data) in rows.iter().zip(self.data) {
            self.write_row(f, row, &widths, Some(data))?;
        }
        Ok(())
    }
}

/// Pads by display width, so wide characters line up.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Col(usize, PaddingDirection);

    impl TableColumn<(&'static str, &'static str)> for Col {
        fn name(&self) -> Cow<'_, str> {
            if self.0 == 0 { "Key" } else { "Value" }.into()
        }

        fn format<'a>(&self, data: &'a (&'static str, &'static str)) -> Cow<'a, str> {
            if self.0 == 0 { data.0 } else { data.1 }.into()
        }

        fn padding_direction(&self) -> PaddingDirection {
            self.1
        }
    }

    #[test]
    fn test_table_aligns_columns() {
        colored::control::set_override(false);
        let columns = [
            Col(0, PaddingDirection::Right),
            Col(1, PaddingDirection::Left),
        ];
        let data = [("a", "first"), ("long", "second")];
        let out = Table::new(&columns, &data).to_string();
        assert_eq!(out, " Key  Value\n   a  first\nlong  second\n");
    }

    #[test]
    fn test_table_wide_characters() {
        colored::control::set_override(false);
        let columns = [
            Col(0, PaddingDirection::Left),
            Col(1, PaddingDirection::Left),
        ];
        let data = [("会议", "x"), ("ab", "y")];
        let out = Table::new(&columns, &data).to_string();
        assert_eq!(out, "Key   Value\n会议  x\nab    y\n");
    }
}
