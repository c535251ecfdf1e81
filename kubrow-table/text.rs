use kubrow_common::{NOT_AVAILABLE, add_padding, add_padding_left};
use std::fmt::Display;

use crate::{Header, Row};

#[cfg(test)]
#[path = "./text.tests.rs"]
mod text_tests;

const COLUMN_SEPARATOR: &str = "  ";

/// Plain text table made of a [`Header`] and its [`Row`]s.\
/// **Note** that wide columns are hidden unless `show_wide` is set.
pub struct TextTable<'a> {
    header: &'a Header,
    rows: &'a [Row],
    show_wide: bool,
}

impl<'a> TextTable<'a> {
    /// Creates new [`TextTable`] instance.
    pub fn new(header: &'a Header, rows: &'a [Row], show_wide: bool) -> Self {
        Self {
            header,
            rows,
            show_wide,
        }
    }

    /// Returns table lines, header first.
    pub fn lines(&self) -> Vec<String> {
        let visible = self.header.visible_columns(self.show_wide);
        let widths = self.widths(&visible);

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.line(&visible, &widths, |i| self.header.columns()[i].name.as_ref()));
        for row in self.rows {
            lines.push(self.line(&visible, &widths, |i| row.field(i).unwrap_or(NOT_AVAILABLE)));
        }

        lines
    }

    fn widths(&self, visible: &[usize]) -> Vec<usize> {
        visible
            .iter()
            .map(|&i| {
                let name_len = self.header.columns()[i].name.chars().count();
                self.rows
                    .iter()
                    .map(|r| r.field(i).unwrap_or(NOT_AVAILABLE).chars().count())
                    .fold(name_len, usize::max)
            })
            .collect()
    }

    fn line<'b>(&self, visible: &[usize], widths: &[usize], text: impl Fn(usize) -> &'b str) -> String {
        let mut line = String::new();
        for (position, (&i, &width)) in visible.iter().zip(widths).enumerate() {
            if position > 0 {
                line.push_str(COLUMN_SEPARATOR);
            }

            if self.header.columns()[i].to_right() {
                line.push_str(&add_padding_left(text(i), width));
            } else {
                line.push_str(&add_padding(text(i), width));
            }
        }

        line.truncate(line.trim_end().len());
        line
    }
}

impl Display for TextTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
