use console::{Alignment, measure_text_width, pad_str};
use serde::{Deserialize, Serialize};

/// How a cell is padded to its column width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    #[default]
    #[serde(alias = "<")]
    Left,
    #[serde(alias = ">")]
    Right,
    #[serde(alias = "^")]
    Center,
}

impl Justification {
    fn alignment(self) -> Alignment {
        match self {
            Justification::Left => Alignment::Left,
            Justification::Right => Alignment::Right,
            Justification::Center => Alignment::Center,
        }
    }
}

/// Lays out rows of cells as aligned text lines
///
/// Each column is as wide as its widest cell or header. Rows are emitted in
/// the order given.
#[derive(Debug, Clone, Copy)]
pub struct TableFormatter {
    gutter: usize,
    show_header: bool,
}

impl TableFormatter {
    pub fn new(gutter: usize) -> Self {
        Self {
            gutter,
            show_header: true,
        }
    }

    pub fn with_header(mut self, show_header: bool) -> Self {
        self.show_header = show_header;
        self
    }

    /// Column widths over the header and every row
    pub fn widths(&self, headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
        headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                rows.iter()
                    .filter_map(|row| row.get(column))
                    .map(|cell| measure_text_width(cell))
                    .fold(measure_text_width(header), usize::max)
            })
            .collect()
    }

    /// Format `rows` under `headers`; columns without a justification are
    /// left-justified
    pub fn lines(
        &self,
        headers: &[String],
        justification: &[Justification],
        rows: &[Vec<String>],
    ) -> Vec<String> {
        let widths = self.widths(headers, rows);
        let gutter = " ".repeat(self.gutter);

        let format_line = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(column, &width)| {
                    let cell = cells.get(column).map_or("", String::as_str);
                    let align = justification.get(column).copied().unwrap_or_default();
                    pad_str(cell, width, align.alignment(), None).into_owned()
                })
                .collect::<Vec<_>>()
                .join(&gutter)
        };

        let header = self.show_header.then(|| format_line(headers));
        header
            .into_iter()
            .chain(rows.iter().map(|row| format_line(row.as_slice())))
            .collect()
    }
}
