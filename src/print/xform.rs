//! Projection of rows onto an ordered column list

use crate::arrange::Row;

/// Cells of `row` in `columns` order, with `placeholder` for absent values
pub fn project(columns: &[String], row: &Row, placeholder: &str) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            row.get(column)
                .and_then(Option::as_deref)
                .unwrap_or(placeholder)
                .to_string()
        })
        .collect()
}

/// Project every row of a flat or grouped arrangement
pub fn project_rows<'r>(
    columns: &[String],
    rows: impl IntoIterator<Item = &'r Row>,
    placeholder: &str,
) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|row| project(columns, row, placeholder))
        .collect()
}

/// Project depth-first rows, indenting the first column by `indent` spaces
/// per level
pub fn project_tree(
    columns: &[String],
    rows: &[(usize, Row)],
    indent: usize,
    placeholder: &str,
) -> Vec<Vec<String>> {
    rows.iter()
        .map(|(depth, row)| {
            let mut cells = project(columns, row, placeholder);
            if let Some(first) = cells.first_mut() {
                first.insert_str(0, &" ".repeat(indent * depth));
            }
            cells
        })
        .collect()
}
