#![deny(unsafe_code)]

use crate::value::Cell;

/// An ordered sequence of rows sharing one column schema.
///
/// Column order defines serialization order when no projection is applied.
/// Rows are positional: `rows[r][c]` belongs to `columns[c]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Index of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn push_row(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    /// Cell at `(row, column name)`, if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Append a new column with one cell per existing row.
    pub fn add_column(&mut self, name: impl Into<String>, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.rows.len());
        self.columns.push(name.into());
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.push(cell);
        }
    }

    /// Rename the first column matching `from`. Returns false if absent.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(idx) => {
                self.columns[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Project onto the requested columns, silently dropping names that do
    /// not exist. Requested order is preserved.
    pub fn select(&self, requested: &[String]) -> Table {
        let indices: Vec<usize> = requested
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        let columns = indices
            .iter()
            .map(|&idx| self.columns[idx].clone())
            .collect();
        let mut table = Table::new(columns);
        for row in &self.rows {
            table.push_row(indices.iter().map(|&idx| row[idx].clone()).collect());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(vec![Cell::Text("1".to_string()), Cell::Number(2.0)]);
        table.push_row(vec![Cell::Missing, Cell::Number(4.5)]);
        table
    }

    #[test]
    fn column_lookup() {
        let table = sample();
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column_index("c"), None);
        assert!(table.has_column("a"));
    }

    #[test]
    fn cell_access() {
        let table = sample();
        assert_eq!(table.cell(0, "b"), Some(&Cell::Number(2.0)));
        assert_eq!(table.cell(1, "a"), Some(&Cell::Missing));
        assert_eq!(table.cell(2, "a"), None);
        assert_eq!(table.cell(0, "missing"), None);
    }

    #[test]
    fn add_column_extends_rows() {
        let mut table = sample();
        table.add_column("c", vec![Cell::Text("x".to_string()), Cell::Missing]);
        assert_eq!(table.width(), 3);
        assert_eq!(table.cell(0, "c"), Some(&Cell::Text("x".to_string())));
    }

    #[test]
    fn rename_column_first_match() {
        let mut table = sample();
        assert!(table.rename_column("b", "renamed"));
        assert!(!table.rename_column("b", "again"));
        assert_eq!(table.columns, vec!["a", "renamed"]);
    }

    #[test]
    fn select_drops_unknown_and_preserves_order() {
        let table = sample();
        let projected = table.select(&[
            "b".to_string(),
            "nope".to_string(),
            "a".to_string(),
        ]);
        assert_eq!(projected.columns, vec!["b", "a"]);
        assert_eq!(projected.height(), 2);
        assert_eq!(projected.cell(0, "a"), Some(&Cell::Text("1".to_string())));
    }
}
