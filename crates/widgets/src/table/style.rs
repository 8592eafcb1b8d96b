use super::Table;
use crate::error::Result;
use dom::Node;

impl Table {
    /// Adds `class` to the non-empty cells of column `col`, or of every
    /// column when `col` is `None`. The column is checked against every row
    /// before any cell changes.
    pub fn col_class(&mut self, class: &str, col: Option<usize>) -> Result<&mut Self> {
        if let Some(col) = col {
            self.check_column(col)?;
        }
        for row in self.body_mut().children_mut() {
            let Some(row) = row.as_element_mut() else {
                continue;
            };
            for (index, cell) in row.children_mut().iter_mut().enumerate() {
                if col.is_some_and(|col| col != index) {
                    continue;
                }
                if let Some(cell) = cell.as_element_mut().filter(|cell| !cell.is_empty()) {
                    cell.add_class(class);
                }
            }
        }
        Ok(self)
    }

    /// Adds `class` to row `row`, or to every body row when `None`.
    pub fn row_class(&mut self, class: &str, row: Option<usize>) -> Result<&mut Self> {
        match row {
            Some(index) => {
                self.check_row(index)?;
                if let Some(row) = self.body_mut().child_mut(index).and_then(Node::as_element_mut) {
                    row.add_class(class);
                }
            }
            None => {
                for row in self.body_mut().children_mut() {
                    if let Some(row) = row.as_element_mut() {
                        row.add_class(class);
                    }
                }
            }
        }
        Ok(self)
    }
}
