use super::{LOG_TARGET, Table, label};
use crate::error::{DataError, Result, TransformError};
use crate::value::Value;

#[derive(Clone, Copy)]
enum Selection {
    All,
    Row(usize),
    Column(usize),
}

impl Selection {
    fn contains(self, row: usize, col: usize) -> bool {
        match self {
            Selection::All => true,
            Selection::Row(index) => index == row,
            Selection::Column(index) => index == col,
        }
    }
}

impl Table {
    /// Replaces the content of every non-empty body cell with `f(content)`.
    ///
    /// With `ignore_errors`, failing cells keep their content and the rest
    /// are still processed. Otherwise the first failure is returned; cells
    /// already transformed stay transformed.
    pub fn map_table<F, E>(&mut self, f: F, ignore_errors: bool) -> Result<&mut Self>
    where
        F: FnMut(&Value) -> std::result::Result<Value, E>,
        E: Into<TransformError>,
    {
        self.map_cells(Selection::All, f, ignore_errors)
    }

    /// Like [`Table::map_table`], restricted to column `col`.
    pub fn map_col<F, E>(&mut self, f: F, col: Option<usize>, ignore_errors: bool) -> Result<&mut Self>
    where
        F: FnMut(&Value) -> std::result::Result<Value, E>,
        E: Into<TransformError>,
    {
        let Some(col) = col else {
            return self.map_table(f, ignore_errors);
        };
        self.check_column(col)?;
        self.map_cells(Selection::Column(col), f, ignore_errors)
    }

    /// Like [`Table::map_table`], restricted to row `row`.
    pub fn map_row<F, E>(&mut self, f: F, row: Option<usize>, ignore_errors: bool) -> Result<&mut Self>
    where
        F: FnMut(&Value) -> std::result::Result<Value, E>,
        E: Into<TransformError>,
    {
        let Some(row) = row else {
            return self.map_table(f, ignore_errors);
        };
        self.check_row(row)?;
        self.map_cells(Selection::Row(row), f, ignore_errors)
    }

    fn map_cells<F, E>(&mut self, selection: Selection, mut f: F, ignore_errors: bool) -> Result<&mut Self>
    where
        F: FnMut(&Value) -> std::result::Result<Value, E>,
        E: Into<TransformError>,
    {
        let widget = label(&self.root);
        for (row, cells) in self.body_mut().children_mut().iter_mut().enumerate() {
            let Some(cells) = cells.as_element_mut() else {
                continue;
            };
            for (col, cell) in cells.children_mut().iter_mut().enumerate() {
                if !selection.contains(row, col) {
                    continue;
                }
                let Some(cell) = cell.as_element_mut().filter(|cell| !cell.is_empty()) else {
                    continue;
                };
                match f(&Value::from_content(cell)) {
                    Ok(value) => {
                        cell.set_content(value.into_node());
                    }
                    Err(err) if ignore_errors => {
                        let err: TransformError = err.into();
                        log::debug!(
                            target: LOG_TARGET,
                            "{widget}: skipping cell ({row}, {col}): {err}"
                        );
                    }
                    Err(err) => {
                        return Err(DataError::Transform {
                            widget,
                            row,
                            col,
                            source: err.into(),
                        }
                        .into());
                    }
                }
            }
        }
        Ok(self)
    }
}
