use super::{CellRole, LOG_TARGET, ROW, Table, build_row, column_out_of_bounds, row_out_of_bounds};
use crate::error::{DataError, Result};
use crate::reconcile::{ReconcilePolicy, ReconcileSummary, reconcile_sequence};
use crate::value::{Grid, Value};
use dom::{Element, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulateOptions {
    /// Allow the body to gain rows and cells beyond its current shape.
    pub resize_x: bool,
    /// Right-pad short rows with empty cells so the body is rectangular.
    pub normalize: bool,
}

impl Default for PopulateOptions {
    fn default() -> Self {
        Self {
            resize_x: true,
            normalize: true,
        }
    }
}

impl Table {
    /// Reconciles the body rows against `data`, reusing existing rows and
    /// cells positionally.
    ///
    /// Shape checks run before anything is touched: with `resize_x` unset,
    /// data wider than the body or longer than it is rejected. Surplus body
    /// rows are always removed.
    ///
    /// Only cell content is replaced. Reused cells keep their tag and
    /// attributes, so classes and `make_scope` promotions carry over to the
    /// new data.
    pub fn populate(&mut self, data: Option<Grid>, options: PopulateOptions) -> Result<&mut Self> {
        let data = data.ok_or_else(|| DataError::NullData {
            widget: self.label(),
        })?;
        let max_width = data.iter().map(Vec::len).max().unwrap_or(0);
        let column_count = self.column_count();
        let row_count = self.row_count();

        if !options.resize_x {
            if max_width > column_count {
                return Err(DataError::TooManyColumns {
                    widget: self.label(),
                    width: max_width,
                    max: column_count,
                }
                .into());
            }
            if data.len() > row_count {
                return Err(DataError::RowGrowthDisallowed {
                    widget: self.label(),
                    existing: row_count,
                    requested: data.len(),
                }
                .into());
            }
        }

        let target = if options.resize_x {
            max_width
        } else {
            column_count
        };
        let rows = data.len();
        let (row_summary, cell_summary) =
            self.reconcile_body(data, options.resize_x, options.normalize.then_some(target));
        log::trace!(
            target: LOG_TARGET,
            "populated {} with {rows} rows (width {max_width}): rows {row_summary:?}, cells {cell_summary:?}",
            self.label()
        );
        Ok(self)
    }

    /// Fills a freshly built body; growth is always allowed here.
    pub(super) fn fill_body(&mut self, data: Grid, pad_to: Option<usize>) {
        self.reconcile_body(data, true, pad_to);
    }

    fn reconcile_body(
        &mut self,
        data: Grid,
        grow: bool,
        pad_to: Option<usize>,
    ) -> (ReconcileSummary, ReconcileSummary) {
        let mut cells = ReconcileSummary::default();
        let policy = ReconcilePolicy { grow, trim: true };
        let rows = reconcile_sequence(
            self.body_mut().children_mut(),
            data,
            policy,
            || Element::new(ROW).into(),
            |row, mut values| {
                if let Some(width) = pad_to {
                    if values.len() < width {
                        values.resize(width, Value::Empty);
                    }
                }
                let Some(row) = row.as_element_mut() else {
                    debug_assert!(false, "table body rows are elements");
                    return;
                };
                // Cell growth is always allowed, so this cannot be denied.
                if let Ok(summary) = reconcile_sequence(
                    row.children_mut(),
                    values,
                    ReconcilePolicy::RESIZE,
                    || CellRole::Data.cell(Value::Empty).into(),
                    fill_cell,
                ) {
                    cells += summary;
                }
            },
        );
        // Growth was checked by the caller before anything changed.
        (rows.unwrap_or_default(), cells)
    }

    /// Removes every body row; caption, header and footer stay.
    pub fn clear(&mut self) -> &mut Self {
        self.body_mut().empty();
        self
    }

    /// Appends one body row of `td` cells.
    pub fn add_row(&mut self, row: Vec<Value>, resize_x: bool) -> Result<&mut Self> {
        let column_count = self.column_count();
        if !resize_x && self.row_count() > 0 && row.len() > column_count {
            return Err(DataError::TooManyColumns {
                widget: self.label(),
                width: row.len(),
                max: column_count,
            }
            .into());
        }
        self.body_mut().append(build_row(row, CellRole::Data));
        Ok(self)
    }

    /// Removes a body row (the last one by default) and returns its values.
    pub fn pop_row(&mut self, index: Option<usize>) -> Result<Vec<Value>> {
        let row = self.pop_row_node(index)?;
        Ok(row
            .as_element()
            .map(super::row_values)
            .unwrap_or_default())
    }

    pub fn pop_row_node(&mut self, index: Option<usize>) -> Result<Node> {
        let len = self.row_count();
        let index = index.unwrap_or(len.saturating_sub(1));
        self.check_row(index)?;
        match self.body_mut().remove(index) {
            Some(row) => Ok(row),
            None => Err(row_out_of_bounds(&self.root, index, len).into()),
        }
    }

    /// Removes a cell (last cell of the last row by default) and returns
    /// its content.
    pub fn pop_cell(&mut self, row: Option<usize>, col: Option<usize>) -> Result<Value> {
        let cell = self.pop_cell_node(row, col)?;
        Ok(cell
            .as_element()
            .map(Value::from_content)
            .unwrap_or_default())
    }

    pub fn pop_cell_node(&mut self, row: Option<usize>, col: Option<usize>) -> Result<Node> {
        let row = row.unwrap_or(self.row_count().saturating_sub(1));
        let len = self.row(row)?.len();
        let col = col.unwrap_or(len.saturating_sub(1));
        let removed = self
            .body_mut()
            .child_mut(row)
            .and_then(Node::as_element_mut)
            .and_then(|cells| cells.remove(col));
        removed.ok_or_else(|| column_out_of_bounds(&self.root, row, col, len).into())
    }
}

fn fill_cell(cell: &mut Node, value: Value) {
    if let Some(cell) = cell.as_element_mut() {
        cell.set_content(value.into_node());
    }
}
