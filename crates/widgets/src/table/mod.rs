//! Table widget: a `<table>` whose body rows are reconciled against grids.
//!
//! The root owns its sections in a fixed order: `caption`, `thead`, `tbody`,
//! `tfoot`. The body always exists; the other sections are created on first
//! use and replaced in place afterwards.

mod populate;
mod scope;
mod style;
mod transform;


pub use populate::PopulateOptions;
pub use scope::CellRole;

use crate::error::{DataError, Result};
use crate::value::{Grid, Value};
use dom::{Element, Node};

const TABLE: &str = "table";
const CAPTION: &str = "caption";
const HEAD: &str = "thead";
const BODY: &str = "tbody";
const FOOT: &str = "tfoot";
const ROW: &str = "tr";

pub(crate) const LOG_TARGET: &str = "widgets.table";

/// Initial shape of a [`Table`].
///
/// With `data` absent or empty the table gets `rows + head + foot` rows of
/// `cols` empty cells, split into header, body and footer as requested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableConfig {
    pub rows: usize,
    pub cols: usize,
    pub data: Option<Grid>,
    pub caption: Option<String>,
    pub head: bool,
    pub foot: bool,
    /// Attributes of the `<table>` root element.
    pub attributes: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    root: Element,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let TableConfig {
            rows,
            cols,
            data,
            caption,
            head,
            foot,
            attributes,
        } = config;

        let mut data = match data {
            Some(data) if !data.is_empty() => data,
            _ => {
                let total = rows + usize::from(head) + usize::from(foot);
                vec![vec![Value::Empty; cols]; total]
            }
        };

        let mut table = Table {
            root: Element::with_attrs(TABLE, attributes).with_child(Element::new(BODY)),
        };
        if let Some(caption) = caption.filter(|text| !text.is_empty()) {
            table.make_caption(caption);
        }
        if head && !data.is_empty() {
            let header = data.remove(0);
            table.make_header(header);
        }
        if foot {
            if let Some(footer) = data.pop() {
                table.make_footer(footer);
            }
        }
        let width = data.iter().map(Vec::len).max().unwrap_or(0);
        table.fill_body(data, Some(width));
        log::trace!(
            target: LOG_TARGET,
            "built {}: {} rows x {} cols",
            table.label(),
            table.row_count(),
            table.column_count()
        );
        table
    }

    /// `rows` x `cols` empty body cells.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self::new(TableConfig {
            rows,
            cols,
            ..TableConfig::default()
        })
    }

    pub fn from_data(data: Grid) -> Self {
        Self::new(TableConfig {
            data: Some(data),
            ..TableConfig::default()
        })
    }

    /// Short name used in error messages: `table`, or `table#id`.
    pub fn label(&self) -> String {
        label(&self.root)
    }

    pub fn as_element(&self) -> &Element {
        &self.root
    }

    pub fn into_node(self) -> Node {
        Node::Element(self.root)
    }

    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.root.set_attr(key, value);
        self
    }

    pub fn body(&self) -> &Element {
        match self.root.find_child(BODY) {
            Some(body) => body,
            None => unreachable!("table body is created on construction"),
        }
    }

    pub(crate) fn body_mut(&mut self) -> &mut Element {
        match self.root.find_child_mut(BODY) {
            Some(body) => body,
            None => unreachable!("table body is created on construction"),
        }
    }

    pub fn caption(&self) -> Option<&Element> {
        self.root.find_child(CAPTION)
    }

    /// The header row (`thead > tr`), if a header was made.
    pub fn header(&self) -> Option<&Element> {
        self.root
            .find_child(HEAD)
            .and_then(|head| head.find_child(ROW))
    }

    /// The footer row (`tfoot > tr`), if a footer was made.
    pub fn footer(&self) -> Option<&Element> {
        self.root
            .find_child(FOOT)
            .and_then(|foot| foot.find_child(ROW))
    }

    pub fn rows(&self) -> impl Iterator<Item = &Element> {
        self.body().children().iter().filter_map(Node::as_element)
    }

    pub fn row_count(&self) -> usize {
        self.body().len()
    }

    /// Widest body row; rows may be ragged when populated without
    /// normalization.
    pub fn column_count(&self) -> usize {
        self.rows().map(Element::len).max().unwrap_or(0)
    }

    pub fn row(&self, index: usize) -> Result<&Element> {
        let len = self.row_count();
        self.body()
            .child(index)
            .and_then(Node::as_element)
            .ok_or_else(|| row_out_of_bounds(&self.root, index, len).into())
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Element> {
        let cells = self.row(row)?;
        cells
            .child(col)
            .and_then(Node::as_element)
            .ok_or_else(|| column_out_of_bounds(&self.root, row, col, cells.len()).into())
    }

    pub fn cell_value(&self, row: usize, col: usize) -> Result<Value> {
        self.cell(row, col).map(Value::from_content)
    }

    /// Body content as a grid, one entry per cell.
    pub fn to_values(&self) -> Grid {
        self.rows().map(row_values).collect()
    }

    /// Rebuilds the caption content, creating the caption if needed.
    pub fn make_caption(&mut self, value: impl Into<Value>) -> &mut Self {
        self.section_mut(CAPTION)
            .set_content(value.into().into_node());
        self
    }

    /// Rebuilds the single header row with one `th` per value.
    pub fn make_header(&mut self, values: Vec<Value>) -> &mut Self {
        let row = build_row(values, CellRole::Header);
        self.section_mut(HEAD).set_content(Some(row.into()));
        self
    }

    /// Rebuilds the single footer row with one `td` per value.
    pub fn make_footer(&mut self, values: Vec<Value>) -> &mut Self {
        let row = build_row(values, CellRole::Data);
        self.section_mut(FOOT).set_content(Some(row.into()));
        self
    }

    /// Section named `name`, inserted at its canonical position if missing.
    fn section_mut(&mut self, name: &str) -> &mut Element {
        if self.root.position(name).is_none() {
            let rank = section_rank(name);
            let at = self
                .root
                .children()
                .iter()
                .take_while(|child| child.name().is_some_and(|other| section_rank(other) < rank))
                .count();
            self.root.insert(at, Element::new(name));
        }
        match self.root.find_child_mut(name) {
            Some(section) => section,
            None => unreachable!("section {name} was just inserted"),
        }
    }

    /// Every body row must have a cell at `col`.
    pub(crate) fn check_column(&self, col: usize) -> Result<()> {
        if self.row_count() == 0 {
            return Err(column_out_of_bounds(&self.root, 0, col, 0).into());
        }
        for (index, row) in self.rows().enumerate() {
            if col >= row.len() {
                return Err(column_out_of_bounds(&self.root, index, col, row.len()).into());
            }
        }
        Ok(())
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        self.row(row).map(|_| ())
    }
}

fn section_rank(name: &str) -> usize {
    match name {
        CAPTION => 0,
        HEAD => 1,
        BODY => 2,
        FOOT => 3,
        _ => 4,
    }
}

pub(crate) fn build_row(values: Vec<Value>, role: CellRole) -> Element {
    Element::new(ROW).with_children(
        values
            .into_iter()
            .map(|value| role.cell(value).into()),
    )
}

pub(crate) fn row_values(row: &Element) -> Vec<Value> {
    row.children()
        .iter()
        .filter_map(Node::as_element)
        .map(Value::from_content)
        .collect()
}

pub(crate) fn label(root: &Element) -> String {
    match root.attr("id").filter(|id| !id.is_empty()) {
        Some(id) => format!("{}#{id}", root.name()),
        None => root.name().to_string(),
    }
}

pub(crate) fn row_out_of_bounds(root: &Element, index: usize, len: usize) -> DataError {
    DataError::RowOutOfBounds {
        widget: label(root),
        index,
        len,
    }
}

pub(crate) fn column_out_of_bounds(root: &Element, row: usize, index: usize, len: usize) -> DataError {
    DataError::ColumnOutOfBounds {
        widget: label(root),
        row,
        index,
        len,
    }
}
