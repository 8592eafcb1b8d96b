use super::Table;
use crate::error::Result;
use crate::value::Value;
use dom::{Element, Node};

/// Role of a table cell: data (`td`) or header (`th`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    Data,
    Header,
}

impl CellRole {
    pub fn tag(self) -> &'static str {
        match self {
            CellRole::Data => "td",
            CellRole::Header => "th",
        }
    }

    pub fn of(cell: &Element) -> Option<CellRole> {
        match cell.name() {
            "td" => Some(CellRole::Data),
            "th" => Some(CellRole::Header),
            _ => None,
        }
    }

    pub(crate) fn cell(self, value: Value) -> Element {
        let mut cell = Element::new(self.tag());
        cell.set_content(value.into_node());
        cell
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Col,
    Row,
}

impl Scope {
    fn as_str(self) -> &'static str {
        match self {
            Scope::Col => "col",
            Scope::Row => "row",
        }
    }
}

impl Table {
    /// Promotes the cells at the given `(row, col)` positions to header
    /// cells scoped to their column or row.
    ///
    /// All positions are checked first; nothing changes if any is out of
    /// bounds. Empty cells are left as they are.
    pub fn make_scope(&mut self, col_scopes: &[(usize, usize)], row_scopes: &[(usize, usize)]) -> Result<&mut Self> {
        for &(row, col) in col_scopes.iter().chain(row_scopes) {
            self.cell(row, col)?;
        }
        self.promote_cells(col_scopes, Scope::Col);
        self.promote_cells(row_scopes, Scope::Row);
        Ok(self)
    }

    fn promote_cells(&mut self, positions: &[(usize, usize)], scope: Scope) {
        let body = self.body_mut();
        for &(row, col) in positions {
            let slot = body
                .child_mut(row)
                .and_then(Node::as_element_mut)
                .and_then(|cells| cells.child_mut(col))
                .and_then(Node::as_element_mut);
            let Some(cell) = slot.filter(|cell| !cell.is_empty()) else {
                continue;
            };
            let taken = std::mem::take(cell);
            *cell = promote(taken, scope);
        }
    }
}

fn promote(cell: Element, scope: Scope) -> Element {
    let (_, attributes, children) = cell.into_parts();
    let mut header = Element::with_attrs(CellRole::Header.tag(), attributes).with_children(children);
    header.set_attr("scope", scope.as_str());
    header
}
