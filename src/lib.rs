//! Data-driven tag-tree widgets.
//!
//! [`dom`] holds the owned node tree; [`widgets`] builds tables, lists and
//! pages on top of it.

pub use dom;
pub use widgets;

pub use widgets::{
    CellRole, ConfigError, DataError, Grid, List, ListData, ListKind, ListMap, Page, PageConfig,
    PageMetadata, PopulateOptions, Table, TableConfig, Value, WidgetError,
};
