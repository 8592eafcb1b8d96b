//! Data-driven builders over the `dom` tree: tables reconciled against grids,
//! nested lists built from sequences and mappings, and a page skeleton.

pub mod error;
pub mod list;
pub mod page;
pub mod reconcile;
pub mod table;
mod value;

pub use crate::error::{ConfigError, DataError, Result, TransformError, WidgetError};
pub use crate::list::{List, ListData, ListKind, ListMap};
pub use crate::page::{Page, PageConfig, PageMetadata};
pub use crate::reconcile::{GrowthDenied, ReconcilePolicy, ReconcileSummary, reconcile_sequence};
pub use crate::table::{CellRole, PopulateOptions, Table, TableConfig};
pub use crate::value::{Grid, Value};
