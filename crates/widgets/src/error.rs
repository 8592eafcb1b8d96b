//! Failure taxonomy for widget operations.
//!
//! Every error is reported synchronously to the caller of the violating
//! operation. `widget` fields carry a short label of the offending widget
//! (`table`, `table#prices`, `ul`, ...).

use thiserror::Error;

pub type Result<T, E = WidgetError> = std::result::Result<T, E>;

/// Boxed error returned by a user transform in `map_*`.
pub type TransformError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WidgetError {
    pub fn as_data(&self) -> Option<&DataError> {
        match self {
            WidgetError::Data(err) => Some(err),
            WidgetError::Config(_) => None,
        }
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            WidgetError::Data(DataError::RowOutOfBounds { .. } | DataError::ColumnOutOfBounds { .. })
        )
    }
}

/// Malformed or out-of-contract input data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error(
        "{widget}: data must not be null; use clear() or pass an empty grid to empty the table"
    )]
    NullData { widget: String },
    #[error("{widget}: row index {index} is outside table bounds (0..{len})")]
    RowOutOfBounds {
        widget: String,
        index: usize,
        len: usize,
    },
    #[error("{widget}: column index {index} is outside bounds of row {row} (0..{len})")]
    ColumnOutOfBounds {
        widget: String,
        row: usize,
        index: usize,
        len: usize,
    },
    #[error("{widget}: data has {width} columns but the table is fixed at {max}")]
    TooManyColumns {
        widget: String,
        width: usize,
        max: usize,
    },
    #[error("{widget}: data needs {requested} rows but the table is fixed at {existing}")]
    RowGrowthDisallowed {
        widget: String,
        existing: usize,
        requested: usize,
    },
    #[error("{widget}: list input not supported, expected a sequence or mapping, got {found}")]
    UnsupportedListInput { widget: String, found: &'static str },
    #[error("{widget}: transform failed on cell ({row}, {col})")]
    Transform {
        widget: String,
        row: usize,
        col: usize,
        #[source]
        source: TransformError,
    },
}

/// Invalid widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown list kind {0:?}; expected one of ul, ol, dl")]
    UnknownListKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_name_widget_and_index() {
        let err = WidgetError::from(DataError::RowOutOfBounds {
            widget: "table#prices".to_string(),
            index: 7,
            len: 3,
        });
        assert_eq!(
            err.to_string(),
            "table#prices: row index 7 is outside table bounds (0..3)"
        );
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn transform_errors_keep_their_source() {
        let err = DataError::Transform {
            widget: "table".to_string(),
            row: 1,
            col: 2,
            source: "not a number".into(),
        };
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("not a number")
        );
    }

    #[test]
    fn config_errors_are_not_data_errors() {
        let err = WidgetError::from(ConfigError::UnknownListKind("Xl".to_string()));
        assert!(err.as_data().is_none());
        assert!(err.to_string().contains("\"Xl\""));
    }
}
