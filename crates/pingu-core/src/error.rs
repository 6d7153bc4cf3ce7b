//! Registry construction errors.
//!
//! These are programming errors in the literal dataset tables, caught when the
//! registry is built. Lookups never produce an error: a missing path resolves
//! to an empty series.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Duplicate key {key:?} under {path:?}")]
    DuplicateKey { path: String, key: String },

    #[error("Record {label:?} at {path:?} repeats measure {key:?}")]
    DuplicateMeasure {
        path: String,
        label: String,
        key: String,
    },

    #[error("Record {label:?} at {path:?} uses the reserved field name {key:?}")]
    ReservedMeasure {
        path: String,
        label: String,
        key: String,
    },

    #[error("Category {category:?} mixes record shapes: expected [{expected}], found [{found}]")]
    InconsistentShape {
        category: String,
        expected: String,
        found: String,
    },
}
