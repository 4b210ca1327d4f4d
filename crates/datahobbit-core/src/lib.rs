//! Core types for the datahobbit data generator.
//!
//! This crate provides the foundational types shared by every stage of the
//! generation pipeline:
//!
//! - [`Schema`] / [`FieldSpec`] - the validated, ordered field list
//! - [`FieldType`] / [`Constraints`] - per-field type and normalised bounds
//! - [`ColumnKind`] - the physical column each field type maps onto
//! - [`Value`] / [`Record`] - one synthesised row
//!
//! # Architecture
//!
//! ```text
//! datahobbit-core (this crate)
//!    │
//!    ├─── datahobbit-generator  (synthesises Records from a Schema)
//!    │
//!    ├─── datahobbit-csv        (renders Records as delimited text)
//!    └─── datahobbit-parquet    (encodes Records into row groups)
//! ```
//!
//! # Example
//!
//! ```rust
//! use datahobbit_core::{ColumnKind, Schema};
//!
//! let schema = Schema::parse(r#"{
//!     "columns": [
//!         {"name": "id", "type": "integer"},
//!         {"name": "name", "type": "string", "constraints": {"max_length": 12}}
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.fields()[0].column_kind(), ColumnKind::Int64);
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{Constraints, FieldSpec, Schema, SchemaError};
pub use types::{ColumnKind, FieldType};
pub use values::{Record, Value};
