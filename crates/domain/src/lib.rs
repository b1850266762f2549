//! Domain layer for TempPad
//!
//! Contains the core dashboard logic: weather rows keyed by the fixed sheet
//! columns, reading normalization, sky-condition classification, and row
//! filtering. This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod row_filter;
pub mod value_objects;

pub use entities::*;
pub use row_filter::{RowSelection, filter_rows, regions};
pub use value_objects::*;
