//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod sheets_adapter;

pub use sheets_adapter::SheetsAdapter;
