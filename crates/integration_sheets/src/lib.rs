//! Google Sheets integration
//!
//! Client for the Google Sheets values API
//! (<https://developers.google.com/sheets/api>), authenticated with a
//! service-account key via the OAuth JWT-bearer grant.

pub mod auth;
pub mod client;
mod error;
mod models;

pub use auth::{AccessTokenProvider, SPREADSHEET_SCOPE, ServiceAccountKey};
pub use client::{GoogleSheetsClient, SheetsConfig, SpreadsheetClient};
pub use error::SheetsError;
pub use models::SheetTable;
