//! Service-account wrapper around the Google Sheets v4 API.
//!
//! A [`sheets::Session`] authorizes lazily on its first call and exposes
//! spreadsheet creation, value writes, header formatting, column auto-resize,
//! dropdown validation and metadata lookup.

pub mod config;
pub mod error;
pub mod sheets;

pub use error::{AppError, Result};
