//! # Razzie Common Library
//!
//! Shared code for the Golden Raspberry Awards service:
//! - Producer win-interval extraction
//! - Nominee list (CSV) ingestion
//! - Database initialization, models and queries
//! - Configuration loading
//! - Error types

pub mod config;
pub mod db;
pub mod error;
pub mod ingest;
pub mod intervals;

pub use error::{Error, Result, ValidationError};
pub use intervals::{extract_intervals, IntervalReport, ProducerInterval, WinRecord};
