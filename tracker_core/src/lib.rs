#![forbid(unsafe_code)]

//! Core domain model and metric calculations for Fittrack.
//!
//! This crate provides:
//! - Activity records for running, sports walking and swimming
//! - Distance, mean speed and calorie formulas
//! - Summary formatting
//! - Sensor package dispatch and loading
//! - Summary sinks (stdout, JSONL journal) and CSV export

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod training;
pub mod summary;
pub mod dispatch;
pub mod packages;
pub mod sink;
pub mod export;
pub mod runner;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, OutputFormat};
pub use training::Training;
pub use summary::InfoMessage;
pub use dispatch::build_activity;
pub use packages::{load_packages, sample_packages};
pub use sink::{JournalSink, JsonSink, SummarySink, TextSink};
pub use runner::{process_package, run, RunOptions, RunReport};
