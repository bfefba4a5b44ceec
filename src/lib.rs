// src/lib.rs
//! Bowling league history scraper.
//!
//! Pipeline: score pages → tidy score table → lane assignments joined on date
//! → snapshot on disk → dashboard / CLI.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod season;
pub mod source;
pub mod specs;

pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod stats;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, JoinError, Result};
