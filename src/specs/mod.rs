// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how one league page lays out its table and turns a
//! [`RawTable`](crate::core::html::RawTable) into typed raw rows.
//!
//! ## What lives here
//! - The **expected schema** of each page (column positions + header aliases),
//!   validated before any row is read.
//! - **Row shaping** that depends only on one page: dropping the footer,
//!   dropping bye weeks, dropping blank rows.
//!
//! ## What does **not** live here
//! - Fetching (that's [`source`](crate::source)).
//! - Cross-page work: concatenation, the pagination-artifact filter, type
//!   coercion, joining (that's [`scrape`](crate::scrape)).
//!
//! ## Pages
//! - `scores` – bowler-info page, one per league year:
//!   `Week, Date, Game 1, Game 2, Game 3, Series, …` plus a totals footer.
//! - `lanes` – team-history page, several per league year:
//!   week in column 1, date in column 2, lane number in column 8.
//!
//! Specs are tested offline against small inline fixtures.
pub mod lanes;
pub mod schema;
pub mod scores;
