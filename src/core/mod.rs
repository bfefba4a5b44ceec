// src/core/mod.rs

pub mod coerce;
pub mod html;
pub mod net;
pub mod sanitize;
