//! Core port definitions for hydeclock adapters.
//!
//! This module exposes the time sampling contract used by higher level crates
//! to read the wall clock without linking directly against `chrono`.

pub mod time;
