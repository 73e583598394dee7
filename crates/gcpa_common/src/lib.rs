//! Shared foundational types used across the gcpa crates.
//!
//! This crate provides [`TimeValue`], the unit-carrying delay value found in
//! timing reports, along with its normalization and comparison rules.

#![warn(missing_docs)]

pub mod time;

pub use time::{max_by_magnitude, TimeError, TimeValue, UNIT_FACTORS};
