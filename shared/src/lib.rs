//! Shared library for the on-call calendar Lambda.
//!
//! This crate holds the shift-to-calendar translation core: fetching
//! rotation shifts from AWS SSM Contacts and building the iCalendar feed.

pub mod calendar;
pub mod config;
pub mod error;
pub mod shifts;

pub use calendar::build_calendar;
pub use config::Config;
pub use error::{Error, Result};
pub use shifts::{query_window, RotationShift, ShiftFetcher};
