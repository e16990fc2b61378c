//! An in-memory columnar table engine.
//!
//! Frames are built column by column or row by row, traversed with a
//! [`frame::Rower`] sequentially ([`frame::DataFrame::map`]), in parallel
//! ([`frame::DataFrame::pmap`]) or as a filter, and registered into a
//! [`store::KeyValueStore`] for the rest of the system to pick up.

pub mod config;
pub mod error;
pub mod frame;
pub mod store;

pub use error::{FrameError, Result};
