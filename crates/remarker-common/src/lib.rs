//! Common utilities for the Remarker workspace.
//!
//! This crate provides shared infrastructure used by every Remarker crate:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
