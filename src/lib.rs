//! CAALM Search - relevance search for contracts and compliance records
//!
//! Ranks contract and file records against a free-text query using a
//! fixed table of field weights, match-quality multipliers and
//! metadata boosts (recency, priority, status, staleness).
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, clock, xdg
//!   - source (document backends)
//!   - search (scorer, filters, search service)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, SearchError};
pub use core::search::{score, SearchService};
pub use core::services::Services;
pub use core::types::*;
