//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Documents, requests and responses
//! - **clock**: Time source for recency adjustments
//! - **xdg**: XDG directory handling
//! - **source**: Document sources (JSON file, memory)
//! - **search**: Scoring, filtering and the search service
//! - **services**: Unified service container

pub mod clock;
pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod source;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SearchError};
pub use services::Services;
