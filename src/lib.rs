//! # loadzone
//!
//! A cluster-load-aware DNS zone responder.
//!
//! `loadzone` answers name-resolution requests for a cluster of coordinator
//! nodes. Each request fans out a weight-reporting query to every
//! coordinator, aggregates the reported load weights into a per-round table,
//! folds in the local node's own sample, and renders an authoritative zone:
//! an SOA record, one NS record per known coordinator, and a single A record
//! pointing at the least-loaded host.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use loadzone::config::ZoneConfig;
//! use loadzone::service;
//!
//! let config = ZoneConfig::default()
//!     .with_zone("example.com")
//!     .with_record_name("db")
//!     .with_host("coord0.example.com");
//!
//! let records = service::zone(&config, &query, &stats).await?;
//! for record in &records {
//!     println!("{record:?}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core error definitions
//! - [`config`] - Per-round configuration
//! - [`weights`] - Weight sampling, gathering, and the per-round table
//! - [`zone`] - Zone record model and synthesis
//! - [`service`] - The two externally invocable operations
//!
//! ## Design
//!
//! The crate has no shared mutable state: every `zone()` call builds its own
//! weight table and drops it when the rendered records are returned. Remote
//! execution and local session statistics are trait seams supplied by the
//! hosting system; any failure from either aborts the whole round, so a
//! partial zone is never returned.

pub mod base;
pub mod config;
pub mod service;
pub mod weights;
pub mod zone;
