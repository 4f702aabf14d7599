//! ifprobe-core — network-interface telemetry collection library.
//!
//! Provides:
//! - `collector` — procfs table parsing and metric collection
//! - `namespace` — hierarchical metric path model with wildcard segments
//! - `stats` — per-cycle interface statistics tree
//! - `config` — collector configuration

pub mod collector;
pub mod config;
pub mod namespace;
pub mod stats;
