//! Water-quality monitoring core for an aquaculture installation.
//!
//! The service is handed a stream of sensor readings and a threshold
//! configuration, and derives three things on every change: per-parameter
//! range status, the active alert set, and a weighted health score. All
//! evaluation is stateless and synchronous: each cycle recomputes alerts
//! and score from scratch against one profile snapshot, so partial updates
//! can never leave stale state behind.
//!
//! Transport, persistence, and rendering belong to external collaborators;
//! this crate only decodes what it is handed and serializes what it exposes.

pub mod alert;
pub mod analysis;
pub mod config;
pub mod dev_mode;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod profile;
pub mod readings;
pub mod scoring;
pub mod species;
