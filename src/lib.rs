//! radar-rs: radar (spider) chart layout and reconciliation engine.
//!
//! This crate derives polar layout (axes, colors, domain ticks, projected
//! polygons) from tabular rows and reconciles consecutive renders into keyed
//! enter/update/exit sets so an external surface can animate transitions.
//! Drawing itself is delegated entirely to [`render::Surface`] implementors.

pub mod api;
pub mod core;
pub mod error;
pub mod reconcile;
pub mod render;
pub mod telemetry;

pub use api::{RadarEngine, RadarEngineConfig};
pub use error::{RadarError, RadarResult};
