//! plotline: pull-based line-chart core.
//!
//! The crate owns the chart math (shared category axis, autoscale, the
//! value/row transform, a deterministic render pipeline, and pointer-driven
//! inspection with timed auto-dismiss) behind two host seams: a
//! [`api::DataProvider`] that supplies values and a [`render::Renderer`] that
//! executes materialized frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
