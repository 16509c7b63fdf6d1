//! vegalite-rs: update-decision core for declarative chart elements.
//!
//! This crate owns the logic that sits between "new data/config arrived" and
//! "renderer is invoked": append detection for incremental rendering, and the
//! layered merge of library defaults, theme defaults, and user spec config.
//! Drawing stays behind the [`render::ChartRenderer`] seam.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartView, ChartViewConfig};
pub use error::{ChartError, ChartResult};
