use tracing::{debug, trace};

use crate::core::{Dataset, DatasetSnapshot, RenderMode, Theme, VisualSpec, compose, is_append};
use crate::error::ChartResult;
use crate::render::ChartRenderer;

use super::ChartViewConfig;

/// Drives one chart surface through update events.
///
/// Per event: compose the effective spec (always), classify the dataset
/// transition against the snapshot of the last successful render, hand both to
/// the renderer with the chosen mode, then replace the snapshot. The view
/// retains no reference to caller data between events beyond that snapshot.
pub struct ChartView<R: ChartRenderer> {
    renderer: R,
    theme: Theme,
    library_defaults: VisualSpec,
    prev: Option<DatasetSnapshot>,
}

impl<R: ChartRenderer> ChartView<R> {
    #[must_use]
    pub fn new(renderer: R, config: ChartViewConfig) -> Self {
        Self {
            renderer,
            theme: config.theme,
            library_defaults: config.library_defaults,
            prev: None,
        }
    }

    /// Handles one update event from the host.
    ///
    /// Returns the mode the renderer was invoked with. On compose or render
    /// failure the previous snapshot stays intact, so the next event still
    /// compares against the last dataset that actually reached the screen.
    pub fn update(&mut self, raw_spec_json: &str, dataset: &Dataset) -> ChartResult<RenderMode> {
        let spec = compose(raw_spec_json, &self.theme, &self.library_defaults)?;

        let append = match &self.prev {
            Some(prev) => is_append(prev, dataset),
            None => false,
        };
        let mode = RenderMode::from_append_decision(append);
        debug!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            ?mode,
            "dispatching update to renderer"
        );

        self.renderer.render(&spec, dataset, mode)?;
        self.prev = Some(dataset.snapshot());
        trace!(rows = dataset.row_count(), "snapshot replaced after render");
        Ok(mode)
    }

    /// Swaps the active theme; takes effect on the next update event.
    pub fn set_theme(&mut self, theme: Theme) {
        debug!("theme replaced");
        self.theme = theme;
    }

    /// Composes the effective spec without rendering, for hosts that need to
    /// inspect the merged config ahead of a draw.
    pub fn effective_spec(&self, raw_spec_json: &str) -> ChartResult<VisualSpec> {
        compose(raw_spec_json, &self.theme, &self.library_defaults)
    }

    /// Forgets the previous dataset, forcing the next update onto the
    /// full-replace path.
    pub fn reset_snapshot(&mut self) {
        self.prev = None;
    }

    #[must_use]
    pub fn previous_snapshot(&self) -> Option<&DatasetSnapshot> {
        self.prev.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
