use crate::core::{Dataset, RenderMode, VisualSpec};
use crate::error::ChartResult;
use crate::render::ChartRenderer;

/// No-op renderer used by tests and headless usage.
///
/// It records the last invocation so tests can assert which mode the view
/// selected without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_mode: Option<RenderMode>,
    pub last_row_count: usize,
    pub last_spec: Option<VisualSpec>,
}

impl ChartRenderer for NullRenderer {
    fn render(
        &mut self,
        spec: &VisualSpec,
        dataset: &Dataset,
        mode: RenderMode,
    ) -> ChartResult<()> {
        self.render_count += 1;
        self.last_mode = Some(mode);
        self.last_row_count = dataset.row_count();
        self.last_spec = Some(spec.clone());
        Ok(())
    }
}
