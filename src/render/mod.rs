mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::core::{Dataset, RenderMode, VisualSpec};
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive the fully merged spec, the dataset, and the update mode
/// chosen by append detection, so drawing code stays isolated from the
/// decision logic.
pub trait ChartRenderer {
    fn render(
        &mut self,
        spec: &VisualSpec,
        dataset: &Dataset,
        mode: RenderMode,
    ) -> ChartResult<()>;
}
