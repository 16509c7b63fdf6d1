pub mod append;
pub mod dataset;
pub mod spec;
pub mod theme;

pub use append::{RenderMode, is_append};
pub use dataset::{DEFAULT_COLUMN_COUNT, Dataset, DatasetSnapshot, Row};
pub use spec::{VisualSpec, compose};
pub use theme::{FALLBACK_BG_COLOR, FALLBACK_BODY_TEXT_COLOR, Theme, ThemeColors};
