mod chart_view;
mod view_config;

pub use chart_view::ChartView;
pub use view_config::ChartViewConfig;
