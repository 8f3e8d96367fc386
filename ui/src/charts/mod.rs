pub mod model;
pub mod reshape;
pub mod scale;

mod grouped_bars;
pub use grouped_bars::HashtagComparisonChart;
