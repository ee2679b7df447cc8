pub mod axis;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::CategoryAxis;
pub use scale::{ValueScale, format_tick_label};
pub use series::{PlotPoint, Series};
pub use types::Viewport;
