use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown series: {0}")]
    UnknownSeries(String),

    #[error(
        "series `{series}` carries {series_points} points but the category axis has {axis_categories} slots"
    )]
    AxisMismatch {
        series: String,
        series_points: usize,
        axis_categories: usize,
    },
}
