use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("bar geometry requires at least one column")]
    EmptyData,

    #[error("degenerate axis range: minimum and maximum are both {value}")]
    DegenerateAxisRange { value: i64 },

    #[error("axis range maximum {maximum} is below minimum {minimum}")]
    InvertedAxisRange { minimum: i64, maximum: i64 },

    #[error("spacing percent out of range: {value} (expected 0.0..=1.0)")]
    SpacingPercentOutOfRange { value: f64 },

    #[error("axis increment must be > 0, got {value}")]
    InvalidAxisIncrement { value: i64 },

    #[error("invalid time format pattern: `{pattern}`")]
    InvalidTimeFormat { pattern: String },
}
