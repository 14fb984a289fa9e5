use thiserror::Error;

pub type RadarResult<T> = Result<T, RadarError>;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("row is missing column `{column}`")]
    MissingColumn { column: String },

    #[error("axis `{axis}` is not present in the extracted axis set")]
    AxisNotFound { axis: String },

    #[error("category `{category}` is not present in the color map")]
    CategoryNotFound { category: String },

    #[error("value `{raw}` in column `{column}` is not numeric")]
    InvalidValue { column: String, raw: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
