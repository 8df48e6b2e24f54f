use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriveError {
    #[error("Degenerate tangent at t={t}: finite-difference samples coincide in the x-z plane")]
    DegenerateTangent { t: f64 },

    #[error("Invalid sample count: {0} (at least 2 samples are needed to form a strip)")]
    InvalidSampleCount(usize),

    #[error("Invalid parameter domain: [{start}, {finish})")]
    InvalidDomain { start: f64, finish: f64 },

    #[error("Non-finite geometry at vertex {index}")]
    NonFiniteGeometry { index: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DriveError>;
