// File: crates/linegraph-core/src/error.rs
// Summary: Error type for configuration the layout code cannot work with.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// The Y-position math divides by `min - max`.
    #[error("degenerate value range [{min}, {max}]: min and max must be finite and distinct")]
    DegenerateRange { min: f64, max: f64 },

    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid scroll offset {0}")]
    InvalidOffset(f64),

    #[error("unknown line join '{0}' (expected miter, round or bevel)")]
    UnknownLineJoin(String),

    #[error("unknown line cap '{0}' (expected butt, round or square)")]
    UnknownLineCap(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
