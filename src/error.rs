//! Configuration errors.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("level width {width} is outside the allowed range {min}..={max}")]
    WidthOutOfRange { width: usize, min: usize, max: usize },

    #[error("level height {height} is outside the allowed range {min}..={max}")]
    HeightOutOfRange { height: usize, min: usize, max: usize },
}
