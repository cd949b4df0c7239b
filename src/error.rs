//! Host error types.
//!
//! Components never fail; everything here surfaces from mounting a node
//! tree or from talking to the terminal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlexError {
    /// A size the host cannot turn into terminal cells.
    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<taffy::TaffyError> for FlexError {
    fn from(err: taffy::TaffyError) -> Self {
        Self::Layout(err.to_string())
    }
}
