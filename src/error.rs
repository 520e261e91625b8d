#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    #[error("{what} out of bounds for {width}x{height} grid")]
    OutOfBounds {
        what: String,
        width: usize,
        height: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl LifeError {
    pub(crate) fn coord(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            what: format!("coordinate ({x}, {y})"),
            width,
            height,
        }
    }

    pub(crate) fn index(index: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            what: format!("index {index}"),
            width,
            height,
        }
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
