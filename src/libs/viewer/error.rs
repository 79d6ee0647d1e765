use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// No container node with this id in the host document
    MissingContainer(String),
    /// The container holds no chunk elements to measure
    MissingChunkElements(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::MissingContainer(id) => write!(f, "Cannot find container element: {}", id),
            ViewerError::MissingChunkElements(id) => {
                write!(f, "Cannot find chunk elements in: {}", id)
            }
        }
    }
}

impl std::error::Error for ViewerError {}
