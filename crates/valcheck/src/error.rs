use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    /// Bound text could not be parsed into the checker's value type.
    #[error("invalid bound value `{text}`: {reason}")]
    Parse { text: String, reason: String },

    /// An attribute name could not be bound to the expected type or
    /// access mode.
    #[error("cannot bind attribute `{name}`: {reason}")]
    Resolution { name: String, reason: String },

    /// The requested checker type index is not in the registry.
    #[error("checker type {index} is not registered (valid indexes are 0..{count})")]
    Selection { index: usize, count: usize },

    /// Evaluation or configuration was requested before any checker
    /// type was selected.
    #[error("no checker type selected")]
    NotReady,

    #[error("config error: {0}")]
    Config(#[from] confique::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckError>;
