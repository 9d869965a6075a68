use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file size: {0}")]
    InvalidSize(u64),

    #[error("Invalid worker count: {0}")]
    InvalidWorkers(usize),

    #[error("Invalid data at byte {offset}: {reason}")]
    Malformed { offset: usize, reason: &'static str },

    #[error("Station name is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("More than {0} distinct stations in one chunk")]
    TooManyStations(usize),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl CalcError {
    pub(crate) fn malformed(offset: usize, reason: &'static str) -> Self {
        CalcError::Malformed { offset, reason }
    }
}
