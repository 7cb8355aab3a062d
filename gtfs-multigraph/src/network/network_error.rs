use crate::util::TableReadError;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("stop '{0}' is not present in stops.txt")]
    UnknownStop(String),
    #[error(transparent)]
    TableReadError(#[from] TableReadError),
    #[error("{0}")]
    InternalError(String),
}
