use crate::demand::DemandError;
use crate::export::ExportError;
use crate::network::NetworkError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure building network: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("failure computing demand: {source}")]
    DemandError {
        #[from]
        source: DemandError,
    },
    #[error("failure writing outputs: {source}")]
    ExportError {
        #[from]
        source: ExportError,
    },
}
