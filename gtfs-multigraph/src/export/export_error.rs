#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("output file '{0}' already exists and overwrite is disabled")]
    FileExists(String),
    #[error("failure creating output file '{filepath}': {source}")]
    CreateError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure writing to {0}")]
    CsvWriteError(String),
}
