use crate::export::ExportError;
use crate::util::TableReadError;

#[derive(thiserror::Error, Debug)]
pub enum DemandError {
    #[error(transparent)]
    TableReadError(#[from] TableReadError),
    #[error(transparent)]
    ExportError(#[from] ExportError),
    #[error("ridership value '{value}' in row {row} is not a finite number")]
    InvalidRidership { row: usize, value: String },
    #[error("GTFS stop id '{stop_id}' is mapped to conflicting ridership rows: {first} and {second}")]
    AmbiguousJoin {
        stop_id: String,
        first: String,
        second: String,
    },
}
