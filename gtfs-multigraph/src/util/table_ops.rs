use std::path::Path;

use serde::de::DeserializeOwned;

#[derive(thiserror::Error, Debug)]
pub enum TableReadError {
    #[error("failure reading '{filepath}': {error}")]
    OpenError { filepath: String, error: String },
    #[error("failure reading row {row} of '{filepath}': {error}")]
    RowError {
        filepath: String,
        row: usize,
        error: String,
    },
}

/// reads every row of a headered CSV file into records of type `T`.
/// columns not named by `T` are ignored.
pub fn read_table<T>(filepath: &Path) -> Result<Vec<T>, TableReadError>
where
    T: DeserializeOwned,
{
    let filename = filepath.to_str().unwrap_or_default().to_string();
    let file = std::fs::File::open(filepath).map_err(|e| TableReadError::OpenError {
        filepath: filename.clone(),
        error: e.to_string(),
    })?;
    read_table_from(file, &filename)
}

/// reads a headered CSV file if it exists, otherwise returns no rows.
pub fn read_optional_table<T>(filepath: &Path) -> Result<Vec<T>, TableReadError>
where
    T: DeserializeOwned,
{
    if filepath.is_file() {
        read_table(filepath)
    } else {
        log::info!(
            "'{}' not found, continuing without it",
            filepath.to_str().unwrap_or_default()
        );
        Ok(vec![])
    }
}

/// deserializes all rows from any reader. `name` is only used for error messages.
pub fn read_table_from<R, T>(reader: R, name: &str) -> Result<Vec<T>, TableReadError>
where
    R: std::io::Read,
    T: DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .enumerate()
        .map(|(idx, r)| {
            r.map_err(|e| TableReadError::RowError {
                filepath: name.to_string(),
                row: idx + 1,
                error: e.to_string(),
            })
        })
        .collect()
}
