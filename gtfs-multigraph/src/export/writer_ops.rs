use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use serde::Serialize;

use super::ExportError;

/// a row of an exported table. the header is declared separately from the serialized
/// fields so that tables without any rows still carry their header.
pub trait TableRow: Serialize {
    const HEADER: &'static [&'static str];
}

/// the on-disk filename for a table, `{name}.csv` or `{name}.csv.gz`.
pub fn table_filename(name: &str, compress: bool) -> String {
    if compress {
        format!("{name}.csv.gz")
    } else {
        format!("{name}.csv")
    }
}

/// confirms that every table can be written before any of them is, so that a run
/// either produces all of its outputs or none.
pub fn check_targets(
    directory: &Path,
    filenames: &[String],
    overwrite: bool,
) -> Result<Vec<PathBuf>, ExportError> {
    let paths: Vec<PathBuf> = filenames.iter().map(|f| directory.join(f)).collect();
    if !overwrite {
        if let Some(existing) = paths.iter().find(|p| p.exists()) {
            return Err(ExportError::FileExists(
                existing.to_str().unwrap_or_default().to_string(),
            ));
        }
    }
    Ok(paths)
}

/// helper function to build a filewriter for writing either .csv or .csv.gz files,
/// chosen by the file extension.
pub fn create_writer(filepath: &Path) -> Result<Box<dyn Write>, ExportError> {
    let file = File::create(filepath).map_err(|source| ExportError::CreateError {
        filepath: filepath.to_str().unwrap_or_default().to_string(),
        source,
    })?;
    let is_gzip = filepath.extension().and_then(|e| e.to_str()) == Some("gz");
    if is_gzip {
        Ok(Box::new(GzEncoder::new(file, Compression::default())))
    } else {
        Ok(Box::new(file))
    }
}

/// writes the header and all rows of a table to `destination`.
pub fn write_table<W, R>(destination: W, rows: &[R], name: &str) -> Result<(), ExportError>
where
    W: Write,
    R: TableRow,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(destination);
    writer
        .write_record(R::HEADER)
        .map_err(|e| ExportError::CsvWriteError(format!("{name}: {e}")))?;

    let desc = format!("write {name}");
    let row_iter = tqdm!(rows.iter(), total = rows.len(), desc = desc);
    for row in row_iter {
        writer
            .serialize(row)
            .map_err(|e| ExportError::CsvWriteError(format!("{name}: {e}")))?;
    }
    eprintln!();

    writer
        .flush()
        .map_err(|e| ExportError::CsvWriteError(format!("failed to flush {name}: {e}")))?;
    Ok(())
}

/// writes a table to a file created at `filepath`.
pub fn write_table_file<R: TableRow>(filepath: &Path, rows: &[R]) -> Result<(), ExportError> {
    let name = filepath
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_default()
        .to_string();
    let destination = create_writer(filepath)?;
    write_table(destination, rows, &name)?;
    log::info!("wrote {} rows to {}", rows.len(), filepath.display());
    Ok(())
}
