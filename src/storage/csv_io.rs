//! CSV file I/O with atomic rewrites
//!
//! Every save rewrites the whole file: rows go to a temp file in the same
//! directory which is then renamed over the target.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::error::BudgetError;

/// Read every record of a CSV store whose header must equal `header`
///
/// Returns `Ok(None)` when the file is missing or holds only whitespace, and
/// `BudgetError::StorageCorruption` when the header or any row is malformed.
pub fn read_csv_records<P: AsRef<Path>>(
    path: P,
    header: &[&str],
) -> Result<Option<Vec<StringRecord>>, BudgetError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => {
            BudgetError::corrupt(path, format!("not valid UTF-8: {}", e))
        }
        _ => BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)),
    })?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());

    let found = reader
        .headers()
        .map_err(|e| BudgetError::corrupt(path, format!("unreadable header: {}", e)))?;
    if found.iter().ne(header.iter().copied()) {
        return Err(BudgetError::corrupt(
            path,
            format!(
                "expected header {:?}, found {:?}",
                header.join(","),
                found.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }

    let mut records = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| BudgetError::corrupt(path, format!("row {}: {}", index + 1, e)))?;
        records.push(record);
    }

    Ok(Some(records))
}

/// Write a header and rows to a CSV file atomically (write to temp, then rename)
pub fn write_csv_atomic<P, R>(
    path: P,
    header: &[&str],
    rows: impl IntoIterator<Item = R>,
) -> Result<(), BudgetError>
where
    P: AsRef<Path>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = with_suffix(path, ".tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    {
        let mut writer = csv::Writer::from_writer(&file);
        writer
            .write_record(header)
            .map_err(|e| BudgetError::Storage(format!("Failed to write header: {}", e)))?;
        for row in rows {
            writer
                .write_record(row)
                .map_err(|e| BudgetError::Storage(format!("Failed to write row: {}", e)))?;
        }
        writer
            .flush()
            .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;
    }

    file.sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Copy an unreadable store aside to `<file>.corrupt`, returning the copy's path
///
/// Earlier copies are never overwritten: if `<file>.corrupt` exists the copy
/// goes to the first free `<file>.corrupt.N`.
pub fn quarantine<P: AsRef<Path>>(path: P) -> Result<PathBuf, BudgetError> {
    let path = path.as_ref();
    let mut target = with_suffix(path, ".corrupt");
    let mut attempt = 1u32;
    while target.exists() {
        target = with_suffix(path, &format!(".corrupt.{}", attempt));
        attempt += 1;
    }

    fs::copy(path, &target).map_err(|e| {
        BudgetError::Storage(format!(
            "Failed to preserve corrupt file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(target)
}

/// `budget_data.csv` + `.tmp` -> `budget_data.csv.tmp`
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}
