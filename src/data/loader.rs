use std::fs::File;
use std::path::Path;

use crate::error::DataLoadError;

use super::model::{PubDataset, PubRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a pub dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the five required columns (primary format)
/// * `.json` – records-oriented array of objects
pub fn load_file(path: &Path) -> Result<PubDataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DataLoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: a header row naming at least `name`, `postcode`,
/// `local_authority`, `latitude` and `longitude`, in any column order.
/// Extra columns are ignored.
fn load_csv(path: &Path) -> Result<PubDataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    // Clone the headers so the reader can be iterated below.
    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataLoadError::MissingColumn(name))
    };

    let name_idx = column("name")?;
    let postcode_idx = column("postcode")?;
    let authority_idx = column("local_authority")?;
    let latitude_idx = column("latitude")?;
    let longitude_idx = column("longitude")?;

    let mut records = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;

        records.push(PubRecord {
            name: record.get(name_idx).unwrap_or("").to_string(),
            postcode: record.get(postcode_idx).unwrap_or("").to_string(),
            local_authority: record.get(authority_idx).unwrap_or("").to_string(),
            latitude: parse_finite(record.get(latitude_idx).unwrap_or(""), row, "latitude")?,
            longitude: parse_finite(record.get(longitude_idx).unwrap_or(""), row, "longitude")?,
        });
    }

    Ok(PubDataset::from_records(records))
}

/// Parse a coordinate cell into a finite `f64`, with row context on failure.
fn parse_finite(raw: &str, row: usize, field: &'static str) -> Result<f64, DataLoadError> {
    let value: f64 = raw.trim().parse().map_err(|_| DataLoadError::InvalidField {
        row,
        field,
        reason: format!("'{raw}' is not a number"),
    })?;

    if !value.is_finite() {
        return Err(DataLoadError::InvalidField {
            row,
            field,
            reason: format!("'{raw}' is not finite"),
        });
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, as produced by
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "name": "Red Lion",
///     "postcode": "LL13 7LU",
///     "local_authority": "Wrexham",
///     "latitude": 53.046,
///     "longitude": -2.993
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<PubDataset, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<PubRecord> = serde_json::from_str(&text)?;

    for (row, record) in records.iter().enumerate() {
        ensure_finite(record.latitude, row, "latitude")?;
        ensure_finite(record.longitude, row, "longitude")?;
    }

    Ok(PubDataset::from_records(records))
}

fn ensure_finite(value: f64, row: usize, field: &'static str) -> Result<(), DataLoadError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DataLoadError::InvalidField {
            row,
            field,
            reason: format!("{value} is not finite"),
        })
    }
}
