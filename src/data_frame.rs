use crate::error::Result;
use csv;
use ndarray::{Array1, Array2};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::prelude::*;
use std::path::Path;

pub type V = f64;

/// Feature matrix, shape `(n_samples, n_features)`
pub type DataFrame = Array2<V>;

/// One target value per sample
pub type Labels = Array1<V>;

/// Deserializes every record of a headerless csv by column position.
/// Empty lines are skipped by the csv reader.
pub fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Writes serializable rows to `file_path`, the header is taken from the row type
pub fn save_csv<T: Serialize, P: AsRef<Path>>(rows: &[T], file_path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(file_path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
