use std::io::Read;
use std::path::Path;

use super::CertificateFields;

#[derive(Debug, thiserror::Error)]
pub enum CertificateImportError {
    #[error("failed to read certificate CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid certificate CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// One CSV row, numbered from 1. Rows that fail to deserialize carry their
/// error so callers can report and skip them without abandoning the batch.
#[derive(Debug)]
pub struct ImportedRow {
    pub number: usize,
    pub fields: Result<CertificateFields, CertificateImportError>,
}

/// Loads certificate field sets from CSV whose headers are the fourteen
/// field identifiers. Missing columns default to empty values; surrounding
/// whitespace is trimmed; embedded line breaks inside quoted values survive.
pub struct CertificateImporter;

impl CertificateImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedRow>, CertificateImportError> {
        let file = std::fs::File::open(path)?;
        Ok(Self::from_reader(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Vec<ImportedRow> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        csv_reader
            .deserialize::<CertificateFields>()
            .enumerate()
            .map(|(index, record)| ImportedRow {
                number: index + 1,
                fields: record.map_err(CertificateImportError::from),
            })
            .collect()
    }
}
