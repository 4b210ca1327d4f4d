//! Read delimited output back into typed records.

use crate::error::CsvWriterError;
use crate::format::parse_value;
use csv::ReaderBuilder;
use datahobbit_core::{Record, Schema};
use std::path::Path;

/// Parse a delimited file written for `schema` back into records.
///
/// Record indices are assigned in line order starting at 0. The whole file is
/// loaded, so this is meant for verification rather than bulk processing.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    schema: &Schema,
    delimiter: u8,
    has_header: bool,
) -> Result<Vec<Record>, CsvWriterError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_header)
        .from_path(path)?;

    let fields = schema.fields();
    let mut records = Vec::new();

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let index = index as u64;

        if row.len() != fields.len() {
            return Err(CsvWriterError::FieldCount {
                index,
                expected: fields.len(),
                actual: row.len(),
            });
        }

        let values = row
            .iter()
            .zip(fields)
            .map(|(text, field)| parse_value(text, field))
            .collect::<Result<Vec<_>, _>>()?;
        records.push(Record::new(index, values));
    }

    Ok(records)
}
