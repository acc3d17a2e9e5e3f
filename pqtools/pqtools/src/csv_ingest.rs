use std::{io::BufReader, path::Path};

use pqtools_core::{TableError, UntypedTable};

use crate::{error::PqToolsError, input::open_input};

/// Read a comma-delimited file with a header row into an [`UntypedTable`].
///
/// Every cell stays raw text; null tokens become `None`. A data row whose
/// field count differs from the header fails with
/// [`PqToolsError::MalformedRow`] (`row_index` is zero-based, header
/// excluded).
pub fn load_csv(path: &Path) -> Result<UntypedTable, PqToolsError> {
    let file = open_input(path)?;
    let csv_error = |source| PqToolsError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let header: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();
    let mut table = UntypedTable::new(header)?;

    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        table
            .push_row(record.iter().collect())
            .map_err(|err| match err {
                TableError::MalformedRow {
                    row_index,
                    expected_cols,
                    actual_cols,
                } => PqToolsError::MalformedRow {
                    path: path.to_path_buf(),
                    row_index,
                    expected_cols,
                    actual_cols,
                },
                other => other.into(),
            })?;
    }

    tracing::debug!(
        path = %path.display(),
        rows = table.num_rows(),
        columns = table.num_columns(),
        "loaded csv"
    );
    Ok(table)
}
