//! Atomic Parquet output: data goes to a temporary file in the destination
//! directory and is renamed over the destination only on commit.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::get_column_writers;
use parquet::arrow::{ArrowSchemaConverter, ArrowWriter, add_encoded_arrow_schema_to_metadata};
use parquet::errors::ParquetError;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use tempfile::NamedTempFile;

use crate::error::PqToolsError;

/// Mode requested when creating the temporary file; the process umask
/// applies, as for `File::create`.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o666;

pub(crate) struct AtomicParquetOutput {
    path: PathBuf,
    schema: SchemaRef,
    props: WriterProperties,
    temp: Option<NamedTempFile>,
    inner: Option<ArrowWriter<NamedTempFile>>,
}

impl AtomicParquetOutput {
    pub(crate) fn create(
        path: &Path,
        schema: SchemaRef,
        props: WriterProperties,
    ) -> Result<Self, PqToolsError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut builder = tempfile::Builder::new();
        builder.prefix(".pqtools-").suffix(".parquet.tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(OUTPUT_MODE));
        }
        let temp = builder
            .tempfile_in(dir)
            .map_err(PqToolsError::write_failure(path))?;
        tracing::debug!(path = %path.display(), temp = %temp.path().display(), "opened temporary output");

        Ok(Self {
            path: path.to_path_buf(),
            schema,
            props,
            temp: Some(temp),
            inner: None,
        })
    }

    /// Append `batch` to the in-progress row group. Empty batches are ignored.
    pub(crate) fn write(&mut self, batch: &RecordBatch) -> Result<(), PqToolsError> {
        if batch.num_rows() == 0 {
            return Ok(());
        }
        if self.inner.is_none() {
            let temp = self.take_temp()?;
            let writer = ArrowWriter::try_new(temp, self.schema.clone(), Some(self.props.clone()))
                .map_err(PqToolsError::write_failure(&self.path))?;
            self.inner = Some(writer);
        }
        let Some(writer) = self.inner.as_mut() else {
            return Err(self.closed());
        };
        writer
            .write(batch)
            .map_err(PqToolsError::write_failure(&self.path))
    }

    /// Close the in-progress row group. Does nothing if it holds no rows.
    pub(crate) fn end_row_group(&mut self) -> Result<(), PqToolsError> {
        match self.inner.as_mut() {
            Some(writer) => writer
                .flush()
                .map_err(PqToolsError::write_failure(&self.path)),
            None => Ok(()),
        }
    }

    /// Write the footer, sync and rename into place. Returns the number of
    /// row groups in the file. A file that received no rows gets a single
    /// empty row group.
    pub(crate) fn commit(mut self) -> Result<usize, PqToolsError> {
        let (temp, row_groups) = match self.inner.take() {
            Some(mut writer) => {
                writer
                    .flush()
                    .map_err(PqToolsError::write_failure(&self.path))?;
                let row_groups = writer.flushed_row_groups().len();
                let temp = writer
                    .into_inner()
                    .map_err(PqToolsError::write_failure(&self.path))?;
                (temp, row_groups)
            }
            None => {
                let temp = self.take_temp()?;
                let temp = write_empty_row_group(temp, &self.schema, self.props.clone())
                    .map_err(PqToolsError::write_failure(&self.path))?;
                (temp, 1)
            }
        };
        temp.as_file()
            .sync_all()
            .map_err(PqToolsError::write_failure(&self.path))?;
        temp.persist(&self.path)
            .map_err(|err| PqToolsError::write_failure(&self.path)(err.error))?;
        Ok(row_groups)
    }

    fn take_temp(&mut self) -> Result<NamedTempFile, PqToolsError> {
        self.temp.take().ok_or_else(|| self.closed())
    }

    fn closed(&self) -> PqToolsError {
        PqToolsError::write_failure(&self.path)(io::Error::other("output writer already closed"))
    }
}

/// Write a complete file holding one row group with zero rows.
fn write_empty_row_group(
    temp: NamedTempFile,
    schema: &SchemaRef,
    mut props: WriterProperties,
) -> Result<NamedTempFile, ParquetError> {
    add_encoded_arrow_schema_to_metadata(schema, &mut props);
    let parquet_schema = ArrowSchemaConverter::new().convert(schema)?;
    let props = Arc::new(props);

    let columns = get_column_writers(&parquet_schema, &props, schema)?;
    let mut writer = SerializedFileWriter::new(temp, parquet_schema.root_schema_ptr(), props)?;
    let mut row_group = writer.next_row_group()?;
    for column in columns {
        column.close()?.append_to_row_group(&mut row_group)?;
    }
    row_group.close()?;
    writer.into_inner()
}
