use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    sync::Arc,
};

use arrow::datatypes::{Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::{
    ArrowReaderMetadata, ArrowReaderOptions, ParquetRecordBatchReaderBuilder,
};
use pqtools_core::{CodecTag, DEFAULT_COMPRESSION};

use crate::{
    DEFAULT_BATCH_SIZE, compression::writer_properties, error::PqToolsError, input::open_input,
    output::AtomicParquetOutput,
};

/// Outcome of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub output: PathBuf,
    pub rows_written: u64,
    pub files_merged: usize,
    pub columns: usize,
    pub row_groups_written: usize,
    pub compression: CodecTag,
}

/// Validated merge inputs, produced by [`Merger::plan`].
pub struct MergePlan {
    sources: Vec<MergeSource>,
    schema: SchemaRef,
}

impl MergePlan {
    /// Rows across all inputs, as recorded in their footers.
    pub fn total_rows(&self) -> u64 {
        self.sources
            .iter()
            .flat_map(|s| s.metadata.metadata().row_groups())
            .map(|rg| u64::try_from(rg.num_rows()).unwrap_or_default())
            .sum()
    }

    pub fn num_files(&self) -> usize {
        self.sources.len()
    }

    /// Output schema: reference names and types, nullable where any input is.
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }
}

/// Concatenates Parquet files that share a schema into one file.
///
/// Inputs are written in the order given. Every non-empty input row group
/// becomes one output row group, re-encoded with the configured codec.
/// All inputs are opened and their schemas checked before the output is
/// created, so a missing, corrupt or mismatched input leaves no file behind.
#[derive(Debug, Clone)]
pub struct Merger {
    compression: CodecTag,
    batch_size: usize,
}

impl Merger {
    pub fn builder() -> MergerBuilder {
        MergerBuilder::default()
    }

    pub fn compression(&self) -> CodecTag {
        self.compression
    }

    pub fn merge<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output: &Path,
    ) -> Result<MergeResult, PqToolsError> {
        self.merge_with_progress(inputs, output, |_| {})
    }

    /// Like [`merge`](Self::merge), calling `on_rows` with the row count of
    /// every batch once it has been written.
    pub fn merge_with_progress<P, F>(
        &self,
        inputs: &[P],
        output: &Path,
        on_rows: F,
    ) -> Result<MergeResult, PqToolsError>
    where
        P: AsRef<Path>,
        F: FnMut(u64),
    {
        let plan = self.plan(inputs)?;
        self.execute(plan, output, on_rows)
    }

    /// Open every input and check its schema against the first one.
    ///
    /// Nothing is written. Fails with [`PqToolsError::EmptyInput`] if
    /// `inputs` is empty.
    pub fn plan<P: AsRef<Path>>(&self, inputs: &[P]) -> Result<MergePlan, PqToolsError> {
        let sources = inputs
            .iter()
            .map(|path| MergeSource::open(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let Some((reference, rest)) = sources.split_first() else {
            return Err(PqToolsError::EmptyInput { dir: None });
        };
        for source in rest {
            check_compatible(reference, source)?;
        }
        let schema = merged_schema(&sources);
        Ok(MergePlan { sources, schema })
    }

    /// Write the inputs of `plan` to `output`, calling `on_rows` after each
    /// written batch.
    pub fn execute<F>(
        &self,
        plan: MergePlan,
        output: &Path,
        mut on_rows: F,
    ) -> Result<MergeResult, PqToolsError>
    where
        F: FnMut(u64),
    {
        let MergePlan { sources, schema } = plan;
        let largest_row_group = sources
            .iter()
            .flat_map(|s| s.metadata.metadata().row_groups())
            .map(|rg| usize::try_from(rg.num_rows()).unwrap_or_default())
            .max()
            .unwrap_or_default();
        let props = writer_properties(self.compression, largest_row_group);

        let mut out = AtomicParquetOutput::create(output, schema.clone(), props)?;
        let mut rows_written = 0u64;
        for source in &sources {
            let num_row_groups = source.metadata.metadata().num_row_groups();
            if num_row_groups == 0 {
                tracing::warn!(path = %source.path.display(), "input has no row groups");
            }
            for row_group in 0..num_row_groups {
                let rows = self.copy_row_group(source, row_group, &schema, output, &mut out)?;
                rows_written += rows;
                on_rows(rows);
                out.end_row_group()?;
                tracing::debug!(
                    path = %source.path.display(),
                    row_group,
                    rows,
                    "copied row group"
                );
            }
        }
        let row_groups_written = out.commit()?;

        tracing::info!(
            path = %output.display(),
            files = sources.len(),
            rows = rows_written,
            row_groups = row_groups_written,
            codec = %self.compression,
            "merged parquet files"
        );
        Ok(MergeResult {
            output: output.to_path_buf(),
            rows_written,
            files_merged: sources.len(),
            columns: schema.fields().len(),
            row_groups_written,
            compression: self.compression,
        })
    }

    fn copy_row_group(
        &self,
        source: &MergeSource,
        row_group: usize,
        schema: &SchemaRef,
        output: &Path,
        out: &mut AtomicParquetOutput,
    ) -> Result<u64, PqToolsError> {
        let file = source.file.try_clone().map_err(|source_err| PqToolsError::Open {
            path: source.path.clone(),
            source: source_err,
        })?;
        let reader = ParquetRecordBatchReaderBuilder::new_with_metadata(file, source.metadata.clone())
            .with_row_groups(vec![row_group])
            .with_batch_size(self.batch_size)
            .build()
            .map_err(PqToolsError::corrupt(&source.path))?;

        let mut rows = 0u64;
        for batch in reader {
            let batch = batch.map_err(|err| PqToolsError::CorruptFile {
                path: source.path.clone(),
                source: Box::new(err),
            })?;
            let batch = RecordBatch::try_new(schema.clone(), batch.columns().to_vec())
                .map_err(PqToolsError::write_failure(output))?;
            out.write(&batch)?;
            rows += batch.num_rows() as u64;
        }
        Ok(rows)
    }
}

#[derive(Debug, Clone)]
pub struct MergerBuilder {
    compression: CodecTag,
    batch_size: usize,
}

impl Default for MergerBuilder {
    fn default() -> Self {
        Self {
            compression: DEFAULT_COMPRESSION,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl MergerBuilder {
    pub fn with_compression(mut self, compression: CodecTag) -> Self {
        self.compression = compression;
        self
    }

    /// Set the number of rows decoded per batch. `0` is treated as `1`.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn build(self) -> Merger {
        Merger {
            compression: self.compression,
            batch_size: self.batch_size,
        }
    }
}

/// Merge `inputs` into `output` with `compression` and default settings.
pub fn merge<P: AsRef<Path>>(
    inputs: &[P],
    output: &Path,
    compression: CodecTag,
) -> Result<MergeResult, PqToolsError> {
    Merger::builder()
        .with_compression(compression)
        .build()
        .merge(inputs, output)
}

/// List the `*.parquet` files directly inside `dir`, sorted by path.
///
/// Fails with [`PqToolsError::EmptyInput`] if there are none.
pub fn collect_parquet_inputs(dir: &Path) -> Result<Vec<PathBuf>, PqToolsError> {
    let read_error = |source: std::io::Error| match source.kind() {
        std::io::ErrorKind::NotFound => PqToolsError::NotFound {
            path: dir.to_path_buf(),
        },
        _ => PqToolsError::Open {
            path: dir.to_path_buf(),
            source,
        },
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "parquet") {
            inputs.push(path);
        }
    }
    if inputs.is_empty() {
        return Err(PqToolsError::EmptyInput {
            dir: Some(dir.to_path_buf()),
        });
    }
    inputs.sort();
    Ok(inputs)
}

/// `<parent>/<dir-name>_merged.parquet`, the default destination when
/// merging the contents of `dir`.
pub fn default_merge_output(dir: &Path) -> PathBuf {
    let dir = match dir.file_name() {
        Some(_) => dir.to_path_buf(),
        None => dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()),
    };
    let name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "parquet".to_string());
    dir.with_file_name(format!("{name}_merged.parquet"))
}

struct MergeSource {
    path: PathBuf,
    file: File,
    metadata: ArrowReaderMetadata,
}

impl MergeSource {
    fn open(path: &Path) -> Result<Self, PqToolsError> {
        let file = open_input(path)?;
        let metadata = ArrowReaderMetadata::load(&file, ArrowReaderOptions::default())
            .map_err(PqToolsError::corrupt(path))?;
        tracing::debug!(
            path = %path.display(),
            row_groups = metadata.metadata().num_row_groups(),
            "opened merge input"
        );
        Ok(Self {
            path: path.to_path_buf(),
            file,
            metadata,
        })
    }

    fn schema(&self) -> &SchemaRef {
        self.metadata.schema()
    }
}

/// Names, order and data types must agree. Nullability and metadata may
/// differ.
fn check_compatible(reference: &MergeSource, source: &MergeSource) -> Result<(), PqToolsError> {
    let expected = reference.schema().fields();
    let actual = source.schema().fields();
    let compatible = expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual.iter())
            .all(|(e, a)| e.name() == a.name() && e.data_type() == a.data_type());
    if compatible {
        return Ok(());
    }
    Err(PqToolsError::SchemaMismatch {
        file: source.path.clone(),
        expected: describe_schema(reference.schema()),
        actual: describe_schema(source.schema()),
    })
}

/// Reference field names and types; a column is nullable if it is nullable
/// in any input.
fn merged_schema(sources: &[MergeSource]) -> SchemaRef {
    let Some(reference) = sources.first() else {
        return Arc::new(Schema::empty());
    };
    let fields: Vec<Field> = reference
        .schema()
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let nullable = sources
                .iter()
                .any(|s| s.schema().fields().get(index).is_some_and(|f| f.is_nullable()));
            Field::new(field.name(), field.data_type().clone(), nullable)
        })
        .collect();
    Arc::new(Schema::new(fields))
}

fn describe_schema(schema: &Schema) -> String {
    schema
        .fields()
        .iter()
        .map(|f| format!("{}: {}", f.name(), f.data_type()))
        .collect::<Vec<_>>()
        .join(", ")
}
