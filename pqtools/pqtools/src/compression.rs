use std::path::Path;

use parquet::basic::{BrotliLevel, Compression, GzipLevel, ZstdLevel};
use parquet::file::properties::WriterProperties;
use pqtools_core::CodecTag;

use crate::error::PqToolsError;

pub(crate) fn to_parquet(codec: CodecTag) -> Compression {
    match codec {
        CodecTag::Snappy => Compression::SNAPPY,
        CodecTag::Zstd => Compression::ZSTD(ZstdLevel::default()),
        CodecTag::Gzip => Compression::GZIP(GzipLevel::default()),
        CodecTag::Lz4 => Compression::LZ4_RAW,
        CodecTag::Brotli => Compression::BROTLI(BrotliLevel::default()),
        CodecTag::Uncompressed => Compression::UNCOMPRESSED,
    }
}

pub(crate) fn from_parquet(path: &Path, compression: Compression) -> Result<CodecTag, PqToolsError> {
    match compression {
        Compression::UNCOMPRESSED => Ok(CodecTag::Uncompressed),
        Compression::SNAPPY => Ok(CodecTag::Snappy),
        Compression::GZIP(_) => Ok(CodecTag::Gzip),
        Compression::LZ4 | Compression::LZ4_RAW => Ok(CodecTag::Lz4),
        Compression::ZSTD(_) => Ok(CodecTag::Zstd),
        Compression::BROTLI(_) => Ok(CodecTag::Brotli),
        other => Err(PqToolsError::UnsupportedCodec {
            path: path.to_path_buf(),
            codec: format!("{other:?}"),
        }),
    }
}

/// Writer properties applying `codec` to every column chunk.
pub(crate) fn writer_properties(codec: CodecTag, max_row_group_size: usize) -> WriterProperties {
    WriterProperties::builder()
        .set_compression(to_parquet(codec))
        .set_max_row_group_size(max_row_group_size.max(1))
        .build()
}
