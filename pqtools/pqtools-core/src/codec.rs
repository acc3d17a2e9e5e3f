use std::{fmt, str::FromStr};

/// Compression codec applied to Parquet column chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecTag {
    /// Snappy (`snappy`)
    #[default]
    Snappy,
    /// Zstandard (`zstd`)
    Zstd,
    /// Gzip (`gzip`)
    Gzip,
    /// LZ4 (`lz4`)
    Lz4,
    /// Brotli (`brotli`)
    Brotli,
    /// No compression (`none`)
    Uncompressed,
}

/// Codec used when an operation is not given one explicitly.
pub const DEFAULT_COMPRESSION: CodecTag = CodecTag::Snappy;

impl CodecTag {
    /// Lowercase name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snappy => "snappy",
            Self::Zstd => "zstd",
            Self::Gzip => "gzip",
            Self::Lz4 => "lz4",
            Self::Brotli => "brotli",
            Self::Uncompressed => "none",
        }
    }

    /// Uppercase name as it appears in Parquet footer metadata.
    pub fn footer_name(&self) -> &'static str {
        match self {
            Self::Snappy => "SNAPPY",
            Self::Zstd => "ZSTD",
            Self::Gzip => "GZIP",
            Self::Lz4 => "LZ4",
            Self::Brotli => "BROTLI",
            Self::Uncompressed => "UNCOMPRESSED",
        }
    }
}

impl FromStr for CodecTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snappy" => Ok(Self::Snappy),
            "zstd" => Ok(Self::Zstd),
            "gzip" => Ok(Self::Gzip),
            "lz4" => Ok(Self::Lz4),
            "brotli" => Ok(Self::Brotli),
            "none" | "uncompressed" => Ok(Self::Uncompressed),
            other => Err(format!(
                "unknown compression '{other}' (expected snappy, zstd, gzip, lz4, brotli or none)"
            )),
        }
    }
}

impl fmt::Display for CodecTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
