use clap::ValueEnum;
use pqtools::core::CodecTag;

/// Codecs selectable with `-c/--compression`.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CompressionArg {
    Snappy,
    Zstd,
    Gzip,
    Lz4,
    None,
}

impl From<CompressionArg> for CodecTag {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::Snappy => CodecTag::Snappy,
            CompressionArg::Zstd => CodecTag::Zstd,
            CompressionArg::Gzip => CodecTag::Gzip,
            CompressionArg::Lz4 => CodecTag::Lz4,
            CompressionArg::None => CodecTag::Uncompressed,
        }
    }
}

/// `1234567` -> `1,234,567`.
pub fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn none_maps_to_uncompressed() {
        assert_eq!(CodecTag::from(CompressionArg::None), CodecTag::Uncompressed);
        assert_eq!(CodecTag::from(CompressionArg::Lz4), CodecTag::Lz4);
    }
}
