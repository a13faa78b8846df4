use std::fmt;

/// Interpretation of the most significant bit of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signedness::Signed => f.write_str("signed"),
            Signedness::Unsigned => f.write_str("unsigned"),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ByteError {
    #[error("Byte range {start}..{start}+{length} exceeds buffer of {len} bytes")]
    OutOfBounds {
        start: usize,
        length: usize,
        len: usize,
    },

    #[error("Value {value} does not fit in {length} {signedness} byte(s)")]
    ValueOutOfRange {
        value: String,
        length: usize,
        signedness: Signedness,
    },

    #[error("{length}-byte {signedness} field holds a value wider than 128 bits")]
    TooWide {
        length: usize,
        signedness: Signedness,
    },

    #[error("slice_size must be at least 1")]
    ZeroSliceSize,

    #[error("Invalid byte range {start}..{end} for buffer of {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MathError {
    #[error("lcm(0, 0) is undefined")]
    DegenerateLcm,

    #[error("lcm({0}, {1}) overflows u64")]
    Overflow(i64, i64),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Palette {palette} has {len} entries, expected a multiple of 3")]
    RaggedPalette { palette: usize, len: usize },

    #[error("No free color found for palette {palette}, color {index} after {steps} steps")]
    SearchExhausted {
        palette: usize,
        index: usize,
        steps: usize,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Non UTF-8 file name in {0}")]
    NonUtf8Name(String),
}
