use std::path::PathBuf;

use clap::{Args, Parser as ClapParser, Subcommand, ValueEnum};
use romkit::bytes::ByteOrder;

#[derive(Debug, ClapParser)]
#[command(
    name         = "romkit",
    version      = env!("CARGO_PKG_VERSION"),
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        "\nromkit ", env!("ROMKIT_VERSION"),
        "\nbuilt ", env!("BUILD_TIMESTAMP"),
    ),
    author       = env!("CARGO_PKG_AUTHORS"),
    about        = "Tools for inspecting binary ROM data, file trees and palettes",
    long_about   = None,
)]
pub struct Cli {
    /// Set the log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Show progress spinners during operations.
    #[arg(long, global = true)]
    pub progress: bool,

    /// Warn about byte operations on owned buffers instead of borrowed views.
    #[arg(long, global = true)]
    pub debug_views: bool,

    /// Choose an operation to perform.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read an integer field from a file.
    Read(ReadArgs),

    /// Write an integer field into a copy of a file.
    Write(WriteArgs),

    /// Print a byte range as hex, bits or nibbles.
    Dump(DumpArgs),

    /// List files with an extension below a directory.
    Scan(ScanArgs),

    /// Make all colors of a palette file unique.
    Palette(PaletteArgs),

    /// Print the least common multiple of two integers.
    Lcm(LcmArgs),
}

#[derive(Debug, Clone, Args)]
pub struct FieldArgs {
    /// Offset of the field in bytes (decimal or 0x-prefixed hex).
    #[arg(long, value_name = "OFFSET", default_value = "0", value_parser = parse_usize)]
    pub offset: usize,

    /// Width of the field in bytes.
    #[arg(long, value_name = "BYTES", default_value_t = 1)]
    pub length: usize,

    /// Byte order of the field.
    #[arg(long, value_enum, default_value_t = Order::Le)]
    pub order: Order,

    /// Interpret the field as two's complement.
    #[arg(long)]
    pub signed: bool,
}

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Input file (use "-" for stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub field: FieldArgs,
}

#[derive(Debug, Args)]
pub struct WriteArgs {
    /// Input file (use "-" for stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Value to store (decimal or 0x-prefixed hex, may be negative).
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true, value_parser = parse_i128)]
    pub value: i128,

    /// Output file (use "-" for stdout).
    #[arg(long, short, value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Input file (use "-" for stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// First byte to print.
    #[arg(long, default_value = "0", value_parser = parse_usize)]
    pub start: usize,

    /// End of the byte range (defaults to end of input).
    #[arg(long, value_parser = parse_usize)]
    pub end: Option<usize>,

    /// Output representation.
    #[arg(long, value_enum, default_value_t = DumpMode::Hex)]
    pub mode: DumpMode,

    /// Bytes per output row.
    #[arg(long, default_value_t = 16)]
    pub width: usize,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Root directory of the tree to scan.
    #[arg(value_name = "DIR")]
    pub root: PathBuf,

    /// File extension to match, without the leading dot.
    #[arg(long)]
    pub ext: String,

    /// Only report files below this "/"-separated folder of the tree.
    #[arg(long, value_name = "FOLDER")]
    pub under: Option<String>,
}

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// YAML palette file (use "-" for stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output YAML file (defaults to stdout).
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Palettes are flat r, g, b lists instead of lists of triples.
    #[arg(long)]
    pub flat: bool,
}

#[derive(Debug, Args)]
pub struct LcmArgs {
    /// First operand.
    #[arg(allow_negative_numbers = true)]
    pub x: i64,

    /// Second operand.
    #[arg(allow_negative_numbers = true)]
    pub y: i64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Disable logging output.
    Off,
    /// No output except errors.
    Error,
    /// Show warnings and errors.
    Warn,
    /// Show info, warnings and errors (default).
    Info,
    /// Show debug, info, warnings and errors.
    Debug,
    /// Show all log messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert LogLevel to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Colorized human-readable text.
    Plain,
    /// Structured JSON per log record.
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum Order {
    /// Little endian.
    Le,
    /// Big endian.
    Be,
}

impl From<Order> for ByteOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Le => ByteOrder::Little,
            Order::Be => ByteOrder::Big,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum DumpMode {
    /// Hexadecimal bytes.
    Hex,
    /// Bits of every byte, high bit first.
    Bits,
    /// Low then high nibble of every byte.
    Nibbles,
}

fn split_radix(s: &str) -> (&str, u32) {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    }
}

fn parse_usize(s: &str) -> Result<usize, String> {
    let (digits, radix) = split_radix(s);
    usize::from_str_radix(digits, radix).map_err(|e| format!("invalid offset {s:?}: {e}"))
}

fn parse_i128(s: &str) -> Result<i128, String> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (digits, radix) = split_radix(body);
    let magnitude =
        u128::from_str_radix(digits, radix).map_err(|e| format!("invalid value {s:?}: {e}"))?;

    let value = if negative {
        0i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    };
    value.ok_or_else(|| format!("value {s:?} does not fit in 128 bits"))
}
