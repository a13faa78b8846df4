use anyhow::{Result, bail};
use romkit::bytes::iter::{iter_bits, iter_bytes, iter_bytes_4bit_le};

use super::command::{Cli, DumpArgs, DumpMode};
use crate::input::read_input;

/// Renders `data[start..end]` as rows of `width` bytes, each prefixed by its
/// offset.
fn render(
    data: &[u8],
    start: usize,
    end: Option<usize>,
    mode: DumpMode,
    width: usize,
) -> Result<Vec<String>> {
    let mut rows = Vec::new();
    let end_bound = end.unwrap_or(data.len());
    let mut offset = start;

    for chunk in iter_bytes(data, width, start, end)? {
        // keep rows inside the requested range
        let chunk = &chunk[..chunk.len().min(end_bound - offset)];

        let body = match mode {
            DumpMode::Hex => chunk
                .iter()
                .map(|b| format!("{b:02X}"))
                .collect::<Vec<_>>()
                .join(" "),
            DumpMode::Bits => chunk
                .iter()
                .map(|&b| iter_bits(b).map(|bit| char::from(b'0' + bit)).collect::<String>())
                .collect::<Vec<_>>()
                .join(" "),
            DumpMode::Nibbles => iter_bytes_4bit_le(chunk, 0, None)?
                .map(|n| format!("{n:X}"))
                .collect::<Vec<_>>()
                .join(" "),
        };

        rows.push(format!("{offset:08X}: {body}"));
        offset += chunk.len();
    }

    Ok(rows)
}

pub fn cmd_dump(args: &DumpArgs, _cli: &Cli) -> Result<()> {
    if args.width == 0 {
        bail!("--width must be at least 1");
    }
    let data = read_input(&args.input)?;

    for row in render(&data, args.start, args.end, args.mode, args.width)? {
        println!("{row}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_rows() -> Result<()> {
        let data: Vec<u8> = (0..10).collect();
        let rows = render(&data, 0, None, DumpMode::Hex, 4)?;
        assert_eq!(
            rows,
            [
                "00000000: 00 01 02 03",
                "00000004: 04 05 06 07",
                "00000008: 08 09"
            ]
        );
        Ok(())
    }

    #[test]
    fn bit_rows_respect_end() -> Result<()> {
        let data = [0b1011_0000u8, 0xFF, 0x00];
        let rows = render(&data, 0, Some(2), DumpMode::Bits, 4)?;
        assert_eq!(rows, ["00000000: 10110000 11111111"]);
        Ok(())
    }

    #[test]
    fn nibble_rows() -> Result<()> {
        let rows = render(&[0x21u8, 0xA5], 1, None, DumpMode::Nibbles, 8)?;
        assert_eq!(rows, ["00000001: 5 A"]);
        Ok(())
    }

    #[test]
    fn invalid_range() {
        assert!(render(&[0u8; 4], 3, Some(2), DumpMode::Hex, 4).is_err());
    }
}
