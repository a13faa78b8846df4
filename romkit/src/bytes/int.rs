//! Fixed-width integer codec.
//!
//! Fields are `length` bytes wide at offset `start` of a byte buffer. Any width
//! is accepted; values are carried as `u128` / `i128`, so fields wider than 16
//! bytes must consist of zero (or sign) padding above the low 16 bytes.
//!
//! ```
//! use romkit::bytes::int::{read_sint_be, read_uint_le, write_uint_le};
//!
//! let mut buf = [0u8; 4];
//! write_uint_le(&mut buf, 0x1234u16, 1, 2)?;
//! assert_eq!(buf, [0x00, 0x34, 0x12, 0x00]);
//! assert_eq!(read_uint_le(&buf, 1, 2)?, 0x1234);
//! assert_eq!(read_sint_be(&[0xFFu8, 0xFE], 0, 2)?, -2);
//! # Ok::<(), romkit::utils::errors::ByteError>(())
//! ```

use std::fmt::Display;

use crate::bytes::view::{ByteSource, check_range, check_view};
use crate::utils::errors::{ByteError, Signedness};

const WIDE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Index into a `length` byte field of the `i`-th byte counted from the
    /// most significant end.
    #[inline(always)]
    fn msb_index(self, i: usize, length: usize) -> usize {
        match self {
            ByteOrder::Big => i,
            ByteOrder::Little => length - 1 - i,
        }
    }
}

fn load(field: &[u8], order: ByteOrder, signedness: Signedness) -> Result<u128, ByteError> {
    let length = field.len();
    let byte = |i: usize| field[order.msb_index(i, length)];

    if length == 0 {
        return Ok(0);
    }

    let negative = signedness == Signedness::Signed && byte(0) & 0x80 != 0;
    let pad = if negative { 0xFF } else { 0x00 };

    // Bytes above the low 16 carry no information beyond the sign.
    let skip = length.saturating_sub(WIDE);
    if (0..skip).any(|i| byte(i) != pad) {
        return Err(ByteError::TooWide { length, signedness });
    }
    if skip > 0 && signedness == Signedness::Signed && (byte(skip) & 0x80 != 0) != negative {
        return Err(ByteError::TooWide { length, signedness });
    }

    let mut value = (skip..length).fold(0u128, |acc, i| (acc << 8) | byte(i) as u128);
    let used = length - skip;
    if negative && used < WIDE {
        value |= u128::MAX << (used * 8);
    }

    Ok(value)
}

fn store(field: &mut [u8], order: ByteOrder, bits: u128, negative: bool) {
    let length = field.len();
    for i in 0..length {
        // i counts from the least significant byte
        let byte = if i < WIDE {
            (bits >> (i * 8)) as u8
        } else if negative {
            0xFF
        } else {
            0x00
        };
        field[order.msb_index(length - 1 - i, length)] = byte;
    }
}

fn fits_unsigned(value: u128, length: usize) -> bool {
    length >= WIDE || value >> (length * 8) == 0
}

fn fits_signed(value: i128, length: usize) -> bool {
    match length {
        0 => value == 0,
        l if l >= WIDE => true,
        l => {
            let bits = (l * 8) as u32;
            let min = -(1i128 << (bits - 1));
            let max = (1i128 << (bits - 1)) - 1;
            (min..=max).contains(&value)
        }
    }
}

/// Reads an unsigned integer of `length` bytes at `start`.
pub fn read_uint<S: ByteSource + ?Sized>(
    data: &S,
    start: usize,
    length: usize,
    order: ByteOrder,
) -> Result<u128, ByteError> {
    check_view(data);
    let bytes = data.as_bytes();
    check_range(start, length, bytes.len())?;
    load(&bytes[start..start + length], order, Signedness::Unsigned)
}

/// Reads a two's complement signed integer of `length` bytes at `start`.
pub fn read_sint<S: ByteSource + ?Sized>(
    data: &S,
    start: usize,
    length: usize,
    order: ByteOrder,
) -> Result<i128, ByteError> {
    check_view(data);
    let bytes = data.as_bytes();
    check_range(start, length, bytes.len())?;
    load(&bytes[start..start + length], order, Signedness::Signed).map(|v| v as i128)
}

/// Writes `to_write` as an unsigned integer of exactly `length` bytes at
/// `start`. The buffer is unchanged when the value does not fit.
pub fn write_uint<V>(
    data: &mut [u8],
    to_write: V,
    start: usize,
    length: usize,
    order: ByteOrder,
) -> Result<(), ByteError>
where
    V: TryInto<u128> + Display + Copy,
{
    check_range(start, length, data.len())?;
    let value = to_write
        .try_into()
        .ok()
        .filter(|&v| fits_unsigned(v, length))
        .ok_or_else(|| ByteError::ValueOutOfRange {
            value: to_write.to_string(),
            length,
            signedness: Signedness::Unsigned,
        })?;

    store(&mut data[start..start + length], order, value, false);
    Ok(())
}

/// Writes `to_write` as a two's complement integer of exactly `length` bytes
/// at `start`. The buffer is unchanged when the value does not fit.
pub fn write_sint<V>(
    data: &mut [u8],
    to_write: V,
    start: usize,
    length: usize,
    order: ByteOrder,
) -> Result<(), ByteError>
where
    V: TryInto<i128> + Display + Copy,
{
    check_range(start, length, data.len())?;
    let value = to_write
        .try_into()
        .ok()
        .filter(|&v| fits_signed(v, length))
        .ok_or_else(|| ByteError::ValueOutOfRange {
            value: to_write.to_string(),
            length,
            signedness: Signedness::Signed,
        })?;

    store(&mut data[start..start + length], order, value as u128, value < 0);
    Ok(())
}

macro_rules! impl_int_codec {
    ($($read:ident, $write:ident, $order:expr, $generic_read:ident, $generic_write:ident, $val:ty, $doc:literal;)+) => { $(
        #[doc = concat!("Reads ", $doc, " integer of `length` bytes at `start`.")]
        #[inline]
        pub fn $read<S: ByteSource + ?Sized>(data: &S, start: usize, length: usize) -> Result<$val, ByteError> {
            $generic_read(data, start, length, $order)
        }

        #[doc = concat!("Writes `to_write` as ", $doc, " integer of `length` bytes at `start`.")]
        #[inline]
        pub fn $write<V>(data: &mut [u8], to_write: V, start: usize, length: usize) -> Result<(), ByteError>
        where
            V: TryInto<$val> + Display + Copy,
        {
            $generic_write(data, to_write, start, length, $order)
        }
    )+ }
}

impl_int_codec! {
    read_uint_le, write_uint_le, ByteOrder::Little, read_uint, write_uint, u128, "an unsigned little endian";
    read_sint_le, write_sint_le, ByteOrder::Little, read_sint, write_sint, i128, "a signed little endian";
    read_uint_be, write_uint_be, ByteOrder::Big, read_uint, write_uint, u128, "an unsigned big endian";
    read_sint_be, write_sint_be, ByteOrder::Big, read_sint, write_sint, i128, "a signed big endian";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_roundtrip_all_widths() -> anyhow::Result<()> {
        for n in 1..=8usize {
            let max = (1u128 << (n * 8)) - 1;
            for v in [0, 1, 0x7F, max / 3, max] {
                let mut buf = vec![0u8; n + 2];
                write_uint_le(&mut buf, v, 1, n)?;
                assert_eq!(read_uint_le(&buf[..], 1, n)?, v);
                write_uint_be(&mut buf, v, 1, n)?;
                assert_eq!(read_uint_be(&buf[..], 1, n)?, v);
            }
        }
        Ok(())
    }

    #[test]
    fn signed_roundtrip_all_widths() -> anyhow::Result<()> {
        for n in 1..=8usize {
            let max = (1i128 << (n * 8 - 1)) - 1;
            let min = -max - 1;
            for v in [min, -1, 0, 1, max] {
                let mut buf = vec![0u8; n];
                write_sint_le(&mut buf, v, 0, n)?;
                assert_eq!(read_sint_le(&buf[..], 0, n)?, v);
                write_sint_be(&mut buf, v, 0, n)?;
                assert_eq!(read_sint_be(&buf[..], 0, n)?, v);
            }
        }
        Ok(())
    }

    #[test]
    fn byte_layout() -> anyhow::Result<()> {
        let mut buf = [0u8; 4];
        write_uint_le(&mut buf, 0x0102_0304u32, 0, 4)?;
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
        write_uint_be(&mut buf, 0x0102_0304u32, 0, 4)?;
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
        write_sint_le(&mut buf, -2, 0, 3)?;
        assert_eq!(buf, [0xFE, 0xFF, 0xFF, 0x04]);

        assert_eq!(read_uint_le(&[0xFEu8, 0xFF], 0, 2)?, 0xFFFE);
        assert_eq!(read_sint_le(&[0xFEu8, 0xFF], 0, 2)?, -2);
        assert_eq!(read_sint_be(&[0x7Fu8, 0xFF], 0, 2)?, 0x7FFF);
        Ok(())
    }

    #[test]
    fn odd_widths() -> anyhow::Result<()> {
        let mut buf = [0u8; 3];
        write_uint_be(&mut buf, 0xABCDEFu32, 0, 3)?;
        assert_eq!(buf, [0xAB, 0xCD, 0xEF]);
        assert_eq!(read_uint_be(&buf, 0, 3)?, 0xABCDEF);
        assert_eq!(read_sint_be(&buf, 0, 3)?, 0xABCDEF - 0x100_0000);
        Ok(())
    }

    #[test]
    fn write_overflow_is_an_error() {
        let mut buf = [0x55u8; 2];
        assert_eq!(
            write_uint_le(&mut buf, 256, 0, 1),
            Err(ByteError::ValueOutOfRange {
                value: "256".to_string(),
                length: 1,
                signedness: Signedness::Unsigned
            })
        );
        assert!(write_uint_be(&mut buf, -1, 0, 2).is_err());
        assert!(write_sint_le(&mut buf, 128, 0, 1).is_err());
        assert!(write_sint_be(&mut buf, -129, 0, 1).is_err());
        assert!(write_sint_le(&mut buf, u128::MAX, 0, 2).is_err());
        assert_eq!(buf, [0x55, 0x55]);
    }

    #[test]
    fn out_of_bounds() {
        let mut buf = [0u8; 2];
        assert!(read_uint_le(&buf, 1, 2).is_err());
        assert!(read_sint_be(&buf, 3, 0).is_err());
        assert!(write_uint_le(&mut buf, 1, 2, 1).is_err());
    }

    #[test]
    fn zero_width() -> anyhow::Result<()> {
        let mut buf = [0u8; 1];
        assert_eq!(read_uint_le(&buf, 1, 0)?, 0);
        write_sint_be(&mut buf, 0, 0, 0)?;
        assert!(write_uint_le(&mut buf, 1, 0, 0).is_err());
        Ok(())
    }

    #[test]
    fn wide_fields() -> anyhow::Result<()> {
        let mut buf = [0u8; 20];
        write_sint_le(&mut buf, -3, 0, 20)?;
        assert!(buf[16..].iter().all(|&b| b == 0xFF));
        assert_eq!(read_sint_le(&buf, 0, 20)?, -3);
        assert_eq!(
            read_uint_le(&buf, 0, 20),
            Err(ByteError::TooWide {
                length: 20,
                signedness: Signedness::Unsigned
            })
        );

        write_uint_be(&mut buf, u128::MAX, 0, 20)?;
        assert_eq!(&buf[..4], &[0, 0, 0, 0]);
        assert_eq!(read_uint_be(&buf, 0, 20)?, u128::MAX);
        assert!(read_sint_be(&buf, 0, 20).is_err());
        Ok(())
    }
}
