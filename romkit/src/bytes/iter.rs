//! Lazy iterators over bits, nibbles and fixed-size chunks.

use std::iter::FusedIterator;

use crate::bytes::view::{ByteSource, check_view};
use crate::utils::errors::ByteError;

/// The 8 low bits of a number, most significant first.
#[derive(Debug, Clone)]
pub struct Bits {
    value: u8,
    mask: u8,
}

/// Iterates over the low 8 bits of `number`, starting with the high bit.
///
/// Any integer type up to 64 bits is accepted; negative numbers use their
/// two's complement low byte.
///
/// ```
/// use romkit::bytes::iter::iter_bits;
///
/// let bits: Vec<u8> = iter_bits(0b1011_0000).collect();
/// assert_eq!(bits, [1, 0, 1, 1, 0, 0, 0, 0]);
/// ```
pub fn iter_bits(number: impl Into<i128>) -> Bits {
    let number: i128 = number.into();
    Bits {
        value: number as u8,
        mask: 0x80,
    }
}

impl Iterator for Bits {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.mask == 0 {
            return None;
        }
        let bit = u8::from(self.value & self.mask != 0);
        self.mask >>= 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.mask == 0 {
            0
        } else {
            self.mask.trailing_zeros() as usize + 1
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bits {}
impl FusedIterator for Bits {}

/// Resolves an optional end bound and validates `start..end` against `len`.
fn resolve_range(start: usize, end: Option<usize>, len: usize) -> Result<usize, ByteError> {
    let end = end.unwrap_or(len);
    if start > end || end > len {
        return Err(ByteError::InvalidRange { start, end, len });
    }
    Ok(end)
}

/// Successive `slice_size` byte slices of a buffer.
#[derive(Debug, Clone)]
pub struct ByteChunks<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
    slice_size: usize,
}

/// Iterates over `data` in slices of `slice_size` bytes, starting at `start`
/// and stopping before `end` (the whole buffer by default).
///
/// A slice never extends past the buffer, so the last one may be shorter.
///
/// ```
/// use romkit::bytes::iter::iter_bytes;
///
/// let data: Vec<u8> = (0..10).collect();
/// let chunks: Vec<&[u8]> = iter_bytes(data.as_slice(), 3, 0, Some(10))?.collect();
/// assert_eq!(chunks, [&[0u8, 1, 2][..], &[3, 4, 5], &[6, 7, 8], &[9]]);
/// # Ok::<(), romkit::utils::errors::ByteError>(())
/// ```
pub fn iter_bytes<'a, S: ByteSource + ?Sized>(
    data: &'a S,
    slice_size: usize,
    start: usize,
    end: Option<usize>,
) -> Result<ByteChunks<'a>, ByteError> {
    check_view(data);
    let bytes = data.as_bytes();
    if slice_size == 0 {
        return Err(ByteError::ZeroSliceSize);
    }
    let end = resolve_range(start, end, bytes.len())?;

    Ok(ByteChunks {
        data: bytes,
        pos: start,
        end,
        slice_size,
    })
}

impl<'a> ByteChunks<'a> {
    fn remaining(&self) -> usize {
        (self.end - self.pos).div_ceil(self.slice_size)
    }
}

impl<'a> Iterator for ByteChunks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.end {
            return None;
        }
        let stop = self.pos.saturating_add(self.slice_size).min(self.data.len());
        let chunk = &self.data[self.pos..stop];
        self.pos = self.pos.saturating_add(self.slice_size).min(self.end);
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for ByteChunks<'_> {}
impl FusedIterator for ByteChunks<'_> {}

/// Two 4-bit values per byte, low nibble first.
#[derive(Debug, Clone)]
pub struct Nibbles<'a> {
    bytes: std::slice::Iter<'a, u8>,
    upper: Option<u8>,
}

/// Iterates over the nibbles of `data[start..end]`, yielding the low nibble
/// of each byte before its high nibble.
///
/// ```
/// use romkit::bytes::iter::iter_bytes_4bit_le;
///
/// let nibbles: Vec<u8> = iter_bytes_4bit_le(&[0x21u8], 0, Some(1))?.collect();
/// assert_eq!(nibbles, [1, 2]);
/// # Ok::<(), romkit::utils::errors::ByteError>(())
/// ```
pub fn iter_bytes_4bit_le<'a, S: ByteSource + ?Sized>(
    data: &'a S,
    start: usize,
    end: Option<usize>,
) -> Result<Nibbles<'a>, ByteError> {
    check_view(data);
    let bytes = data.as_bytes();
    let end = resolve_range(start, end, bytes.len())?;

    Ok(Nibbles {
        bytes: bytes[start..end].iter(),
        upper: None,
    })
}

impl Iterator for Nibbles<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if let Some(upper) = self.upper.take() {
            return Some(upper);
        }
        let byte = *self.bytes.next()?;
        self.upper = Some(byte >> 4);
        Some(byte & 0x0F)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bytes.len() * 2 + usize::from(self.upper.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for Nibbles<'_> {}
impl FusedIterator for Nibbles<'_> {}
