use std::borrow::Cow;

use crate::utils::debug::debug_enabled;
use crate::utils::errors::ByteError;

/// A byte buffer that byte operations can borrow from.
///
/// Borrowed slices and arrays are views; owned containers report
/// `is_view() == false` so the debug advisory can point at call sites that
/// copied data before handing it over.
pub trait ByteSource {
    fn as_bytes(&self) -> &[u8];

    fn is_view(&self) -> bool {
        true
    }
}

impl ByteSource for [u8] {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn is_view(&self) -> bool {
        false
    }
}

impl ByteSource for Box<[u8]> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn is_view(&self) -> bool {
        false
    }
}

impl ByteSource for Cow<'_, [u8]> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn is_view(&self) -> bool {
        matches!(self, Cow::Borrowed(_))
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        (**self).as_bytes()
    }

    fn is_view(&self) -> bool {
        (**self).is_view()
    }
}

/// Warns when debugging is enabled and `data` is not a borrowed view.
#[inline]
pub fn check_view<S: ByteSource + ?Sized>(data: &S) {
    if debug_enabled() && !data.is_view() {
        log::warn!("Byte operation without a borrowed view");
    }
}

/// Checks that `start..start + length` lies within a buffer of `len` bytes.
#[inline]
pub(crate) fn check_range(start: usize, length: usize, len: usize) -> Result<(), ByteError> {
    match start.checked_add(length) {
        Some(end) if end <= len => Ok(()),
        _ => Err(ByteError::OutOfBounds { start, length, len }),
    }
}

/// Borrows `length` bytes starting at `start`.
pub fn read_bytes<S: ByteSource + ?Sized>(
    data: &S,
    start: usize,
    length: usize,
) -> Result<&[u8], ByteError> {
    check_view(data);
    let bytes = data.as_bytes();
    check_range(start, length, bytes.len())?;
    Ok(&bytes[start..start + length])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_bytes_borrows_range() -> Result<(), ByteError> {
        let data = [1u8, 2, 3, 4, 5];
        assert_eq!(read_bytes(&data, 1, 3)?, &[2, 3, 4]);
        assert_eq!(read_bytes(&data[..], 5, 0)?, &[] as &[u8]);
        Ok(())
    }

    #[test]
    fn read_bytes_rejects_out_of_range() {
        let data = vec![0u8; 4];
        assert_eq!(
            read_bytes(&data, 3, 2),
            Err(ByteError::OutOfBounds {
                start: 3,
                length: 2,
                len: 4
            })
        );
        assert!(read_bytes(&data, usize::MAX, 2).is_err());
    }

    #[test]
    fn debug_flag_does_not_change_reads() -> Result<(), ByteError> {
        use crate::bytes::int::read_sint_be;
        use crate::utils::debug::{debug_enabled, set_debug};

        let owned = vec![0x12u8, 0xFE, 0xFF, 0x00];
        let quiet = (read_bytes(&owned, 1, 2)?.to_vec(), read_sint_be(&owned, 1, 2)?);

        set_debug(true);
        assert!(debug_enabled());
        let warned = (read_bytes(&owned, 1, 2).map(<[u8]>::to_vec), read_sint_be(&owned, 1, 2));
        set_debug(false);

        assert_eq!(warned, (Ok(quiet.0), Ok(quiet.1)));
        Ok(())
    }

    #[test]
    fn view_detection() {
        let owned = vec![0u8; 2];
        assert!(!owned.is_view());
        assert!(owned.as_slice().is_view());
        assert!(Cow::Borrowed(&owned[..]).is_view());
        assert!(!Cow::<[u8]>::Owned(owned.clone()).is_view());
    }
}
