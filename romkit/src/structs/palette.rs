//! RGB palette types.

/// One color as `[r, g, b]`.
pub type Rgb = [u8; 3];

/// An ordered list of colors.
pub type Palette = Vec<Rgb>;

/// Splits a flat `r, g, b, r, g, b, ...` buffer into colors.
///
/// Returns `None` when the length is not a multiple of 3.
pub fn colors_from_flat(flat: &[u8]) -> Option<Palette> {
    if flat.len() % 3 != 0 {
        return None;
    }
    Some(flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}

/// Flattens colors back into an `r, g, b, ...` buffer.
pub fn colors_to_flat(colors: &[Rgb]) -> Vec<u8> {
    colors.as_flattened().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_conversion() {
        let flat = [1u8, 2, 3, 4, 5, 6];
        let colors = colors_from_flat(&flat);
        assert_eq!(colors, Some(vec![[1, 2, 3], [4, 5, 6]]));
        assert_eq!(colors_to_flat(&[[1, 2, 3], [4, 5, 6]]), flat);
        assert_eq!(colors_from_flat(&[1, 2]), None);
        assert_eq!(colors_from_flat(&[]), Some(vec![]));
    }
}
