use std::collections::HashSet;

use crate::structs::palette::{Palette, Rgb, colors_from_flat, colors_to_flat};
use crate::utils::errors::PaletteError;

/// Upper bound on perturbations tried for a single color.
pub const MAX_SEARCH_STEPS: usize = 1 << 20;

/// Channel deltas of the perturbation cycle, scaled by the current amount.
const STEPS: [[i32; 3]; 8] = [
    [1, 0, 0],
    [-1, 1, 0],
    [0, -1, 1],
    [0, 1, 0],
    [1, 0, 0],
    [0, 0, -1],
    [-1, -1, -1],
    [0, -1, 1],
];

#[inline]
fn perturb(color: Rgb, step: usize, amount: i32) -> Rgb {
    let delta = STEPS[step];
    std::array::from_fn(|i| (color[i] as i32 + delta[i] * amount).clamp(0, 255) as u8)
}

/// Walks the perturbation cycle from `color` until a color not in `seen` turns
/// up. Returns the color and the number of perturbations applied.
fn find_free(color: Rgb, seen: &HashSet<Rgb>) -> Option<(Rgb, usize)> {
    let mut candidate = color;
    let mut step = 0;
    let mut amount = 1;

    for tries in 0..=MAX_SEARCH_STEPS {
        if !seen.contains(&candidate) {
            return Some((candidate, tries));
        }
        candidate = perturb(candidate, step, amount);
        step = (step + 1) % STEPS.len();
        if step == 0 {
            amount += 1;
        }
    }

    None
}

/// Returns a copy of `palettes` in which no color occurs twice across the
/// whole collection.
///
/// Colors are visited in order. The first occurrence of a color is kept, later
/// ones are nudged through a fixed cycle of channel changes until they no
/// longer collide. Input without duplicates is returned unchanged.
///
/// ```
/// use romkit::process::unique::make_colors_unique;
///
/// let out = make_colors_unique(&[vec![[10, 10, 10], [10, 10, 10]]])?;
/// assert_eq!(out, [vec![[10, 10, 10], [11, 10, 10]]]);
/// # Ok::<(), romkit::utils::errors::PaletteError>(())
/// ```
pub fn make_colors_unique(palettes: &[Palette]) -> Result<Vec<Palette>, PaletteError> {
    let total = palettes.iter().map(Vec::len).sum();
    let mut seen = HashSet::with_capacity(total);
    let mut out = Vec::with_capacity(palettes.len());

    for (palette_idx, palette) in palettes.iter().enumerate() {
        let mut out_palette = Vec::with_capacity(palette.len());
        for (color_idx, &color) in palette.iter().enumerate() {
            let Some((found, steps)) = find_free(color, &seen) else {
                return Err(PaletteError::SearchExhausted {
                    palette: palette_idx,
                    index: color_idx,
                    steps: MAX_SEARCH_STEPS,
                });
            };
            if steps > 0 {
                log::debug!(
                    "Palette {palette_idx} color {color_idx}: {color:?} -> {found:?} after {steps} steps"
                );
            }
            seen.insert(found);
            out_palette.push(found);
        }
        out.push(out_palette);
    }

    Ok(out)
}

/// [`make_colors_unique`] for palettes stored as flat `r, g, b, ...` buffers.
pub fn make_flat_palettes_unique(palettes: &[Vec<u8>]) -> Result<Vec<Vec<u8>>, PaletteError> {
    let colors = palettes
        .iter()
        .enumerate()
        .map(|(palette, flat)| {
            colors_from_flat(flat).ok_or(PaletteError::RaggedPalette {
                palette,
                len: flat.len(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(make_colors_unique(&colors)?
        .iter()
        .map(|palette| colors_to_flat(palette))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_unique(palettes: &[Palette]) {
        let mut seen = HashSet::new();
        for color in palettes.iter().flatten() {
            assert!(seen.insert(*color), "duplicate color {color:?}");
        }
    }

    #[test]
    fn duplicate_pair() -> Result<(), PaletteError> {
        let out = make_colors_unique(&[vec![[10, 10, 10], [10, 10, 10]]])?;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0][0], [10, 10, 10]);
        assert_ne!(out[0][1], out[0][0]);
        Ok(())
    }

    #[test]
    fn perturbation_cycle_order() -> Result<(), PaletteError> {
        let out = make_colors_unique(&[vec![[10, 10, 10]; 6]])?;
        assert_eq!(
            out[0],
            [
                [10, 10, 10],
                [11, 10, 10],
                [10, 11, 10],
                [10, 10, 11],
                [10, 11, 11],
                [11, 11, 11]
            ]
        );
        Ok(())
    }

    #[test]
    fn seen_set_spans_palettes() -> Result<(), PaletteError> {
        let input = [
            vec![[10, 10, 10], [20, 20, 20]],
            vec![[10, 10, 10], [11, 10, 10]],
        ];
        let out = make_colors_unique(&input)?;
        assert_eq!(
            out,
            [
                vec![[10, 10, 10], [20, 20, 20]],
                vec![[11, 10, 10], [12, 10, 10]],
            ]
        );
        Ok(())
    }

    #[test]
    fn clamped_at_channel_limits() -> Result<(), PaletteError> {
        let white = make_colors_unique(&[vec![[255, 255, 255]; 200]])?;
        let black = make_colors_unique(&[vec![[0, 0, 0]; 200]])?;
        assert_all_unique(&white);
        assert_all_unique(&black);
        assert_eq!(white[0][1], [254, 255, 255]);
        assert_eq!(black[0][3], [0, 0, 1]);
        Ok(())
    }

    #[test]
    fn unique_input_is_unchanged() -> Result<(), PaletteError> {
        let input = vec![
            vec![[0, 0, 0], [1, 2, 3], [255, 255, 255]],
            vec![],
            vec![[9, 9, 9]],
        ];
        assert_eq!(make_colors_unique(&input)?, input);
        Ok(())
    }

    #[test]
    fn shape_is_preserved() -> Result<(), PaletteError> {
        let input: Vec<Palette> = (0..4u8)
            .map(|p| (0..16u8).map(|c| [c % 4, p % 2, 7]).collect())
            .collect();
        let out = make_colors_unique(&input)?;
        assert_eq!(out.len(), input.len());
        for (a, b) in out.iter().zip(&input) {
            assert_eq!(a.len(), b.len());
        }
        assert_all_unique(&out);
        Ok(())
    }

    #[test]
    fn search_gives_up_after_step_limit() {
        // Every candidate the search from black can reach, in visiting order.
        let mut path = Vec::new();
        let mut visited = HashSet::new();
        let (mut candidate, mut step, mut amount) = ([0u8, 0, 0], 0, 1);
        for _ in 0..=MAX_SEARCH_STEPS {
            if visited.insert(candidate) {
                path.push(candidate);
            }
            candidate = perturb(candidate, step, amount);
            step = (step + 1) % STEPS.len();
            if step == 0 {
                amount += 1;
            }
        }

        let mut palette = path;
        palette.push([0, 0, 0]);
        let last = palette.len() - 1;

        assert_eq!(
            make_colors_unique(&[palette]),
            Err(PaletteError::SearchExhausted {
                palette: 0,
                index: last,
                steps: MAX_SEARCH_STEPS,
            })
        );
    }

    #[test]
    fn flat_palettes() {
        let out = make_flat_palettes_unique(&[vec![1, 2, 3, 1, 2, 3]]);
        assert_eq!(out, Ok(vec![vec![1, 2, 3, 2, 2, 3]]));

        assert_eq!(
            make_flat_palettes_unique(&[vec![1, 2, 3], vec![1, 2]]),
            Err(PaletteError::RaggedPalette { palette: 1, len: 2 })
        );
    }
}
