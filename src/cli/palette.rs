use anyhow::{Context, Result};
use romkit::process::unique::{make_colors_unique, make_flat_palettes_unique};
use romkit::structs::palette::Palette;
use serde::{Deserialize, Serialize};

use super::command::{Cli, PaletteArgs};
use crate::input::{read_input, write_output};

/// Palette file layout: a list of palettes, each a list of `[r, g, b]`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteFile {
    pub palettes: Vec<Palette>,
}

/// Palette file layout with flat `r, g, b, r, g, b, ...` palettes.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatPaletteFile {
    pub palettes: Vec<Vec<u8>>,
}

fn count_changed<T: PartialEq>(before: &[Vec<T>], after: &[Vec<T>]) -> usize {
    before
        .iter()
        .flatten()
        .zip(after.iter().flatten())
        .filter(|(a, b)| a != b)
        .count()
}

/// De-duplicates the palettes of a YAML document and returns the new document
/// along with the number of changed entries.
fn process(text: &str, flat: bool) -> Result<(String, usize)> {
    if flat {
        let file: FlatPaletteFile =
            serde_yaml_ng::from_str(text).context("Invalid flat palette file")?;
        let palettes = make_flat_palettes_unique(&file.palettes)?;
        let changed = count_changed(&file.palettes, &palettes);
        Ok((serde_yaml_ng::to_string(&FlatPaletteFile { palettes })?, changed))
    } else {
        let file: PaletteFile = serde_yaml_ng::from_str(text).context("Invalid palette file")?;
        let palettes = make_colors_unique(&file.palettes)?;
        let changed = count_changed(&file.palettes, &palettes);
        Ok((serde_yaml_ng::to_string(&PaletteFile { palettes })?, changed))
    }
}

pub fn cmd_palette(args: &PaletteArgs, _cli: &Cli) -> Result<()> {
    let data = read_input(&args.input)?;
    let text = std::str::from_utf8(&data).context("Palette file is not UTF-8")?;

    let (output, changed) = process(text, args.flat)?;
    log::info!(
        "{changed} {} changed",
        if args.flat { "channel values" } else { "colors" }
    );

    match &args.output {
        Some(path) => write_output(path, output.as_bytes()),
        None => {
            print!("{output}");
            Ok(())
        }
    }
}
