use anyhow::{Result, anyhow};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use romkit::process::scan::files_with_extension;
use romkit::structs::folder::Folder;

use super::command::{Cli, ScanArgs};

/// Scans the folder at `under` and keeps the returned paths relative to
/// `tree`.
fn matches_under(tree: &Folder, under: &str, ext: &str) -> Result<Vec<String>> {
    let parts: Vec<&str> = under.split('/').filter(|part| !part.is_empty()).collect();
    let folder = parts
        .iter()
        .try_fold(tree, |folder, part| folder.subfolder(part))
        .ok_or_else(|| anyhow!("No folder {under:?} in the scanned tree"))?;

    let prefix: String = parts.iter().map(|part| format!("{part}/")).collect();
    Ok(files_with_extension(folder, ext)
        .into_iter()
        .map(|path| format!("{prefix}{path}"))
        .collect())
}

pub fn cmd_scan(args: &ScanArgs, _cli: &Cli, multi: Option<&MultiProgress>) -> Result<()> {
    let ext = args.ext.trim_start_matches('.');
    log::info!("Scanning {} for *.{ext}", args.root.display());

    let pb = match multi {
        Some(multi) => {
            let pb = multi.add(ProgressBar::new_spinner());
            pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb.set_message("Reading directory tree...");
            Some(pb)
        }
        None => None,
    };

    let tree = Folder::from_dir(&args.root);
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }
    let tree = tree?;

    let matches = match &args.under {
        Some(under) => matches_under(&tree, under, ext)?,
        None => files_with_extension(&tree, ext),
    };
    log::info!("{} of {} files match", matches.len(), tree.file_count());

    for path in matches {
        println!("{path}");
    }
    Ok(())
}
