use crate::structs::folder::Folder;

/// Returns the paths of all files in `root` ending with `.ext`.
///
/// Depth first: the matching files of a folder come before the contents of
/// its subfolders, and subfolders are visited in order. Paths are relative to
/// `root` and use `/` as separator.
///
/// ```
/// use romkit::process::scan::files_with_extension;
/// use romkit::structs::folder::Folder;
///
/// let root = Folder::new()
///     .with_file("a.txt")
///     .with_file("b.bin")
///     .with_folder("sub", Folder::new().with_file("c.txt"));
///
/// assert_eq!(files_with_extension(&root, "txt"), ["a.txt", "sub/c.txt"]);
/// ```
pub fn files_with_extension(root: &Folder, ext: &str) -> Vec<String> {
    let suffix = format!(".{ext}");
    let mut out = Vec::new();
    collect(&mut out, "", root, &suffix);
    out
}

fn collect(out: &mut Vec<String>, path: &str, folder: &Folder, suffix: &str) {
    out.extend(
        folder
            .files
            .iter()
            .filter(|name| name.ends_with(suffix))
            .map(|name| format!("{path}{name}")),
    );

    for (name, subfolder) in &folder.folders {
        collect(out, &format!("{path}{name}/"), subfolder, suffix);
    }
}
