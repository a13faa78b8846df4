/// Extension matching over folder trees.
///
/// Provides [`files_with_extension`](scan::files_with_extension) for collecting
/// file paths from a [`Folder`](crate::structs::folder::Folder).
pub mod scan;

/// Palette color de-duplication.
///
/// Provides [`make_colors_unique`](unique::make_colors_unique) and its flat
/// buffer counterpart.
pub mod unique;
