//! Data structures consumed by the processing functions.
//!
//! - **Folders** ([`structs::folder`](folder)): read-only file system trees
//! - **Palettes** ([`structs::palette`](palette)): RGB color palettes

pub mod folder;
pub mod palette;
