//! Byte buffer accessors.
//!
//! - [`view`]: bounds-checked borrowed reads and the debug view advisory
//! - [`int`]: fixed-width integer codec in both byte orders
//! - [`iter`]: bit, nibble and chunk iterators

pub mod int;
pub mod iter;
pub mod view;

pub use int::ByteOrder;
pub use view::{ByteSource, read_bytes};
