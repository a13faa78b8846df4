#![doc = include_str!("../README.md")]
//!
//! ## Overview
//!
//! Every operation is a stateless transformation over a caller-owned byte
//! buffer or a small in-memory structure. Reads borrow, writes mutate in place,
//! and every range or value problem surfaces as an error instead of being
//! truncated.
//!
//! ## Quick Start
//!
//! ```rust
//! use romkit::bytes::int::{read_uint_be, write_uint_be};
//! use romkit::bytes::iter::iter_bytes_4bit_le;
//! use romkit::process::unique::make_colors_unique;
//!
//! let mut header = [0u8; 8];
//! write_uint_be(&mut header, 0xCAFEu16, 2, 2)?;
//! assert_eq!(read_uint_be(&header, 2, 2)?, 0xCAFE);
//!
//! let nibbles: Vec<u8> = iter_bytes_4bit_le(&header, 2, Some(3))?.collect();
//! assert_eq!(nibbles, [0xA, 0xC]);
//!
//! let palettes = make_colors_unique(&[vec![[0, 0, 0], [0, 0, 0]]])?;
//! assert_eq!(palettes[0][1], [1, 0, 0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Byte buffer accessors.
///
/// - **Views** ([`bytes::view`]): bounds-checked borrowed reads
/// - **Integers** ([`bytes::int`]): fixed-width integer codec
/// - **Iterators** ([`bytes::iter`]): bits, nibbles and chunks
pub mod bytes;

/// Processing over folder trees and palettes.
pub mod process;

/// Data structures consumed by the processing functions.
pub mod structs;

/// Utility functions and supporting infrastructure.
///
/// - **Debug switch** ([`utils::debug`]): view advisory toggle
/// - **Error Handling** ([`utils::errors`]): Error types
/// - **Math** ([`utils::math`]): gcd and lcm
pub mod utils;
