//! Small byte and bit level reading helpers shared by the parser crates.
//!
//! - [`BitReader`] pulls big-endian bit fields of any width up to 64 bits
//!   from an [`std::io::Read`] source and keeps track of how far it has read.
//! - [`BytesCursorExt`] extracts zero-copy [`bytes::Bytes`] slices from an
//!   `io::Cursor<Bytes>`.
//!
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or
//! [Apache-2.0](./LICENSE.Apache-2.0) license. You can choose between one of
//! them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]

mod bit_read;
mod cursor;

pub use bit_read::BitReader;
pub use cursor::BytesCursorExt;
