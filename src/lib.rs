//! An RFC 9562 UUID value type with a compact 22-character encoding
//!
//! ```rust
//! use uuid22::Uuid;
//!
//! let uuid = uuid22::uuid7();
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{}", uuid.encode()); // e.g. "bfZ7OIP2-pfpF0ERqj3dka"
//! assert_eq!(uuid.encode().parse::<Uuid>(), Ok(uuid));
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Textual forms
//!
//! [`Uuid`] implements [`FromStr`](core::str::FromStr), which picks the representation by the
//! length of the input:
//!
//! | Length | Form                                            |
//! | ------ | ----------------------------------------------- |
//! | 22     | compact encoding, e.g. `b4vJqsEfy0eNHwnbj4vJqs` |
//! | 32     | `12345678123456781234567812345678`              |
//! | 36     | `12345678-1234-5678-1234-567812345678`          |
//! | 38     | `{12345678-1234-5678-1234-567812345678}`        |
//! | 45     | `urn:uuid:12345678-1234-5678-1234-567812345678` |
//!
//! Hexadecimal digits are accepted in either case. [`Uuid::parse_str`] accepts only the
//! hexadecimal forms and [`Uuid::decode`] only the compact one.
//!
//! # Compact encoding
//!
//! The compact form spells the 128 bits with six bits per character, drawing on the URL-safe
//! alphabet `a-z`, `A-Z`, `0-9`, `_`, `-` (in this order of value). The bits are read starting
//! from the least significant bit of byte 0 and written from the last character backwards, so
//! the 22 characters carry 132 bits of which the top four are always zero.
//!
//! # Field and bit layout of UUIDv7
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The 48-bit `unix_ts_ms` field holds the Unix timestamp in milliseconds, the 4-bit `ver` field
//! is set at `0111`, the 2-bit `var` field is set at `10`, and the remaining 74 bits are filled
//! with a cryptographically strong random number.
//!
//! # Other features
//!
//! This library also generates UUID version 4:
//!
//! ```rust
//! let uuid = uuid22::uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! assert_eq!(uuid.version(), 4);
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen` (implies `std`) enables the process-wide default generator behind [`uuid7()`]
//!   and [`uuid4()`].
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Uuid`].
//! - `uuid` enables conversion from/to [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compact;
mod error;
mod id;
mod parse;

pub use error::{Error, ParseFault};
pub use id::{Uuid, Variant};

pub mod generator;
pub use generator::Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid4, uuid7, uuid7_at};
