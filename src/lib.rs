//! Fixed-width numeric codecs for big-endian and little-endian byte orders, and a cursor-based
//! byte [`Stream`] built on top of them.
//!
//! The crate has three layers:
//!
//! * [`codec`]: free functions converting between each fixed-width type and its bytes, one set
//!   per byte order, with bounds-checked `try_read_*` variants.
//! * [`Order`] and [`Primitive`]: the byte order as a type parameter ([`Big`] or [`Little`]),
//!   and a closed trait mapping each of the ten supported numeric types to its codec. [`Kind`]
//!   and [`Value`] cover the case where the type is only known at run time.
//! * [`Stream`]: a growable buffer with a read cursor and typed accessors.
//!
//! The only decode failure is [`Error::NotEnoughData`]. Raw slicing on a [`Stream`] never fails;
//! it returns fewer bytes than requested, and the typed accessors turn that into an error.
//!
//! ```
//! use endian_stream::Stream;
//!
//! let mut s = Stream::new();
//! s.write_i32(300);
//! s.write_u16_le(0x1234);
//! assert_eq!(s.all_bytes(), [0, 0, 1, 0x2c, 0x34, 0x12]);
//!
//! assert_eq!(s.read_i32().unwrap(), 300);
//! assert_eq!(s.read_u16_le().unwrap(), 0x1234);
//! assert!(s.read_u8().unwrap_err().is_not_enough_data());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

pub mod codec;
mod error;
mod order;
mod stream;
mod value;


pub use error::{Error, Result};
pub use order::{Big, Little, Order};
pub use stream::Stream;
pub use value::{Kind, Primitive, Value, MAX_SIZE};

#[cfg(feature = "std")]
pub use value::{read, read_value, write, write_value};
