//! Maps each supported numeric type to its codec.
//!
//! [`Primitive`] is a closed trait over exactly the ten fixed-width types. Code that knows its
//! types at compile time uses it directly. Code that picks a type at run time uses [`Kind`] and
//! [`Value`].

use alloc::vec::Vec;

use crate::codec::{BYTE_SIZE, DOUBLE_SIZE, FLOAT_SIZE, INT_SIZE, LONG_SIZE, SHORT_SIZE};
use crate::error::{ensure_len, Result};
use crate::order::Order;

/// The largest encoded size of any [`Primitive`].
pub const MAX_SIZE: usize = LONG_SIZE;

mod private {
    pub trait Sealed {}
}

/// A fixed-width numeric type with a codec for each [`Order`].
///
/// This trait is sealed. It is implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`,
/// `i64`, `f32` and `f64`, and nothing else.
pub trait Primitive: private::Sealed + Copy + PartialEq + core::fmt::Debug + 'static {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// The runtime tag for this type.
    const KIND: Kind;

    /// The encoded form, always exactly `SIZE` bytes.
    type Bytes: AsRef<[u8]> + Copy;

    /// Decodes a value from the front of `bytes`.
    ///
    /// # Panics
    /// If `bytes` is shorter than `SIZE`.
    fn decode<O: Order>(bytes: &[u8]) -> Self;

    /// Encodes the value.
    fn encode<O: Order>(self) -> Self::Bytes;

    /// Wraps the value in a [`Value`].
    fn into_value(self) -> Value;

    /// Decodes a value from the front of `bytes`, or fails if `bytes` is shorter than `SIZE`.
    #[inline(always)]
    fn try_decode<O: Order>(bytes: &[u8]) -> Result<Self> {
        ensure_len(bytes, Self::SIZE)?;
        Ok(Self::decode::<O>(bytes))
    }

    /// Encodes the value and appends it to `out`.
    #[inline(always)]
    fn encode_into<O: Order>(self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.encode::<O>().as_ref());
    }
}

macro_rules! primitives {
    ($($ty:ty => $kind:ident, $size:expr, $read:ident, $write:ident;)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Primitive for $ty {
                const SIZE: usize = $size;
                const KIND: Kind = Kind::$kind;
                type Bytes = [u8; $size];

                #[inline(always)]
                fn decode<O: Order>(bytes: &[u8]) -> Self {
                    O::$read(bytes)
                }

                #[inline(always)]
                fn encode<O: Order>(self) -> Self::Bytes {
                    O::$write(self)
                }

                fn into_value(self) -> Value {
                    Value::$kind(self)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$kind(v)
                }
            }
        )*

        /// Runtime tag naming one of the [`Primitive`] types.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum Kind {
            $(
                #[doc = concat!("`", stringify!($ty), "`")]
                $kind,
            )*
        }

        impl Kind {
            /// Encoded size in bytes of values of this kind.
            pub const fn size(self) -> usize {
                match self {
                    $(Self::$kind => $size,)*
                }
            }
        }

        /// A fixed-width numeric value whose type is known only at run time.
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub enum Value {
            $(
                #[doc = concat!("A `", stringify!($ty), "` value.")]
                $kind($ty),
            )*
        }

        impl Value {
            /// The kind of this value.
            pub fn kind(&self) -> Kind {
                match self {
                    $(Self::$kind(_) => Kind::$kind,)*
                }
            }

            /// Decodes a value of `kind` from the front of `bytes`, or fails if `bytes` is too
            /// short.
            pub fn try_decode<O: Order>(kind: Kind, bytes: &[u8]) -> Result<Self> {
                match kind {
                    $(Kind::$kind => Ok(Self::$kind(<$ty>::try_decode::<O>(bytes)?)),)*
                }
            }

            /// Encodes the value and appends it to `out`.
            pub fn encode_into<O: Order>(self, out: &mut Vec<u8>) {
                match self {
                    $(Self::$kind(v) => v.encode_into::<O>(out),)*
                }
            }

            /// Encodes the value and writes all of its bytes to `writer`.
            #[cfg(feature = "std")]
            pub fn write_to<O: Order, W: std::io::Write + ?Sized>(self, writer: &mut W) -> Result<()> {
                match self {
                    $(Self::$kind(v) => write::<$ty, O, W>(writer, v),)*
                }
            }
        }
    };
}

primitives! {
    u8 => U8, BYTE_SIZE, read_u8, write_u8;
    i8 => I8, BYTE_SIZE, read_i8, write_i8;
    u16 => U16, SHORT_SIZE, read_u16, write_u16;
    i16 => I16, SHORT_SIZE, read_i16, write_i16;
    u32 => U32, INT_SIZE, read_u32, write_u32;
    i32 => I32, INT_SIZE, read_i32, write_i32;
    u64 => U64, LONG_SIZE, read_u64, write_u64;
    i64 => I64, LONG_SIZE, read_i64, write_i64;
    f32 => F32, FLOAT_SIZE, read_f32, write_f32;
    f64 => F64, DOUBLE_SIZE, read_f64, write_f64;
}

/// Reads exactly `T::SIZE` bytes from `reader` and decodes them using `O`.
///
/// Short reads are retried until the buffer is full or the reader reports end of input. If the
/// reader runs dry first, this fails with [`Error::NotEnoughData`](crate::Error::NotEnoughData);
/// the bytes already consumed from the reader are lost. Any other I/O error is returned as
/// [`Error::Io`](crate::Error::Io).
#[cfg(feature = "std")]
pub fn read<T: Primitive, O: Order, R: std::io::Read + ?Sized>(reader: &mut R) -> Result<T> {
    let mut buf = [0u8; MAX_SIZE];
    let buf = &mut buf[..T::SIZE];
    fill(reader, buf)?;
    Ok(T::decode::<O>(buf))
}

/// Like [`read`], but the type is chosen at run time by `kind`.
#[cfg(feature = "std")]
pub fn read_value<O: Order, R: std::io::Read + ?Sized>(reader: &mut R, kind: Kind) -> Result<Value> {
    let mut buf = [0u8; MAX_SIZE];
    let buf = &mut buf[..kind.size()];
    fill(reader, buf)?;
    Value::try_decode::<O>(kind, buf)
}

/// Encodes `value` using `O` and writes all of its bytes to `writer`.
///
/// Errors from `writer` are returned as [`Error::Io`](crate::Error::Io), unmodified.
#[cfg(feature = "std")]
pub fn write<T: Primitive, O: Order, W: std::io::Write + ?Sized>(
    writer: &mut W,
    value: T,
) -> Result<()> {
    writer.write_all(value.encode::<O>().as_ref())?;
    Ok(())
}

/// Like [`write`], but the type is carried by the [`Value`].
#[cfg(feature = "std")]
pub fn write_value<O: Order, W: std::io::Write + ?Sized>(writer: &mut W, value: Value) -> Result<()> {
    value.write_to::<O, W>(writer)
}

#[cfg(feature = "std")]
fn fill<R: std::io::Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if filled < buf.len() {
        tracing::trace!(needed = buf.len(), available = filled, "reader ended early");
        return Err(crate::Error::NotEnoughData {
            needed: buf.len(),
            available: filled,
        });
    }
    Ok(())
}
