use crate::codec::*;

mod private {
    pub trait Sealed {}

    impl Sealed for super::Big {}
    impl Sealed for super::Little {}
}

/// A byte order, selected at compile time by type parameter.
///
/// There are exactly two implementations, [`Big`] and [`Little`]. They differ only in which
/// multi-byte codec from [`crate::codec`] they call. Single-byte types encode the same way in
/// both.
///
/// All `read_*` methods are unchecked: they panic if `v` is shorter than the type. Use
/// [`Primitive::try_decode`](crate::Primitive::try_decode) or the `try_read_*` functions in
/// [`crate::codec`] for input of unknown length.
pub trait Order: private::Sealed + Copy + Default + core::fmt::Debug + 'static {
    /// The matching `zerocopy` byte order, for typed views such as `U32<Self::Wire>`.
    type Wire: zerocopy::byteorder::ByteOrder;

    /// Decodes a `u8`.
    fn read_u8(v: &[u8]) -> u8 {
        crate::codec::read_u8(v)
    }
    /// Decodes an `i8`.
    fn read_i8(v: &[u8]) -> i8 {
        crate::codec::read_i8(v)
    }
    /// Decodes a `u16`.
    fn read_u16(v: &[u8]) -> u16;
    /// Decodes an `i16`.
    fn read_i16(v: &[u8]) -> i16;
    /// Decodes a `u32`.
    fn read_u32(v: &[u8]) -> u32;
    /// Decodes an `i32`.
    fn read_i32(v: &[u8]) -> i32;
    /// Decodes a `u64`.
    fn read_u64(v: &[u8]) -> u64;
    /// Decodes an `i64`.
    fn read_i64(v: &[u8]) -> i64;
    /// Decodes an `f32`.
    fn read_f32(v: &[u8]) -> f32;
    /// Decodes an `f64`.
    fn read_f64(v: &[u8]) -> f64;

    /// Encodes a `u8`.
    fn write_u8(v: u8) -> [u8; BYTE_SIZE] {
        crate::codec::write_u8(v)
    }
    /// Encodes an `i8`.
    fn write_i8(v: i8) -> [u8; BYTE_SIZE] {
        crate::codec::write_i8(v)
    }
    /// Encodes a `u16`.
    fn write_u16(v: u16) -> [u8; SHORT_SIZE];
    /// Encodes an `i16`.
    fn write_i16(v: i16) -> [u8; SHORT_SIZE];
    /// Encodes a `u32`.
    fn write_u32(v: u32) -> [u8; INT_SIZE];
    /// Encodes an `i32`.
    fn write_i32(v: i32) -> [u8; INT_SIZE];
    /// Encodes a `u64`.
    fn write_u64(v: u64) -> [u8; LONG_SIZE];
    /// Encodes an `i64`.
    fn write_i64(v: i64) -> [u8; LONG_SIZE];
    /// Encodes an `f32`.
    fn write_f32(v: f32) -> [u8; FLOAT_SIZE];
    /// Encodes an `f64`.
    fn write_f64(v: f64) -> [u8; DOUBLE_SIZE];
}

/// Big-endian byte order: most significant byte first.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Big;

/// Little-endian byte order: least significant byte first.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Little;

impl Order for Big {
    type Wire = zerocopy::byteorder::BigEndian;

    #[inline(always)]
    fn read_u16(v: &[u8]) -> u16 {
        read_u16_be(v)
    }
    #[inline(always)]
    fn read_i16(v: &[u8]) -> i16 {
        read_i16_be(v)
    }
    #[inline(always)]
    fn read_u32(v: &[u8]) -> u32 {
        read_u32_be(v)
    }
    #[inline(always)]
    fn read_i32(v: &[u8]) -> i32 {
        read_i32_be(v)
    }
    #[inline(always)]
    fn read_u64(v: &[u8]) -> u64 {
        read_u64_be(v)
    }
    #[inline(always)]
    fn read_i64(v: &[u8]) -> i64 {
        read_i64_be(v)
    }
    #[inline(always)]
    fn read_f32(v: &[u8]) -> f32 {
        read_f32_be(v)
    }
    #[inline(always)]
    fn read_f64(v: &[u8]) -> f64 {
        read_f64_be(v)
    }

    #[inline(always)]
    fn write_u16(v: u16) -> [u8; SHORT_SIZE] {
        write_u16_be(v)
    }
    #[inline(always)]
    fn write_i16(v: i16) -> [u8; SHORT_SIZE] {
        write_i16_be(v)
    }
    #[inline(always)]
    fn write_u32(v: u32) -> [u8; INT_SIZE] {
        write_u32_be(v)
    }
    #[inline(always)]
    fn write_i32(v: i32) -> [u8; INT_SIZE] {
        write_i32_be(v)
    }
    #[inline(always)]
    fn write_u64(v: u64) -> [u8; LONG_SIZE] {
        write_u64_be(v)
    }
    #[inline(always)]
    fn write_i64(v: i64) -> [u8; LONG_SIZE] {
        write_i64_be(v)
    }
    #[inline(always)]
    fn write_f32(v: f32) -> [u8; FLOAT_SIZE] {
        write_f32_be(v)
    }
    #[inline(always)]
    fn write_f64(v: f64) -> [u8; DOUBLE_SIZE] {
        write_f64_be(v)
    }
}

impl Order for Little {
    type Wire = zerocopy::byteorder::LittleEndian;

    #[inline(always)]
    fn read_u16(v: &[u8]) -> u16 {
        read_u16_le(v)
    }
    #[inline(always)]
    fn read_i16(v: &[u8]) -> i16 {
        read_i16_le(v)
    }
    #[inline(always)]
    fn read_u32(v: &[u8]) -> u32 {
        read_u32_le(v)
    }
    #[inline(always)]
    fn read_i32(v: &[u8]) -> i32 {
        read_i32_le(v)
    }
    #[inline(always)]
    fn read_u64(v: &[u8]) -> u64 {
        read_u64_le(v)
    }
    #[inline(always)]
    fn read_i64(v: &[u8]) -> i64 {
        read_i64_le(v)
    }
    #[inline(always)]
    fn read_f32(v: &[u8]) -> f32 {
        read_f32_le(v)
    }
    #[inline(always)]
    fn read_f64(v: &[u8]) -> f64 {
        read_f64_le(v)
    }

    #[inline(always)]
    fn write_u16(v: u16) -> [u8; SHORT_SIZE] {
        write_u16_le(v)
    }
    #[inline(always)]
    fn write_i16(v: i16) -> [u8; SHORT_SIZE] {
        write_i16_le(v)
    }
    #[inline(always)]
    fn write_u32(v: u32) -> [u8; INT_SIZE] {
        write_u32_le(v)
    }
    #[inline(always)]
    fn write_i32(v: i32) -> [u8; INT_SIZE] {
        write_i32_le(v)
    }
    #[inline(always)]
    fn write_u64(v: u64) -> [u8; LONG_SIZE] {
        write_u64_le(v)
    }
    #[inline(always)]
    fn write_i64(v: i64) -> [u8; LONG_SIZE] {
        write_i64_le(v)
    }
    #[inline(always)]
    fn write_f32(v: f32) -> [u8; FLOAT_SIZE] {
        write_f32_le(v)
    }
    #[inline(always)]
    fn write_f64(v: f64) -> [u8; DOUBLE_SIZE] {
        write_f64_le(v)
    }
}
