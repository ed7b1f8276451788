//! Fixed-width codecs for big-endian and little-endian byte layouts.
//!
//! Every multi-byte type has a `read_*` function that decodes from the front of a slice, a
//! `write_*` function that encodes into an array, and a `try_read_*` function that checks the
//! slice length first.
//!
//! The unchecked `read_*` functions panic if the slice is shorter than the type. Signed integers
//! reuse the unsigned codec of the same width and reinterpret the bits as two's complement.
//! Floats reuse the unsigned codec on their IEEE-754 bit pattern.

use crate::error::{ensure_len, Result};

/// Encoded size of `u8`/`i8`.
pub const BYTE_SIZE: usize = 1;
/// Encoded size of `u16`/`i16`.
pub const SHORT_SIZE: usize = 2;
/// Encoded size of `u32`/`i32`.
pub const INT_SIZE: usize = 4;
/// Encoded size of `u64`/`i64`.
pub const LONG_SIZE: usize = 8;
/// Encoded size of `f32`.
pub const FLOAT_SIZE: usize = 4;
/// Encoded size of `f64`.
pub const DOUBLE_SIZE: usize = 8;

// Single bytes have no byte order.

/// Decodes a `u8`.
#[inline(always)]
pub fn read_u8(v: &[u8]) -> u8 {
    v[0]
}

/// Encodes a `u8`.
#[inline(always)]
pub fn write_u8(v: u8) -> [u8; BYTE_SIZE] {
    [v]
}

/// Decodes an `i8` as two's complement.
#[inline(always)]
pub fn read_i8(v: &[u8]) -> i8 {
    v[0] as i8
}

/// Encodes an `i8`.
#[inline(always)]
pub fn write_i8(v: i8) -> [u8; BYTE_SIZE] {
    [v as u8]
}

// Unsigned integers. These carry all of the shifting logic.

/// Decodes a big-endian `u16`.
#[inline(always)]
pub fn read_u16_be(v: &[u8]) -> u16 {
    (v[0] as u16) << 8 | v[1] as u16
}

/// Decodes a little-endian `u16`.
#[inline(always)]
pub fn read_u16_le(v: &[u8]) -> u16 {
    v[0] as u16 | (v[1] as u16) << 8
}

/// Encodes a big-endian `u16`.
#[inline(always)]
pub fn write_u16_be(v: u16) -> [u8; SHORT_SIZE] {
    [(v >> 8) as u8, v as u8]
}

/// Encodes a little-endian `u16`.
#[inline(always)]
pub fn write_u16_le(v: u16) -> [u8; SHORT_SIZE] {
    [v as u8, (v >> 8) as u8]
}

/// Decodes a big-endian `u32`.
#[inline(always)]
pub fn read_u32_be(v: &[u8]) -> u32 {
    (v[0] as u32) << 24 | (v[1] as u32) << 16 | (v[2] as u32) << 8 | v[3] as u32
}

/// Decodes a little-endian `u32`.
#[inline(always)]
pub fn read_u32_le(v: &[u8]) -> u32 {
    v[0] as u32 | (v[1] as u32) << 8 | (v[2] as u32) << 16 | (v[3] as u32) << 24
}

/// Encodes a big-endian `u32`.
#[inline(always)]
pub fn write_u32_be(v: u32) -> [u8; INT_SIZE] {
    [(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8]
}

/// Encodes a little-endian `u32`.
#[inline(always)]
pub fn write_u32_le(v: u32) -> [u8; INT_SIZE] {
    [v as u8, (v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8]
}

/// Decodes a big-endian `u64`.
#[inline(always)]
pub fn read_u64_be(v: &[u8]) -> u64 {
    (v[0] as u64) << 56
        | (v[1] as u64) << 48
        | (v[2] as u64) << 40
        | (v[3] as u64) << 32
        | (v[4] as u64) << 24
        | (v[5] as u64) << 16
        | (v[6] as u64) << 8
        | v[7] as u64
}

/// Decodes a little-endian `u64`.
#[inline(always)]
pub fn read_u64_le(v: &[u8]) -> u64 {
    v[0] as u64
        | (v[1] as u64) << 8
        | (v[2] as u64) << 16
        | (v[3] as u64) << 24
        | (v[4] as u64) << 32
        | (v[5] as u64) << 40
        | (v[6] as u64) << 48
        | (v[7] as u64) << 56
}

/// Encodes a big-endian `u64`.
#[inline(always)]
pub fn write_u64_be(v: u64) -> [u8; LONG_SIZE] {
    [
        (v >> 56) as u8,
        (v >> 48) as u8,
        (v >> 40) as u8,
        (v >> 32) as u8,
        (v >> 24) as u8,
        (v >> 16) as u8,
        (v >> 8) as u8,
        v as u8,
    ]
}

/// Encodes a little-endian `u64`.
#[inline(always)]
pub fn write_u64_le(v: u64) -> [u8; LONG_SIZE] {
    [
        v as u8,
        (v >> 8) as u8,
        (v >> 16) as u8,
        (v >> 24) as u8,
        (v >> 32) as u8,
        (v >> 40) as u8,
        (v >> 48) as u8,
        (v >> 56) as u8,
    ]
}

// Signed integers and floats are bit reinterpretations of the unsigned codecs above.

/// Decodes a big-endian `i16`.
#[inline(always)]
pub fn read_i16_be(v: &[u8]) -> i16 {
    read_u16_be(v) as i16
}

/// Decodes a little-endian `i16`.
#[inline(always)]
pub fn read_i16_le(v: &[u8]) -> i16 {
    read_u16_le(v) as i16
}

/// Encodes a big-endian `i16`.
#[inline(always)]
pub fn write_i16_be(v: i16) -> [u8; SHORT_SIZE] {
    write_u16_be(v as u16)
}

/// Encodes a little-endian `i16`.
#[inline(always)]
pub fn write_i16_le(v: i16) -> [u8; SHORT_SIZE] {
    write_u16_le(v as u16)
}

/// Decodes a big-endian `i32`.
#[inline(always)]
pub fn read_i32_be(v: &[u8]) -> i32 {
    read_u32_be(v) as i32
}

/// Decodes a little-endian `i32`.
#[inline(always)]
pub fn read_i32_le(v: &[u8]) -> i32 {
    read_u32_le(v) as i32
}

/// Encodes a big-endian `i32`.
#[inline(always)]
pub fn write_i32_be(v: i32) -> [u8; INT_SIZE] {
    write_u32_be(v as u32)
}

/// Encodes a little-endian `i32`.
#[inline(always)]
pub fn write_i32_le(v: i32) -> [u8; INT_SIZE] {
    write_u32_le(v as u32)
}

/// Decodes a big-endian `i64`.
#[inline(always)]
pub fn read_i64_be(v: &[u8]) -> i64 {
    read_u64_be(v) as i64
}

/// Decodes a little-endian `i64`.
#[inline(always)]
pub fn read_i64_le(v: &[u8]) -> i64 {
    read_u64_le(v) as i64
}

/// Encodes a big-endian `i64`.
#[inline(always)]
pub fn write_i64_be(v: i64) -> [u8; LONG_SIZE] {
    write_u64_be(v as u64)
}

/// Encodes a little-endian `i64`.
#[inline(always)]
pub fn write_i64_le(v: i64) -> [u8; LONG_SIZE] {
    write_u64_le(v as u64)
}

/// Decodes a big-endian IEEE-754 `f32`.
#[inline(always)]
pub fn read_f32_be(v: &[u8]) -> f32 {
    f32::from_bits(read_u32_be(v))
}

/// Decodes a little-endian IEEE-754 `f32`.
#[inline(always)]
pub fn read_f32_le(v: &[u8]) -> f32 {
    f32::from_bits(read_u32_le(v))
}

/// Encodes a big-endian IEEE-754 `f32`.
#[inline(always)]
pub fn write_f32_be(v: f32) -> [u8; FLOAT_SIZE] {
    write_u32_be(v.to_bits())
}

/// Encodes a little-endian IEEE-754 `f32`.
#[inline(always)]
pub fn write_f32_le(v: f32) -> [u8; FLOAT_SIZE] {
    write_u32_le(v.to_bits())
}

/// Decodes a big-endian IEEE-754 `f64`.
#[inline(always)]
pub fn read_f64_be(v: &[u8]) -> f64 {
    f64::from_bits(read_u64_be(v))
}

/// Decodes a little-endian IEEE-754 `f64`.
#[inline(always)]
pub fn read_f64_le(v: &[u8]) -> f64 {
    f64::from_bits(read_u64_le(v))
}

/// Encodes a big-endian IEEE-754 `f64`.
#[inline(always)]
pub fn write_f64_be(v: f64) -> [u8; DOUBLE_SIZE] {
    write_u64_be(v.to_bits())
}

/// Encodes a little-endian IEEE-754 `f64`.
#[inline(always)]
pub fn write_f64_le(v: f64) -> [u8; DOUBLE_SIZE] {
    write_u64_le(v.to_bits())
}

macro_rules! checked_reads {
    ($($(#[$doc:meta])* $name:ident => $read:ident, $ty:ty, $size:expr;)*) => {
        $(
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(v: &[u8]) -> Result<$ty> {
                ensure_len(v, $size)?;
                Ok($read(v))
            }
        )*
    };
}

checked_reads! {
    /// Decodes a `u8`, or fails if `v` is empty.
    try_read_u8 => read_u8, u8, BYTE_SIZE;
    /// Decodes an `i8`, or fails if `v` is empty.
    try_read_i8 => read_i8, i8, BYTE_SIZE;
    /// Decodes a big-endian `u16`, or fails if `v` is too short.
    try_read_u16_be => read_u16_be, u16, SHORT_SIZE;
    /// Decodes a little-endian `u16`, or fails if `v` is too short.
    try_read_u16_le => read_u16_le, u16, SHORT_SIZE;
    /// Decodes a big-endian `i16`, or fails if `v` is too short.
    try_read_i16_be => read_i16_be, i16, SHORT_SIZE;
    /// Decodes a little-endian `i16`, or fails if `v` is too short.
    try_read_i16_le => read_i16_le, i16, SHORT_SIZE;
    /// Decodes a big-endian `u32`, or fails if `v` is too short.
    try_read_u32_be => read_u32_be, u32, INT_SIZE;
    /// Decodes a little-endian `u32`, or fails if `v` is too short.
    try_read_u32_le => read_u32_le, u32, INT_SIZE;
    /// Decodes a big-endian `i32`, or fails if `v` is too short.
    try_read_i32_be => read_i32_be, i32, INT_SIZE;
    /// Decodes a little-endian `i32`, or fails if `v` is too short.
    try_read_i32_le => read_i32_le, i32, INT_SIZE;
    /// Decodes a big-endian `u64`, or fails if `v` is too short.
    try_read_u64_be => read_u64_be, u64, LONG_SIZE;
    /// Decodes a little-endian `u64`, or fails if `v` is too short.
    try_read_u64_le => read_u64_le, u64, LONG_SIZE;
    /// Decodes a big-endian `i64`, or fails if `v` is too short.
    try_read_i64_be => read_i64_be, i64, LONG_SIZE;
    /// Decodes a little-endian `i64`, or fails if `v` is too short.
    try_read_i64_le => read_i64_le, i64, LONG_SIZE;
    /// Decodes a big-endian `f32`, or fails if `v` is too short.
    try_read_f32_be => read_f32_be, f32, FLOAT_SIZE;
    /// Decodes a little-endian `f32`, or fails if `v` is too short.
    try_read_f32_le => read_f32_le, f32, FLOAT_SIZE;
    /// Decodes a big-endian `f64`, or fails if `v` is too short.
    try_read_f64_be => read_f64_be, f64, DOUBLE_SIZE;
    /// Decodes a little-endian `f64`, or fails if `v` is too short.
    try_read_f64_le => read_f64_le, f64, DOUBLE_SIZE;
}
