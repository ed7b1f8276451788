use alloc::vec::Vec;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::error::{Error, Result};
use crate::order::{Big, Little, Order};
use crate::value::Primitive;

/// A growable byte buffer with a read cursor.
///
/// Writes always append to the end of the buffer. Reads consume bytes starting at the cursor.
/// The cursor never moves past the end of the buffer, and it only moves backward when the
/// stream is [`reset`](Self::reset) or given new contents with [`set_bytes`](Self::set_bytes).
///
/// Raw slicing ([`read_bytes`](Self::read_bytes), [`skip`](Self::skip)) never fails: asking for
/// more bytes than remain returns whatever is left. Typed accessors such as
/// [`read_i32`](Self::read_i32) check the length of what they got and fail with
/// [`Error::NotEnoughData`] if it is short.
///
/// A failed typed read does not roll back the cursor. The short tail it consumed stays consumed,
/// so the stream is left empty. Callers that want to retry once more data arrives should record
/// [`offset`](Self::offset) or [`remaining_bytes`](Self::remaining_bytes) before decoding, and
/// rebuild the stream from there.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct Stream {
    buf: Vec<u8>,
    off: usize,
}

impl Stream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stream whose buffer can hold `capacity` bytes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            off: 0,
        }
    }

    /// Creates a stream that reads from `bytes`, starting at the first byte.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: bytes.into(),
            off: 0,
        }
    }

    /// Discards all contents and moves the cursor back to the start.
    pub fn reset(&mut self) {
        tracing::trace!(len = self.buf.len(), off = self.off, "stream reset");
        self.buf.clear();
        self.off = 0;
    }

    /// Replaces the contents with `bytes` and moves the cursor back to the start.
    pub fn set_bytes(&mut self, bytes: impl Into<Vec<u8>>) {
        self.reset();
        self.buf = bytes.into();
    }

    /// Extracts the whole buffer, including bytes that have already been read.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// The current cursor position, counted from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.off
    }

    /// The number of bytes that have not been read yet.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.off
    }

    /// Returns `true` if there are no unread bytes.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The bytes that have not been read yet.
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.buf[self.off..]
    }

    /// The whole buffer, including bytes that have already been read.
    pub fn all_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The unread bytes as a byte string, mostly useful for `Debug` output.
    #[cfg(feature = "bstr")]
    pub fn as_bstr(&self) -> &bstr::BStr {
        bstr::BStr::new(self.remaining_bytes())
    }

    /// Reads up to `n` bytes and advances the cursor past them.
    ///
    /// If fewer than `n` bytes remain, this returns all of them and leaves the stream empty.
    /// It never fails; callers that need exactly `n` bytes must check the length.
    pub fn read_bytes(&mut self, n: usize) -> &[u8] {
        let start = self.off;
        let n = n.min(self.remaining());
        self.off += n;
        &self.buf[start..self.off]
    }

    /// Advances the cursor by `n` bytes, or to the end if fewer remain.
    pub fn skip(&mut self, n: usize) {
        self.off += n.min(self.remaining());
    }

    /// Appends `bytes` to the end of the buffer.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends `n` zero bytes.
    pub fn pad(&mut self, n: usize) {
        self.buf.resize(self.buf.len() + n, 0);
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.take_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads `count` values of `T` without copying them.
    ///
    /// `T` is usually one of the `zerocopy::byteorder` types, e.g. `U32<<Big as Order>::Wire>`.
    /// Their byte order is fixed by the type, so the returned values decode correctly no
    /// matter which order the rest of the stream uses.
    pub fn read_slice<T>(&mut self, count: usize) -> Result<&[T]>
    where
        T: FromBytes + KnownLayout + Immutable + Unaligned,
    {
        let len = count.saturating_mul(core::mem::size_of::<T>());
        let bytes = self.take_exact(len)?;
        // Unaligned types have no alignment requirement and `len` is a whole number of `T`.
        <[T]>::ref_from_bytes(bytes).map_err(|_| Error::NotEnoughData {
            needed: len,
            available: bytes.len(),
        })
    }

    /// Appends the in-memory bytes of `values`.
    pub fn write_slice<T: IntoBytes + Immutable>(&mut self, values: &[T]) {
        self.write_bytes(values.as_bytes());
    }

    /// Reads one `T` using byte order `O`.
    pub fn read_value<T: Primitive, O: Order>(&mut self) -> Result<T> {
        let bytes = self.take_exact(T::SIZE)?;
        Ok(T::decode::<O>(bytes))
    }

    /// Appends one `T` using byte order `O`.
    pub fn write_value<T: Primitive, O: Order>(&mut self, value: T) {
        value.encode_into::<O>(&mut self.buf);
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_value::<u8, Big>()
    }

    /// Reads an `i8`.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_value::<i8, Big>()
    }

    /// Reads a byte as a `bool`. Any nonzero value is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_value::<u16, Big>()
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_value::<i16, Big>()
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.read_value::<u16, Little>()
    }

    /// Reads a little-endian `i16`.
    pub fn read_i16_le(&mut self) -> Result<i16> {
        self.read_value::<i16, Little>()
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_value::<u32, Big>()
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_value::<i32, Big>()
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_value::<u32, Little>()
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.read_value::<i32, Little>()
    }

    /// Reads a big-endian `u64`.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_value::<u64, Big>()
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_value::<i64, Big>()
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.read_value::<u64, Little>()
    }

    /// Reads a little-endian `i64`.
    pub fn read_i64_le(&mut self) -> Result<i64> {
        self.read_value::<i64, Little>()
    }

    /// Reads a big-endian `f32`.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_value::<f32, Big>()
    }

    /// Reads a little-endian `f32`.
    pub fn read_f32_le(&mut self) -> Result<f32> {
        self.read_value::<f32, Little>()
    }

    /// Reads a big-endian `f64`.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_value::<f64, Big>()
    }

    /// Reads a little-endian `f64`.
    pub fn read_f64_le(&mut self) -> Result<f64> {
        self.read_value::<f64, Little>()
    }

    /// Writes a `u8`.
    pub fn write_u8(&mut self, value: u8) {
        self.write_value::<u8, Big>(value)
    }

    /// Writes an `i8`.
    pub fn write_i8(&mut self, value: i8) {
        self.write_value::<i8, Big>(value)
    }

    /// Writes a `bool`. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8)
    }

    /// Writes a big-endian `u16`.
    pub fn write_u16(&mut self, value: u16) {
        self.write_value::<u16, Big>(value)
    }

    /// Writes a big-endian `i16`.
    pub fn write_i16(&mut self, value: i16) {
        self.write_value::<i16, Big>(value)
    }

    /// Writes a little-endian `u16`.
    pub fn write_u16_le(&mut self, value: u16) {
        self.write_value::<u16, Little>(value)
    }

    /// Writes a little-endian `i16`.
    pub fn write_i16_le(&mut self, value: i16) {
        self.write_value::<i16, Little>(value)
    }

    /// Writes a big-endian `u32`.
    pub fn write_u32(&mut self, value: u32) {
        self.write_value::<u32, Big>(value)
    }

    /// Writes a big-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.write_value::<i32, Big>(value)
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32_le(&mut self, value: u32) {
        self.write_value::<u32, Little>(value)
    }

    /// Writes a little-endian `i32`.
    pub fn write_i32_le(&mut self, value: i32) {
        self.write_value::<i32, Little>(value)
    }

    /// Writes a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) {
        self.write_value::<u64, Big>(value)
    }

    /// Writes a big-endian `i64`.
    pub fn write_i64(&mut self, value: i64) {
        self.write_value::<i64, Big>(value)
    }

    /// Writes a little-endian `u64`.
    pub fn write_u64_le(&mut self, value: u64) {
        self.write_value::<u64, Little>(value)
    }

    /// Writes a little-endian `i64`.
    pub fn write_i64_le(&mut self, value: i64) {
        self.write_value::<i64, Little>(value)
    }

    /// Writes a big-endian `f32`.
    pub fn write_f32(&mut self, value: f32) {
        self.write_value::<f32, Big>(value)
    }

    /// Writes a little-endian `f32`.
    pub fn write_f32_le(&mut self, value: f32) {
        self.write_value::<f32, Little>(value)
    }

    /// Writes a big-endian `f64`.
    pub fn write_f64(&mut self, value: f64) {
        self.write_value::<f64, Big>(value)
    }

    /// Writes a little-endian `f64`.
    pub fn write_f64_le(&mut self, value: f64) {
        self.write_value::<f64, Little>(value)
    }

    /// Takes up to `n` bytes with [`read_bytes`](Self::read_bytes), then fails if fewer than
    /// `n` came back. The cursor is not restored on failure.
    fn take_exact(&mut self, n: usize) -> Result<&[u8]> {
        let bytes = self.read_bytes(n);
        if bytes.len() < n {
            tracing::trace!(needed = n, available = bytes.len(), "stream underrun");
            return Err(Error::NotEnoughData {
                needed: n,
                available: bytes.len(),
            });
        }
        Ok(bytes)
    }
}

impl core::fmt::Debug for Stream {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("Stream");
        s.field("len", &self.buf.len()).field("off", &self.off);
        #[cfg(feature = "bstr")]
        s.field("remaining", &self.as_bstr());
        #[cfg(not(feature = "bstr"))]
        s.field("remaining", &self.remaining_bytes());
        s.finish()
    }
}

impl From<Vec<u8>> for Stream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Stream {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(feature = "std")]
impl std::io::Read for Stream {
    /// Copies as many unread bytes as fit in `buf`. Returns `Ok(0)` once the stream is empty.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let bytes = self.read_bytes(buf.len());
        let n = bytes.len();
        buf[..n].copy_from_slice(bytes);
        Ok(n)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Stream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
