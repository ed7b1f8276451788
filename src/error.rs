/// Error type for decoding values from a byte slice, a [`Stream`](crate::Stream), or an external
/// source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A decode needed more bytes than were available.
    ///
    /// The data may still be well-formed if the rest of it can be read, so this is usually a
    /// signal to wait for more input and try again.
    #[error("not enough data (needed {needed} bytes, {available} available)")]
    NotEnoughData {
        /// Number of bytes the value requires.
        needed: usize,
        /// Number of bytes that were actually available.
        available: usize,
    },

    /// An external reader or writer failed. The error is passed through unmodified.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this is [`Error::NotEnoughData`].
    pub fn is_not_enough_data(&self) -> bool {
        matches!(self, Self::NotEnoughData { .. })
    }
}

/// Result alias used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Fails with [`Error::NotEnoughData`] unless `bytes` holds at least `needed` bytes.
#[inline(always)]
pub(crate) fn ensure_len(bytes: &[u8], needed: usize) -> Result<()> {
    if bytes.len() < needed {
        Err(Error::NotEnoughData {
            needed,
            available: bytes.len(),
        })
    } else {
        Ok(())
    }
}
