/// Every encode/decode/size operation in this crate reports one of two
/// failure kinds, mirroring the distinction the original C implementation
/// makes through its signed-integer return-value protocol (positive byte
/// count, a sentinel for "ran out of room at offset N", another sentinel
/// for "value out of range").
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation ran out of room before it was done: encoding would
    /// have written past the end of `dst`, or decoding needed more bytes
    /// than `src` had left. `at` is the number of bytes already produced
    /// (encode) or consumed (decode) before the shortfall.
    #[error("buffer too short, ran out of room at offset {at}")]
    BufferTooShort {
        /// Offset within the caller's buffer at which more room was needed.
        at: usize,
    },
    /// The value being encoded or decoded does not fit the format: a field
    /// exceeds its declared bit width, a timezone label is longer than 40
    /// bytes, or a decoded variable-length year would overflow 32 bits.
    #[error("value out of range for this format")]
    OutOfRange,
}

pub type Result<T> = core::result::Result<T, Error>;
