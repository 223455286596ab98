//! Sticky status codes returned and stored by the packer and unpacker.

use thiserror::Error;

/// Status returned by every packer/unpacker operation.
///
/// `Ok(())` stands in for the base format's `OK` status; every other
/// outcome is one of the variants below. Once an operation returns a
/// variant other than via a handler retry, the context is poisoned: see
/// [`crate::pack::Packer`] and [`crate::unpack::Unpacker`] for the sticky
/// semantics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Code {
    /// Clean end of stream, encountered at an item boundary.
    #[error("end of input")]
    EndOfInput,
    /// The buffer ran dry in the middle of an item; the stream is truncated.
    #[error("buffer underflow (truncated item)")]
    BufferUnderflow,
    /// The packer had no room left and no handler supplied more.
    #[error("buffer overflow")]
    BufferOverflow,
    /// A reserved or otherwise illegal prefix byte was encountered.
    #[error("malformed input")]
    MalformedInput,
    /// The context is already poisoned; this call was rejected untouched.
    #[error("operation rejected: context already poisoned")]
    Stopped,
    /// The big-endian load/store self-check failed at construction time.
    #[error("wrong byte order")]
    WrongByteOrder,
}
