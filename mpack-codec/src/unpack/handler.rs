//! The underflow handler contract and its default, handler-less behavior.

use crate::error::Code;
use crate::unpack::UnpackBuffer;

/// Invoked when an unpacker operation needs more bytes than the buffer has left.
///
/// A successful return must guarantee at least `requested` additional
/// bytes are available in `buffer`, typically by swapping in a fresh
/// window (see [`UnpackBuffer::replace`]). Returning [`Code::EndOfInput`]
/// signals clean stream termination and is only meaningful when the
/// unpacker is sitting at an item boundary; the unpacker itself decides
/// whether to honor that or translate it into [`Code::BufferUnderflow`].
pub trait HandleUnderflow {
    /// Called with the number of additional bytes the in-flight operation needs.
    fn on_underflow(&mut self, buffer: &mut UnpackBuffer<'_>, requested: usize) -> Result<(), Code>;
}

/// The default handler: exhaustion always reports `EndOfInput`, which the
/// unpacker translates to `BufferUnderflow` unless it is at an item boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUnderflowHandler;

impl HandleUnderflow for NoUnderflowHandler {
    fn on_underflow(&mut self, _buffer: &mut UnpackBuffer<'_>, _requested: usize) -> Result<(), Code> {
        Err(Code::EndOfInput)
    }
}
