//! The overflow handler contract and its default, handler-less behavior.

use crate::error::Code;
use crate::pack::PackBuffer;

/// Invoked when a packer operation needs more room than the buffer has left.
///
/// A successful return must guarantee at least `requested` further
/// writable bytes in `buffer`, typically by flushing the bytes already
/// written (see [`PackBuffer::written`] / [`PackBuffer::reset`]) or by
/// swapping in a different buffer entirely (see [`PackBuffer::replace`]).
/// The codec does not re-verify the guarantee beyond continuing to write.
pub trait HandleOverflow {
    /// Called with the number of additional bytes the in-flight operation needs.
    fn on_overflow(&mut self, buffer: &mut PackBuffer<'_>, requested: usize) -> Result<(), Code>;
}

/// The default handler: overflow is always fatal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOverflowHandler;

impl HandleOverflow for NoOverflowHandler {
    fn on_overflow(&mut self, _buffer: &mut PackBuffer<'_>, _requested: usize) -> Result<(), Code> {
        Err(Code::BufferOverflow)
    }
}
