//! The packer: accepts one typed item at a time and emits the shortest
//! legal MessagePack encoding for it into a caller-owned buffer.

mod encode;
mod handler;

pub use handler::{HandleOverflow, NoOverflowHandler};

use core as std; // workaround for `perfect_derive`, see error.rs in iptr-decoder lineage

use perfect_derive::perfect_derive;

use crate::endian;
use crate::error::Code;
use crate::sticky::Sticky;

/// The packer's buffer window: `start..end` conceptually, represented
/// here as a borrowed mutable slice plus a cursor into it.
#[derive(Debug)]
pub struct PackBuffer<'buf> {
    buf: &'buf mut [u8],
    current: usize,
}

impl<'buf> PackBuffer<'buf> {
    fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, current: 0 }
    }

    /// Bytes still writable before the window runs out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.current
    }

    /// The bytes written into this window so far.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.current]
    }

    /// Discard the window's contents and rewind to the start, reusing the
    /// same underlying buffer. Typical use: a handler that flushes
    /// `written()` elsewhere before calling this.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Replace the window with a different buffer entirely, rewound to
    /// the start. Typical use: a handler backed by a buffer pool.
    pub fn replace(&mut self, buf: &'buf mut [u8]) {
        self.buf = buf;
        self.current = 0;
    }

    fn put(&mut self, bytes: &[u8]) {
        let end = self.current + bytes.len();
        self.buf[self.current..end].copy_from_slice(bytes);
        self.current = end;
    }
}

/// Serializes typed items into a caller-owned buffer, emitting the
/// shortest legal MessagePack encoding for each.
///
/// `H` is the overflow handler type; [`NoOverflowHandler`] (the default)
/// makes overflow unconditionally fatal.
#[perfect_derive(Debug)]
pub struct Packer<'buf, H: HandleOverflow = NoOverflowHandler> {
    buffer: PackBuffer<'buf>,
    handler: H,
    sticky: Sticky,
    errno: i32,
}

impl<'buf> Packer<'buf, NoOverflowHandler> {
    /// Construct a packer with no overflow handler: running out of room
    /// is immediately fatal.
    pub fn new(buf: &'buf mut [u8]) -> Result<Self, Code> {
        Self::with_handler(buf, NoOverflowHandler)
    }
}

impl<'buf, H: HandleOverflow> Packer<'buf, H> {
    /// Construct a packer backed by `handler` for overflow recovery.
    ///
    /// Fails with [`Code::WrongByteOrder`] if the endian self-check does
    /// not pass; no packer is constructed in that case.
    pub fn with_handler(buf: &'buf mut [u8], handler: H) -> Result<Self, Code> {
        if !endian::self_check() {
            return Err(Code::WrongByteOrder);
        }
        Ok(Self {
            buffer: PackBuffer::new(buf),
            handler,
            sticky: Sticky::default(),
            errno: 0,
        })
    }

    /// The sticky status last recorded against this context, if poisoned.
    #[must_use]
    pub fn return_code(&self) -> Option<Code> {
        self.sticky.code()
    }

    /// A caller-settable slot, never touched by the codec itself after construction.
    #[must_use]
    pub fn errno(&self) -> i32 {
        self.errno
    }

    /// Set the caller-settable errno slot.
    pub fn set_errno(&mut self, errno: i32) {
        self.errno = errno;
    }

    /// Bytes written into the current window so far.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        self.buffer.written()
    }

    fn reserve(&mut self, k: usize) -> Result<(), Code> {
        self.sticky.check()?;

        #[cfg(feature = "log_handler")]
        log::trace!("pack reserve: {k} bytes, {} remaining", self.buffer.remaining());

        if self.buffer.remaining() < k {
            if let Err(code) = self.handler.on_overflow(&mut self.buffer, k) {
                self.sticky.poison(code);
                return Err(code);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_context_rejects_further_writes() {
        let mut buf = [0u8; 1];
        let mut packer = Packer::new(&mut buf).unwrap();
        assert_eq!(packer.pack_nil(), Ok(()));
        assert_eq!(packer.pack_nil(), Err(Code::BufferOverflow));
        assert_eq!(packer.pack_bool(true), Err(Code::Stopped));
        assert_eq!(packer.return_code(), Some(Code::BufferOverflow));
    }
}
