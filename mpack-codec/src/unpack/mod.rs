//! The unpacker: reads one prefix byte at a time, dispatches by tag
//! class, and fills a single current-item record.

mod dispatch;
mod handler;
mod skip;

pub use handler::{HandleUnderflow, NoUnderflowHandler};

use core as std; // workaround for `perfect_derive`, see error.rs in iptr-decoder lineage

use perfect_derive::perfect_derive;

use crate::endian;
use crate::error::Code;
use crate::sticky::Sticky;

/// The unpacker's buffer window: a borrowed slice plus a read cursor into it.
#[derive(Debug)]
pub struct UnpackBuffer<'buf> {
    buf: &'buf [u8],
    pos: usize,
}

impl<'buf> UnpackBuffer<'buf> {
    fn new(buf: &'buf [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes still readable before the window runs out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Replace the window with a different buffer entirely, rewound to
    /// the start. Typical use: a handler that refills from a stream.
    pub fn replace(&mut self, buf: &'buf [u8]) {
        self.buf = buf;
        self.pos = 0;
    }

    fn take(&mut self, n: usize) -> &'buf [u8] {
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        slice
    }
}

/// Deserializes a MessagePack byte stream one item at a time out of a
/// caller-owned buffer.
///
/// `H` is the underflow handler type; [`NoUnderflowHandler`] (the
/// default) reports clean end-of-stream at item boundaries and
/// `BufferUnderflow` everywhere else.
#[perfect_derive(Debug)]
pub struct Unpacker<'buf, H: HandleUnderflow = NoUnderflowHandler> {
    buffer: UnpackBuffer<'buf>,
    handler: H,
    sticky: Sticky,
    errno: i32,
}

impl<'buf> Unpacker<'buf, NoUnderflowHandler> {
    /// Construct an unpacker with no underflow handler.
    pub fn new(buf: &'buf [u8]) -> Result<Self, Code> {
        Self::with_handler(buf, NoUnderflowHandler)
    }
}

impl<'buf, H: HandleUnderflow> Unpacker<'buf, H> {
    /// Construct an unpacker backed by `handler` for underflow recovery.
    ///
    /// Fails with [`Code::WrongByteOrder`] if the endian self-check does
    /// not pass; no unpacker is constructed in that case.
    pub fn with_handler(buf: &'buf [u8], handler: H) -> Result<Self, Code> {
        if !endian::self_check() {
            return Err(Code::WrongByteOrder);
        }
        Ok(Self {
            buffer: UnpackBuffer::new(buf),
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

    /// Demand `k` more bytes than currently buffered, invoking the
    /// underflow handler if needed. `at_boundary` selects how a handler's
    /// `EndOfInput` is translated: cleanly at an item boundary, fatally
    /// (`BufferUnderflow`) mid-item.
    fn demand(&mut self, k: usize, at_boundary: bool) -> Result<(), Code> {
        if self.buffer.remaining() >= k {
            return Ok(());
        }
        match self.handler.on_underflow(&mut self.buffer, k) {
            Ok(()) => {
                if self.buffer.remaining() < k {
                    let code = Code::BufferUnderflow;
                    self.sticky.poison(code);
                    return Err(code);
                }
                Ok(())
            }
            Err(Code::EndOfInput) => {
                let code = if at_boundary {
                    Code::EndOfInput
                } else {
                    Code::BufferUnderflow
                };
                self.sticky.poison(code);
                Err(code)
            }
            Err(other) => {
                self.sticky.poison(other);
                Err(other)
            }
        }
    }

    fn read_len(&mut self, len_bytes: usize) -> usize {
        match len_bytes {
            1 => self.buffer.take(1)[0] as usize,
            2 => endian::get_u16(self.buffer.take(2)) as usize,
            4 => endian::get_u32(self.buffer.take(4)) as usize,
            _ => unreachable!("length field is always 1, 2, or 4 bytes"),
        }
    }

    /// Read the next item from the stream.
    pub fn next(&mut self) -> Result<crate::item::Item<'buf>, Code> {
        self.sticky.check()?;
        self.demand(1, true)?;
        let tag = self.buffer.take(1)[0];
        dispatch::dispatch(self, tag)
    }
}
