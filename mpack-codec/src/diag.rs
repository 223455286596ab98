//! Logging wrappers around the overflow/underflow handler traits.
//!
//! Useful while debugging a custom handler: wrap it in
//! [`LoggingOverflowHandler`] / [`LoggingUnderflowHandler`] and every
//! invocation is traced through the `log` facade before delegating to
//! the inner handler.

use crate::error::Code;
use crate::pack::{HandleOverflow, PackBuffer};
use crate::unpack::{HandleUnderflow, UnpackBuffer};

/// Wraps an overflow handler, logging each invocation at `trace` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingOverflowHandler<H> {
    inner: H,
}

impl<H> LoggingOverflowHandler<H> {
    /// Wrap `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Consume the wrapper and get the original handler back.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: HandleOverflow> HandleOverflow for LoggingOverflowHandler<H> {
    fn on_overflow(&mut self, buffer: &mut PackBuffer<'_>, requested: usize) -> Result<(), Code> {
        log::trace!("pack overflow: requested {requested} bytes, {} already written", buffer.written().len());
        let result = self.inner.on_overflow(buffer, requested);
        if let Err(code) = result {
            log::debug!("pack overflow handler failed: {code}");
        }
        result
    }
}

/// Wraps an underflow handler, logging each invocation at `trace` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingUnderflowHandler<H> {
    inner: H,
}

impl<H> LoggingUnderflowHandler<H> {
    /// Wrap `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Consume the wrapper and get the original handler back.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: HandleUnderflow> HandleUnderflow for LoggingUnderflowHandler<H> {
    fn on_underflow(&mut self, buffer: &mut UnpackBuffer<'_>, requested: usize) -> Result<(), Code> {
        log::trace!("unpack underflow: requested {requested} bytes, {} remaining", buffer.remaining());
        let result = self.inner.on_underflow(buffer, requested);
        if let Err(code) = result {
            log::debug!("unpack underflow handler reported: {code}");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::Packer;
    use crate::unpack::Unpacker;

    /// Succeeds exactly once by swapping in a bigger backing buffer, then
    /// refuses further overflows.
    struct RefillOnce<'a> {
        backing: &'a mut [u8],
        used: bool,
    }

    impl HandleOverflow for RefillOnce<'_> {
        fn on_overflow(&mut self, buffer: &mut PackBuffer<'_>, requested: usize) -> Result<(), Code> {
            if self.used || self.backing.len() < requested {
                return Err(Code::BufferOverflow);
            }
            self.used = true;
            buffer.replace(&mut *self.backing);
            Ok(())
        }
    }

    #[test]
    fn overflow_wrapper_passes_through_inner_success() {
        let mut backing = [0u8; 8];
        let mut tiny = [0u8; 1];
        let inner = RefillOnce {
            backing: &mut backing,
            used: false,
        };
        let mut packer = Packer::with_handler(&mut tiny, LoggingOverflowHandler::new(inner)).unwrap();
        assert_eq!(packer.pack_uint(1000), Ok(()));
    }

    struct AlwaysFailOverflow;

    impl HandleOverflow for AlwaysFailOverflow {
        fn on_overflow(&mut self, _buffer: &mut PackBuffer<'_>, _requested: usize) -> Result<(), Code> {
            Err(Code::BufferOverflow)
        }
    }

    #[test]
    fn overflow_wrapper_passes_through_inner_failure() {
        let mut tiny = [0u8; 1];
        let mut packer =
            Packer::with_handler(&mut tiny, LoggingOverflowHandler::new(AlwaysFailOverflow)).unwrap();
        assert_eq!(packer.pack_uint(1000), Err(Code::BufferOverflow));
        assert_eq!(packer.return_code(), Some(Code::BufferOverflow));
    }

    struct AlwaysEofUnderflow;

    impl HandleUnderflow for AlwaysEofUnderflow {
        fn on_underflow(&mut self, _buffer: &mut UnpackBuffer<'_>, _requested: usize) -> Result<(), Code> {
            Err(Code::EndOfInput)
        }
    }

    #[test]
    fn underflow_wrapper_passes_through_inner_result() {
        // A lone 0xcd mid-item, so the translated result is BufferUnderflow
        // rather than the inner handler's raw EndOfInput.
        let data = [0xcdu8];
        let mut unpacker =
            Unpacker::with_handler(&data, LoggingUnderflowHandler::new(AlwaysEofUnderflow)).unwrap();
        assert_eq!(unpacker.next(), Err(Code::BufferUnderflow));
    }
}
