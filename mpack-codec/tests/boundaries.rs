//! Boundary behavior around the handler contracts and the sticky poison model.

use mpack_codec::{Code, HandleOverflow, HandleUnderflow, NoOverflowHandler, PackBuffer, Packer, UnpackBuffer, Unpacker};

#[test]
fn lone_prefix_byte_is_underflow_not_end_of_input() {
    let data = [0xcdu8];
    let mut unpacker = Unpacker::new(&data).unwrap();
    assert_eq!(unpacker.next(), Err(Code::BufferUnderflow));
}

#[test]
fn empty_stream_is_clean_end_of_input() {
    let data: [u8; 0] = [];
    let mut unpacker = Unpacker::new(&data).unwrap();
    assert_eq!(unpacker.next(), Err(Code::EndOfInput));
}

#[test]
fn reserved_byte_is_malformed_then_stopped() {
    let data = [0xc1u8];
    let mut unpacker = Unpacker::new(&data).unwrap();
    assert_eq!(unpacker.next(), Err(Code::MalformedInput));
    assert_eq!(unpacker.next(), Err(Code::Stopped));
    assert_eq!(unpacker.return_code(), Some(Code::MalformedInput));
}

#[test]
fn overflow_with_no_handler_is_fatal_and_sticky() {
    let mut buf = [0u8; 1];
    let mut packer = Packer::new(&mut buf).unwrap();
    assert_eq!(packer.pack_nil(), Ok(()));
    assert_eq!(packer.pack_nil(), Err(Code::BufferOverflow));
    assert_eq!(packer.pack_bool(true), Err(Code::Stopped));
    assert_eq!(packer.return_code(), Some(Code::BufferOverflow));
}

/// A handler that tops up the buffer from a fixed backing store, simulating
/// a caller that flushes written bytes elsewhere and keeps packing.
struct RefillingOverflow<'a> {
    backing: &'a mut [u8],
}

impl HandleOverflow for RefillingOverflow<'_> {
    fn on_overflow(&mut self, buffer: &mut PackBuffer<'_>, requested: usize) -> Result<(), Code> {
        if self.backing.len() < requested {
            return Err(Code::BufferOverflow);
        }
        buffer.replace(&mut *self.backing);
        Ok(())
    }
}

#[test]
fn overflow_handler_can_supply_a_fresh_window() {
    let mut backing = [0u8; 16];
    let mut tiny = [0u8; 1];
    let handler = RefillingOverflow { backing: &mut backing };
    let mut packer = Packer::with_handler(&mut tiny, handler).unwrap();
    assert_eq!(packer.pack_array_header(3), Ok(()));
    assert_eq!(packer.pack_uint(1), Ok(()));
    assert_eq!(packer.pack_uint(2), Ok(()));
    assert_eq!(packer.pack_uint(3), Ok(()));
    assert_eq!(packer.written(), &[0x93, 0x01, 0x02, 0x03]);
}

/// An underflow handler that always claims clean end-of-input, whatever the
/// boundary: exercises the at-boundary vs mid-item translation in `demand`.
struct AlwaysEof;

impl HandleUnderflow for AlwaysEof {
    fn on_underflow(&mut self, _buffer: &mut UnpackBuffer<'_>, _requested: usize) -> Result<(), Code> {
        Err(Code::EndOfInput)
    }
}

#[test]
fn handler_eof_mid_item_becomes_underflow() {
    // 0xcd announces a uint16 but supplies no payload bytes at all.
    let data = [0xcdu8];
    let mut unpacker = Unpacker::with_handler(&data, AlwaysEof).unwrap();
    assert_eq!(unpacker.next(), Err(Code::BufferUnderflow));
}

#[test]
fn handler_eof_at_boundary_stays_end_of_input() {
    let data: [u8; 0] = [];
    let mut unpacker = Unpacker::with_handler(&data, AlwaysEof).unwrap();
    assert_eq!(unpacker.next(), Err(Code::EndOfInput));
}

#[test]
fn default_no_overflow_handler_is_zero_sized_and_fatal() {
    assert_eq!(core::mem::size_of::<NoOverflowHandler>(), 0);
}

/// A handler that flushes the window's contents elsewhere and rewinds the
/// same buffer, rather than swapping in a different one.
struct FlushingOverflow {
    flushed: Vec<u8>,
}

impl HandleOverflow for FlushingOverflow {
    fn on_overflow(&mut self, buffer: &mut PackBuffer<'_>, requested: usize) -> Result<(), Code> {
        if buffer.written().is_empty() || buffer.remaining() + buffer.written().len() < requested {
            return Err(Code::BufferOverflow);
        }
        self.flushed.extend_from_slice(buffer.written());
        buffer.reset();
        Ok(())
    }
}

#[test]
fn overflow_handler_can_flush_and_reuse_the_same_buffer() {
    let mut tiny = [0u8; 2];
    let mut packer = Packer::with_handler(&mut tiny, FlushingOverflow { flushed: Vec::new() }).unwrap();
    assert_eq!(packer.pack_uint(1), Ok(()));
    assert_eq!(packer.pack_uint(2), Ok(()));
    assert_eq!(packer.pack_uint(3), Ok(()));
    assert_eq!(packer.written(), &[0x03]);
}
