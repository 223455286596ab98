#![no_std]
//! A streaming MessagePack codec: a packer and an unpacker that move a
//! typed item stream into and out of a caller-owned byte buffer.
//!
//! Both halves share the same discipline: a half-open buffer window that
//! only ever advances, a sticky status code that poisons the context on
//! the first fatal error, and an optional handler invoked when the
//! window runs out (overflow for the packer, underflow for the
//! unpacker). Neither half allocates, copies blob payloads, or does I/O;
//! callers that need more bytes or more room supply a handler that does.
//!
//! ```
//! use mpack_codec::{Packer, Unpacker, Item};
//!
//! let mut buf = [0u8; 16];
//! let mut packer = Packer::new(&mut buf).unwrap();
//! packer.pack_array_header(2).unwrap();
//! packer.pack_uint(1).unwrap();
//! packer.pack_str(b"hi").unwrap();
//! let written = packer.written().len();
//!
//! let mut unpacker = Unpacker::new(&buf[..written]).unwrap();
//! assert_eq!(unpacker.next().unwrap(), Item::Array(2));
//! assert_eq!(unpacker.next().unwrap(), Item::PositiveInt(1));
//! assert_eq!(unpacker.next().unwrap(), Item::Str(b"hi"));
//! ```

#[cfg(test)]
extern crate std;

#[cfg(feature = "log_handler")]
pub mod diag;
mod endian;
pub mod error;
pub mod item;
pub mod pack;
mod sticky;
pub mod unpack;

pub use error::Code;
pub use item::Item;
pub use pack::{HandleOverflow, NoOverflowHandler, PackBuffer, Packer};
pub use unpack::{HandleUnderflow, NoUnderflowHandler, UnpackBuffer, Unpacker};
