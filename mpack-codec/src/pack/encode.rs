//! The shortest-form encoding ladders, one operation per MessagePack item family.

use crate::endian;
use crate::error::Code;

use super::{HandleOverflow, Packer};

impl<'buf, H: HandleOverflow> Packer<'buf, H> {
    /// Pack an unsigned integer using the shortest tag that fits.
    pub fn pack_uint(&mut self, v: u64) -> Result<(), Code> {
        if v < 0x80 {
            self.reserve(1)?;
            self.buffer.put(&[v as u8]);
        } else if v < 0x100 {
            self.reserve(2)?;
            self.buffer.put(&[0xcc, v as u8]);
        } else if v < 0x1_0000 {
            self.reserve(3)?;
            let mut b = [0xcd, 0, 0];
            endian::put_u16(&mut b[1..], v as u16);
            self.buffer.put(&b);
        } else if v < 0x1_0000_0000 {
            self.reserve(5)?;
            let mut b = [0xce, 0, 0, 0, 0];
            endian::put_u32(&mut b[1..], v as u32);
            self.buffer.put(&b);
        } else {
            self.reserve(9)?;
            let mut b = [0xcf, 0, 0, 0, 0, 0, 0, 0, 0];
            endian::put_u64(&mut b[1..], v);
            self.buffer.put(&b);
        }
        Ok(())
    }

    /// Pack a signed integer using the shortest tag that fits; non-negative
    /// values delegate to [`Packer::pack_uint`].
    pub fn pack_int(&mut self, v: i64) -> Result<(), Code> {
        if v >= 0 {
            return self.pack_uint(v as u64);
        }
        if v >= -32 {
            self.reserve(1)?;
            self.buffer.put(&[v as i8 as u8]);
        } else if v >= -128 {
            self.reserve(2)?;
            self.buffer.put(&[0xd0, v as i8 as u8]);
        } else if v >= -32_768 {
            self.reserve(3)?;
            let mut b = [0xd1, 0, 0];
            endian::put_u16(&mut b[1..], v as i16 as u16);
            self.buffer.put(&b);
        } else if v >= -2_147_483_648 {
            self.reserve(5)?;
            let mut b = [0xd2, 0, 0, 0, 0];
            endian::put_u32(&mut b[1..], v as i32 as u32);
            self.buffer.put(&b);
        } else {
            self.reserve(9)?;
            let mut b = [0xd3, 0, 0, 0, 0, 0, 0, 0, 0];
            endian::put_u64(&mut b[1..], v as u64);
            self.buffer.put(&b);
        }
        Ok(())
    }

    /// Pack an IEEE-754 single-precision float.
    pub fn pack_f32(&mut self, v: f32) -> Result<(), Code> {
        self.reserve(5)?;
        let mut b = [0xca, 0, 0, 0, 0];
        endian::put_u32(&mut b[1..], v.to_bits());
        self.buffer.put(&b);
        Ok(())
    }

    /// Pack an IEEE-754 double-precision float.
    pub fn pack_f64(&mut self, v: f64) -> Result<(), Code> {
        self.reserve(9)?;
        let mut b = [0xcb, 0, 0, 0, 0, 0, 0, 0, 0];
        endian::put_u64(&mut b[1..], v.to_bits());
        self.buffer.put(&b);
        Ok(())
    }

    /// Pack `nil`.
    pub fn pack_nil(&mut self) -> Result<(), Code> {
        self.reserve(1)?;
        self.buffer.put(&[0xc0]);
        Ok(())
    }

    /// Pack a boolean.
    pub fn pack_bool(&mut self, v: bool) -> Result<(), Code> {
        self.reserve(1)?;
        self.buffer.put(&[if v { 0xc3 } else { 0xc2 }]);
        Ok(())
    }

    /// Pack an array header announcing `n` following items. The items
    /// themselves are not written here; the caller emits exactly `n` of
    /// them afterwards.
    pub fn pack_array_header(&mut self, n: u32) -> Result<(), Code> {
        if n < 16 {
            self.reserve(1)?;
            self.buffer.put(&[0x90 | n as u8]);
        } else if n < 0x1_0000 {
            self.reserve(3)?;
            let mut b = [0xdc, 0, 0];
            endian::put_u16(&mut b[1..], n as u16);
            self.buffer.put(&b);
        } else {
            self.reserve(5)?;
            let mut b = [0xdd, 0, 0, 0, 0];
            endian::put_u32(&mut b[1..], n);
            self.buffer.put(&b);
        }
        Ok(())
    }

    /// Pack a map header announcing `n` following key/value pairs. The
    /// pairs themselves are not written here.
    pub fn pack_map_header(&mut self, n: u32) -> Result<(), Code> {
        if n < 16 {
            self.reserve(1)?;
            self.buffer.put(&[0x80 | n as u8]);
        } else if n < 0x1_0000 {
            self.reserve(3)?;
            let mut b = [0xde, 0, 0];
            endian::put_u16(&mut b[1..], n as u16);
            self.buffer.put(&b);
        } else {
            self.reserve(5)?;
            let mut b = [0xdf, 0, 0, 0, 0];
            endian::put_u32(&mut b[1..], n);
            self.buffer.put(&b);
        }
        Ok(())
    }

    /// Pack a UTF-8 string blob.
    pub fn pack_str(&mut self, bytes: &[u8]) -> Result<(), Code> {
        let len = bytes.len();
        if len < 32 {
            self.reserve(1 + len)?;
            self.buffer.put(&[0xa0 | len as u8]);
        } else if len < 0x100 {
            self.reserve(2 + len)?;
            self.buffer.put(&[0xd9, len as u8]);
        } else if len < 0x1_0000 {
            self.reserve(3 + len)?;
            let mut b = [0xda, 0, 0];
            endian::put_u16(&mut b[1..], len as u16);
            self.buffer.put(&b);
        } else {
            self.reserve(5 + len)?;
            let mut b = [0xdb, 0, 0, 0, 0];
            endian::put_u32(&mut b[1..], len as u32);
            self.buffer.put(&b);
        }
        self.buffer.put(bytes);
        Ok(())
    }

    /// Pack a raw binary blob.
    pub fn pack_bin(&mut self, bytes: &[u8]) -> Result<(), Code> {
        let len = bytes.len();
        if len < 0x100 {
            self.reserve(2 + len)?;
            self.buffer.put(&[0xc4, len as u8]);
        } else if len < 0x1_0000 {
            self.reserve(3 + len)?;
            let mut b = [0xc5, 0, 0];
            endian::put_u16(&mut b[1..], len as u16);
            self.buffer.put(&b);
        } else {
            self.reserve(5 + len)?;
            let mut b = [0xc6, 0, 0, 0, 0];
            endian::put_u32(&mut b[1..], len as u32);
            self.buffer.put(&b);
        }
        self.buffer.put(bytes);
        Ok(())
    }

    /// Pack a user-tagged extension blob. `len` must be exactly
    /// `bytes.len()` on the wire; fixed-length tags (1/2/4/8/16 bytes) are
    /// preferred over the general `ext8/16/32` tags when they fit.
    pub fn pack_ext(&mut self, user_type: i8, bytes: &[u8]) -> Result<(), Code> {
        let len = bytes.len();
        let ut = user_type as u8;
        match len {
            1 => {
                self.reserve(3)?;
                self.buffer.put(&[0xd4, ut]);
            }
            2 => {
                self.reserve(4)?;
                self.buffer.put(&[0xd5, ut]);
            }
            4 => {
                self.reserve(6)?;
                self.buffer.put(&[0xd6, ut]);
            }
            8 => {
                self.reserve(10)?;
                self.buffer.put(&[0xd7, ut]);
            }
            16 => {
                self.reserve(18)?;
                self.buffer.put(&[0xd8, ut]);
            }
            _ if len < 0x100 => {
                self.reserve(3 + len)?;
                self.buffer.put(&[0xc7, len as u8, ut]);
            }
            _ if len < 0x1_0000 => {
                self.reserve(4 + len)?;
                let mut b = [0xc8, 0, 0, ut];
                endian::put_u16(&mut b[1..3], len as u16);
                self.buffer.put(&b);
            }
            _ => {
                self.reserve(6 + len)?;
                let mut b = [0xc9, 0, 0, 0, 0, ut];
                endian::put_u32(&mut b[1..5], len as u32);
                self.buffer.put(&b);
            }
        }
        self.buffer.put(bytes);
        Ok(())
    }
}
