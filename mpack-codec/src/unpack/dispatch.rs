//! Prefix-byte tag dispatch: each branch demands its exact remaining byte
//! count, loads fields big-endian, and produces exactly one [`Item`].

use crate::endian;
use crate::error::Code;
use crate::item::{classify_signed, Item};

use super::{HandleUnderflow, Unpacker};

pub(super) fn dispatch<'buf, H: HandleUnderflow>(
    up: &mut Unpacker<'buf, H>,
    tag: u8,
) -> Result<Item<'buf>, Code> {
    #[cfg(feature = "log_handler")]
    log::trace!("unpack dispatch: tag=0x{tag:02x}");

    match tag {
        0x00..=0x7f => Ok(Item::PositiveInt(tag as u64)),
        0x80..=0x8f => Ok(Item::Map((tag & 0x0f) as u32)),
        0x90..=0x9f => Ok(Item::Array((tag & 0x0f) as u32)),
        0xa0..=0xbf => {
            let len = (tag & 0x1f) as usize;
            up.demand(len, false)?;
            Ok(Item::Str(up.buffer.take(len)))
        }
        0xc0 => Ok(Item::Nil),
        0xc1 => {
            up.sticky.poison(Code::MalformedInput);
            Err(Code::MalformedInput)
        }
        0xc2 => Ok(Item::Bool(false)),
        0xc3 => Ok(Item::Bool(true)),
        0xc4 => read_bin(up, 1),
        0xc5 => read_bin(up, 2),
        0xc6 => read_bin(up, 4),
        0xc7 => read_ext(up, 1),
        0xc8 => read_ext(up, 2),
        0xc9 => read_ext(up, 4),
        0xca => {
            up.demand(4, false)?;
            let bits = endian::get_u32(up.buffer.take(4));
            Ok(Item::Float(f32::from_bits(bits)))
        }
        0xcb => {
            up.demand(8, false)?;
            let bits = endian::get_u64(up.buffer.take(8));
            Ok(Item::Double(f64::from_bits(bits)))
        }
        0xcc => {
            up.demand(1, false)?;
            Ok(Item::PositiveInt(u64::from(up.buffer.take(1)[0])))
        }
        0xcd => {
            up.demand(2, false)?;
            Ok(Item::PositiveInt(u64::from(endian::get_u16(up.buffer.take(2)))))
        }
        0xce => {
            up.demand(4, false)?;
            Ok(Item::PositiveInt(u64::from(endian::get_u32(up.buffer.take(4)))))
        }
        0xcf => {
            up.demand(8, false)?;
            Ok(Item::PositiveInt(endian::get_u64(up.buffer.take(8))))
        }
        0xd0 => {
            up.demand(1, false)?;
            Ok(classify_signed(up.buffer.take(1)[0] as i8 as i64))
        }
        0xd1 => {
            up.demand(2, false)?;
            Ok(classify_signed(endian::get_u16(up.buffer.take(2)) as i16 as i64))
        }
        0xd2 => {
            up.demand(4, false)?;
            Ok(classify_signed(endian::get_u32(up.buffer.take(4)) as i32 as i64))
        }
        0xd3 => {
            up.demand(8, false)?;
            Ok(classify_signed(endian::get_u64(up.buffer.take(8)) as i64))
        }
        0xd4 => read_fixext(up, 1),
        0xd5 => read_fixext(up, 2),
        0xd6 => read_fixext(up, 4),
        0xd7 => read_fixext(up, 8),
        0xd8 => read_fixext(up, 16),
        0xd9 => read_str(up, 1),
        0xda => read_str(up, 2),
        0xdb => read_str(up, 4),
        0xdc => {
            up.demand(2, false)?;
            Ok(Item::Array(u32::from(endian::get_u16(up.buffer.take(2)))))
        }
        0xdd => {
            up.demand(4, false)?;
            Ok(Item::Array(endian::get_u32(up.buffer.take(4))))
        }
        0xde => {
            up.demand(2, false)?;
            Ok(Item::Map(u32::from(endian::get_u16(up.buffer.take(2)))))
        }
        0xdf => {
            up.demand(4, false)?;
            Ok(Item::Map(endian::get_u32(up.buffer.take(4))))
        }
        0xe0..=0xff => Ok(Item::NegativeInt(tag as i8 as i64)),
    }
}

fn read_bin<'buf, H: HandleUnderflow>(
    up: &mut Unpacker<'buf, H>,
    len_bytes: usize,
) -> Result<Item<'buf>, Code> {
    up.demand(len_bytes, false)?;
    let len = up.read_len(len_bytes);
    up.demand(len, false)?;
    Ok(Item::Bin(up.buffer.take(len)))
}

fn read_str<'buf, H: HandleUnderflow>(
    up: &mut Unpacker<'buf, H>,
    len_bytes: usize,
) -> Result<Item<'buf>, Code> {
    up.demand(len_bytes, false)?;
    let len = up.read_len(len_bytes);
    up.demand(len, false)?;
    Ok(Item::Str(up.buffer.take(len)))
}

fn read_ext<'buf, H: HandleUnderflow>(
    up: &mut Unpacker<'buf, H>,
    len_bytes: usize,
) -> Result<Item<'buf>, Code> {
    up.demand(len_bytes + 1, false)?;
    let len = up.read_len(len_bytes);
    let user_type = up.buffer.take(1)[0] as i8;
    up.demand(len, false)?;
    Ok(Item::Ext {
        user_type,
        bytes: up.buffer.take(len),
    })
}

fn read_fixext<'buf, H: HandleUnderflow>(
    up: &mut Unpacker<'buf, H>,
    len: usize,
) -> Result<Item<'buf>, Code> {
    up.demand(1 + len, false)?;
    let user_type = up.buffer.take(1)[0] as i8;
    Ok(Item::Ext {
        user_type,
        bytes: up.buffer.take(len),
    })
}
