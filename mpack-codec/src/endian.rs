//! Big-endian load/store primitives plus the startup self-check mandated
//! by the wire format: every multi-byte MessagePack field is big-endian
//! regardless of host byte order.
//!
//! `to_be_bytes`/`from_be_bytes` are already byte-identical on every host,
//! so they are used directly for the real put/get paths below. The
//! self-check instead exercises the `cfg(target_endian)`-selected fast
//! path against the portable shift-based path, catching a misconfigured
//! build rather than a genuinely divergent code path.

const SELF_CHECK_PATTERN: [u8; 4] = *b"1234";
const SELF_CHECK_EXPECTED: u32 = 0x3132_3334;

#[inline]
fn get_u32_portable(bytes: &[u8; 4]) -> u32 {
    (bytes[0] as u32) << 24 | (bytes[1] as u32) << 16 | (bytes[2] as u32) << 8 | (bytes[3] as u32)
}

#[cfg(target_endian = "little")]
#[inline]
fn get_u32_fast(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

#[cfg(target_endian = "big")]
#[inline]
fn get_u32_fast(bytes: &[u8; 4]) -> u32 {
    u32::from_ne_bytes(*bytes)
}

/// Run once per context construction; `false` means the build's endian
/// assumptions are inconsistent and the context must not be used.
pub(crate) fn self_check() -> bool {
    get_u32_portable(&SELF_CHECK_PATTERN) == SELF_CHECK_EXPECTED
        && get_u32_fast(&SELF_CHECK_PATTERN) == SELF_CHECK_EXPECTED
}

#[inline]
pub(crate) fn put_u16(dst: &mut [u8], v: u16) {
    dst.copy_from_slice(&v.to_be_bytes());
}

#[inline]
pub(crate) fn put_u32(dst: &mut [u8], v: u32) {
    dst.copy_from_slice(&v.to_be_bytes());
}

#[inline]
pub(crate) fn put_u64(dst: &mut [u8], v: u64) {
    dst.copy_from_slice(&v.to_be_bytes());
}

#[inline]
pub(crate) fn get_u16(src: &[u8]) -> u16 {
    u16::from_be_bytes([src[0], src[1]])
}

#[inline]
pub(crate) fn get_u32(src: &[u8]) -> u32 {
    u32::from_be_bytes([src[0], src[1], src[2], src[3]])
}

#[inline]
pub(crate) fn get_u64(src: &[u8]) -> u64 {
    u64::from_be_bytes([
        src[0], src[1], src[2], src[3], src[4], src[5], src[6], src[7],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_check_passes_on_this_host() {
        assert!(self_check());
    }

    #[test]
    fn round_trips_every_width() {
        let mut buf = [0u8; 8];
        put_u16(&mut buf[..2], 0x1234);
        assert_eq!(get_u16(&buf[..2]), 0x1234);
        put_u32(&mut buf[..4], 0xdead_beef);
        assert_eq!(get_u32(&buf[..4]), 0xdead_beef);
        put_u64(&mut buf, 0x0123_4567_89ab_cdef);
        assert_eq!(get_u64(&buf), 0x0123_4567_89ab_cdef);
    }
}
