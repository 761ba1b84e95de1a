//! 22-character encoding of the 128-bit value

use crate::Error;

/// Symbols of the compact encoding, in the order of their 6-bit values.
const ALPHABET: &[u8; 64] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_-";

/// Reverse lookup of [`ALPHABET`] for ASCII characters; `0xff` marks a character outside it.
const DECODE_MAP: [u8; 128] = {
    let mut map = [0xff; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Number of characters in the compact encoding.
pub(crate) const ENCODED_LEN: usize = 22;

/// Returns the 6-bit value of a compact-encoding character.
const fn lookup(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DECODE_MAP[ch as usize] {
        0xff => None,
        value => Some(value),
    }
}

/// Encodes 16 bytes into 22 ASCII characters.
///
/// The bit stream starts at bit 0 of byte 0 and moves up through each byte before proceeding to
/// the next one; every six bits of the stream fill one character, starting from the last. Reading
/// the bytes as a little-endian `u128` lines the stream up with the integer's bit order, so the
/// characters are simply its base-64 digits, most significant first.
pub(crate) fn encode(bytes: &[u8; 16]) -> [u8; ENCODED_LEN] {
    let mut n = u128::from_le_bytes(*bytes);
    let mut dst = [0u8; ENCODED_LEN];
    for e in dst.iter_mut().rev() {
        *e = ALPHABET[(n & 0x3f) as usize];
        n >>= 6;
    }
    debug_assert_eq!(n, 0);
    dst
}

/// Decodes 22 characters into 16 bytes, inverting [`encode`].
///
/// The first character carries the top six bits of a 132-bit stream; only its lowest two reach
/// byte 15 and the other four are dropped, whatever their value.
pub(crate) fn decode(src: &str) -> Result<[u8; 16], Error> {
    if src.len() != ENCODED_LEN {
        return Err(Error::InvalidEncodedLength { len: src.len() });
    }

    let mut n = 0u128;
    let mut shift = 0;
    for (index, ch) in src.char_indices().rev() {
        let value = lookup(ch).ok_or(Error::InvalidCharacter { ch, index })?;
        // bits shifted past the top are discarded
        n |= (value as u128) << shift;
        shift += 6;
    }
    Ok(n.to_le_bytes())
}
