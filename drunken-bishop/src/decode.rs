//! Fingerprint string decoding.

use crate::{Error, HashMode, Result};
use alloc::{string::String, vec::Vec};
use base64ct::{Base64Unpadded, Encoding};
use core::iter;

/// Separator between the hex byte pairs of an MD5 fingerprint.
const HEX_SEPARATOR: char = ':';

/// Base64 padding character.
const PAD: char = '=';

/// Number of characters in a Base64 group.
const BASE64_GROUP_SIZE: usize = 4;

/// Standard Base64 alphabet, indexed by sextet value.
const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Decode a fingerprint string into raw digest bytes.
///
/// - [`HashMode::Md5`]: colon-separated hex byte pairs, e.g. `58:d5:23:...`.
/// - [`HashMode::Sha256`]: unpadded standard Base64, as printed after the
///   `SHA256:` prefix by `ssh-keygen -l`.
///
/// The number of decoded bytes is not checked against the digest size; use
/// [`Fingerprint::decode`][`crate::Fingerprint::decode`] for that.
pub fn decode(fingerprint: &str, mode: HashMode) -> Result<Vec<u8>> {
    let bytes = match mode {
        HashMode::Md5 => decode_hex(fingerprint)?,
        HashMode::Sha256 => decode_base64(fingerprint)?,
    };

    log::debug!("decoded {mode} fingerprint into {} bytes", bytes.len());
    Ok(bytes)
}

fn decode_hex(fingerprint: &str) -> Result<Vec<u8>> {
    fingerprint
        .split(HEX_SEPARATOR)
        .enumerate()
        .map(|(index, segment)| {
            u8::from_str_radix(segment.trim(), 16).map_err(|err| Error::HexSegment { index, err })
        })
        .collect()
}

/// Pads with `4 - len % 4` characters, i.e. a whole extra group of padding
/// when the input is already aligned, then decodes leniently:
///
/// - characters outside the Base64 alphabet are skipped;
/// - padding before the second character of a group is skipped, and a
///   complete padding sequence ends the input;
/// - unused low bits of the final character are ignored.
///
/// A dangling single character, or a partial group left without enough
/// padding, is still an error.
#[allow(clippy::arithmetic_side_effects)]
fn decode_base64(fingerprint: &str) -> Result<Vec<u8>> {
    let missing = BASE64_GROUP_SIZE - fingerprint.len() % BASE64_GROUP_SIZE;

    let mut padded = String::with_capacity(fingerprint.len() + missing);
    padded.push_str(fingerprint);
    padded.extend(iter::repeat_n(PAD, missing));

    let mut data = Vec::with_capacity(padded.len());
    let mut pads = 0;
    let mut terminated = false;

    for byte in padded.bytes() {
        if byte == PAD as u8 {
            let group_pos = data.len() % BASE64_GROUP_SIZE;

            if group_pos >= 2 {
                pads += 1;

                if group_pos + pads >= BASE64_GROUP_SIZE {
                    terminated = true;
                    break;
                }
            }
        } else if let Some(sextet) = sextet(byte) {
            data.push(sextet);
            pads = 0;
        }
    }

    let group_pos = data.len() % BASE64_GROUP_SIZE;

    if group_pos == 1 || (group_pos != 0 && !terminated) {
        return Err(base64ct::Error::InvalidEncoding.into());
    }

    // Bits of the last character that don't fill a whole byte.
    let unused_bits = match group_pos {
        2 => 4,
        3 => 2,
        _ => 0,
    };

    if let Some(last) = data.last_mut() {
        *last &= 0x3f << unused_bits;
    }

    let encoded = data
        .into_iter()
        .map(|sextet| char::from(BASE64_ALPHABET[usize::from(sextet)]))
        .collect::<String>();

    Ok(Base64Unpadded::decode_vec(&encoded)?)
}

fn sextet(byte: u8) -> Option<u8> {
    BASE64_ALPHABET
        .iter()
        .position(|&c| c == byte)
        .and_then(|pos| u8::try_from(pos).ok())
}
