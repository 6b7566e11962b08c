// This file is part of Sponsor.
//
// Sponsor is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Sponsor is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Sponsor.
// If not, see https://www.gnu.org/licenses/.

use crate::{DecodeError, Item};

/// Decode a single item, rejecting trailing bytes and any non-canonical
/// length form.
pub fn decode(data: &[u8]) -> Result<Item, DecodeError> {
    let (item, rest) = decode_item(data)?;
    if !rest.is_empty() {
        return Err(DecodeError::TrailingBytes);
    }
    Ok(item)
}

fn decode_item(data: &[u8]) -> Result<(Item, &[u8]), DecodeError> {
    let (&tag, rest) = data.split_first().ok_or(DecodeError::UnexpectedEof)?;
    match tag {
        0x00..=0x7f => Ok((Item::Bytes(vec![tag]), rest)),
        0x80..=0xb7 => {
            let (payload, rest) = take(rest, (tag - 0x80) as usize)?;
            if payload.len() == 1 && payload[0] < 0x80 {
                return Err(DecodeError::NonCanonicalSingleByte);
            }
            Ok((Item::Bytes(payload.to_vec()), rest))
        }
        0xb8..=0xbf => {
            let (len, rest) = decode_long_length(rest, (tag - 0xb7) as usize)?;
            let (payload, rest) = take(rest, len)?;
            Ok((Item::Bytes(payload.to_vec()), rest))
        }
        0xc0..=0xf7 => {
            let (payload, rest) = take(rest, (tag - 0xc0) as usize)?;
            Ok((Item::List(decode_list_payload(payload)?), rest))
        }
        0xf8..=0xff => {
            let (len, rest) = decode_long_length(rest, (tag - 0xf7) as usize)?;
            let (payload, rest) = take(rest, len)?;
            Ok((Item::List(decode_list_payload(payload)?), rest))
        }
    }
}

fn decode_list_payload(mut payload: &[u8]) -> Result<Vec<Item>, DecodeError> {
    let mut items = Vec::new();
    while !payload.is_empty() {
        let (item, rest) = decode_item(payload)?;
        items.push(item);
        payload = rest;
    }
    Ok(items)
}

/// Read a long-form length of `len_of_len` bytes. The long form is only
/// canonical for payloads longer than 55 bytes with no leading zero bytes.
fn decode_long_length(data: &[u8], len_of_len: usize) -> Result<(usize, &[u8]), DecodeError> {
    let (len_bytes, rest) = take(data, len_of_len)?;
    if len_bytes[0] == 0 {
        return Err(DecodeError::LeadingZeroLength);
    }
    let mut len = 0usize;
    for &b in len_bytes {
        len = len
            .checked_mul(256)
            .and_then(|l| l.checked_add(b as usize))
            .ok_or(DecodeError::UnexpectedEof)?;
    }
    if len <= 55 {
        return Err(DecodeError::NonCanonicalLength);
    }
    Ok((len, rest))
}

fn take(data: &[u8], len: usize) -> Result<(&[u8], &[u8]), DecodeError> {
    if data.len() < len {
        return Err(DecodeError::UnexpectedEof);
    }
    Ok(data.split_at(len))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;
    use crate::encode;

    fn round_trip(item: Item) {
        let encoded = encode(&item);
        assert_eq!(decode(&encoded).unwrap(), item);
    }

    #[test]
    fn round_trips_byte_strings() {
        round_trip(Item::bytes(vec![]));
        round_trip(Item::bytes(vec![0x00]));
        round_trip(Item::bytes(vec![0x80]));
        round_trip(Item::bytes(*b"dog"));
        round_trip(Item::bytes(vec![0x55; 56]));
        round_trip(Item::bytes(vec![0x55; 300]));
    }

    #[test]
    fn round_trips_nested_lists() {
        round_trip(Item::list(vec![]));
        round_trip(Item::list(vec![
            Item::bytes(*b"cat"),
            Item::list(vec![Item::uint(U256::from(1024u64)), Item::list(vec![])]),
            Item::uint(U256::MAX),
        ]));
        round_trip(Item::list(
            (0..60).map(|i| Item::uint(U256::from(i as u64))).collect::<Vec<_>>(),
        ));
    }

    #[test]
    fn rejects_trailing_bytes() {
        assert_eq!(decode(&[0x80, 0x00]), Err(DecodeError::TrailingBytes));
    }

    #[test]
    fn rejects_truncated_input() {
        assert_eq!(decode(&[]), Err(DecodeError::UnexpectedEof));
        assert_eq!(decode(&[0x83, b'd', b'o']), Err(DecodeError::UnexpectedEof));
        assert_eq!(decode(&[0xb8, 0x38]), Err(DecodeError::UnexpectedEof));
        assert_eq!(decode(&[0xc2, 0x01]), Err(DecodeError::UnexpectedEof));
    }

    #[test]
    fn rejects_non_canonical_single_byte() {
        // 0x05 must encode as itself, not as 0x81 0x05.
        assert_eq!(
            decode(&[0x81, 0x05]),
            Err(DecodeError::NonCanonicalSingleByte)
        );
    }

    #[test]
    fn rejects_long_form_for_short_payload() {
        let mut data = vec![0xb8, 0x03];
        data.extend_from_slice(b"dog");
        assert_eq!(decode(&data), Err(DecodeError::NonCanonicalLength));
    }

    #[test]
    fn rejects_leading_zero_length() {
        let mut data = vec![0xb9, 0x00, 0x38];
        data.extend_from_slice(&[0xab; 56]);
        assert_eq!(decode(&data), Err(DecodeError::LeadingZeroLength));
    }

    #[test]
    fn rejects_malformed_nested_item() {
        // List payload containing a truncated string.
        assert_eq!(decode(&[0xc2, 0x83, b'd']), Err(DecodeError::UnexpectedEof));
    }

    #[test]
    fn uint_accessor_reads_minimal_big_endian() {
        let decoded = decode(&[0x82, 0x04, 0x00]).unwrap();
        assert_eq!(decoded.as_uint(), Some(U256::from(1024u64)));
        assert_eq!(decode(&[0x80]).unwrap().as_uint(), Some(U256::ZERO));
    }
}
