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

use crate::Item;

const SHORT_STRING_BASE: u8 = 0x80;
const SHORT_LIST_BASE: u8 = 0xc0;
const MAX_SHORT_LEN: usize = 55;

/// Encode an item to a fresh buffer.
pub fn encode(item: &Item) -> Vec<u8> {
    let mut out = Vec::new();
    append(item, &mut out);
    out
}

/// Append an item's encoding to an existing buffer.
pub fn append(item: &Item, out: &mut Vec<u8>) {
    match item {
        Item::Bytes(bytes) => {
            // A single byte below 0x80 is its own encoding.
            if bytes.len() == 1 && bytes[0] < SHORT_STRING_BASE {
                out.push(bytes[0]);
            } else {
                append_length(SHORT_STRING_BASE, bytes.len(), out);
                out.extend_from_slice(bytes);
            }
        }
        Item::List(items) => {
            let mut payload = Vec::new();
            for item in items {
                append(item, &mut payload);
            }
            append_length(SHORT_LIST_BASE, payload.len(), out);
            out.extend_from_slice(&payload);
        }
    }
}

fn append_length(base: u8, len: usize, out: &mut Vec<u8>) {
    if len <= MAX_SHORT_LEN {
        out.push(base + len as u8);
    } else {
        let be = (len as u64).to_be_bytes();
        let start = be.iter().position(|b| *b != 0).unwrap_or(be.len());
        let len_bytes = &be[start..];
        out.push(base + MAX_SHORT_LEN as u8 + len_bytes.len() as u8);
        out.extend_from_slice(len_bytes);
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;

    #[test]
    fn encodes_empty_and_zero_identically() {
        assert_eq!(encode(&Item::bytes(vec![])), vec![0x80]);
        assert_eq!(encode(&Item::uint(U256::from(0u64))), vec![0x80]);
    }

    #[test]
    fn encodes_single_low_byte_as_itself() {
        assert_eq!(encode(&Item::bytes(vec![0x00])), vec![0x00]);
        assert_eq!(encode(&Item::bytes(vec![0x7f])), vec![0x7f]);
        assert_eq!(encode(&Item::uint(U256::from(15u64))), vec![0x0f]);
    }

    #[test]
    fn encodes_short_string_with_prefix() {
        assert_eq!(encode(&Item::bytes(*b"dog")), vec![0x83, b'd', b'o', b'g']);
        assert_eq!(encode(&Item::bytes(vec![0x80])), vec![0x81, 0x80]);
    }

    #[test]
    fn encodes_integer_1024() {
        assert_eq!(encode(&Item::uint(U256::from(1024u64))), vec![0x82, 0x04, 0x00]);
    }

    #[test]
    fn encodes_long_string_with_length_of_length() {
        let payload = vec![0xab; 56];
        let encoded = encode(&Item::bytes(payload.clone()));
        assert_eq!(encoded[0], 0xb8);
        assert_eq!(encoded[1], 56);
        assert_eq!(&encoded[2..], payload.as_slice());
    }

    #[test]
    fn encodes_cat_dog_list() {
        let list = Item::list(vec![Item::bytes(*b"cat"), Item::bytes(*b"dog")]);
        assert_eq!(
            encode(&list),
            vec![0xc8, 0x83, b'c', b'a', b't', 0x83, b'd', b'o', b'g']
        );
    }

    #[test]
    fn encodes_set_theoretic_nesting() {
        // [ [], [[]], [ [], [[]] ] ]
        let empty = Item::list(vec![]);
        let nested = Item::list(vec![empty.clone()]);
        let item = Item::list(vec![
            empty.clone(),
            nested.clone(),
            Item::list(vec![empty, nested]),
        ]);
        assert_eq!(
            encode(&item),
            vec![0xc7, 0xc0, 0xc1, 0xc0, 0xc3, 0xc0, 0xc1, 0xc0]
        );
    }

    #[test]
    fn encodes_long_list() {
        let items: Vec<Item> = (0..60).map(|_| Item::bytes(vec![0x01])).collect();
        let encoded = encode(&Item::list(items));
        assert_eq!(encoded[0], 0xf8);
        assert_eq!(encoded[1], 60);
        assert_eq!(encoded.len(), 62);
    }

    #[test]
    fn uint_is_minimal_big_endian() {
        assert_eq!(encode(&Item::uint(U256::from(0x0400u64))), vec![0x82, 0x04, 0x00]);
        let max = U256::MAX;
        let encoded = encode(&Item::uint(max));
        assert_eq!(encoded[0], 0x80 + 32);
        assert_eq!(encoded.len(), 33);
    }
}
