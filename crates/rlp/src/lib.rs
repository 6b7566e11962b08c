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

#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! Recursive-length-prefix codec for Ethereum wire structures.
//!
//! Items are either byte-strings or ordered lists of items. Integers are
//! carried as their minimal big-endian byte form (zero is the empty
//! byte-string). Decoding is strict: non-canonical length prefixes are
//! rejected so that a payload has exactly one accepted encoding.

use alloy_primitives::{Address, U256};

mod decode;
pub use decode::decode;

mod encode;
pub use encode::{append, encode};

mod error;
pub use error::DecodeError;

/// A single RLP item: a byte-string or a list of nested items.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Item {
    /// An opaque byte-string.
    Bytes(Vec<u8>),
    /// An ordered sequence of items.
    List(Vec<Item>),
}

impl Item {
    /// A byte-string item.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Item::Bytes(bytes.into())
    }

    /// A list item.
    pub fn list(items: impl Into<Vec<Item>>) -> Self {
        Item::List(items.into())
    }

    /// An unsigned integer item in minimal big-endian form.
    ///
    /// Zero encodes as the empty byte-string.
    pub fn uint(value: impl Into<U256>) -> Self {
        let bytes = value.into().to_be_bytes::<32>();
        let start = bytes.iter().position(|b| *b != 0).unwrap_or(32);
        Item::Bytes(bytes[start..].to_vec())
    }

    /// A 20-byte address item.
    pub fn address(address: Address) -> Self {
        Item::Bytes(address.to_vec())
    }

    /// The item's bytes, or `None` for a list.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Item::Bytes(bytes) => Some(bytes),
            Item::List(_) => None,
        }
    }

    /// The item's children, or `None` for a byte-string.
    pub fn as_list(&self) -> Option<&[Item]> {
        match self {
            Item::Bytes(_) => None,
            Item::List(items) => Some(items),
        }
    }

    /// Interpret a byte-string item as a minimal big-endian integer.
    pub fn as_uint(&self) -> Option<U256> {
        let bytes = self.as_bytes()?;
        if bytes.len() > 32 {
            return None;
        }
        Some(U256::from_be_slice(bytes))
    }
}
