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

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use sponsor_rlp::Item;

/// A recoverable secp256k1 signature in the shape 7702 wire structures
/// carry it: y-parity plus the `r`/`s` scalars.
///
/// `y_parity` is 0 or 1, not the legacy 27/28 convention; use
/// [`SignatureParts::v_legacy`] where a contract-side `ecrecover` expects
/// the legacy form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureParts {
    /// Recovery id selecting which candidate public key verifies.
    pub y_parity: u8,
    /// The `r` scalar as a 256-bit unsigned integer.
    pub r: U256,
    /// The `s` scalar, low-s normalized.
    pub s: U256,
}

impl SignatureParts {
    /// Create a signature record from its wire components.
    pub fn new(y_parity: u8, r: U256, s: U256) -> Self {
        Self { y_parity, r, s }
    }

    /// The y-parity as a bool, or `None` if it is out of range.
    pub fn parity(&self) -> Option<bool> {
        match self.y_parity {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }

    /// The recovery id in the legacy 27/28 `ecrecover` convention.
    pub fn v_legacy(&self) -> u8 {
        self.y_parity + 27
    }

    /// Append the signature's three wire fields as RLP integer items.
    pub fn append_rlp(&self, items: &mut Vec<Item>) {
        items.push(Item::uint(U256::from(self.y_parity)));
        items.push(Item::uint(self.r));
        items.push(Item::uint(self.s));
    }
}

impl From<alloy_primitives::Signature> for SignatureParts {
    fn from(signature: alloy_primitives::Signature) -> Self {
        Self {
            y_parity: signature.v() as u8,
            r: signature.r(),
            s: signature.s(),
        }
    }
}
