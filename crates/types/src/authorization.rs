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

//! 7702 authorization tuples and their signing preimage.

use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};
use sponsor_rlp::Item;

use crate::SignatureParts;

/// Magic byte prepended to the RLP tuple before hashing, per EIP-7702.
pub const SET_CODE_AUTH_MAGIC: u8 = 0x05;

/// An unsigned authorization tuple: the authority's grant of code
/// delegation to `address` on `chain_id` at its account nonce `nonce`.
///
/// `chain_id` 0 means "any chain" and encodes as the empty byte-string.
/// `nonce` must be the authority's next account nonce at inclusion time;
/// this type does not validate that against chain state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    /// Chain the grant is valid on, 0 for any.
    pub chain_id: u64,
    /// The contract whose code the authority delegates to.
    pub address: Address,
    /// The authority's account nonce at the time of signing.
    pub nonce: u64,
}

impl Authorization {
    /// The bytes the authority signs over: `0x05 || rlp([chain_id, address, nonce])`.
    pub fn signing_preimage(&self) -> Vec<u8> {
        let mut out = vec![SET_CODE_AUTH_MAGIC];
        sponsor_rlp::append(&self.rlp_item(), &mut out);
        out
    }

    /// keccak256 of the signing preimage.
    pub fn signing_hash(&self) -> B256 {
        keccak256(self.signing_preimage())
    }

    /// Attach an authority signature, consuming the tuple.
    pub fn into_signed(self, signature: SignatureParts) -> SignedAuthorization {
        SignedAuthorization {
            inner: self,
            signature,
        }
    }

    fn rlp_item(&self) -> Item {
        Item::list(vec![
            Item::uint(U256::from(self.chain_id)),
            Item::address(self.address),
            Item::uint(U256::from(self.nonce)),
        ])
    }
}

/// An authorization tuple plus the authority's signature. Immutable once
/// produced; it becomes one element of a transaction's authorization list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedAuthorization {
    #[serde(flatten)]
    inner: Authorization,
    #[serde(flatten)]
    signature: SignatureParts,
}

impl SignedAuthorization {
    /// The signed-over tuple.
    pub fn authorization(&self) -> &Authorization {
        &self.inner
    }

    /// The authority's signature.
    pub fn signature(&self) -> &SignatureParts {
        &self.signature
    }

    /// Recover the authority that signed this tuple.
    pub fn recover_authority(&self) -> anyhow::Result<Address> {
        let parity = self
            .signature
            .parity()
            .ok_or_else(|| anyhow::anyhow!("y parity out of range: {}", self.signature.y_parity))?;
        let signature = alloy_primitives::Signature::new(self.signature.r, self.signature.s, parity);
        signature
            .recover_address_from_prehash(&self.inner.signing_hash())
            .map_err(|e| anyhow::anyhow!("authority recovery failed: {e}"))
    }

    /// The six-field wire tuple `[chain_id, address, nonce, y_parity, r, s]`
    /// as embedded in a transaction's authorization list.
    pub fn rlp_item(&self) -> Item {
        let mut items = vec![
            Item::uint(U256::from(self.inner.chain_id)),
            Item::address(self.inner.address),
            Item::uint(U256::from(self.inner.nonce)),
        ];
        self.signature.append_rlp(&mut items);
        Item::List(items)
    }
}
