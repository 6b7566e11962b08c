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

//! EIP-712 structured hashing for the sponsored-transfer relay schema.
//!
//! The final digest is `keccak256(0x1901 || domainSeparator || structHash)`
//! with addresses left-padded to 32-byte words, uint256 values big-endian,
//! and strings hashed before inclusion.

use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};

/// Canonical type signature of the domain struct.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Canonical type signature of the relay message struct.
pub const SPONSORED_TRANSFER_TYPE: &str =
    "SponsoredTransfer(address sender,address recipient,uint256 amount,uint256 nonce)";

/// The signing domain binding messages to one verifying contract on one
/// chain, preventing cross-context replay.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Domain {
    /// Domain name.
    pub name: String,
    /// Domain version.
    pub version: String,
    /// Target chain id.
    pub chain_id: u64,
    /// The contract that verifies signatures under this domain.
    pub verifying_contract: Address,
}

impl Eip712Domain {
    /// The registry contract's domain: name "Sponsor", version "1".
    pub fn sponsor(chain_id: u64, verifying_contract: Address) -> Self {
        Self {
            name: "Sponsor".to_string(),
            version: "1".to_string(),
            chain_id,
            verifying_contract,
        }
    }

    /// `hashStruct` of the domain.
    pub fn separator(&self) -> B256 {
        let mut enc = WordEncoder::new();
        enc.push_b256(keccak256(DOMAIN_TYPE.as_bytes()));
        enc.push_b256(keccak256(self.name.as_bytes()));
        enc.push_b256(keccak256(self.version.as_bytes()));
        enc.push_u256(U256::from(self.chain_id));
        enc.push_address(self.verifying_contract);
        keccak256(enc.finish())
    }
}

/// The relay message an authority signs: move `amount` to `recipient`,
/// valid only at the registry's current counter value `nonce`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredTransferMessage {
    /// The authority whose funds move.
    pub sender: Address,
    /// The transfer recipient.
    pub recipient: Address,
    /// Transfer amount.
    pub amount: U256,
    /// The registry's current counter for `sender`.
    pub nonce: U256,
}

impl SponsoredTransferMessage {
    /// `hashStruct` of the message.
    pub fn struct_hash(&self) -> B256 {
        let mut enc = WordEncoder::new();
        enc.push_b256(keccak256(SPONSORED_TRANSFER_TYPE.as_bytes()));
        enc.push_address(self.sender);
        enc.push_address(self.recipient);
        enc.push_u256(self.amount);
        enc.push_u256(self.nonce);
        keccak256(enc.finish())
    }
}

/// The digest the authority signs:
/// `keccak256(0x1901 || domainSeparator || structHash)`.
pub fn signing_digest(domain: &Eip712Domain, message: &SponsoredTransferMessage) -> B256 {
    let mut out = Vec::with_capacity(2 + 32 + 32);
    out.push(0x19);
    out.push(0x01);
    out.extend_from_slice(domain.separator().as_slice());
    out.extend_from_slice(message.struct_hash().as_slice());
    keccak256(out)
}

/// ABI word encoder for the static field types above.
struct WordEncoder {
    buf: Vec<u8>,
}

impl WordEncoder {
    fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn push_b256(&mut self, word: B256) {
        self.buf.extend_from_slice(word.as_slice());
    }

    fn push_address(&mut self, address: Address) {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(address.as_slice());
        self.buf.extend_from_slice(&word);
    }

    fn push_u256(&mut self, value: U256) {
        self.buf.extend_from_slice(&value.to_be_bytes::<32>());
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    fn domain() -> Eip712Domain {
        Eip712Domain::sponsor(51178, address!("00000000000000000000000000000000000000C8"))
    }

    fn message() -> SponsoredTransferMessage {
        SponsoredTransferMessage {
            sender: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            recipient: address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            amount: U256::from(100u64),
            nonce: U256::ZERO,
        }
    }

    #[test]
    fn digest_is_stable_across_calls() {
        assert_eq!(
            signing_digest(&domain(), &message()),
            signing_digest(&domain(), &message())
        );
    }

    #[test]
    fn nonce_alone_changes_the_digest() {
        let bumped = SponsoredTransferMessage {
            nonce: U256::from(1u64),
            ..message()
        };
        assert_ne!(
            signing_digest(&domain(), &message()),
            signing_digest(&domain(), &bumped)
        );
    }

    #[test]
    fn domain_binds_chain_and_contract() {
        let other_chain = Eip712Domain {
            chain_id: 1,
            ..domain()
        };
        let other_contract = Eip712Domain {
            verifying_contract: Address::ZERO,
            ..domain()
        };
        let base = signing_digest(&domain(), &message());
        assert_ne!(base, signing_digest(&other_chain, &message()));
        assert_ne!(base, signing_digest(&other_contract, &message()));
    }

    #[test]
    fn struct_hash_preimage_is_five_words() {
        // type hash + 4 fields, each one 32-byte word
        let mut enc = WordEncoder::new();
        enc.push_b256(keccak256(SPONSORED_TRANSFER_TYPE.as_bytes()));
        let msg = message();
        enc.push_address(msg.sender);
        enc.push_address(msg.recipient);
        enc.push_u256(msg.amount);
        enc.push_u256(msg.nonce);
        let preimage = enc.finish();
        assert_eq!(preimage.len(), 5 * 32);
        assert_eq!(keccak256(&preimage), msg.struct_hash());
    }
}
