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

//! The EIP-7702 set-code transaction request.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use sponsor_rlp::Item;

use crate::{ResolvedFees, SignedAuthorization};

/// Transaction type byte for set-code transactions, per EIP-7702.
pub const SET_CODE_TX_TYPE: u8 = 0x04;

/// One access-list entry: an address and its warmed storage keys.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListEntry {
    /// The warmed account.
    pub address: Address,
    /// Warmed storage slots of that account.
    pub storage_keys: Vec<B256>,
}

impl AccessListEntry {
    fn rlp_item(&self) -> Item {
        Item::list(vec![
            Item::address(self.address),
            Item::list(
                self.storage_keys
                    .iter()
                    .map(|key| Item::bytes(key.as_slice()))
                    .collect::<Vec<_>>(),
            ),
        ])
    }
}

/// The ten-field body of a set-code transaction, in named form.
///
/// The wire-order field list exists only at the encoding boundary
/// ([`Eip7702TransactionRequest::rlp_base_items`]); business logic always
/// works with named fields. `to` and the authorization list targets are
/// fully independent: sending to the authority's own address while carrying
/// that authority's authorization is what activates delegated execution
/// there, while any other combination is an ordinary call that happens to
/// carry delegation grants.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip7702TransactionRequest {
    /// Target chain id.
    pub chain_id: u64,
    /// The sponsor's account nonce.
    pub nonce: u64,
    /// Maximum priority fee per gas unit, in wei.
    pub max_priority_fee_per_gas: u128,
    /// Maximum total fee per gas unit, in wei.
    pub max_fee_per_gas: u128,
    /// Gas limit for execution.
    pub gas_limit: u64,
    /// The account whose (possibly delegated) code executes.
    pub to: Address,
    /// Value transferred with the call, in wei.
    pub value: U256,
    /// Call data.
    pub input: Bytes,
    /// EIP-2930 access list, possibly empty.
    pub access_list: Vec<AccessListEntry>,
    /// Signed delegation grants carried by this transaction.
    pub authorization_list: Vec<SignedAuthorization>,
}

impl Eip7702TransactionRequest {
    /// Set both fee fields from a resolved fee quote.
    pub fn with_fees(mut self, fees: ResolvedFees) -> Self {
        self.max_fee_per_gas = fees.max_fee_per_gas;
        self.max_priority_fee_per_gas = fees.max_priority_fee_per_gas;
        self
    }

    /// The ten wire-order items of the unsigned body, shared by the signing
    /// payload and the final envelope.
    pub fn rlp_base_items(&self) -> Vec<Item> {
        vec![
            Item::uint(U256::from(self.chain_id)),
            Item::uint(U256::from(self.nonce)),
            Item::uint(U256::from(self.max_priority_fee_per_gas)),
            Item::uint(U256::from(self.max_fee_per_gas)),
            Item::uint(U256::from(self.gas_limit)),
            Item::address(self.to),
            Item::uint(self.value),
            Item::bytes(self.input.to_vec()),
            Item::list(
                self.access_list
                    .iter()
                    .map(AccessListEntry::rlp_item)
                    .collect::<Vec<_>>(),
            ),
            Item::list(
                self.authorization_list
                    .iter()
                    .map(SignedAuthorization::rlp_item)
                    .collect::<Vec<_>>(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, b256, bytes};

    use super::*;
    use crate::FeePolicy;

    fn request() -> Eip7702TransactionRequest {
        Eip7702TransactionRequest {
            chain_id: 51178,
            nonce: 3,
            max_priority_fee_per_gas: 1_000_000_000,
            max_fee_per_gas: 30_000_000_000,
            gas_limit: 100_000,
            to: address!("000000000000000000000000000000000000dEaD"),
            value: U256::from(123u64),
            input: bytes!("deadbeef"),
            access_list: vec![],
            authorization_list: vec![],
        }
    }

    #[test]
    fn base_items_are_wire_ordered() {
        let items = request().rlp_base_items();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].as_uint(), Some(U256::from(51178u64)));
        assert_eq!(items[1].as_uint(), Some(U256::from(3u64)));
        assert_eq!(items[5].as_bytes().unwrap().len(), 20);
        assert_eq!(items[7].as_bytes(), Some(&[0xde, 0xad, 0xbe, 0xef][..]));
        assert_eq!(items[8].as_list(), Some(&[][..]));
        assert_eq!(items[9].as_list(), Some(&[][..]));
    }

    #[test]
    fn access_list_entry_nests_storage_keys() {
        let entry = AccessListEntry {
            address: Address::ZERO,
            storage_keys: vec![b256!(
                "0000000000000000000000000000000000000000000000000000000000000001"
            )],
        };
        let item = entry.rlp_item();
        let children = item.as_list().unwrap();
        assert_eq!(children[0].as_bytes().unwrap().len(), 20);
        let keys = children[1].as_list().unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].as_bytes().unwrap().len(), 32);
    }

    #[test]
    fn with_fees_overwrites_both_fields() {
        let request = request().with_fees(
            FeePolicy::Legacy {
                gas_price: 5_000_000_000,
            }
            .resolve(),
        );
        assert_eq!(request.max_fee_per_gas, 5_000_000_000);
        assert_eq!(request.max_priority_fee_per_gas, 5_000_000_000);
    }
}
