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

//! End-to-end delegation flow: an authority grants code delegation, a
//! sponsor wraps the grant in a set-code transaction and pays for it.

use alloy_primitives::{address, b256, Bytes, U256};
use sponsor_builder::sign_and_encode;
use sponsor_signer::KeySigner;
use sponsor_types::{Authorization, Eip7702TransactionRequest, FeePolicy};

#[test]
fn sponsored_delegation_round_trips_on_the_wire() {
    let authority = KeySigner::from_bytes(&b256!(
        "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
    ))
    .unwrap();
    let sponsor = KeySigner::from_bytes(&b256!(
        "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318"
    ))
    .unwrap();
    let delegate = address!("000000000000000000000000000000000000dEaD");

    // The authority and sponsor are different accounts, so the authority's
    // nonce tracks its own sequence, not the sponsor's.
    let authorization = authority
        .sign_authorization(Authorization {
            chain_id: 51178,
            address: delegate,
            nonce: 0,
        })
        .unwrap();
    assert_eq!(
        authorization.recover_authority().unwrap(),
        authority.address()
    );

    // Send to the authority's own address with its authorization attached:
    // the combination that activates delegated execution there.
    let request = Eip7702TransactionRequest {
        chain_id: 51178,
        nonce: 7,
        gas_limit: 150_000,
        to: authority.address(),
        value: U256::ZERO,
        input: Bytes::new(),
        access_list: vec![],
        authorization_list: vec![authorization],
        ..Default::default()
    }
    .with_fees(
        FeePolicy::Eip1559 {
            max_fee_per_gas: 30_000_000_000,
            max_priority_fee_per_gas: 1_000_000_000,
        }
        .resolve(),
    );

    let signed = sign_and_encode(request, &sponsor).unwrap();
    let raw = signed.raw();
    assert_eq!(raw[0], 0x04);

    // The outer envelope decodes to thirteen fields with our single grant.
    let decoded = sponsor_rlp::decode(&raw[1..]).unwrap();
    let fields = decoded.as_list().unwrap();
    assert_eq!(fields.len(), 13);

    assert_eq!(fields[0].as_uint(), Some(U256::from(51178u64)));
    assert_eq!(fields[1].as_uint(), Some(U256::from(7u64)));
    assert_eq!(fields[5].as_bytes(), Some(authority.address().as_slice()));
    assert_eq!(fields[6].as_uint(), Some(U256::ZERO));
    assert_eq!(fields[7].as_bytes(), Some(&[][..]));

    let auths = fields[9].as_list().unwrap();
    assert_eq!(auths.len(), 1);
    let tuple = auths[0].as_list().unwrap();
    assert_eq!(tuple.len(), 6);
    assert_eq!(tuple[0].as_uint(), Some(U256::from(51178u64)));
    assert_eq!(tuple[1].as_bytes(), Some(delegate.as_slice()));
    assert_eq!(tuple[2].as_uint(), Some(U256::ZERO));

    // The sponsor's signature fields close the envelope and recover to the
    // sponsor over the signing hash.
    let y_parity = fields[10].as_uint().unwrap();
    assert!(y_parity <= U256::from(1u64));

    let mut payload = vec![0x04u8];
    payload.extend_from_slice(&sponsor_rlp::encode(&sponsor_rlp::Item::list(
        fields[..10].to_vec(),
    )));
    let parts = sponsor_types::SignatureParts::new(
        y_parity.to::<u8>(),
        fields[11].as_uint().unwrap(),
        fields[12].as_uint().unwrap(),
    );
    let recovered =
        sponsor_signer::recover(alloy_primitives::keccak256(&payload), &parts).unwrap();
    assert_eq!(recovered, sponsor.address());

    // Finalization is idempotent: the raw bytes equal a fresh encoding.
    assert_eq!(signed.tx_hash(), alloy_primitives::keccak256(raw));
}
