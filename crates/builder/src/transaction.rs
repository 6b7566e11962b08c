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

//! Assembly, signing, and wire encoding of set-code transactions.

use alloy_primitives::{keccak256, Bytes, B256};
use sponsor_provider::EvmProvider;
use sponsor_rlp::Item;
use sponsor_signer::KeySigner;
use sponsor_types::{Eip7702TransactionRequest, SignatureParts, SET_CODE_TX_TYPE};

use crate::{Error, Result};

/// A set-code transaction being assembled for one submission attempt.
///
/// The sponsor signature is recorded together with the signing hash it was
/// computed over; [`SetCodeTransaction::raw`] refuses to emit wire bytes if
/// the request has drifted since signing.
#[derive(Clone, Debug)]
pub struct SetCodeTransaction {
    request: Eip7702TransactionRequest,
    signature: Option<(B256, SignatureParts)>,
}

impl SetCodeTransaction {
    /// Start from a fully populated request.
    pub fn new(request: Eip7702TransactionRequest) -> Self {
        Self {
            request,
            signature: None,
        }
    }

    /// The request being assembled.
    pub fn request(&self) -> &Eip7702TransactionRequest {
        &self.request
    }

    /// Mutable access to the request. Any change invalidates a previously
    /// attached signature; `raw` will fail until `sign` runs again.
    pub fn request_mut(&mut self) -> &mut Eip7702TransactionRequest {
        &mut self.request
    }

    /// The bytes the sponsor signs: `0x04 || rlp([ten body fields])`.
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut out = vec![SET_CODE_TX_TYPE];
        sponsor_rlp::append(&Item::List(self.request.rlp_base_items()), &mut out);
        out
    }

    /// keccak256 of the signing payload.
    pub fn signing_hash(&self) -> B256 {
        keccak256(self.signing_payload())
    }

    /// Sign the current payload with the sponsor's key and attach the
    /// signature.
    pub fn sign(&mut self, sponsor: &KeySigner) -> Result<()> {
        let hash = self.signing_hash();
        let signature = sponsor.sign_digest(hash)?;
        tracing::debug!(
            sponsor = %sponsor.address(),
            %hash,
            authorizations = self.request.authorization_list.len(),
            "signed set-code transaction"
        );
        self.signature = Some((hash, signature));
        Ok(())
    }

    /// Serialize the signed transaction to its wire bytes:
    /// `0x04 || rlp([ten body fields, y_parity, r, s])`.
    ///
    /// Fails with [`Error::UnsignedPayload`] if no signature is attached or
    /// if the attached signature was computed over different field values.
    /// Repeated calls yield identical bytes.
    pub fn raw(&self) -> Result<Bytes> {
        let (signed_hash, signature) = self.signature.as_ref().ok_or(Error::UnsignedPayload)?;
        if *signed_hash != self.signing_hash() {
            return Err(Error::UnsignedPayload);
        }
        let mut items = self.request.rlp_base_items();
        signature.append_rlp(&mut items);
        let mut out = vec![SET_CODE_TX_TYPE];
        sponsor_rlp::append(&Item::List(items), &mut out);
        Ok(out.into())
    }

    /// Finalize into an immutable signed transaction.
    pub fn into_signed(self) -> Result<SignedTransaction> {
        let raw = self.raw()?;
        let hash = keccak256(&raw);
        let (_, signature) = self.signature.ok_or(Error::UnsignedPayload)?;
        Ok(SignedTransaction {
            request: self.request,
            signature,
            raw,
            hash,
        })
    }
}

/// One-shot path: sign a request with the sponsor's key and encode it.
pub fn sign_and_encode(
    request: Eip7702TransactionRequest,
    sponsor: &KeySigner,
) -> Result<SignedTransaction> {
    let mut tx = SetCodeTransaction::new(request);
    tx.sign(sponsor)?;
    tx.into_signed()
}

/// Submit a signed transaction's wire bytes through a node provider.
///
/// Nonce rejections surface as [`sponsor_provider::ProviderError::StaleNonce`];
/// retrying requires fresh chain state and is left to the caller.
pub async fn submit<P: EvmProvider>(provider: &P, tx: &SignedTransaction) -> Result<B256> {
    let tx_hash = provider.send_raw_transaction(tx.raw().clone()).await?;
    tracing::info!(%tx_hash, "submitted set-code transaction");
    Ok(tx_hash)
}

/// A fully signed set-code transaction, ready for submission. Terminal:
/// never mutated, only transmitted.
#[derive(Clone, Debug)]
pub struct SignedTransaction {
    request: Eip7702TransactionRequest,
    signature: SignatureParts,
    raw: Bytes,
    hash: B256,
}

impl SignedTransaction {
    /// The request this transaction was built from.
    pub fn request(&self) -> &Eip7702TransactionRequest {
        &self.request
    }

    /// The sponsor's signature.
    pub fn signature(&self) -> &SignatureParts {
        &self.signature
    }

    /// The wire bytes to submit.
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    /// The transaction hash (keccak256 of the wire bytes).
    pub fn tx_hash(&self) -> B256 {
        self.hash
    }
}
