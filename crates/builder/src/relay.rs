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

//! The signature-based meta-transaction relay layered on the registry
//! contract: an authority signs a transfer under the registry's EIP-712
//! domain and anyone may submit it.

use alloy_primitives::{Address, B256, U256};
use sponsor_provider::SponsorRegistry;
use sponsor_signer::{
    eip712::{self, Eip712Domain, SponsoredTransferMessage},
    KeySigner,
};
use sponsor_types::SponsoredTransferCall;

use crate::Result;

/// Builds signed sponsored-transfer calls against one registry domain.
///
/// The registry's counter is read fresh for every call and never cached;
/// sequencing concurrent transfers for one sender is the caller's
/// responsibility, exactly as with account nonces.
#[derive(Debug)]
pub struct SponsoredTransferBuilder<R> {
    domain: Eip712Domain,
    registry: R,
}

impl<R: SponsorRegistry> SponsoredTransferBuilder<R> {
    /// Bind a builder to a registry contract and its signing domain.
    pub fn new(domain: Eip712Domain, registry: R) -> Self {
        Self { domain, registry }
    }

    /// The domain messages are signed under.
    pub fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// Read the sender's current counter, sign the transfer message, and
    /// return the call tuple for submission.
    pub async fn prepare(
        &self,
        sender: &KeySigner,
        recipient: Address,
        amount: U256,
    ) -> Result<SponsoredTransferCall> {
        let nonce = self.registry.nonces(sender.address()).await?;
        let message = SponsoredTransferMessage {
            sender: sender.address(),
            recipient,
            amount,
            nonce,
        };
        let digest = eip712::signing_digest(&self.domain, &message);
        let signature = sender.sign_digest(digest)?;

        // Self-verify before handing the tuple to a third-party submitter.
        let recovered = sponsor_signer::recover(digest, &signature)?;
        if recovered != sender.address() {
            return Err(sponsor_signer::Error::Recovery(format!(
                "recovered {recovered}, expected sender {}",
                sender.address()
            ))
            .into());
        }

        tracing::debug!(
            sender = %message.sender,
            recipient = %message.recipient,
            %amount,
            %nonce,
            "prepared sponsored transfer"
        );
        Ok(SponsoredTransferCall {
            sender: message.sender,
            recipient,
            amount,
            nonce,
            v: signature.v_legacy(),
            r: signature.r,
            s: signature.s,
        })
    }

    /// Submit a prepared call through the registry.
    pub async fn submit(&self, call: SponsoredTransferCall) -> Result<B256> {
        let tx_hash = self.registry.sponsored_transfer(call).await?;
        tracing::info!(sender = %call.sender, %tx_hash, "submitted sponsored transfer");
        Ok(tx_hash)
    }
}
