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

//! Trait surface for the external collaborators the builders read from and
//! submit through: a node RPC endpoint and the deployed sponsor registry
//! contract. Concrete RPC plumbing lives with the embedding application;
//! the builders only depend on these traits.

use alloy_primitives::{Address, Bytes, B256, U256};
#[cfg(feature = "test-utils")]
use mockall::automock;
use sponsor_types::SponsoredTransferCall;

mod error;
pub use error::{ProviderError, ProviderResult};

/// Chain state reads and raw submission against a node.
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait EvmProvider: Send + Sync {
    /// Get the chain id the node reports
    async fn chain_id(&self) -> ProviderResult<u64>;

    /// Get the nonce/transaction count of an address
    async fn get_transaction_count(&self, address: Address) -> ProviderResult<u64>;

    /// Get the balance of an address
    async fn get_balance(&self, address: Address) -> ProviderResult<U256>;

    /// Submit a fully signed transaction, returning its hash.
    ///
    /// Implementations surface nonce rejections as
    /// [`ProviderError::StaleNonce`].
    async fn send_raw_transaction(&self, raw: Bytes) -> ProviderResult<B256>;
}

/// The deployed sponsor registry contract.
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait SponsorRegistry: Send + Sync {
    /// Read the current sponsored-transfer counter for an account
    async fn nonces(&self, account: Address) -> ProviderResult<U256>;

    /// Read the cumulative gas the registry has sponsored for an account
    async fn gas_spent(&self, account: Address) -> ProviderResult<U256>;

    /// Execute a signed sponsored transfer; callable by anyone holding a
    /// valid signature
    async fn sponsored_transfer(&self, call: SponsoredTransferCall) -> ProviderResult<B256>;
}
