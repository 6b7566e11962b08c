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

/// Error enumeration for the provider traits
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// JSON-RPC error reported by the node
    #[error("rpc error: {0}")]
    Rpc(String),
    /// The node rejected a transaction or call for a nonce mismatch.
    /// Implementations map the node's rejection onto this variant; it is
    /// never generated locally and is propagated to the caller unchanged.
    #[error("stale nonce")]
    StaleNonce,
    /// Contract revert or ABI mismatch
    #[error("contract error: {0}")]
    Contract(String),
    /// Internal errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for the provider traits
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
