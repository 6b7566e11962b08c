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

/// Error type for the builder crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Finalization was attempted without a signature over the current
    /// payload bytes, either because `sign` was never called or because a
    /// field changed after signing
    #[error("no signature for the current payload")]
    UnsignedPayload,
    /// Signer error
    #[error(transparent)]
    Signer(#[from] sponsor_signer::Error),
    /// Collaborator error
    #[error(transparent)]
    Provider(#[from] sponsor_provider::ProviderError),
    /// Other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for the builder crate
pub type Result<T> = std::result::Result<T, Error>;
