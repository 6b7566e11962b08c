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

//! Key signing and recovery for Sponsor.
//!
//! [`KeySigner`] wraps a local secp256k1 key and signs 32-byte digests
//! deterministically (RFC 6979, low-s). Digest construction lives with the
//! data being signed: authorization tuples in `sponsor-types`, the relay
//! schema in [`eip712`].

use alloy_primitives::{Address, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use secrecy::{ExposeSecret, SecretString};
use sponsor_types::{Authorization, SignatureParts, SignedAuthorization};

pub mod eip712;

mod error;
pub use error::{Error, Result};

/// A local signing key for an authority or sponsor account.
///
/// Key material is taken directly; custody concerns are out of scope.
#[derive(Clone, Debug)]
pub struct KeySigner {
    inner: PrivateKeySigner,
}

impl KeySigner {
    /// Parse a signer from a hex private key string.
    pub fn from_secret_hex(private_key: &SecretString) -> Result<Self> {
        let inner = private_key
            .expose_secret()
            .parse::<PrivateKeySigner>()
            .map_err(|e| Error::InvalidKey(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Construct a signer from raw 32-byte key material.
    pub fn from_bytes(bytes: &B256) -> Result<Self> {
        let inner =
            PrivateKeySigner::from_bytes(bytes).map_err(|e| Error::InvalidKey(e.to_string()))?;
        Ok(Self { inner })
    }

    /// The account address derived from the key.
    pub fn address(&self) -> Address {
        self.inner.address()
    }

    /// Sign a 32-byte digest, returning a low-s signature with
    /// y-parity 0 or 1.
    pub fn sign_digest(&self, digest: B256) -> Result<SignatureParts> {
        let signature = self.inner.sign_hash_sync(&digest)?;
        Ok(signature.into())
    }

    /// Sign an authorization tuple as its authority.
    pub fn sign_authorization(&self, authorization: Authorization) -> Result<SignedAuthorization> {
        let signature = self.sign_digest(authorization.signing_hash())?;
        tracing::debug!(
            authority = %self.address(),
            delegate = %authorization.address,
            chain_id = authorization.chain_id,
            nonce = authorization.nonce,
            "signed authorization tuple"
        );
        Ok(authorization.into_signed(signature))
    }
}

/// Recover the address that signed `digest`.
pub fn recover(digest: B256, signature: &SignatureParts) -> Result<Address> {
    let parity = signature.parity().ok_or_else(|| {
        Error::Recovery(format!("y parity out of range: {}", signature.y_parity))
    })?;
    let signature = alloy_primitives::Signature::new(signature.r, signature.s, parity);
    Ok(signature.recover_address_from_prehash(&digest)?)
}
