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

//! Sponsor common types: EIP-7702 authorizations, set-code transaction
//! requests, fee policies, and signature records.

mod authorization;
pub use authorization::{Authorization, SignedAuthorization, SET_CODE_AUTH_MAGIC};

mod fees;
pub use fees::{FeePolicy, ResolvedFees};

mod signature;
pub use signature::SignatureParts;

mod sponsored;
pub use sponsored::SponsoredTransferCall;

mod transaction;
pub use transaction::{AccessListEntry, Eip7702TransactionRequest, SET_CODE_TX_TYPE};
