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

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// The argument tuple of the registry contract's
/// `sponsoredTransfer(sender, recipient, amount, nonce, v, r, s)` call.
///
/// `v` is in the 27/28 `ecrecover` convention. Anyone may submit the call
/// once the sender's signature exists; the registry enforces nonce
/// sequencing and rejects replays.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredTransferCall {
    /// The authority whose funds move.
    pub sender: Address,
    /// The transfer recipient.
    pub recipient: Address,
    /// Transfer amount, in the registry's units.
    pub amount: U256,
    /// The registry's current counter for `sender`, as embedded in the
    /// signed message.
    pub nonce: U256,
    /// Recovery id, 27 or 28.
    pub v: u8,
    /// Signature `r` scalar.
    pub r: U256,
    /// Signature `s` scalar.
    pub s: U256,
}
