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

use serde::{Deserialize, Serialize};

/// The fee quote handed to the transaction builder, as resolved by the
/// caller's fee estimation.
///
/// Typed transactions always carry the 1559 pair on the wire, so a legacy
/// quote resolves to `max_fee = max_priority_fee = gas_price`. The builder
/// never branches on which shape the estimator produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FeePolicy {
    /// An EIP-1559 fee quote.
    Eip1559 {
        /// Maximum total fee per gas unit, in wei.
        max_fee_per_gas: u128,
        /// Maximum priority fee per gas unit, in wei.
        max_priority_fee_per_gas: u128,
    },
    /// A pre-1559 gas price quote.
    Legacy {
        /// Gas price in wei.
        gas_price: u128,
    },
}

impl FeePolicy {
    /// Collapse to the pair of fields the wire format carries.
    pub fn resolve(self) -> ResolvedFees {
        match self {
            FeePolicy::Eip1559 {
                max_fee_per_gas,
                max_priority_fee_per_gas,
            } => ResolvedFees {
                max_fee_per_gas,
                max_priority_fee_per_gas,
            },
            FeePolicy::Legacy { gas_price } => ResolvedFees {
                max_fee_per_gas: gas_price,
                max_priority_fee_per_gas: gas_price,
            },
        }
    }
}

/// The resolved `(max_fee, max_priority_fee)` pair.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFees {
    /// Maximum total fee per gas unit, in wei.
    pub max_fee_per_gas: u128,
    /// Maximum priority fee per gas unit, in wei.
    pub max_priority_fee_per_gas: u128,
}
