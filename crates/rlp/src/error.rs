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

/// Error type for strict RLP decoding.
///
/// Each variant names a distinct canonicality violation so that a caller can
/// tell truncation apart from malleable alternate encodings.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// Input ended before the announced payload length was consumed.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// Bytes remained after the top-level item was fully decoded.
    #[error("trailing bytes after item")]
    TrailingBytes,
    /// A single byte below 0x80 was wrapped in a short-string prefix.
    #[error("non-canonical single-byte encoding")]
    NonCanonicalSingleByte,
    /// A long-form length was used where the short form was required.
    #[error("non-canonical length prefix")]
    NonCanonicalLength,
    /// A long-form length had leading zero bytes.
    #[error("length prefix has leading zero bytes")]
    LeadingZeroLength,
}
