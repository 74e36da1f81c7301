//! Contains simplified access to the `bech32` and `base58` encoders/decoders used for
//! addresses. Also defines common encoder errors.

use bech32::{
    decode as b32_decode, encode as b32_encode, u5, Error as BechError, FromBase32, ToBase32,
    Variant,
};

use thiserror::Error;

/// Errors that can be returned by the text encoders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Bech32 HRP does not match the expected network.
    #[error("Bech32 HRP does not match. \nGot {:?} expected {:?} Hint: Is this address for another network?", got, expected)]
    WrongHRP {
        /// The actual HRP.
        got: String,
        /// The expected HRP.
        expected: String,
    },

    /// String carries a Bech32m checksum where Bech32 was expected
    #[error("Expected a Bech32 checksum, found Bech32m")]
    WrongVariant,

    /// Bubbled up error from bech32 library
    #[error("BechError: {:?}", .0)]
    BechError(#[from] BechError),

    /// Bubbled up error from bs58 library
    #[error(transparent)]
    B58Error(#[from] bs58::decode::Error),
}

/// A simple result type alias
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Decode a bech32 string into its lower-cased HRP and its 5-bit words. Verifies the
/// checksum. Any HRP is accepted.
pub fn decode_bech32(s: &str) -> EncodingResult<(String, Vec<u5>)> {
    let (hrp, data, variant) = b32_decode(s)?;
    if variant != Variant::Bech32 {
        return Err(EncodingError::WrongVariant);
    }
    Ok((hrp, data))
}

/// Decode a bech32 string. Caller specifies an expected HRP. If a different HRP is found,
/// returns `WrongHRP`.
pub fn decode_bech32_with_hrp(expected_hrp: &str, s: &str) -> EncodingResult<Vec<u5>> {
    let (hrp, data) = decode_bech32(s)?;
    if hrp != expected_hrp {
        return Err(EncodingError::WrongHRP {
            got: hrp,
            expected: expected_hrp.to_owned(),
        });
    }
    Ok(data)
}

/// Regroup 5-bit words into bytes. Leftover bits must be fewer than 5 and all zero,
/// otherwise returns `InvalidPadding`.
pub fn regroup_strict(words: &[u5]) -> EncodingResult<Vec<u8>> {
    Ok(Vec::<u8>::from_base32(words)?)
}

/// Regroup bytes into 5-bit words, zero-padding the final word.
pub fn regroup_padded(bytes: &[u8]) -> Vec<u5> {
    bytes.to_base32()
}

/// Encode a byte vector to bech32 under `hrp`.
pub fn encode_bech32(hrp: &str, v: &[u8]) -> EncodingResult<String> {
    b32_encode(hrp, regroup_padded(v), Variant::Bech32).map_err(Into::into)
}

/// Decode a base58 string (Bitcoin alphabet) to bytes. No checksum is applied.
pub fn decode_base58(s: &str) -> EncodingResult<Vec<u8>> {
    Ok(bs58::decode(s).into_vec()?)
}

/// Encode bytes as a base58 string (Bitcoin alphabet). No checksum is applied.
pub fn encode_base58(v: &[u8]) -> String {
    bs58::encode(v).into_string()
}
