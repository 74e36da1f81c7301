//! The `Address` type: a Shelley address, or a legacy Byron address when the string is not
//! in the current format.

use std::{fmt, str::FromStr};

use coins_core::enc::{
    decode_bech32, decode_bech32_with_hrp, encode_bech32, regroup_strict, EncodingResult,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    errors::{AddressError, AddressResult, DecodeError, DecodeResult},
    keys::PublicKey,
    legacy::LegacyAddress,
    payload::{validate_and_extract, Discrimination, Key, ShelleyAddress, KEY_LEN},
};

/// The human-readable prefix of current-format addresses
pub const HRP: &str = "addr";

/// A Cardano address. Exactly one of the two formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// Current format
    Shelley(ShelleyAddress),
    /// Legacy format
    Legacy(LegacyAddress),
}

fn shelley_from_words(words: &[bech32::u5]) -> DecodeResult<ShelleyAddress> {
    let payload = regroup_strict(words).map_err(DecodeError::BadBitPacking)?;
    Ok(validate_and_extract(&payload)?)
}

impl Address {
    /// Try to decode `s` as a current-format address, under any prefix. Does not fall back to
    /// the legacy format.
    pub fn decode_current_format(s: &str) -> DecodeResult<ShelleyAddress> {
        let (_, words) = decode_bech32(s).map_err(DecodeError::BadEncoding)?;
        shelley_from_words(&words)
    }

    /// As `decode_current_format`, but the prefix must equal `hrp`.
    pub fn decode_current_format_with_hrp(hrp: &str, s: &str) -> DecodeResult<ShelleyAddress> {
        let words = decode_bech32_with_hrp(hrp, s).map_err(DecodeError::BadEncoding)?;
        shelley_from_words(&words)
    }

    /// Try the current format with `current`, then the legacy format.
    pub(crate) fn parse_with<F>(s: &str, current: F) -> AddressResult<Self>
    where
        F: FnOnce(&str) -> DecodeResult<ShelleyAddress>,
    {
        match current(s) {
            Ok(shelley) => return Ok(Address::Shelley(shelley)),
            Err(e) => tracing::debug!(err = %e, "Not a current-format address, trying legacy."),
        }
        match s.parse::<LegacyAddress>() {
            Ok(legacy) => Ok(Address::Legacy(legacy)),
            Err(e) => {
                tracing::debug!(err = %e, "Not a legacy address.");
                Err(AddressError::InvalidAddress)
            }
        }
    }

    /// Determine whether a string is a valid address in either format. Never errors.
    pub fn is_valid(s: &str) -> bool {
        Self::decode_current_format(s).is_ok() || LegacyAddress::is_valid(s)
    }

    /// Build a Group address from an extended public key. The first half of the key becomes
    /// the spending key, the second half the group key.
    ///
    /// The discrimination is always `Test`.
    pub fn from_public_key(key: &PublicKey) -> AddressResult<Self> {
        if !key.is_extended() {
            return Err(AddressError::WrongKeyType(key.key_type()));
        }
        let (first, second) = key.as_bytes().split_at(KEY_LEN);
        let mut key1: Key = [0u8; KEY_LEN];
        let mut group_key: Key = [0u8; KEY_LEN];
        key1.copy_from_slice(first);
        group_key.copy_from_slice(second);
        Ok(Address::Shelley(ShelleyAddress::group(
            Discrimination::Test,
            key1,
            group_key,
        )))
    }

    /// The current-format fields, if this is not a legacy address
    pub fn as_shelley(&self) -> Option<&ShelleyAddress> {
        match self {
            Address::Shelley(shelley) => Some(shelley),
            Address::Legacy(_) => None,
        }
    }

    /// The legacy address, if this is one
    pub fn as_legacy(&self) -> Option<&LegacyAddress> {
        match self {
            Address::Shelley(_) => None,
            Address::Legacy(legacy) => Some(legacy),
        }
    }

    /// True if this is a legacy address
    pub fn is_legacy(&self) -> bool {
        matches!(self, Address::Legacy(_))
    }

    /// Encode under a caller-chosen prefix. Legacy addresses ignore the prefix.
    pub fn encode_with_hrp(&self, hrp: &str) -> EncodingResult<String> {
        match self {
            Address::Shelley(shelley) => encode_bech32(hrp, &shelley.to_payload()),
            Address::Legacy(legacy) => Ok(legacy.to_text()),
        }
    }

    /// The text form. Current-format addresses use the `addr` prefix.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.encode_with_hrp(HRP).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> AddressResult<Self> {
        Self::parse_with(s, Self::decode_current_format)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> AddressResult<Self> {
        s.parse()
    }
}

impl From<ShelleyAddress> for Address {
    fn from(shelley: ShelleyAddress) -> Self {
        Address::Shelley(shelley)
    }
}

impl From<LegacyAddress> for Address {
    fn from(legacy: LegacyAddress) -> Self {
        Address::Legacy(legacy)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
