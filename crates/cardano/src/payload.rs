//! The binary form of a Shelley address: one tag byte followed by one or two 32-byte keys.
//!
//! The tag byte's high bit is the network discrimination, its low 7 bits the address kind.

use crate::errors::{PayloadError, PayloadResult};

/// Length of a single key in the payload
pub const KEY_LEN: usize = 32;

/// Payload length for Single, Account and Multisig addresses
pub const SINGLE_KEY_PAYLOAD_LEN: usize = 1 + KEY_LEN;

/// Payload length for Group addresses
pub const GROUP_PAYLOAD_LEN: usize = 1 + 2 * KEY_LEN;

const DISCRIMINATION_MASK: u8 = 0b1000_0000;
const KIND_MASK: u8 = 0b0111_1111;

/// A 32-byte key as carried in the payload
pub type Key = [u8; KEY_LEN];

/// Network discrimination
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Discrimination {
    /// Production network
    Production,
    /// Test network
    Test,
}

impl Discrimination {
    /// Read the discrimination from a tag byte
    pub fn from_tag(tag: u8) -> Self {
        if tag & DISCRIMINATION_MASK == 0 {
            Discrimination::Production
        } else {
            Discrimination::Test
        }
    }

    /// The tag byte bits for this discrimination
    pub fn tag_bits(self) -> u8 {
        match self {
            Discrimination::Production => 0,
            Discrimination::Test => DISCRIMINATION_MASK,
        }
    }
}

/// The address kind
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Kind {
    /// Single spending key
    Single = 3,
    /// Spending key plus group key
    Group = 4,
    /// Account key
    Account = 5,
    /// Multisig
    Multisig = 6,
}

impl Kind {
    /// The payload length this kind requires
    pub fn payload_len(self) -> usize {
        match self {
            Kind::Group => GROUP_PAYLOAD_LEN,
            Kind::Single | Kind::Account | Kind::Multisig => SINGLE_KEY_PAYLOAD_LEN,
        }
    }
}

impl TryFrom<u8> for Kind {
    type Error = PayloadError;

    fn try_from(tag: u8) -> PayloadResult<Self> {
        match tag {
            3 => Ok(Kind::Single),
            4 => Ok(Kind::Group),
            5 => Ok(Kind::Account),
            6 => Ok(Kind::Multisig),
            _ => Err(PayloadError::BadKind(tag)),
        }
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> u8 {
        kind as u8
    }
}

/// A current-format (Shelley) address. The group key is present if and only if the kind is
/// `Group`.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct ShelleyAddress {
    discrimination: Discrimination,
    kind: Kind,
    key1: Key,
    group_key: Option<Key>,
}

impl ShelleyAddress {
    /// Instantiate a new address. Fails with `LengthKindMismatch` if a group key is supplied
    /// for a non-Group kind, or omitted for a Group kind.
    pub fn new(
        discrimination: Discrimination,
        kind: Kind,
        key1: Key,
        group_key: Option<Key>,
    ) -> PayloadResult<Self> {
        let len = if group_key.is_some() {
            GROUP_PAYLOAD_LEN
        } else {
            SINGLE_KEY_PAYLOAD_LEN
        };
        if kind.payload_len() != len {
            return Err(PayloadError::LengthKindMismatch { kind, len });
        }
        Ok(Self {
            discrimination,
            kind,
            key1,
            group_key,
        })
    }

    /// Build a Group address from its two keys
    pub fn group(discrimination: Discrimination, key1: Key, group_key: Key) -> Self {
        Self {
            discrimination,
            kind: Kind::Group,
            key1,
            group_key: Some(group_key),
        }
    }

    /// The network discrimination
    pub fn discrimination(&self) -> Discrimination {
        self.discrimination
    }

    /// The address kind
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The spending key or account key
    pub fn key1(&self) -> &Key {
        &self.key1
    }

    /// The group key. `None` unless the kind is `Group`.
    pub fn group_key(&self) -> Option<&Key> {
        self.group_key.as_ref()
    }

    /// Serialize to the 33- or 65-byte payload
    pub fn to_payload(&self) -> Vec<u8> {
        serialize(
            self.discrimination,
            self.kind,
            &self.key1,
            self.group_key.as_ref(),
        )
    }
}

impl TryFrom<&[u8]> for ShelleyAddress {
    type Error = PayloadError;

    fn try_from(payload: &[u8]) -> PayloadResult<Self> {
        validate_and_extract(payload)
    }
}

fn read_key(bytes: &[u8]) -> Key {
    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(bytes);
    key
}

/// Validate a payload and extract its fields.
///
/// The length is checked first, then the kind, then the pairing of the two.
pub fn validate_and_extract(payload: &[u8]) -> PayloadResult<ShelleyAddress> {
    let len = payload.len();
    if len != SINGLE_KEY_PAYLOAD_LEN && len != GROUP_PAYLOAD_LEN {
        return Err(PayloadError::BadLength(len));
    }

    let tag = payload[0];
    let discrimination = Discrimination::from_tag(tag);
    let kind = Kind::try_from(tag & KIND_MASK)?;
    if kind.payload_len() != len {
        return Err(PayloadError::LengthKindMismatch { kind, len });
    }

    let key1 = read_key(&payload[1..SINGLE_KEY_PAYLOAD_LEN]);
    let group_key = match kind {
        Kind::Group => Some(read_key(&payload[SINGLE_KEY_PAYLOAD_LEN..GROUP_PAYLOAD_LEN])),
        Kind::Single | Kind::Account | Kind::Multisig => None,
    };

    Ok(ShelleyAddress {
        discrimination,
        kind,
        key1,
        group_key,
    })
}

/// Assemble a payload. Does not check that `group_key` agrees with `kind`.
pub fn serialize(
    discrimination: Discrimination,
    kind: Kind,
    key1: &Key,
    group_key: Option<&Key>,
) -> Vec<u8> {
    let mut payload = Vec::with_capacity(GROUP_PAYLOAD_LEN);
    payload.push(u8::from(kind) | discrimination.tag_bits());
    payload.extend_from_slice(key1);
    if let Some(group_key) = group_key {
        payload.extend_from_slice(group_key);
    }
    payload
}
