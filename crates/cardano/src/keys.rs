//! Public key input for address construction.

use crate::errors::KeyError;

/// The type of a public key
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum PublicKeyType {
    /// 32-byte Ed25519 key
    Ed25519,
    /// 64-byte extended Ed25519 key: spending key, then chain code
    Ed25519Extended,
}

impl PublicKeyType {
    /// The byte length of keys of this type
    pub fn key_len(self) -> usize {
        match self {
            PublicKeyType::Ed25519 => 32,
            PublicKeyType::Ed25519Extended => 64,
        }
    }
}

/// Public key bytes tagged with their type. The length always matches the type.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct PublicKey {
    key_type: PublicKeyType,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Wrap key bytes. Fails if the length does not match `key_type`.
    pub fn new(bytes: &[u8], key_type: PublicKeyType) -> Result<Self, KeyError> {
        let expected = key_type.key_len();
        if bytes.len() != expected {
            return Err(KeyError::BadLength {
                key_type,
                expected,
                got: bytes.len(),
            });
        }
        Ok(Self {
            key_type,
            bytes: bytes.to_vec(),
        })
    }

    /// The key type
    pub fn key_type(&self) -> PublicKeyType {
        self.key_type
    }

    /// True if this is an extended key
    pub fn is_extended(&self) -> bool {
        self.key_type == PublicKeyType::Ed25519Extended
    }

    /// The key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
