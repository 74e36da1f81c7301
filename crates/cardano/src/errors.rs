//! Error types, one per layer.

use std::convert::Infallible;

use coins_core::enc::EncodingError;
use thiserror::Error;

use crate::{keys::PublicKeyType, payload::Kind};

/// Errors produced while validating a binary Shelley payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Payload must be 33 or 65 bytes
    #[error("Payload must be 33 or 65 bytes. Got {0}")]
    BadLength(usize),

    /// Tag byte carries a kind outside the known set
    #[error("Unknown address kind {0}")]
    BadKind(u8),

    /// Group addresses carry two keys, every other kind carries one
    #[error("Kind {kind:?} does not match a {len}-byte payload")]
    LengthKindMismatch {
        /// The kind read from the tag byte
        kind: Kind,
        /// The payload length
        len: usize,
    },
}

/// Type alias for payload errors
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Errors produced while probing a string for the current address format
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Text codec rejected the string
    #[error("Bad bech32 encoding: {0}")]
    BadEncoding(EncodingError),

    /// Regrouping left non-zero padding bits
    #[error("Bad bit packing: {0}")]
    BadBitPacking(EncodingError),

    /// The decoded bytes are not a valid payload
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Type alias for decode errors
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors produced while parsing a legacy (Byron) address
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LegacyError {
    /// Not valid base58
    #[error(transparent)]
    B58Error(#[from] EncodingError),

    /// CBOR could not be decoded
    #[error("CBOR error: {0}")]
    CborError(String),

    /// CBOR decoded, but not into the expected structure
    #[error("Malformed legacy address: {0}")]
    BadStructure(&'static str),

    /// CRC-32 over the inner payload does not match
    #[error("Checksum mismatch. Got {got:#010x} expected {expected:#010x}")]
    BadChecksum {
        /// The checksum carried by the address
        got: u32,
        /// The checksum computed over the payload
        expected: u32,
    },

    /// The bytes are not the canonical encoding of the address
    #[error("Non-canonical legacy address encoding")]
    NonCanonical,
}

impl From<minicbor::decode::Error> for LegacyError {
    fn from(e: minicbor::decode::Error) -> Self {
        LegacyError::CborError(e.to_string())
    }
}

impl From<minicbor::encode::Error<Infallible>> for LegacyError {
    fn from(e: minicbor::encode::Error<Infallible>) -> Self {
        LegacyError::CborError(e.to_string())
    }
}

/// Type alias for legacy address errors
pub type LegacyResult<T> = Result<T, LegacyError>;

/// Errors produced when building a public key
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Byte length does not match the key type
    #[error("{key_type:?} keys are {expected} bytes. Got {got}")]
    BadLength {
        /// The requested key type
        key_type: PublicKeyType,
        /// The length that type requires
        expected: usize,
        /// The length supplied
        got: usize,
    },
}

/// Errors surfaced by the `Address` constructors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// An address can only be built from an extended key
    #[error("Expected an Ed25519Extended public key. Got {0:?}")]
    WrongKeyType(PublicKeyType),

    /// Neither the current nor the legacy format accepted the string
    #[error("Invalid address")]
    InvalidAddress,

    /// Bubbled up from the text encoder
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Type alias for address errors
pub type AddressResult<T> = Result<T, AddressError>;
