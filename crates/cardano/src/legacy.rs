//! Legacy (Byron) addresses.
//!
//! The text form is base58 over the CBOR value `[#6.24(bytes), crc32]`. The tagged byte
//! string holds `[root, attributes, type]`, and the CRC-32 (ISO-HDLC) covers those bytes.

use std::{fmt, str::FromStr};

use coins_core::enc::{decode_base58, encode_base58};
use crc::{Crc, CRC_32_ISO_HDLC};
use minicbor::{
    data::{IanaTag, Type},
    Decoder, Encoder,
};

use crate::errors::{LegacyError, LegacyResult};

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Length of the address root hash
pub const ROOT_LEN: usize = 28;

/// Longest text form accepted before base58 decoding. Real Byron addresses are well under
/// 200 characters.
pub const MAX_LEGACY_LEN: usize = 512;

/// A Byron-era address. Holds the exact bytes it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegacyAddress {
    raw: Vec<u8>,
    payload: Vec<u8>,
    crc: u32,
    root: [u8; ROOT_LEN],
    address_type: u64,
}

fn expect_end(dec: &Decoder<'_>, len: usize) -> LegacyResult<()> {
    if dec.position() != len {
        return Err(LegacyError::BadStructure("trailing bytes"));
    }
    Ok(())
}

fn encode_outer(payload: &[u8], crc: u32) -> LegacyResult<Vec<u8>> {
    let mut enc = Encoder::new(Vec::new());
    enc.array(2)?.tag(IanaTag::Cbor)?.bytes(payload)?.u32(crc)?;
    Ok(enc.into_writer())
}

/// Parse `[root, attributes, type]`. The attributes map is skipped.
fn parse_inner(payload: &[u8]) -> LegacyResult<([u8; ROOT_LEN], u64)> {
    let mut dec = Decoder::new(payload);
    if dec.array()? != Some(3) {
        return Err(LegacyError::BadStructure("expected a 3-element address"));
    }

    let root_bytes = dec.bytes()?;
    if root_bytes.len() != ROOT_LEN {
        return Err(LegacyError::BadStructure("root must be 28 bytes"));
    }
    let mut root = [0u8; ROOT_LEN];
    root.copy_from_slice(root_bytes);

    match dec.datatype()? {
        Type::Map | Type::MapIndef => dec.skip()?,
        _ => return Err(LegacyError::BadStructure("attributes must be a map")),
    }

    let address_type = dec.u64()?;
    expect_end(&dec, payload.len())?;
    Ok((root, address_type))
}

impl LegacyAddress {
    /// Build an address around an inner payload, computing its checksum.
    pub fn from_payload(payload: Vec<u8>) -> LegacyResult<Self> {
        let (root, address_type) = parse_inner(&payload)?;
        let crc = CRC32.checksum(&payload);
        let raw = encode_outer(&payload, crc)?;
        Ok(Self {
            raw,
            payload,
            crc,
            root,
            address_type,
        })
    }

    /// Parse and validate the outer CBOR bytes of an address.
    pub fn from_bytes(raw: &[u8]) -> LegacyResult<Self> {
        let mut dec = Decoder::new(raw);
        if dec.array()? != Some(2) {
            return Err(LegacyError::BadStructure("expected a 2-element envelope"));
        }
        if dec.tag()? != IanaTag::Cbor.into() {
            return Err(LegacyError::BadStructure("expected tag 24"));
        }
        let payload = dec.bytes()?.to_vec();
        let got = dec.u32()?;
        expect_end(&dec, raw.len())?;

        let expected = CRC32.checksum(&payload);
        if got != expected {
            return Err(LegacyError::BadChecksum { got, expected });
        }

        let address = Self::from_payload(payload)?;
        if address.raw != raw {
            return Err(LegacyError::NonCanonical);
        }
        Ok(address)
    }

    /// Determine whether a string is a well-formed legacy address
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }

    /// The base58 text form
    pub fn to_text(&self) -> String {
        encode_base58(&self.raw)
    }

    /// The outer CBOR bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// The inner CBOR bytes covered by the checksum
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The CRC-32 of the payload
    pub fn crc(&self) -> u32 {
        self.crc
    }

    /// The 28-byte address root
    pub fn root(&self) -> &[u8; ROOT_LEN] {
        &self.root
    }

    /// The address type. 0 for public key addresses.
    pub fn address_type(&self) -> u64 {
        self.address_type
    }
}

impl FromStr for LegacyAddress {
    type Err = LegacyError;

    fn from_str(s: &str) -> LegacyResult<Self> {
        if s.len() > MAX_LEGACY_LEN {
            return Err(LegacyError::BadStructure("address too long"));
        }
        let raw = decode_base58(s)?;
        Self::from_bytes(&raw)
    }
}

impl fmt::Display for LegacyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
