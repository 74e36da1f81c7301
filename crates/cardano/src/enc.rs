//! Defines a parameterized encoder for Cardano networks.

use std::marker::PhantomData;

use coins_core::enc::AddressEncoder;

use crate::{
    address::Address,
    errors::{AddressError, AddressResult},
};

/// NetworkParams holds the encoding parameters for a network. Currently this is the bech32
/// human-readable prefix of current-format addresses.
pub trait NetworkParams {
    /// The BECH32 HRP. "addr" for Shelley.
    const HRP: &'static str;
}

/// The standard encoder for Cardano networks. Parameterized by a `NetworkParams` type.
/// Unlike `Address::from_str`, it rejects current-format strings under any other prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelleyEncoder<P: NetworkParams>(PhantomData<fn(P) -> P>);

impl<P: NetworkParams> AddressEncoder for ShelleyEncoder<P> {
    type Address = Address;
    type Error = AddressError;

    fn encode_address(addr: &Address) -> AddressResult<String> {
        Ok(addr.encode_with_hrp(P::HRP)?)
    }

    fn string_to_address(s: &str) -> AddressResult<Address> {
        Address::parse_with(s, |s| Address::decode_current_format_with_hrp(P::HRP, s))
    }
}

/// A param struct for Shelley addresses
#[derive(Debug, Clone)]
pub struct Shelley;

impl NetworkParams for Shelley {
    const HRP: &'static str = crate::address::HRP;
}

/// An encoder for Shelley addresses
pub type MainnetEncoder = ShelleyEncoder<Shelley>;
