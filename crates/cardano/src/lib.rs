//! This crate encodes and decodes Cardano addresses.
//!
//! Current-format (Shelley) addresses are bech32 over a 33- or 65-byte payload: a tag byte
//! carrying the network discrimination and the address kind, then one or two 32-byte keys.
//! Strings that do not decode as a current-format address are tried as legacy (Byron)
//! addresses, which are base58 over a checksummed CBOR envelope.
//!
//! ```
//! use coins_cardano::{Address, Kind};
//!
//! let s = "addr1qvqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqmt2x75";
//! let addr: Address = s.parse().unwrap();
//! assert_eq!(addr.as_shelley().unwrap().kind(), Kind::Single);
//! assert_eq!(addr.to_text(), s);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod address;
pub mod enc;
pub mod errors;
pub mod keys;
pub mod legacy;
pub mod payload;

pub use address::*;
pub use enc::*;
pub use errors::*;
pub use keys::*;
pub use legacy::LegacyAddress;
pub use payload::{Discrimination, Kind, ShelleyAddress};
