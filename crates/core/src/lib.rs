//! # Coins Core
//!
//! `coins-core` contains the chain-agnostic text encodings used by the
//! address crates in this workspace.
//!
//! ## Crate Layout
//!
//! ### Enc
//!
//! The enc module wraps the `bech32` and `bs58` crates behind a small API that
//! works in whole bytes. Decoding regroups bech32's 5-bit words into bytes in
//! strict mode: leftover padding bits must be zero, so every byte string has
//! exactly one accepted text form.
//!
//! #### AddressEncoder trait
//!
//! The `AddressEncoder` trait is implemented once per chain. It converts its
//! chain's address type to and from strings. Implementers pick the address
//! type and the error type, and they may override `is_valid`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod enc;

pub use enc::*;
