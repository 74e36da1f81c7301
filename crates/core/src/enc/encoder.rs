//! The `AddressEncoder` trait implemented by each chain's address crate.

/// An AddressEncoder converts a chain's address type to and from its text form. It is
/// parameterized over network details by its implementers, and is the entry point that
/// wallet code uses when ingesting address strings.
///
/// The associated type defines what the encoder considers to be an "address."
pub trait AddressEncoder {
    /// A type representing the decoded address
    type Address;
    /// An error type that will be returned in case of encoding errors
    type Error;

    /// Encode an address as a string.
    fn encode_address(addr: &Self::Address) -> Result<String, Self::Error>;

    /// Parse a string into an address. Fails if the string is not an address on this network.
    fn string_to_address(s: &str) -> Result<Self::Address, Self::Error>;

    /// Determine whether a string is an address on this network.
    fn is_valid(s: &str) -> bool {
        Self::string_to_address(s).is_ok()
    }
}
