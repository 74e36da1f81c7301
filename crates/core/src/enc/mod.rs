//! Text encodings shared by the address crates.

pub mod bases;
pub mod encoder;

pub use bases::*;
pub use encoder::*;
