// gen2phy-rs/gen2phy/src/lib.rs

//! gen2phy
//!
//! Physical-layer timing and receiver front-end parameters for Gen2 RFID
//! readers (FM0 backscatter).
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod profile;
pub mod receiver;
pub mod test_support;
pub mod timing;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
