//! This file is the root of the `tsmint` crate: the read-side decoder for
//! compressed TSM integer blocks.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library.
//! 2.  Re-exporting the small public surface callers need.
//!
//! # Example
//! ```
//! let block = [0x20, 0, 0, 0, 0, 0, 0, 0, 20, 5, 2]; // RLE: first 10, delta -3, repeat 3
//! let mut values = Vec::new();
//! tsmint::decode_all(&block, &mut values).unwrap();
//! assert_eq!(values, vec![10, 7, 4]);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod block;
pub mod config;
pub mod error;
pub mod kernels;
pub mod traits;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use block::{decode_all, BlockStats, Encoding, IntegerBlockDecoder};
pub use config::DecoderConfig;
pub use error::{TsmIntError, UnpackError};
pub use kernels::simple8b::Simple8b;
pub use traits::{WordUnpacker, MAX_VALUES_PER_WORD};
