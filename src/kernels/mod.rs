//! This module collects the pure, stateless kernels the block decoders are built
//! from. None of them know about block headers; they operate on single values or
//! on raw payload bytes.

/// Sign-folding of deltas.
pub mod zigzag;

/// Variable-length unsigned integers (run-length fields).
pub mod leb128;

/// Word-oriented bit-unpacking (packed delta words).
pub mod simple8b;
