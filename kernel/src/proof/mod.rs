//! Proof module: canonical JSON and domain-separated hashing.
//!
//! Used to give search traversal logs and run reports a stable digest, so
//! determinism can be checked byte-for-byte across runs and processes.

pub mod canon;
pub mod hash;
