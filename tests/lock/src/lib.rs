//! Shared helpers for the lock tests: fixture map discovery and loading.

#![forbid(unsafe_code)]

pub mod fixtures;
