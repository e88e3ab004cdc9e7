//! Integration tests for pixkit crates.
//!
//! End-to-end checks across decode, filters, encode and point clouds.

#[cfg(test)]
mod golden;
