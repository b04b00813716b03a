// tests/support/mod.rs
// Shared fixtures for the integration test binaries. Individual test crates
// use different subsets, so allow dead_code at the module level.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
