// tests/support/mod.rs
// Shared helpers and mocks for the integration test binaries. Individual test
// crates use different subsets, so dead_code warnings are allowed here.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
