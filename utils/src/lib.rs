//! Helpers shared by the tests and benchmarks of the seqkit crates.

pub mod arb;
pub mod bench;
pub mod logging;
