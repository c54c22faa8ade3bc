//! containers-util - seeded random workloads for container tests.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, Op};
