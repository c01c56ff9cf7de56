//! Property-based tests for emufp-f32
//!
//! These suites quantify the adder's contract over randomly sampled
//! payloads, with the host FPU as the rounding oracle.
