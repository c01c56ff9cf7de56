//! Bit-exact IEEE-754 binary32 addition emulated in integer arithmetic.
//!
//! This crate computes the sum of two binary32 values without touching the
//! host FPU: alignment, magnitude arithmetic, renormalization, and
//! round-to-nearest-ties-to-even all run on plain `u32` operations. The
//! result is not merely numerically right, it is the exact payload
//! conforming hardware produces, including the sign of zero, subnormal
//! handling, and rounding at the normal/subnormal boundary. Every NaN
//! collapses to the single canonical quiet NaN [`Float32::QUIET_NAN`].
//!
//! # Examples
//!
//! ```
//! use emufp_f32::{add, Float32};
//!
//! let x = Float32::from_f32(1.0);
//! let y = Float32::from_f32(10.0);
//! assert_eq!(add(x, y).to_bits(), Float32::from_f32(11.0).to_bits());
//!
//! // Subnormals round exactly as hardware does.
//! let tiny = Float32::new(0x0000_0001);
//! assert_eq!(add(tiny, tiny).to_bits(), 0x0000_0002);
//! ```
//!
//! The host's native `f32` appears in exactly one place: the lossless
//! bit-reinterpretation bridge [`Float32::from_f32`] / [`Float32::to_f32`]
//! at the external boundary.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod add;
pub mod float32;

pub use add::add;
pub use float32::{Class, Float32, ParseFloat32Error, ParseResult};
