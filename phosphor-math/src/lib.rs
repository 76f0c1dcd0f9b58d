//! FPU-free numerics for the Phosphor display subsystem
//!
//! Everything the rendering core needs that would normally come from a
//! floating-point math library, reimplemented over integers:
//!
//! - Q2.30 fixed-point values ([`Q30`])
//! - CORDIC sine and cosine over an [`Angle`] type
//! - Integer square root and integer-exponent power
//!
//! The geometry engine leans on these for ellipse and arc sampling and
//! for rotating points, so the rounding behavior here is part of the
//! rendering contract: every conversion truncates toward zero.

#![no_std]
#![deny(unsafe_code)]

pub mod arith;
pub mod cordic;
pub mod fixed;

// Re-export key items at crate root for convenience
pub use arith::{ipow, isqrt};
pub use cordic::{cos, sin, Angle};
pub use fixed::Q30;
