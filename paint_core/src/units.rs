//! # Unit Types
//!
//! Type-safe wrappers for the two quantities this engine works in. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculator only ever sees square meters and liters
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! There is deliberately no direct conversion between the two: going from
//! area to liters requires a yield rate, which is the coverage module's job.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::units::{Liters, SquareMeters};
//!
//! let area = SquareMeters(60.0);
//! let bucket = Liters(18.0);
//! assert_eq!((bucket / 2.0).value(), 9.0);
//! assert_eq!((area + SquareMeters(15.0)).value(), 75.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Paint volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

/// Implement arithmetic operations for unit types
macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(SquareMeters);
impl_arithmetic!(Liters);
