//! # Coverage Calculator
//!
//! Pure functions converting a wall area into required paint liters, and
//! liters into container counts and costs for each purchasing strategy.
//!
//! ## Assumptions
//!
//! - One coat at a fixed yield rate (square meters covered per liter)
//! - A fractional waste margin on top of the raw requirement
//! - Containers are bought whole; partial containers do not exist
//! - No input validation: zero or negative area flows through as zero or
//!   negative liters, and counts saturate at zero rather than erroring
//!
//! ## Example
//!
//! ```rust
//! use paint_core::containers::{CAN, JUG};
//! use paint_core::coverage::{
//!     count_single_type, mixed_strategy, required_liters,
//!     DEFAULT_WASTE_MARGIN, DEFAULT_YIELD_M2_PER_LITER,
//! };
//! use paint_core::units::SquareMeters;
//!
//! let liters = required_liters(
//!     SquareMeters(60.0),
//!     DEFAULT_YIELD_M2_PER_LITER,
//!     DEFAULT_WASTE_MARGIN,
//! );
//! assert!((liters.value() - 11.0).abs() < 1e-9);
//!
//! let (cans, cost) = count_single_type(liters, &CAN);
//! assert_eq!((cans, cost), (1, 80.0));
//!
//! let (cans, jugs, cost) = mixed_strategy(liters, &CAN, &JUG);
//! assert_eq!((cans, jugs), (0, 4));
//! assert_eq!(cost, 100.0);
//! ```

use crate::containers::ContainerType;
use crate::units::{Liters, SquareMeters};

/// Default yield rate: square meters covered by one liter of paint
pub const DEFAULT_YIELD_M2_PER_LITER: f64 = 6.0;

/// Default waste margin: fractional safety buffer on the raw requirement
pub const DEFAULT_WASTE_MARGIN: f64 = 0.1;

/// Liters of paint needed to cover `area`, including the waste margin.
///
/// Computes `(area / yield_m2_per_liter) * (1 + margin)`. The result is
/// propagated as-is: a zero or negative area yields zero or negative liters.
pub fn required_liters(area: SquareMeters, yield_m2_per_liter: f64, margin: f64) -> Liters {
    Liters((area.value() / yield_m2_per_liter) * (1.0 + margin))
}

/// Containers and cost to cover `liters` using a single container type.
///
/// The count is the smallest integer whose total capacity reaches `liters`
/// (ceiling division); the cost is `count * unit_price`. Negative liters
/// saturate to a zero count.
pub fn count_single_type(liters: Liters, container: &ContainerType) -> (u32, f64) {
    let count = (liters.value() / container.capacity.value()).ceil() as u32;
    (count, count as f64 * container.unit_price)
}

/// Containers and cost to cover `liters` using cans where they are fully
/// used, then jugs for the remainder.
///
/// Cans are only bought for volume they fully cover (floor division); the
/// leftover volume is covered by jugs (ceiling division). Cost sums both
/// container types.
pub fn mixed_strategy(liters: Liters, can: &ContainerType, jug: &ContainerType) -> (u32, u32, f64) {
    let can_count = (liters.value() / can.capacity.value()).floor() as u32;
    let remainder = liters - can.capacity * can_count as f64;
    let jug_count = (remainder.value() / jug.capacity.value()).ceil() as u32;
    let cost = can_count as f64 * can.unit_price + jug_count as f64 * jug.unit_price;
    (can_count, jug_count, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{CAN, JUG};

    #[test]
    fn test_required_liters_default_rates() {
        // (60 / 6) * 1.1 = 11
        let liters = required_liters(SquareMeters(60.0), DEFAULT_YIELD_M2_PER_LITER, DEFAULT_WASTE_MARGIN);
        assert!((liters.value() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_required_liters_propagates_degenerate_area() {
        let zero = required_liters(SquareMeters(0.0), DEFAULT_YIELD_M2_PER_LITER, DEFAULT_WASTE_MARGIN);
        assert_eq!(zero.value(), 0.0);

        let negative = required_liters(SquareMeters(-30.0), DEFAULT_YIELD_M2_PER_LITER, DEFAULT_WASTE_MARGIN);
        assert!(negative.value() < 0.0);
    }

    #[test]
    fn test_count_single_type_cans() {
        // 54 / 18 = 3 exactly
        let (count, cost) = count_single_type(Liters(54.0), &CAN);
        assert_eq!(count, 3);
        assert_eq!(cost, 240.0);
    }

    #[test]
    fn test_count_single_type_jugs() {
        // 10 / 3.6 = 2.78 -> 3
        let (count, cost) = count_single_type(Liters(10.0), &JUG);
        assert_eq!(count, 3);
        assert_eq!(cost, 75.0);
    }

    #[test]
    fn test_count_single_type_ceiling_bounds() {
        let liters = Liters(40.0);
        let (count, _) = count_single_type(liters, &CAN);
        let capacity = CAN.capacity.value();

        // Smallest count whose capacity covers the requirement
        assert!(count as f64 * capacity >= liters.value());
        assert!((count - 1) as f64 * capacity < liters.value());
    }

    #[test]
    fn test_count_single_type_negative_liters_saturates() {
        let (count, cost) = count_single_type(Liters(-5.0), &CAN);
        assert_eq!(count, 0);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_mixed_strategy() {
        // 50 L: 2 full cans (36 L), remainder 14 L -> 4 jugs
        let (cans, jugs, cost) = mixed_strategy(Liters(50.0), &CAN, &JUG);
        assert_eq!(cans, 2);
        assert_eq!(jugs, 4);
        assert_eq!(cost, 2.0 * 80.0 + 4.0 * 25.0);
    }

    #[test]
    fn test_mixed_strategy_floor_and_remainder() {
        let liters = Liters(47.0);
        let (cans, jugs, _) = mixed_strategy(liters, &CAN, &JUG);

        // Cans cover only whole-can volume
        assert_eq!(cans as f64, (liters.value() / CAN.capacity.value()).floor());

        // Jugs cover the remainder by ceiling division
        let remainder = liters.value() - cans as f64 * CAN.capacity.value();
        assert_eq!(jugs as f64, (remainder / JUG.capacity.value()).ceil());
    }

    #[test]
    fn test_mixed_strategy_exact_fit_needs_no_jugs() {
        let (cans, jugs, cost) = mixed_strategy(Liters(36.0), &CAN, &JUG);
        assert_eq!(cans, 2);
        assert_eq!(jugs, 0);
        assert_eq!(cost, 160.0);
    }

    #[test]
    fn test_costs_non_negative() {
        for liters in [0.0, 1.0, 3.6, 11.0, 18.0, 100.0] {
            let (_, can_cost) = count_single_type(Liters(liters), &CAN);
            let (_, jug_cost) = count_single_type(Liters(liters), &JUG);
            let (_, _, mix_cost) = mixed_strategy(Liters(liters), &CAN, &JUG);
            assert!(can_cost >= 0.0);
            assert!(jug_cost >= 0.0);
            assert!(mix_cost >= 0.0);
        }
    }
}
