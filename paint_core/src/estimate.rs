//! # Purchase Estimate
//!
//! Composes the coverage functions into a single request/response operation:
//! one area in, all three purchase strategies out. This is the entry point
//! front ends call.
//!
//! Each estimate follows the engine-wide pattern:
//!
//! - [`EstimateInput`] - Input parameters (JSON-serializable)
//! - [`EstimateResult`] - All strategy results (JSON-serializable)
//! - [`estimate`] - Pure function from input to result
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use paint_core::estimate::{estimate, EstimateInput};
//!
//! let input = EstimateInput::new("Bedroom walls", 60.0);
//! let result = estimate(&input);
//!
//! println!("Need {:.1} L", result.required_liters.value());
//! println!("Cans only:  {} for R$ {:.2}", result.cans_only.count, result.cans_only.cost);
//! println!("Jugs only:  {} for R$ {:.2}", result.jugs_only.count, result.jugs_only.cost);
//! println!(
//!     "Mixed:      {} can(s) + {} jug(s) for R$ {:.2}",
//!     result.mixed.can_count, result.mixed.jug_count, result.mixed.cost
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::containers::{CAN, JUG};
use crate::coverage::{
    count_single_type, mixed_strategy, required_liters, DEFAULT_WASTE_MARGIN,
    DEFAULT_YIELD_M2_PER_LITER,
};
use crate::units::{Liters, SquareMeters};

/// Input parameters for a purchase estimate.
///
/// The area is taken as-is; a non-positive value produces a degenerate
/// (zero-count) estimate rather than an error.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Bedroom walls",
///   "area_m2": 60.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// User label for this estimate (e.g., "Bedroom walls")
    pub label: String,

    /// Surface to be painted, in square meters
    pub area_m2: f64,
}

impl EstimateInput {
    pub fn new(label: impl Into<String>, area_m2: f64) -> Self {
        EstimateInput {
            label: label.into(),
            area_m2,
        }
    }
}

/// Purchase plan using a single container type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingleTypePlan {
    /// Containers to buy
    pub count: u32,
    /// Total cost (local currency)
    pub cost: f64,
}

/// Purchase plan mixing cans and jugs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixedPlan {
    /// Cans to buy (only for volume they fully cover)
    pub can_count: u32,
    /// Jugs to buy (covering the remainder)
    pub jug_count: u32,
    /// Total cost (local currency)
    pub cost: f64,
}

/// All three purchase strategies for one request.
///
/// Every estimate carries all three plans; callers pick whichever suits them
/// (the engine does not rank them).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Bedroom walls",
///   "area_m2": 60.0,
///   "required_liters": 11.0,
///   "cans_only": { "count": 1, "cost": 80.0 },
///   "jugs_only": { "count": 4, "cost": 100.0 },
///   "mixed": { "can_count": 0, "jug_count": 4, "cost": 100.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Label echoed from the input
    pub label: String,

    /// Area echoed from the input
    pub area_m2: f64,

    /// Paint requirement after yield and margin
    pub required_liters: Liters,

    /// Strategy 1: cans only
    pub cans_only: SingleTypePlan,

    /// Strategy 2: jugs only
    pub jugs_only: SingleTypePlan,

    /// Strategy 3: cans where fully used, jugs for the remainder
    pub mixed: MixedPlan,
}

/// Compute all three purchase strategies for the given area.
///
/// Uses the fixed default yield rate and waste margin. Always returns all
/// three plans; there is no failure mode and no early termination.
pub fn estimate(input: &EstimateInput) -> EstimateResult {
    let liters = required_liters(
        SquareMeters(input.area_m2),
        DEFAULT_YIELD_M2_PER_LITER,
        DEFAULT_WASTE_MARGIN,
    );

    let (can_count, can_cost) = count_single_type(liters, &CAN);
    let (jug_count, jug_cost) = count_single_type(liters, &JUG);
    let (mix_cans, mix_jugs, mix_cost) = mixed_strategy(liters, &CAN, &JUG);

    EstimateResult {
        label: input.label.clone(),
        area_m2: input.area_m2,
        required_liters: liters,
        cans_only: SingleTypePlan {
            count: can_count,
            cost: can_cost,
        },
        jugs_only: SingleTypePlan {
            count: jug_count,
            cost: jug_cost,
        },
        mixed: MixedPlan {
            can_count: mix_cans,
            jug_count: mix_jugs,
            cost: mix_cost,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> EstimateInput {
        EstimateInput::new("Test walls", 60.0)
    }

    #[test]
    fn test_estimate_60_m2() {
        // ~11 L required
        let result = estimate(&test_input());

        assert!(result.cans_only.count == 1 || result.cans_only.count == 2);
        assert!(result.jugs_only.count > 0);
        assert!((result.required_liters.value() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_strategies_present() {
        let result = estimate(&test_input());

        // Cans-only covers the requirement on its own
        assert!(result.cans_only.count as f64 * 18.0 >= result.required_liters.value());
        // So does jugs-only
        assert!(result.jugs_only.count as f64 * 3.6 >= result.required_liters.value());
        // Mixed covers it with whole cans plus jugs for the rest
        let mixed_liters = result.mixed.can_count as f64 * 18.0 + result.mixed.jug_count as f64 * 3.6;
        assert!(mixed_liters >= result.required_liters.value());
    }

    #[test]
    fn test_costs_follow_counts() {
        let result = estimate(&test_input());

        assert_eq!(result.cans_only.cost, result.cans_only.count as f64 * 80.0);
        assert_eq!(result.jugs_only.cost, result.jugs_only.count as f64 * 25.0);
        assert_eq!(
            result.mixed.cost,
            result.mixed.can_count as f64 * 80.0 + result.mixed.jug_count as f64 * 25.0
        );
    }

    #[test]
    fn test_degenerate_area_yields_empty_plans() {
        let result = estimate(&EstimateInput::new("Nothing to paint", -10.0));

        assert!(result.required_liters.value() < 0.0);
        assert_eq!(result.cans_only.count, 0);
        assert_eq!(result.jugs_only.count, 0);
        assert_eq!(result.mixed.can_count, 0);
        assert_eq!(result.mixed.jug_count, 0);
        assert_eq!(result.mixed.cost, 0.0);
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: EstimateInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_result_serialization() {
        let result = estimate(&test_input());
        let json = serde_json::to_string_pretty(&result).unwrap();

        // Should contain key fields
        assert!(json.contains("required_liters"));
        assert!(json.contains("cans_only"));
        assert!(json.contains("jugs_only"));
        assert!(json.contains("mixed"));

        let roundtrip: EstimateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
