//! # paint_core - Paint Coverage Calculation Engine
//!
//! `paint_core` is the computational heart of Paintcalc, turning a wall area
//! into paint-container purchase plans with a clean, LLM-friendly API. All
//! inputs and outputs are JSON-serializable, making it easy to drive from a
//! console front end, an AI assistant, or any other caller.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Permissive**: Degenerate inputs (zero or negative area) propagate
//!   instead of being rejected; parsing problems belong to the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use paint_core::estimate::{estimate, EstimateInput};
//!
//! // 60 m² at the default yield (6 m²/L) and 10% margin needs ~11 L
//! let input = EstimateInput::new("Living room", 60.0);
//! let result = estimate(&input);
//!
//! assert_eq!(result.cans_only.count, 1);
//! assert!(result.jugs_only.count > 0);
//!
//! // Serialize for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`containers`] - Container-type definitions and the fixed can/jug data
//! - [`coverage`] - Area-to-liters and liters-to-purchase-plan functions
//! - [`estimate`] - Orchestrates all three purchase strategies per request
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod containers;
pub mod coverage;
pub mod errors;
pub mod estimate;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use containers::{ContainerKind, ContainerType, CAN, JUG};
pub use errors::{PaintError, PaintResult};
pub use estimate::{estimate, EstimateInput, EstimateResult};
