//! # Container Database
//!
//! Purchasable paint container definitions. The product line is fixed: an
//! 18 L can and a 3.6 L jug, each with a flat unit price in local currency.
//! Both are process-wide constants; nothing here mutates after creation.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::containers::{ContainerKind, CAN, JUG};
//!
//! assert_eq!(CAN.capacity.value(), 18.0);
//! assert_eq!(JUG.unit_price, 25.0);
//!
//! // Resolve a kind from a free-form string
//! let kind = ContainerKind::from_str_flexible("can").unwrap();
//! assert_eq!(kind.spec(), CAN);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PaintError, PaintResult};
use crate::units::Liters;

/// Container kinds in the product line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    /// 18 L can
    Can,
    /// 3.6 L jug
    Jug,
}

impl ContainerKind {
    /// All container kinds for UI selection
    pub const ALL: [ContainerKind; 2] = [ContainerKind::Can, ContainerKind::Jug];

    /// Get the short code string (e.g., "CAN")
    pub fn code(&self) -> &'static str {
        match self {
            ContainerKind::Can => "CAN",
            ContainerKind::Jug => "JUG",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> PaintResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "CAN" | "CANS" | "LATA" => Ok(ContainerKind::Can),
            "JUG" | "JUGS" | "GALLON" | "GALAO" => Ok(ContainerKind::Jug),
            _ => Err(PaintError::container_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ContainerKind::Can => "18 L can",
            ContainerKind::Jug => "3.6 L jug",
        }
    }

    /// Get the fixed capacity/price record for this kind
    pub fn spec(&self) -> ContainerType {
        match self {
            ContainerKind::Can => CAN,
            ContainerKind::Jug => JUG,
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A purchasable paint container: fixed capacity and unit price.
///
/// Capacity is positive for every kind in the product line; unit price is in
/// local currency. Counts and costs derived from these records live in the
/// coverage module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerType {
    /// Which product this record describes
    pub kind: ContainerKind,

    /// Usable paint volume per container
    pub capacity: Liters,

    /// Price per container (local currency)
    pub unit_price: f64,
}

impl std::fmt::Display for ContainerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ R$ {:.2}", self.kind.display_name(), self.unit_price)
    }
}

/// The 18 L can
pub const CAN: ContainerType = ContainerType {
    kind: ContainerKind::Can,
    capacity: Liters(18.0),
    unit_price: 80.0,
};

/// The 3.6 L jug
pub const JUG: ContainerType = ContainerType {
    kind: ContainerKind::Jug,
    capacity: Liters(3.6),
    unit_price: 25.0,
};
