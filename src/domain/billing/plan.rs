//! Plan value object - a remotely defined billing tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A billing plan as reported by the payment processor.
///
/// Plans are snapshots: they are fetched fresh for every lookup and never
/// stored locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Processor-side plan identifier.
    pub id: String,

    /// Base price before tax, in the plan's currency.
    pub price: Decimal,
}

impl Plan {
    pub fn new(id: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            price,
        }
    }

    /// Exact, case-sensitive identifier comparison.
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn has_id_is_exact_match() {
        let plan = Plan::new("monthly-basic", Decimal::from(10));
        assert!(plan.has_id("monthly-basic"));
        assert!(!plan.has_id("Monthly-Basic"));
        assert!(!plan.has_id("monthly"));
    }

    #[test]
    fn price_serializes_as_string() {
        let plan = Plan::new("pro", Decimal::from_str("19.99").unwrap());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["price"], "19.99");
        assert_eq!(json["id"], "pro");
    }
}
