//! Returns domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived profitability and return figures for one record or one fleet
/// aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReturnsResult {
    pub equity: Decimal,
    pub asset: Decimal,
    pub revenue_monthly: Decimal,
    pub total_expense_monthly: Decimal,
    /// May be negative.
    pub net_profit_monthly: Decimal,
    pub roe_percentage: Decimal,
    pub roa_percentage: Decimal,
    pub profit_margin: Decimal,
    /// Division guards that fired during derivation, surfaced to the caller
    /// instead of being raised as errors.
    pub warnings: Vec<String>,
}

/// One record's contribution to a customer-level fleet aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FleetMember {
    pub equity: Decimal,
    pub asset: Decimal,
    pub revenue_monthly: Decimal,
    pub total_expense_monthly: Decimal,
    pub net_profit_monthly: Decimal,
}

impl From<&ReturnsResult> for FleetMember {
    fn from(result: &ReturnsResult) -> Self {
        Self {
            equity: result.equity,
            asset: result.asset,
            revenue_monthly: result.revenue_monthly,
            total_expense_monthly: result.total_expense_monthly,
            net_profit_monthly: result.net_profit_monthly,
        }
    }
}
