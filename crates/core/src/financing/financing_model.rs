//! Unit financing domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for one unit-purchase financing plan, as keyed in on the
/// unit-purchase step of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitPurchase {
    pub price_per_unit: Decimal,
    pub quantity: u32,
    /// 0..=100
    pub down_payment_percent: Decimal,
    pub financing_tenor_months: u32,
    pub interest_rate_flat_per_year: Decimal,
    pub depreciation_period_months: u32,
}

/// Derived financing figures for a unit purchase.
///
/// `total_asset == down_payment + remaining_debt` holds exactly; the debt is
/// computed by subtraction rather than a second percentage multiplication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancingResult {
    pub total_asset: Decimal,
    /// Equity portion of the purchase.
    pub down_payment: Decimal,
    /// Liability portion of the purchase.
    pub remaining_debt: Decimal,
    /// Equal principal repayment each month (flat amortization).
    pub principal_installment: Decimal,
    /// Flat interest charged on the original remaining debt.
    pub interest_per_month: Decimal,
    pub total_installment_per_month: Decimal,
    /// Straight-line depreciation of the full asset value.
    pub depreciation_per_month: Decimal,
    /// The portion that flows into monthly operating expense: depreciation
    /// plus interest. Principal repayment is a balance-sheet movement, never
    /// an expense.
    pub total_fixed_cost_from_unit: Decimal,
    /// `None` when there is no down payment to divide by.
    pub debt_to_equity_ratio: Option<Decimal>,
}
