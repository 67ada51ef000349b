use log::debug;
use rust_decimal::Decimal;

use crate::constants::{DECIMAL_PRECISION, HUNDRED, MONTHS_PER_YEAR};
use crate::errors::{Result, Violations};

use super::financing_model::{FinancingResult, UnitPurchase};

/// Derives the financing figures for a unit purchase: flat amortization,
/// flat interest on the original debt, straight-line depreciation.
#[derive(Debug, Clone, Default)]
pub struct FinancingService;

impl FinancingService {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, input: &UnitPurchase) -> Result<FinancingResult> {
        Self::validate(input)?;

        let quantity = Decimal::from(input.quantity);
        let total_asset = input.price_per_unit * quantity;

        let down_payment =
            (total_asset * input.down_payment_percent / HUNDRED).round_dp(DECIMAL_PRECISION);
        // Subtraction keeps total_asset == down_payment + remaining_debt exact.
        let remaining_debt = total_asset - down_payment;

        let tenor = Decimal::from(input.financing_tenor_months);
        let principal_installment = (remaining_debt / tenor).round_dp(DECIMAL_PRECISION);

        // Flat-rate financing: interest is charged on the original remaining
        // debt for the whole tenor, not recalculated on the declining balance.
        let interest_per_month = (remaining_debt * input.interest_rate_flat_per_year
            / HUNDRED
            / MONTHS_PER_YEAR)
            .round_dp(DECIMAL_PRECISION);

        let total_installment_per_month = principal_installment + interest_per_month;

        let depreciation_per_month = (total_asset
            / Decimal::from(input.depreciation_period_months))
        .round_dp(DECIMAL_PRECISION);

        let total_fixed_cost_from_unit = depreciation_per_month + interest_per_month;

        let debt_to_equity_ratio = if down_payment.is_zero() {
            // Unbounded ratio: fully financed purchase has no equity to divide by.
            None
        } else {
            Some((remaining_debt / down_payment).round_dp(DECIMAL_PRECISION))
        };

        debug!(
            "Financing computed: asset={}, dp={}, debt={}, installment/month={}",
            total_asset, down_payment, remaining_debt, total_installment_per_month
        );

        Ok(FinancingResult {
            total_asset,
            down_payment,
            remaining_debt,
            principal_installment,
            interest_per_month,
            total_installment_per_month,
            depreciation_per_month,
            total_fixed_cost_from_unit,
            debt_to_equity_ratio,
        })
    }

    fn validate(input: &UnitPurchase) -> Result<()> {
        let mut violations = Violations::new();

        if input.quantity < 1 {
            violations.push("quantity", "must be at least 1");
        }
        if input.financing_tenor_months < 1 {
            violations.push("financing_tenor_months", "must be at least 1");
        }
        if input.depreciation_period_months < 1 {
            violations.push("depreciation_period_months", "must be at least 1");
        }
        if input.down_payment_percent < Decimal::ZERO || input.down_payment_percent > HUNDRED {
            violations.push("down_payment_percent", "must be between 0 and 100");
        }
        if input.price_per_unit < Decimal::ZERO {
            violations.push("price_per_unit", "must not be negative");
        }
        if input.interest_rate_flat_per_year < Decimal::ZERO {
            violations.push("interest_rate_flat_per_year", "must not be negative");
        }

        violations.into_result()
    }
}
