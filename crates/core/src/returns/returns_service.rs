use log::debug;
use rust_decimal::Decimal;

use crate::constants::{DECIMAL_PRECISION, HUNDRED};
use crate::financing::FinancingResult;

use super::returns_model::{FleetMember, ReturnsResult};

/// Derives net profit, ROE, ROA, and profit margin.
///
/// Inputs are already-validated results, so derivation is infallible: zero
/// denominators substitute 0% and surface a warning rather than failing.
#[derive(Debug, Clone, Default)]
pub struct ReturnsService;

impl ReturnsService {
    pub fn new() -> Self {
        Self
    }

    /// Returns for a single calculator record.
    pub fn compute(
        &self,
        financing: &FinancingResult,
        revenue_monthly: Decimal,
        total_expense_monthly: Decimal,
    ) -> ReturnsResult {
        Self::derive(
            financing.down_payment,
            financing.total_asset,
            revenue_monthly,
            total_expense_monthly,
        )
    }

    /// Aggregate returns across a customer's fleet.
    ///
    /// Numerators and denominators are summed first and the ratios recomputed
    /// from the sums. Averaging the individual percentages would weight every
    /// record equally regardless of its equity, which is wrong.
    pub fn compute_aggregate(&self, members: &[FleetMember]) -> ReturnsResult {
        let equity: Decimal = members.iter().map(|m| m.equity).sum();
        let asset: Decimal = members.iter().map(|m| m.asset).sum();
        let revenue: Decimal = members.iter().map(|m| m.revenue_monthly).sum();
        let expense: Decimal = members.iter().map(|m| m.total_expense_monthly).sum();

        Self::derive(equity, asset, revenue, expense)
    }

    fn derive(
        equity: Decimal,
        asset: Decimal,
        revenue_monthly: Decimal,
        total_expense_monthly: Decimal,
    ) -> ReturnsResult {
        let net_profit_monthly = revenue_monthly - total_expense_monthly;
        let mut warnings = Vec::new();

        let roe_percentage = if equity > Decimal::ZERO {
            (net_profit_monthly / equity * HUNDRED).round_dp(DECIMAL_PRECISION)
        } else {
            warnings.push("equity is zero; ROE reported as 0%".to_string());
            Decimal::ZERO
        };

        let roa_percentage = if asset > Decimal::ZERO {
            (net_profit_monthly / asset * HUNDRED).round_dp(DECIMAL_PRECISION)
        } else {
            warnings.push("total asset is zero; ROA reported as 0%".to_string());
            Decimal::ZERO
        };

        let profit_margin = if revenue_monthly > Decimal::ZERO {
            (net_profit_monthly / revenue_monthly * HUNDRED).round_dp(DECIMAL_PRECISION)
        } else {
            warnings.push("revenue is zero; profit margin reported as 0%".to_string());
            Decimal::ZERO
        };

        debug!(
            "Returns computed: net_profit={}, roe={}%, roa={}%",
            net_profit_monthly, roe_percentage, roa_percentage
        );

        ReturnsResult {
            equity,
            asset,
            revenue_monthly,
            total_expense_monthly,
            net_profit_monthly,
            roe_percentage,
            roa_percentage,
            profit_margin,
            warnings,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
