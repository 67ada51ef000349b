use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{HUNDRED, PERCENT_PRECISION};
use crate::errors::{Result, Violations};

use super::expenses_model::{
    CategoryShare, ExpenseCategory, ExpenseResult, FixedUnitCosts, VariableCosts,
};

/// Sums the seven monthly cost categories and derives the percentage
/// breakdown.
#[derive(Debug, Clone, Default)]
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(
        &self,
        variable: &VariableCosts,
        fixed: &FixedUnitCosts,
    ) -> Result<ExpenseResult> {
        let amounts = Self::category_amounts(variable, fixed);
        Self::validate(&amounts)?;

        let total_expense: Decimal = amounts.iter().map(|(_, amount)| *amount).sum();

        let mut breakdown: Vec<CategoryShare> = amounts
            .iter()
            .map(|(category, amount)| {
                let percentage = if total_expense.is_zero() {
                    Decimal::ZERO
                } else {
                    (*amount / total_expense * HUNDRED).round_dp_with_strategy(
                        PERCENT_PRECISION,
                        RoundingStrategy::MidpointAwayFromZero,
                    )
                };
                CategoryShare {
                    category: *category,
                    amount: *amount,
                    percentage,
                }
            })
            .collect();

        // Rounding each share to one decimal can drift the sum off 100; the
        // remainder lands on the largest category (first wins on ties).
        if !total_expense.is_zero() {
            let rounded_sum: Decimal = breakdown.iter().map(|s| s.percentage).sum();
            let remainder = HUNDRED - rounded_sum;
            if !remainder.is_zero() {
                let mut largest = 0;
                for (i, share) in breakdown.iter().enumerate() {
                    if share.amount > breakdown[largest].amount {
                        largest = i;
                    }
                }
                breakdown[largest].percentage += remainder;
            }
        }

        debug!(
            "Expense computed: total={}, categories={}",
            total_expense,
            breakdown.len()
        );

        Ok(ExpenseResult {
            total_expense,
            breakdown,
        })
    }

    fn category_amounts(
        variable: &VariableCosts,
        fixed: &FixedUnitCosts,
    ) -> [(ExpenseCategory, Decimal); 7] {
        [
            (ExpenseCategory::Tyre, variable.tyre),
            (ExpenseCategory::Sparepart, variable.sparepart),
            (ExpenseCategory::SalaryOperator, variable.salary_operator),
            (ExpenseCategory::Interest, variable.interest),
            (ExpenseCategory::Overhead, variable.overhead),
            (ExpenseCategory::Depreciation, fixed.depreciation_per_month),
            (
                ExpenseCategory::InterestExpense,
                fixed.interest_expense_per_month,
            ),
        ]
    }

    fn validate(amounts: &[(ExpenseCategory, Decimal)]) -> Result<()> {
        let mut violations = Violations::new();
        for (category, amount) in amounts {
            if *amount < Decimal::ZERO {
                violations.push(Self::field_name(*category), "must not be negative");
            }
        }
        violations.into_result()
    }

    fn field_name(category: ExpenseCategory) -> &'static str {
        match category {
            ExpenseCategory::Tyre => "tyre",
            ExpenseCategory::Sparepart => "sparepart",
            ExpenseCategory::SalaryOperator => "salary_operator",
            ExpenseCategory::Interest => "interest",
            ExpenseCategory::Overhead => "overhead",
            ExpenseCategory::Depreciation => "depreciation_per_month",
            ExpenseCategory::InterestExpense => "interest_expense_per_month",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
