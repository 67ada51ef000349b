//! Expense domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::financing::FinancingResult;

/// Variable monthly costs keyed in on the cost step of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariableCosts {
    pub tyre: Decimal,
    pub sparepart: Decimal,
    pub salary_operator: Decimal,
    /// Interest on working capital and other non-unit borrowings; the unit
    /// financing interest arrives separately via [`FixedUnitCosts`].
    pub interest: Decimal,
    pub overhead: Decimal,
}

/// Fixed monthly costs carried over from the unit financing plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedUnitCosts {
    pub depreciation_per_month: Decimal,
    pub interest_expense_per_month: Decimal,
}

impl From<&FinancingResult> for FixedUnitCosts {
    fn from(financing: &FinancingResult) -> Self {
        Self {
            depreciation_per_month: financing.depreciation_per_month,
            interest_expense_per_month: financing.interest_per_month,
        }
    }
}

/// The seven expense categories, in breakdown display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Tyre,
    Sparepart,
    SalaryOperator,
    Interest,
    Overhead,
    Depreciation,
    InterestExpense,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Tyre,
        ExpenseCategory::Sparepart,
        ExpenseCategory::SalaryOperator,
        ExpenseCategory::Interest,
        ExpenseCategory::Overhead,
        ExpenseCategory::Depreciation,
        ExpenseCategory::InterestExpense,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Tyre => "Tyre",
            ExpenseCategory::Sparepart => "Sparepart",
            ExpenseCategory::SalaryOperator => "Operator Salary",
            ExpenseCategory::Interest => "Interest",
            ExpenseCategory::Overhead => "Overhead",
            ExpenseCategory::Depreciation => "Depreciation",
            ExpenseCategory::InterestExpense => "Unit Interest Expense",
        }
    }
}

/// One category's slice of the monthly expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    /// Rounded to one decimal; the breakdown sums to exactly 100 for any
    /// non-zero total.
    pub percentage: Decimal,
}

/// Aggregated monthly expense with per-category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseResult {
    pub total_expense: Decimal,
    pub breakdown: Vec<CategoryShare>,
}

impl ExpenseResult {
    pub fn share(&self, category: ExpenseCategory) -> Option<&CategoryShare> {
        self.breakdown.iter().find(|s| s.category == category)
    }
}
