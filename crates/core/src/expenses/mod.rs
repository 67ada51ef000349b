//! Expenses module - monthly operating-cost aggregation and breakdown.

mod expenses_model;
mod expenses_service;

pub use expenses_model::{
    CategoryShare, ExpenseCategory, ExpenseResult, FixedUnitCosts, VariableCosts,
};
pub use expenses_service::ExpenseService;
