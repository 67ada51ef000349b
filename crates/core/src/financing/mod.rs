//! Unit financing module - flat-rate heavy-equipment financing plans.

mod financing_model;
mod financing_service;

pub use financing_model::{FinancingResult, UnitPurchase};
pub use financing_service::FinancingService;
