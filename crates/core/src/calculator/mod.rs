//! Calculator module - wizard lifecycle over immutable, versioned snapshots.

mod calculator_model;
mod calculator_service;

pub use calculator_model::{
    CalculatorOutput, CalculatorPayload, CalculatorSnapshot, CustomerRef, WizardStep,
};
pub use calculator_service::CalculatorService;
