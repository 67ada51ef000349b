//! Returns module - ROE/ROA derivation for single records and fleet
//! aggregates.

mod returns_model;
mod returns_service;

pub use returns_model::{FleetMember, ReturnsResult};
pub use returns_service::ReturnsService;
