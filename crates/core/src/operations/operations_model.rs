//! Operational profile domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How fuel burn is metered for a haul cycle.
///
/// Serialized as the upstream API's literal unit strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelConsumptionType {
    #[serde(rename = "L/km")]
    PerKm,
    #[serde(rename = "L/km/ton")]
    PerKmTon,
}

/// Hauling profile for one unit configuration, as keyed in on the
/// operational step of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationalProfile {
    pub ritase_per_shift: Decimal,
    pub shift_per_hari: Decimal,
    pub hari_kerja_per_bulan: Decimal,
    /// 0..=100
    pub utilization_percent: Decimal,
    /// 0..=100. Carried for reporting; enters no revenue formula.
    pub downtime_percent: Decimal,
    pub tonnage_per_ritase: Decimal,
    pub haul_distance_km: Decimal,
    pub selling_price_per_ton: Decimal,
    pub fuel_consumption: Decimal,
    pub fuel_price: Decimal,
    pub fuel_consumption_type: FuelConsumptionType,
}

/// Derived monthly production and revenue figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueResult {
    pub ritase_per_hari: Decimal,
    pub ritase_per_bulan: Decimal,
    pub tonnage_per_bulan: Decimal,
    /// Authoritative unscaled revenue figure; profit and returns derive from
    /// this one.
    pub revenue_per_bulan: Decimal,
    /// Companion figure scaled by utilization, for display alongside the
    /// unscaled revenue.
    pub effective_revenue_per_bulan: Decimal,
    pub fuel_per_ritase: Decimal,
    pub fuel_cost_per_ritase: Decimal,
    pub fuel_cost_per_bulan: Decimal,
}
