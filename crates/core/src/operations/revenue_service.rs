use log::debug;
use rust_decimal::Decimal;

use crate::constants::{DECIMAL_PRECISION, HUNDRED};
use crate::errors::{Result, Violations};

use super::operations_model::{FuelConsumptionType, OperationalProfile, RevenueResult};

/// Estimates monthly production and revenue from a hauling profile.
#[derive(Debug, Clone, Default)]
pub struct RevenueService;

impl RevenueService {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, profile: &OperationalProfile) -> Result<RevenueResult> {
        Self::validate(profile)?;

        let ritase_per_hari = profile.ritase_per_shift * profile.shift_per_hari;
        let ritase_per_bulan = ritase_per_hari * profile.hari_kerja_per_bulan;
        let tonnage_per_bulan = ritase_per_bulan * profile.tonnage_per_ritase;

        let revenue_per_bulan =
            (tonnage_per_bulan * profile.selling_price_per_ton).round_dp(DECIMAL_PRECISION);
        let effective_revenue_per_bulan =
            (revenue_per_bulan * profile.utilization_percent / HUNDRED).round_dp(DECIMAL_PRECISION);

        let fuel_per_ritase = match profile.fuel_consumption_type {
            FuelConsumptionType::PerKm => profile.fuel_consumption * profile.haul_distance_km,
            FuelConsumptionType::PerKmTon => {
                profile.fuel_consumption * profile.haul_distance_km * profile.tonnage_per_ritase
            }
        };
        let fuel_cost_per_ritase = (fuel_per_ritase * profile.fuel_price).round_dp(DECIMAL_PRECISION);
        let fuel_cost_per_bulan =
            (fuel_cost_per_ritase * ritase_per_bulan).round_dp(DECIMAL_PRECISION);

        debug!(
            "Revenue computed: ritase/bulan={}, tonnage/bulan={}, revenue/bulan={}",
            ritase_per_bulan, tonnage_per_bulan, revenue_per_bulan
        );

        Ok(RevenueResult {
            ritase_per_hari,
            ritase_per_bulan,
            tonnage_per_bulan,
            revenue_per_bulan,
            effective_revenue_per_bulan,
            fuel_per_ritase,
            fuel_cost_per_ritase,
            fuel_cost_per_bulan,
        })
    }

    fn validate(profile: &OperationalProfile) -> Result<()> {
        let mut violations = Violations::new();

        let non_negative: [(&'static str, Decimal); 8] = [
            ("ritase_per_shift", profile.ritase_per_shift),
            ("shift_per_hari", profile.shift_per_hari),
            ("hari_kerja_per_bulan", profile.hari_kerja_per_bulan),
            ("tonnage_per_ritase", profile.tonnage_per_ritase),
            ("haul_distance_km", profile.haul_distance_km),
            ("selling_price_per_ton", profile.selling_price_per_ton),
            ("fuel_consumption", profile.fuel_consumption),
            ("fuel_price", profile.fuel_price),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                violations.push(field, "must not be negative");
            }
        }

        if profile.utilization_percent < Decimal::ZERO || profile.utilization_percent > HUNDRED {
            violations.push("utilization_percent", "must be between 0 and 100");
        }
        if profile.downtime_percent < Decimal::ZERO || profile.downtime_percent > HUNDRED {
            violations.push("downtime_percent", "must be between 0 and 100");
        }

        violations.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn standard_profile() -> OperationalProfile {
        OperationalProfile {
            ritase_per_shift: dec!(4),
            shift_per_hari: dec!(2),
            hari_kerja_per_bulan: dec!(24),
            utilization_percent: dec!(85),
            downtime_percent: dec!(15),
            tonnage_per_ritase: dec!(20),
            haul_distance_km: dec!(12),
            selling_price_per_ton: dec!(300_000),
            fuel_consumption: dec!(0.5),
            fuel_price: dec!(15_000),
            fuel_consumption_type: FuelConsumptionType::PerKm,
        }
    }

    #[test]
    fn test_monthly_production_chain() {
        let result = RevenueService::new().compute(&standard_profile()).unwrap();

        assert_eq!(result.ritase_per_hari, dec!(8));
        assert_eq!(result.ritase_per_bulan, dec!(192));
        assert_eq!(result.tonnage_per_bulan, dec!(3_840));
    }

    #[test]
    fn test_monthly_revenue() {
        let result = RevenueService::new().compute(&standard_profile()).unwrap();

        assert_eq!(result.revenue_per_bulan, dec!(1_152_000_000));
    }

    #[test]
    fn test_effective_revenue_scales_by_utilization() {
        let result = RevenueService::new().compute(&standard_profile()).unwrap();

        // 1,152,000,000 * 85%
        assert_eq!(result.effective_revenue_per_bulan, dec!(979_200_000));
    }

    #[test]
    fn test_fuel_per_km() {
        let result = RevenueService::new().compute(&standard_profile()).unwrap();

        // 0.5 L/km * 12 km
        assert_eq!(result.fuel_per_ritase, dec!(6));
        assert_eq!(result.fuel_cost_per_ritase, dec!(90_000));
        assert_eq!(result.fuel_cost_per_bulan, dec!(17_280_000));
    }

    #[test]
    fn test_fuel_per_km_ton_scales_by_tonnage() {
        let mut profile = standard_profile();
        profile.fuel_consumption_type = FuelConsumptionType::PerKmTon;

        let result = RevenueService::new().compute(&profile).unwrap();

        // 0.5 L/km/ton * 12 km * 20 t
        assert_eq!(result.fuel_per_ritase, dec!(120));
        assert_eq!(result.fuel_cost_per_ritase, dec!(1_800_000));
    }

    #[test]
    fn test_negative_inputs_rejected_together() {
        let mut profile = standard_profile();
        profile.ritase_per_shift = dec!(-1);
        profile.fuel_price = dec!(-2);
        profile.utilization_percent = dec!(130);

        let err = RevenueService::new().compute(&profile).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("ritase_per_shift"));
        assert!(message.contains("fuel_price"));
        assert!(message.contains("utilization_percent"));
    }

    #[test]
    fn test_zero_activity_is_valid_and_yields_zero_revenue() {
        let mut profile = standard_profile();
        profile.ritase_per_shift = Decimal::ZERO;

        let result = RevenueService::new().compute(&profile).unwrap();

        assert_eq!(result.ritase_per_bulan, Decimal::ZERO);
        assert_eq!(result.revenue_per_bulan, Decimal::ZERO);
    }

    #[test]
    fn test_fuel_type_serializes_as_unit_literal() {
        let json = serde_json::to_string(&FuelConsumptionType::PerKmTon).unwrap();
        assert_eq!(json, "\"L/km/ton\"");

        let parsed: FuelConsumptionType = serde_json::from_str("\"L/km\"").unwrap();
        assert_eq!(parsed, FuelConsumptionType::PerKm);
    }
}
