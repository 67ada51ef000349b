use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::errors::{CalculatorError, Error, Result, Violations};
use crate::expenses::{ExpenseService, FixedUnitCosts, VariableCosts};
use crate::financing::{FinancingService, UnitPurchase};
use crate::operations::{OperationalProfile, RevenueService};
use crate::returns::{FleetMember, ReturnsResult, ReturnsService};

use super::calculator_model::{
    CalculatorOutput, CalculatorPayload, CalculatorSnapshot, CustomerRef, WizardStep,
};

/// Drives a calculator record through the wizard.
///
/// Transitions take the current snapshot by reference and return a new one
/// with the version bumped and the whole derived output recomputed, so
/// re-entering a completed step can never leave stale downstream values.
#[derive(Debug, Clone, Default)]
pub struct CalculatorService {
    financing: FinancingService,
    revenue: RevenueService,
    expenses: ExpenseService,
    returns: ReturnsService,
}

impl CalculatorService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step 1: create the record from customer and commodity selection.
    pub fn create(&self, customer: CustomerRef, commodity: &str) -> Result<CalculatorSnapshot> {
        let mut violations = Violations::new();
        if customer.id.trim().is_empty() {
            violations.push("customer_id", "must not be empty");
        }
        if commodity.trim().is_empty() {
            violations.push("commodity", "must not be empty");
        }
        violations.into_result()?;

        let now = Utc::now();
        let snapshot = CalculatorSnapshot {
            id: Uuid::new_v4().to_string(),
            version: 1,
            customer,
            commodity: commodity.trim().to_string(),
            unit_purchase: None,
            operational: None,
            monthly_costs: None,
            output: CalculatorOutput::default(),
            created_at: now,
            updated_at: now,
        };

        debug!("Calculator record {} created", snapshot.id);
        Ok(snapshot)
    }

    /// Step 2: save the unit purchase and recompute downstream values.
    pub fn save_unit_purchase(
        &self,
        snapshot: &CalculatorSnapshot,
        input: UnitPurchase,
    ) -> Result<CalculatorSnapshot> {
        self.ensure_entry_allowed(snapshot, WizardStep::UnitPurchase)?;

        let mut next = snapshot.clone();
        next.unit_purchase = Some(input);
        self.finish_transition(next)
    }

    /// Step 3: save the operational profile and recompute downstream values.
    pub fn save_operational(
        &self,
        snapshot: &CalculatorSnapshot,
        input: OperationalProfile,
    ) -> Result<CalculatorSnapshot> {
        self.ensure_entry_allowed(snapshot, WizardStep::Operational)?;

        let mut next = snapshot.clone();
        next.operational = Some(input);
        self.finish_transition(next)
    }

    /// Step 4: save the variable monthly costs and recompute downstream
    /// values.
    pub fn save_monthly_costs(
        &self,
        snapshot: &CalculatorSnapshot,
        input: VariableCosts,
    ) -> Result<CalculatorSnapshot> {
        self.ensure_entry_allowed(snapshot, WizardStep::MonthlyCosts)?;

        let mut next = snapshot.clone();
        next.monthly_costs = Some(input);
        self.finish_transition(next)
    }

    /// Rebuilds a snapshot from a persistence-API payload, normalizing the
    /// legacy `operation_data` / `cost_data` nesting at the boundary and
    /// recomputing every derived value. Stored derived fields are never
    /// trusted as a source of truth.
    pub fn from_payload(&self, payload: CalculatorPayload) -> Result<CalculatorSnapshot> {
        let mut violations = Violations::new();
        if payload.customer.id.trim().is_empty() {
            violations.push("customer_id", "must not be empty");
        }
        if payload.commodity.trim().is_empty() {
            violations.push("commodity", "must not be empty");
        }
        violations.into_result()?;

        let operational = payload.canonical_operational();
        let monthly_costs = payload.canonical_costs();
        let now = Utc::now();

        let mut snapshot = CalculatorSnapshot {
            id: payload
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            version: 1,
            customer: payload.customer,
            commodity: payload.commodity.trim().to_string(),
            unit_purchase: payload.unit_purchase,
            operational,
            monthly_costs,
            output: CalculatorOutput::default(),
            created_at: payload.created_at.unwrap_or(now),
            updated_at: payload.updated_at.unwrap_or(now),
        };
        snapshot.output = self.derive(&snapshot)?;

        Ok(snapshot)
    }

    /// Aggregate returns across a customer's fleet. Only complete records
    /// carry an authoritative net profit, so drafts are skipped.
    pub fn aggregate_returns(&self, snapshots: &[CalculatorSnapshot]) -> ReturnsResult {
        let members: Vec<FleetMember> = snapshots
            .iter()
            .filter(|s| s.is_complete())
            .filter_map(|s| s.output.returns.as_ref().map(FleetMember::from))
            .collect();

        debug!(
            "Aggregating returns over {} of {} records",
            members.len(),
            snapshots.len()
        );
        self.returns.compute_aggregate(&members)
    }

    fn ensure_entry_allowed(&self, snapshot: &CalculatorSnapshot, step: WizardStep) -> Result<()> {
        if let Some(missing) = snapshot.first_incomplete_before(step) {
            return Err(Error::Calculation(CalculatorError::StepOrder {
                attempted: step,
                missing,
            }));
        }
        Ok(())
    }

    fn finish_transition(&self, mut next: CalculatorSnapshot) -> Result<CalculatorSnapshot> {
        next.output = self.derive(&next)?;
        next.version += 1;
        next.updated_at = Utc::now();

        debug!(
            "Calculator record {} advanced to version {}",
            next.id, next.version
        );
        Ok(next)
    }

    /// Recomputes the full derived output from the saved step inputs.
    fn derive(&self, snapshot: &CalculatorSnapshot) -> Result<CalculatorOutput> {
        let financing = snapshot
            .unit_purchase
            .as_ref()
            .map(|input| self.financing.compute(input))
            .transpose()?;

        let revenue = snapshot
            .operational
            .as_ref()
            .map(|profile| self.revenue.compute(profile))
            .transpose()?;

        let expense = match (&snapshot.monthly_costs, &financing) {
            (Some(costs), Some(financing)) => Some(
                self.expenses
                    .compute(costs, &FixedUnitCosts::from(financing))?,
            ),
            _ => None,
        };

        let returns = match (&financing, &revenue, &expense) {
            (Some(financing), Some(revenue), Some(expense)) => Some(self.returns.compute(
                financing,
                revenue.revenue_per_bulan,
                expense.total_expense,
            )),
            _ => None,
        };

        Ok(CalculatorOutput {
            financing,
            revenue,
            expense,
            returns,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::FuelConsumptionType;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn customer() -> CustomerRef {
        CustomerRef {
            id: "cust-1".to_string(),
            name: "PT Borneo Makmur".to_string(),
        }
    }

    fn unit_purchase() -> UnitPurchase {
        UnitPurchase {
            price_per_unit: dec!(500_000_000),
            quantity: 2,
            down_payment_percent: dec!(30),
            financing_tenor_months: 36,
            interest_rate_flat_per_year: dec!(6),
            depreciation_period_months: 60,
        }
    }

    fn operational() -> OperationalProfile {
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

    fn monthly_costs() -> VariableCosts {
        VariableCosts {
            tyre: dec!(25_000_000),
            sparepart: dec!(40_000_000),
            salary_operator: dec!(60_000_000),
            interest: dec!(5_000_000),
            overhead: dec!(30_000_000),
        }
    }

    fn complete_record(service: &CalculatorService) -> CalculatorSnapshot {
        let snapshot = service.create(customer(), "coal").unwrap();
        let snapshot = service
            .save_unit_purchase(&snapshot, unit_purchase())
            .unwrap();
        let snapshot = service.save_operational(&snapshot, operational()).unwrap();
        service
            .save_monthly_costs(&snapshot, monthly_costs())
            .unwrap()
    }

    #[test]
    fn test_create_validates_customer_and_commodity() {
        let service = CalculatorService::new();

        let err = service
            .create(
                CustomerRef {
                    id: "  ".to_string(),
                    name: "X".to_string(),
                },
                "",
            )
            .unwrap_err();
        let message = err.to_string();

        assert!(message.contains("customer_id"));
        assert!(message.contains("commodity"));
    }

    #[test]
    fn test_steps_must_be_entered_in_order() {
        let service = CalculatorService::new();
        let snapshot = service.create(customer(), "coal").unwrap();

        // Step 3 before step 2
        let err = service
            .save_operational(&snapshot, operational())
            .unwrap_err();
        assert!(err.to_string().contains("Unit Purchase"));

        // Step 4 before steps 2 and 3
        let err = service
            .save_monthly_costs(&snapshot, monthly_costs())
            .unwrap_err();
        assert!(err.to_string().contains("Unit Purchase"));
    }

    #[test]
    fn test_each_transition_bumps_version_and_keeps_the_old_snapshot() {
        let service = CalculatorService::new();
        let v1 = service.create(customer(), "coal").unwrap();
        let v2 = service.save_unit_purchase(&v1, unit_purchase()).unwrap();

        assert_eq!(v1.version, 1);
        assert_eq!(v2.version, 2);
        assert_eq!(v1.unit_purchase, None);
        assert!(v2.unit_purchase.is_some());
        assert_eq!(v1.id, v2.id);
    }

    #[test]
    fn test_complete_record_derives_the_full_output() {
        let service = CalculatorService::new();
        let record = complete_record(&service);

        assert!(record.is_complete());
        assert_eq!(record.completed_steps().len(), 4);

        let output = &record.output;
        assert_eq!(
            output.financing.as_ref().unwrap().total_asset,
            dec!(1_000_000_000)
        );
        assert_eq!(
            output.revenue.as_ref().unwrap().revenue_per_bulan,
            dec!(1_152_000_000)
        );

        // 160M variable + depreciation 16,666,666.666667 + interest 3,500,000
        let expense = output.expense.as_ref().unwrap();
        assert_eq!(expense.total_expense, dec!(180_166_666.666667));

        let returns = output.returns.as_ref().unwrap();
        assert_eq!(
            returns.net_profit_monthly,
            dec!(1_152_000_000) - expense.total_expense
        );
        assert_eq!(returns.equity, dec!(300_000_000));
    }

    #[test]
    fn test_reentering_a_completed_step_recomputes_downstream_values() {
        let service = CalculatorService::new();
        let record = complete_record(&service);
        let roe_before = record.output.returns.as_ref().unwrap().roe_percentage;

        // Double the selling price; ROE must move with it.
        let mut better = operational();
        better.selling_price_per_ton = dec!(600_000);
        let record = service.save_operational(&record, better).unwrap();

        assert!(record.is_complete());
        let returns = record.output.returns.as_ref().unwrap();
        assert_eq!(
            record.output.revenue.as_ref().unwrap().revenue_per_bulan,
            dec!(2_304_000_000)
        );
        assert!(returns.roe_percentage > roe_before);
    }

    #[test]
    fn test_invalid_step_input_leaves_no_partial_snapshot() {
        let service = CalculatorService::new();
        let snapshot = service.create(customer(), "coal").unwrap();

        let mut bad = unit_purchase();
        bad.quantity = 0;

        assert!(service.save_unit_purchase(&snapshot, bad).is_err());
        // The original snapshot is untouched by the failed transition.
        assert_eq!(snapshot.version, 1);
        assert_eq!(snapshot.unit_purchase, None);
    }

    #[test]
    fn test_aggregate_skips_incomplete_records() {
        let service = CalculatorService::new();
        let complete = complete_record(&service);
        let draft = service.create(customer(), "nickel").unwrap();

        let aggregate = service.aggregate_returns(&[complete.clone(), draft]);

        let individual = complete.output.returns.as_ref().unwrap();
        assert_eq!(aggregate.equity, individual.equity);
        assert_eq!(aggregate.net_profit_monthly, individual.net_profit_monthly);
    }

    #[test]
    fn test_aggregate_over_two_records_recomputes_from_sums() {
        let service = CalculatorService::new();
        let big = complete_record(&service);

        // A second, smaller record with different equity weight.
        let snapshot = service.create(customer(), "coal").unwrap();
        let mut small_unit = unit_purchase();
        small_unit.quantity = 1;
        small_unit.down_payment_percent = dec!(10);
        let snapshot = service.save_unit_purchase(&snapshot, small_unit).unwrap();
        let snapshot = service.save_operational(&snapshot, operational()).unwrap();
        let small = service
            .save_monthly_costs(&snapshot, monthly_costs())
            .unwrap();

        let aggregate = service.aggregate_returns(&[big.clone(), small.clone()]);

        let big_returns = big.output.returns.as_ref().unwrap();
        let small_returns = small.output.returns.as_ref().unwrap();

        assert_eq!(
            aggregate.equity,
            big_returns.equity + small_returns.equity
        );
        assert_eq!(
            aggregate.net_profit_monthly,
            big_returns.net_profit_monthly + small_returns.net_profit_monthly
        );

        // Recomputed from sums, not averaged.
        let naive_average =
            (big_returns.roe_percentage + small_returns.roe_percentage) / Decimal::from(2);
        assert_ne!(aggregate.roe_percentage, naive_average);
    }

    #[test]
    fn test_payload_normalization_prefers_top_level_over_legacy() {
        let service = CalculatorService::new();

        let mut legacy_profile = operational();
        legacy_profile.selling_price_per_ton = dec!(100_000);

        let payload = CalculatorPayload {
            id: Some("rec-1".to_string()),
            customer: customer(),
            commodity: "coal".to_string(),
            unit_purchase: Some(unit_purchase()),
            operational: Some(operational()),
            monthly_costs: None,
            operation_data: Some(legacy_profile),
            cost_data: Some(monthly_costs()),
            created_at: None,
            updated_at: None,
        };

        let snapshot = service.from_payload(payload).unwrap();

        // Top-level operational wins over operation_data.
        assert_eq!(
            snapshot
                .operational
                .as_ref()
                .unwrap()
                .selling_price_per_ton,
            dec!(300_000)
        );
        // cost_data fills in for the missing top-level monthly_costs.
        assert!(snapshot.monthly_costs.is_some());
        assert!(snapshot.is_complete());
        assert!(snapshot.output.returns.is_some());
    }
}
