//! Calculator record domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::expenses::{ExpenseResult, VariableCosts};
use crate::financing::{FinancingResult, UnitPurchase};
use crate::operations::{OperationalProfile, RevenueResult};
use crate::returns::ReturnsResult;

/// Customer reference resolved by the external lookup service. The core only
/// requires a non-empty id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
}

/// The four wizard steps, in their forced linear order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    UnitPurchase,
    Operational,
    MonthlyCosts,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::UnitPurchase,
        WizardStep::Operational,
        WizardStep::MonthlyCosts,
    ];

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::UnitPurchase => 2,
            WizardStep::Operational => 3,
            WizardStep::MonthlyCosts => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::UnitPurchase => "Unit Purchase",
            WizardStep::Operational => "Operational",
            WizardStep::MonthlyCosts => "Monthly Costs",
        }
    }
}

/// Everything derived from the saved steps so far. Recomputed in full on
/// every transition, never patched field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalculatorOutput {
    pub financing: Option<FinancingResult>,
    pub revenue: Option<RevenueResult>,
    pub expense: Option<ExpenseResult>,
    pub returns: Option<ReturnsResult>,
}

/// Immutable snapshot of one calculator record. Each wizard transition
/// produces a new snapshot with `version + 1`; callers never mutate one in
/// place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculatorSnapshot {
    pub id: String,
    pub version: u32,
    pub customer: CustomerRef,
    pub commodity: String,
    pub unit_purchase: Option<UnitPurchase>,
    pub operational: Option<OperationalProfile>,
    pub monthly_costs: Option<VariableCosts>,
    pub output: CalculatorOutput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalculatorSnapshot {
    /// A snapshot only exists once step 1 is saved, so BasicInfo is always
    /// complete.
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::BasicInfo => true,
            WizardStep::UnitPurchase => self.unit_purchase.is_some(),
            WizardStep::Operational => self.operational.is_some(),
            WizardStep::MonthlyCosts => self.monthly_costs.is_some(),
        }
    }

    pub fn completed_steps(&self) -> Vec<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .filter(|step| self.is_step_complete(*step))
            .collect()
    }

    /// The lowest-numbered incomplete step below `step`, if any. Entering
    /// `step` is only allowed when this returns `None`.
    pub fn first_incomplete_before(&self, step: WizardStep) -> Option<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .filter(|candidate| *candidate < step)
            .find(|candidate| !self.is_step_complete(*candidate))
    }

    pub fn is_complete(&self) -> bool {
        WizardStep::ALL
            .into_iter()
            .all(|step| self.is_step_complete(step))
    }
}

/// Wire payload from the persistence API.
///
/// Newer rows carry the step inputs at the top level; older rows nest the
/// same data under `operation_data` / `cost_data`. The fallback is resolved
/// once here, at the boundary - nothing downstream ever sees both shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorPayload {
    pub id: Option<String>,
    pub customer: CustomerRef,
    pub commodity: String,
    pub unit_purchase: Option<UnitPurchase>,
    pub operational: Option<OperationalProfile>,
    pub monthly_costs: Option<VariableCosts>,
    /// Legacy nesting of `operational`.
    pub operation_data: Option<OperationalProfile>,
    /// Legacy nesting of `monthly_costs`.
    pub cost_data: Option<VariableCosts>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CalculatorPayload {
    /// Canonical operational profile: top-level field wins over the legacy
    /// nesting.
    pub fn canonical_operational(&self) -> Option<OperationalProfile> {
        self.operational
            .clone()
            .or_else(|| self.operation_data.clone())
    }

    /// Canonical variable costs: top-level field wins over the legacy
    /// nesting.
    pub fn canonical_costs(&self) -> Option<VariableCosts> {
        self.monthly_costs.clone().or_else(|| self.cost_data.clone())
    }
}
