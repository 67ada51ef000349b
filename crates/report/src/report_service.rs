use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use thiserror::Error;

use ritase_core::calculator::CalculatorSnapshot;
use ritase_core::constants::{BASE_CURRENCY, PERCENT_PRECISION};
use ritase_core::expenses::ExpenseResult;
use ritase_core::financing::FinancingResult;
use ritase_core::operations::RevenueResult;
use ritase_core::returns::ReturnsResult;
use ritase_core::utils::currency_utils::format_rupiah;

use crate::layout::LayoutCursor;
use crate::report_model::{Document, LabeledValue, SectionKind};

const DEFAULT_FONT: &str = "Helvetica";
const PLACEHOLDER: &str = "-";

/// Errors from loading report assets. Rendering itself never fails: a missing
/// asset degrades to the built-in default instead of aborting the export.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Report asset not found: {0}")]
    AssetMissing(String),

    #[error("Failed to read report asset '{path}': {source}")]
    AssetRead {
        path: String,
        source: std::io::Error,
    },
}

/// Letterhead assets for the export.
#[derive(Debug, Clone)]
pub struct ReportAssets {
    pub font: String,
    pub logo: Option<Vec<u8>>,
}

impl Default for ReportAssets {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            logo: None,
        }
    }
}

impl ReportAssets {
    /// Strict loader for callers that want the failure.
    pub fn load(font: &str, logo_path: &Path) -> Result<Self, RenderError> {
        if font.trim().is_empty() {
            return Err(RenderError::AssetMissing("font".to_string()));
        }
        let logo = std::fs::read(logo_path).map_err(|source| RenderError::AssetRead {
            path: logo_path.display().to_string(),
            source,
        })?;
        Ok(Self {
            font: font.to_string(),
            logo: Some(logo),
        })
    }

    /// Loader used by the export path: degrades to the default font and a
    /// blank logo rather than failing the whole export.
    pub fn load_or_default(font: &str, logo_path: &Path) -> Self {
        match Self::load(font, logo_path) {
            Ok(assets) => assets,
            Err(err) => {
                warn!("Report asset unavailable, using defaults: {}", err);
                Self::default()
            }
        }
    }
}

/// Input for one rendered report. Every result set is optional; missing data
/// renders as placeholders.
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    pub customer_name: String,
    pub commodity: Option<String>,
    pub financing: Option<FinancingResult>,
    pub revenue: Option<RevenueResult>,
    pub expense: Option<ExpenseResult>,
    pub returns: Option<ReturnsResult>,
}

impl ReportContext {
    /// Builds the context straight from a calculator snapshot.
    pub fn from_snapshot(snapshot: &CalculatorSnapshot) -> Self {
        Self {
            customer_name: snapshot.customer.name.clone(),
            commodity: Some(snapshot.commodity.clone()),
            financing: snapshot.output.financing.clone(),
            revenue: snapshot.output.revenue.clone(),
            expense: snapshot.output.expense.clone(),
            returns: snapshot.output.returns.clone(),
        }
    }
}

/// Lays the four result sections out into a paginated [`Document`].
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    assets: ReportAssets,
}

impl ReportService {
    pub fn new(assets: ReportAssets) -> Self {
        Self { assets }
    }

    pub fn render(&self, context: &ReportContext, generated_at: DateTime<Utc>) -> Document {
        let mut cursor = LayoutCursor::new();

        cursor.push_panel(
            SectionKind::KeyFinancialMetrics,
            Self::key_metrics_rows(context),
        );
        cursor.push_panel(SectionKind::Revenue, Self::revenue_rows(context));
        cursor.push_panel(SectionKind::Expenses, Self::expense_rows(context));
        cursor.push_panel(
            SectionKind::AssetLiability,
            Self::asset_liability_rows(context),
        );

        let document = Document {
            title: "ROE / ROA Calculator".to_string(),
            file_name: Self::file_name(&context.customer_name, generated_at),
            customer_name: context.customer_name.clone(),
            commodity: context
                .commodity
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            currency: BASE_CURRENCY.to_string(),
            font: self.assets.font.clone(),
            logo: self.assets.logo.clone(),
            generated_at,
            pages: cursor.into_pages(),
        };

        debug!(
            "Report rendered for '{}': {} pages",
            document.customer_name,
            document.page_count()
        );
        document
    }

    /// Export naming convention:
    /// `ROE_ROA_Calculator_<customer_name_with_underscores>_<unix_ms>.pdf`.
    pub fn file_name(customer_name: &str, generated_at: DateTime<Utc>) -> String {
        let safe_name: Vec<&str> = customer_name.split_whitespace().collect();
        let safe_name = if safe_name.is_empty() {
            "Customer".to_string()
        } else {
            safe_name.join("_")
        };
        format!(
            "ROE_ROA_Calculator_{}_{}.pdf",
            safe_name,
            generated_at.timestamp_millis()
        )
    }

    fn key_metrics_rows(context: &ReportContext) -> Vec<LabeledValue> {
        let returns = context.returns.as_ref();
        let mut rows = vec![
            LabeledValue::new(
                "Net Profit / Month",
                returns.map_or(PLACEHOLDER.to_string(), |r| {
                    format_rupiah(r.net_profit_monthly)
                }),
            ),
            LabeledValue::new(
                "ROE",
                returns.map_or(PLACEHOLDER.to_string(), |r| {
                    Self::format_percent(r.roe_percentage)
                }),
            ),
            LabeledValue::new(
                "ROA",
                returns.map_or(PLACEHOLDER.to_string(), |r| {
                    Self::format_percent(r.roa_percentage)
                }),
            ),
            LabeledValue::new(
                "Profit Margin",
                returns.map_or(PLACEHOLDER.to_string(), |r| {
                    Self::format_percent(r.profit_margin)
                }),
            ),
        ];

        if let Some(returns) = returns {
            for warning in &returns.warnings {
                rows.push(LabeledValue::new("Note", warning.clone()));
            }
        }
        rows
    }

    fn revenue_rows(context: &ReportContext) -> Vec<LabeledValue> {
        let revenue = context.revenue.as_ref();
        vec![
            LabeledValue::new(
                "Ritase / Day",
                revenue.map_or(PLACEHOLDER.to_string(), |r| r.ritase_per_hari.to_string()),
            ),
            LabeledValue::new(
                "Ritase / Month",
                revenue.map_or(PLACEHOLDER.to_string(), |r| r.ritase_per_bulan.to_string()),
            ),
            LabeledValue::new(
                "Tonnage / Month",
                revenue.map_or(PLACEHOLDER.to_string(), |r| {
                    r.tonnage_per_bulan.to_string()
                }),
            ),
            LabeledValue::new(
                "Revenue / Month",
                revenue.map_or(PLACEHOLDER.to_string(), |r| {
                    format_rupiah(r.revenue_per_bulan)
                }),
            ),
            LabeledValue::new(
                "Effective Revenue / Month",
                revenue.map_or(PLACEHOLDER.to_string(), |r| {
                    format_rupiah(r.effective_revenue_per_bulan)
                }),
            ),
            LabeledValue::new(
                "Fuel Cost / Month",
                revenue.map_or(PLACEHOLDER.to_string(), |r| {
                    format_rupiah(r.fuel_cost_per_bulan)
                }),
            ),
        ]
    }

    fn expense_rows(context: &ReportContext) -> Vec<LabeledValue> {
        let Some(expense) = context.expense.as_ref() else {
            return vec![LabeledValue::new("Total Expense", PLACEHOLDER)];
        };

        let mut rows: Vec<LabeledValue> = expense
            .breakdown
            .iter()
            .map(|share| {
                LabeledValue::new(
                    share.category.label(),
                    format!(
                        "{} ({})",
                        format_rupiah(share.amount),
                        Self::format_percent(share.percentage)
                    ),
                )
            })
            .collect();
        rows.push(LabeledValue::new(
            "Total Expense",
            format_rupiah(expense.total_expense),
        ));
        rows
    }

    fn asset_liability_rows(context: &ReportContext) -> Vec<LabeledValue> {
        let financing = context.financing.as_ref();
        vec![
            LabeledValue::new(
                "Total Asset",
                financing.map_or(PLACEHOLDER.to_string(), |f| format_rupiah(f.total_asset)),
            ),
            LabeledValue::new(
                "Equity (Down Payment)",
                financing.map_or(PLACEHOLDER.to_string(), |f| format_rupiah(f.down_payment)),
            ),
            LabeledValue::new(
                "Liability (Remaining Debt)",
                financing.map_or(PLACEHOLDER.to_string(), |f| {
                    format_rupiah(f.remaining_debt)
                }),
            ),
            LabeledValue::new(
                "Installment / Month",
                financing.map_or(PLACEHOLDER.to_string(), |f| {
                    format_rupiah(f.total_installment_per_month)
                }),
            ),
            LabeledValue::new(
                "Debt-to-Equity Ratio",
                financing.map_or(PLACEHOLDER.to_string(), |f| {
                    f.debt_to_equity_ratio
                        .map_or("N/A".to_string(), |ratio| ratio.round_dp(2).to_string())
                }),
            ),
        ]
    }

    fn format_percent(value: Decimal) -> String {
        format!("{}%", value.round_dp(PERCENT_PRECISION))
    }
}

// =============================================================================
// Tests
// =============================================================================
