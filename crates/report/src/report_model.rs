//! Report document models.
//!
//! The serialized form of [`Document`] is the payload the external PDF
//! rasterizer consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four report sections, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    KeyFinancialMetrics,
    Revenue,
    Expenses,
    AssetLiability,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::KeyFinancialMetrics,
        SectionKind::Revenue,
        SectionKind::Expenses,
        SectionKind::AssetLiability,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::KeyFinancialMetrics => "Key Financial Metrics",
            SectionKind::Revenue => "Revenue",
            SectionKind::Expenses => "Expenses",
            SectionKind::AssetLiability => "Asset & Liability",
        }
    }
}

/// Position and size of a panel on its page, in PDF points from the top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One formatted label/value row inside a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A bordered, titled panel of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub kind: SectionKind,
    pub title: String,
    pub frame: Frame,
    pub bordered: bool,
    pub rows: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub number: u32,
    pub panels: Vec<Panel>,
}

/// The laid-out report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// Suggested export file name, per the upstream naming convention.
    pub file_name: String,
    pub customer_name: String,
    pub commodity: String,
    /// ISO code of the currency every monetary value is formatted in.
    pub currency: String,
    pub font: String,
    /// PNG bytes of the letterhead logo, if one was loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Vec<u8>>,
    pub generated_at: DateTime<Utc>,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn find_panel(&self, kind: SectionKind) -> Option<&Panel> {
        self.pages
            .iter()
            .flat_map(|page| page.panels.iter())
            .find(|panel| panel.kind == kind)
    }
}
