//! Ritase Report - fixed-layout paginated document model for the ROE/ROA
//! calculator export.
//!
//! The renderer lays the calculation results out into positioned panels on A4
//! pages and emits a serializable [`Document`]; the actual PDF rasterization
//! is performed by an external collaborator that consumes the document as a
//! JSON payload. Missing data degrades to placeholders - an export must never
//! fail because a section has nothing to show.

mod layout;
mod report_model;
mod report_service;

pub use layout::{LayoutCursor, MARGIN_PT, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
pub use report_model::{Document, Frame, LabeledValue, Page, Panel, SectionKind};
pub use report_service::{RenderError, ReportAssets, ReportContext, ReportService};
