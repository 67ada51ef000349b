//! Fixed A4 geometry and the top-down panel cursor.

use crate::report_model::{Frame, LabeledValue, Page, Panel, SectionKind};

/// A4 portrait, in PDF points
pub const PAGE_WIDTH_PT: f32 = 595.0;
pub const PAGE_HEIGHT_PT: f32 = 842.0;
pub const MARGIN_PT: f32 = 40.0;

const PANEL_TITLE_HEIGHT_PT: f32 = 26.0;
const PANEL_PADDING_PT: f32 = 10.0;
const ROW_HEIGHT_PT: f32 = 18.0;
const PANEL_GAP_PT: f32 = 16.0;

/// Places panels top-down on fixed A4 pages; a panel that would cross the
/// bottom margin spills onto a fresh page.
#[derive(Debug)]
pub struct LayoutCursor {
    pages: Vec<Page>,
    y: f32,
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self {
            pages: vec![Page {
                number: 1,
                panels: Vec::new(),
            }],
            y: MARGIN_PT,
        }
    }

    pub fn panel_height(rows: usize) -> f32 {
        PANEL_TITLE_HEIGHT_PT + PANEL_PADDING_PT * 2.0 + rows as f32 * ROW_HEIGHT_PT
    }

    pub fn push_panel(&mut self, kind: SectionKind, rows: Vec<LabeledValue>) {
        let height = Self::panel_height(rows.len());

        if self.y + height > PAGE_HEIGHT_PT - MARGIN_PT && !self.current_page_is_empty() {
            let number = self.pages.len() as u32 + 1;
            self.pages.push(Page {
                number,
                panels: Vec::new(),
            });
            self.y = MARGIN_PT;
        }

        let frame = Frame {
            x: MARGIN_PT,
            y: self.y,
            width: PAGE_WIDTH_PT - MARGIN_PT * 2.0,
            height,
        };
        self.y += height + PANEL_GAP_PT;

        let page = self.pages.last_mut().expect("cursor always holds a page");
        page.panels.push(Panel {
            kind,
            title: kind.title().to_string(),
            frame,
            bordered: true,
            rows,
        });
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    fn current_page_is_empty(&self) -> bool {
        self.pages
            .last()
            .map(|page| page.panels.is_empty())
            .unwrap_or(true)
    }
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}
