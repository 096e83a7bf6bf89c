//! Checklist report layout.
//!
//! Fixed-coordinate layout on A4 landscape: logo badges, title block,
//! date/shift line, the primary water mini table, then the main table grouped
//! by level and a signature line. Rows that do not fit on a page continue on
//! the next one, with the table header repeated. Row height and column widths
//! are constants; long text is not wrapped.
//!
//! Rows are matched to the catalog by location id, so an entry whose
//! readings are short or out of order still prints every location under its
//! own level; missing rows come out blank.
//!
//! Text goes through WinAnsiEncoding with the standard Helvetica fonts.
//! Characters outside Latin-1 print as `?`.

use crate::errors::{AppError, AppResult};
use crate::export::pdf::{Face, PdfManager};
use crate::models::catalog::{self, Location};
use crate::models::entry::{ChecklistEntry, LocationReading, PrimaryWaterField};
use crate::models::reading::Measure;
use pdf_writer::Content;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ROW_H: f32 = 16.0;
const TABLE_FONT: f32 = 8.0;
const SIGNATURE_BLOCK_H: f32 = 46.0;

const COL_INDEX: f32 = 28.0;
const COL_LOCATION: f32 = 150.0;
const COL_MEASURE: f32 = 52.0;
const COL_REMARK: f32 = 188.0;

const PW_COL: f32 = 100.0;

const LEVEL_SHADE: f32 = 0.85;
const HEADER_SHADE: f32 = 0.92;

/// Labels printed on the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub title: String,
    pub subtitle: String,
    pub left_logo: String,
    pub right_logo: String,
    pub signature_label: String,
    pub file_name: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: "Electromechanical Checklist".to_string(),
            subtitle: "(Temp, Humidity, Noise & Lux)".to_string(),
            left_logo: "EM".to_string(),
            right_logo: "FM".to_string(),
            signature_label: "Signature of Technician".to_string(),
            file_name: "checklist.pdf".to_string(),
        }
    }
}

/// Render the entry as a PDF document. Output depends only on the inputs.
pub fn render_checklist(entry: &ChecklistEntry, settings: &ReportSettings) -> Vec<u8> {
    let mut layout = Layout::start(entry, settings);
    layout.title_block();
    layout.primary_water();
    layout.main_table();
    layout.signature();
    layout.finish()
}

/// Render and write the report to `path`.
pub fn write_checklist(
    entry: &ChecklistEntry,
    settings: &ReportSettings,
    path: &Path,
) -> AppResult<()> {
    let bytes = render_checklist(entry, settings);
    std::fs::write(path, bytes)
        .map_err(|e| AppError::Export(format!("cannot write {}: {e}", path.display())))
}

struct Layout<'a> {
    pdf: PdfManager,
    content: Content,
    entry: &'a ChecklistEntry,
    settings: &'a ReportSettings,
    /// Top edge of the next thing to draw.
    y: f32,
    page_no: usize,
}

impl<'a> Layout<'a> {
    fn start(entry: &'a ChecklistEntry, settings: &'a ReportSettings) -> Self {
        let mut pdf = PdfManager::a4_landscape();
        let content = pdf.new_page();
        let y = pdf.page_h - pdf.margin;
        Self {
            pdf,
            content,
            entry,
            settings,
            y,
            page_no: 1,
        }
    }

    fn left(&self) -> f32 {
        self.pdf.margin
    }

    fn table_width(&self) -> f32 {
        COL_INDEX + COL_LOCATION + COL_MEASURE * 8.0 + COL_REMARK
    }

    fn shift_text(&self) -> &str {
        self.entry.shift.map(|s| s.code()).unwrap_or("")
    }

    fn bottom_limit(&self) -> f32 {
        self.pdf.margin + 10.0
    }

    fn title_block(&mut self) {
        let (w, m) = (self.pdf.page_w, self.pdf.margin);
        let badge_w = 90.0;
        let badge_h = 36.0;
        let top = self.y;

        // logo badges
        for (x, label) in [
            (m, self.settings.left_logo.as_str()),
            (w - m - badge_w, self.settings.right_logo.as_str()),
        ] {
            let y = top - badge_h;
            self.pdf.fill_rect(&mut self.content, x, y, badge_w, badge_h, HEADER_SHADE);
            self.pdf.draw_cell_borders(&mut self.content, x, y, badge_w, badge_h);
            self.pdf.draw_text_centered(
                &mut self.content,
                x + badge_w / 2.0,
                top - badge_h / 2.0 - 5.0,
                14.0,
                Face::Bold,
                label,
            );
        }

        self.pdf.draw_text_centered(
            &mut self.content,
            w / 2.0,
            top - 16.0,
            16.0,
            Face::Bold,
            &self.settings.title,
        );
        self.pdf.draw_text_centered(
            &mut self.content,
            w / 2.0,
            top - 32.0,
            11.0,
            Face::Regular,
            &self.settings.subtitle,
        );

        let line_y = top - badge_h - 20.0;
        let date = format!("Date: {}", self.entry.date);
        let shift = format!("Shift: {}", self.shift_text());
        self.pdf.draw_text(&mut self.content, m, line_y, 11.0, Face::Regular, &date);
        self.pdf.draw_text(
            &mut self.content,
            m + 220.0,
            line_y,
            11.0,
            Face::Regular,
            &shift,
        );

        self.y = line_y - 12.0;
    }

    fn primary_water(&mut self) {
        let x0 = self.left();

        self.y -= 12.0;
        self.pdf.draw_text(
            &mut self.content,
            x0,
            self.y,
            10.0,
            Face::Bold,
            "PRIMARY WATER TEMPERATURE (°C)",
        );
        self.y -= 8.0;

        let header_y = self.y - ROW_H;
        let value_y = header_y - ROW_H;
        self.pdf.fill_rect(
            &mut self.content,
            x0,
            header_y,
            PW_COL * PrimaryWaterField::ALL.len() as f32,
            ROW_H,
            HEADER_SHADE,
        );

        let entry = self.entry;
        let mut x = x0;
        for field in PrimaryWaterField::ALL {
            let value = entry.primary_water.get(field);
            self.cell(x, header_y, PW_COL, ROW_H, Face::Bold, field.label());
            self.cell(x, value_y, PW_COL, ROW_H, Face::Regular, value);
            x += PW_COL;
        }

        self.y = value_y - 18.0;
    }

    /// Two header rows: group labels, then one label per reading field.
    /// Index, location and remarks span both rows.
    fn table_header(&mut self) {
        let x0 = self.left();
        let top = self.y;
        let row1 = top - ROW_H;
        let row2 = top - 2.0 * ROW_H;
        let group_w = COL_MEASURE * 4.0;
        let width = self.table_width();

        self.pdf.fill_rect(
            &mut self.content,
            x0,
            row2,
            width,
            2.0 * ROW_H,
            HEADER_SHADE,
        );

        let mut x = x0;
        self.cell(x, row2, COL_INDEX, 2.0 * ROW_H, Face::Bold, "SI No");
        x += COL_INDEX;
        self.cell(x, row2, COL_LOCATION, 2.0 * ROW_H, Face::Bold, "Location");
        x += COL_LOCATION;

        for label in ["Check 1", "Check 2"] {
            self.cell(x, row1, group_w, ROW_H, Face::Bold, label);
            for measure in Measure::ALL {
                self.cell(x, row2, COL_MEASURE, ROW_H, Face::Bold, measure.label());
                x += COL_MEASURE;
            }
        }

        self.cell(x, row2, COL_REMARK, 2.0 * ROW_H, Face::Bold, "Remarks");

        self.y = row2;
    }

    fn level_row(&mut self, name: &str) {
        let x0 = self.left();
        let y = self.y - ROW_H;
        let w = self.table_width();
        self.pdf.fill_rect(&mut self.content, x0, y, w, ROW_H, LEVEL_SHADE);
        self.cell(x0, y, w, ROW_H, Face::Bold, name);
        self.y = y;
    }

    /// One table cell in the table font.
    fn cell(&mut self, x: f32, y: f32, w: f32, h: f32, face: Face, text: &str) {
        self.pdf.draw_cell(&mut self.content, x, y, w, h, TABLE_FONT, face, text);
    }

    fn reading_for(&self, location: &Location) -> Option<&'a LocationReading> {
        let entry: &'a ChecklistEntry = self.entry;
        entry.readings.iter().find(|r| r.id == location.id)
    }

    /// A catalog row; blank cells when the entry carries no reading for it.
    fn data_row(&mut self, index: usize, location: &Location) {
        let row = self.reading_for(location);
        let y = self.y - ROW_H;
        let mut x = self.left();

        self.cell(x, y, COL_INDEX, ROW_H, Face::Regular, &index.to_string());
        x += COL_INDEX;
        self.cell(x, y, COL_LOCATION, ROW_H, Face::Regular, location.name);
        x += COL_LOCATION;

        let values = match row {
            Some(r) => {
                let mut v = r.group1.values().to_vec();
                v.extend(r.group2.values());
                v
            }
            None => vec![""; 8],
        };
        for value in values {
            self.cell(x, y, COL_MEASURE, ROW_H, Face::Regular, value);
            x += COL_MEASURE;
        }

        let remark = row.map(|r| r.remark.as_str()).unwrap_or("");
        self.cell(x, y, COL_REMARK, ROW_H, Face::Regular, remark);
        self.y = y;
    }

    fn main_table(&mut self) {
        self.table_header();

        let mut index = 0;
        for level in catalog::levels() {
            // a level header never ends a page on its own
            if self.y - 2.0 * ROW_H < self.bottom_limit() {
                self.break_page();
            }
            self.level_row(level.name);

            for location in level.locations {
                if self.y - ROW_H < self.bottom_limit() {
                    self.break_page();
                }
                index += 1;
                self.data_row(index, location);
            }
        }
    }

    fn signature(&mut self) {
        if self.y - SIGNATURE_BLOCK_H < self.pdf.margin {
            self.page_footer();
            let done = std::mem::replace(&mut self.content, Content::new());
            self.pdf.finalize_page(done);
            self.content = self.pdf.new_page();
            self.page_no += 1;
            self.y = self.pdf.page_h - self.pdf.margin;
        }

        let x1 = self.pdf.page_w - self.pdf.margin - 200.0;
        let x2 = self.pdf.page_w - self.pdf.margin;
        let line_y = self.y - 30.0;
        self.pdf.draw_line(&mut self.content, x1, line_y, x2, line_y);
        self.pdf.draw_text_centered(
            &mut self.content,
            (x1 + x2) / 2.0,
            line_y - 12.0,
            9.0,
            Face::Regular,
            &self.settings.signature_label,
        );
        self.y = line_y - 12.0;
    }

    fn page_footer(&mut self) {
        let label = format!("Page {}", self.page_no);
        let x = self.pdf.page_w - self.pdf.margin - 40.0;
        let y = self.pdf.margin - 18.0;
        self.pdf.draw_text(&mut self.content, x, y, 8.0, Face::Regular, &label);
    }

    /// Close the current page and continue the main table on a new one.
    fn break_page(&mut self) {
        self.page_footer();
        let done = std::mem::replace(&mut self.content, Content::new());
        self.pdf.finalize_page(done);
        self.content = self.pdf.new_page();
        self.page_no += 1;

        let top = self.pdf.page_h - self.pdf.margin;
        let caption = format!(
            "{} (continued)   Date: {}   Shift: {}",
            self.settings.title,
            self.entry.date,
            self.shift_text()
        );
        let x = self.left();
        self.pdf.draw_text(&mut self.content, x, top - 10.0, 10.0, Face::Bold, &caption);
        self.y = top - 20.0;
        self.table_header();
    }

    fn finish(mut self) -> Vec<u8> {
        self.page_footer();
        self.pdf.finalize_page(self.content);
        self.pdf.finish()
    }
}
