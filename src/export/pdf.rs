use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    fn resource(self) -> Name<'static> {
        match self {
            Face::Regular => FONT_REGULAR,
            Face::Bold => FONT_BOLD,
        }
    }
}

/// Low-level page writer: fonts, pages and a few drawing primitives.
/// Coordinates are PDF points with the origin at the bottom-left corner.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    pub page_w: f32,
    pub page_h: f32,
    pub margin: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
}

impl PdfManager {
    pub fn new(page_w: f32, page_h: f32, margin: f32) -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w,
            page_h,
            margin,

            next_id,
            font_id,
            bold_font_id,
        }
    }

    /// A4 in landscape orientation, 30pt margins.
    pub fn a4_landscape() -> Self {
        Self::new(842.0, 595.0, 30.0)
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a new page and return its (empty) content stream.
    pub fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(FONT_REGULAR, self.font_id);
        fonts.pair(FONT_BOLD, self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Write the stream of the current page. Must run before the next `new_page`.
    pub fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    pub fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        face: Face,
        text: &str,
    ) {
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_font(face.resource(), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    /// Text centred horizontally on `cx`, using an approximate glyph width.
    pub fn draw_text_centered(
        &self,
        content: &mut Content,
        cx: f32,
        y: f32,
        size: f32,
        face: Face,
        text: &str,
    ) {
        let x = cx - text_width(text, size, face) / 2.0;
        self.draw_text(content, x, y, size, face, text);
    }

    pub fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.45, 0.45, 0.45);
        content.set_line_width(0.5);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    pub fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, shade: f32) {
        content.save_state();
        content.set_fill_rgb(shade, shade, shade);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    pub fn draw_line(&self, content: &mut Content, x1: f32, y1: f32, x2: f32, y2: f32) {
        content.save_state();
        content.set_line_width(0.8);
        content.move_to(x1, y1);
        content.line_to(x2, y2);
        content.stroke();
        content.restore_state();
    }

    /// Bordered cell with left-aligned text at a fixed inset. Text is not
    /// clipped: long values run past the border.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_cell(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        size: f32,
        face: Face,
        text: &str,
    ) {
        if !text.is_empty() {
            self.draw_text(
                content,
                x + 3.0,
                y + (h - size) / 2.0 + 1.5,
                size,
                face,
                text,
            );
        }
        self.draw_cell_borders(content, x, y, w, h);
    }

    /// Close the document and return its bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        self.pdf.finish()
    }
}

/// Rough Helvetica advance width, good enough for centring labels.
pub fn text_width(text: &str, size: f32, face: Face) -> f32 {
    let factor = match face {
        Face::Regular => 0.50,
        Face::Bold => 0.55,
    };
    text.chars().count() as f32 * size * factor
}

/// Map text to WinAnsi bytes; characters outside Latin-1 become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (0x20..0x7f).contains(&code) || (0xa0..=0xff).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}
