// File: crates/stackplot-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with centered and rotated placement.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with the text's box centered on (`cx`, `cy`).
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        p.paint(canvas, (cx - w * 0.5, cy - h * 0.5));
    }

    /// Draw with the box's left edge at `x`, vertically centered on `cy`.
    pub fn draw_left_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        let h = p.height();
        p.paint(canvas, (x, cy - h * 0.5));
    }

    /// Draw with the box's right edge at `x`, vertically centered on `cy`.
    pub fn draw_right_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        p.paint(canvas, (x - w, cy - h * 0.5));
    }

    /// Centered on (`cx`, `cy`), rotated a quarter turn counter-clockwise (vertical axis titles).
    pub fn draw_rotated_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        self.draw_centered(canvas, text, 0.0, 0.0, size, color);
        canvas.restore();
    }
}
