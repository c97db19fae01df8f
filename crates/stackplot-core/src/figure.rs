// File: crates/stackplot-core/src/figure.rs
// Summary: Figure struct and headless rendering pipeline (PNG/JPEG/WebP raster, PDF vector) using Skia.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::geometry::{clamp, RectF};
use crate::hatch::Hatch;
use crate::legend::Legend;
use crate::output::ImageFormat;
use crate::scale::LinearScale;
use crate::surface::{BarRect, DrawSurface, LabelKind, Scene, SegmentHandle, TextLabel};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, Rgba, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels and axis titles.
    pub font_size: f32,
    /// Values drawn on and above bars.
    pub label_font_size: f32,
    pub legend_font_size: f32,
    /// Distance between hatch lines, in pixels.
    pub hatch_spacing: f32,
    /// Text on/off; off keeps output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            font_size: 34.0,
            label_font_size: 20.0,
            legend_font_size: 24.0,
            hatch_spacing: 10.0,
            draw_labels: true,
        }
    }
}

/// Recorded bars and labels plus the axes and legend that frame them.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub scene: Scene,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
}

impl DrawSurface for Figure {
    fn draw_bars(&mut self, bars: Vec<BarRect>, fill: Rgba, hatch: Hatch) -> Result<SegmentHandle> {
        self.scene.draw_bars(bars, fill, hatch)
    }

    fn draw_text(&mut self, label: TextLabel) -> Result<()> {
        self.scene.draw_text(label)
    }
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Render the figure to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.encode_raster(opts, skia::EncodedImageFormat::PNG)
    }

    /// Render to a tightly packed, non-premultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(Error::Surface("reading back raster pixels failed".into()));
        }
        Ok((px, w as u32, h as u32, stride))
    }

    /// Render to `path`, choosing the format from its extension.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<ImageFormat> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let bytes = match format.raster_encoding() {
            Some(encoding) => self.encode_raster(opts, encoding)?,
            None => self.render_to_pdf_bytes(opts)?,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), ?format, bytes = bytes.len(), "wrote figure");
        Ok(format)
    }

    /// Single-page PDF of the figure.
    pub fn render_to_pdf_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut buf: Vec<u8> = Vec::new();
        {
            let doc = skia::pdf::new_document(&mut buf, None);
            let mut page = doc.begin_page((opts.width as f32, opts.height as f32), None);
            self.paint(page.canvas(), opts);
            let doc = page.end_page();
            doc.close();
        }
        if buf.is_empty() {
            return Err(Error::Surface("PDF document is empty".into()));
        }
        Ok(buf)
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| Error::Surface("failed to create raster surface".into()))?;
        self.paint(surface.canvas(), opts);
        Ok(surface)
    }

    fn encode_raster(&self, opts: &RenderOptions, encoding: skia::EncodedImageFormat) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(encoding)
            .ok_or_else(|| Error::Surface(format!("encode {encoding:?} failed")))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Paint every layer onto `canvas`: grid, bars, labels, spines, ticks, legend.
    pub fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let shaper = TextShaper::new();
        canvas.clear(theme.background);

        let plot = plot_rect(opts);
        let sx = LinearScale::new(self.x_axis.min, self.x_axis.max, plot.left, plot.right);
        let sy = LinearScale::new(self.y_axis.min, self.y_axis.max, plot.bottom, plot.top);
        debug!(?plot, groups = self.scene.groups.len(), labels = self.scene.labels.len(), "paint figure");

        draw_grid(canvas, plot, &sy, &self.y_axis, theme);

        canvas.save();
        canvas.clip_rect(skia::Rect::from(plot), skia::ClipOp::Intersect, true);
        for group in &self.scene.groups {
            for bar in &group.bars {
                let rect = RectF::from_ltrb(
                    sx.to_px(bar.left()),
                    sy.to_px(bar.top()),
                    sx.to_px(bar.right()),
                    sy.to_px(bar.base),
                )
                .sorted();
                draw_hatched_rect(canvas, rect, group.fill, group.hatch, opts.hatch_spacing, theme.hatch);
            }
        }
        canvas.restore();

        if opts.draw_labels {
            for label in &self.scene.labels {
                let x = sx.to_px(label.x);
                // labels above the plot top stay readable
                let y = clamp(sy.to_px(label.y), opts.label_font_size, plot.bottom);
                let color = match label.kind {
                    LabelKind::Segment => theme.bar_label,
                    LabelKind::Cumulative => theme.axis_label,
                };
                shaper.draw_centered(canvas, &label.text, x, y, opts.label_font_size, color);
            }
        }

        draw_spines(canvas, plot, theme);
        draw_ticks(canvas, &shaper, plot, &sx, &sy, &self.x_axis, &self.y_axis, opts);

        if let Some(legend) = &self.legend {
            draw_legend(canvas, &shaper, plot, legend, &self.scene, opts);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn plot_rect(opts: &RenderOptions) -> RectF {
    let i = opts.insets;
    let w = (opts.width - i.hsum() as i32).max(1);
    let h = (opts.height - i.vsum() as i32).max(1);
    RectF::from_ltrb(
        i.left as f32,
        i.top as f32,
        (i.left as i32 + w) as f32,
        (i.top as i32 + h) as f32,
    )
}

fn to_color(c: Rgba) -> skia::Color {
    let [r, g, b, a] = c.to_rgba8();
    skia::Color::from_argb(a, r, g, b)
}

fn draw_grid(canvas: &skia::Canvas, plot: RectF, sy: &LinearScale, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &t in &y.ticks {
        let py = sy.to_px(t);
        if py < plot.top - 0.5 || py > plot.bottom + 0.5 { continue; }
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_hatched_rect(canvas: &skia::Canvas, rect: RectF, fill: Rgba, hatch: Hatch, spacing: f32, ink: skia::Color) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(to_color(fill));
    let r = skia::Rect::from(rect);
    canvas.draw_rect(r, &body);

    let Some((_, dy)) = hatch.direction() else { return };
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.2);
    stroke.set_color(ink);

    canvas.save();
    canvas.clip_rect(r, skia::ClipOp::Intersect, true);
    let h = rect.height();
    let mut offset = -h;
    let step = spacing.max(2.0);
    while offset <= rect.width() {
        let x0 = rect.left + offset;
        if dy > 0.0 {
            canvas.draw_line((x0, rect.top), (x0 + h, rect.bottom), &stroke);
        } else {
            canvas.draw_line((x0, rect.bottom), (x0 + h, rect.top), &stroke);
        }
        offset += step;
    }
    canvas.restore();
}

/// Left and bottom spines only.
fn draw_spines(canvas: &skia::Canvas, plot: RectF, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);
}

fn draw_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x: &Axis,
    y: &Axis,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.5);
    let len = 8.0;
    let size = opts.font_size;

    // bottom ticks only; the top spine is hidden
    for (i, &t) in x.ticks.iter().enumerate() {
        let px = sx.to_px(t);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + len), &tick);
        if opts.draw_labels {
            shaper.draw_centered(canvas, &x.tick_label(i), px, plot.bottom + len + size * 0.75, size, theme.axis_label);
        }
    }
    for (i, &t) in y.ticks.iter().enumerate() {
        let py = sy.to_px(t);
        canvas.draw_line((plot.left - len, py), (plot.left, py), &tick);
        if opts.draw_labels {
            shaper.draw_right_centered(canvas, &y.tick_label(i), plot.left - len - 6.0, py, size, theme.axis_label);
        }
    }

    if opts.draw_labels {
        shaper.draw_centered(canvas, &x.label, plot.center_x(), plot.bottom + len + size * 2.1, size, theme.axis_label);
        let y_label_x = (plot.left - len - size * 2.6).max(size * 0.6);
        shaper.draw_rotated_centered(canvas, &y.label, y_label_x, plot.center_y(), size, theme.axis_label);
    }
}

/// Legend band spanning the plot width, sitting just above the plot top, no frame.
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectF,
    legend: &Legend,
    scene: &Scene,
    opts: &RenderOptions,
) {
    if legend.is_empty() { return; }
    let size = opts.legend_font_size;
    let row_h = size * 1.5;
    let rows = legend.rows() as f32;
    let band_bottom = plot.top - plot.height() * 0.02;
    let band_top = band_bottom - rows * row_h;
    let col_w = plot.width() / legend.columns as f32;
    let (sw_w, sw_h) = (size * 2.0, size * 0.9);

    for (entry, (row, col)) in legend.entries.iter().zip(legend.cells()) {
        let Some(group) = scene.group(entry.handle) else { continue };
        let x = plot.left + col as f32 * col_w;
        let cy = band_top + row as f32 * row_h + row_h * 0.5;
        let swatch = RectF::from_ltrb(x, cy - sw_h * 0.5, x + sw_w, cy + sw_h * 0.5);
        draw_hatched_rect(canvas, swatch, group.fill, group.hatch, opts.hatch_spacing * 0.6, opts.theme.hatch);
        if opts.draw_labels {
            shaper.draw_left_centered(canvas, &entry.label, x + sw_w + size * 0.4, cy, size, opts.theme.legend_text);
        }
    }
}
