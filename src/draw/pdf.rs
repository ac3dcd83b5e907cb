//! Draw pattern primitives into a single-page vector PDF.
//!
//! The page is sized to the frame and drawn at 1:1 physical scale, so the
//! printed sheet can be traced directly. Curves use the native `c` path
//! operator, text is plain Helvetica. Streams are left uncompressed; a
//! pattern sheet is a few kilobytes either way.

use crate::bezier::CubicBezier;
use crate::draw::{Align, Canvas, Color, Frame, LineStyle, Pen, TextStyle, CM_TO_MM};
use nalgebra::Vector2;
use std::fmt::Write;

const MM_TO_PT: f64 = 72.0 / 25.4;

/// Kappa: handle length factor for approximating a quarter circle.
const CIRCLE_K: f64 = 0.552_284_749_830_793_4;

fn fmt(v: f64) -> String {
    format!("{:.2}", v)
}

fn escape_text(content: &str) -> String {
    content
        .replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Accumulates drawing primitives and emits a PDF document.
pub struct PdfCanvas {
    frame: Frame,
    content: String,
}

impl PdfCanvas {
    /// Create an empty single-page document over the given frame.
    pub fn new(frame: Frame) -> PdfCanvas {
        PdfCanvas {
            frame,
            content: String::new(),
        }
    }

    /// Map a pattern point into PDF page coordinates (points, y up).
    fn pt(&self, p: Vector2<f64>) -> (f64, f64) {
        let mapped = self.frame.map(p);
        (
            mapped.x * MM_TO_PT,
            (self.frame.height_mm() - mapped.y) * MM_TO_PT,
        )
    }

    fn set_stroke(&mut self, pen: Pen) {
        let (r, g, b) = pen.color.rgb();
        let _ = writeln!(
            self.content,
            "{} {} {} RG",
            fmt(r as f64 / 255.0),
            fmt(g as f64 / 255.0),
            fmt(b as f64 / 255.0),
        );
        let _ = writeln!(
            self.content,
            "{} w",
            fmt(pen.width * 0.03 * CM_TO_MM * MM_TO_PT)
        );
        let dash = match pen.style {
            LineStyle::Solid => "[] 0 d".to_string(),
            LineStyle::Dashed => format!("[{} {}] 0 d", fmt(5.0 * MM_TO_PT), fmt(3.0 * MM_TO_PT)),
            LineStyle::Dotted => format!("[{} {}] 0 d", fmt(2.0 * MM_TO_PT), fmt(2.0 * MM_TO_PT)),
        };
        let _ = writeln!(self.content, "{}", dash);
    }

    /// Assemble the document and return its bytes.
    pub fn into_pdf(self) -> Vec<u8> {
        let width_pt = self.frame.width_mm() * MM_TO_PT;
        let height_pt = self.frame.height_mm() * MM_TO_PT;

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>",
                fmt(width_pt),
                fmt(height_pt),
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                self.content.len(),
                self.content,
            ),
        ];

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            let _ = write!(out, "{} 0 obj\n{}\nendobj\n", i + 1, body);
        }

        let xref_offset = out.len();
        let _ = write!(out, "xref\n0 {}\n", objects.len() + 1);
        out.push_str("0000000000 65535 f \n");
        for offset in offsets {
            let _ = write!(out, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset,
        );

        out.into_bytes()
    }
}

impl Canvas for PdfCanvas {
    fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, pen: Pen) {
        self.set_stroke(pen);
        let (x1, y1) = self.pt(from);
        let (x2, y2) = self.pt(to);
        let _ = writeln!(
            self.content,
            "{} {} m {} {} l S",
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2),
        );
    }

    fn bezier(&mut self, curve: &CubicBezier, pen: Pen) {
        self.set_stroke(pen);
        let (x0, y0) = self.pt(curve[0]);
        let (x1, y1) = self.pt(curve[1]);
        let (x2, y2) = self.pt(curve[2]);
        let (x3, y3) = self.pt(curve[3]);
        let _ = writeln!(
            self.content,
            "{} {} m {} {} {} {} {} {} c S",
            fmt(x0),
            fmt(y0),
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2),
            fmt(x3),
            fmt(y3),
        );
    }

    fn circle(&mut self, center: Vector2<f64>, r: f64, color: Color) {
        let (red, green, blue) = color.rgb();
        let _ = writeln!(
            self.content,
            "{} {} {} rg",
            fmt(red as f64 / 255.0),
            fmt(green as f64 / 255.0),
            fmt(blue as f64 / 255.0),
        );
        let (cx, cy) = self.pt(center);
        let r_pt = r * CM_TO_MM * MM_TO_PT;
        let k = CIRCLE_K * r_pt;
        // Four bezier arcs around the center, then fill.
        let _ = writeln!(self.content, "{} {} m", fmt(cx + r_pt), fmt(cy));
        let _ = writeln!(
            self.content,
            "{} {} {} {} {} {} c",
            fmt(cx + r_pt),
            fmt(cy + k),
            fmt(cx + k),
            fmt(cy + r_pt),
            fmt(cx),
            fmt(cy + r_pt),
        );
        let _ = writeln!(
            self.content,
            "{} {} {} {} {} {} c",
            fmt(cx - k),
            fmt(cy + r_pt),
            fmt(cx - r_pt),
            fmt(cy + k),
            fmt(cx - r_pt),
            fmt(cy),
        );
        let _ = writeln!(
            self.content,
            "{} {} {} {} {} {} c",
            fmt(cx - r_pt),
            fmt(cy - k),
            fmt(cx - k),
            fmt(cy - r_pt),
            fmt(cx),
            fmt(cy - r_pt),
        );
        let _ = writeln!(
            self.content,
            "{} {} {} {} {} {} c f",
            fmt(cx + k),
            fmt(cy - r_pt),
            fmt(cx + r_pt),
            fmt(cy - k),
            fmt(cx + r_pt),
            fmt(cy),
        );
    }

    fn text(&mut self, at: Vector2<f64>, content: &str, style: TextStyle) {
        let (r, g, b) = style.color.rgb();
        let size_pt = style.size * 0.035 * CM_TO_MM * MM_TO_PT;
        let font = if style.bold { "/F2" } else { "/F1" };
        let (x, y) = self.pt(at);
        let line_height = size_pt * 1.2;

        for (i, line) in content.split('\n').enumerate() {
            // Helvetica averages about half the font size per glyph; close
            // enough for anchoring labels on a pattern sheet.
            let estimated_width = 0.5 * size_pt * line.chars().count() as f64;
            let line_x = match style.align {
                Align::Left => x,
                Align::Center => x - estimated_width / 2.0,
                Align::Right => x - estimated_width,
            };
            let line_y = y - i as f64 * line_height;
            let _ = writeln!(
                self.content,
                "BT {} {} Tf {} {} {} rg {} {} Td ({}) Tj ET",
                font,
                fmt(size_pt),
                fmt(r as f64 / 255.0),
                fmt(g as f64 / 255.0),
                fmt(b as f64 / 255.0),
                fmt(line_x),
                fmt(line_y),
                escape_text(line),
            );
        }
    }
}
