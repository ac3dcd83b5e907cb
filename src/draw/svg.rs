//! Draw pattern primitives into an SVG document.
//!
//! The document uses millimeter units via its `viewBox`, so a printout at
//! 100% zoom is dimensionally exact.

use crate::bezier::CubicBezier;
use crate::draw::{Align, Canvas, Color, Frame, LineStyle, Pen, TextStyle, CM_TO_MM};
use nalgebra::Vector2;
use std::fmt::Write;

fn fmt(v: f64) -> String {
    format!("{:.2}", v)
}

fn dasharray(style: LineStyle) -> Option<&'static str> {
    match style {
        LineStyle::Solid => None,
        LineStyle::Dashed => Some("5,3"),
        LineStyle::Dotted => Some("2,2"),
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Accumulates drawing primitives and emits a complete SVG document.
pub struct SvgCanvas {
    frame: Frame,
    elements: Vec<String>,
}

impl SvgCanvas {
    /// Create an empty document over the given frame.
    pub fn new(frame: Frame) -> SvgCanvas {
        SvgCanvas {
            frame,
            elements: Vec::new(),
        }
    }

    fn stroke_attrs(&self, pen: Pen) -> String {
        let mut attrs = format!(
            " stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"",
            pen.color.svg_name(),
            fmt(pen.width * 0.03 * CM_TO_MM),
        );
        if let Some(dash) = dasharray(pen.style) {
            let _ = write!(attrs, " stroke-dasharray=\"{}\"", dash);
        }
        attrs
    }

    /// Render and return the complete document.
    pub fn into_svg(self) -> String {
        let mut out = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
            fmt(self.frame.width_mm()),
            fmt(self.frame.height_mm()),
        );
        for element in &self.elements {
            let _ = writeln!(out, "  {}", element);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas for SvgCanvas {
    fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, pen: Pen) {
        let a = self.frame.map(from);
        let b = self.frame.map(to);
        self.elements.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
            fmt(a.x),
            fmt(a.y),
            fmt(b.x),
            fmt(b.y),
            self.stroke_attrs(pen),
        ));
    }

    fn bezier(&mut self, curve: &CubicBezier, pen: Pen) {
        let [p0, p1, p2, p3] = [
            self.frame.map(curve[0]),
            self.frame.map(curve[1]),
            self.frame.map(curve[2]),
            self.frame.map(curve[3]),
        ];
        self.elements.push(format!(
            "<path d=\"M {},{} C {},{} {},{} {},{}\"{}/>",
            fmt(p0.x),
            fmt(p0.y),
            fmt(p1.x),
            fmt(p1.y),
            fmt(p2.x),
            fmt(p2.y),
            fmt(p3.x),
            fmt(p3.y),
            self.stroke_attrs(pen),
        ));
    }

    fn circle(&mut self, center: Vector2<f64>, r: f64, color: Color) {
        let c = self.frame.map(center);
        self.elements.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            fmt(c.x),
            fmt(c.y),
            fmt(r * CM_TO_MM),
            color.svg_name(),
        ));
    }

    fn text(&mut self, at: Vector2<f64>, content: &str, style: TextStyle) {
        let p = self.frame.map(at);
        let anchor = match style.align {
            Align::Left => "start",
            Align::Center => "middle",
            Align::Right => "end",
        };
        let weight = if style.bold {
            " font-weight=\"bold\""
        } else {
            ""
        };
        let open = format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"Arial, sans-serif\" font-size=\"{}\" \
             fill=\"{}\" text-anchor=\"{}\"{}>",
            fmt(p.x),
            fmt(p.y),
            fmt(style.size * 0.035 * CM_TO_MM),
            style.color.svg_name(),
            anchor,
            weight,
        );
        let escaped = escape(content);
        let lines: Vec<&str> = escaped.split('\n').collect();
        if lines.len() == 1 {
            self.elements.push(format!("{open}{escaped}</text>"));
        } else {
            let mut element = open;
            for (i, line) in lines.iter().enumerate() {
                let dy = if i == 0 { "0" } else { "1.2em" };
                let _ = write!(
                    element,
                    "<tspan x=\"{}\" dy=\"{}\">{}</tspan>",
                    fmt(p.x),
                    dy,
                    line
                );
            }
            element.push_str("</text>");
            self.elements.push(element);
        }
    }
}
