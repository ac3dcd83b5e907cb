//! Straight skirt block pattern drafting.
//!
//! A dartless straight skirt: the side seam curves out from the waist to
//! the hip quarter width and falls straight to the hem. Front and back
//! pieces share the construction; the back is mirrored next to the front
//! like on the bodice sheet.

use crate::bezier::CubicBezier;
use crate::bounding_box::BoundingBox;
use crate::draw::{Canvas, Color, Frame, Pen, TextStyle};
use crate::measurements::FullMeasurements;
use crate::pattern::{draw_checked, mirror_x, DraftError, Pattern, Sheet, Variant};
use nalgebra::Vector2;
use serde::Deserialize;

/// Measurements for the straight skirt block.
#[derive(Debug, Clone, Deserialize)]
pub struct SkirtMeasurements {
    /// Tour de taille.
    pub full_waist: f64,
    /// Tour de hanches.
    pub full_hip: f64,
    /// Hauteur taille-hanches.
    pub waist_to_hip: f64,
    /// Hauteur taille-genou.
    pub waist_to_knee: f64,
    /// Hauteur taille-sol.
    pub waist_to_floor: f64,
    /// Longueur de jupe.
    #[serde(default = "default_skirt_length")]
    pub skirt_length: f64,
}

fn default_skirt_length() -> f64 {
    65.0
}

impl SkirtMeasurements {
    /// Derive skirt measurements from a full body record.
    pub fn from_full(fm: &FullMeasurements, skirt_length: f64) -> SkirtMeasurements {
        SkirtMeasurements {
            full_waist: fm.full_waist,
            full_hip: fm.full_hip,
            waist_to_hip: fm.waist_to_hip,
            waist_to_knee: fm.waist_to_knee,
            waist_to_floor: fm.waist_to_floor,
            skirt_length,
        }
    }
}

/// Straight skirt block with front and back pieces.
pub struct SkirtPattern {
    /// Point storage and stretch state.
    pub sheet: Sheet,
    m: SkirtMeasurements,
    gap: f64,
}

impl SkirtPattern {
    /// Build the pattern.
    pub fn new(measurements: SkirtMeasurements) -> SkirtPattern {
        let mut pattern = SkirtPattern {
            sheet: Sheet::new(),
            m: measurements,
            gap: 5.0,
        };
        pattern.build_construction_points();
        pattern
    }

    /// Shrink the pattern for stretch fabric (at most once).
    pub fn stretch(&mut self, horizontal: f64, vertical: f64, usage: f64) -> Result<(), DraftError> {
        self.sheet.stretch(horizontal, vertical, usage)
    }

    fn build_construction_points(&mut self) {
        let m = &self.m;
        let pts = &mut self.sheet.points;

        // Waist line as the reference
        let a = pts.set("A", Vector2::zeros());
        pts.set("A1", a - Vector2::new(m.full_waist / 4.0, 0.0));

        // Hip line
        let b = pts.set("B", Vector2::new(0.0, -m.waist_to_hip));
        let hip_width = m.full_hip / 4.0;
        pts.set("B1", b - Vector2::new(hip_width, 0.0));

        // Hem, straight down from the hip width
        let c = pts.set("C", Vector2::new(0.0, -m.skirt_length));
        pts.set("C1", c - Vector2::new(hip_width, 0.0));
    }

    /// Mirror a point onto the back piece.
    fn mirrored(&self, p: Vector2<f64>) -> Vector2<f64> {
        mirror_x(p, self.gap)
    }

    fn plot_piece(
        &self,
        canvas: &mut dyn Canvas,
        mirror: bool,
        warnings: &mut Vec<String>,
    ) {
        let place = |p: Vector2<f64>| if mirror { self.mirrored(p) } else { p };
        let (pen, piece) = if mirror {
            (Pen::solid(Color::Green), "back")
        } else {
            (Pen::solid(Color::Blue), "front")
        };

        let pts = &self.sheet.points;
        let a = place(pts.get("A"));
        let a1 = place(pts.get("A1"));
        let b1 = place(pts.get("B1"));
        let c = place(pts.get("C"));
        let c1 = place(pts.get("C1"));

        // Hip curve A1 → B1: leaves the waist straight down and arrives
        // vertical at the hip, after which the seam falls plumb.
        let control_dist = (b1 - a1).norm() / 3.0;
        let hip_curve = CubicBezier([
            a1,
            a1 + Vector2::new(0.0, -control_dist),
            b1 + Vector2::new(0.0, control_dist),
            b1,
        ]);
        draw_checked(
            canvas,
            &format!("{piece}_side_A1_B1"),
            &hip_curve,
            pen,
            warnings,
        );

        // Side seam below the hip, hem, center, waist
        canvas.line(b1, c1, pen);
        canvas.line(c, c1, pen);
        canvas.line(a, c, pen);
        canvas.line(a, a1, pen);
    }

    fn plot_reference(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        let pts = &self.sheet.points;

        // Construction grid (front only): hip line and knee level. The knee
        // guide comes from the measurement, so it follows the sheet's
        // vertical stretch factor.
        canvas.line(pts.get("B"), pts.get("B1"), Pen::dashed(Color::Gray));
        let knee_y = -self.m.waist_to_knee * self.sheet.v_factor;
        let side_x = pts.get("B1").x;
        canvas.line(
            Vector2::new(0.0, knee_y),
            Vector2::new(side_x, knee_y),
            Pen::dotted(Color::Gray),
        );
        canvas.text(
            Vector2::new(1.0, knee_y + 0.5),
            "knee",
            TextStyle::label(Color::Gray),
        );

        self.plot_piece(canvas, false, warnings);
        self.plot_piece(canvas, true, warnings);

        // Front labels with coordinates relative to A
        let a = pts.get("A");
        for (name, &coord) in pts.iter() {
            canvas.circle(coord, 0.1, Color::Blue);
            let label = format!(
                "{}\n({:.1}, {:.1})",
                name,
                (coord.x - a.x).abs(),
                coord.y - a.y
            );
            canvas.text(
                coord + Vector2::new(0.5, 0.0),
                &label,
                TextStyle::label(Color::Blue),
            );
        }

        // Back labels, mirrored
        let m_a = self.mirrored(a);
        for (name, &coord) in pts.iter() {
            let m_coord = self.mirrored(coord);
            canvas.circle(m_coord, 0.1, Color::Green);
            let label = format!(
                "{}\n({:.1}, {:.1})",
                name,
                (m_coord.x - m_a.x).abs(),
                m_coord.y - m_a.y
            );
            canvas.text(
                m_coord + Vector2::new(0.5, 0.0),
                &label,
                TextStyle::label(Color::Green),
            );
        }

        self.plot_footer(canvas);
    }

    fn plot_printable(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        self.plot_piece(canvas, false, warnings);
        self.plot_piece(canvas, true, warnings);
        self.plot_footer(canvas);
    }

    /// Scale bar and piece labels, shared by both variants.
    fn plot_footer(&self, canvas: &mut dyn Canvas) {
        let pts = &self.sheet.points;
        let c = pts.get("C");
        let c1 = pts.get("C1");

        let scale_y = c.y - 5.0;
        canvas.line(
            Vector2::new(0.0, scale_y),
            Vector2::new(10.0, scale_y),
            Pen::solid(Color::Black).width(4.0),
        );
        canvas.text(
            Vector2::new(5.0, scale_y - 2.0),
            "10 cm Scale",
            TextStyle::centered(Color::Black),
        );

        let label_y = pts.get("B").y;
        canvas.text(
            Vector2::new((c.x + c1.x) / 2.0, label_y),
            "FRONT",
            TextStyle::heading(Color::Blue),
        );
        let m_c = self.mirrored(c);
        let m_c1 = self.mirrored(c1);
        canvas.text(
            Vector2::new((m_c.x + m_c1.x) / 2.0, label_y),
            "BACK",
            TextStyle::heading(Color::Green),
        );
    }
}

impl Pattern for SkirtPattern {
    fn frame(&self) -> Frame {
        let bb = BoundingBox::from_iter(self.sheet.points.values().copied());
        let frame_box = BoundingBox {
            min: Vector2::new(bb.min.x - 5.0, bb.min.y - 10.0),
            max: Vector2::new(-bb.min.x + self.gap + 5.0, bb.max.y + 5.0),
        };
        Frame::new(frame_box, true)
    }

    fn title(&self) -> Option<String> {
        Some(format!(
            "Straight Skirt Block - Full Waist: {}cm | Full Hip: {}cm",
            self.m.full_waist, self.m.full_hip
        ))
    }

    fn plot(&self, canvas: &mut dyn Canvas, variant: Variant, warnings: &mut Vec<String>) {
        if self.m.skirt_length > self.m.waist_to_floor {
            let message = format!(
                "skirt length {:.1} cm exceeds waist to floor {:.1} cm",
                self.m.skirt_length, self.m.waist_to_floor
            );
            log::warn!("{message}");
            warnings.push(message);
        }
        match variant {
            Variant::Construction => self.plot_reference(canvas, warnings),
            Variant::Printable => self.plot_printable(canvas, warnings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::default_measurements;
    use approx::assert_relative_eq;

    fn t38_pattern() -> SkirtPattern {
        let fm = default_measurements(38);
        SkirtPattern::new(SkirtMeasurements::from_full(&fm, 65.0))
    }

    #[test]
    fn quarter_widths_and_levels() {
        let pattern = t38_pattern();
        let pts = &pattern.sheet.points;
        assert_relative_eq!(pts.get("A1").x, -68.0 / 4.0);
        assert_relative_eq!(pts.get("B1").x, -94.0 / 4.0);
        assert_relative_eq!(pts.get("B").y, -22.0);
        assert_relative_eq!(pts.get("C").y, -65.0);
        // seam below the hip is plumb
        assert_relative_eq!(pts.get("C1").x, pts.get("B1").x);
    }

    #[test]
    fn renders_both_variants_without_warnings() {
        let pattern = t38_pattern();
        let construction = pattern.render_svg(Variant::Construction);
        assert!(construction.output.contains("<svg"));
        assert!(construction.output.contains("FRONT"));
        assert!(construction.output.contains("knee"));
        assert!(construction.warnings.is_empty());

        let printable = pattern.render_svg(Variant::Printable);
        assert!(printable.output.contains("10 cm Scale"));
        assert!(!printable.output.contains("knee"));
    }

    #[test]
    fn overlong_skirt_is_flagged_but_still_drawn() {
        let fm = default_measurements(38);
        let pattern = SkirtPattern::new(SkirtMeasurements::from_full(&fm, 120.0));
        let rendered = pattern.render_svg(Variant::Printable);
        assert!(rendered.output.contains("<svg"));
        assert_eq!(rendered.warnings.len(), 1);
        assert!(rendered.warnings[0].contains("waist to floor"));
    }

    #[test]
    fn stretch_applies_once() {
        let mut pattern = t38_pattern();
        assert!(pattern.stretch(0.2, 0.0, 1.0).is_ok());
        assert!(pattern.stretch(0.2, 0.0, 1.0).is_err());
    }
}
