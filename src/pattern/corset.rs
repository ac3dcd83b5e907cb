//! Corset / bodice block pattern drafting.
//!
//! Constructs front and back bodice pieces from body measurements using
//! classical drafting ratios with bezier curve interpolation. The waist
//! line is the reference: y grows upward toward the neck, the quarter
//! widths extend to negative x, and the back piece is mirrored next to the
//! front for the combined sheet.

use crate::bezier::CubicBezier;
use crate::bounding_box::BoundingBox;
use crate::dichotomy::dichotomic_search;
use crate::draw::{Canvas, Color, Frame, Pen, TextStyle};
use crate::fit::pin_handle_through_point;
use crate::measurements::FullMeasurements;
use crate::pattern::{
    draw_checked, mirror_x, rotated90, unit_or_zero, DraftError, Pattern, Sheet, Variant,
};
use nalgebra::Vector2;
use serde::Deserialize;
use std::f64::consts::PI;

/// Subset of measurements the corset draft needs, plus the derived neck
/// construction values.
#[derive(Debug, Clone)]
pub struct CorsetMeasurements {
    /// Longueur taille dos.
    pub back_waist_length: f64,
    /// Longueur taille devant.
    pub front_waist_length: f64,
    /// Tour de poitrine.
    pub full_bust: f64,
    /// Hauteur de poitrine.
    pub bust_height: f64,
    /// Tour de taille.
    pub full_waist: f64,
    /// Tour de bassin.
    pub full_hip: f64,
    /// 1/2 carrure dos.
    pub half_back_width: f64,
    /// 1/2 carrure devant.
    pub half_front_width: f64,
    /// Longueur d'épaule.
    pub shoulder_length: f64,
    /// Hauteur de dessous de bras.
    pub underarm_height: f64,
    /// Hauteur taille-bassin.
    pub waist_to_hip: f64,
    /// Derived: horizontal neck opening.
    pub neck_width: f64,
    /// Derived: vertical back neck rise.
    pub neck_back_height: f64,
}

impl CorsetMeasurements {
    /// Derive the corset measurements from a full body record.
    ///
    /// The neck opening is not measured directly. With the back rise fixed
    /// at 2 cm and the front rise following from the waist length
    /// difference, the width `a` must satisfy
    ///
    /// `arc(a, back) + arc(a, front) = neck_circumference / 2`
    ///
    /// where each side is approximated as a quarter ellipse,
    /// `arc ≈ (π/2)·sqrt((a² + b²)/2)`. Solved by bisection; the upper
    /// bracket `circumference/π` is the width of a circular neck, which the
    /// sum already overshoots.
    pub fn from_full(fm: &FullMeasurements) -> CorsetMeasurements {
        let neck_back_height = 2.0;
        let neck_front_height = fm.back_waist_length - fm.front_waist_length + neck_back_height;
        let nc = fm.neck_circumference;

        let f = |a: f64| {
            ((a * a + neck_back_height * neck_back_height) / 2.0).sqrt()
                + ((a * a + neck_front_height * neck_front_height) / 2.0).sqrt()
                - nc / PI
        };
        let neck_width = dichotomic_search(f, 0.01, nc / PI, 1e-6);

        CorsetMeasurements {
            back_waist_length: fm.back_waist_length,
            front_waist_length: fm.front_waist_length,
            full_bust: fm.full_bust,
            bust_height: fm.bust_height,
            full_waist: fm.full_waist,
            full_hip: fm.full_hip,
            half_back_width: fm.half_back_width,
            half_front_width: fm.half_front_width,
            shoulder_length: fm.shoulder_length,
            underarm_height: fm.underarm_height,
            waist_to_hip: fm.waist_to_hip,
            neck_width,
            neck_back_height,
        }
    }
}

/// Shaping ratios for the corset's bezier curves.
#[derive(Debug, Clone, Copy)]
pub struct CorsetControl {
    /// E1 horizontal offset from E, as a ratio of the neck width.
    pub front_neck_center: f64,
    /// F1 horizontal offset from F, as a ratio of the neck width.
    pub back_neck_center: f64,
    /// H1 distance from H, as a ratio of the neck width.
    pub front_neck_top: f64,
    /// H2 distance from H, as a ratio of the neck width.
    pub back_neck_top: f64,
    /// Armhole handle offset from C1, as a ratio of the underarm height.
    pub armhole_curve: f64,
}

impl Default for CorsetControl {
    fn default() -> CorsetControl {
        CorsetControl {
            front_neck_center: 0.8,
            back_neck_center: 0.5,
            front_neck_top: 0.34,
            back_neck_top: 0.20,
            armhole_curve: 0.4,
        }
    }
}

/// Partial overrides for [`CorsetControl`], typically deserialized from a
/// request's control-parameter mapping. Unknown names are rejected.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsetControlOverrides {
    /// Override for [`CorsetControl::front_neck_center`].
    pub front_neck_center: Option<f64>,
    /// Override for [`CorsetControl::back_neck_center`].
    pub back_neck_center: Option<f64>,
    /// Override for [`CorsetControl::front_neck_top`].
    pub front_neck_top: Option<f64>,
    /// Override for [`CorsetControl::back_neck_top`].
    pub back_neck_top: Option<f64>,
    /// Override for [`CorsetControl::armhole_curve`].
    pub armhole_curve: Option<f64>,
}

impl CorsetControl {
    /// Apply a set of partial overrides onto these defaults.
    pub fn with_overrides(self, overrides: &CorsetControlOverrides) -> CorsetControl {
        CorsetControl {
            front_neck_center: overrides.front_neck_center.unwrap_or(self.front_neck_center),
            back_neck_center: overrides.back_neck_center.unwrap_or(self.back_neck_center),
            front_neck_top: overrides.front_neck_top.unwrap_or(self.front_neck_top),
            back_neck_top: overrides.back_neck_top.unwrap_or(self.back_neck_top),
            armhole_curve: overrides.armhole_curve.unwrap_or(self.armhole_curve),
        }
    }
}

/// Corset / bodice block with front and back pieces.
pub struct CorsetPattern {
    /// Point storage and stretch state.
    pub sheet: Sheet,
    m: CorsetMeasurements,
    control: CorsetControl,
    /// Horizontal gap between the front piece and the mirrored back piece.
    gap: f64,
}

impl CorsetPattern {
    /// Build the pattern: construction points, then bezier helpers.
    pub fn new(measurements: CorsetMeasurements, control: CorsetControl) -> CorsetPattern {
        let mut pattern = CorsetPattern {
            sheet: Sheet::new(),
            m: measurements,
            control,
            gap: 5.0,
        };
        pattern.build_construction_points();
        pattern.build_bezier_helpers();
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
        let b = pts.set("B", Vector2::zeros());
        let b1 = pts.set("B1", b - Vector2::new(m.full_waist / 4.0, 0.0));

        // Neck construction
        let e = pts.set("E", Vector2::new(0.0, m.front_waist_length));
        let f = pts.set(
            "F",
            Vector2::new(0.0, m.back_waist_length + m.neck_back_height / 2.0),
        );
        let g = e - Vector2::new(m.neck_width, 0.0);
        let h = pts.set(
            "H",
            f + Vector2::new(-m.neck_width, m.neck_back_height / 2.0),
        );

        // Hip and bust levels
        let a = pts.set("A", Vector2::new(0.0, -m.waist_to_hip));
        let hip_width = m.full_hip / 4.0;
        pts.set("A1", a - Vector2::new(hip_width, 0.0));
        let c = pts.set("C", Vector2::new(0.0, e.y - m.bust_height));

        // C1 sits at the hip quarter width, one underarm height up the
        // seam from B1.
        let dx = -hip_width - b1.x;
        let dy = (m.underarm_height * m.underarm_height - dx * dx).sqrt();
        pts.set("C1", Vector2::new(-hip_width, b1.y + dy));

        // Shoulder level, halfway between F and C
        let d = pts.set("D", (f + c) / 2.0);
        pts.set("D1", d - Vector2::new(m.half_front_width, 0.0));
        pts.set("D2", d - Vector2::new(m.half_back_width, 0.0));

        // Shoulder top: J a third of the way from G to H, K one shoulder
        // length out on the horizontal.
        let j = (g * 2.0 + h) / 3.0;
        let k_width = (m.shoulder_length * m.shoulder_length - (h.y - j.y).powi(2)).sqrt();
        pts.set("K", j - Vector2::new(k_width, 0.0));
    }

    /// Compute bezier handle points for the computer-drawn curves.
    ///
    /// Only needed when curves are drawn automatically; manual drafting
    /// with a French ruler works from the construction points alone.
    fn build_bezier_helpers(&mut self) {
        let m = &self.m;
        let front_neck_center = self.control.front_neck_center * m.neck_width;
        let back_neck_center = self.control.back_neck_center * m.neck_width;
        let front_neck_top = self.control.front_neck_top * m.neck_width;
        let back_neck_top = self.control.back_neck_top * m.neck_width;
        let armhole_offset = self.control.armhole_curve * m.underarm_height;

        let e = self.sheet.points.get("E");
        let f = self.sheet.points.get("F");
        let h = self.sheet.points.get("H");
        let k = self.sheet.points.get("K");
        let c1 = self.sheet.points.get("C1");
        let b1 = self.sheet.points.get("B1");

        // Neckline center handles
        self.sheet
            .helpers
            .set("E1", e - Vector2::new(front_neck_center, 0.0));
        self.sheet
            .helpers
            .set("F1", f + Vector2::new(-back_neck_center, 0.0));

        // Neckline top handles: perpendicular to the shoulder line H-K,
        // oriented toward the piece they belong to.
        let perp_hk = unit_or_zero(rotated90(k - h));
        let toward_e = if perp_hk.dot(&(e - h)) < 0.0 {
            -perp_hk
        } else {
            perp_hk
        };
        self.sheet.helpers.set("H1", h + toward_e * front_neck_top);
        let toward_f = if perp_hk.dot(&(f - h)) < 0.0 {
            -perp_hk
        } else {
            perp_hk
        };
        self.sheet.helpers.set("H2", h + toward_f * back_neck_top);

        // Armhole: the handle at C1 is placed on the perpendicular of the
        // side seam, the handle at K slides along the perpendicular of the
        // shoulder line until the curve runs through the carrure point.
        let perp_kh = unit_or_zero(rotated90(h - k));
        let perp_side = unit_or_zero(rotated90(c1 - b1));

        let front = self.sheet.points.get("D1");
        let (c11, k1) = Self::armhole_handles(k, c1, front, perp_kh, perp_side, armhole_offset);
        self.sheet.helpers.set("C11", c11);
        self.sheet.helpers.set("K1", k1);

        let back = self.sheet.points.get("D2");
        let (c12, k2) = Self::armhole_handles(k, c1, back, perp_kh, perp_side, armhole_offset);
        self.sheet.helpers.set("C12", c12);
        self.sheet.helpers.set("K2", k2);
    }

    /// Handles of one armhole curve `K → carrure → C1`.
    fn armhole_handles(
        k: Vector2<f64>,
        c1: Vector2<f64>,
        carrure: Vector2<f64>,
        perp_kh: Vector2<f64>,
        perp_side: Vector2<f64>,
        offset: f64,
    ) -> (Vector2<f64>, Vector2<f64>) {
        let toward = |dir: Vector2<f64>, target: Vector2<f64>, anchor: Vector2<f64>| {
            if dir.dot(&(target - anchor)) < 0.0 {
                -dir
            } else {
                dir
            }
        };

        let inner = c1 + toward(perp_side, carrure, c1) * offset;
        let fitted =
            pin_handle_through_point(k, c1, inner, toward(perp_kh, carrure, k), carrure);
        (inner, fitted.handle)
    }

    /// Mirror a point onto the back piece.
    fn mirrored(&self, p: Vector2<f64>) -> Vector2<f64> {
        mirror_x(p, self.gap)
    }

    fn plot_front_curves(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        let pts = &self.sheet.points;
        let helpers = &self.sheet.helpers;
        let pen = Pen::solid(Color::Blue);

        let a = pts.get("A");
        let a1 = pts.get("A1");
        let b = pts.get("B");
        let b1 = pts.get("B1");
        let c1 = pts.get("C1");
        let e = pts.get("E");
        let h = pts.get("H");
        let k = pts.get("K");

        // Side seam A1 → B1: vertical start at the hip, blending into the
        // waist-to-neck direction at B1.
        let control_dist = (b1 - a1).norm() / 3.0;
        let unit_be = unit_or_zero(e - b);
        let side_lower = CubicBezier([
            a1,
            a1 + Vector2::new(0.0, control_dist),
            b1 - unit_be * control_dist,
            b1,
        ]);
        draw_checked(canvas, "front_side_A1_B1", &side_lower, pen, warnings);

        // Side seam B1 → C1
        let seam = c1 - b1;
        let side_upper = CubicBezier([
            b1,
            b1 + unit_be * control_dist,
            c1 - unit_or_zero(seam) * (seam.norm() * 0.3),
            c1,
        ]);
        draw_checked(canvas, "front_side_B1_C1", &side_upper, pen, warnings);

        // Center front and hem
        canvas.line(a, e, pen);
        canvas.line(a, a1, pen);

        // Neckline H → E
        let neck = CubicBezier([h, helpers.get("H1"), helpers.get("E1"), e]);
        draw_checked(canvas, "front_neck_H_E", &neck, pen, warnings);

        // Shoulder
        canvas.line(h, k, pen);

        // Armhole K → C1 through D1
        let armhole = CubicBezier([k, helpers.get("K1"), helpers.get("C11"), c1]);
        draw_checked(canvas, "front_armhole_K_C1", &armhole, pen, warnings);
    }

    fn plot_back_curves(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        let pts = &self.sheet.points;
        let helpers = &self.sheet.helpers;
        let pen = Pen::solid(Color::Green);

        let a = self.mirrored(pts.get("A"));
        let a1 = self.mirrored(pts.get("A1"));
        let b = self.mirrored(pts.get("B"));
        let b1 = self.mirrored(pts.get("B1"));
        let c1 = self.mirrored(pts.get("C1"));
        let e = self.mirrored(pts.get("E"));
        let f = self.mirrored(pts.get("F"));
        let h = self.mirrored(pts.get("H"));
        let k = self.mirrored(pts.get("K"));

        let control_dist = (b1 - a1).norm() / 3.0;
        let unit_be = unit_or_zero(e - b);
        let side_lower = CubicBezier([
            a1,
            a1 + Vector2::new(0.0, control_dist),
            b1 - unit_be * control_dist,
            b1,
        ]);
        draw_checked(canvas, "back_side_A1_B1", &side_lower, pen, warnings);

        let seam = c1 - b1;
        let side_upper = CubicBezier([
            b1,
            b1 + unit_be * control_dist,
            c1 - unit_or_zero(seam) * (seam.norm() * 0.3),
            c1,
        ]);
        draw_checked(canvas, "back_side_B1_C1", &side_upper, pen, warnings);

        // Center back and hem
        canvas.line(a, f, pen);
        canvas.line(a, a1, pen);

        // Neckline H → F
        let neck = CubicBezier([
            h,
            self.mirrored(helpers.get("H2")),
            self.mirrored(helpers.get("F1")),
            f,
        ]);
        draw_checked(canvas, "back_neck_H_F", &neck, pen, warnings);

        // Shoulder
        canvas.line(h, k, pen);

        // Armhole K → C1 through D2
        let armhole = CubicBezier([
            k,
            self.mirrored(helpers.get("K2")),
            self.mirrored(helpers.get("C12")),
            c1,
        ]);
        draw_checked(canvas, "back_armhole_K_C1", &armhole, pen, warnings);
    }

    fn plot_reference(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        let pts = &self.sheet.points;

        // Construction grid (front only): waist and carrure levels
        let guide = Pen::dashed(Color::Gray);
        canvas.line(pts.get("B"), pts.get("B1"), guide);
        canvas.line(pts.get("D"), pts.get("D2"), guide);

        self.plot_front_curves(canvas, warnings);
        self.plot_back_curves(canvas, warnings);

        // Front point labels with coordinates relative to B
        let b = pts.get("B");
        for (name, &coord) in pts.iter() {
            if *name == "D2" {
                continue; // belongs to the back piece
            }
            canvas.circle(coord, 0.1, Color::Blue);
            let label = format!(
                "{}\n({:.1}, {:.1})",
                name,
                (coord.x - b.x).abs(),
                coord.y - b.y
            );
            canvas.text(
                coord + Vector2::new(0.5, 0.0),
                &label,
                TextStyle::label(Color::Blue),
            );
        }

        // Back point labels, mirrored, relative to the mirrored B
        let m_b = self.mirrored(b);
        for name in ["A", "A1", "B", "B1", "C1", "D2", "F", "H", "K"] {
            let coord = self.mirrored(pts.get(name));
            canvas.circle(coord, 0.1, Color::Green);
            let label = format!(
                "{}\n({:.1}, {:.1})",
                name,
                (coord.x - m_b.x).abs(),
                coord.y - m_b.y
            );
            canvas.text(
                coord + Vector2::new(0.5, 0.0),
                &label,
                TextStyle::label(Color::Green),
            );
        }

        // Helper points, front then mirrored back
        for name in ["H1", "E1", "C11", "K1"] {
            let coord = self.sheet.helpers.get(name);
            canvas.circle(coord, 0.07, Color::Gray);
            canvas.text(
                coord + Vector2::new(0.5, 0.0),
                name,
                TextStyle::label(Color::Gray),
            );
        }
        for name in ["H2", "F1", "C12", "K2"] {
            let coord = self.mirrored(self.sheet.helpers.get(name));
            canvas.circle(coord, 0.07, Color::Gray);
            canvas.text(
                coord + Vector2::new(0.5, 0.0),
                name,
                TextStyle::label(Color::Gray),
            );
        }

        self.plot_footer(canvas);
    }

    fn plot_printable(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        self.plot_front_curves(canvas, warnings);
        self.plot_back_curves(canvas, warnings);
        self.plot_footer(canvas);
    }

    /// Scale bar and piece labels, shared by both variants.
    fn plot_footer(&self, canvas: &mut dyn Canvas) {
        let pts = &self.sheet.points;
        let a = pts.get("A");
        let a1 = pts.get("A1");
        let b = pts.get("B");

        let scale_y = a.y.min(a1.y) - 5.0;
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

        let m_a = self.mirrored(a);
        let m_a1 = self.mirrored(a1);
        canvas.text(
            Vector2::new((a.x + a1.x) / 2.0, b.y),
            "FRONT",
            TextStyle::heading(Color::Blue),
        );
        canvas.text(
            Vector2::new((m_a.x + m_a1.x) / 2.0, b.y),
            "BACK",
            TextStyle::heading(Color::Green),
        );
    }
}

impl Pattern for CorsetPattern {
    fn frame(&self) -> Frame {
        let bb = BoundingBox::from_iter(self.sheet.points.values().copied());
        // The back piece mirrors the front across x = 0 shifted by the gap,
        // so the right edge is the mirror of the left one.
        let frame_box = BoundingBox {
            min: Vector2::new(bb.min.x - 5.0, bb.min.y - 10.0),
            max: Vector2::new(-bb.min.x + self.gap + 5.0, bb.max.y + 5.0),
        };
        Frame::new(frame_box, true)
    }

    fn title(&self) -> Option<String> {
        Some(format!(
            "Corset Construction Draft - Full Bust: {}cm | Full Waist: {}cm",
            self.m.full_bust, self.m.full_waist
        ))
    }

    fn plot(&self, canvas: &mut dyn Canvas, variant: Variant, warnings: &mut Vec<String>) {
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

    fn t38_pattern() -> CorsetPattern {
        let fm = default_measurements(38);
        CorsetPattern::new(CorsetMeasurements::from_full(&fm), CorsetControl::default())
    }

    #[test]
    fn neck_width_satisfies_the_arc_equation() {
        let fm = default_measurements(38);
        let m = CorsetMeasurements::from_full(&fm);
        assert!(m.neck_width > 0.0);
        assert_relative_eq!(m.neck_back_height, 2.0);

        let front = fm.back_waist_length - fm.front_waist_length + 2.0;
        let arcs = ((m.neck_width.powi(2) + 4.0) / 2.0).sqrt()
            + ((m.neck_width.powi(2) + front * front) / 2.0).sqrt();
        assert_relative_eq!(arcs, fm.neck_circumference / PI, epsilon = 1e-4);
    }

    #[test]
    fn armhole_curves_pass_through_the_carrure_points() {
        let pattern = t38_pattern();
        let pts = &pattern.sheet.points;
        let helpers = &pattern.sheet.helpers;

        for (carrure, handle_k, handle_c) in [("D1", "K1", "C11"), ("D2", "K2", "C12")] {
            let curve = CubicBezier([
                pts.get("K"),
                helpers.get(handle_k),
                helpers.get(handle_c),
                pts.get("C1"),
            ]);
            let target = pts.get(carrure);
            // The curve must come within numerical tolerance of the
            // carrure point somewhere along its run. Coarse scan for the
            // nearest parameter, then a fine scan around it.
            let distance = |t: f64| (curve.castlejau_eval(t) - target).norm();
            let coarse = (0..=1000)
                .map(|i| i as f64 / 1000.0)
                .min_by(|a, b| distance(*a).total_cmp(&distance(*b)))
                .unwrap();
            let closest = (-1000..=1000)
                .map(|i| distance(coarse + i as f64 / 1_000_000.0))
                .fold(f64::INFINITY, f64::min);
            assert!(closest < 1e-3, "{carrure} missed by {closest}");
        }
    }

    #[test]
    fn construction_points_form_the_expected_skeleton() {
        let pattern = t38_pattern();
        let pts = &pattern.sheet.points;
        assert_relative_eq!(pts.get("B").x, 0.0);
        assert_relative_eq!(pts.get("B1").x, -68.0 / 4.0);
        assert_relative_eq!(pts.get("E").y, 37.0);
        assert_relative_eq!(pts.get("A").y, -22.0);
        assert_relative_eq!(pts.get("A1").x, -94.0 / 4.0);
        // C1 sits one underarm height up the seam from B1
        let b1 = pts.get("B1");
        let c1 = pts.get("C1");
        assert_relative_eq!((c1 - b1).norm(), 21.5, epsilon = 1e-9);
    }

    #[test]
    fn renders_both_variants_for_every_size() {
        for size in (34..=48).step_by(2) {
            let fm = default_measurements(size);
            let pattern =
                CorsetPattern::new(CorsetMeasurements::from_full(&fm), CorsetControl::default());

            let construction = pattern.render_svg(Variant::Construction);
            assert!(construction.output.contains("<svg"));
            assert!(construction.output.contains("<path"));
            assert!(construction.output.contains("FRONT"));
            assert!(construction.output.contains("BACK"));

            let printable = pattern.render_svg(Variant::Printable);
            assert!(printable.output.contains("</svg>"));
            assert!(printable.output.contains("10 cm Scale"));
        }
    }

    #[test]
    fn renders_pdf() {
        let pattern = t38_pattern();
        let rendered = pattern.render_pdf(Variant::Construction);
        assert_eq!(&rendered.output[..5], b"%PDF-");
        assert_eq!(&rendered.output[rendered.output.len() - 6..], b"%%EOF\n");
    }

    #[test]
    fn stretch_applies_once() {
        let mut pattern = t38_pattern();
        let before = pattern.sheet.points.get("B1");
        pattern.stretch(0.3, 0.1, 0.5).unwrap();
        let after = pattern.sheet.points.get("B1");
        assert_relative_eq!(after.x, before.x / 1.15, epsilon = 1e-12);
        assert!(pattern.stretch(0.1, 0.1, 1.0).is_err());
    }

    #[test]
    fn control_overrides_merge_field_by_field() {
        let overrides = CorsetControlOverrides {
            front_neck_center: Some(0.7),
            ..Default::default()
        };
        let merged = CorsetControl::default().with_overrides(&overrides);
        assert_relative_eq!(merged.front_neck_center, 0.7);
        assert_relative_eq!(merged.back_neck_center, 0.5);
        assert_relative_eq!(merged.armhole_curve, 0.4);
    }
}
