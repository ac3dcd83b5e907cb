//! Jersey set-in sleeve block pattern drafting.
//!
//! Constructs a one-piece sleeve inside its bounding frame; the cap curve
//! runs through seven construction points and is interpolated with the
//! natural cubic spline. Unlike the body blocks this sheet is drafted with
//! y growing downward from the shoulder line.

use crate::bounding_box::BoundingBox;
use crate::draw::{Canvas, Color, Frame, Pen, TextStyle};
use crate::measurements::FullMeasurements;
use crate::pattern::{draw_checked, rotated90, unit_or_zero, DraftError, Pattern, Sheet, Variant};
use crate::spline::cubic_spline_to_beziers;
use nalgebra::Vector2;
use serde::Deserialize;
use smallvec::SmallVec;

/// Measurements required for the jersey set-in sleeve block.
///
/// These come from the bodice construction, not directly from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeveMeasurements {
    /// Profondeur d'emmanchure, from the bodice construction.
    pub armhole_depth: f64,
    /// Total armhole (front + back armhole lengths).
    pub armhole_measurement: f64,
    /// Longueur de manche.
    #[serde(default = "default_sleeve_length")]
    pub sleeve_length: f64,
    /// Shoulder-to-elbow distance.
    #[serde(default = "default_upper_arm_to_elbow")]
    pub upper_arm_to_elbow: f64,
    /// Largeur bas de manche.
    #[serde(default = "default_sleeve_bottom_width")]
    pub sleeve_bottom_width: f64,
}

fn default_sleeve_length() -> f64 {
    60.0
}
fn default_upper_arm_to_elbow() -> f64 {
    35.0
}
fn default_sleeve_bottom_width() -> f64 {
    20.0
}

impl SleeveMeasurements {
    /// Derive sleeve measurements from a full body record.
    pub fn from_full(fm: &FullMeasurements) -> SleeveMeasurements {
        SleeveMeasurements {
            armhole_depth: fm.underarm_height,
            armhole_measurement: fm.armhole_circumference,
            sleeve_length: fm.arm_length,
            upper_arm_to_elbow: fm.elbow_height,
            sleeve_bottom_width: fm.wrist,
        }
    }
}

/// Shaping offsets for the sleeve cap curve.
#[derive(Debug, Clone, Copy)]
pub struct SleeveControl {
    /// Perpendicular offset of G3 off the I-G2 chord (cm).
    pub g3_perpendicular: f64,
    /// Perpendicular offset of H3 off the H2-I' chord (cm).
    pub h3_perpendicular: f64,
}

impl Default for SleeveControl {
    fn default() -> SleeveControl {
        SleeveControl {
            g3_perpendicular: 1.0,
            h3_perpendicular: 1.5,
        }
    }
}

/// Partial overrides for [`SleeveControl`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SleeveControlOverrides {
    /// Override for [`SleeveControl::g3_perpendicular`].
    pub g3_perpendicular: Option<f64>,
    /// Override for [`SleeveControl::h3_perpendicular`].
    pub h3_perpendicular: Option<f64>,
}

impl SleeveControl {
    /// Apply a set of partial overrides onto these defaults.
    pub fn with_overrides(self, overrides: &SleeveControlOverrides) -> SleeveControl {
        SleeveControl {
            g3_perpendicular: overrides.g3_perpendicular.unwrap_or(self.g3_perpendicular),
            h3_perpendicular: overrides.h3_perpendicular.unwrap_or(self.h3_perpendicular),
        }
    }
}

/// Jersey set-in sleeve block pattern.
pub struct SleevePattern {
    /// Point storage and stretch state.
    pub sheet: Sheet,
    m: SleeveMeasurements,
    control: SleeveControl,
}

impl SleevePattern {
    /// Build the pattern: frame points, then cap curve helpers.
    pub fn new(measurements: SleeveMeasurements, control: SleeveControl) -> SleevePattern {
        let mut pattern = SleevePattern {
            sheet: Sheet::new(),
            m: measurements,
            control,
        };
        pattern.build_construction_points();
        pattern.build_cap_points();
        pattern
    }

    /// Shrink the pattern for stretch fabric (at most once).
    pub fn stretch(&mut self, horizontal: f64, vertical: f64, usage: f64) -> Result<(), DraftError> {
        self.sheet.stretch(horizontal, vertical, usage)
    }

    fn build_construction_points(&mut self) {
        let width = 0.75 * self.m.armhole_measurement + 1.0;
        let length = self.m.sleeve_length;
        let cap_height = (2.0 / 3.0) * self.m.armhole_depth;

        let pts = &mut self.sheet.points;
        pts.set("A", Vector2::zeros());
        pts.set("B", Vector2::new(width, 0.0));
        pts.set("C", Vector2::new(0.0, length));
        pts.set("D", Vector2::new(width, length));
        pts.set("E", Vector2::new(width / 2.0, 0.0));
        pts.set("F", Vector2::new(width / 2.0, length));
        pts.set("I", Vector2::new(0.0, cap_height));
        pts.set("I'", Vector2::new(width, cap_height));

        let half_bottom = self.m.sleeve_bottom_width / 2.0;
        pts.set("F1", Vector2::new(width / 2.0 - half_bottom, length));
        pts.set("F2", Vector2::new(width / 2.0 + half_bottom, length));
    }

    fn build_cap_points(&mut self) {
        let width = self.sheet.points.get("B").x;
        let cap_height = self.sheet.points.get("I").y;

        let g_x = width / 4.0;
        self.sheet.helpers.set("G", Vector2::new(g_x, 0.0));
        self.sheet.helpers.set("G1", Vector2::new(g_x, cap_height));

        let h_x = width / 2.0 + width / 4.0;
        self.sheet.helpers.set("H", Vector2::new(h_x, 0.0));
        self.sheet.helpers.set("H1", Vector2::new(h_x, cap_height));

        let g2 = self
            .sheet
            .points
            .set("G2", Vector2::new(g_x, cap_height / 3.0));
        let h2 = self
            .sheet
            .points
            .set("H2", Vector2::new(h_x, cap_height / 2.0));

        // G3: halfway between G2 and I, pushed off the chord
        let i = self.sheet.points.get("I");
        let mid = (g2 + i) / 2.0;
        let off = rotated90(unit_or_zero(g2 - i));
        self.sheet
            .points
            .set("G3", mid + off * self.control.g3_perpendicular);

        // H3: halfway between H2 and I', pushed off the chord
        let i_prime = self.sheet.points.get("I'");
        let mid = (h2 + i_prime) / 2.0;
        let off = rotated90(unit_or_zero(i_prime - h2));
        self.sheet
            .points
            .set("H3", mid + off * self.control.h3_perpendicular);

        let elbow_y = self.m.upper_arm_to_elbow;
        self.sheet.helpers.set("J", Vector2::new(0.0, elbow_y));
        self.sheet.helpers.set("J'", Vector2::new(width, elbow_y));
    }

    /// The seven points the cap curve is interpolated through.
    fn cap_curve_points(&self) -> SmallVec<[Vector2<f64>; 7]> {
        let pts = &self.sheet.points;
        let mut cap = SmallVec::new();
        for name in ["I", "G3", "G2", "E", "H2", "H3", "I'"] {
            cap.push(pts.get(name));
        }
        cap
    }

    /// Length of the cap path measured as straight segments.
    ///
    /// Drafting tables quote this control length to check the cap against
    /// the bodice armhole before cutting.
    pub fn cap_control_length(&self) -> f64 {
        let cap = self.cap_curve_points();
        cap.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    fn line_between(&self, canvas: &mut dyn Canvas, from: &str, to: &str, pen: Pen) {
        let lookup = |name: &str| {
            self.sheet
                .points
                .0
                .get(name)
                .or_else(|| self.sheet.helpers.0.get(name))
                .copied()
                .unwrap_or_else(|| panic!("point {name:?} referenced before its construction step"))
        };
        canvas.line(lookup(from), lookup(to), pen);
    }

    fn plot_cap(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        for (i, segment) in cubic_spline_to_beziers(&self.cap_curve_points())
            .iter()
            .enumerate()
        {
            let name = format!("sleeve_cap_{i}");
            draw_checked(canvas, &name, segment, Pen::solid(Color::Blue), warnings);
        }
    }

    fn plot_outline(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        let pen = Pen::solid(Color::Blue);
        self.line_between(canvas, "I", "F1", pen);
        self.line_between(canvas, "I'", "F2", pen);
        self.line_between(canvas, "F1", "F2", pen);
        self.plot_cap(canvas, warnings);
    }

    /// Scale bar under the hem, shared by both variants.
    fn plot_scale_bar(&self, canvas: &mut dyn Canvas) {
        let hem_y = self
            .sheet
            .points
            .get("C")
            .y
            .max(self.sheet.points.get("D").y);
        canvas.line(
            Vector2::new(0.0, hem_y + 3.0),
            Vector2::new(10.0, hem_y + 3.0),
            Pen::solid(Color::Black).width(4.0),
        );
        canvas.text(
            Vector2::new(5.0, hem_y + 5.0),
            "10 cm Scale",
            TextStyle::centered(Color::Black),
        );
    }

    fn plot_reference(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        // Construction frame
        let guide = Pen::dashed(Color::Gray);
        self.line_between(canvas, "A", "B", guide);
        self.line_between(canvas, "B", "D", guide);
        self.line_between(canvas, "D", "C", guide);
        self.line_between(canvas, "C", "A", guide);

        self.line_between(canvas, "E", "F", guide);
        self.line_between(canvas, "I", "I'", guide);
        self.line_between(canvas, "J", "J'", guide);

        let thin = Pen::dotted(Color::Gray).width(0.5);
        self.line_between(canvas, "G", "G1", thin);
        self.line_between(canvas, "H", "H1", thin);

        self.plot_outline(canvas, warnings);

        for (name, &coord) in self.sheet.points.iter() {
            canvas.circle(coord, 0.1, Color::Black);
            let label = format!("{}\n({:.1}, {:.1})", name, coord.x, coord.y);
            canvas.text(
                coord + Vector2::new(0.5, 0.0),
                &label,
                TextStyle::label(Color::Black),
            );
        }
        for (name, &coord) in self.sheet.helpers.iter() {
            canvas.circle(coord, 0.07, Color::Gray);
            canvas.text(
                coord + Vector2::new(0.5, 0.0),
                name,
                TextStyle::label(Color::Gray),
            );
        }

        self.plot_scale_bar(canvas);

        let hem_y = self
            .sheet
            .points
            .get("C")
            .y
            .max(self.sheet.points.get("D").y);
        canvas.text(
            Vector2::new(self.sheet.points.get("E").x, hem_y + 8.0),
            &format!("Sleeve Cap Control: {:.2} cm", self.cap_control_length()),
            TextStyle::centered(Color::Blue).size(9.0),
        );
    }

    fn plot_printable(&self, canvas: &mut dyn Canvas, warnings: &mut Vec<String>) {
        self.plot_outline(canvas, warnings);
        self.plot_scale_bar(canvas);
    }
}

impl Pattern for SleevePattern {
    fn frame(&self) -> Frame {
        let all = self
            .sheet
            .points
            .values()
            .chain(self.sheet.helpers.values())
            .copied();
        Frame::new(BoundingBox::from_iter(all).padded(5.0, 5.0, 5.0, 10.0), false)
    }

    fn title(&self) -> Option<String> {
        Some(format!(
            "Jersey Set-In Sleeve Block - Armhole: {}cm | Sleeve Length: {}cm",
            self.m.armhole_measurement, self.m.sleeve_length
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

    fn t38_pattern() -> SleevePattern {
        let fm = default_measurements(38);
        SleevePattern::new(SleeveMeasurements::from_full(&fm), SleeveControl::default())
    }

    #[test]
    fn frame_points_follow_the_ratios() {
        let pattern = t38_pattern();
        let pts = &pattern.sheet.points;
        // width = 0.75 * armhole + 1, cap height = 2/3 underarm height
        assert_relative_eq!(pts.get("B").x, 0.75 * 39.5 + 1.0);
        assert_relative_eq!(pts.get("I").y, 2.0 / 3.0 * 21.5);
        assert_relative_eq!(pts.get("C").y, 60.0);
        // bottom width centered on F
        let f = pts.get("F");
        assert_relative_eq!(pts.get("F2").x - pts.get("F1").x, 16.0);
        assert_relative_eq!((pts.get("F1").x + pts.get("F2").x) / 2.0, f.x);
    }

    #[test]
    fn cap_control_length_is_positive_and_stable() {
        let pattern = t38_pattern();
        let control = pattern.cap_control_length();
        assert!(control > pattern.sheet.points.get("B").x);

        // The straight-segment readout only depends on the seven cap points.
        let cap = pattern.cap_curve_points();
        let manual: f64 = cap.windows(2).map(|w| (w[1] - w[0]).norm()).sum();
        assert_relative_eq!(control, manual);
    }

    #[test]
    fn renders_both_variants() {
        let pattern = t38_pattern();
        let construction = pattern.render_svg(Variant::Construction);
        assert!(construction.output.contains("<svg"));
        assert!(construction.output.contains("Sleeve Cap Control"));
        // the cap spline produces 6 bezier path segments
        assert!(construction.output.matches("<path").count() >= 6);

        let printable = pattern.render_svg(Variant::Printable);
        assert!(printable.output.contains("10 cm Scale"));
        assert!(!printable.output.contains("Sleeve Cap Control"));
    }

    #[test]
    fn stretch_applies_once() {
        let mut pattern = t38_pattern();
        assert!(pattern.stretch(0.25, 0.1, 1.0).is_ok());
        assert!(pattern.stretch(0.25, 0.1, 1.0).is_err());
    }

    #[test]
    fn from_full_maps_the_arm_fields() {
        let fm = default_measurements(38);
        let m = SleeveMeasurements::from_full(&fm);
        assert_relative_eq!(m.armhole_depth, fm.underarm_height);
        assert_relative_eq!(m.armhole_measurement, fm.armhole_circumference);
        assert_relative_eq!(m.sleeve_length, fm.arm_length);
        assert_relative_eq!(m.sleeve_bottom_width, fm.wrist);
    }
}
