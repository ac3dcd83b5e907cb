//! Baby dress (robe salopette) pattern drafting.
//!
//! Unlike the body blocks this piece is driven by garment dimensions, not
//! body measurements: the block is an 18-month dress with shoulder straps.
//! The outline curves are given as leave/arrive tangent angles and turned
//! into cubic handles with chord-proportional length, and the seam
//! allowance is a second outline pushed out by fixed offsets.

use crate::bezier::CubicBezier;
use crate::bounding_box::BoundingBox;
use crate::draw::{Canvas, Color, Frame, Pen, TextStyle};
use crate::pattern::{Pattern, PointMap, Variant};
use nalgebra::Vector2;
use serde::Deserialize;

/// Garment dimensions of the baby dress, in cm.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BabyDressParams {
    /// Shoulder to hem.
    pub total_length: f64,
    /// Shoulder to underarm.
    pub armhole_depth: f64,
    /// Half width at the chest line.
    pub chest_half_width: f64,
    /// Half width at the hem.
    pub hem_half_width: f64,
    /// Center to the inner strap edge.
    pub neck_width_start: f64,
    /// Strap width.
    pub strap_width: f64,
    /// Neckline drop on the front panel.
    pub front_neck_drop: f64,
    /// Neckline drop on the back panel.
    pub back_neck_drop: f64,
}

impl Default for BabyDressParams {
    fn default() -> BabyDressParams {
        BabyDressParams {
            total_length: 50.0,
            armhole_depth: 15.0,
            chest_half_width: 15.0,
            hem_half_width: 20.0,
            neck_width_start: 5.5,
            strap_width: 3.0,
            front_neck_drop: 12.0,
            back_neck_drop: 6.0,
        }
    }
}

/// Horizontal shift of the back panel next to the front one.
const BACK_PANEL_SHIFT: f64 = 35.0;

/// Approximate a `leave at angle, arrive at angle` curve with one cubic.
///
/// Handle lengths are proportional to the chord, so flatter tensions give
/// straighter curves. Angles are degrees in the drawing plane (y up).
fn cubic_from_angles(
    from: Vector2<f64>,
    to: Vector2<f64>,
    out_deg: f64,
    in_deg: f64,
    tension: f64,
) -> CubicBezier {
    let handle = (to - from).norm() * tension;
    let out = out_deg.to_radians();
    let inn = in_deg.to_radians();
    CubicBezier([
        from,
        from + Vector2::new(out.cos(), out.sin()) * handle,
        to + Vector2::new(inn.cos(), inn.sin()) * handle,
        to,
    ])
}

/// Baby dress pattern: front and back panel on one sheet.
pub struct BabyDressPattern {
    p: BabyDressParams,
}

impl BabyDressPattern {
    /// Build the pattern from its garment dimensions.
    pub fn new(params: BabyDressParams) -> BabyDressPattern {
        BabyDressPattern { p: params }
    }

    /// The named points of one panel, shifted to the panel origin.
    fn panel_points(&self, origin_x: f64, is_front: bool) -> PointMap {
        let p = &self.p;
        let neck_drop = if is_front {
            p.front_neck_drop
        } else {
            p.back_neck_drop
        };
        let o = Vector2::new(origin_x, 0.0);

        let mut pts = PointMap::default();
        pts.set("A", o);
        pts.set("B", o + Vector2::new(0.0, -p.total_length));
        pts.set("C", o + Vector2::new(0.0, -neck_drop));
        pts.set("D", o + Vector2::new(p.neck_width_start, 0.0));
        pts.set(
            "E",
            o + Vector2::new(p.neck_width_start + p.strap_width, 0.0),
        );
        pts.set("F", o + Vector2::new(p.chest_half_width, -p.armhole_depth));
        pts.set("G", o + Vector2::new(p.hem_half_width, -p.total_length));
        pts
    }

    /// Draw one closed outline through the panel points.
    ///
    /// `C → D` neckline, `D → E` strap, `E → F` armhole, `F → G` side,
    /// `G → B` hem, `B → C` center.
    fn plot_outline(&self, canvas: &mut dyn Canvas, pts: &PointMap, pen: Pen) {
        let c = pts.get("C");
        let d = pts.get("D");
        let e = pts.get("E");
        let f = pts.get("F");
        let g = pts.get("G");
        let b = pts.get("B");

        canvas.bezier(&cubic_from_angles(c, d, 0.0, -90.0, 0.45), pen);
        canvas.line(d, e, pen);
        canvas.bezier(&cubic_from_angles(e, f, -90.0, 180.0, 0.45), pen);
        canvas.bezier(&cubic_from_angles(f, g, -90.0, 90.0, 0.30), pen);
        canvas.line(g, b, pen);
        canvas.line(b, c, pen);
    }

    /// The seam-allowance outline: the stitch points pushed outward, 1 cm
    /// straight on the axes and 0.707 cm diagonally at the slanted edges.
    fn allowance_points(&self, pts: &PointMap) -> PointMap {
        let mut out = PointMap::default();
        out.set("C", pts.get("C") + Vector2::new(0.0, 1.0));
        out.set("D", pts.get("D") + Vector2::new(-0.707, 0.707));
        out.set("E", pts.get("E") + Vector2::new(0.707, 0.707));
        out.set("F", pts.get("F") + Vector2::new(0.707, 0.707));
        out.set("G", pts.get("G") + Vector2::new(1.0, 0.0));
        out.set("B", pts.get("B"));
        out
    }

    fn plot_allowance(&self, canvas: &mut dyn Canvas, pts: &PointMap) {
        let sa = self.allowance_points(pts);
        let pen = Pen::solid(Color::Gray);
        let c = sa.get("C");
        let d = sa.get("D");
        let e = sa.get("E");
        let f = sa.get("F");
        let g = sa.get("G");
        let b = sa.get("B");

        canvas.bezier(&cubic_from_angles(c, d, 0.0, -90.0, 0.45), pen);
        canvas.line(d, e, pen);
        canvas.bezier(&cubic_from_angles(e, f, -90.0, 180.0, 0.45), pen);
        canvas.bezier(&cubic_from_angles(f, g, -90.0, 90.0, 0.30), pen);
        canvas.line(g, b, pen);
    }

    fn plot_panel(&self, canvas: &mut dyn Canvas, variant: Variant, origin_x: f64, is_front: bool) {
        let pts = self.panel_points(origin_x, is_front);

        self.plot_allowance(canvas, &pts);
        self.plot_outline(canvas, &pts, Pen::solid(Color::Black));

        let heading = if is_front {
            "Front Pattern"
        } else {
            "Back Pattern"
        };
        canvas.text(
            Vector2::new(origin_x + self.p.chest_half_width / 2.0, 1.5),
            heading,
            TextStyle::centered(Color::Black).size(10.0),
        );

        if variant == Variant::Construction {
            for (name, &coord) in pts.iter() {
                canvas.circle(coord, 0.1, Color::Black);
                canvas.text(
                    coord + Vector2::new(0.3, 0.3),
                    name,
                    TextStyle::label(Color::Black),
                );
            }

            // Length dimension along the center line
            let a = pts.get("A");
            let b = pts.get("B");
            let dim_x = a.x - 1.2;
            canvas.line(
                Vector2::new(dim_x, a.y),
                Vector2::new(dim_x, b.y),
                Pen::solid(Color::Black).width(0.8),
            );
            canvas.text(
                Vector2::new(dim_x - 0.5, (a.y + b.y) / 2.0),
                &format!("TotalLength {} cm", self.p.total_length),
                TextStyle::label(Color::Black).size(10.0),
            );
        }
    }
}

impl Pattern for BabyDressPattern {
    fn frame(&self) -> Frame {
        let front = self.panel_points(0.0, true);
        let back = self.panel_points(BACK_PANEL_SHIFT, false);
        let front_allowance = self.allowance_points(&front);
        let back_allowance = self.allowance_points(&back);
        let all = front
            .values()
            .chain(back.values())
            .chain(front_allowance.values())
            .chain(back_allowance.values())
            .copied();
        // Extra room on the left for the dimension line and on top for the
        // panel headings.
        Frame::new(BoundingBox::from_iter(all).padded(6.0, 3.0, 3.0, 5.0), true)
    }

    fn title(&self) -> Option<String> {
        Some("ROBE SALOPETTE 18 MOIS".to_string())
    }

    fn plot(&self, canvas: &mut dyn Canvas, variant: Variant, _warnings: &mut Vec<String>) {
        self.plot_panel(canvas, variant, 0.0, true);
        self.plot_panel(canvas, variant, BACK_PANEL_SHIFT, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn panel_points_follow_the_dimensions() {
        let pattern = BabyDressPattern::new(BabyDressParams::default());
        let front = pattern.panel_points(0.0, true);
        assert_relative_eq!(front.get("B").y, -50.0);
        assert_relative_eq!(front.get("C").y, -12.0);
        assert_relative_eq!(front.get("E").x, 8.5);
        assert_relative_eq!(front.get("G").x, 20.0);

        let back = pattern.panel_points(BACK_PANEL_SHIFT, false);
        assert_relative_eq!(back.get("C").y, -6.0);
        assert_relative_eq!(back.get("A").x, 35.0);
    }

    #[test]
    fn angle_curve_handles_sit_on_the_tangents() {
        let from = Vector2::new(0.0, -12.0);
        let to = Vector2::new(5.5, 0.0);
        let curve = cubic_from_angles(from, to, 0.0, -90.0, 0.45);
        // leaves horizontally, arrives from above
        assert_relative_eq!(curve[1].y, from.y);
        assert!(curve[1].x > from.x);
        assert_relative_eq!(curve[2].x, to.x, epsilon = 1e-9);
        assert!(curve[2].y < to.y);
    }

    #[test]
    fn renders_both_panels() {
        let pattern = BabyDressPattern::new(BabyDressParams::default());
        let rendered = pattern.render_svg(Variant::Construction);
        assert!(rendered.output.contains("Front Pattern"));
        assert!(rendered.output.contains("Back Pattern"));
        assert!(rendered.output.contains("TotalLength 50 cm"));
        assert!(rendered.warnings.is_empty());

        let printable = pattern.render_svg(Variant::Printable);
        assert!(!printable.output.contains("TotalLength"));
        assert!(printable.output.contains("<path"));
    }

    #[test]
    fn params_deserialize_from_an_empty_map() {
        let params: BabyDressParams = serde_json::from_str("{}").unwrap();
        assert_relative_eq!(params.total_length, 50.0);
        assert_relative_eq!(params.strap_width, 3.0);
    }
}
