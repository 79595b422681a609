//! Path fragments for tile decorations
//!
//! Every fragment is a pure function of a centre `(x, y)` and a few
//! dimensions. Shapes are laid out around the origin pointing along +x, then
//! rotated by `angle` and moved to the centre, the same rotate-then-translate
//! sequence tiles use for their bounds.
//!
//! Optional parameters accept anything convertible to [`Numeric`]; only a
//! real number overrides the default.

use crate::geometry::{Polygon2D, Vector2D};
use crate::types::Numeric;

use super::svg_path::SvgPath;

/// Rotate a shape-local polygon and move it to its centre.
fn place(polygon: Polygon2D, x: f64, y: f64, angle: f64) -> Polygon2D {
    polygon.rotate(angle, None).translate(Vector2D::new(x, y))
}

/// Rectangle of `width × height` centred on `(x, y)`.
pub fn straight_element_path(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    angle: impl Into<Numeric>,
) -> SvgPath {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let shape = Polygon2D::new(vec![
        Vector2D::new(-hw, -hh),
        Vector2D::new(hw, -hh),
        Vector2D::new(hw, hh),
        Vector2D::new(-hw, hh),
    ]);
    SvgPath::from_polygon(&place(shape, x, y, angle.into().or_zero()))
}

/// Triangle pointing along `angle`, its tip `width / 2` ahead of the centre.
pub fn arrow_tip_path(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    angle: impl Into<Numeric>,
) -> SvgPath {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let shape = Polygon2D::new(vec![
        Vector2D::new(-hw, -hh),
        Vector2D::new(hw, 0.0),
        Vector2D::new(-hw, hh),
    ]);
    SvgPath::from_polygon(&place(shape, x, y, angle.into().or_zero()))
}

/// Arrow pointing along `angle`.
///
/// The shaft is `thickness` thick (`height / 3` by default); the head spans
/// the full `height` and is `height / 2` long, never longer than `width`.
pub fn straight_arrow_path(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    thickness: impl Into<Numeric>,
    angle: impl Into<Numeric>,
) -> SvgPath {
    let thickness = thickness.into().or_else(|| height / 3.0);
    let (hw, hh, ht) = (width / 2.0, height / 2.0, thickness / 2.0);
    let head = hh.min(width);
    let neck = hw - head;
    let shape = Polygon2D::new(vec![
        Vector2D::new(-hw, -ht),
        Vector2D::new(neck, -ht),
        Vector2D::new(neck, -hh),
        Vector2D::new(hw, 0.0),
        Vector2D::new(neck, hh),
        Vector2D::new(neck, ht),
        Vector2D::new(-hw, ht),
    ]);
    SvgPath::from_polygon(&place(shape, x, y, angle.into().or_zero()))
}

/// Plus sign: a `width` long horizontal bar crossing a `height` long
/// vertical bar, both `thickness` thick (`height / 3` by default).
pub fn cross_path(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    thickness: impl Into<Numeric>,
    angle: impl Into<Numeric>,
) -> SvgPath {
    let thickness = thickness.into().or_else(|| height / 3.0);
    let (hw, hh, a) = (width / 2.0, height / 2.0, thickness / 2.0);
    let shape = Polygon2D::new(vec![
        Vector2D::new(-a, -hh),
        Vector2D::new(a, -hh),
        Vector2D::new(a, -a),
        Vector2D::new(hw, -a),
        Vector2D::new(hw, a),
        Vector2D::new(a, a),
        Vector2D::new(a, hh),
        Vector2D::new(-a, hh),
        Vector2D::new(-a, a),
        Vector2D::new(-hw, a),
        Vector2D::new(-hw, -a),
        Vector2D::new(-a, -a),
    ]);
    SvgPath::from_polygon(&place(shape, x, y, angle.into().or_zero()))
}

/// Quarter band of an enlarged curve whose centre of curvature is `(x, y)`.
///
/// Unrotated, the band runs from the +x axis to the +y axis, clockwise on
/// screen. `radius` is the centre-line radius and `width` the band width.
/// The outer edge runs straight for `addition` (0 by default, clamped to
/// `radius`) before and after an outer arc of `radius + width / 2 - addition`,
/// pushing the band towards the outer corner. A band wider than twice the
/// radius is narrowed so the inner arc shrinks to the centre.
pub fn curved_element_enlarged_path(
    x: f64,
    y: f64,
    width: f64,
    radius: f64,
    addition: impl Into<Numeric>,
    angle: impl Into<Numeric>,
) -> SvgPath {
    let radius = radius.abs();
    let half_width = (width.abs() / 2.0).min(radius);
    let addition = addition.into().or_zero().abs().min(radius);
    let inner = radius - half_width;
    let outer = radius + half_width;

    let outline = place(
        Polygon2D::new(vec![
            Vector2D::new(inner, 0.0),
            Vector2D::new(outer, 0.0),
            Vector2D::new(outer, addition),
            Vector2D::new(addition, outer),
            Vector2D::new(0.0, outer),
            Vector2D::new(0.0, inner),
        ]),
        x,
        y,
        angle.into().or_zero(),
    );
    let p = outline.points();

    let mut path = SvgPath::new();
    path.move_to(p[0].x, p[0].y);
    line_between(&mut path, p[0], p[1]);
    line_between(&mut path, p[1], p[2]);
    path.elliptical_arc_curve_to(outer - addition, 0.0, false, true, p[3]);
    line_between(&mut path, p[3], p[4]);
    line_between(&mut path, p[4], p[5]);
    path.elliptical_arc_curve_by(inner, 0.0, false, false, p[0].sub(p[5]));
    path.close();
    path
}

fn line_between(path: &mut SvgPath, from: Vector2D, to: Vector2D) {
    let delta = to.sub(from);
    path.line_by(delta.x, delta.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    #[test]
    fn straight_element_is_a_centred_rectangle() {
        let path = straight_element_path(100.0, 100.0, 60.0, 50.0, ());
        assert_eq!(path.to_string(), "M 70,75 l 60,0 l 0,50 l -60,0 Z");
    }

    #[test]
    fn straight_element_rotates_around_its_centre() {
        let path = straight_element_path(100.0, 100.0, 60.0, 50.0, 90.0);
        assert_eq!(path.to_string(), "M 125,70 l 0,60 l -50,0 l 0,-60 Z");
    }

    #[test]
    fn arrow_tip_points_along_the_angle() {
        let right = arrow_tip_path(0.0, 0.0, 20.0, 10.0, 0.0);
        assert_eq!(right.to_string(), "M -10,-5 l 20,5 l -20,5 Z");

        let down = arrow_tip_path(0.0, 0.0, 20.0, 10.0, 90.0);
        assert_eq!(down.to_string(), "M 5,-10 l -5,20 l -5,-20 Z");
    }

    #[test]
    fn straight_arrow_defaults_thickness() {
        let defaulted = straight_arrow_path(50.0, 50.0, 40.0, 30.0, (), ());
        let explicit = straight_arrow_path(50.0, 50.0, 40.0, 30.0, 10.0, 0.0);
        assert_eq!(defaulted, explicit);
        assert_eq!(
            defaulted.to_string(),
            "M 30,45 l 25,0 l 0,-10 l 15,15 l -15,15 l 0,-10 l -25,0 Z"
        );
    }

    #[test]
    fn straight_arrow_head_never_exceeds_width() {
        let path = straight_arrow_path(0.0, 0.0, 4.0, 30.0, 2.0, ());
        // head as long as the whole arrow, so the shaft collapses
        assert_eq!(path.commands()[0], PathCommand::MoveTo { x: -2.0, y: -1.0 });
        assert_eq!(path.to_string(), "M -2,-1 l 0,0 l 0,-14 l 4,15 l -4,15 l 0,-14 l 0,0 Z");
    }

    #[test]
    fn cross_default_thickness_is_a_third_of_the_height() {
        let defaulted = cross_path(100.0, 100.0, 60.0, 50.0, (), ());
        let explicit = cross_path(100.0, 100.0, 60.0, 50.0, 50.0 / 3.0, ());
        assert_eq!(defaulted, explicit);
        assert_eq!(defaulted.to_string(), explicit.to_string());
    }

    #[test]
    fn cross_ignores_non_numeric_thickness() {
        let defaulted = cross_path(100.0, 100.0, 60.0, 50.0, (), ());
        assert_eq!(cross_path(100.0, 100.0, 60.0, 50.0, "12", ()), defaulted);
        assert_eq!(cross_path(100.0, 100.0, 60.0, 50.0, "", ()), defaulted);
        assert_eq!(cross_path(100.0, 100.0, 60.0, 50.0, None::<f64>, ()), defaulted);
        assert_ne!(cross_path(100.0, 100.0, 60.0, 50.0, 12.0, ()), defaulted);
    }

    #[test]
    fn cross_has_twelve_corners() {
        let path = cross_path(0.0, 0.0, 30.0, 30.0, 6.0, 45.0);
        assert_eq!(path.len(), 13);
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn enlarged_curve_outline() {
        let path = curved_element_enlarged_path(0.0, 0.0, 20.0, 50.0, 10.0, ());
        assert_eq!(
            path.to_string(),
            "M 40,0 l 20,0 l 0,10 A 50 50 0 0 1 10,60 l -10,0 l 0,-20 a 40 40 0 0 0 40,-40 Z"
        );
    }

    #[test]
    fn enlarged_curve_rotates_around_its_centre() {
        let path = curved_element_enlarged_path(100.0, 100.0, 20.0, 50.0, 10.0, 90.0);
        assert_eq!(
            path.to_string(),
            "M 100,140 l 0,20 l -10,0 A 50 50 0 0 1 40,110 l 0,-10 l 20,0 a 40 40 0 0 0 40,40 Z"
        );
    }

    #[test]
    fn enlarged_curve_clamps_addition_to_radius() {
        let clamped = curved_element_enlarged_path(0.0, 0.0, 20.0, 50.0, 80.0, ());
        let at_radius = curved_element_enlarged_path(0.0, 0.0, 20.0, 50.0, 50.0, ());
        assert_eq!(clamped, at_radius);

        let arc = clamped
            .commands()
            .iter()
            .find_map(|c| match c {
                PathCommand::EllipticalArcTo { rx, .. } => Some(*rx),
                _ => None,
            });
        assert_eq!(arc, Some(10.0));
    }

    #[test]
    fn enlarged_curve_without_addition_is_a_plain_band() {
        let path = curved_element_enlarged_path(0.0, 0.0, 20.0, 50.0, "wide", ());
        assert_eq!(
            path.to_string(),
            "M 40,0 l 20,0 l 0,0 A 60 60 0 0 1 0,60 l 0,0 l 0,-20 a 40 40 0 0 0 40,-40 Z"
        );
    }

    #[test]
    fn enlarged_curve_narrows_a_band_wider_than_its_radius() {
        let path = curved_element_enlarged_path(0.0, 0.0, 120.0, 50.0, (), ());
        assert_eq!(
            path.to_string(),
            "M 0,0 l 100,0 l 0,0 A 100 100 0 0 1 0,100 l 0,0 l 0,-100 a 0 0 0 0 0 0,0 Z"
        );
        for command in path.commands() {
            match command {
                PathCommand::EllipticalArcTo { rx, ry, .. }
                | PathCommand::EllipticalArcBy { rx, ry, .. } => {
                    assert!(*rx >= 0.0 && *ry >= 0.0, "{command}");
                }
                _ => {}
            }
        }
    }
}
