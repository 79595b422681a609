//! 2D vectors and angle helpers
//!
//! Screen coordinates: x grows to the right, y grows downward. Angles are in
//! degrees and positive angles turn clockwise on screen.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

use crate::types::Numeric;

pub const RIGHT_ANGLE: f64 = 90.0;
pub const STRAIGHT_ANGLE: f64 = 180.0;
pub const CIRCLE: f64 = 360.0;

/// Normalize an angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(CIRCLE);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if normalized >= CIRCLE { 0.0 } else { normalized }
}

/// The 90° sector an angle falls into: 0 for `[0, 90)`, 1 for `[90, 180)`,
/// 2 for `[180, 270)` and 3 for `[270, 360)`.
pub fn quadrant(angle: f64) -> u8 {
    let sector = (normalize_angle(angle) / RIGHT_ANGLE).floor();
    (sector as u8).min(3)
}

/// Snap an angle to the nearest right-angle boundary.
///
/// Ties go up, and angles in `[315, 360)` snap to `360` rather than `0`.
pub fn quadrant_angle(angle: f64) -> f64 {
    (normalize_angle(angle) / RIGHT_ANGLE).round() * RIGHT_ANGLE
}

/// Cosine and sine of an angle in degrees, exact on right angles.
fn cos_sin(angle: f64) -> DVec2 {
    let normalized = normalize_angle(angle);
    if normalized % RIGHT_ANGLE == 0.0 {
        return match quadrant(normalized) {
            0 => dvec2(1.0, 0.0),
            1 => dvec2(0.0, 1.0),
            2 => dvec2(-1.0, 0.0),
            _ => dvec2(0.0, -1.0),
        };
    }
    DVec2::from_angle(angle.to_radians())
}

/// A point or displacement in the plane.
///
/// Every operation returns a new vector; only [`Vector2D::set`] updates in
/// place.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Build a vector from loosely-typed coordinates, `0` for anything that
    /// is not a number.
    pub fn coerce(x: impl Into<Numeric>, y: impl Into<Numeric>) -> Self {
        Vector2D {
            x: x.into().or_zero(),
            y: y.into().or_zero(),
        }
    }

    /// Update both coordinates in place.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn add(self, other: Vector2D) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vector2D) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn add_scalar(self, value: f64) -> Self {
        Vector2D::new(self.x + value, self.y + value)
    }

    pub fn sub_scalar(self, value: f64) -> Self {
        Vector2D::new(self.x - value, self.y - value)
    }

    pub fn add_scalar_x(self, value: f64) -> Self {
        Vector2D::new(self.x + value, self.y)
    }

    pub fn add_scalar_y(self, value: f64) -> Self {
        Vector2D::new(self.x, self.y + value)
    }

    pub fn add_coord(self, dx: f64, dy: f64) -> Self {
        Vector2D::new(self.x + dx, self.y + dy)
    }

    pub fn sub_coord(self, dx: f64, dy: f64) -> Self {
        Vector2D::new(self.x - dx, self.y - dy)
    }

    pub fn mul_scalar(self, value: f64) -> Self {
        Vector2D::new(self.x * value, self.y * value)
    }

    pub fn div_scalar(self, value: f64) -> Self {
        Vector2D::new(self.x / value, self.y / value)
    }

    pub fn length(self) -> f64 {
        DVec2::from(self).length()
    }

    /// Rotate around `center` (the origin when `None`) by `angle` degrees,
    /// clockwise on screen.
    pub fn rotate(self, angle: f64, center: Option<Vector2D>) -> Self {
        let center = center.unwrap_or(Vector2D::ZERO);
        let offset = DVec2::from(self.sub(center));
        Vector2D::from(cos_sin(angle).rotate(offset)).add(center)
    }

    /// Move by `vector`.
    pub fn translate(self, vector: Vector2D) -> Self {
        self.add(vector)
    }

    /// Unit vector pointing along `angle`.
    pub fn heading(angle: f64) -> Self {
        Vector2D::from(cos_sin(angle))
    }

    /// Component-wise minimum.
    pub fn min(self, other: Vector2D) -> Self {
        Vector2D::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Vector2D) -> Self {
        Vector2D::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        dvec2(v.x, v.y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, rhs: Vector2D) -> Vector2D { Vector2D::add(self, rhs) }
}
impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, rhs: Vector2D) -> Vector2D { Vector2D::sub(self, rhs) }
}
impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, rhs: f64) -> Vector2D { self.mul_scalar(rhs) }
}
impl Neg for Vector2D {
    type Output = Vector2D;
    fn neg(self) -> Vector2D { Vector2D::new(-self.x, -self.y) }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(actual: Vector2D, expected: Vector2D) {
        const EPSILON: f64 = 1e-9;
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    // ==================== arithmetic ====================

    #[test]
    fn arithmetic_returns_new_vectors() {
        let a = Vector2D::new(3.0, 4.0);
        let b = Vector2D::new(1.0, 2.0);

        assert_eq!(a.add(b), Vector2D::new(4.0, 6.0));
        assert_eq!(a.sub(b), Vector2D::new(2.0, 2.0));
        assert_eq!(a.add_scalar(1.0), Vector2D::new(4.0, 5.0));
        assert_eq!(a.sub_scalar(1.0), Vector2D::new(2.0, 3.0));
        assert_eq!(a.add_scalar_x(2.0), Vector2D::new(5.0, 4.0));
        assert_eq!(a.add_scalar_y(2.0), Vector2D::new(3.0, 6.0));
        assert_eq!(a.add_coord(1.0, -1.0), Vector2D::new(4.0, 3.0));
        assert_eq!(a.sub_coord(1.0, -1.0), Vector2D::new(2.0, 5.0));
        assert_eq!(a.mul_scalar(2.0), Vector2D::new(6.0, 8.0));
        assert_eq!(a.div_scalar(2.0), Vector2D::new(1.5, 2.0));
        assert_eq!(a.length(), 5.0);

        // operands untouched
        assert_eq!(a, Vector2D::new(3.0, 4.0));
        assert_eq!(b, Vector2D::new(1.0, 2.0));
    }

    #[test]
    fn operators_match_methods() {
        let a = Vector2D::new(3.0, 4.0);
        let b = Vector2D::new(1.0, 2.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(a * 3.0, a.mul_scalar(3.0));
        assert_eq!(-a, Vector2D::new(-3.0, -4.0));
    }

    #[test]
    fn set_updates_in_place() {
        let mut v = Vector2D::new(1.0, 1.0);
        v.set(5.0, -2.0);
        assert_eq!(v, Vector2D::new(5.0, -2.0));
    }

    #[test]
    fn coerce_defaults_non_numbers_to_zero() {
        assert_eq!(Vector2D::coerce(2.0, "3"), Vector2D::new(2.0, 0.0));
        assert_eq!(Vector2D::coerce((), 4.0), Vector2D::new(0.0, 4.0));
    }

    // ==================== rotation ====================

    #[test]
    fn rotate_is_clockwise_on_screen() {
        // Pointing right, a quarter turn points down (y grows downward)
        let v = Vector2D::new(10.0, 0.0);
        assert_eq!(v.rotate(90.0, None), Vector2D::new(0.0, 10.0));
        assert_eq!(v.rotate(180.0, None), Vector2D::new(-10.0, 0.0));
        assert_eq!(v.rotate(270.0, None), Vector2D::new(0.0, -10.0));
        assert_eq!(v.rotate(-90.0, None), Vector2D::new(0.0, -10.0));
        assert_eq!(v.rotate(360.0, None), v);
    }

    #[test]
    fn rotate_around_center() {
        let v = Vector2D::new(20.0, 10.0);
        let center = Vector2D::new(10.0, 10.0);
        assert_eq!(v.rotate(90.0, Some(center)), Vector2D::new(10.0, 20.0));
    }

    #[test]
    fn rotate_arbitrary_angle() {
        let v = Vector2D::new(1.0, 0.0);
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert_vec_eq(v.rotate(45.0, None), Vector2D::new(half, half));
        assert_vec_eq(v.rotate(30.0, None), Vector2D::new(3f64.sqrt() / 2.0, 0.5));
    }

    #[test]
    fn rotate_then_translate() {
        let v = Vector2D::new(0.0, -5.0);
        let moved = v.rotate(90.0, None).translate(Vector2D::new(100.0, 50.0));
        assert_eq!(moved, Vector2D::new(105.0, 50.0));
    }

    #[test]
    fn heading_follows_angle() {
        assert_eq!(Vector2D::heading(0.0), Vector2D::new(1.0, 0.0));
        assert_eq!(Vector2D::heading(90.0), Vector2D::new(0.0, 1.0));
        assert_eq!(Vector2D::heading(-180.0), Vector2D::new(-1.0, 0.0));
    }

    // ==================== angles ====================

    #[test]
    fn normalize_angle_wraps() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(450.0), 90.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(-720.0), 0.0);
        assert!(normalize_angle(-1e-20) < CIRCLE);
    }

    #[test]
    fn quadrant_sectors() {
        assert_eq!(quadrant(0.0), 0);
        assert_eq!(quadrant(89.9), 0);
        assert_eq!(quadrant(90.0), 1);
        assert_eq!(quadrant(180.0), 2);
        assert_eq!(quadrant(269.0), 2);
        assert_eq!(quadrant(270.0), 3);
        assert_eq!(quadrant(359.9), 3);
        assert_eq!(quadrant(-45.0), 3);
        assert_eq!(quadrant(725.0), 0);
    }

    #[test]
    fn quadrant_angle_snaps_to_nearest_boundary() {
        assert_eq!(quadrant_angle(0.0), 0.0);
        assert_eq!(quadrant_angle(44.9), 0.0);
        assert_eq!(quadrant_angle(45.0), 90.0);
        assert_eq!(quadrant_angle(100.0), 90.0);
        assert_eq!(quadrant_angle(135.0), 180.0);
        assert_eq!(quadrant_angle(260.0), 270.0);
        assert_eq!(quadrant_angle(314.9), 270.0);
        assert_eq!(quadrant_angle(315.0), 360.0);
        assert_eq!(quadrant_angle(359.0), 360.0);
        assert_eq!(quadrant_angle(-10.0), 360.0);
    }

    #[test]
    fn quadrant_angle_stays_on_boundaries() {
        let mut angle = -720.0;
        while angle <= 720.0 {
            let snapped = quadrant_angle(angle);
            assert!(
                [0.0, 90.0, 180.0, 270.0, 360.0].contains(&snapped),
                "{} snapped to {}",
                angle,
                snapped
            );
            let distance = (normalize_angle(angle) - snapped).abs();
            assert!(distance <= 45.0, "{} is {} away from {}", angle, distance, snapped);
            angle += 7.5;
        }
    }
}
