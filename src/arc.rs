// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical arcs, in center and SVG endpoint parameterization.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::{Point, Vec2};

/// A single elliptical arc segment, in center parameterization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The arc's centre point.
    pub center: Point,
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation`.
    pub radii: Vec2,
    /// The start angle in radians.
    pub start_angle: f64,
    /// The angle between the start and end of the arc, in radians.
    ///
    /// Its magnitude never exceeds 2π; its sign encodes the sweep
    /// direction.
    pub sweep_angle: f64,
    /// How much the arc is rotated, in radians.
    pub x_rotation: f64,
}

/// An elliptical arc in the SVG endpoint parameterization, as used by
/// the path `A` command (SVG 1.1 §8.3.8).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgArc {
    /// The arc's start point.
    pub from: Point,
    /// The arc's end point.
    pub to: Point,
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation`.
    pub radii: Vec2,
    /// How much the arc is rotated, in radians.
    pub x_rotation: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
}

impl Arc {
    /// Create a new `Arc`.
    #[inline]
    pub fn new(
        center: impl Into<Point>,
        radii: impl Into<Vec2>,
        start_angle: f64,
        sweep_angle: f64,
        x_rotation: f64,
    ) -> Self {
        Self {
            center: center.into(),
            radii: radii.into(),
            start_angle,
            sweep_angle,
            x_rotation,
        }
    }

    /// The point on the arc at parameter `t` in [0, 1].
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        let angle = self.start_angle + self.sweep_angle * t;
        self.center + sample_ellipse(self.radii, self.x_rotation, angle)
    }

    /// Returns a copy of this `Arc` in the opposite direction.
    ///
    /// The new `Arc` will sweep towards the original `Arc`s
    /// start angle.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> Arc {
        Self {
            center: self.center,
            radii: self.radii,
            start_angle: self.start_angle + self.sweep_angle,
            sweep_angle: -self.sweep_angle,
            x_rotation: self.x_rotation,
        }
    }

    /// Convert an SVG endpoint arc to center parameterization, per the
    /// endpoint-to-center algorithm of SVG 1.1 §8.3.8.
    ///
    /// Radii are taken by absolute value and scaled up, in a single
    /// pass, when the chord would not otherwise fit; values that would
    /// reach a square root negative are clamped to zero first. Returns
    /// `None` for a zero-area arc: coincident endpoints, a vanishing
    /// radius, or a degenerate angle denominator.
    pub fn from_svg_arc(arc: &SvgArc) -> Option<Arc> {
        let mut rx = arc.radii.x.abs();
        let mut ry = arc.radii.y.abs();
        if arc.from == arc.to || rx == 0.0 || ry == 0.0 {
            return None;
        }

        let (sin_phi, cos_phi) = arc.x_rotation.sin_cos();

        // F.6.5.1: half chord, rotated into the ellipse-aligned frame.
        let d = (arc.from - arc.to) * 0.5;
        let x1 = cos_phi * d.x + sin_phi * d.y;
        let y1 = -sin_phi * d.x + cos_phi * d.y;

        // F.6.6: scale the radii up if the chord does not fit.
        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // F.6.5.2: center in the aligned frame.
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let den = rx2 * y1 * y1 + ry2 * x1 * x1;
        if den == 0.0 {
            return None;
        }
        let sign = if arc.large_arc == arc.sweep { -1.0 } else { 1.0 };
        let coef = sign * ((rx2 * ry2 - den) / den).max(0.0).sqrt();
        let cx1 = coef * (rx * y1 / ry);
        let cy1 = coef * (-ry * x1 / rx);

        // F.6.5.3: back to the original frame, about the chord midpoint.
        let mid = arc.from.midpoint(arc.to);
        let center = Point::new(
            cos_phi * cx1 - sin_phi * cy1 + mid.x,
            sin_phi * cx1 + cos_phi * cy1 + mid.y,
        );

        // F.6.5.5 and F.6.5.6: start and sweep angles in the unit frame.
        let u = Vec2::new((x1 - cx1) / rx, (y1 - cy1) / ry);
        let v = Vec2::new((-x1 - cx1) / rx, (-y1 - cy1) / ry);
        let start_angle = directed_angle(Vec2::new(1.0, 0.0), u);
        let mut sweep_angle = directed_angle(u, v);
        if !arc.sweep && sweep_angle > 0.0 {
            sweep_angle -= 2.0 * PI;
        } else if arc.sweep && sweep_angle < 0.0 {
            sweep_angle += 2.0 * PI;
        }

        Some(Arc {
            center,
            radii: Vec2::new(rx, ry),
            start_angle: start_angle % (2.0 * PI),
            sweep_angle: sweep_angle % (2.0 * PI),
            x_rotation: sin_phi.atan2(cos_phi),
        })
    }

    /// Convert to the SVG endpoint parameterization.
    ///
    /// This is a direct construction: the endpoints are the arc's sample
    /// points, the large-arc flag records whether the sweep magnitude
    /// exceeds π, and the sweep flag records the sweep sign.
    pub fn to_svg_arc(&self) -> SvgArc {
        SvgArc {
            from: self.sample(0.0),
            to: self.sample(1.0),
            radii: self.radii,
            x_rotation: self.x_rotation,
            large_arc: self.sweep_angle.abs() > PI,
            sweep: self.sweep_angle > 0.0,
        }
    }

    /// Converts the arc into a series of cubic Bézier segments.
    ///
    /// The closure `p` is invoked with the two control points and the
    /// end point of each segment; the number of segments is chosen so
    /// the approximation error stays within `tolerance`.
    pub fn to_cubic_beziers<P>(self, tolerance: f64, mut p: P)
    where
        P: FnMut(Point, Point, Point),
    {
        let scaled_err = self.radii.x.max(self.radii.y) / tolerance;
        // Number of subdivisions per circle based on error tolerance.
        // Note: this may slightly underestimate the error for quadrants.
        let n_err = (1.1163 * scaled_err).powf(1.0 / 6.0).max(3.999_999);
        let n = (n_err * self.sweep_angle.abs() * (1.0 / (2.0 * PI)))
            .ceil()
            .max(1.0);
        let angle_step = self.sweep_angle / n;
        let arm_len = (4.0 / 3.0) * (0.25 * angle_step).tan();
        let mut angle0 = self.start_angle;
        let mut p0 = self.sample(0.0);

        for _ in 0..n as usize {
            let angle1 = angle0 + angle_step;
            let p1 = p0 + sample_ellipse(self.radii, self.x_rotation, angle0 + FRAC_PI_2) * arm_len;
            let p3 = self.center + sample_ellipse(self.radii, self.x_rotation, angle1);
            let p2 = p3 - sample_ellipse(self.radii, self.x_rotation, angle1 + FRAC_PI_2) * arm_len;
            p(p1, p2, p3);

            angle0 = angle1;
            p0 = p3;
        }
    }
}

/// Take the ellipse radii, how the radii are rotated, and the sweep angle,
/// and return the point on the ellipse at that angle, relative to its
/// center.
fn sample_ellipse(radii: Vec2, x_rotation: f64, angle: f64) -> Vec2 {
    let (sin_rot, cos_rot) = x_rotation.sin_cos();
    let u = radii.x * angle.cos();
    let v = radii.y * angle.sin();
    Vec2::new(u * cos_rot - v * sin_rot, u * sin_rot + v * cos_rot)
}

/// The signed angle from `a` to `b`, in (−π, π].
fn directed_angle(a: Vec2, b: Vec2) -> f64 {
    a.cross(b).atan2(a.dot(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn semicircle_endpoint_to_center() {
        let svg = SvgArc {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 0.0),
            radii: Vec2::new(5.0, 5.0),
            x_rotation: 0.0,
            large_arc: false,
            sweep: true,
        };
        let arc = Arc::from_svg_arc(&svg).unwrap();
        assert_approx(arc.center.x, 5.0);
        assert_approx(arc.center.y, 0.0);
        assert_approx(arc.radii.x, 5.0);
        assert_approx(arc.radii.y, 5.0);
        assert_approx(arc.start_angle, PI);
        assert_approx(arc.sweep_angle, PI);
        // The recovered arc traces the same endpoints.
        assert!(arc.sample(0.0).distance(svg.from) < 1e-9);
        assert!(arc.sample(1.0).distance(svg.to) < 1e-9);
    }

    #[test]
    fn sweep_flag_selects_direction() {
        let mut svg = SvgArc {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 0.0),
            radii: Vec2::new(5.0, 5.0),
            x_rotation: 0.0,
            large_arc: false,
            sweep: false,
        };
        let ccw = Arc::from_svg_arc(&svg).unwrap();
        assert!(ccw.sweep_angle < 0.0);
        svg.sweep = true;
        let cw = Arc::from_svg_arc(&svg).unwrap();
        assert!(cw.sweep_angle > 0.0);
        assert_approx(ccw.sweep_angle, -cw.sweep_angle);
    }

    #[test]
    fn small_radii_scale_up_to_span_chord() {
        // Radii of 1 cannot span a chord of length 10 and must scale.
        let svg = SvgArc {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 0.0),
            radii: Vec2::new(1.0, 1.0),
            x_rotation: 0.0,
            large_arc: false,
            sweep: true,
        };
        let arc = Arc::from_svg_arc(&svg).unwrap();
        assert_approx(arc.radii.x, 5.0);
        assert_approx(arc.radii.y, 5.0);
        assert!(arc.sample(0.0).distance(svg.from) < 1e-9);
        assert!(arc.sample(1.0).distance(svg.to) < 1e-9);
    }

    #[test]
    fn degenerate_arcs_are_rejected() {
        let mut svg = SvgArc {
            from: Point::new(3.0, 4.0),
            to: Point::new(3.0, 4.0),
            radii: Vec2::new(5.0, 5.0),
            x_rotation: 0.0,
            large_arc: false,
            sweep: true,
        };
        assert!(Arc::from_svg_arc(&svg).is_none());
        svg.to = Point::new(9.0, 4.0);
        svg.radii = Vec2::new(0.0, 5.0);
        assert!(Arc::from_svg_arc(&svg).is_none());
    }

    #[test]
    fn round_trip_through_endpoint_form() {
        let cases = [
            Arc::new((3.0, 4.0), (2.0, 1.0), 0.3, 1.7, 0.5),
            Arc::new((0.0, 0.0), (5.0, 5.0), 0.0, FRAC_PI_2, 0.0),
            Arc::new((-2.0, 7.5), (4.0, 2.5), -1.2, -2.0, 1.1),
            Arc::new((10.0, -3.0), (6.0, 3.0), 2.0, 4.0, -0.7),
            Arc::new((1.0, 1.0), (3.0, 8.0), -2.5, -5.0, 0.0),
        ];
        for arc in cases {
            let recovered = Arc::from_svg_arc(&arc.to_svg_arc()).unwrap();
            assert_approx(recovered.center.x, arc.center.x);
            assert_approx(recovered.center.y, arc.center.y);
            assert_approx(recovered.radii.x, arc.radii.x);
            assert_approx(recovered.radii.y, arc.radii.y);
            assert_approx(recovered.start_angle, arc.start_angle);
            assert_approx(recovered.sweep_angle, arc.sweep_angle);
            assert_approx(recovered.x_rotation, arc.x_rotation);
        }
    }

    #[test]
    fn reversed_arc() {
        let a = Arc::new((0., 0.), (1., 0.5), 0., PI, 0.);
        let f = a.reversed();

        assert_eq!(a.center, f.center);
        assert_eq!(a.radii, f.radii);
        assert_eq!(a.x_rotation, f.x_rotation);
        assert_eq!(a.sweep_angle, -f.sweep_angle);
        assert_eq!(a, f.reversed());
    }

    #[test]
    fn cubic_approximation_hits_arc_points() {
        let arc = Arc::new((0.0, 0.0), (10.0, 10.0), 0.0, PI, 0.0);
        let mut last = arc.sample(0.0);
        let mut count = 0;
        arc.to_cubic_beziers(0.001, |_p1, _p2, p3| {
            last = p3;
            count += 1;
        });
        assert!(count >= 2);
        // The subdivision ends exactly at the arc's end point.
        assert!(last.distance(arc.sample(1.0)) < 1e-9);
    }
}
