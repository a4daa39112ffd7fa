// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extrema, inflection points and curvature.

use arrayvec::ArrayVec;

use crate::common::bernstein_roots;
use crate::{Bezier, Vec2, MAX_EXTREMA};

/// Guard for vanishing leading coefficients in the inflection quadratic.
const EPSILON: f64 = 1e-12;

/// Evaluate a small control net of vectors at `t`.
fn eval_net(net: &[Vec2], t: f64) -> Vec2 {
    let mt = 1.0 - t;
    match *net {
        [v0] => v0,
        [v0, v1] => v0.lerp(v1, t),
        [v0, v1, v2] => v0 * (mt * mt) + v1 * (2.0 * mt * t) + v2 * (t * t),
        _ => Vec2::ZERO,
    }
}

impl Bezier {
    /// Parameter values of the curve's extrema, sorted ascending.
    ///
    /// The x and y components of both the velocity and the acceleration
    /// nets are root-found as scalar Béziers and the roots unioned, so
    /// the result includes curvature extrema (acceleration
    /// zero-crossings), not only axis-aligned turning points. Values
    /// outside [0, 1] are discarded and near-duplicates collapsed.
    pub fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result: ArrayVec<f64, MAX_EXTREMA> = ArrayVec::new();
        let ladder = self.derivative_ladder();
        for level in 0..2 {
            if let Some(net) = ladder.level(level) {
                let xs: ArrayVec<f64, 3> = net.iter().map(|v| v.x).collect();
                let ys: ArrayVec<f64, 3> = net.iter().map(|v| v.y).collect();
                for &t in bernstein_roots(&xs).iter().chain(bernstein_roots(&ys).iter()) {
                    result.push(t);
                }
            }
        }
        result.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut deduped = ArrayVec::new();
        for t in result {
            if deduped.last().map_or(true, |&prev| t - prev > EPSILON) {
                deduped.push(t);
            }
        }
        deduped
    }

    /// Parameter values of the curve's inflection points, sorted
    /// ascending.
    ///
    /// Only a cubic can have inflections; at most two exist. Quadratic
    /// and linear curves always return an empty set, as does a cubic
    /// whose aligned form degenerates to a lower order.
    pub fn inflections(&self) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        if self.degree() != 3 {
            return result;
        }
        let pts = self.points();
        // Align the curve so the start maps to the origin and the end
        // onto the positive x-axis; this removes the rotation and
        // translation dependence from the inflection condition.
        let angle = (pts[3] - pts[0]).atan2();
        let (sin_a, cos_a) = angle.sin_cos();
        let align = |i: usize| {
            let v = pts[i] - pts[0];
            Vec2::new(v.x * cos_a + v.y * sin_a, -v.x * sin_a + v.y * cos_a)
        };
        let p1 = align(1);
        let p2 = align(2);
        let p3 = align(3);

        // https://pomax.github.io/bezierinfo/#inflections
        let a = p2.x * p1.y;
        let b = p3.x * p1.y;
        let c = p1.x * p2.y;
        let d = p3.x * p2.y;
        let v1 = 18.0 * (-3.0 * a + 2.0 * b + 3.0 * c - d);
        let v2 = 18.0 * (3.0 * a - b - 3.0 * c);
        let v3 = 18.0 * (c - a);
        if v1.abs() < EPSILON {
            // The quadratic degenerates; no well-defined inflections.
            return result;
        }
        // A negative discriminant is clamped rather than rejected, so a
        // grazing (tangent) configuration reports its double root.
        let sqrt = (v2 * v2 - 4.0 * v1 * v3).max(0.0).sqrt();
        let den = 2.0 * v1;
        for root in [(sqrt - v2) / den, -(v2 + sqrt) / den] {
            if (0.0..=1.0).contains(&root) {
                result.push(root);
            }
        }
        if result.len() == 2 {
            if result[0] > result[1] {
                result.swap(0, 1);
            }
            if result[1] - result[0] < EPSILON {
                result.truncate(1);
            }
        }
        result
    }

    /// The signed curvature at parameter `t`.
    ///
    /// Zero exactly at an inflection point; undefined (`NaN`) where the
    /// derivative vanishes.
    pub fn curvature(&self, t: f64) -> f64 {
        let d = self.deriv(t);
        let ladder = self.derivative_ladder();
        let d2 = ladder.level(1).map_or(Vec2::ZERO, |net| eval_net(net, t));
        d2.cross(d) * d.hypot2().powf(-1.5)
    }
}
