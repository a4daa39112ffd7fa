// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier segments of degree 1 to 3, stored as their control polygon.

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::{CurveError, Point, Vec2};

/// A Bézier segment of degree 1 to 3, stored as its control polygon.
///
/// The control polygon is an immutable value; all analysis operations
/// derive fresh data from it. Callers that want memoization (extrema,
/// reduction) own the cache and its invalidation.
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier {
    points: ArrayVec<Point, 4>,
}

impl Bezier {
    /// Create a line segment.
    #[inline]
    pub fn line<V: Into<Point>>(p0: V, p1: V) -> Bezier {
        let mut points = ArrayVec::new();
        points.push(p0.into());
        points.push(p1.into());
        Bezier { points }
    }

    /// Create a quadratic Bézier segment.
    #[inline]
    pub fn quad<V: Into<Point>>(p0: V, p1: V, p2: V) -> Bezier {
        let mut points = ArrayVec::new();
        points.push(p0.into());
        points.push(p1.into());
        points.push(p2.into());
        Bezier { points }
    }

    /// Create a cubic Bézier segment.
    #[inline]
    pub fn cubic<V: Into<Point>>(p0: V, p1: V, p2: V, p3: V) -> Bezier {
        let mut points = ArrayVec::new();
        points.push(p0.into());
        points.push(p1.into());
        points.push(p2.into());
        points.push(p3.into());
        Bezier { points }
    }

    /// Create a segment from a slice of 2 to 4 control points.
    pub fn from_points(points: &[Point]) -> Result<Bezier, CurveError> {
        if !(2..=4).contains(&points.len()) {
            return Err(CurveError::InvalidControlPolygon(points.len()));
        }
        Ok(Bezier {
            points: points.iter().copied().collect(),
        })
    }

    /// The control points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The curve's degree; one less than the number of control points.
    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1], but any real value is
    /// accepted and extrapolates the curve.
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        match *self.points.as_slice() {
            [p0, p1] => p0.lerp(p1, t),
            [p0, p1, p2] => {
                (p0.to_vec2() * (mt * mt) + (p1.to_vec2() * (mt * 2.0) + p2.to_vec2() * t) * t)
                    .to_point()
            }
            [p0, p1, p2, p3] => (p0.to_vec2() * (mt * mt * mt)
                + (p1.to_vec2() * (mt * mt * 3.0) + (p2.to_vec2() * (mt * 3.0) + p3.to_vec2() * t) * t)
                    * t)
                .to_point(),
            _ => unreachable!(),
        }
    }

    /// The derivative vector at parameter `t`, in closed form.
    ///
    /// This is the analytic equivalent of evaluating the first level of
    /// the derivative ladder at `t`, and is preferred for performance.
    pub fn deriv(&self, t: f64) -> Vec2 {
        let mt = 1.0 - t;
        match *self.points.as_slice() {
            [p0, p1] => p1 - p0,
            [p0, p1, p2] => (p1 - p0) * (2.0 * mt) + (p2 - p1) * (2.0 * t),
            [p0, p1, p2, p3] => {
                (p1 - p0) * (3.0 * mt * mt)
                    + (p2 - p1) * (6.0 * t * mt)
                    + (p3 - p2) * (3.0 * t * t)
            }
            _ => unreachable!(),
        }
    }

    /// The unit tangent vector at parameter `t`.
    ///
    /// A zero-length derivative (a cusp) produces `NaN` components; the
    /// caller owns that case.
    #[inline]
    pub fn tangent(&self, t: f64) -> Vec2 {
        self.deriv(t).normalize()
    }

    /// The unit normal vector at parameter `t`: the unit tangent rotated
    /// by −90°, i.e. (−dy, dx) / |d|.
    ///
    /// A zero-length derivative (a cusp) produces `NaN` components; the
    /// caller owns that case.
    #[inline]
    pub fn normal(&self, t: f64) -> Vec2 {
        self.tangent(t).turn_90()
    }

    /// The full de Casteljau hull at parameter `t`.
    ///
    /// Starting from the control points, every adjacent pair is
    /// interpolated at `t`, and every point produced at every level is
    /// appended, ending with the on-curve point. A cubic yields 10
    /// points; the hull's diagonals are the control polygons of the two
    /// halves of the split at `t`.
    pub fn hull(&self, t: f64) -> SmallVec<[Point; 10]> {
        let mut hull: SmallVec<[Point; 10]> = SmallVec::from_slice(&self.points);
        let mut start = 0;
        let mut len = self.points.len();
        while len > 1 {
            for i in 0..len - 1 {
                let p = hull[start + i].lerp(hull[start + i + 1], t);
                hull.push(p);
            }
            start += len;
            len -= 1;
        }
        hull
    }

    /// Split the curve at `t`, returning the two control polygons read
    /// off the hull's diagonals, each re-parameterized to its own [0, 1].
    pub fn split(&self, t: f64) -> (Bezier, Bezier) {
        let hull = self.hull(t);
        let n = self.points.len();
        let mut left = ArrayVec::new();
        let mut right = ArrayVec::new();
        let mut start = 0;
        for len in (1..=n).rev() {
            left.push(hull[start]);
            right.push(hull[start + len - 1]);
            start += len;
        }
        right.reverse();
        (Bezier { points: left }, Bezier { points: right })
    }

    /// The sub-curve over `[t0, t1]`, re-parameterized to its own [0, 1].
    pub fn subsegment(&self, t0: f64, t1: f64) -> Bezier {
        if t0 == 0.0 {
            return self.split(t1).0;
        }
        let tail = self.split(t0).1;
        if t1 == 1.0 {
            return tail;
        }
        tail.split((t1 - t0) / (1.0 - t0)).0
    }

    /// Subdivide into halves.
    #[inline]
    pub fn subdivide(&self) -> (Bezier, Bezier) {
        self.split(0.5)
    }
}
