// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc-length reparameterization of point sequences.

use crate::{CurveError, Point};

/// An ordered point sequence, optionally closed into a contour.
///
/// A closed sequence treats the implicit edge from the last point back
/// to the first as part of the path. The sequence is an immutable
/// value; derived data such as [`ArcLengths`] is recomputed on demand,
/// and callers that mutate-by-rebuilding own any memoization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    points: Vec<Point>,
    closed: bool,
}

/// The cumulative arc-length table over a polyline's edges.
///
/// One entry per edge: the edge's length and the cumulative length at
/// the edge's end. Cumulative values are non-decreasing.
#[derive(Clone, Debug)]
pub struct ArcLengths {
    entries: Vec<(f64, f64)>,
}

impl Polyline {
    /// Create a polyline from an ordered point sequence.
    ///
    /// Fewer than 2 points cannot form an edge and are rejected.
    pub fn new(points: Vec<Point>, closed: bool) -> Result<Polyline, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints(points.len()));
        }
        Ok(Polyline { points, closed })
    }

    /// The points of the sequence.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the sequence closes back onto its first point.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The number of edges, including the implicit closing edge of a
    /// closed contour.
    #[inline]
    pub fn edge_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Build the cumulative arc-length table for this sequence.
    pub fn arc_lengths(&self) -> ArcLengths {
        let n = self.points.len();
        let mut entries = Vec::with_capacity(self.edge_count());
        let mut total = 0.0;
        for i in 0..self.edge_count() {
            let len = self.points[i].distance(self.points[(i + 1) % n]);
            total += len;
            entries.push((len, total));
        }
        ArcLengths { entries }
    }

    /// The total length of the sequence, closing edge included for a
    /// closed contour.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.arc_lengths().total()
    }

    /// The point at the normalized length fraction `t` along the
    /// sequence.
    ///
    /// `t` is clamped to [0, 1]; 0 is the first point and 1 the last
    /// point of an open path, or the first point again for a closed
    /// contour. This rebuilds the arc-length table; use
    /// [`Polyline::point_at_fraction_with`] to reuse a memoized table.
    #[inline]
    pub fn point_at_fraction(&self, t: f64) -> Point {
        self.point_at_fraction_with(&self.arc_lengths(), t)
    }

    /// The point at the normalized length fraction `t`, using a
    /// previously built table.
    ///
    /// The table must have been built from this polyline; it is
    /// invalidated by any change to the point sequence.
    pub fn point_at_fraction_with(&self, lengths: &ArcLengths, t: f64) -> Point {
        let n = self.points.len();
        if t <= 0.0 {
            return self.points[0];
        }
        if t >= 1.0 {
            // A closed contour's end coincides with its start.
            return if self.closed {
                self.points[0]
            } else {
                self.points[n - 1]
            };
        }
        let target = lengths.total() * t;
        // Last edge whose cumulative length stays at or below the
        // target; the point falls inside the edge after it.
        let mut edge = 0;
        let mut cum_start = 0.0;
        for (i, &(_, cum)) in lengths.entries.iter().enumerate().rev() {
            if cum <= target {
                if i + 1 >= lengths.entries.len() {
                    // Rounding placed the target at or past the final
                    // cumulative value.
                    return self.point_at_fraction_with(lengths, 1.0);
                }
                edge = i + 1;
                cum_start = cum;
                break;
            }
        }
        let seg_len = lengths.entries[edge].0;
        let local = if seg_len > 0.0 {
            (target - cum_start) / seg_len
        } else {
            0.0
        };
        let a = self.points[edge];
        let b = self.points[(edge + 1) % n];
        a.lerp(b, local)
    }
}

impl ArcLengths {
    /// The cumulative length at the end of the last edge.
    #[inline]
    pub fn total(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.1)
    }

    /// The per-edge (length, cumulative length) entries.
    #[inline]
    pub fn entries(&self) -> &[(f64, f64)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_l_path() -> Polyline {
        Polyline::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
            false,
        )
        .unwrap()
    }

    #[test]
    fn rejects_degenerate_sequences() {
        assert_eq!(
            Polyline::new(vec![], false).unwrap_err(),
            CurveError::TooFewPoints(0)
        );
        assert_eq!(
            Polyline::new(vec![Point::ZERO], true).unwrap_err(),
            CurveError::TooFewPoints(1)
        );
    }

    #[test]
    fn table_is_cumulative() {
        let p = open_l_path();
        let lengths = p.arc_lengths();
        assert_eq!(lengths.entries(), &[(10.0, 10.0), (10.0, 20.0)]);
        assert_eq!(lengths.total(), 20.0);
    }

    #[test]
    fn interpolates_open_path() {
        let p = open_l_path();
        assert_eq!(p.point_at_fraction(0.0), Point::new(0.0, 0.0));
        // Half the total length lands exactly on the corner.
        assert_eq!(p.point_at_fraction(0.5), Point::new(10.0, 0.0));
        assert_eq!(p.point_at_fraction(1.0), Point::new(10.0, 10.0));
        assert_eq!(p.point_at_fraction(0.25), Point::new(5.0, 0.0));
        assert_eq!(p.point_at_fraction(0.75), Point::new(10.0, 5.0));
    }

    #[test]
    fn clamps_out_of_range_fractions() {
        let p = open_l_path();
        assert_eq!(p.point_at_fraction(-0.5), Point::new(0.0, 0.0));
        assert_eq!(p.point_at_fraction(1.5), Point::new(10.0, 10.0));
    }

    #[test]
    fn closed_contour_wraps() {
        let p = Polyline::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            true,
        )
        .unwrap();
        assert_eq!(p.total_length(), 40.0);
        assert_eq!(p.point_at_fraction(1.0), Point::new(0.0, 0.0));
        // Mid-way along the implicit closing edge.
        assert_eq!(p.point_at_fraction(0.875), Point::new(0.0, 5.0));
    }

    #[test]
    fn reuses_memoized_table() {
        let p = open_l_path();
        let lengths = p.arc_lengths();
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert_eq!(
                p.point_at_fraction(t),
                p.point_at_fraction_with(&lengths, t)
            );
        }
    }

    #[test]
    fn zero_length_edges_are_skipped() {
        let p = Polyline::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
            ],
            false,
        )
        .unwrap();
        assert_eq!(p.point_at_fraction(0.5), Point::new(5.0, 0.0));
    }
}
