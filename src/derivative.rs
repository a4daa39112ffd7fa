// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ladder of derivative control nets for a control polygon.

use smallvec::SmallVec;

use crate::{Bezier, Point, Vec2};

/// The successive derivative control nets of a control polygon.
///
/// Level 0 is the velocity net: for an input of `m` points it has
/// `m − 1` entries, each `(m − 1) · (P[j+1] − P[j])`. Level 1 is the
/// acceleration net, scaled by `m − 2`, and so on down to a single
/// entry. Each level, read as a Bézier over vectors, is the exact
/// derivative of the previous one.
#[derive(Clone, Debug)]
pub struct DerivativeLadder {
    levels: SmallVec<[SmallVec<[Vec2; 4]>; 3]>,
}

impl DerivativeLadder {
    /// Build the ladder for an ordered list of control points.
    ///
    /// An input of one point (or none) has no derivative and yields an
    /// empty ladder.
    pub fn new(points: &[Point]) -> DerivativeLadder {
        let mut levels = SmallVec::new();
        let mut current: SmallVec<[Vec2; 4]> = points.iter().map(|p| p.to_vec2()).collect();
        while current.len() > 1 {
            let scale = (current.len() - 1) as f64;
            let next: SmallVec<[Vec2; 4]> = current
                .windows(2)
                .map(|w| (w[1] - w[0]) * scale)
                .collect();
            levels.push(next.clone());
            current = next;
        }
        DerivativeLadder { levels }
    }

    /// The number of levels in the ladder.
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the ladder has no levels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The control net at the given level, if present.
    ///
    /// Level 0 is velocity, level 1 acceleration.
    #[inline]
    pub fn level(&self, level: usize) -> Option<&[Vec2]> {
        self.levels.get(level).map(|l| l.as_slice())
    }

    /// Iterate over the levels, outermost derivative first.
    pub fn levels(&self) -> impl Iterator<Item = &[Vec2]> + '_ {
        self.levels.iter().map(|l| l.as_slice())
    }
}

impl Bezier {
    /// The derivative ladder of this curve's control polygon.
    #[inline]
    pub fn derivative_ladder(&self) -> DerivativeLadder {
        DerivativeLadder::new(self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_lengths_decrease_to_one() {
        let c = Bezier::cubic((0.0, 0.0), (1.0, 2.0), (3.0, -1.0), (4.0, 0.0));
        let ladder = c.derivative_ladder();
        assert_eq!(ladder.len(), 3);
        let lens: Vec<usize> = ladder.levels().map(|l| l.len()).collect();
        assert_eq!(lens, vec![3, 2, 1]);
    }

    #[test]
    fn velocity_level_is_scaled_differences() {
        let c = Bezier::cubic((0.0, 0.0), (1.0, 2.0), (3.0, -1.0), (4.0, 0.0));
        let ladder = c.derivative_ladder();
        let v = ladder.level(0).unwrap();
        assert_eq!(v[0], Vec2::new(3.0, 6.0));
        assert_eq!(v[1], Vec2::new(6.0, -9.0));
        assert_eq!(v[2], Vec2::new(3.0, 3.0));
    }

    #[test]
    fn velocity_matches_closed_form_deriv() {
        let c = Bezier::cubic((3.1, 4.1), (5.9, 2.6), (5.3, 5.8), (9.7, 7.9));
        let ladder = c.derivative_ladder();
        let v = ladder.level(0).unwrap();
        let n = 8;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            // Evaluate the velocity net as a quadratic Bézier over vectors.
            let mt = 1.0 - t;
            let d = v[0] * (mt * mt) + v[1] * (2.0 * mt * t) + v[2] * (t * t);
            assert!((d - c.deriv(t)).hypot() < 1e-12);
        }
    }

    #[test]
    fn degenerate_inputs() {
        assert!(DerivativeLadder::new(&[]).is_empty());
        assert!(DerivativeLadder::new(&[Point::ZERO]).is_empty());
        let ladder = DerivativeLadder::new(&[Point::ZERO, Point::new(1.0, 0.0)]);
        assert_eq!(ladder.len(), 1);
        assert_eq!(ladder.level(0).unwrap(), &[Vec2::new(1.0, 0.0)]);
    }
}
