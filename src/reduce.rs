// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decomposition of a curve into simple sub-curves.

use crate::Bezier;

/// The fine-pass window growth step, in the sub-curve's own parameter
/// space.
const STEP: f64 = 0.01;

/// Boundary values closer than this are collapsed in the coarse pass.
const EPSILON: f64 = 1e-12;

/// A sub-curve emitted by [`Bezier::reduce`], known to satisfy
/// [`Bezier::is_simple`].
#[derive(Clone, Debug)]
pub struct SimpleSegment {
    /// The sub-curve, re-parameterized to its own [0, 1].
    pub curve: Bezier,
    /// Parameter in the parent curve where this segment starts.
    pub t0: f64,
    /// Parameter in the parent curve where this segment ends.
    pub t1: f64,
}

impl Bezier {
    /// Decompose the curve into an ordered, gap-free sequence of simple
    /// sub-curves.
    ///
    /// Pass 1 splits coarsely at the curve's extrema; pass 2 walks each
    /// coarse piece with a fixed step, growing a window while it stays
    /// simple and backing off one step when it stops being so.
    ///
    /// An empty result means the curve could not be reduced at the step
    /// resolution at all — even segments found before the failure are
    /// discarded. Callers must not conflate that with a curve that is
    /// already simple, which reduces to a single segment. Whenever the
    /// result is non-empty, consecutive segments share endpoints and the
    /// segments jointly cover [0, 1].
    pub fn reduce(&self) -> Vec<SimpleSegment> {
        // Pass 1: coarse split on extrema, bracketed by 0 and 1.
        let extrema = self.extrema();
        let mut bounds: Vec<f64> = Vec::with_capacity(extrema.len() + 2);
        bounds.push(0.0);
        for &t in &extrema {
            if t > EPSILON && t < 1.0 - EPSILON {
                bounds.push(t);
            }
        }
        bounds.push(1.0);

        let mut pass1: Vec<(Bezier, f64, f64)> = Vec::with_capacity(bounds.len() - 1);
        for w in bounds.windows(2) {
            pass1.push((self.subsegment(w[0], w[1]), w[0], w[1]));
        }

        // Pass 2: fine split on simplicity.
        let mut result = Vec::new();
        for (piece, p0, p1) in &pass1 {
            let span = p1 - p0;
            let mut u1 = 0.0;
            let mut done = false;
            while !done {
                let mut k = 1usize;
                loop {
                    let u2 = (u1 + k as f64 * STEP).min(1.0);
                    if !piece.subsegment(u1, u2).is_simple() {
                        if k < 2 {
                            // Not even a single step can be made simple;
                            // the whole operation fails.
                            return Vec::new();
                        }
                        let u2 = u1 + (k - 1) as f64 * STEP;
                        result.push(SimpleSegment {
                            curve: piece.subsegment(u1, u2),
                            t0: p0 + u1 * span,
                            t1: p0 + u2 * span,
                        });
                        u1 = u2;
                        break;
                    }
                    if u2 >= 1.0 {
                        result.push(SimpleSegment {
                            curve: piece.subsegment(u1, 1.0),
                            t0: p0 + u1 * span,
                            t1: *p1,
                        });
                        done = true;
                        break;
                    }
                    k += 1;
                }
            }
        }
        result
    }
}
